use crate::error::ConfigError;
use crate::segment::Segment;
use serde::{Deserialize, Serialize};

/// Above this many spines a segment gets one parametric batch instead of explicit placements.
pub const DEFAULT_INSTANCING_THRESHOLD: u32 = 50;

/// How the random stream is shared between segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamMode {
	/// One stream for the whole pass, consumed in segment order.
	#[default]
	Sequential,
	/// An independent stream per segment, derived from the seed and the segment index.
	/// Segments are planned in parallel.
	PerSegment,
}

/// Density and shape configuration for one decoration pass.
///
/// Lengths share the unit of the skeleton coordinates; the density is spines per that unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecorationConfig {
	pub density_per_unit_length: f32,
	pub neck_length: f32,
	pub neck_radius: f32,
	pub head_radius: f32,
	/// Name handed to the host's material resolver.
	pub material: String,
	pub seed: u64,
	#[serde(default)]
	pub on_apical_only: bool,
	#[serde(default = "default_on_basal")]
	pub on_basal: bool,
	#[serde(default = "default_instancing_threshold")]
	pub instancing_threshold: u32,
	#[serde(default)]
	pub stream: StreamMode,
}

fn default_on_basal() -> bool {
	true
}

fn default_instancing_threshold() -> u32 {
	DEFAULT_INSTANCING_THRESHOLD
}

impl DecorationConfig {
	pub fn new(material: impl Into<String>, seed: u64) -> Self {
		Self {
			density_per_unit_length: 1.0,
			neck_length: 1.0,
			neck_radius: 0.1,
			head_radius: 0.3,
			material: material.into(),
			seed,
			on_apical_only: false,
			on_basal: true,
			instancing_threshold: DEFAULT_INSTANCING_THRESHOLD,
			stream: StreamMode::Sequential,
		}
	}

	/// Parses and validates a TOML table. Missing required keys are reported by name.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	pub fn with_density(mut self, density_per_unit_length: f32) -> Self {
		self.density_per_unit_length = density_per_unit_length;
		self
	}

	pub fn with_neck(mut self, neck_length: f32, neck_radius: f32) -> Self {
		self.neck_length = neck_length;
		self.neck_radius = neck_radius;
		self
	}

	pub fn with_head_radius(mut self, head_radius: f32) -> Self {
		self.head_radius = head_radius;
		self
	}

	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = seed;
		self
	}

	pub fn with_apical_only(mut self, on_apical_only: bool) -> Self {
		self.on_apical_only = on_apical_only;
		self
	}

	pub fn with_basal(mut self, on_basal: bool) -> Self {
		self.on_basal = on_basal;
		self
	}

	pub fn with_instancing_threshold(mut self, instancing_threshold: u32) -> Self {
		self.instancing_threshold = instancing_threshold;
		self
	}

	pub fn with_stream(mut self, stream: StreamMode) -> Self {
		self.stream = stream;
		self
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if !self.density_per_unit_length.is_finite() {
			return Err(ConfigError::NonFinite { field: "density_per_unit_length" });
		}
		if self.density_per_unit_length < 0.0 {
			return Err(ConfigError::NegativeDensity(self.density_per_unit_length));
		}

		for (field, value) in [
			("neck_length", self.neck_length),
			("neck_radius", self.neck_radius),
			("head_radius", self.head_radius),
		] {
			if !value.is_finite() {
				return Err(ConfigError::NonFinite { field });
			}
			if value <= 0.0 {
				return Err(ConfigError::NonPositive { field, value });
			}
		}

		// a wider head would reach behind the neck base and out of the wrap box
		if self.head_radius > self.neck_length {
			return Err(ConfigError::HeadOverhangsBase {
				head_radius: self.head_radius,
				neck_length: self.neck_length,
			});
		}

		if self.instancing_threshold == 0 {
			return Err(ConfigError::ZeroThreshold);
		}

		Ok(())
	}

	/// The two compartment filters are independent exclusions.
	pub fn admits<C>(&self, segment: &Segment<C>) -> bool {
		if self.on_apical_only && !segment.is_apical {
			return false;
		}
		if !self.on_basal && segment.is_basal {
			return false;
		}
		true
	}

	/// Expected spine count for a segment of the given length.
	pub fn mean_count(&self, length: f32) -> f64 {
		(self.density_per_unit_length as f64 * length as f64).max(0.0)
	}
}
