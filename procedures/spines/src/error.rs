use thiserror::Error;

/// Rejected decoration parameters. Raised before any segment is touched.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("`{field}` must be greater than zero, got {value}")]
	NonPositive { field: &'static str, value: f32 },
	#[error("`density_per_unit_length` must not be negative, got {0}")]
	NegativeDensity(f32),
	#[error("`{field}` must be finite")]
	NonFinite { field: &'static str },
	#[error("`head_radius` ({head_radius}) must not exceed `neck_length` ({neck_length})")]
	HeadOverhangsBase { head_radius: f32, neck_length: f32 },
	#[error("`instancing_threshold` must be at least 1")]
	ZeroThreshold,
	#[error("failed to parse decoration config: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Errors that abort a whole decoration pass.
#[derive(Debug, Error)]
pub enum DecorationError {
	#[error("invalid decoration config: {0}")]
	Config(#[from] ConfigError),
	#[error("spine material `{name}` could not be resolved")]
	MaterialNotFound { name: String },
}
