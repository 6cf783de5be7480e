use crate::config::DecorationConfig;
use crate::error::DecorationError;
use bevy::prelude::*;
use sdf::{Bounds, CuboidSdf, CylinderSdf, Sdf, SphereSdf, Union};
use std::collections::HashMap;
use std::sync::Arc;

/// Looks up the host's material handle for a configured material name.
pub trait MaterialResolver {
	type Handle: Clone + Send + Sync + 'static;

	fn resolve(&self, name: &str) -> Option<Self::Handle>;
}

impl<H: Clone + Send + Sync + 'static> MaterialResolver for HashMap<String, H> {
	type Handle = H;

	fn resolve(&self, name: &str) -> Option<H> {
		self.get(name).cloned()
	}
}

/// The shared shape of one spine: a neck capped by a spherical head.
///
/// Local `+X` is the outward axis. The neck base sits on the origin, which is also
/// the inner face of the wrap box, and the head is centered one neck length out.
/// Validated configs never let the head reach behind the origin, so the wrap box
/// holds the whole shape.
#[derive(Debug, Clone)]
pub struct SpineTemplate<M> {
	shape: Union<CylinderSdf, SphereSdf>,
	wrap: CuboidSdf,
	material_name: String,
	material: M,
}

impl<M> SpineTemplate<M> {
	pub fn build(config: &DecorationConfig, material: M) -> Self {
		let neck_end = Vec3::X * config.neck_length;
		let neck = CylinderSdf::new(Vec3::ZERO, neck_end, config.neck_radius);
		let head = SphereSdf::new(neck_end, config.head_radius);

		let extent = config.head_radius.max(config.neck_radius);
		let wrap = CuboidSdf::from_corners(
			Vec3::new(0.0, -extent, -extent),
			Vec3::new(config.neck_length + config.head_radius, extent, extent),
		);

		Self { shape: Union::new(neck, head), wrap, material_name: config.material.clone(), material }
	}

	pub fn neck(&self) -> &CylinderSdf {
		&self.shape.a
	}

	pub fn head(&self) -> &SphereSdf {
		&self.shape.b
	}

	pub fn wrap(&self) -> &CuboidSdf {
		&self.wrap
	}

	pub fn material(&self) -> &M {
		&self.material
	}

	pub fn material_name(&self) -> &str {
		&self.material_name
	}
}

impl<M: Send + Sync> Sdf for SpineTemplate<M> {
	fn distance(&self, p: Vec3) -> f32 {
		self.shape.distance(p)
	}

	fn bounds(&self) -> Bounds {
		self.wrap.bounds()
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TemplateKey {
	neck_length: u32,
	neck_radius: u32,
	head_radius: u32,
	material: String,
}

impl TemplateKey {
	fn of(config: &DecorationConfig) -> Self {
		Self {
			neck_length: config.neck_length.to_bits(),
			neck_radius: config.neck_radius.to_bits(),
			head_radius: config.head_radius.to_bits(),
			material: config.material.clone(),
		}
	}
}

/// Holds the spine template so it is built once and shared by every instance.
#[derive(Debug)]
pub struct TemplateCache<M> {
	entry: Option<(TemplateKey, Arc<SpineTemplate<M>>)>,
	builds: usize,
}

impl<M> TemplateCache<M> {
	pub fn new() -> Self {
		Self { entry: None, builds: 0 }
	}

	/// Returns the cached template for the config's shape and material, building it if needed.
	///
	/// An unknown material fails the build; no fallback material is substituted.
	pub fn ensure<R: MaterialResolver<Handle = M>>(
		&mut self,
		config: &DecorationConfig,
		resolver: &R,
	) -> Result<Arc<SpineTemplate<M>>, DecorationError> {
		let key = TemplateKey::of(config);
		if let Some((cached_key, template)) = &self.entry {
			if *cached_key == key {
				log::debug!("Reusing spine template for material {}", config.material);
				return Ok(template.clone());
			}
		}

		let material = resolver
			.resolve(&config.material)
			.ok_or_else(|| DecorationError::MaterialNotFound { name: config.material.clone() })?;

		let template = Arc::new(SpineTemplate::build(config, material));
		self.builds += 1;
		log::debug!(
			"Built spine template (neck {} x {}, head {}) in {}",
			config.neck_length,
			config.neck_radius,
			config.head_radius,
			config.material
		);

		self.entry = Some((key, template.clone()));
		Ok(template)
	}

	/// Number of templates built so far.
	pub fn builds(&self) -> usize {
		self.builds
	}

}

impl<M> Default for TemplateCache<M> {
	fn default() -> Self {
		Self::new()
	}
}
