use crate::{Bounds, Sdf};
use bevy::prelude::*;

/// A sphere SDF
#[derive(Debug, Clone, PartialEq)]
pub struct SphereSdf {
	pub center: Vec3,
	pub radius: f32,
}

impl SphereSdf {
	pub fn new(center: Vec3, radius: f32) -> Self {
		Self { center, radius }
	}
}

impl Sdf for SphereSdf {
	fn distance(&self, p: Vec3) -> f32 {
		(p - self.center).length() - self.radius
	}

	fn bounds(&self) -> Bounds {
		Bounds::cuboid(self.center - Vec3::splat(self.radius), self.center + Vec3::splat(self.radius))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sphere_distance() {
		let sphere = SphereSdf::new(Vec3::new(1.0, 0.0, 0.0), 0.5);
		assert_eq!(sphere.distance(Vec3::new(1.0, 0.0, 0.0)), -0.5);
		assert!((sphere.distance(Vec3::new(2.0, 0.0, 0.0)) - 0.5).abs() < 1e-6);
		assert!(sphere.contains(Vec3::new(1.5, 0.0, 0.0)));
		assert!(!sphere.contains(Vec3::new(1.0, 0.6, 0.0)));
	}
}
