use crate::{Bounds, Sdf};
use bevy::prelude::*;

/// A capped cylinder SDF running from `start` to `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct CylinderSdf {
	pub start: Vec3,
	pub end: Vec3,
	pub radius: f32,
}

impl CylinderSdf {
	pub fn new(start: Vec3, end: Vec3, radius: f32) -> Self {
		Self { start, end, radius }
	}

	pub fn length(&self) -> f32 {
		(self.end - self.start).length()
	}
}

impl Sdf for CylinderSdf {
	fn distance(&self, p: Vec3) -> f32 {
		let ray = self.end - self.start;
		let len = ray.length();
		if len < f32::EPSILON {
			// flat disc collapses to a point
			return (p - self.start).length() - self.radius;
		}

		let dir = ray / len;
		let along = (p - self.start).dot(dir);
		let radial = (p - self.start - dir * along).length();

		let side_dist = radial - self.radius;
		let cap_dist = (along - len * 0.5).abs() - len * 0.5;

		let outside_dist = (side_dist.max(0.0).powi(2) + cap_dist.max(0.0).powi(2)).sqrt();
		let inside_dist = side_dist.max(cap_dist);

		if inside_dist < 0.0 {
			inside_dist
		} else {
			outside_dist
		}
	}

	fn bounds(&self) -> Bounds {
		let pad = Vec3::splat(self.radius);
		Bounds::cuboid(self.start.min(self.end) - pad, self.start.max(self.end) + pad)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_cylinder_interior_and_caps() {
		let cylinder = CylinderSdf::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), 0.25);
		assert!((cylinder.distance(Vec3::new(1.0, 0.0, 0.0)) + 0.25).abs() < 1e-6);
		assert!((cylinder.distance(Vec3::new(3.0, 0.0, 0.0)) - 1.0).abs() < 1e-6);
		assert!((cylinder.distance(Vec3::new(1.0, 1.25, 0.0)) - 1.0).abs() < 1e-6);
		assert!(cylinder.contains(Vec3::new(0.0, 0.1, 0.0)));
		assert!(!cylinder.contains(Vec3::new(-0.01, 0.0, 0.0)));
	}

	#[test]
	fn test_cylinder_corner_distance() {
		let cylinder = CylinderSdf::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), 1.0);
		let d = cylinder.distance(Vec3::new(4.0, 0.0, 5.0));
		assert!((d - 5.0).abs() < 1e-5);
	}
}
