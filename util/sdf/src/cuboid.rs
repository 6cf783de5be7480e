use crate::{Bounds, Sdf};
use bevy::prelude::*;

/// An axis-aligned box SDF.
#[derive(Debug, Clone, PartialEq)]
pub struct CuboidSdf {
	pub center: Vec3,
	pub half_size: Vec3,
}

impl CuboidSdf {
	pub fn new(center: Vec3, half_size: Vec3) -> Self {
		Self { center, half_size }
	}

	pub fn from_corners(min: Vec3, max: Vec3) -> Self {
		Self { center: (min + max) * 0.5, half_size: (max - min) * 0.5 }
	}

	pub fn min(&self) -> Vec3 {
		self.center - self.half_size
	}

	pub fn max(&self) -> Vec3 {
		self.center + self.half_size
	}
}

impl Sdf for CuboidSdf {
	fn distance(&self, p: Vec3) -> f32 {
		let q = (p - self.center).abs() - self.half_size;
		q.max(Vec3::ZERO).length() + q.max_element().min(0.0)
	}

	fn bounds(&self) -> Bounds {
		Bounds::cuboid(self.min(), self.max())
	}
}
