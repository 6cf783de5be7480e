use crate::{Bounds, Sdf};
use bevy::prelude::*;

/// Hard union of two SDFs.
#[derive(Debug, Clone, PartialEq)]
pub struct Union<A: Sdf, B: Sdf> {
	pub a: A,
	pub b: B,
}

impl<A: Sdf, B: Sdf> Union<A, B> {
	pub fn new(a: A, b: B) -> Self {
		Self { a, b }
	}
}

impl<A: Sdf, B: Sdf> Sdf for Union<A, B> {
	fn distance(&self, p: Vec3) -> f32 {
		self.a.distance(p).min(self.b.distance(p))
	}

	fn bounds(&self) -> Bounds {
		self.a.bounds().union(&self.b.bounds())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::SphereSdf;

	#[test]
	fn test_union_takes_nearest() {
		let union = Union::new(
			SphereSdf::new(Vec3::ZERO, 1.0),
			SphereSdf::new(Vec3::new(4.0, 0.0, 0.0), 1.0),
		);
		assert!((union.distance(Vec3::new(2.0, 0.0, 0.0)) - 1.0).abs() < 1e-6);
		assert!(union.contains(Vec3::new(4.5, 0.0, 0.0)));
		assert_eq!(union.bounds().size(), Some(Vec3::new(6.0, 2.0, 2.0)));
	}
}
