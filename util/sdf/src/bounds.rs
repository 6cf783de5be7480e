use bevy::math::bounding::Aabb3d;
use bevy::math::Vec3A;
use bevy::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Bounds {
	Cuboid(Aabb3d),
	Unbounded,
}

impl Bounds {
	pub fn cuboid(min: Vec3, max: Vec3) -> Self {
		Self::Cuboid(Aabb3d { min: Vec3A::from(min), max: Vec3A::from(max) })
	}

	/// Inclusive point containment.
	pub fn contains(&self, p: Vec3) -> bool {
		match self {
			Self::Cuboid(aabb) => {
				let p = Vec3A::from(p);
				p.cmpge(aabb.min).all() && p.cmple(aabb.max).all()
			}
			Self::Unbounded => true,
		}
	}

	/// Smallest bounds enclosing both.
	pub fn union(&self, other: &Self) -> Self {
		match (self, other) {
			(Self::Cuboid(a), Self::Cuboid(b)) => {
				Self::Cuboid(Aabb3d { min: a.min.min(b.min), max: a.max.max(b.max) })
			}
			_ => Self::Unbounded,
		}
	}

	pub fn size(&self) -> Option<Vec3> {
		match self {
			Self::Cuboid(aabb) => Some(Vec3::from(aabb.max - aabb.min)),
			Self::Unbounded => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_cuboid_contains_is_inclusive() {
		let bounds = Bounds::cuboid(Vec3::ZERO, Vec3::ONE);
		assert!(bounds.contains(Vec3::ZERO));
		assert!(bounds.contains(Vec3::ONE));
		assert!(bounds.contains(Vec3::splat(0.5)));
		assert!(!bounds.contains(Vec3::new(1.01, 0.5, 0.5)));
	}

	#[test]
	fn test_union_with_unbounded_is_unbounded() {
		let bounds = Bounds::cuboid(Vec3::ZERO, Vec3::ONE);
		assert_eq!(bounds.union(&Bounds::Unbounded), Bounds::Unbounded);

		let other = Bounds::cuboid(Vec3::splat(-1.0), Vec3::splat(0.5));
		let merged = bounds.union(&other);
		assert_eq!(merged.size(), Some(Vec3::splat(2.0)));
	}
}
