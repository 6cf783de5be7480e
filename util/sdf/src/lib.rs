pub mod bounds;
pub mod cuboid;
pub mod cylinder;
pub mod sphere;
pub mod union;

pub use bounds::Bounds;
pub use cuboid::CuboidSdf;
pub use cylinder::CylinderSdf;
pub use sphere::SphereSdf;
pub use union::Union;

use bevy::prelude::*;

/// Trait for Signed Distance Fields
/// Returns the signed distance from a point to the surface:
/// - Negative: inside the shape
/// - Zero: on the surface
/// - Positive: outside the shape
pub trait Sdf: Send + Sync {
	fn distance(&self, p: Vec3) -> f32;

	/// Returns the bounds of the SDF, i.e., the region outside of which the shape never reaches.
	///
	/// Bounds may be pessimistic. Composite shapes use them to answer containment
	/// queries without evaluating every constituent.
	fn bounds(&self) -> Bounds {
		Bounds::Unbounded
	}

	/// Whether the point lies inside or on the surface.
	fn contains(&self, p: Vec3) -> bool {
		self.bounds().contains(p) && self.distance(p) <= 0.0
	}
}
