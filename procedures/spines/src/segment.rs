use bevy::prelude::*;

/// A straight tubular piece of a dendritic skeleton.
///
/// `carrier` identifies the host geometry that decorations are attached to.
/// The engine only reads segments; it never moves them.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<C> {
	pub carrier: C,
	pub p0: Vec3,
	pub p1: Vec3,
	pub radius: f32,
	pub is_apical: bool,
	pub is_basal: bool,
}

impl<C> Segment<C> {
	pub fn new(carrier: C, p0: Vec3, p1: Vec3, radius: f32) -> Self {
		Self { carrier, p0, p1, radius, is_apical: false, is_basal: false }
	}

	pub fn with_apical(mut self, is_apical: bool) -> Self {
		self.is_apical = is_apical;
		self
	}

	pub fn with_basal(mut self, is_basal: bool) -> Self {
		self.is_basal = is_basal;
		self
	}

	pub fn ray(&self) -> Vec3 {
		self.p1 - self.p0
	}

	pub fn length(&self) -> f32 {
		self.ray().length()
	}

	/// Local frame around the segment axis, or `None` when the segment has no length.
	pub fn frame(&self) -> Option<SegmentFrame> {
		SegmentFrame::new(self.p0, self.p1)
	}
}

/// Right-handed orthonormal frame `{axis, normal, binormal}` anchored at `p0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentFrame {
	pub origin: Vec3,
	pub axis: Vec3,
	pub normal: Vec3,
	pub binormal: Vec3,
	pub length: f32,
}

impl SegmentFrame {
	pub fn new(p0: Vec3, p1: Vec3) -> Option<Self> {
		let ray = p1 - p0;
		let length = ray.length();
		if !length.is_finite() || length < f32::EPSILON {
			return None;
		}

		let axis = ray / length;
		let normal = Self::normal_for(axis);
		let binormal = axis.cross(normal).normalize();

		Some(Self { origin: p0, axis, normal, binormal, length })
	}

	/// Picks a unit vector perpendicular to `axis` from whichever of x or z dominates.
	fn normal_for(axis: Vec3) -> Vec3 {
		if axis.x.abs() > axis.z.abs() {
			Vec3::new(-axis.y, axis.x, 0.0).normalize()
		} else {
			Vec3::new(0.0, -axis.z, axis.y).normalize()
		}
	}

	/// Unit direction pointing away from the axis at angle `phi`.
	pub fn radial(&self, phi: f32) -> Vec3 {
		self.normal * phi.cos() + self.binormal * phi.sin()
	}

	/// Distance of a point from the (infinite) segment axis.
	pub fn axial_distance(&self, p: Vec3) -> f32 {
		let offset = p - self.origin;
		(offset - self.axis * offset.dot(self.axis)).length()
	}
}
