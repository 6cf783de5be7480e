use crate::segment::SegmentFrame;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f32::consts::TAU;

/// One positioned spine, relative to its carrier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
	/// Unique within the segment.
	pub index: u32,
	pub transform: Transform,
}

impl Placement {
	/// The template's outward axis in carrier space.
	pub fn outward(&self) -> Vec3 {
		self.transform.rotation * Vec3::X
	}
}

/// Computes the placement of any spine index on one segment.
///
/// Each index gets its own ChaCha stream under the batch seed, so a placement never
/// depends on which other indices were evaluated, or in which order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRule {
	frame: SegmentFrame,
	offset: f32,
	batch_seed: u64,
}

impl PlacementRule {
	/// `offset` is how far from the axis the template origin lands.
	pub fn new(frame: SegmentFrame, offset: f32, batch_seed: u64) -> Self {
		Self { frame, offset, batch_seed }
	}

	pub fn frame(&self) -> &SegmentFrame {
		&self.frame
	}

	/// Places spine `index`: a uniform point along the axis, a uniform angle around it.
	///
	/// The rotation's `x` column is the outward radial and its `y` column is the segment
	/// axis, so `z` is their cross. Taking `binormal × radial` as `y` instead would turn
	/// the spine half a turn about `x` wherever `cos(phi) > 0`. Neck and head are
	/// symmetric about `x`, so the occupied volume is the same, and the axis stays
	/// defined at `cos(phi) = 0` where `binormal × radial` vanishes.
	pub fn placement(&self, index: u32) -> Placement {
		let mut rng = ChaCha8Rng::seed_from_u64(self.batch_seed);
		rng.set_stream(index as u64);

		let along = rng.gen::<f32>() * self.frame.length;
		let phi = rng.gen::<f32>() * TAU;

		let radial = self.frame.radial(phi);
		let translation = self.frame.origin + self.frame.axis * along + radial * self.offset;

		// x points out of the surface, y runs along the segment
		let rotation = Quat::from_mat3(&Mat3::from_cols(
			radial,
			self.frame.axis,
			radial.cross(self.frame.axis),
		))
		.normalize();

		Placement { index, transform: Transform::from_translation(translation).with_rotation(rotation) }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rule(batch_seed: u64) -> PlacementRule {
		let frame = SegmentFrame::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, -2.0, 3.5)).unwrap();
		PlacementRule::new(frame, 0.6, batch_seed)
	}

	#[test]
	fn test_placement_sits_on_offset_cylinder() {
		let rule = rule(99);
		for index in 0..200 {
			let placement = rule.placement(index);
			let position = placement.transform.translation;
			let distance = rule.frame().axial_distance(position);
			assert!((distance - 0.6).abs() < 1e-4, "index {} at distance {}", index, distance);

			// within the segment span
			let along = (position - rule.frame().origin).dot(rule.frame().axis);
			assert!(along >= -1e-4 && along <= rule.frame().length + 1e-4);
		}
	}

	#[test]
	fn test_outward_axis_is_radial() {
		let rule = rule(7);
		for index in 0..100 {
			let placement = rule.placement(index);
			let offset = placement.transform.translation - rule.frame().origin;
			let radial =
				(offset - rule.frame().axis * offset.dot(rule.frame().axis)).normalize();
			assert!(placement.outward().abs_diff_eq(radial, 1e-4));

			// second axis follows the segment
			let along = placement.transform.rotation * Vec3::Y;
			assert!(along.abs_diff_eq(rule.frame().axis, 1e-4));

			// parallel to binormal × radial wherever that is defined
			let swept = rule.frame().binormal.cross(radial);
			if swept.length() > 1e-2 {
				assert!((along.dot(swept.normalize()).abs() - 1.0).abs() < 1e-3);
			}
		}
	}

	#[test]
	fn test_placement_is_pure_per_index() {
		let rule = rule(1234);
		let forward: Vec<_> = (0..20).map(|i| rule.placement(i)).collect();
		let backward: Vec<_> = (0..20).rev().map(|i| rule.placement(i)).collect();
		for (a, b) in forward.iter().zip(backward.iter().rev()) {
			assert_eq!(a, b);
		}
		assert_ne!(rule.placement(0), rule.placement(1));
		assert_ne!(rule.placement(0), self::rule(1235).placement(0));
	}
}
