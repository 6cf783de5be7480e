use crate::placement::{Placement, PlacementRule};

/// Many spines described by one rule and a count. Placements are computed when asked for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParametricBatch {
	rule: PlacementRule,
	count: u32,
}

impl ParametricBatch {
	pub fn new(rule: PlacementRule, count: u32) -> Self {
		Self { rule, count }
	}

	pub fn count(&self) -> u32 {
		self.count
	}

	pub fn rule(&self) -> &PlacementRule {
		&self.rule
	}

	pub fn placement(&self, index: u32) -> Option<Placement> {
		(index < self.count).then(|| self.rule.placement(index))
	}

	pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
		(0..self.count).map(|index| self.rule.placement(index))
	}
}

/// The spines planned for one segment.
#[derive(Debug, Clone, PartialEq)]
pub enum SpineBatch {
	/// Every placement computed up front.
	Explicit(Vec<Placement>),
	Parametric(ParametricBatch),
}

impl SpineBatch {
	/// Explicit up to and including `threshold` spines, parametric above it.
	pub fn plan(rule: PlacementRule, count: u32, threshold: u32) -> Self {
		if count > threshold {
			Self::Parametric(ParametricBatch::new(rule, count))
		} else {
			Self::Explicit((0..count).map(|index| rule.placement(index)).collect())
		}
	}

	pub fn len(&self) -> u32 {
		match self {
			Self::Explicit(placements) => placements.len() as u32,
			Self::Parametric(batch) => batch.count(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_parametric(&self) -> bool {
		matches!(self, Self::Parametric(_))
	}

	/// All placements, materializing parametric ones on the fly.
	pub fn placements(&self) -> Vec<Placement> {
		match self {
			Self::Explicit(placements) => placements.clone(),
			Self::Parametric(batch) => batch.placements().collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::DEFAULT_INSTANCING_THRESHOLD;
	use crate::segment::SegmentFrame;
	use bevy::prelude::*;

	fn rule() -> PlacementRule {
		let frame = SegmentFrame::new(Vec3::ZERO, Vec3::new(0.0, 30.0, 0.0)).unwrap();
		PlacementRule::new(frame, 1.1, 0xDEAD_BEEF)
	}

	#[test]
	fn test_threshold_boundary() {
		let at = SpineBatch::plan(rule(), 50, DEFAULT_INSTANCING_THRESHOLD);
		let above = SpineBatch::plan(rule(), 51, DEFAULT_INSTANCING_THRESHOLD);

		assert!(!at.is_parametric());
		assert!(above.is_parametric());
		assert_eq!(at.len(), 50);
		assert_eq!(above.len(), 51);
	}

	#[test]
	fn test_strategies_agree_per_index() {
		let explicit = SpineBatch::plan(rule(), 50, DEFAULT_INSTANCING_THRESHOLD);
		let parametric = SpineBatch::plan(rule(), 51, DEFAULT_INSTANCING_THRESHOLD);

		let SpineBatch::Parametric(batch) = &parametric else {
			panic!("expected a parametric batch");
		};

		for placement in explicit.placements() {
			assert_eq!(batch.placement(placement.index), Some(placement));
		}
		assert_eq!(batch.placement(51), None);
		assert_eq!(parametric.placements().len(), 51);
	}

	#[test]
	fn test_explicit_indices_are_sequential() {
		let batch = SpineBatch::plan(rule(), 12, DEFAULT_INSTANCING_THRESHOLD);
		let indices: Vec<u32> = batch.placements().iter().map(|p| p.index).collect();
		assert_eq!(indices, (0..12).collect::<Vec<u32>>());
	}

	#[test]
	fn test_empty_batch() {
		let batch = SpineBatch::plan(rule(), 0, DEFAULT_INSTANCING_THRESHOLD);
		assert!(batch.is_empty());
		assert!(!batch.is_parametric());
	}
}
