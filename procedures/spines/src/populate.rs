use crate::batch::SpineBatch;
use crate::config::{DecorationConfig, StreamMode};
use crate::error::DecorationError;
use crate::placement::PlacementRule;
use crate::segment::Segment;
use crate::sink::SpineSink;
use crate::stream::SpineStream;
use crate::template::{MaterialResolver, SpineTemplate, TemplateCache};
use rayon::prelude::*;
use std::sync::Arc;

/// What a pass decided for one segment.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentPlan {
	/// Excluded by the compartment filters.
	Filtered,
	/// Zero-length axis; skipped.
	Degenerate,
	/// Sampled zero spines.
	Empty,
	Decorated(SpineBatch),
}

/// Tally of one decoration pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulateReport {
	pub segments: usize,
	pub filtered: usize,
	pub degenerate: usize,
	pub empty: usize,
	pub decorated: usize,
	pub explicit_instances: u64,
	pub parametric_batches: usize,
	pub parametric_instances: u64,
}

impl PopulateReport {
	pub fn total_instances(&self) -> u64 {
		self.explicit_instances + self.parametric_instances
	}
}

/// Plans the spines of a single segment, drawing from `stream`.
///
/// Filtered and degenerate segments consume no randomness.
pub fn plan_segment<C>(
	segment: &Segment<C>,
	config: &DecorationConfig,
	stream: &mut SpineStream,
) -> SegmentPlan {
	if !config.admits(segment) {
		return SegmentPlan::Filtered;
	}

	let Some(frame) = segment.frame() else {
		return SegmentPlan::Degenerate;
	};

	let count = stream.sample_count(config.mean_count(frame.length));
	if count == 0 {
		return SegmentPlan::Empty;
	}

	let rule =
		PlacementRule::new(frame, segment.radius + config.neck_radius, stream.next_batch_seed());
	SegmentPlan::Decorated(SpineBatch::plan(rule, count, config.instancing_threshold))
}

/// Plans every segment of a pass according to the config's stream mode.
pub fn plan_segments<C: Sync>(segments: &[Segment<C>], config: &DecorationConfig) -> Vec<SegmentPlan> {
	match config.stream {
		StreamMode::Sequential => {
			let mut stream = SpineStream::new(config.seed);
			segments.iter().map(|segment| plan_segment(segment, config, &mut stream)).collect()
		}
		StreamMode::PerSegment => segments
			.par_iter()
			.enumerate()
			.map(|(index, segment)| {
				let mut stream = SpineStream::for_segment(config.seed, index);
				plan_segment(segment, config, &mut stream)
			})
			.collect(),
	}
}

/// Decorates skeletons with spines.
///
/// Owns the material resolver and the template cache, so repeated passes with the same
/// shape share one template.
pub struct SpineDecorator<R: MaterialResolver> {
	resolver: R,
	templates: TemplateCache<R::Handle>,
}

impl<R: MaterialResolver> SpineDecorator<R> {
	pub fn new(resolver: R) -> Self {
		Self { resolver, templates: TemplateCache::new() }
	}

	pub fn resolver(&self) -> &R {
		&self.resolver
	}

	pub fn templates(&self) -> &TemplateCache<R::Handle> {
		&self.templates
	}

	pub fn ensure_template(
		&mut self,
		config: &DecorationConfig,
	) -> Result<Arc<SpineTemplate<R::Handle>>, DecorationError> {
		self.templates.ensure(config, &self.resolver)
	}

	/// Runs one decoration pass over `segments`, in order, attaching spines through `sink`.
	///
	/// Config and material problems fail the pass before any segment is touched.
	/// Degenerate segments are skipped and counted.
	pub fn populate<S>(
		&mut self,
		segments: &[Segment<S::Carrier>],
		config: &DecorationConfig,
		sink: &mut S,
	) -> Result<PopulateReport, DecorationError>
	where
		S: SpineSink<Material = R::Handle>,
		S::Carrier: Sync,
	{
		config.validate()?;
		let template = self.ensure_template(config)?;

		let plans = plan_segments(segments, config);
		let mut report = PopulateReport { segments: segments.len(), ..Default::default() };

		for (index, (segment, plan)) in segments.iter().zip(plans).enumerate() {
			match plan {
				SegmentPlan::Filtered => report.filtered += 1,
				SegmentPlan::Degenerate => {
					log::warn!(
						"Skipping segment {}: zero-length axis at {:?}",
						index,
						segment.p0
					);
					report.degenerate += 1;
				}
				SegmentPlan::Empty => report.empty += 1,
				SegmentPlan::Decorated(SpineBatch::Explicit(placements)) => {
					log::debug!("Segment {}: {} explicit spines", index, placements.len());
					report.decorated += 1;
					report.explicit_instances += placements.len() as u64;
					for placement in placements {
						sink.attach_instance(&segment.carrier, &template, placement);
					}
				}
				SegmentPlan::Decorated(SpineBatch::Parametric(batch)) => {
					log::debug!("Segment {}: {} parametric spines", index, batch.count());
					report.decorated += 1;
					report.parametric_batches += 1;
					report.parametric_instances += batch.count() as u64;
					sink.attach_parametric(&segment.carrier, &template, batch);
				}
			}
		}

		log::info!(
			"Decorated {} of {} segments with {} spines ({} filtered, {} degenerate, {} empty)",
			report.decorated,
			report.segments,
			report.total_instances(),
			report.filtered,
			report.degenerate,
			report.empty
		);

		Ok(report)
	}
}
