use crate::batch::ParametricBatch;
use crate::placement::Placement;
use crate::template::SpineTemplate;
use std::sync::Arc;

/// Attaches spines to the host geometry that carries each segment.
pub trait SpineSink {
	/// Identifies the host geometry of a segment.
	type Carrier;
	type Material;

	/// Places one explicit instance of the template under the carrier.
	fn attach_instance(
		&mut self,
		carrier: &Self::Carrier,
		template: &Arc<SpineTemplate<Self::Material>>,
		placement: Placement,
	);

	/// Hands the carrier a rule that yields `batch.count()` instances on demand.
	fn attach_parametric(
		&mut self,
		carrier: &Self::Carrier,
		template: &Arc<SpineTemplate<Self::Material>>,
		batch: ParametricBatch,
	);
}

#[derive(Debug, Clone)]
pub enum Attachment<C> {
	Instance { carrier: C, placement: Placement },
	Parametric { carrier: C, batch: ParametricBatch },
}

impl<C> Attachment<C> {
	pub fn carrier(&self) -> &C {
		match self {
			Self::Instance { carrier, .. } | Self::Parametric { carrier, .. } => carrier,
		}
	}

	pub fn instance_count(&self) -> u32 {
		match self {
			Self::Instance { .. } => 1,
			Self::Parametric { batch, .. } => batch.count(),
		}
	}
}

/// Keeps every attachment in memory, in the order it was made.
#[derive(Debug)]
pub struct RecordingSink<C, M> {
	attachments: Vec<Attachment<C>>,
	templates: Vec<Arc<SpineTemplate<M>>>,
}

impl<C, M> RecordingSink<C, M> {
	pub fn new() -> Self {
		Self { attachments: Vec::new(), templates: Vec::new() }
	}

	pub fn attachments(&self) -> &[Attachment<C>] {
		&self.attachments
	}

	/// Templates handed over with each attachment, index-aligned with [`Self::attachments`].
	pub fn templates(&self) -> &[Arc<SpineTemplate<M>>] {
		&self.templates
	}

	pub fn total_instances(&self) -> u64 {
		self.attachments.iter().map(|a| a.instance_count() as u64).sum()
	}
}

impl<C: PartialEq, M> RecordingSink<C, M> {
	pub fn instances_on(&self, carrier: &C) -> u32 {
		self.attachments
			.iter()
			.filter(|a| a.carrier() == carrier)
			.map(Attachment::instance_count)
			.sum()
	}

	/// Every placement on the carrier, with parametric batches expanded.
	pub fn placements_on(&self, carrier: &C) -> Vec<Placement> {
		let mut placements = Vec::new();
		for attachment in self.attachments.iter().filter(|a| a.carrier() == carrier) {
			match attachment {
				Attachment::Instance { placement, .. } => placements.push(*placement),
				Attachment::Parametric { batch, .. } => placements.extend(batch.placements()),
			}
		}
		placements
	}
}

impl<C, M> Default for RecordingSink<C, M> {
	fn default() -> Self {
		Self::new()
	}
}

impl<C: Clone, M> SpineSink for RecordingSink<C, M> {
	type Carrier = C;
	type Material = M;

	fn attach_instance(
		&mut self,
		carrier: &C,
		template: &Arc<SpineTemplate<M>>,
		placement: Placement,
	) {
		self.attachments.push(Attachment::Instance { carrier: carrier.clone(), placement });
		self.templates.push(template.clone());
	}

	fn attach_parametric(
		&mut self,
		carrier: &C,
		template: &Arc<SpineTemplate<M>>,
		batch: ParametricBatch,
	) {
		self.attachments.push(Attachment::Parametric { carrier: carrier.clone(), batch });
		self.templates.push(template.clone());
	}
}
