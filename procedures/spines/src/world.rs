use crate::batch::ParametricBatch;
use crate::placement::Placement;
use crate::sink::SpineSink;
use crate::template::SpineTemplate;
use bevy::prelude::*;
use std::marker::PhantomData;
use std::sync::Arc;

/// Marks an explicitly placed spine entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpineInstance {
	pub index: u32,
}

/// The shared template a spine entity was instantiated from.
#[derive(Component, Clone)]
pub struct SpineTemplateRef<M: Send + Sync + 'static>(pub Arc<SpineTemplate<M>>);

/// Stands in for every spine of a parametric batch; transforms are produced on request.
#[derive(Component, Clone)]
pub struct SpineInstancer<M: Send + Sync + 'static> {
	pub template: Arc<SpineTemplate<M>>,
	pub batch: ParametricBatch,
}

impl<M: Send + Sync + 'static> SpineInstancer<M> {
	pub fn count(&self) -> u32 {
		self.batch.count()
	}

	/// Carrier-relative transform of spine `index`.
	pub fn transform(&self, index: u32) -> Option<Transform> {
		self.batch.placement(index).map(|placement| placement.transform)
	}
}

/// Spawns spines as children of carrier entities in a bevy [`World`].
pub struct WorldSink<'w, M> {
	world: &'w mut World,
	marker: PhantomData<fn() -> M>,
}

impl<'w, M> WorldSink<'w, M> {
	pub fn new(world: &'w mut World) -> Self {
		Self { world, marker: PhantomData }
	}
}

impl<'w, M: Send + Sync + 'static> SpineSink for WorldSink<'w, M> {
	type Carrier = Entity;
	type Material = M;

	fn attach_instance(
		&mut self,
		carrier: &Entity,
		template: &Arc<SpineTemplate<M>>,
		placement: Placement,
	) {
		self.world.spawn((
			Name::new(format!("Spine {}", placement.index)),
			placement.transform,
			SpineInstance { index: placement.index },
			SpineTemplateRef(template.clone()),
			ChildOf(*carrier),
		));
	}

	fn attach_parametric(
		&mut self,
		carrier: &Entity,
		template: &Arc<SpineTemplate<M>>,
		batch: ParametricBatch,
	) {
		self.world.spawn((
			Name::new("Spine batch"),
			Transform::IDENTITY,
			SpineInstancer { template: template.clone(), batch },
			ChildOf(*carrier),
		));
	}
}
