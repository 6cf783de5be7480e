//! Procedural dendritic spines.
//!
//! Given the tubular segments of a dendritic skeleton, places a Poisson-distributed
//! number of spines on each one. Counts and placements are reproducible for a seed.
//! Segments with few spines get explicit placements; busier ones get a single
//! parametric batch that computes any spine from its index. Both share one rule, so
//! the choice never changes where a spine ends up.
pub mod batch;
pub mod config;
pub mod error;
pub mod placement;
pub mod populate;
pub mod segment;
pub mod sink;
pub mod stream;
pub mod template;
pub mod world;

pub use batch::{ParametricBatch, SpineBatch};
pub use config::{DecorationConfig, StreamMode, DEFAULT_INSTANCING_THRESHOLD};
pub use error::{ConfigError, DecorationError};
pub use placement::{Placement, PlacementRule};
pub use populate::{plan_segment, plan_segments, PopulateReport, SegmentPlan, SpineDecorator};
pub use segment::{Segment, SegmentFrame};
pub use sink::{Attachment, RecordingSink, SpineSink};
pub use stream::SpineStream;
pub use template::{MaterialResolver, SpineTemplate, TemplateCache};
pub use world::{SpineInstance, SpineInstancer, SpineTemplateRef, WorldSink};
