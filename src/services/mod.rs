pub mod frame_sampler;
pub mod pipeline;

pub use frame_sampler::{hours_minutes_seconds, plan, SelectionPlan, SelectionRequest};
pub use pipeline::{FramePipeline, PipelineOptions, RunReport};
