// Pipelines: workflows that drive the summarizers over many inputs.

pub mod batch;
