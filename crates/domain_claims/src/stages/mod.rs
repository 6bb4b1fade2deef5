//! The four standard stages, in pipeline order

pub mod extraction;
pub mod validation;
pub mod triage;
pub mod summarization;

pub use extraction::ExtractionStage;
pub use validation::ValidationStage;
pub use triage::TriageStage;
pub use summarization::SummarizationStage;
