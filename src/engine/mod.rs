pub mod milestone;

pub use milestone::{Evaluation, MilestoneState, MilestoneSteps};
