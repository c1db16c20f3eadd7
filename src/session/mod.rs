pub mod effect;
pub mod input;
pub mod messages;
pub mod state;
pub mod tracker;

pub use effect::{Effect, FlashKind, Outcome, ScheduledEffect, Transition};
pub use state::{Feedback, SessionState, Theme};
pub use tracker::{Command, DrillSession};
