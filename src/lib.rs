//! Times-table and division drill: problem generation, the fast-mode
//! lookahead queue, session scoring, milestone tracking and the persisted
//! achievement log. The terminal front end in `main.rs` is one host for it.

pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod session;
pub mod store;

pub use config::Config;
pub use error::DrillError;
