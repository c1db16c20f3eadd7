pub mod achievements;
pub mod json_store;
pub mod schema;

pub use achievements::AchievementStore;
pub use json_store::{JsonStore, KeyValueStore, MemoryStore};
pub use schema::AchievementRecord;
