//! Body registry - the world bodies and joints are handed to
//!
//! Owns registered bodies and joints. The assembler never deletes anything:
//! it marks items expired and `sweep_expired` removes them later.

mod system;
mod world;

pub use system::{BodyRegistry, SweepResult};
pub use world::PhysicsWorld;
