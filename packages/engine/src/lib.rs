//! Skeleton Engine - procedural assembly of 2D articulated creatures
//!
//! Builds bodies, chains and branching creature skeletons (core, connection
//! slots, bones) and registers them with a physics world. Simulation itself
//! belongs to the world the graph is handed to.
//!
//! Architecture:
//! - core/        - Identities, errors, logging
//! - domain/      - Caller-owned descriptors and blueprints
//! - systems/     - Bodies, joints, registry, assembler
//! - simulation/  - Creature assembly world and WASM facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Short paths for the most used modules
pub use systems::assembler;
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_console_logger(cfg!(debug_assertions));
    log::info!("skeleton engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{AssemblyError, AssemblyResult, BodyId, JointId, ModelId};
pub use assembler::{as_model_body, AssemblerSettings, BoneAttachment, SkeletonAssembler};
pub use domain::blueprint::CreatureBlueprint;
pub use domain::models::{BoneModel, ConnectionSlotModel, CoreModel, SlotState};
pub use rigid_body_system::{BodyRegistry, PhysicsWorld, SweepResult};
pub use simulation::{World, WorldCore};
