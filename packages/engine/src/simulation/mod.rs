//! World - creature assembly on top of the body registry
//!
//! `WorldCore` owns one `BodyRegistry` and grows creatures into it:
//! - creature/  - blueprint assembly, population assembly
//! - commands/  - chains, loose bodies, sweeping
//! - export/    - body/joint graph for an external solver
//! - init/      - construction and settings
//!
//! `World` (facade.rs) is the `wasm_bindgen` surface over it.

use crate::core::{AssemblyResult, BodyId, ModelId};
use crate::domain::blueprint::CreatureBlueprint;
use crate::domain::models::BoneModel;
use crate::rigid_body::{Placement, Vec2};
use crate::rigid_body_system::{BodyRegistry, SweepResult};
use crate::systems::assembler::{AssemblerSettings, BoneAttachment, SkeletonAssembler};

#[path = "creature/creature.rs"]
mod creature;
#[path = "creature/population.rs"]
mod population;
#[path = "commands/commands.rs"]
mod commands;
#[path = "export/graph.rs"]
mod graph;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use creature::{assemble_creature, CreatureHandle};
pub use facade::World;
pub use graph::{GraphBody, GraphJoint, SkeletonGraph};
pub use population::{assemble_population, Creature};

/// The assembly world
pub struct WorldCore {
    assembler: SkeletonAssembler,
    registry: BodyRegistry,
    creatures: Vec<CreatureHandle>,
}

impl WorldCore {
    /// Create an empty world with default settings
    pub fn new() -> Self {
        init::create_world_core(AssemblerSettings::default())
    }

    pub fn with_settings(settings: AssemblerSettings) -> Self {
        init::create_world_core(settings)
    }

    pub fn load_settings_json(&mut self, json: &str) -> AssemblyResult<()> {
        settings::load_settings_json(self, json)
    }

    pub fn settings(&self) -> &AssemblerSettings {
        settings::get_settings(self)
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn creatures(&self) -> &[CreatureHandle] {
        &self.creatures
    }

    pub fn body_count(&self) -> usize {
        self.registry.body_count()
    }

    pub fn joint_count(&self) -> usize {
        self.registry.joint_count()
    }

    // === CREATURE API ===

    /// Assemble a creature from a blueprint: core, slot bodies, then bones in order.
    pub fn spawn_creature(&mut self, blueprint: CreatureBlueprint) -> AssemblyResult<CreatureHandle> {
        creature::spawn_creature(self, blueprint)
    }

    pub fn spawn_creature_json(&mut self, json: &str) -> AssemblyResult<CreatureHandle> {
        creature::spawn_creature(self, CreatureBlueprint::from_json(json)?)
    }

    /// Grow one more bone on a registered core.
    pub fn grow_bone(&mut self, core: BodyId, bone: BoneModel) -> AssemblyResult<BoneAttachment> {
        creature::grow_bone(self, core, bone)
    }

    // === LOOSE BODIES ===

    #[allow(clippy::too_many_arguments)]
    pub fn spawn_chain(
        &mut self,
        start: Vec2,
        segment_length: f32,
        segment_width: f32,
        segment_mass: f32,
        spacing: f32,
        total_length: f32,
        model_id: ModelId,
    ) -> AssemblyResult<Vec<BodyId>> {
        commands::spawn_chain(
            self,
            start,
            segment_length,
            segment_width,
            segment_mass,
            spacing,
            total_length,
            model_id,
        )
    }

    pub fn spawn_circle(
        &mut self,
        radius: f32,
        vertex_count: u16,
        mass: f32,
        position: Placement,
        model_id: ModelId,
    ) -> AssemblyResult<BodyId> {
        commands::spawn_circle(self, radius, vertex_count, mass, position, model_id)
    }

    /// Remove expired bodies and joints.
    pub fn sweep(&mut self) -> SweepResult {
        commands::sweep(self)
    }

    /// Remove everything
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    // === EXPORT ===

    pub fn graph(&self) -> SkeletonGraph {
        SkeletonGraph::from_registry(&self.registry)
    }
}

impl Default for WorldCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
