use crate::core::{AssemblyResult, BodyId, ModelId};
use crate::rigid_body::{Placement, Vec2};
use crate::rigid_body_system::SweepResult;

use super::WorldCore;

#[allow(clippy::too_many_arguments)]
pub(super) fn spawn_chain(
    world: &mut WorldCore,
    start: Vec2,
    segment_length: f32,
    segment_width: f32,
    segment_mass: f32,
    spacing: f32,
    total_length: f32,
    model_id: ModelId,
) -> AssemblyResult<Vec<BodyId>> {
    world.assembler.build_chain(
        start,
        segment_length,
        segment_width,
        segment_mass,
        spacing,
        total_length,
        model_id,
        &mut world.registry,
    )
}

pub(super) fn spawn_circle(
    world: &mut WorldCore,
    radius: f32,
    vertex_count: u16,
    mass: f32,
    position: Placement,
    model_id: ModelId,
) -> AssemblyResult<BodyId> {
    world
        .assembler
        .add_circle_body(radius, vertex_count, mass, position, model_id, &mut world.registry)
}

pub(super) fn sweep(world: &mut WorldCore) -> SweepResult {
    world.registry.sweep_expired()
}

pub(super) fn clear(world: &mut WorldCore) {
    world.registry.clear();
    world.creatures.clear();
}
