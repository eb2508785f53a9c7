use crate::core::{AssemblyResult, BodyId, ModelId};
use crate::domain::blueprint::CreatureBlueprint;
use crate::domain::models::BoneModel;
use crate::rigid_body_system::PhysicsWorld;
use crate::systems::assembler::{BoneAttachment, SkeletonAssembler};

use super::WorldCore;

/// Everything registered for one creature.
#[derive(Clone, Debug, PartialEq)]
pub struct CreatureHandle {
    pub model_id: ModelId,
    pub core: BodyId,
    /// Slot bodies built for the core, including ones later expired by bones.
    pub slots: Vec<BodyId>,
    pub bones: Vec<BoneAttachment>,
}

/// Register the core, its slot bodies, then every bone in blueprint order.
///
/// A bone that finds no free slot stops assembly with `NoAvailableSlot`;
/// what was registered before stays in the world.
pub fn assemble_creature(
    assembler: &SkeletonAssembler,
    blueprint: CreatureBlueprint,
    world: &mut dyn PhysicsWorld,
) -> AssemblyResult<CreatureHandle> {
    let CreatureBlueprint { core, bones } = blueprint;
    let model_id = core.id;

    let core_body = assembler.create_core_body(core, model_id)?;
    let core_id = core_body.id;
    world.add_body(core_body);

    let slots = assembler.build_node_slots(core_id, model_id, world)?;
    let mut handle = CreatureHandle {
        model_id,
        core: core_id,
        slots,
        bones: Vec::with_capacity(bones.len()),
    };
    for bone in bones {
        handle.bones.push(assembler.add_core_bone_body(bone, core_id, world)?);
    }

    log::info!(
        "assembled creature {} with {} bones",
        model_id,
        handle.bones.len()
    );
    Ok(handle)
}

pub(super) fn spawn_creature(world: &mut WorldCore, blueprint: CreatureBlueprint) -> AssemblyResult<CreatureHandle> {
    let handle = assemble_creature(&world.assembler, blueprint, &mut world.registry)?;
    world.creatures.push(handle.clone());
    Ok(handle)
}

pub(super) fn grow_bone(world: &mut WorldCore, core: BodyId, bone: BoneModel) -> AssemblyResult<BoneAttachment> {
    let attachment = world
        .assembler
        .add_core_bone_body(bone, core, &mut world.registry)?;
    if let Some(creature) = world.creatures.iter_mut().find(|c| c.core == core) {
        creature.bones.push(attachment);
    }
    Ok(attachment)
}
