use crate::core::{AssemblyError, AssemblyResult, BodyId, JointId, ModelId};
use crate::domain::models::{BoneModel, CoreModel};
use crate::rigid_body::{Body, BodyKind, Joint, Placement};
use crate::rigid_body_system::PhysicsWorld;

use super::SkeletonAssembler;

/// Handles created when a bone grows on a core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoneAttachment {
    pub bone: BodyId,
    /// Pivot between core and bone.
    pub hinge: JointId,
    /// Keeps the bone's angle relative to the core.
    pub angle: JointId,
    /// Index of the connection slot the bone took.
    pub slot: usize,
}

impl SkeletonAssembler {
    /// Core body for `core`, placed at its start position.
    ///
    /// The body takes ownership of the descriptor and tracks slot occupancy on it.
    pub fn create_core_body(&self, core: CoreModel, model_id: ModelId) -> AssemblyResult<Body> {
        let mut body = self.create_circle_body(core.size, self.settings.core_vertex_count, core.mass, model_id)?;
        body.coefficients = self.settings.core_coefficients;
        body.position = core.start_position;
        Ok(body.with_kind(BodyKind::Core(core)))
    }

    /// Register a placeholder body for every free slot of a registered core.
    ///
    /// Slot bodies are placed at the slot offset in the core's frame, parented
    /// to the core and appended to its children in descriptor order.
    pub fn build_node_slots(
        &self,
        core_id: BodyId,
        model_id: ModelId,
        world: &mut dyn PhysicsWorld,
    ) -> AssemblyResult<Vec<BodyId>> {
        let core = world.body(core_id).ok_or(AssemblyError::UnknownBody(core_id))?;
        let core_pos = core.position;
        let free: Vec<(usize, Placement)> = core
            .core_model()
            .ok_or(AssemblyError::NotACore(core_id))?
            .unoccupied_slots()
            .map(|(index, slot)| (index, slot.relative_position))
            .collect();

        let size = self.settings.slot_body_size;
        let mut result = Vec::with_capacity(free.len());
        for (index, relative) in free {
            let position = Placement::new(
                core_pos.angular + relative.angular,
                core_pos.linear + relative.linear.rotate(core_pos.angular),
            );
            let mut slot_body = self
                .create_rectangle_body(size, size, self.settings.slot_body_mass, position)?
                .with_model(model_id)
                .with_kind(BodyKind::Slot { slot: index });
            slot_body.coefficients = self.settings.slot_coefficients;
            slot_body.parent = Some(core_id);

            let slot_id = slot_body.id;
            world.add_body(slot_body);
            if let Some(core) = world.body_mut(core_id) {
                core.children.push(slot_id);
            }
            result.push(slot_id);
        }

        log::debug!("core {} got {} slot bodies", core_id, result.len());
        Ok(result)
    }

    /// Grow `bone` on the first free slot of a registered core.
    ///
    /// The slot is marked occupied and its placeholder body and joints are
    /// expired (the world sweeps them later). The bone points outward from
    /// the core along the slot offset and is held by a hinge near the core
    /// plus an angle joint. Changes are not rolled back on later failure.
    pub fn add_core_bone_body(
        &self,
        bone: BoneModel,
        core_id: BodyId,
        world: &mut dyn PhysicsWorld,
    ) -> AssemblyResult<BoneAttachment> {
        AssemblyError::check_positive("bone length", bone.length)?;
        AssemblyError::check_positive("bone thickness", bone.thickness)?;
        AssemblyError::check_positive("bone mass", bone.mass)?;

        let (slot_body, slot, relative) = claim_free_slot(core_id, world)?;

        if let Some(body) = world.body_mut(slot_body) {
            body.expire();
        }
        for joint_id in world.joints_attached(slot_body) {
            if let Some(joint) = world.joint_mut(joint_id) {
                joint.expire();
            }
        }

        let core = world.body(core_id).ok_or(AssemblyError::UnknownBody(core_id))?;
        let core_pos = core.position;
        let core_model_id = core.model_id.or_else(|| core.core_model().map(|m| m.id));

        let offset = relative.linear.rotate(core_pos.angular);
        let center = core_pos.linear + offset + offset.normalize() * (bone.length * 0.5);
        let placement = Placement::new(relative.angular + core_pos.angular, center);

        let mut bone_body = self.create_rectangle_body(bone.thickness, bone.length, bone.mass, placement)?;
        bone_body.model_id = core_model_id;
        bone_body.parent = Some(core_id);
        let bone_body = bone_body.with_kind(BodyKind::Bone(bone));
        let bone_id = bone_body.id;

        let hinge = Joint::hinge(
            core_id,
            bone_id,
            placement.linear.lerp(core_pos.linear, self.settings.hinge_core_bias),
            self.settings.hinge_distance_tolerance,
            self.settings.hinge_softness,
        );
        let angle = Joint::angle(
            core_id,
            bone_id,
            placement.angular - core_pos.angular,
            self.settings.angle_softness,
        );
        let attachment = BoneAttachment {
            bone: bone_id,
            hinge: hinge.id,
            angle: angle.id,
            slot,
        };

        world.add_body(bone_body);
        if let Some(core) = world.body_mut(core_id) {
            core.children.push(bone_id);
        }
        world.add_joint(hinge)?;
        world.add_joint(angle)?;

        log::debug!("bone {} grown on slot {} of core {}", bone_id, slot, core_id);
        Ok(attachment)
    }
}

/// Find the first slot child whose slot is free and mark it occupied.
///
/// Both happen under the same exclusive borrow of the world, so two
/// attachments can never take the same slot.
fn claim_free_slot(core_id: BodyId, world: &mut dyn PhysicsWorld) -> AssemblyResult<(BodyId, usize, Placement)> {
    let core = world.body(core_id).ok_or(AssemblyError::UnknownBody(core_id))?;
    let model = core.core_model().ok_or(AssemblyError::NotACore(core_id))?;

    let found = core.children.iter().find_map(|&child| {
        let index = world.body(child)?.slot_index()?;
        let slot = model.connection_slots.get(index)?;
        (!slot.is_occupied()).then_some((child, index, slot.relative_position))
    });

    let Some((slot_body, index, relative)) = found else {
        log::warn!("core {} has no free connection slot", core_id);
        return Err(AssemblyError::NoAvailableSlot { core: core_id });
    };

    world
        .body_mut(core_id)
        .and_then(|b| b.core_model_mut())
        .ok_or(AssemblyError::NotACore(core_id))?
        .connection_slots[index]
        .occupy(index)?;

    Ok((slot_body, index, relative))
}
