use crate::rigid_body_system::BodyRegistry;
use crate::systems::assembler::{AssemblerSettings, SkeletonAssembler};

use super::WorldCore;

pub(super) fn create_world_core(settings: AssemblerSettings) -> WorldCore {
    WorldCore {
        assembler: SkeletonAssembler::new(settings),
        registry: BodyRegistry::new(),
        creatures: Vec::new(),
    }
}
