#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::AssemblyResult;
use crate::domain::blueprint::CreatureBlueprint;
use crate::rigid_body_system::BodyRegistry;
use crate::systems::assembler::{AssemblerSettings, SkeletonAssembler};

use super::creature::{assemble_creature, CreatureHandle};

/// A creature assembled into its own registry.
pub struct Creature {
    pub world: BodyRegistry,
    pub handle: CreatureHandle,
}

/// Assemble every blueprint into an independent world.
///
/// Results keep blueprint order. Runs on the Rayon pool when the `parallel`
/// feature is enabled; creatures share no state, so order of work is free.
pub fn assemble_population(
    blueprints: Vec<CreatureBlueprint>,
    settings: &AssemblerSettings,
) -> Vec<AssemblyResult<Creature>> {
    let assembler = SkeletonAssembler::new(settings.clone());
    let build = |blueprint: CreatureBlueprint| -> AssemblyResult<Creature> {
        let mut world = BodyRegistry::new();
        let handle = assemble_creature(&assembler, blueprint, &mut world)?;
        Ok(Creature { world, handle })
    };

    #[cfg(feature = "parallel")]
    let results: Vec<_> = blueprints.into_par_iter().map(build).collect();
    #[cfg(not(feature = "parallel"))]
    let results: Vec<_> = blueprints.into_iter().map(build).collect();

    results
}
