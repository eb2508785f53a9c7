use crate::core::AssemblyResult;
use crate::systems::assembler::AssemblerSettings;

use super::WorldCore;

/// Replace the settings. Affects only bodies assembled afterwards.
pub(super) fn load_settings_json(world: &mut WorldCore, json: &str) -> AssemblyResult<()> {
    let settings = AssemblerSettings::from_json(json)?;
    world.assembler.set_settings(settings);
    Ok(())
}

pub(super) fn get_settings(world: &WorldCore) -> &AssemblerSettings {
    world.assembler.settings()
}
