use serde::Deserialize;

use crate::core::AssemblyResult;

use super::models::{BoneModel, CoreModel};

/// A creature description: one core and the bones to grow on it, in order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CreatureBlueprint {
    pub core: CoreModel,
    #[serde(default)]
    pub bones: Vec<BoneModel>,
}

impl CreatureBlueprint {
    pub fn from_json(json: &str) -> AssemblyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse either a single blueprint object or an array of them.
    pub fn list_from_json(json: &str) -> AssemblyResult<Vec<Self>> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OneOrMany {
            One(CreatureBlueprint),
            Many(Vec<CreatureBlueprint>),
        }

        Ok(match serde_json::from_str(json)? {
            OneOrMany::One(bp) => vec![bp],
            OneOrMany::Many(list) => list,
        })
    }
}
