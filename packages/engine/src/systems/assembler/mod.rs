//! Skeleton assembler
//!
//! Decides where bodies and joints go and registers them with a
//! `PhysicsWorld`. Nothing here simulates: integration, collision and
//! constraint solving belong to the world the graph is handed to.
//!
//! Every call runs to completion against an exclusive `&mut` world, so a
//! slot is found and marked occupied in one step.

mod chain;
mod primitives;
mod settings;
mod skeleton;

use crate::core::ModelId;
use crate::rigid_body::Body;

pub use settings::AssemblerSettings;
pub use skeleton::BoneAttachment;

#[derive(Clone, Debug, Default)]
pub struct SkeletonAssembler {
    settings: AssemblerSettings,
}

impl SkeletonAssembler {
    pub fn new(settings: AssemblerSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AssemblerSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: AssemblerSettings) {
        self.settings = settings;
    }
}

/// Give `body` model semantics. Bodies that already carry a model id are
/// returned unchanged.
pub fn as_model_body(mut body: Body, model_id: ModelId) -> Body {
    if body.model_id.is_none() {
        body.model_id = Some(model_id);
    }
    body
}
