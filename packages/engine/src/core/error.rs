use thiserror::Error;

use super::ids::{BodyId, JointId};

pub type AssemblyResult<T> = Result<T, AssemblyError>;

/// Failures raised while assembling bodies and joints.
///
/// Every failure is terminal for the call that raised it. Nothing mutated
/// before the failure is rolled back.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssemblyError {
    /// Every connection slot of the core is already occupied.
    #[error("core {core} has no unoccupied connection slot")]
    NoAvailableSlot { core: BodyId },

    #[error("invalid geometry: {what} must be positive and finite, got {value}")]
    InvalidGeometry { what: &'static str, value: f32 },

    #[error("body {0} is not registered")]
    UnknownBody(BodyId),

    #[error("body {0} is not a core body")]
    NotACore(BodyId),

    /// A joint was registered before one of its endpoints.
    #[error("joint {joint} references unregistered body {body}")]
    UnregisteredBody { joint: JointId, body: BodyId },

    #[error("connection slot {slot} is already occupied")]
    SlotAlreadyOccupied { slot: usize },

    #[error("blueprint: {0}")]
    Blueprint(String),
}

impl AssemblyError {
    /// Reject non-positive and non-finite dimensions.
    pub(crate) fn check_positive(what: &'static str, value: f32) -> AssemblyResult<f32> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(AssemblyError::InvalidGeometry { what, value })
        }
    }
}

impl From<serde_json::Error> for AssemblyError {
    fn from(e: serde_json::Error) -> Self {
        AssemblyError::Blueprint(e.to_string())
    }
}
