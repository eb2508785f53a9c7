//! Core types shared by every layer: identities, errors, logging.

pub mod error;
pub mod ids;
pub mod logging;

pub use error::{AssemblyError, AssemblyResult};
pub use ids::{BodyId, JointId, ModelId};
