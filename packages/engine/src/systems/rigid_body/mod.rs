//! Bodies and joints - the graph handed to the physics world
//!
//! Bodies store their outline in local coordinates (relative to center 0,0)
//! and are placed in the world by a linear position and an angle.

mod vec2;
mod body;
mod joint;
pub mod shape;

pub use vec2::{Placement, Vec2};
pub use body::{Body, BodyKind, Coefficients, Lifetime};
pub use joint::{Joint, JointKind};
pub use shape::Shape;
