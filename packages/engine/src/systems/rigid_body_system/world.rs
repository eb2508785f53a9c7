use crate::core::{AssemblyResult, BodyId, JointId};
use crate::rigid_body::{Body, Joint};

/// The physics world the assembler registers into.
///
/// Passed explicitly to every assembler call that registers something.
pub trait PhysicsWorld {
    /// Register a body. Re-adding an already registered identity is a no-op.
    fn add_body(&mut self, body: Body);

    /// Register a joint. Both endpoints must already be registered.
    fn add_joint(&mut self, joint: Joint) -> AssemblyResult<()>;

    fn body(&self, id: BodyId) -> Option<&Body>;

    fn body_mut(&mut self, id: BodyId) -> Option<&mut Body>;

    fn joint(&self, id: JointId) -> Option<&Joint>;

    fn joint_mut(&mut self, id: JointId) -> Option<&mut Joint>;

    /// Joints with `id` as either endpoint, in registration order.
    fn joints_attached(&self, id: BodyId) -> Vec<JointId>;
}
