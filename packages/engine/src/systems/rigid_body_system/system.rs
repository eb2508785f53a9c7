use std::collections::HashSet;

use crate::core::{AssemblyError, AssemblyResult, BodyId, JointId, ModelId};
use crate::rigid_body::{Body, Joint};

use super::world::PhysicsWorld;

/// Owns every registered body and joint.
///
/// Storage keeps registration order; removal only happens in `sweep_expired`.
pub struct BodyRegistry {
    bodies: Vec<Body>,
    joints: Vec<Joint>,
}

/// Counts of items dropped by one sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepResult {
    pub bodies: usize,
    pub joints: usize,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            joints: Vec::new(),
        }
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn joints(&self) -> impl Iterator<Item = &Joint> {
        self.joints.iter()
    }

    pub fn bodies_of_model(&self, model_id: ModelId) -> impl Iterator<Item = &Body> {
        self.bodies
            .iter()
            .filter(move |b| b.model_id == Some(model_id))
    }

    /// Drop expired bodies, expired joints, and joints left without an endpoint.
    pub fn sweep_expired(&mut self) -> SweepResult {
        let removed: HashSet<BodyId> = self
            .bodies
            .iter()
            .filter(|b| b.is_expired())
            .map(|b| b.id)
            .collect();

        let bodies_before = self.bodies.len();
        self.bodies.retain(|b| !b.is_expired());
        if !removed.is_empty() {
            for body in self.bodies.iter_mut() {
                body.children.retain(|c| !removed.contains(c));
                if body.parent.is_some_and(|p| removed.contains(&p)) {
                    body.parent = None;
                }
            }
        }

        let joints_before = self.joints.len();
        self.joints.retain(|j| {
            !j.is_expired() && !removed.contains(&j.body_a) && !removed.contains(&j.body_b)
        });

        let result = SweepResult {
            bodies: bodies_before - self.bodies.len(),
            joints: joints_before - self.joints.len(),
        };
        if result != SweepResult::default() {
            log::debug!("swept {} bodies and {} joints", result.bodies, result.joints);
        }
        result
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.joints.clear();
    }

    fn contains_body(&self, id: BodyId) -> bool {
        self.bodies.iter().any(|b| b.id == id)
    }
}

impl PhysicsWorld for BodyRegistry {
    fn add_body(&mut self, body: Body) {
        if self.contains_body(body.id) {
            return;
        }
        self.bodies.push(body);
    }

    fn add_joint(&mut self, joint: Joint) -> AssemblyResult<()> {
        for endpoint in [joint.body_a, joint.body_b] {
            if !self.contains_body(endpoint) {
                return Err(AssemblyError::UnregisteredBody { joint: joint.id, body: endpoint });
            }
        }
        if self.joints.iter().any(|j| j.id == joint.id) {
            return Ok(());
        }
        self.joints.push(joint);
        Ok(())
    }

    fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    fn joint(&self, id: JointId) -> Option<&Joint> {
        self.joints.iter().find(|j| j.id == id)
    }

    fn joint_mut(&mut self, id: JointId) -> Option<&mut Joint> {
        self.joints.iter_mut().find(|j| j.id == id)
    }

    fn joints_attached(&self, id: BodyId) -> Vec<JointId> {
        self.joints
            .iter()
            .filter(|j| j.touches(id))
            .map(|j| j.id)
            .collect()
    }
}

impl Default for BodyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
