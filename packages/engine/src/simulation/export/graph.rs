use std::collections::HashSet;

use serde::Serialize;

use crate::core::{AssemblyResult, BodyId, JointId, ModelId};
use crate::rigid_body::{Coefficients, JointKind, Placement, Vec2};
use crate::rigid_body_system::BodyRegistry;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphBody {
    pub id: BodyId,
    pub model_id: Option<ModelId>,
    pub kind: &'static str,
    pub position: Placement,
    pub mass: f32,
    pub coefficients: Coefficients,
    pub parent: Option<BodyId>,
    pub vertices: Vec<Vec2>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphJoint {
    pub id: JointId,
    pub body_a: BodyId,
    pub body_b: BodyId,
    #[serde(flatten)]
    pub kind: JointKind,
}

/// Snapshot of the active bodies and joints, ready for a solver.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SkeletonGraph {
    pub bodies: Vec<GraphBody>,
    pub joints: Vec<GraphJoint>,
}

impl SkeletonGraph {
    /// Expired items, and joints touching an expired body, are left out.
    pub fn from_registry(registry: &BodyRegistry) -> Self {
        let bodies: Vec<GraphBody> = registry
            .bodies()
            .filter(|b| !b.is_expired())
            .map(|b| GraphBody {
                id: b.id,
                model_id: b.model_id,
                kind: b.kind.name(),
                position: b.position,
                mass: b.mass,
                coefficients: b.coefficients,
                parent: b.parent,
                vertices: b.shape.vertices().to_vec(),
            })
            .collect();

        let live: HashSet<BodyId> = bodies.iter().map(|b| b.id).collect();
        let joints = registry
            .joints()
            .filter(|j| !j.is_expired() && live.contains(&j.body_a) && live.contains(&j.body_b))
            .map(|j| GraphJoint {
                id: j.id,
                body_a: j.body_a,
                body_b: j.body_b,
                kind: j.kind,
            })
            .collect();

        Self { bodies, joints }
    }

    pub fn body(&self, id: BodyId) -> Option<&GraphBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn to_json(&self) -> AssemblyResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
