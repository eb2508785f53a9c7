use serde::{Deserialize, Serialize};

use crate::core::{BodyId, JointId, ModelId};
use crate::domain::models::{BoneModel, CoreModel};

use super::shape::Shape;
use super::vec2::Placement;

/// Surface response of a body.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    pub friction: f32,
}

impl Coefficients {
    pub const fn new(restitution: f32, friction: f32) -> Self {
        Self { restitution, friction }
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self::new(0.5, 1.0)
    }
}

/// Soft-delete marker. Expired items stay registered until the world sweeps them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifetime {
    #[default]
    Active,
    Expired,
}

impl Lifetime {
    pub fn is_expired(self) -> bool {
        self == Lifetime::Expired
    }
}

/// What a body stands for inside an articulated structure.
#[derive(Clone, Debug, PartialEq)]
pub enum BodyKind {
    Plain,
    /// Segment of a chain with the hinges to its neighbours.
    ChainMember {
        beg_joint: Option<JointId>,
        end_joint: Option<JointId>,
    },
    /// Owns its descriptor; slot occupancy lives here.
    Core(CoreModel),
    /// Placeholder for the connection slot `slot` of the parent core.
    Slot { slot: usize },
    Bone(BoneModel),
}

impl BodyKind {
    pub fn name(&self) -> &'static str {
        match self {
            BodyKind::Plain => "plain",
            BodyKind::ChainMember { .. } => "chain_member",
            BodyKind::Core(_) => "core",
            BodyKind::Slot { .. } => "slot",
            BodyKind::Bone(_) => "bone",
        }
    }
}

/// Rigid body as handed to the physics world.
///
/// Not `Clone`: every body has its own identity.
#[derive(Debug)]
pub struct Body {
    // === Identity ===
    pub id: BodyId,
    /// Owning structure; `None` for bodies without model semantics.
    pub model_id: Option<ModelId>,

    // === Physics State ===
    pub position: Placement,
    pub mass: f32,
    pub coefficients: Coefficients,
    pub shape: Shape,
    pub lifetime: Lifetime,

    // === Topology ===
    pub parent: Option<BodyId>,
    /// Connected children in attachment order.
    pub children: Vec<BodyId>,
    pub kind: BodyKind,
}

impl Body {
    pub fn new(position: Placement, shape: Shape, mass: f32, coefficients: Coefficients) -> Self {
        Self {
            id: BodyId::new(),
            model_id: None,
            position,
            mass,
            coefficients,
            shape,
            lifetime: Lifetime::Active,
            parent: None,
            children: Vec::new(),
            kind: BodyKind::Plain,
        }
    }

    pub fn with_model(mut self, model_id: ModelId) -> Self {
        self.model_id = Some(model_id);
        self
    }

    pub fn with_kind(mut self, kind: BodyKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.lifetime.is_expired()
    }

    pub fn expire(&mut self) {
        self.lifetime = Lifetime::Expired;
    }

    pub fn core_model(&self) -> Option<&CoreModel> {
        match &self.kind {
            BodyKind::Core(core) => Some(core),
            _ => None,
        }
    }

    pub fn core_model_mut(&mut self) -> Option<&mut CoreModel> {
        match &mut self.kind {
            BodyKind::Core(core) => Some(core),
            _ => None,
        }
    }

    pub fn slot_index(&self) -> Option<usize> {
        match self.kind {
            BodyKind::Slot { slot } => Some(slot),
            _ => None,
        }
    }

    /// Equal outline, mass and placement; identity is ignored.
    pub fn same_geometry(&self, other: &Body) -> bool {
        self.shape == other.shape && self.mass == other.mass && self.position == other.position
    }
}
