use serde::Serialize;

use crate::core::{BodyId, JointId};

use super::body::Lifetime;
use super::vec2::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JointKind {
    /// Shared pivot point in world coordinates.
    Hinge {
        anchor: Vec2,
        distance_tolerance: f32,
        softness: f32,
    },
    /// Holds the relative angle `body_b - body_a` at `target`.
    Angle { target: f32, softness: f32 },
}

/// Constraint between two registered bodies. Refers to them, never owns them.
#[derive(Debug)]
pub struct Joint {
    pub id: JointId,
    pub body_a: BodyId,
    pub body_b: BodyId,
    pub kind: JointKind,
    pub lifetime: Lifetime,
}

impl Joint {
    pub fn hinge(body_a: BodyId, body_b: BodyId, anchor: Vec2, distance_tolerance: f32, softness: f32) -> Self {
        Self::new(
            body_a,
            body_b,
            JointKind::Hinge { anchor, distance_tolerance, softness },
        )
    }

    pub fn angle(body_a: BodyId, body_b: BodyId, target: f32, softness: f32) -> Self {
        Self::new(body_a, body_b, JointKind::Angle { target, softness })
    }

    fn new(body_a: BodyId, body_b: BodyId, kind: JointKind) -> Self {
        Self {
            id: JointId::new(),
            body_a,
            body_b,
            kind,
            lifetime: Lifetime::Active,
        }
    }

    pub fn touches(&self, body: BodyId) -> bool {
        self.body_a == body || self.body_b == body
    }

    pub fn anchor(&self) -> Option<Vec2> {
        match self.kind {
            JointKind::Hinge { anchor, .. } => Some(anchor),
            JointKind::Angle { .. } => None,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.lifetime.is_expired()
    }

    pub fn expire(&mut self) {
        self.lifetime = Lifetime::Expired;
    }
}
