use serde::{Deserialize, Serialize};

use crate::core::AssemblyResult;
use crate::rigid_body::Coefficients;

/// Tunables of the assembler. Missing JSON fields take the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblerSettings {
    /// Rectangles, chain segments and bones.
    pub default_coefficients: Coefficients,
    pub core_coefficients: Coefficients,
    pub slot_coefficients: Coefficients,
    pub core_vertex_count: u16,
    /// Side of the square placeholder body built for a free slot.
    pub slot_body_size: f32,
    pub slot_body_mass: f32,
    /// Rectangle outlines are subdivided every `min(height, width) / divisor`.
    pub subdivision_divisor: f32,
    pub hinge_distance_tolerance: f32,
    pub hinge_softness: f32,
    pub angle_softness: f32,
    /// Weight of the core position in a bone hinge anchor.
    pub hinge_core_bias: f32,
}

impl Default for AssemblerSettings {
    fn default() -> Self {
        Self {
            default_coefficients: Coefficients::new(0.5, 1.0),
            core_coefficients: Coefficients::new(0.1, 0.1),
            slot_coefficients: Coefficients::new(0.1, 0.7),
            core_vertex_count: 5,
            slot_body_size: 10.0,
            slot_body_mass: 10.0,
            subdivision_divisor: 5.0,
            hinge_distance_tolerance: 50.0,
            hinge_softness: 0.005,
            angle_softness: 0.01,
            hinge_core_bias: 0.8,
        }
    }
}

impl AssemblerSettings {
    pub fn from_json(json: &str) -> AssemblyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
