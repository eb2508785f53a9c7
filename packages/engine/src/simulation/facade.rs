use wasm_bindgen::prelude::*;

use crate::core::{AssemblyError, BodyId, ModelId};
use crate::domain::models::BoneModel;
use crate::rigid_body::{Placement, Vec2};

use super::WorldCore;

fn js_error(e: AssemblyError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_body_id(id: &str) -> Result<BodyId, JsValue> {
    BodyId::parse(id).ok_or_else(|| JsValue::from_str(&format!("invalid body id: {id}")))
}

fn ids_to_array(ids: impl IntoIterator<Item = BodyId>) -> js_sys::Array {
    ids.into_iter()
        .map(|id| JsValue::from_str(&id.to_string()))
        .collect()
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create an empty world with default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: WorldCore::new() }
    }

    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(json: String) -> Result<World, JsValue> {
        let mut core = WorldCore::new();
        core.load_settings_json(&json).map_err(js_error)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn joint_count(&self) -> usize { self.core.joint_count() }

    #[wasm_bindgen(getter)]
    pub fn creature_count(&self) -> usize { self.core.creatures().len() }

    pub fn load_settings(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_settings_json(&json).map_err(js_error)
    }

    // === CREATURE API ===

    /// Assemble a creature from a blueprint JSON.
    /// Returns the core body ID
    pub fn spawn_creature(&mut self, json: String) -> Result<String, JsValue> {
        let handle = self.core.spawn_creature_json(&json).map_err(js_error)?;
        Ok(handle.core.to_string())
    }

    /// Grow a bone on the first free slot of a core.
    /// Returns the bone body ID
    pub fn grow_bone(&mut self, core_id: &str, length: f32, thickness: f32, mass: f32) -> Result<String, JsValue> {
        let core = parse_body_id(core_id)?;
        let bone = BoneModel { length, thickness, mass };
        let attachment = self.core.grow_bone(core, bone).map_err(js_error)?;
        Ok(attachment.bone.to_string())
    }

    /// Core body IDs of every assembled creature
    pub fn creature_cores(&self) -> js_sys::Array {
        ids_to_array(self.core.creatures().iter().map(|c| c.core))
    }

    // === LOOSE BODIES ===

    /// Build a chain along +x starting at (x, y).
    /// Returns the segment body IDs in order
    #[allow(clippy::too_many_arguments)]
    pub fn spawn_chain(
        &mut self,
        x: f32,
        y: f32,
        segment_length: f32,
        segment_width: f32,
        segment_mass: f32,
        spacing: f32,
        total_length: f32,
    ) -> Result<js_sys::Array, JsValue> {
        let ids = self
            .core
            .spawn_chain(
                Vec2::new(x, y),
                segment_length,
                segment_width,
                segment_mass,
                spacing,
                total_length,
                ModelId::new(),
            )
            .map_err(js_error)?;
        Ok(ids_to_array(ids))
    }

    /// Spawn a circular body at (x, y).
    /// Returns the body ID
    pub fn spawn_circle(&mut self, x: f32, y: f32, radius: f32, vertex_count: u16, mass: f32) -> Result<String, JsValue> {
        let id = self
            .core
            .spawn_circle(radius, vertex_count, mass, Placement::at(x, y), ModelId::new())
            .map_err(js_error)?;
        Ok(id.to_string())
    }

    /// Remove expired bodies and joints.
    /// Returns how many items were removed
    pub fn sweep(&mut self) -> u32 {
        let res = self.core.sweep();
        (res.bodies + res.joints) as u32
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Active bodies and joints as JSON
    pub fn graph_json(&self) -> Result<String, JsValue> {
        self.core.graph().to_json().map_err(js_error)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
