//! Descriptive records supplied by the caller.
//!
//! A `CoreModel` is moved into the core body it configures; from then on the
//! body owns it and tracks slot occupancy on it.

use serde::{Deserialize, Serialize};

use crate::core::{AssemblyError, AssemblyResult, ModelId};
use crate::rigid_body::Placement;

/// Occupancy of a connection slot. `Occupied` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotState {
    #[default]
    Unoccupied,
    Occupied,
}

/// Attachment point on a core, relative to the core's center.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConnectionSlotModel {
    pub relative_position: Placement,
    #[serde(default)]
    pub state: SlotState,
}

impl ConnectionSlotModel {
    pub fn new(relative_position: Placement) -> Self {
        Self { relative_position, state: SlotState::Unoccupied }
    }

    pub fn is_occupied(&self) -> bool {
        self.state == SlotState::Occupied
    }

    /// Unoccupied -> Occupied. Fails if the slot was already taken.
    pub fn occupy(&mut self, index: usize) -> AssemblyResult<()> {
        match self.state {
            SlotState::Unoccupied => {
                self.state = SlotState::Occupied;
                Ok(())
            }
            SlotState::Occupied => Err(AssemblyError::SlotAlreadyOccupied { slot: index }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoreModel {
    #[serde(default)]
    pub id: ModelId,
    /// Radius of the core's circle.
    pub size: f32,
    pub mass: f32,
    #[serde(default)]
    pub start_position: Placement,
    #[serde(default)]
    pub connection_slots: Vec<ConnectionSlotModel>,
}

impl CoreModel {
    pub fn new(size: f32, mass: f32, start_position: Placement) -> Self {
        Self {
            id: ModelId::new(),
            size,
            mass,
            start_position,
            connection_slots: Vec::new(),
        }
    }

    pub fn with_slot(mut self, relative_position: Placement) -> Self {
        self.connection_slots.push(ConnectionSlotModel::new(relative_position));
        self
    }

    pub fn unoccupied_slots(&self) -> impl Iterator<Item = (usize, &ConnectionSlotModel)> {
        self.connection_slots
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_occupied())
    }

    pub fn occupied_count(&self) -> usize {
        self.connection_slots.iter().filter(|s| s.is_occupied()).count()
    }
}

fn default_bone_mass() -> f32 {
    2.0
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoneModel {
    pub length: f32,
    pub thickness: f32,
    #[serde(default = "default_bone_mass")]
    pub mass: f32,
}

impl BoneModel {
    pub fn new(length: f32, thickness: f32) -> Self {
        Self { length, thickness, mass: default_bone_mass() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_occupies_exactly_once() {
        let mut slot = ConnectionSlotModel::new(Placement::at(1.0, 0.0));
        assert!(slot.occupy(3).is_ok());
        assert!(slot.is_occupied());
        assert_eq!(slot.occupy(3), Err(AssemblyError::SlotAlreadyOccupied { slot: 3 }));
        assert!(slot.is_occupied());
    }

    #[test]
    fn unoccupied_slots_keep_descriptor_order() {
        let mut core = CoreModel::new(5.0, 1.0, Placement::default())
            .with_slot(Placement::at(1.0, 0.0))
            .with_slot(Placement::at(0.0, 1.0))
            .with_slot(Placement::at(-1.0, 0.0));
        core.connection_slots[1].state = SlotState::Occupied;

        let free: Vec<usize> = core.unoccupied_slots().map(|(i, _)| i).collect();
        assert_eq!(free, vec![0, 2]);
        assert_eq!(core.occupied_count(), 1);
    }
}
