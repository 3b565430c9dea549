use crate::error::{ElevatorError, Result};

pub type Floor = i32;

/// Inclusive floor range served by a fleet. Fixed when the fleet is built.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorBounds {
    pub min: Floor,
    pub max: Floor,
}

impl FloorBounds {
    pub fn new(min: Floor, max: Floor) -> Self {
        FloorBounds { min, max }
    }

    pub fn contains(&self, floor: Floor) -> bool {
        (self.min..=self.max).contains(&floor)
    }

    pub fn check(&self, floor: Floor) -> Result<Floor> {
        if self.contains(floor) {
            Ok(floor)
        } else {
            Err(ElevatorError::InvalidFloor { floor, min: self.min, max: self.max })
        }
    }

    /// Floors from top to bottom, the order status tables are printed in.
    pub fn iter_down(&self) -> impl Iterator<Item = Floor> {
        (self.min..=self.max).rev()
    }
}
