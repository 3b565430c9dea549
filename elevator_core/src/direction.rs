use std::fmt;
use std::str::FromStr;

use crate::bounds::Floor;
use crate::request::RequestKind;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Down,
    Idle,
    Up,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Idle => "idle",
            Direction::Up => "up",
        }
    }

    /// Floor offset of one movement step in this direction.
    pub fn delta(self) -> i32 {
        match self {
            Direction::Down => -1,
            Direction::Idle => 0,
            Direction::Up => 1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Idle => Direction::Idle,
            Direction::Up => Direction::Down,
        }
    }

    /// Direction of travel from `from` to `to`, `Idle` when they are the same floor.
    pub fn between(from: Floor, to: Floor) -> Self {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Direction::Up,
            std::cmp::Ordering::Less => Direction::Down,
            std::cmp::Ordering::Equal => Direction::Idle,
        }
    }

    pub fn is_moving(self) -> bool {
        self != Direction::Idle
    }

    /// The hall call a rider travelling this way registers.
    pub fn to_pickup(self) -> Option<RequestKind> {
        match self {
            Direction::Up => Some(RequestKind::PickupUp),
            Direction::Down => Some(RequestKind::PickupDown),
            Direction::Idle => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            "idle" | "stop" => Ok(Direction::Idle),
            other => Err(format!("unknown direction {}", other)),
        }
    }
}
