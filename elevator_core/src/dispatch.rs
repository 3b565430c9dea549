/// ----- DISPATCH -----
/// Stateless hall call assignment. A strategy is a plain function that looks
/// at snapshots of the fleet and names the car that should take a new hall
/// call. It never touches the cars themselves.

use std::fmt;
use std::str::FromStr;

use crate::bounds::Floor;
use crate::car::{CarId, CarSnapshot};
use crate::direction::Direction;

pub type DispatchStrategy = fn(&[CarSnapshot], Floor, Direction) -> Option<CarId>;

/// Added to the cost of a car that is heading away from the call or has
/// already passed it. Larger than any distance between two `i32` floors.
pub const LARGE_PENALTY: u64 = 1 << 32;

/// Prefers idle cars and cars already travelling toward the call in its
/// direction, nearest first. Ties go to the lowest car id.
pub fn direction_aware(cars: &[CarSnapshot], floor: Floor, direction: Direction) -> Option<CarId> {
    cars.iter()
        .min_by_key(|car| (direction_aware_cost(car, floor, direction), car.id))
        .map(|car| car.id)
}

pub fn direction_aware_cost(car: &CarSnapshot, floor: Floor, direction: Direction) -> u64 {
    let distance = u64::from(car.floor.abs_diff(floor));
    let on_the_way = match car.direction {
        Direction::Idle => true,
        Direction::Up => direction == Direction::Up && car.floor <= floor,
        Direction::Down => direction == Direction::Down && car.floor >= floor,
    };
    if on_the_way {
        distance
    } else {
        distance + LARGE_PENALTY
    }
}

/// Closest car regardless of where it is heading.
pub fn nearest(cars: &[CarSnapshot], floor: Floor, _direction: Direction) -> Option<CarId> {
    cars.iter()
        .min_by_key(|car| (car.floor.abs_diff(floor), car.id))
        .map(|car| car.id)
}

/// Every call goes to the lowest numbered car.
pub fn first_car(cars: &[CarSnapshot], _floor: Floor, _direction: Direction) -> Option<CarId> {
    cars.iter().map(|car| car.id).min()
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    DirectionAware,
    Nearest,
    FirstCar,
}

impl StrategyKind {
    pub fn strategy(self) -> DispatchStrategy {
        match self {
            StrategyKind::DirectionAware => direction_aware,
            StrategyKind::Nearest => nearest,
            StrategyKind::FirstCar => first_car,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::DirectionAware => "direction_aware",
            StrategyKind::Nearest => "nearest",
            StrategyKind::FirstCar => "first_car",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direction_aware" => Ok(StrategyKind::DirectionAware),
            "nearest" => Ok(StrategyKind::Nearest),
            "first_car" => Ok(StrategyKind::FirstCar),
            other => Err(format!("unknown dispatch strategy {}", other)),
        }
    }
}
