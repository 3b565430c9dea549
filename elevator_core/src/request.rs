use std::fmt;

use crate::bounds::Floor;
use crate::direction::Direction;

/// What a stop demand asks of the car.
///
/// Hall calls (`PickupUp`, `PickupDown`) come from a floor panel and are bound
/// to a car by dispatch. `Destination` is a car call from a rider on board.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    PickupUp = 0,
    PickupDown = 1,
    Destination = 2,
}

impl RequestKind {
    pub fn num_kinds() -> u8 {
        3
    }

    pub fn iter() -> impl Iterator<Item = RequestKind> {
        [RequestKind::PickupUp, RequestKind::PickupDown, RequestKind::Destination].iter().copied()
    }

    pub fn is_pickup(self) -> bool {
        self != RequestKind::Destination
    }

    /// Whether a car heading `direction` serves this kind of request when it
    /// reaches the request's floor. Destinations are always served; a pickup
    /// only when the car is idle or already travelling the rider's way.
    pub fn served_when(self, direction: Direction) -> bool {
        match self {
            RequestKind::Destination => true,
            RequestKind::PickupUp => matches!(direction, Direction::Up | Direction::Idle),
            RequestKind::PickupDown => matches!(direction, Direction::Down | Direction::Idle),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RequestKind::PickupUp => "hall up",
            RequestKind::PickupDown => "hall down",
            RequestKind::Destination => "cab",
        }
    }
}

/// One stop demand. Two requests are the same request when floor and kind match.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Request {
    pub floor: Floor,
    pub kind: RequestKind,
}

impl Request {
    pub fn new(floor: Floor, kind: RequestKind) -> Self {
        Request { floor, kind }
    }

    pub fn destination(floor: Floor) -> Self {
        Request::new(floor, RequestKind::Destination)
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.kind.as_str(), self.floor)
    }
}
