//! Errors returned synchronously by fleet operations.

use crate::bounds::Floor;
use crate::car::CarId;

pub type Result<T> = std::result::Result<T, ElevatorError>;

/// Rejected calls. Each is detected before any car state is touched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ElevatorError {
    #[error("invalid floor {floor}, the fleet serves floors {min} to {max}")]
    InvalidFloor { floor: Floor, min: Floor, max: Floor },

    #[error("hall calls must go up or down")]
    InvalidDirection,

    #[error("no car with id {0}")]
    InvalidCarId(CarId),

    #[error("ride from floor {0} to itself")]
    SameFloorRide(Floor),

    #[error("the fleet has no cars")]
    EmptyFleet,
}
