//! Dispatch and movement core for a fleet of elevator cars.
//!
//! Hall calls are routed to a car by a [`dispatch`] strategy, car calls go
//! straight to the named car, and every car sweeps its shaft with the LOOK
//! policy one floor per [`Controller::step`].

pub mod bounds;
pub mod car;
pub mod config;
pub mod controller;
pub mod direction;
pub mod dispatch;
pub mod error;
pub mod request;

pub use bounds::{Floor, FloorBounds};
pub use car::{Admission, CarEvent, CarId, CarSnapshot, ElevatorCar, Stop};
pub use config::{ConfigError, FleetConfig};
pub use controller::{Assignment, Controller};
pub use direction::Direction;
pub use dispatch::{DispatchStrategy, StrategyKind};
pub use error::{ElevatorError, Result};
pub use request::{Request, RequestKind};
