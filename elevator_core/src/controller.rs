/// ----- CONTROLLER -----
/// Owns the fixed fleet and the dispatch strategy. Hall calls go through the
/// strategy, car calls go straight to the named car, and `step` advances
/// every car by one unit of simulated time. All scheduling state lives in
/// the cars.

use log::{debug, warn};

use crate::bounds::{Floor, FloorBounds};
use crate::car::{Admission, CarEvent, CarId, CarSnapshot, ElevatorCar};
use crate::config::FleetConfig;
use crate::direction::Direction;
use crate::dispatch::DispatchStrategy;
use crate::error::{ElevatorError, Result};
use crate::request::RequestKind;

/// Car chosen for a hall call, and what that car did with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub car: CarId,
    pub admission: Admission,
}

pub struct Controller {
    cars: Vec<ElevatorCar>,
    strategy: DispatchStrategy,
    bounds: FloorBounds,
}

impl Controller {
    pub fn new(config: &FleetConfig) -> Result<Self> {
        Controller::with_strategy(config, config.strategy.strategy())
    }

    /// Builds `config.num_cars` idle cars, numbered from 0, all parked at
    /// `config.start_floor`.
    pub fn with_strategy(config: &FleetConfig, strategy: DispatchStrategy) -> Result<Self> {
        if config.num_cars == 0 {
            return Err(ElevatorError::EmptyFleet);
        }
        let bounds = config.bounds();
        let cars = (0..config.num_cars)
            .map(|id| ElevatorCar::new(id, bounds, config.start_floor))
            .collect::<Result<Vec<_>>>()?;
        Ok(Controller { cars, strategy, bounds })
    }

    /// Hall call from a floor panel.
    pub fn request_elevator(&mut self, floor: Floor, direction: Direction) -> Result<Assignment> {
        self.bounds.check(floor).map_err(rejected)?;
        let kind = direction.to_pickup().ok_or(ElevatorError::InvalidDirection).map_err(rejected)?;
        let car = self.dispatch(floor, direction)?;
        let admission = self.cars[car].add_request(floor, kind)?;
        debug!("hall call {} at floor {} assigned to car {}", direction, floor, car);
        Ok(Assignment { car, admission })
    }

    /// Car call from a rider already inside `car`.
    pub fn select_floor(&mut self, car: CarId, floor: Floor) -> Result<Admission> {
        let target = self
            .cars
            .get_mut(car)
            .ok_or(ElevatorError::InvalidCarId(car))
            .map_err(rejected)?;
        target.add_request(floor, RequestKind::Destination).map_err(rejected)
    }

    /// Hall call that also names where the rider is going. The destination
    /// is registered with the chosen car and becomes a car call on boarding.
    pub fn request_ride(&mut self, from: Floor, to: Floor) -> Result<Assignment> {
        self.bounds.check(from).map_err(rejected)?;
        self.bounds.check(to).map_err(rejected)?;
        let direction = Direction::between(from, to);
        if !direction.is_moving() {
            return Err(rejected(ElevatorError::SameFloorRide(from)));
        }
        let car = self.dispatch(from, direction)?;
        let admission = self.cars[car].add_ride(from, to)?;
        debug!("ride {} -> {} assigned to car {}", from, to, car);
        Ok(Assignment { car, admission })
    }

    /// Advances every car by one step and returns what happened, car by car.
    pub fn step(&mut self) -> Vec<CarEvent> {
        self.cars.iter_mut().flat_map(|car| car.step()).collect()
    }

    /// Steps until every car is idle or `max_steps` have run.
    pub fn run_until_idle(&mut self, max_steps: usize) -> Vec<CarEvent> {
        let mut events = Vec::new();
        for _ in 0..max_steps {
            if self.is_idle() {
                break;
            }
            events.extend(self.step());
        }
        events
    }

    pub fn is_idle(&self) -> bool {
        self.cars.iter().all(|car| car.is_idle())
    }

    pub fn car(&self, id: CarId) -> Option<&ElevatorCar> {
        self.cars.get(id)
    }

    pub fn cars(&self) -> &[ElevatorCar] {
        &self.cars
    }

    pub fn snapshots(&self) -> Vec<CarSnapshot> {
        self.cars.iter().map(|car| car.snapshot()).collect()
    }

    pub fn bounds(&self) -> FloorBounds {
        self.bounds
    }

    fn dispatch(&self, floor: Floor, direction: Direction) -> Result<CarId> {
        let snapshots = self.snapshots();
        match (self.strategy)(&snapshots, floor, direction) {
            Some(id) if id < self.cars.len() => Ok(id),
            Some(id) => Err(ElevatorError::InvalidCarId(id)),
            None => Err(ElevatorError::EmptyFleet),
        }
    }
}

fn rejected(e: ElevatorError) -> ElevatorError {
    warn!("rejected call: {}", e);
    e
}
