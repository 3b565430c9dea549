/// ----- CAR MODULE -----
/// One elevator car and its LOOK state machine. A car keeps sweeping in its
/// current direction while any pending request lies ahead, serves every
/// request on the way that matches its heading, and reverses only when
/// nothing is left ahead.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, info};

use crate::bounds::{Floor, FloorBounds};
use crate::direction::Direction;
use crate::error::{ElevatorError, Result};
use crate::request::{Request, RequestKind};

pub type CarId = usize;

/// Doors opening at a floor, with the requests resolved there.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    pub car: CarId,
    pub floor: Floor,
    pub direction: Direction,
    pub picked_up: Vec<Request>,
    pub dropped_off: Vec<Request>,
}

/// What a car did during one step. A car opens its doors at most once per
/// floor per step: calls served on arrival and after turning around at the
/// end of a sweep are reported together in a single `DoorsOpened`.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CarEvent {
    Moved { car: CarId, from: Floor, to: Floor },
    DoorsOpened(Stop),
    DirectionChanged { car: CarId, from: Direction, to: Direction },
}

/// Outcome of handing a request to a car.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Queued,
    /// An identical `(floor, kind)` request was already pending.
    Duplicate,
    /// The car was idle at that floor and opened its doors on the spot.
    ServedHere(Stop),
}

/// Read-only view of a car, the only thing dispatch strategies get to see.
#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarSnapshot {
    pub id: CarId,
    pub floor: Floor,
    pub direction: Direction,
}

#[derive(Debug, Clone)]
pub struct ElevatorCar {
    id: CarId,
    floor: Floor,
    direction: Direction,
    requests: BTreeSet<Request>,
    // destinations announced together with a hall call, boarded when the call is served
    riders: BTreeMap<Request, BTreeSet<Floor>>,
    bounds: FloorBounds,
}

impl ElevatorCar {
    pub fn new(id: CarId, bounds: FloorBounds, start_floor: Floor) -> Result<Self> {
        bounds.check(start_floor)?;
        Ok(ElevatorCar {
            id,
            floor: start_floor,
            direction: Direction::Idle,
            requests: BTreeSet::new(),
            riders: BTreeMap::new(),
            bounds,
        })
    }

    pub fn id(&self) -> CarId {
        self.id
    }

    pub fn floor(&self) -> Floor {
        self.floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Copy of the pending set, ordered by floor then kind.
    pub fn pending_requests(&self) -> BTreeSet<Request> {
        self.requests.clone()
    }

    pub fn has_requests(&self) -> bool {
        !self.requests.is_empty()
    }

    pub fn is_idle(&self) -> bool {
        self.direction == Direction::Idle
    }

    pub fn snapshot(&self) -> CarSnapshot {
        CarSnapshot {
            id: self.id,
            floor: self.floor,
            direction: self.direction,
        }
    }

    /// Pending flags at `floor`, indexed by `RequestKind as usize`.
    pub fn requests_at_floor(&self, floor: Floor) -> Vec<bool> {
        let mut flags = vec![false; RequestKind::num_kinds() as usize];
        for request in self.requests_at(floor) {
            flags[request.kind as usize] = true;
        }
        flags
    }

    pub fn add_request(&mut self, floor: Floor, kind: RequestKind) -> Result<Admission> {
        self.bounds.check(floor)?;
        let request = Request::new(floor, kind);
        if self.requests.contains(&request) {
            debug!("car {}: {} already pending", self.id, request);
            return Ok(Admission::Duplicate);
        }
        Ok(self.admit(request))
    }

    /// Hall call with a known destination. The destination becomes a car call
    /// when the rider is picked up at `from`.
    pub fn add_ride(&mut self, from: Floor, to: Floor) -> Result<Admission> {
        self.bounds.check(from)?;
        self.bounds.check(to)?;
        let kind = Direction::between(from, to)
            .to_pickup()
            .ok_or(ElevatorError::SameFloorRide(from))?;
        let pickup = Request::new(from, kind);
        self.riders.entry(pickup).or_default().insert(to);
        if self.requests.contains(&pickup) {
            debug!("car {}: {} already pending, rider to {} joins it", self.id, pickup, to);
            return Ok(Admission::Duplicate);
        }
        Ok(self.admit(pickup))
    }

    fn admit(&mut self, request: Request) -> Admission {
        self.requests.insert(request);
        debug!("car {}: added {}", self.id, request);
        if self.direction.is_moving() {
            return Admission::Queued;
        }

        // An idle car wakes up right away: requests at its floor are resolved
        // in place and it takes a heading toward whatever remains.
        let mut events = Vec::new();
        self.settle(&mut events);
        self.note_turn(Direction::Idle, &mut events);
        events
            .into_iter()
            .find_map(|event| match event {
                CarEvent::DoorsOpened(stop) => Some(stop),
                _ => None,
            })
            .map_or(Admission::Queued, Admission::ServedHere)
    }

    /// LOOK stop rule: drop off anyone bound for `floor`, and pick up hall
    /// calls at `floor` that go the way the car is heading. Opposite-direction
    /// calls wait for a later sweep.
    pub fn should_stop_at(&self, floor: Floor) -> bool {
        self.requests_at(floor).any(|request| request.kind.served_when(self.direction))
    }

    /// Resolves every request at the current floor that the current heading
    /// serves, boarding announced riders as car calls.
    pub fn open_doors(&mut self) -> Stop {
        let floor = self.floor;
        let served: Vec<Request> = self
            .requests_at(floor)
            .filter(|request| request.kind.served_when(self.direction))
            .copied()
            .collect();

        let mut stop = Stop {
            car: self.id,
            floor,
            direction: self.direction,
            picked_up: Vec::new(),
            dropped_off: Vec::new(),
        };
        for request in served {
            self.requests.remove(&request);
            if request.kind.is_pickup() {
                for destination in self.riders.remove(&request).unwrap_or_default() {
                    if destination != floor {
                        self.requests.insert(Request::destination(destination));
                    }
                }
                stop.picked_up.push(request);
            } else {
                stop.dropped_off.push(request);
            }
        }

        info!(
            "car {}: doors open at floor {} (picked up {}, dropped off {})",
            self.id,
            floor,
            stop.picked_up.len(),
            stop.dropped_off.len()
        );
        stop
    }

    /// One unit of simulated time: move a floor if heading somewhere, serve
    /// the floor reached, then pick the heading for the next step.
    pub fn step(&mut self) -> Vec<CarEvent> {
        let mut events = Vec::new();
        let before = self.direction;

        match self.direction {
            Direction::Idle => {
                if self.requests.is_empty() {
                    return events;
                }
                self.settle(&mut events);
            }
            Direction::Up | Direction::Down => {
                let from = self.floor;
                let to = from + self.direction.delta();
                // a moving car always has a target ahead, so `to` is in bounds
                if self.bounds.contains(to) {
                    self.floor = to;
                    debug!("car {}: moving {} to floor {}", self.id, self.direction, to);
                    events.push(CarEvent::Moved { car: self.id, from, to });
                    self.serve_here(&mut events);
                }
                self.settle(&mut events);
            }
        }

        self.note_turn(before, &mut events);
        events
    }

    /// Chooses the heading for the next step. The current floor must already
    /// have been served for the current heading.
    fn settle(&mut self, events: &mut Vec<CarEvent>) {
        let heading = self.direction;
        if heading.is_moving() {
            if self.has_requests_ahead(heading) {
                return;
            }
            // end of the sweep: turn here and serve calls waiting for the way back
            self.direction = heading.reversed();
            self.serve_here(events);
            if self.has_requests_ahead(self.direction) {
                return;
            }
            self.direction = Direction::Idle;
        }

        self.serve_here(events);
        self.direction = if self.has_requests_ahead(Direction::Up) {
            Direction::Up
        } else if self.has_requests_ahead(Direction::Down) {
            Direction::Down
        } else {
            Direction::Idle
        };
    }

    fn serve_here(&mut self, events: &mut Vec<CarEvent>) {
        if !self.should_stop_at(self.floor) {
            return;
        }
        let stop = self.open_doors();
        match events.last_mut() {
            // doors are still open from the arriving heading; the car leaves the new way
            Some(CarEvent::DoorsOpened(open)) if open.floor == stop.floor => {
                open.direction = stop.direction;
                open.picked_up.extend(stop.picked_up);
                open.dropped_off.extend(stop.dropped_off);
            }
            _ => events.push(CarEvent::DoorsOpened(stop)),
        }
    }

    fn note_turn(&self, before: Direction, events: &mut Vec<CarEvent>) {
        if self.direction != before {
            info!("car {}: {} -> {} at floor {}", self.id, before, self.direction, self.floor);
            events.push(CarEvent::DirectionChanged { car: self.id, from: before, to: self.direction });
        }
    }

    /// Whether any request's effective target lies strictly beyond the
    /// current floor in `direction`.
    fn has_requests_ahead(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.requests.iter().next_back().map_or(false, |r| r.floor > self.floor),
            Direction::Down => self.requests.iter().next().map_or(false, |r| r.floor < self.floor),
            Direction::Idle => false,
        }
    }

    fn requests_at(&self, floor: Floor) -> impl Iterator<Item = &Request> {
        self.requests
            .range(Request::new(floor, RequestKind::PickupUp)..=Request::new(floor, RequestKind::Destination))
    }
}
