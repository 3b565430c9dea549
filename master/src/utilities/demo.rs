use log::info;

use elevator_core::{Admission, CarEvent, Controller, Floor, FloorBounds, Result, Stop};

/// Rides played by the `demo` command: two riders going up, then one
/// heading back down to the ground floor.
pub const RIDES: [(Floor, Floor); 3] = [(0, 6), (3, 8), (5, 0)];

/// Issues every ride in `RIDES`, then runs the fleet until it is idle again.
/// Returns the stops in the order the doors opened. Nothing is issued unless
/// every floor of the script is inside the fleet's bounds.
pub fn play(controller: &mut Controller) -> Result<Vec<Stop>> {
    let bounds = controller.bounds();
    for (from, to) in RIDES {
        bounds.check(from)?;
        bounds.check(to)?;
    }

    let mut stops = Vec::new();
    for (from, to) in RIDES {
        let assignment = controller.request_ride(from, to)?;
        info!("demo: ride {} -> {} assigned to car {}", from, to, assignment.car);
        if let Admission::ServedHere(stop) = assignment.admission {
            stops.push(stop);
        }
    }

    let events = controller.run_until_idle(max_steps(bounds));
    stops.extend(events.into_iter().filter_map(|event| match event {
        CarEvent::DoorsOpened(stop) => Some(stop),
        _ => None,
    }));
    Ok(stops)
}

// a car finishes any mix of work within three sweeps of the shaft
fn max_steps(bounds: FloorBounds) -> usize {
    let span = u64::from(bounds.min.abs_diff(bounds.max));
    usize::try_from(span.saturating_mul(4).saturating_add(16)).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use elevator_core::{Direction, FleetConfig};

    #[test]
    fn single_car_plays_the_look_sweep() {
        let mut controller = Controller::new(&FleetConfig { num_cars: 1, ..FleetConfig::default() }).unwrap();
        let stops = play(&mut controller).unwrap();
        let floors: Vec<_> = stops.iter().map(|stop| stop.floor).collect();
        assert_eq!(floors, vec![0, 3, 6, 8, 5, 0]);
        assert_eq!(stops[4].direction, Direction::Down);
        assert!(controller.is_idle());
    }

    #[test]
    fn fleet_is_idle_after_the_demo() {
        let mut controller = Controller::new(&FleetConfig::default()).unwrap();
        let stops = play(&mut controller).unwrap();
        assert_eq!(stops.iter().map(|stop| stop.picked_up.len()).sum::<usize>(), RIDES.len());
        assert_eq!(stops.iter().map(|stop| stop.dropped_off.len()).sum::<usize>(), RIDES.len());
        assert!(controller.is_idle());
    }

    #[test]
    fn short_shaft_refuses_the_script() {
        let config = FleetConfig { num_cars: 1, max_floor: 5, ..FleetConfig::default() };
        let mut controller = Controller::new(&config).unwrap();
        assert!(play(&mut controller).is_err());
        assert!(controller.cars().iter().all(|car| car.pending_requests().is_empty()));
    }

    #[test]
    fn step_cap_does_not_overflow() {
        assert_eq!(max_steps(FloorBounds::new(0, 10)), 56);
        assert!(max_steps(FloorBounds::new(Floor::MIN, Floor::MAX)) > 0);
    }
}
