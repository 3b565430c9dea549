use elevator_core::{
    Admission, CarEvent, Controller, Direction, ElevatorError, FleetConfig, Request, RequestKind, Stop,
};

fn single_car() -> Controller {
    Controller::new(&FleetConfig { num_cars: 1, ..FleetConfig::default() }).unwrap()
}

fn stops(events: Vec<CarEvent>) -> Vec<Stop> {
    events
        .into_iter()
        .filter_map(|event| match event {
            CarEvent::DoorsOpened(stop) => Some(stop),
            _ => None,
        })
        .collect()
}

fn assert_idle_iff_empty(controller: &Controller) {
    for car in controller.cars() {
        assert_eq!(
            car.is_idle(),
            car.pending_requests().is_empty(),
            "car {} at floor {} heading {}",
            car.id(),
            car.floor(),
            car.direction()
        );
        assert!(controller.bounds().contains(car.floor()));
    }
}

#[test]
fn look_sweep_serves_rides_in_sweep_order() {
    let mut controller = single_car();
    let mut served = Vec::new();
    for (from, to) in [(0, 6), (3, 8), (5, 0)] {
        if let Admission::ServedHere(stop) = controller.request_ride(from, to).unwrap().admission {
            served.push(stop);
        }
    }
    served.extend(stops(controller.run_until_idle(100)));

    let floors: Vec<_> = served.iter().map(|stop| stop.floor).collect();
    assert_eq!(floors, vec![0, 3, 6, 8, 5, 0]);

    assert_eq!(served[0].picked_up, vec![Request::new(0, RequestKind::PickupUp)]);
    assert_eq!(served[1].picked_up, vec![Request::new(3, RequestKind::PickupUp)]);
    assert_eq!(served[2].dropped_off, vec![Request::destination(6)]);
    assert_eq!(served[3].dropped_off, vec![Request::destination(8)]);
    assert_eq!(served[4].picked_up, vec![Request::new(5, RequestKind::PickupDown)]);
    assert_eq!(served[4].direction, Direction::Down);
    assert_eq!(served[5].dropped_off, vec![Request::destination(0)]);

    let car = controller.car(0).unwrap();
    assert_eq!(car.floor(), 0);
    assert_eq!(car.direction(), Direction::Idle);
    assert!(car.pending_requests().is_empty());
}

#[test]
fn riders_choosing_floors_after_boarding() {
    let mut controller = single_car();
    let destinations = |floor: i32| match floor {
        0 => 6,
        3 => 8,
        5 => 0,
        other => panic!("nobody waits at floor {}", other),
    };

    let mut visited = Vec::new();
    let assignment = controller.request_elevator(0, Direction::Up).unwrap();
    if let Admission::ServedHere(stop) = assignment.admission {
        visited.push(stop.floor);
        controller.select_floor(0, destinations(stop.floor)).unwrap();
    }
    controller.request_elevator(3, Direction::Up).unwrap();
    controller.request_elevator(5, Direction::Down).unwrap();
    assert_idle_iff_empty(&controller);

    for _ in 0..100 {
        if controller.is_idle() {
            break;
        }
        for stop in stops(controller.step()) {
            visited.push(stop.floor);
            if !stop.picked_up.is_empty() {
                controller.select_floor(stop.car, destinations(stop.floor)).unwrap();
            }
        }
        assert_idle_iff_empty(&controller);
    }

    assert_eq!(visited, vec![0, 3, 6, 8, 5, 0]);
    assert!(controller.is_idle());
}

#[test]
fn dispatch_picks_the_closer_idle_car() {
    let mut controller = Controller::new(&FleetConfig { num_cars: 2, ..FleetConfig::default() }).unwrap();
    controller.select_floor(1, 5).unwrap();
    controller.run_until_idle(20);
    assert_eq!(controller.car(0).unwrap().floor(), 0);
    assert_eq!(controller.car(1).unwrap().floor(), 5);

    assert_eq!(controller.request_elevator(3, Direction::Up).unwrap().car, 1);
}

#[test]
fn out_of_range_calls_leave_the_fleet_untouched() {
    let mut controller = Controller::new(&FleetConfig { num_cars: 3, ..FleetConfig::default() }).unwrap();
    controller.select_floor(2, 7).unwrap();
    let before: Vec<_> = controller.cars().iter().map(|car| car.pending_requests()).collect();
    let max = controller.bounds().max;

    for result in [
        controller.request_elevator(-1, Direction::Up),
        controller.request_elevator(max + 1, Direction::Down),
        controller.request_ride(2, max + 1),
    ] {
        assert!(matches!(result, Err(ElevatorError::InvalidFloor { .. })));
    }
    assert_eq!(controller.select_floor(3, 1), Err(ElevatorError::InvalidCarId(3)));

    let after: Vec<_> = controller.cars().iter().map(|car| car.pending_requests()).collect();
    assert_eq!(before, after);
}

#[test]
fn riders_sharing_a_pickup_each_get_their_floor() {
    let mut controller = single_car();
    assert_eq!(controller.request_ride(3, 9).unwrap().admission, Admission::Queued);
    assert_eq!(controller.request_ride(3, 7).unwrap().admission, Admission::Duplicate);
    assert_eq!(
        controller.car(0).unwrap().pending_requests().into_iter().collect::<Vec<_>>(),
        vec![Request::new(3, RequestKind::PickupUp)]
    );

    let served = stops(controller.run_until_idle(100));
    let floors: Vec<_> = served.iter().map(|stop| stop.floor).collect();
    assert_eq!(floors, vec![3, 7, 9]);
    assert_eq!(served[0].picked_up, vec![Request::new(3, RequestKind::PickupUp)]);
    assert_eq!(served[1].dropped_off, vec![Request::destination(7)]);
    assert_eq!(served[2].dropped_off, vec![Request::destination(9)]);
    assert!(controller.is_idle());
}

#[test]
fn repeated_hall_call_is_idempotent() {
    let mut controller = single_car();
    controller.select_floor(0, 9).unwrap();
    controller.request_elevator(4, Direction::Up).unwrap();
    let once = controller.car(0).unwrap().pending_requests();

    let again = controller.request_elevator(4, Direction::Up).unwrap();
    assert_eq!(again.admission, Admission::Duplicate);
    assert_eq!(controller.car(0).unwrap().pending_requests(), once);
}

#[test]
fn down_call_is_not_served_on_the_way_up() {
    let mut controller = single_car();
    controller.select_floor(0, 9).unwrap();
    controller.request_elevator(4, Direction::Down).unwrap();

    let mut first_visit = None;
    while controller.car(0).unwrap().direction() == Direction::Up {
        let events = controller.step();
        let car = controller.car(0).unwrap();
        if car.floor() == 4 && first_visit.is_none() {
            first_visit = Some(stops(events));
        }
    }
    assert_eq!(first_visit, Some(Vec::new()));

    let rest = stops(controller.run_until_idle(100));
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].floor, 4);
    assert_eq!(rest[0].direction, Direction::Down);
}

#[test]
fn invariants_hold_under_a_mixed_workload() {
    let config = FleetConfig { num_cars: 3, min_floor: -2, max_floor: 12, ..FleetConfig::default() };
    let mut controller = Controller::new(&config).unwrap();
    let bounds = controller.bounds();
    let span = (bounds.max - bounds.min + 1) as u64;

    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        seed >> 33
    };

    for _ in 0..400 {
        let floor = bounds.min + (next() % span) as i32;
        let result = match next() % 4 {
            0 => controller.request_elevator(floor, Direction::Up).map(|_| ()),
            1 => controller.request_elevator(floor, Direction::Down).map(|_| ()),
            2 => controller.select_floor((next() % 3) as usize, floor).map(|_| ()),
            _ => {
                let to = bounds.min + (next() % span) as i32;
                controller.request_ride(floor, to).map(|_| ())
            }
        };
        assert!(matches!(result, Ok(()) | Err(ElevatorError::SameFloorRide(_))));
        assert_idle_iff_empty(&controller);

        let before = controller.snapshots();
        controller.step();
        assert_idle_iff_empty(&controller);

        for (was, car) in before.iter().zip(controller.cars()) {
            if was.direction.is_moving() {
                assert_eq!(car.floor(), was.floor + was.direction.delta());
            }
            // a sweep up only ends once nothing is left above
            if was.direction == Direction::Up && car.direction() != Direction::Up {
                assert!(car.pending_requests().iter().all(|r| r.floor <= car.floor()));
            }
            if was.direction == Direction::Down && car.direction() != Direction::Down {
                assert!(car.pending_requests().iter().all(|r| r.floor >= car.floor()));
            }
        }
    }

    controller.run_until_idle(10_000);
    assert!(controller.is_idle());
    assert!(controller.cars().iter().all(|car| car.pending_requests().is_empty()));
}
