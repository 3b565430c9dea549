use std::env;
use std::error::Error;
use std::thread;

use crossbeam_channel::{never, select, tick, unbounded};
use log::{info, warn};

use elevator_core::{Admission, Controller, FleetConfig};

use crate::utilities::args::Args;
use crate::utilities::command::Command;
use crate::utilities::debug::Debug;
use crate::utilities::demo;

mod input;

pub fn run() -> Result<(), Box<dyn Error>> {
    // READ CONFIGURATION
    let args: Vec<String> = env::args().skip(1).collect();
    let args = Args::parse(&args);
    let mut config = FleetConfig::load(args.config_path())?;
    args.apply(&mut config);
    config.validate()?;
    info!(
        "starting {} cars on floors {} to {}, tick {}ms, {} dispatch",
        config.num_cars, config.min_floor, config.max_floor, config.tick_ms, config.strategy
    );

    let mut controller = Controller::new(&config)?;

    // INITIALIZE THREAD FOR CONSOLE INPUT
    let (command_tx, command_rx) = unbounded::<Command>();
    thread::Builder::new().name("console_input".to_string()).spawn(move || input::main(command_tx))?;

    let timer = tick(config.tick());
    let mut draining = false;
    let mut debug = Debug::new();
    debug.printstatus(&controller)?;

    loop {
        let commands = if draining { never() } else { command_rx.clone() };
        select! {
            recv(commands) -> msg => {
                match msg {
                    Ok(Command::Quit) => {
                        println!("STOPPING PROGRAM...");
                        return Ok(())
                    },
                    Ok(Command::Demo) => {
                        match demo::play(&mut controller) {
                            Ok(stops) => {
                                for stop in &stops {
                                    println!(
                                        "car {} stops at floor {} heading {}: picked up {}, dropped off {}",
                                        stop.car,
                                        stop.floor,
                                        stop.direction,
                                        stop.picked_up.len(),
                                        stop.dropped_off.len()
                                    );
                                }
                                debug.detach();
                            },
                            Err(e) => warn!("demo not played: {}", e),
                        }
                        debug.printstatus(&controller)?;
                    },
                    Ok(Command::Status) => {
                        println!("{}", serde_json::to_string_pretty(&controller.snapshots())?);
                        debug.detach();
                    },
                    Ok(command) => {
                        execute(&mut controller, command);
                        debug.printstatus(&controller)?;
                    },
                    Err(_) => {
                        // console closed: finish the work already accepted, then stop
                        draining = true;
                    },
                }
            },
            recv(timer) -> _ => {
                let events = controller.step();
                if !events.is_empty() {
                    debug.printstatus(&controller)?;
                }
                if draining && controller.is_idle() {
                    return Ok(())
                }
            },
        }
    }
}

fn execute(controller: &mut Controller, command: Command) {
    let outcome = match command {
        Command::Call { floor, direction } => controller
            .request_elevator(floor, direction)
            .map(|assignment| (assignment.car, assignment.admission)),
        Command::Go { car, floor } => controller.select_floor(car, floor).map(|admission| (car, admission)),
        Command::Ride { from, to } => controller
            .request_ride(from, to)
            .map(|assignment| (assignment.car, assignment.admission)),
        Command::Demo | Command::Status | Command::Quit => return,
    };

    match outcome {
        Ok((car, Admission::Queued)) => info!("{:?} queued on car {}", command, car),
        Ok((car, Admission::Duplicate)) => info!("{:?} already pending on car {}", command, car),
        Ok((car, Admission::ServedHere(stop))) => {
            info!("{:?} served by car {} at floor {}", command, car, stop.floor)
        }
        Err(e) => warn!("{:?} rejected: {}", command, e),
    }
}
