/// ----- INPUT MODULE -----
/// Reads commands from the console and forwards them to the controller
/// loop. Lines that do not parse are reported and dropped. The channel
/// closes when stdin does.

use std::io::{self, BufRead};

use crossbeam_channel::Sender;
use log::warn;

use crate::utilities::command::Command;

pub fn main(command_tx: Sender<Command>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("could not read from console: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(command) => {
                if command_tx.send(command).is_err() {
                    break;
                }
            }
            Err(e) => warn!("{}", e),
        }
    }
}
