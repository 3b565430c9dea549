use std::collections::BTreeSet;
use std::io::{stdout, Stdout, Write};

use crossterm::{cursor, terminal, ExecutableCommand, Result};

use elevator_core::{Controller, Direction, ElevatorCar, Floor, RequestKind};

/// Shafts taller than this only get rows for floors with a car or a call.
const MAX_FLOOR_ROWS: u32 = 40;

pub struct Debug {
    stdout: Stdout,
    lines_printed: u16,
}

impl Debug {
    pub fn new() -> Self {
        Debug {
            stdout: stdout(),
            lines_printed: 0,
        }
    }

    /// Keeps the next table from overwriting whatever was printed since the last one.
    pub fn detach(&mut self) {
        self.lines_printed = 0;
    }

    pub fn printstatus(&mut self, controller: &Controller) -> Result<()> {
        if self.lines_printed > 0 {
            self.stdout.execute(cursor::MoveUp(self.lines_printed))?;
            self.stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        }

        let cars = controller.cars();
        let separator = format!("+------------{}", "+------------".repeat(cars.len())) + "+";
        let mut lines: Vec<String> = Vec::new();

        lines.push(separator.clone());
        let mut header = format!("| {0:<10} ", "FLOOR");
        for car in cars {
            header += &format!("| {0:<10} ", format!("CAR {}", car.id()));
        }
        lines.push(header + "|");
        for floor in floor_rows(controller) {
            lines.push(separator.clone());
            let mut row = format!("| {0:<10} ", floor);
            for car in cars {
                row += &format!("| {0:<10} ", cell(car, floor));
            }
            lines.push(row + "|");
        }
        lines.push(separator);
        lines.push(String::new());

        lines.push(String::from("+------------+------------+------------+------------+"));
        lines.push(format!("| {0:<10} | {1:<10} | {2:<10} | {3:<10} |", "CAR", "FLOOR", "DIRECTION", "PENDING"));
        lines.push(String::from("+------------+------------+------------+------------+"));
        for car in cars {
            lines.push(format!(
                "| {0:<10} | {1:<10} | {2:<10} | {3:<10} |",
                car.id(),
                car.floor(),
                car.direction().as_str(),
                car.pending_requests().len()
            ));
            lines.push(String::from("+------------+------------+------------+------------+"));
        }

        for line in &lines {
            writeln!(self.stdout, "{}", line)?;
        }
        self.stdout.flush()?;
        // a table too tall to move back over is left in place
        self.lines_printed = u16::try_from(lines.len()).unwrap_or(0);
        Ok(())
    }
}

/// Floors to print, top first.
fn floor_rows(controller: &Controller) -> Vec<Floor> {
    let bounds = controller.bounds();
    if bounds.min.abs_diff(bounds.max) < MAX_FLOOR_ROWS {
        return bounds.iter_down().collect();
    }
    let mut floors: BTreeSet<Floor> = BTreeSet::new();
    for car in controller.cars() {
        floors.insert(car.floor());
        floors.extend(car.pending_requests().iter().map(|request| request.floor));
    }
    floors.into_iter().rev().collect()
}

/// `[^]`/`[v]`/`[ ]` marks the car, followed by the calls pending at the floor.
fn cell(car: &ElevatorCar, floor: Floor) -> String {
    let mut cell = String::new();
    if car.floor() == floor {
        cell += match car.direction() {
            Direction::Up => "[^]",
            Direction::Down => "[v]",
            Direction::Idle => "[ ]",
        };
    }
    let pending = car.requests_at_floor(floor);
    for kind in RequestKind::iter() {
        if pending[kind as usize] {
            cell.push(match kind {
                RequestKind::PickupUp => 'u',
                RequestKind::PickupDown => 'd',
                RequestKind::Destination => 'c',
            });
        }
    }
    cell
}
