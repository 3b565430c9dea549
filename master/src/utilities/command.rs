use std::str::FromStr;

use elevator_core::{CarId, Direction, Floor};

/// One line typed on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Hall call: `call <floor> up|down`
    Call { floor: Floor, direction: Direction },
    /// Car call: `go <car> <floor>`
    Go { car: CarId, floor: Floor },
    /// Hall call with destination: `ride <from> <to>`
    Ride { from: Floor, to: Floor },
    /// Plays the scripted rides and runs the fleet until it is idle
    Demo,
    Status,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["call", floor, direction] => Ok(Command::Call {
                floor: number(floor)?,
                direction: direction.parse()?,
            }),
            ["go", car, floor] => Ok(Command::Go { car: number(car)?, floor: number(floor)? }),
            ["ride", from, to] => Ok(Command::Ride { from: number(from)?, to: number(to)? }),
            ["demo"] => Ok(Command::Demo),
            ["status"] => Ok(Command::Status),
            ["quit"] | ["exit"] => Ok(Command::Quit),
            _ => Err(format!(
                "unknown command \"{}\", expected call <floor> up|down, go <car> <floor>, ride <from> <to>, demo, status or quit",
                line.trim()
            )),
        }
    }
}

fn number<T: FromStr>(word: &str) -> Result<T, String> {
    word.parse().map_err(|_| format!("{} is not a number", word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command() {
        assert_eq!("call 3 up".parse::<Command>(), Ok(Command::Call { floor: 3, direction: Direction::Up }));
        assert_eq!("call -1 DOWN".parse::<Command>(), Ok(Command::Call { floor: -1, direction: Direction::Down }));
        assert_eq!("  go 1   7 ".parse::<Command>(), Ok(Command::Go { car: 1, floor: 7 }));
        assert_eq!("ride 5 0".parse::<Command>(), Ok(Command::Ride { from: 5, to: 0 }));
        assert_eq!("demo".parse::<Command>(), Ok(Command::Demo));
        assert_eq!("status".parse::<Command>(), Ok(Command::Status));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!("call three up".parse::<Command>().is_err());
        assert!("call 3 left".parse::<Command>().is_err());
        assert!("go -1 3".parse::<Command>().is_err());
        assert!("ride 1".parse::<Command>().is_err());
        assert!("dance".parse::<Command>().is_err());
        assert!("demo 3".parse::<Command>().is_err());
    }

    #[test]
    fn idle_parses_and_is_left_to_the_controller() {
        assert_eq!("call 3 idle".parse::<Command>(), Ok(Command::Call { floor: 3, direction: Direction::Idle }));
    }
}
