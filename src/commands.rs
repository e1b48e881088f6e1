//! Command-line parsing for the script interpreter
//!
//! Each input line is split on whitespace and mapped to a [`Command`]. All
//! parse failures carry the exact message the runner prints; none of them
//! stop a run.

/// A single parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `create_parking_lot <capacity>`
    Create { capacity: usize },
    /// `park <registration>`
    Park { registration: String },
    /// `leave <registration> <hours>`
    Leave { registration: String, hours: u64 },
    /// `status`
    Status,
}

/// A rejected input line
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid create_parking_lot command")]
    CreateArity,

    #[error("Invalid capacity")]
    InvalidCapacity,

    #[error("Invalid park command")]
    ParkArity,

    #[error("Invalid leave command")]
    LeaveArity,

    #[error("Invalid hours")]
    InvalidHours,

    #[error("Invalid status command")]
    StatusArity,

    #[error("Unknown command: {0}")]
    Unknown(String),
}

/// Parse one input line
///
/// Returns `Ok(None)` for blank lines (the runner skips them). Token counts
/// are checked per command; a negative or non-numeric capacity or hours value
/// fails the integer parse and is rejected here, before the core is called.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let Some((&command, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match command {
        "create_parking_lot" => {
            let [capacity] = args else {
                return Err(ParseError::CreateArity);
            };
            let capacity = capacity.parse().map_err(|_| ParseError::InvalidCapacity)?;
            Command::Create { capacity }
        }
        "park" => {
            let [registration] = args else {
                return Err(ParseError::ParkArity);
            };
            Command::Park {
                registration: registration.to_string(),
            }
        }
        "leave" => {
            let [registration, hours] = args else {
                return Err(ParseError::LeaveArity);
            };
            let hours = hours.parse().map_err(|_| ParseError::InvalidHours)?;
            Command::Leave {
                registration: registration.to_string(),
                hours,
            }
        }
        "status" => {
            if !args.is_empty() {
                return Err(ParseError::StatusArity);
            }
            Command::Status
        }
        other => return Err(ParseError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}
