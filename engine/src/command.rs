//! Typed command surface.
//!
//! The transport parses a chat message into a command name and argument
//! tokens; [`Command::parse`] turns those into a typed call or a usage
//! error. Parse failures never reach the account store.

use std::str::FromStr;

use piso_types::Parity;
use thiserror::Error as ThisError;

/// One parsed engine call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Balance,
    EarnChallenge,
    /// Any non-command message; checked against the pending challenge.
    SubmitText(String),
    Invite,
    Dice { guess: Parity, stake: u64 },
    ScatterSpin { stake: u64 },
    Withdraw,
}

/// Malformed command arguments. Always recoverable, surfaced as a usage
/// message, and never mutates state.
#[derive(Clone, Debug, ThisError, PartialEq, Eq)]
pub enum CommandError {
    #[error("usage: /{name} {usage}")]
    Usage {
        name: &'static str,
        usage: &'static str,
    },
    #[error("guess must be \"odd\" or \"even\" (got {got:?})")]
    InvalidGuess { got: String },
    #[error("stake must be a positive whole number (got {got:?})")]
    InvalidStake { got: String },
    #[error("unknown command {name:?}")]
    Unknown { name: String },
}

impl Command {
    /// Parse a `(name, args)` tuple from the transport.
    ///
    /// `name` is the command without its leading slash. Plain text messages
    /// are not routed here; the transport wraps them in
    /// [`Command::SubmitText`] directly.
    pub fn parse(name: &str, args: &[&str]) -> Result<Self, CommandError> {
        match name {
            "balance" => expect_no_args("balance", args, Command::Balance),
            "captcha2earn" => expect_no_args("captcha2earn", args, Command::EarnChallenge),
            "invite" => expect_no_args("invite", args, Command::Invite),
            "withdraw" => expect_no_args("withdraw", args, Command::Withdraw),
            "dice" => {
                let [guess, stake] = args else {
                    return Err(CommandError::Usage {
                        name: "dice",
                        usage: "<odd|even> <stake>",
                    });
                };
                let guess = Parity::from_str(guess).map_err(|e| CommandError::InvalidGuess {
                    got: e.got,
                })?;
                let stake = parse_stake(stake)?;
                Ok(Command::Dice { guess, stake })
            }
            "scatterspin" => {
                let [stake] = args else {
                    return Err(CommandError::Usage {
                        name: "scatterspin",
                        usage: "<stake>",
                    });
                };
                let stake = parse_stake(stake)?;
                Ok(Command::ScatterSpin { stake })
            }
            other => Err(CommandError::Unknown {
                name: other.to_string(),
            }),
        }
    }
}

fn expect_no_args(
    name: &'static str,
    args: &[&str],
    command: Command,
) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::Usage { name, usage: "" })
    }
}

fn parse_stake(raw: &str) -> Result<u64, CommandError> {
    match raw.parse::<u64>() {
        Ok(stake) if stake > 0 => Ok(stake),
        _ => Err(CommandError::InvalidStake {
            got: raw.to_string(),
        }),
    }
}
