use std::{
    fmt::{self, Display},
    num::ParseIntError,
    str::FromStr,
};

use rand::Rng;
use thiserror::Error;

/// One line of a session script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Push(i32),
    Pop,
    Peek,
    Dump,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`push` needs a value")]
    MissingOperand,
    #[error("bad value for `push`: {0}")]
    BadOperand(#[from] ParseIntError),
    #[error("unexpected `{0}` after command")]
    Trailing(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let keyword = words.next().ok_or(ParseCommandError::Empty)?;

        let cmd = match keyword.to_ascii_lowercase().as_str() {
            "push" => {
                let operand = words.next().ok_or(ParseCommandError::MissingOperand)?;
                Self::Push(operand.parse()?)
            }
            "pop" => Self::Pop,
            "peek" => Self::Peek,
            "dump" => Self::Dump,
            _ => return Err(ParseCommandError::Unknown(keyword.to_owned())),
        };

        if let Some(extra) = words.next() {
            return Err(ParseCommandError::Trailing(extra.to_owned()));
        }
        Ok(cmd)
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push(value) => write!(f, "push {value}"),
            Self::Pop => write!(f, "pop"),
            Self::Peek => write!(f, "peek"),
            Self::Dump => write!(f, "dump"),
        }
    }
}

/// Parse a script: one command per line. Blank lines and `#` comments are
/// skipped.
///
/// Each item carries the 1-based line number it came from.
pub fn parse_script(
    script: &str,
) -> impl Iterator<Item = (usize, Result<Command, ParseCommandError>)> + '_ {
    script
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(n, line)| (n, line.parse()))
}

/// A parse failure, and the script line it happened on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("line {line}")]
pub struct ScriptError {
    pub line: usize,
    #[source]
    pub source: ParseCommandError,
}

/// Parse a whole script, stopping at the first bad line.
pub fn read_script(script: &str) -> Result<Vec<Command>, ScriptError> {
    parse_script(script)
        .map(|(line, cmd)| cmd.map_err(|source| ScriptError { line, source }))
        .collect()
}

impl Command {
    /// A random command, weighted towards pushes so the stack actually fills up.
    ///
    /// Pushed values are small, and sometimes negative, `-1` included.
    pub fn random(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..20) {
            0..=9 => Self::Push(rng.gen_range(-5..100)),
            10..=14 => Self::Pop,
            15..=17 => Self::Peek,
            _ => Self::Dump,
        }
    }
}
