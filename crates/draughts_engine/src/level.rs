use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level must be 1, 2 or 3, got {0}")]
    OutOfRange(u8),
    #[error("cannot parse level from {0:?}")]
    Parse(String),
}

/// AI strength, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Level {
    /// Uniformly random legal move.
    #[default]
    Random = 1,
    /// Any capture, else the first forward step.
    Greedy = 2,
    /// Fixed-depth minimax on material.
    Minimax = 3,
}

impl TryFrom<u8> for Level {
    type Error = LevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Level::Random),
            2 => Ok(Level::Greedy),
            3 => Ok(Level::Minimax),
            other => Err(LevelError::OutOfRange(other)),
        }
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| LevelError::Parse(s.to_string()))?;
        Level::try_from(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Random => "random",
            Level::Greedy => "greedy",
            Level::Minimax => "minimax",
        };
        write!(f, "{} ({})", *self as u8, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels() {
        assert_eq!("3".parse::<Level>(), Ok(Level::Minimax));
        assert_eq!(" 1 ".parse::<Level>(), Ok(Level::Random));
        assert_eq!("4".parse::<Level>(), Err(LevelError::OutOfRange(4)));
        assert_eq!("hard".parse::<Level>(), Err(LevelError::Parse("hard".into())));
    }

    #[test]
    fn levels_are_ordered_by_strength() {
        assert!(Level::Random < Level::Greedy);
        assert!(Level::Greedy < Level::Minimax);
    }
}
