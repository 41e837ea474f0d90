use serde::{Deserialize, Serialize};

/// Direction of a badge punch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    /// Convert the reader's direction code ("0" = IN, "1" = OUT).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(Direction::In),
            "1" => Some(Direction::Out),
            _ => None,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "in" => Some(Direction::In),
            "out" => Some(Direction::Out),
            _ => None,
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, Direction::In)
    }
}
