use serde::{Deserialize, Serialize};

// Stored as a plain JSON boolean, true meaning 12-hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum ClockMode {
    TwelveHour,
    TwentyFourHour,
}

impl Default for ClockMode {
    fn default() -> Self {
        Self::TwelveHour
    }
}

impl ClockMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::TwelveHour => Self::TwentyFourHour,
            Self::TwentyFourHour => Self::TwelveHour,
        }
    }
}

impl From<bool> for ClockMode {
    fn from(twelve_hour: bool) -> Self {
        if twelve_hour {
            Self::TwelveHour
        } else {
            Self::TwentyFourHour
        }
    }
}

impl From<ClockMode> for bool {
    fn from(mode: ClockMode) -> Self {
        matches!(mode, ClockMode::TwelveHour)
    }
}
