use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(WorkerId);

/// Scheduling state of a single worker. The wire format only carries the
/// `is_off` boolean; this enum is the typed view of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyState {
    OnDuty,
    OffDuty,
}

impl DutyState {
    pub fn from_is_off(is_off: bool) -> Self {
        if is_off {
            Self::OffDuty
        } else {
            Self::OnDuty
        }
    }

    pub fn is_off(self) -> bool {
        self == Self::OffDuty
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::OnDuty => Self::OffDuty,
            Self::OffDuty => Self::OnDuty,
        }
    }
}

/// Row data the initial page render is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerSummary {
    pub id: WorkerId,
    pub name: String,
    #[serde(default)]
    pub is_off: bool,
}

impl WorkerSummary {
    pub fn new(id: WorkerId, name: impl Into<String>, is_off: bool) -> Self {
        Self {
            id,
            name: name.into(),
            is_off,
        }
    }

    pub fn duty_state(&self) -> DutyState {
        DutyState::from_is_off(self.is_off)
    }
}
