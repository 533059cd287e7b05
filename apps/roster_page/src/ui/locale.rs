use std::str::FromStr;

use shared::domain::DutyState;

/// UI language of the page. Korean is what the roster page ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ko,
    En,
}

impl Locale {
    /// Label of the toggle control while the worker is in `state`.
    pub fn toggle_label(self, state: DutyState) -> &'static str {
        match (self, state) {
            (Locale::Ko, DutyState::OffDuty) => "OFF 해제",
            (Locale::Ko, DutyState::OnDuty) => "OFF 설정",
            (Locale::En, DutyState::OffDuty) => "Clear OFF",
            (Locale::En, DutyState::OnDuty) => "Set OFF",
        }
    }

    pub fn reorder_failed(self) -> &'static str {
        match self {
            Locale::Ko => "순서 업데이트에 실패했습니다.",
            Locale::En => "Failed to update the worker order.",
        }
    }

    pub fn toggle_failed(self) -> &'static str {
        match self {
            Locale::Ko => "OFF 상태 업데이트에 실패했습니다.",
            Locale::En => "Failed to update the OFF status.",
        }
    }

    pub fn transport_failed(self) -> &'static str {
        match self {
            Locale::Ko => "서버와 통신 중 오류가 발생했습니다.",
            Locale::En => "An error occurred while communicating with the server.",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ko" | "ko-kr" | "korean" => Ok(Locale::Ko),
            "en" | "en-us" | "en-gb" | "english" => Ok(Locale::En),
            other => Err(format!("unsupported locale '{other}'")),
        }
    }
}
