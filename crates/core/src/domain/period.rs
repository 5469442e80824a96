use serde::{Deserialize, Serialize};

/// Calendar month of a goal bucket. The reporting console keys goal data by
/// English month names, so the enum owns both casings of the name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

impl Month {
    /// Parses a 1-2 digit month-number string, zero-padded or not.
    /// Anything that does not land in 1..=12 is a contract violation
    /// handled by the caller, so this returns `None` rather than an error.
    pub fn from_number_str(value: &str) -> Option<Self> {
        let number: usize = value.trim().parse().ok()?;
        if !(1..=12).contains(&number) {
            return None;
        }
        Some(MONTHS[number - 1])
    }

    pub fn number(self) -> u8 {
        MONTHS.iter().position(|month| *month == self).map(|index| index as u8 + 1).unwrap_or(0)
    }

    /// Lowercase English name, the canonical form used in table keys.
    pub fn name(self) -> &'static str {
        match self {
            Self::January => "january",
            Self::February => "february",
            Self::March => "march",
            Self::April => "april",
            Self::May => "may",
            Self::June => "june",
            Self::July => "july",
            Self::August => "august",
            Self::September => "september",
            Self::October => "october",
            Self::November => "november",
            Self::December => "december",
        }
    }

    /// Capitalized name for display ("August").
    pub fn capitalized_name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }
}

/// One "month year" goal bucket. The year is carried verbatim into the
/// label; it is display data, not arithmetic data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub month: Month,
    pub year: String,
}

impl Period {
    pub fn new(month: Month, year: impl Into<String>) -> Self {
        Self { month, year: year.into() }
    }

    /// Canonical lowercase table key, e.g. `"august 2025"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.month.name(), self.year.trim())
    }

    /// Display label, e.g. `"August 2025"`.
    pub fn display_label(&self) -> String {
        format!("{} {}", self.month.capitalized_name(), self.year.trim())
    }
}
