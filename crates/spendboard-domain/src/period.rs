//! Reporting period selection and time-series bucket keys.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::deserialize_calendar_number;

/// Failure raised while building or parsing a [`PeriodSelector`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodParseError {
    #[error("month must be between 1 and 12, got {0}")]
    MonthOutOfRange(u32),
    #[error("invalid period `{0}`; expected `all`, `YYYY` or `YYYY-MM`")]
    Malformed(String),
}

/// Discriminant of a [`PeriodSelector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodMode {
    Month,
    Year,
    All,
}

impl fmt::Display for PeriodMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PeriodMode::Month => "month",
            PeriodMode::Year => "year",
            PeriodMode::All => "all",
        };
        f.write_str(label)
    }
}

/// Reporting window applied to each item's derived date.
///
/// Months are calendar months (1-12), never zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum PeriodSelector {
    Month {
        #[serde(deserialize_with = "deserialize_calendar_number")]
        year: i32,
        #[serde(deserialize_with = "deserialize_calendar_number")]
        month: u32,
    },
    Year {
        #[serde(deserialize_with = "deserialize_calendar_number")]
        year: i32,
    },
    #[default]
    All,
}

impl PeriodSelector {
    /// Builds a month selector, rejecting months outside 1-12.
    pub fn month(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::MonthOutOfRange(month));
        }
        Ok(PeriodSelector::Month { year, month })
    }

    pub fn year(year: i32) -> Self {
        PeriodSelector::Year { year }
    }

    pub fn mode(&self) -> PeriodMode {
        match self {
            PeriodSelector::Month { .. } => PeriodMode::Month,
            PeriodSelector::Year { .. } => PeriodMode::Year,
            PeriodSelector::All => PeriodMode::All,
        }
    }

    /// Checks the month range of a selector that bypassed [`PeriodSelector::month`],
    /// e.g. one deserialized from the presentation layer.
    pub fn validate(self) -> Result<Self, PeriodParseError> {
        match self {
            PeriodSelector::Month { year, month } => Self::month(year, month),
            other => Ok(other),
        }
    }

    /// Period predicate: does `date` fall inside this window?
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            PeriodSelector::All => true,
            PeriodSelector::Year { year } => date.year() == year,
            PeriodSelector::Month { year, month } => date.year() == year && date.month() == month,
        }
    }

    /// Time-series bucket the given date lands in under this selector's mode.
    pub fn bucket_for(&self, date: NaiveDate) -> TimeBucket {
        match self {
            PeriodSelector::All => TimeBucket::YearMonth {
                year: date.year(),
                month: date.month(),
            },
            PeriodSelector::Year { .. } | PeriodSelector::Month { .. } => {
                TimeBucket::Month {
                    month: date.month(),
                }
            }
        }
    }
}

impl fmt::Display for PeriodSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodSelector::All => f.write_str("all"),
            PeriodSelector::Year { year } => write!(f, "{year}"),
            PeriodSelector::Month { year, month } => write!(f, "{year}-{month:02}"),
        }
    }
}

impl FromStr for PeriodSelector {
    type Err = PeriodParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(PeriodSelector::All);
        }
        let malformed = || PeriodParseError::Malformed(trimmed.to_string());
        match trimmed.split_once('-') {
            None => trimmed
                .parse::<i32>()
                .map(PeriodSelector::year)
                .map_err(|_| malformed()),
            Some((year, month)) => {
                let year = year.parse::<i32>().map_err(|_| malformed())?;
                let month = month.parse::<u32>().map_err(|_| malformed())?;
                PeriodSelector::month(year, month)
            }
        }
    }
}

/// Key of one point in the spend/saving time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimeBucket {
    /// A calendar month within the selected year or month.
    Month { month: u32 },
    /// A calendar month across unrestricted history.
    YearMonth { year: i32, month: u32 },
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeBucket::Month { month } => write!(f, "{month:02}"),
            TimeBucket::YearMonth { year, month } => write!(f, "{year}-{month:02}"),
        }
    }
}
