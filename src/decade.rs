use std::{ops::RangeInclusive, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{DECADE_SEPARATOR, DECADE_SPAN, YEARS_PER_DECADE, prelude::*};

/// A ten-year bound used by a decade picker (inclusive).
/// The end year is always `start + DECADE_SPAN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{start}/{end}")]
#[serde(try_from = "RawDecade", into = "RawDecade")]
pub struct Decade {
    start: i32,
    end:   i32,
}

/// Unvalidated wire form of [`Decade`].
#[derive(Serialize, Deserialize)]
struct RawDecade {
    start: i32,
    end:   i32,
}

/// Error type for decade operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecadeError {
    /// End year is not nine years after the start year.
    #[error("Invalid decade: {start}/{end} does not span {} years", DECADE_SPAN + 1)]
    InvalidSpan { start: i32, end: i32 },

    /// Decade bounds do not fit in `i32`.
    #[error("Decade starting at {0} overflows the year range")]
    Overflow(i32),

    /// Invalid decade format.
    #[error("Invalid decade format: {0}")]
    InvalidFormat(String),
}

impl Decade {
    /// Creates a new decade with validation.
    ///
    /// # Errors
    /// Returns `DecadeError::InvalidSpan` if `end != start + 9`.
    pub fn new(start: i32, end: i32) -> Result<Self, DecadeError> {
        if start.checked_add(DECADE_SPAN) != Some(end) {
            return Err(DecadeError::InvalidSpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates the decade beginning at `start`.
    ///
    /// # Errors
    /// Returns `DecadeError::Overflow` if the end year does not fit in `i32`.
    pub fn from_start(start: i32) -> Result<Self, DecadeError> {
        let end = start.checked_add(DECADE_SPAN).ok_or(DecadeError::Overflow(start))?;
        Ok(Self { start, end })
    }

    /// Returns the decade aligned to a multiple of ten that holds `year`.
    ///
    /// Alignment rounds toward negative infinity, so year -5 falls in -10/-1.
    ///
    /// # Errors
    /// Returns `DecadeError::Overflow` if the aligned decade leaves the `i32` range.
    pub fn containing(year: i32) -> Result<Self, DecadeError> {
        let start = year
            .checked_sub(year.rem_euclid(YEARS_PER_DECADE))
            .ok_or(DecadeError::Overflow(year))?;
        Self::from_start(start)
    }

    /// Returns the first year of the decade
    pub const fn start(&self) -> i32 {
        self.start
    }

    /// Returns the last year of the decade
    pub const fn end(&self) -> i32 {
        self.end
    }

    /// Returns both bounds as a tuple
    pub const fn bounds(&self) -> (i32, i32) {
        (self.start, self.end)
    }

    /// Checks if the decade contains a given year
    pub const fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }

    /// Years of the decade in ascending order
    pub const fn years(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }

    /// The following decade, or `None` past `i32::MAX`
    pub fn following(&self) -> Option<Self> {
        self.start
            .checked_add(YEARS_PER_DECADE)
            .and_then(|start| Self::from_start(start).ok())
    }

    /// The preceding decade, or `None` before `i32::MIN`
    pub fn preceding(&self) -> Option<Self> {
        self.start
            .checked_sub(YEARS_PER_DECADE)
            .and_then(|start| Self::from_start(start).ok())
    }
}

impl FromStr for Decade {
    type Err = DecadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let Some((start_str, end_str)) = trimmed.split_once(DECADE_SEPARATOR) else {
            return Err(DecadeError::InvalidFormat(format!(
                "No decade separator found (expected '{DECADE_SEPARATOR}'): {s}"
            )));
        };

        if end_str.contains(DECADE_SEPARATOR) {
            let separator_count = trimmed.matches(DECADE_SEPARATOR).count();
            return Err(DecadeError::InvalidFormat(format!(
                "Too many '{DECADE_SEPARATOR}' separators: expected 1, found {separator_count}"
            )));
        }

        let start = parse_year(start_str.trim())?;
        let end = parse_year(end_str.trim())?;

        Self::new(start, end)
    }
}

fn parse_year(s: &str) -> Result<i32, DecadeError> {
    s.parse::<i32>()
        .map_err(|_| DecadeError::InvalidFormat(format!("Not a year: {s}")))
}

impl TryFrom<RawDecade> for Decade {
    type Error = DecadeError;

    fn try_from(raw: RawDecade) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl From<Decade> for RawDecade {
    fn from(decade: Decade) -> Self {
        Self {
            start: decade.start,
            end:   decade.end,
        }
    }
}
