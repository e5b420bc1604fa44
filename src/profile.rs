use std::{
    borrow::Cow,
    ops::{Deref, RangeInclusive},
};

use serde::{Deserialize, Serialize};

use crate::{
    DAYS_PER_WEEK, DAY_LABELS, DEFAULT_YEARS_RANGE, DayOffset, Decade, LONG_MONTH_LABELS, LONG_YEARS_RANGE,
    MONTHS_PER_YEAR, SHORT_MONTH_LABELS, ShapeError, YEARS_PER_DECADE, prelude::*,
};

/// A calendar label. Presets borrow static strings, loaded profiles own theirs.
pub type Label = Cow<'static, str>;

/// Which label table a profile error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum LabelField {
    #[display(fmt = "days")]
    Days,
    #[display(fmt = "months")]
    Months,
}

/// Error type for profile construction and lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    /// Wrong number of labels in a table.
    #[error("Invalid profile: {field} needs {expected} labels, found {found}")]
    LabelCount {
        field:    LabelField,
        expected: usize,
        found:    usize,
    },

    /// A label is empty or whitespace.
    #[error("Invalid profile: {field}[{index}] is empty")]
    EmptyLabel { field: LabelField, index: usize },

    /// Error in a shared shape constraint.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Registry already holds a profile with this name.
    #[error("Profile already registered: {0}")]
    DuplicateProfile(String),

    /// Registry holds no profile with this name.
    #[error("Unknown profile: {0}")]
    UnknownProfile(String),
}

/// Named-by-registry set of calendar labels and picker limits.
///
/// Label counts are fixed by the array types, so a `Profile` always holds
/// 7 weekday labels (Sunday first) and 12 month labels (January first).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawProfile", into = "RawProfile")]
pub struct Profile {
    days:        [Label; DAYS_PER_WEEK],
    months:      [Label; MONTHS_PER_YEAR],
    day_offset:  DayOffset,
    years_range: u16,
}

/// Unvalidated wire form of [`Profile`].
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProfile {
    days:        Vec<Label>,
    months:      Vec<Label>,
    day_offset:  u8,
    years_range: u16,
}

impl Profile {
    /// Abbreviated month names, 100 scrollable years
    pub fn short() -> Self {
        Self {
            days:        DAY_LABELS.map(Cow::Borrowed),
            months:      SHORT_MONTH_LABELS.map(Cow::Borrowed),
            day_offset:  DayOffset::default(),
            years_range: DEFAULT_YEARS_RANGE,
        }
    }

    /// Full month names, 50 scrollable years
    pub fn long() -> Self {
        Self {
            days:        DAY_LABELS.map(Cow::Borrowed),
            months:      LONG_MONTH_LABELS.map(Cow::Borrowed),
            day_offset:  DayOffset::default(),
            years_range: LONG_YEARS_RANGE,
        }
    }

    /// Creates a profile from runtime label lists.
    ///
    /// # Errors
    /// Returns `ProfileError::LabelCount` if `days` does not hold 7 labels or
    /// `months` does not hold 12, `ProfileError::EmptyLabel` for a blank label
    /// and `ProfileError::Shape` if `day_offset` is > 6.
    pub fn from_parts<D, M, S>(days: D, months: M, day_offset: u8, years_range: u16) -> Result<Self, ProfileError>
    where
        D: IntoIterator<Item = S>,
        M: IntoIterator<Item = S>,
        S: Into<Label>,
    {
        let days = collect_labels(LabelField::Days, days.into_iter().map(Into::into).collect())?;
        let months = collect_labels(LabelField::Months, months.into_iter().map(Into::into).collect())?;
        let day_offset = DayOffset::new(day_offset)?;
        Ok(Self {
            days,
            months,
            day_offset,
            years_range,
        })
    }

    /// Returns a copy with a different week start
    #[must_use]
    pub const fn with_day_offset(mut self, day_offset: DayOffset) -> Self {
        self.day_offset = day_offset;
        self
    }

    /// Returns a copy with a different scroll limit
    #[must_use]
    pub const fn with_years_range(mut self, years_range: u16) -> Self {
        self.years_range = years_range;
        self
    }

    /// Returns the weekday labels, Sunday first
    pub const fn days(&self) -> &[Label; DAYS_PER_WEEK] {
        &self.days
    }

    /// Returns the month labels, January first
    pub const fn months(&self) -> &[Label; MONTHS_PER_YEAR] {
        &self.months
    }

    /// Returns the week-start rotation
    pub const fn day_offset(&self) -> DayOffset {
        self.day_offset
    }

    /// Returns how many years the picker may scroll each way
    pub const fn years_range(&self) -> u16 {
        self.years_range
    }

    /// Weekday label at `index` (0 = Sunday), `None` past 6
    pub fn day_label(&self, index: usize) -> Option<&str> {
        self.days.get(index).map(Deref::deref)
    }

    /// Month label at `index` (0 = January), `None` past 11
    pub fn month_label(&self, index: usize) -> Option<&str> {
        self.months.get(index).map(Deref::deref)
    }

    /// Header row of the month grid, starting at `days[day_offset]`.
    pub fn weekday_headers(&self) -> [&str; DAYS_PER_WEEK] {
        let offset = self.day_offset.as_index();
        std::array::from_fn(|column| &*self.days[(column + offset) % DAYS_PER_WEEK])
    }

    /// Grid column of a weekday (0 = Sunday) once the week start is rotated.
    ///
    /// Returns `None` if `weekday` is not in `0..=6`.
    pub const fn weekday_column(&self, weekday: usize) -> Option<usize> {
        if weekday >= DAYS_PER_WEEK {
            return None;
        }
        Some((weekday + DAYS_PER_WEEK - self.day_offset.as_index()) % DAYS_PER_WEEK)
    }

    /// Years reachable from `reference` in the year picker (inclusive).
    pub fn year_bounds(&self, reference: i32) -> RangeInclusive<i32> {
        let range = i32::from(self.years_range);
        reference.saturating_sub(range)..=reference.saturating_add(range)
    }

    /// Whether scrolling `offset` years from the reference year is allowed
    pub fn is_scroll_offset_valid(&self, offset: i32) -> bool {
        offset.unsigned_abs() <= u32::from(self.years_range)
    }

    /// Pulls `year` back inside the bounds around `reference`
    pub fn clamp_year(&self, reference: i32, year: i32) -> i32 {
        let bounds = self.year_bounds(reference);
        year.clamp(*bounds.start(), *bounds.end())
    }

    /// Decades overlapping the year bounds around `reference`, ascending.
    pub fn decades(&self, reference: i32) -> impl Iterator<Item = Decade> + use<> {
        let bounds = self.year_bounds(reference);
        let (first, last) = (*bounds.start(), *bounds.end());
        // Within 8 years of i32::MIN the aligned decade starts below i32::MIN;
        // begin at the first aligned decade that fits instead.
        let head = Decade::containing(first)
            .or_else(|_| Decade::containing(first.saturating_add(YEARS_PER_DECADE)))
            .ok();
        std::iter::successors(head, Decade::following).take_while(move |decade| decade.start() <= last)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::short()
    }
}

fn collect_labels<const N: usize>(field: LabelField, labels: Vec<Label>) -> Result<[Label; N], ProfileError> {
    if let Some(index) = labels.iter().position(|label| label.trim().is_empty()) {
        return Err(ProfileError::EmptyLabel { field, index });
    }
    let found = labels.len();
    labels.try_into().map_err(|_| ProfileError::LabelCount {
        field,
        expected: N,
        found,
    })
}

impl TryFrom<RawProfile> for Profile {
    type Error = ProfileError;

    fn try_from(raw: RawProfile) -> Result<Self, Self::Error> {
        Self::from_parts(raw.days, raw.months, raw.day_offset, raw.years_range).map_err(|err| {
            #[cfg(feature = "log")]
            log::warn!("rejected calendar profile: {err}");
            err
        })
    }
}

impl From<Profile> for RawProfile {
    fn from(profile: Profile) -> Self {
        Self {
            days:        profile.days.into(),
            months:      profile.months.into(),
            day_offset:  profile.day_offset.get(),
            years_range: profile.years_range,
        }
    }
}
