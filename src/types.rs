use crate::consts::{DEFAULT_DAY_OFFSET, MAX_DAY_OF_MONTH, MAX_DAY_OFFSET, MIN_DAY_OF_MONTH};
use crate::ShapeError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// Rotation applied to the weekday labels, guaranteed to be in `0..=MAX_DAY_OFFSET` (0..=6).
/// Offset 0 puts the Sunday label in the first column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOffset(u8);

impl DayOffset {
    /// Offset that starts the week on Sunday
    pub const SUNDAY: Self = Self(0);

    /// Creates a new `DayOffset`, validating that it's <= `MAX_DAY_OFFSET`
    ///
    /// # Errors
    /// Returns `ShapeError::InvalidDayOffset` if the value is > `MAX_DAY_OFFSET`.
    pub const fn new(value: u8) -> Result<Self, ShapeError> {
        if value > MAX_DAY_OFFSET {
            return Err(ShapeError::InvalidDayOffset(value));
        }
        Ok(Self(value))
    }

    /// Returns the offset value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the offset as an index into the weekday labels
    #[inline]
    pub const fn as_index(self) -> usize {
        self.0 as usize
    }
}

const _: () = assert!(DEFAULT_DAY_OFFSET <= MAX_DAY_OFFSET);

impl Default for DayOffset {
    fn default() -> Self {
        Self(DEFAULT_DAY_OFFSET)
    }
}

impl TryFrom<u8> for DayOffset {
    type Error = ShapeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayOffset> for u8 {
    fn from(offset: DayOffset) -> Self {
        offset.0
    }
}

impl fmt::Display for DayOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day number guaranteed to be in the range `MIN_DAY_OF_MONTH..=MAX_DAY_OF_MONTH` (1..=31)
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
///
/// Month length is not checked: 31 is accepted for every month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfMonth(NonZeroU8);

impl DayOfMonth {
    /// Creates a new `DayOfMonth`, validating that it's non-zero and <= `MAX_DAY_OF_MONTH`
    ///
    /// # Errors
    /// Returns `ShapeError::InvalidDayOfMonth` if the value is 0 or > `MAX_DAY_OF_MONTH`.
    pub fn new(value: u8) -> Result<Self, ShapeError> {
        let non_zero = NonZeroU8::new(value).ok_or(ShapeError::InvalidDayOfMonth(value))?;
        if value > MAX_DAY_OF_MONTH {
            return Err(ShapeError::InvalidDayOfMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Whether an untyped cell value names a day of month
    pub fn is_valid(value: i32) -> bool {
        (i32::from(MIN_DAY_OF_MONTH)..=i32::from(MAX_DAY_OF_MONTH)).contains(&value)
    }
}

impl TryFrom<u8> for DayOfMonth {
    type Error = ShapeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayOfMonth> for u8 {
    fn from(day: DayOfMonth) -> Self {
        day.0.get()
    }
}

impl fmt::Display for DayOfMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display label of a grid cell: a day number or free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellText {
    #[display(fmt = "{_0}")]
    Number(i32),
    #[display(fmt = "{_0}")]
    Label(String),
}

impl From<&str> for CellText {
    fn from(label: &str) -> Self {
        Self::Label(label.to_owned())
    }
}

impl From<DayOfMonth> for CellText {
    fn from(day: DayOfMonth) -> Self {
        Self::Number(i32::from(day.get()))
    }
}

/// Data bound to one rendered calendar grid cell.
///
/// An active cell always carries a valid day of month in `value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCellValue", into = "RawCellValue")]
pub struct CellValue {
    text:   CellText,
    active: bool,
    value:  i32,
}

/// Unvalidated wire form of [`CellValue`].
#[derive(Serialize, Deserialize)]
struct RawCellValue {
    text:   CellText,
    active: bool,
    value:  i32,
}

impl CellValue {
    /// Creates a cell, checking that an active cell holds a day of month.
    ///
    /// # Errors
    /// Returns `ShapeError::ActiveValueOutOfRange` if `active` is set and
    /// `value` is outside `1..=31`.
    pub fn new(text: impl Into<CellText>, active: bool, value: i32) -> Result<Self, ShapeError> {
        if active && !DayOfMonth::is_valid(value) {
            return Err(ShapeError::ActiveValueOutOfRange { value });
        }
        Ok(Self {
            text: text.into(),
            active,
            value,
        })
    }

    /// Selectable cell for a day of the displayed month
    pub fn day(day: DayOfMonth) -> Self {
        Self {
            text:   day.into(),
            active: true,
            value:  i32::from(day.get()),
        }
    }

    /// Non-selectable cell for a day spilling over from an adjacent month
    pub fn trailing(day: DayOfMonth) -> Self {
        Self {
            text:   day.into(),
            active: false,
            value:  i32::from(day.get()),
        }
    }

    /// Non-selectable text cell, e.g. a month or year label
    pub fn label(text: impl Into<String>, value: i32) -> Self {
        Self {
            text: CellText::Label(text.into()),
            active: false,
            value,
        }
    }

    /// Returns the display label
    pub const fn text(&self) -> &CellText {
        &self.text
    }

    /// Whether the cell is selectable
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the underlying value, independent of the label
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Returns the day of month for active cells
    pub fn day_of_month(&self) -> Option<DayOfMonth> {
        if !self.active {
            return None;
        }
        u8::try_from(self.value).ok().and_then(|v| DayOfMonth::new(v).ok())
    }
}

impl TryFrom<RawCellValue> for CellValue {
    type Error = ShapeError;

    fn try_from(raw: RawCellValue) -> Result<Self, Self::Error> {
        Self::new(raw.text, raw.active, raw.value)
    }
}

impl From<CellValue> for RawCellValue {
    fn from(cell: CellValue) -> Self {
        Self {
            text:   cell.text,
            active: cell.active,
            value:  cell.value,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
