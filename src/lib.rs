mod consts;
mod decade;
mod prelude;
mod profile;
mod registry;
mod types;

pub use consts::*;
pub use decade::{Decade, DecadeError};
pub use profile::{Label, LabelField, Profile, ProfileError};
pub use registry::{ProfileRegistry, presets};
pub use types::{CellText, CellValue, DayOfMonth, DayOffset};

use crate::prelude::*;

/// Violation of a structural constraint on a calendar shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ShapeError {
    #[display(fmt = "Invalid day of month: {} (must be {}-{})", "_0", MIN_DAY_OF_MONTH, MAX_DAY_OF_MONTH)]
    InvalidDayOfMonth(u8),
    #[display(fmt = "Invalid day offset: {} (must be 0-{})", "_0", MAX_DAY_OFFSET)]
    InvalidDayOffset(u8),
    #[display(fmt = "Active cell value {value} is not a day of month")]
    ActiveValueOutOfRange { value: i32 },
}

impl std::error::Error for ShapeError {}
