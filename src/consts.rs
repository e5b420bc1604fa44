/// Number of weekday labels in a profile
pub const DAYS_PER_WEEK: usize = 7;

/// Number of month labels in a profile
pub const MONTHS_PER_YEAR: usize = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY_OF_MONTH: u8 = 1;

/// Largest day number any month can hold
pub const MAX_DAY_OF_MONTH: u8 = 31;

/// Largest valid day offset (Saturday)
pub const MAX_DAY_OFFSET: u8 = 6;

/// Offset 0 is treated as Sunday
pub const DEFAULT_DAY_OFFSET: u8 = 2;

/// No. of years that can be scrolled in past & future
pub const DEFAULT_YEARS_RANGE: u16 = 100;

/// Years range of the full-name preset
pub const LONG_YEARS_RANGE: u16 = 50;

/// Years in a decade
pub const YEARS_PER_DECADE: i32 = 10;

/// Difference between the last and first year of a decade
pub const DECADE_SPAN: i32 = YEARS_PER_DECADE - 1;

/// Decade bound separator, e.g. `2020/2029`
pub const DECADE_SEPARATOR: char = '/';

/// Name of days to show on calendar, Sunday first
pub const DAY_LABELS: [&str; DAYS_PER_WEEK] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Abbreviated month names, January first
pub const SHORT_MONTH_LABELS: [&str; MONTHS_PER_YEAR] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Full month names, January first
pub const LONG_MONTH_LABELS: [&str; MONTHS_PER_YEAR] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Registry name of the abbreviated preset
pub const SHORT_PROFILE: &str = "short";
/// Registry name of the full-name preset
pub const LONG_PROFILE: &str = "long";
