use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::error::AppError;

/// Time-to-live granularity of a token.
///
/// Codes are stable and contiguous in declaration order. The canonical
/// wire/storage form is the exact-case name returned by [`describe`].
///
/// [`describe`]: TokenDurationType::describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenDurationType {
    Minute = 0,
    Day = 1,
    Week = 2,
    Month = 3,
    Year = 4,
    Perpetual = 5,
}

impl TokenDurationType {
    /// Every value, in code order
    pub const ALL: [TokenDurationType; 6] = [
        TokenDurationType::Minute,
        TokenDurationType::Day,
        TokenDurationType::Week,
        TokenDurationType::Month,
        TokenDurationType::Year,
        TokenDurationType::Perpetual,
    ];

    /// Look up a value by its integer code.
    /// Codes outside `[0, 5]` yield `None`.
    pub fn value_of(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Stable integer code
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Canonical name
    pub fn describe(self) -> &'static str {
        match self {
            TokenDurationType::Minute => "MINUTE",
            TokenDurationType::Day => "DAY",
            TokenDurationType::Week => "WEEK",
            TokenDurationType::Month => "MONTH",
            TokenDurationType::Year => "YEAR",
            TokenDurationType::Perpetual => "PERPETUAL",
        }
    }

    /// Exact, case-sensitive match against the canonical names.
    /// Unknown or empty input yields `None`, never an error.
    pub fn from_string(name: &str) -> Option<Self> {
        let found = Self::ALL.iter().copied().find(|item| item.describe() == name);
        if found.is_none() {
            log::trace!("no token duration type named {:?}", name);
        }
        found
    }

    /// Same as [`from_string`](Self::from_string), short-circuiting on `None`
    pub fn from_optional_string(name: Option<&str>) -> Option<Self> {
        name.and_then(Self::from_string)
    }

    /// All canonical names in code order.
    /// A fresh vector is built on every call.
    pub fn all_names() -> Vec<String> {
        Self::ALL.iter().map(|item| item.describe().to_string()).collect()
    }

    /// Descriptions coincide with names for this type
    pub fn all_descriptions() -> Vec<String> {
        Self::all_names()
    }

    pub fn is_perpetual(self) -> bool {
        matches!(self, TokenDurationType::Perpetual)
    }

    /// Compute when a token issued at `issued_at` for `amount` units expires.
    ///
    /// MINUTE, DAY and WEEK are fixed-length units. MONTH and YEAR are
    /// calendar units, clamped to the end of the target month
    /// (Jan 31 + 1 MONTH = last day of February).
    ///
    /// Returns `None` for PERPETUAL, or when the result is out of range.
    pub fn expires_at(self, issued_at: DateTime<Utc>, amount: u32) -> Option<DateTime<Utc>> {
        let amount_i64 = i64::from(amount);
        match self {
            TokenDurationType::Minute => {
                issued_at.checked_add_signed(Duration::try_minutes(amount_i64)?)
            }
            TokenDurationType::Day => issued_at.checked_add_signed(Duration::try_days(amount_i64)?),
            TokenDurationType::Week => {
                issued_at.checked_add_signed(Duration::try_weeks(amount_i64)?)
            }
            TokenDurationType::Month => issued_at.checked_add_months(Months::new(amount)),
            TokenDurationType::Year => {
                issued_at.checked_add_months(Months::new(amount.checked_mul(12)?))
            }
            TokenDurationType::Perpetual => None,
        }
    }
}

impl std::fmt::Display for TokenDurationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

impl FromStr for TokenDurationType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
            .ok_or_else(|| AppError::Validation(format!("Unknown token duration type: {:?}", s)))
    }
}

impl TryFrom<i32> for TokenDurationType {
    type Error = AppError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::value_of(code)
            .ok_or_else(|| AppError::Validation(format!("Unknown token duration code: {}", code)))
    }
}

// Wire format is the canonical name, encoded and decoded only through
// describe/from_string.
impl Serialize for TokenDurationType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.describe())
    }
}

const VARIANT_NAMES: &[&str] = &["MINUTE", "DAY", "WEEK", "MONTH", "YEAR", "PERPETUAL"];

impl<'de> Deserialize<'de> for TokenDurationType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Self::from_string(&name)
            .ok_or_else(|| serde::de::Error::unknown_variant(&name, VARIANT_NAMES))
    }
}
