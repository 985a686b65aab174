// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::{adapter::DateAdapter, raw::RawKind};
use schemars::Schema;
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, convert::Infallible, fmt, str::FromStr};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::trace;

/// Year-month-day separated by hyphens, e.g. `2023-01-03`.
pub const ISO_FORMAT: DateFormat = DateFormat::from_static("%Y-%m-%d");

/// Day/month/year separated by slashes, e.g. `03/01/2023`.
pub const DMY_FORMAT: DateFormat = DateFormat::from_static("%d/%m/%Y");

/// Month/day/year separated by slashes, e.g. `01/03/2023`.
pub const MDY_FORMAT: DateFormat = DateFormat::from_static("%m/%d/%Y");

/// Year, month and day without separators, exchanged as an integer, e.g. `20230103`.
pub const NUMBER_FORMAT: DateFormat = DateFormat::from_static("%Y%m%d");

/// Describes how a calendar date is written.
///
/// A `DateFormat` wraps a pattern made of the placeholders `%Y` (four digit
/// year), `%m` (month), `%d` (day) and literal separators. `%%` stands for a
/// literal percent sign.
///
/// Two formats are equal if and only if their pattern text is equal, and the
/// hash is derived from the pattern text only. The pattern is stored verbatim
/// and is not validated on construction; an unsupported pattern is reported
/// the first time it is used to parse or render a date.
///
/// # Example
///
/// ```rust
/// use date_format::{DateFormat, ISO_FORMAT};
///
/// let format = DateFormat::new("%Y-%m-%d");
/// assert_eq!(format, ISO_FORMAT);
/// assert_eq!(format.to_string(), "%Y-%m-%d");
/// assert_eq!(format!("{format:?}"), r#"DateFormat("%Y-%m-%d")"#);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateFormat {
    pattern: Cow<'static, str>,
}

impl DateFormat {
    /// Creates a new [`DateFormat`] from the given pattern text.
    pub fn new(pattern: impl Into<Cow<'static, str>>) -> Self {
        DateFormat {
            pattern: pattern.into(),
        }
    }

    /// Creates a [`DateFormat`] from a static pattern in a `const` context.
    pub const fn from_static(pattern: &'static str) -> Self {
        DateFormat {
            pattern: Cow::Borrowed(pattern),
        }
    }

    /// Looks up one of the predefined formats by its name
    /// (`iso`, `dmy`, `mdy` or `number`, case insensitive).
    pub fn named(name: &str) -> Option<Self> {
        name.parse::<KnownFormat>().ok().map(KnownFormat::format)
    }

    /// Returns the pattern text exactly as it was given.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Binds this format to textual raw values.
    pub fn text_adapter(&self) -> DateAdapter {
        DateAdapter::new(self.clone(), RawKind::Text)
    }

    /// Binds this format to integer raw values.
    pub fn number_adapter(&self) -> DateAdapter {
        DateAdapter::new(self.clone(), RawKind::Number)
    }

    /// Produces the schema for `target` through the schema builder `handler`.
    ///
    /// The handler is the schema builder's own continuation for the target
    /// type. Its result is handed back unchanged.
    pub fn schema_for<T, F>(&self, target: T, handler: F) -> Schema
    where
        F: FnOnce(T) -> Schema,
    {
        trace!(format = %self, "building schema");
        handler(target)
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl fmt::Debug for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DateFormat").field(&self.pattern()).finish()
    }
}

impl FromStr for DateFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DateFormat::new(s.to_owned()))
    }
}

impl From<&'static str> for DateFormat {
    fn from(pattern: &'static str) -> Self {
        DateFormat::from_static(pattern)
    }
}

impl From<String> for DateFormat {
    fn from(pattern: String) -> Self {
        DateFormat::new(pattern)
    }
}

/// The predefined formats, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum KnownFormat {
    Iso,
    Dmy,
    Mdy,
    Number,
}

impl KnownFormat {
    pub const fn format(self) -> DateFormat {
        match self {
            KnownFormat::Iso => ISO_FORMAT,
            KnownFormat::Dmy => DMY_FORMAT,
            KnownFormat::Mdy => MDY_FORMAT,
            KnownFormat::Number => NUMBER_FORMAT,
        }
    }

    /// The raw value kind the format is exchanged as.
    pub const fn raw_kind(self) -> RawKind {
        match self {
            KnownFormat::Number => RawKind::Number,
            _ => RawKind::Text,
        }
    }

    pub fn adapter(self) -> DateAdapter {
        DateAdapter::new(self.format(), self.raw_kind())
    }
}
