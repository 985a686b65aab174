// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Date format module for serde models
//!
//! Teaches serde models how to read and write calendar dates in a
//! configurable textual (`2023-01-03`, `03/01/2023`) or numeric (`20230103`)
//! representation. Parsing is strict: the year always needs four digits and
//! every separator has to match.
//!
//! A model picks a flavor through [`DateModel`] and annotates its date fields
//! with [`DateField`] or [`OptionalDateField`]:
//!
//! ```rust
//! use chrono::NaiveDate;
//! use date_format::{DateField, DateModel, DayMonthYear};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! struct Person {
//!     name: String,
//!     #[serde(with = "DateField::<Person>")]
//!     birth_date: NaiveDate,
//! }
//!
//! impl DateModel for Person {
//!     type Flavor = DayMonthYear;
//! }
//!
//! let person: Person = serde_json::from_str(r#"{"name": "Jane", "birth_date": "21/1/2000"}"#).unwrap();
//! assert_eq!(person.birth_date, NaiveDate::from_ymd_opt(2000, 1, 21).unwrap());
//! assert_eq!(
//!     serde_json::to_string(&person).unwrap(),
//!     r#"{"name":"Jane","birth_date":"21/01/2000"}"#
//! );
//! ```

pub mod adapter;
pub mod error;
pub mod flavor;
pub mod format;
pub mod pattern;
pub mod raw;
pub mod schema;
pub mod serde;
pub mod test_helper;

pub use crate::adapter::DateAdapter;
pub use crate::error::DateFormatError;
pub use crate::flavor::{DateFlavor, DateModel, DayMonthYear, Iso, Numeric};
pub use crate::format::{
    DMY_FORMAT, DateFormat, ISO_FORMAT, KnownFormat, MDY_FORMAT, NUMBER_FORMAT,
};
pub use crate::raw::{RawKind, RawValue};
pub use crate::serde::{DateField, OptionalDateField};

#[cfg(test)]
mod tests;
