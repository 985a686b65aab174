// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Sample models shared by the unit and integration tests.

use crate::{DateField, DateModel, DayMonthYear, Iso, Numeric, OptionalDateField};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Shorthand for a date known to be valid.
///
/// # Panics
///
/// Panics if the date does not exist.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("{year}-{month}-{day} is not a valid test date"))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct IsoRecord {
    pub str_field: String,
    #[serde(with = "DateField::<IsoRecord>")]
    pub date_field: NaiveDate,
}

impl DateModel for IsoRecord {
    type Flavor = Iso;
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct IsoOptionalRecord {
    pub str_field: String,
    #[serde(with = "DateField::<IsoOptionalRecord>")]
    pub date_field: NaiveDate,
    #[serde(with = "OptionalDateField::<IsoOptionalRecord>", default)]
    pub optional_date_field: Option<NaiveDate>,
}

impl DateModel for IsoOptionalRecord {
    type Flavor = Iso;
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DmyRecord {
    pub str_field: String,
    #[serde(with = "DateField::<DmyRecord>")]
    pub date_field: NaiveDate,
}

impl DateModel for DmyRecord {
    type Flavor = DayMonthYear;
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct NumberRecord {
    pub str_field: String,
    #[serde(with = "DateField::<NumberRecord>")]
    pub date_field: NaiveDate,
}

impl DateModel for NumberRecord {
    type Flavor = Numeric;
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct NumberOptionalRecord {
    pub str_field: String,
    #[serde(with = "DateField::<NumberOptionalRecord>")]
    pub date_field: NaiveDate,
    #[serde(with = "OptionalDateField::<NumberOptionalRecord>", default)]
    pub optional_date_field: Option<NaiveDate>,
}

impl DateModel for NumberOptionalRecord {
    type Flavor = Numeric;
}
