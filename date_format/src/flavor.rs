// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::{
    adapter::DateAdapter,
    format::{DMY_FORMAT, DateFormat, ISO_FORMAT, NUMBER_FORMAT},
    raw::RawKind,
};

/// A named default binding of a [`DateFormat`] and a [`RawKind`].
pub trait DateFlavor {
    /// The format used when the model does not declare its own.
    const DEFAULT_FORMAT: DateFormat;

    /// Whether dates are exchanged as strings or as integers.
    const RAW_KIND: RawKind;
}

/// Dates as `2023-01-03` strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso;

/// Dates as `03/01/2023` strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DayMonthYear;

/// Dates as `20230103` integers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Numeric;

impl DateFlavor for Iso {
    const DEFAULT_FORMAT: DateFormat = ISO_FORMAT;
    const RAW_KIND: RawKind = RawKind::Text;
}

impl DateFlavor for DayMonthYear {
    const DEFAULT_FORMAT: DateFormat = DMY_FORMAT;
    const RAW_KIND: RawKind = RawKind::Text;
}

impl DateFlavor for Numeric {
    const DEFAULT_FORMAT: DateFormat = NUMBER_FORMAT;
    const RAW_KIND: RawKind = RawKind::Number;
}

/// Declares how the date fields of a model are read and written.
///
/// Implement it on the model struct and annotate the date fields with
/// [`DateField`](crate::DateField) or
/// [`OptionalDateField`](crate::OptionalDateField) naming the model.
///
/// # Example
///
/// ```rust
/// use date_format::{DateFormat, DateModel, Iso, MDY_FORMAT};
///
/// struct Person;
///
/// impl DateModel for Person {
///     type Flavor = Iso;
///     const DATE_FORMAT: Option<DateFormat> = Some(MDY_FORMAT);
/// }
///
/// assert_eq!(Person::date_format(), MDY_FORMAT);
/// ```
pub trait DateModel {
    type Flavor: DateFlavor;

    /// Overrides the default format of the flavor.
    const DATE_FORMAT: Option<DateFormat> = None;

    /// The effective format: the model's own if declared, else the flavor's default.
    fn date_format() -> DateFormat {
        Self::DATE_FORMAT.unwrap_or(<Self::Flavor as DateFlavor>::DEFAULT_FORMAT)
    }

    fn date_adapter() -> DateAdapter {
        DateAdapter::for_model::<Self>()
    }
}
