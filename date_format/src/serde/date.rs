// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::{flavor::DateModel, raw::RawValue};
use chrono::NaiveDate;
use serde::{self, Deserialize, Deserializer, Serialize, Serializer};
use std::marker::PhantomData;

/// Serde adapter for a required [`NaiveDate`] field of the model `M`.
///
/// ```rust,ignore
/// #[serde(with = "DateField::<Invoice>")]
/// pub issued: NaiveDate,
/// ```
///
/// The model has to be named explicitly, `Self` does not resolve to the
/// model inside the generated deserializer.
pub struct DateField<M: ?Sized>(PhantomData<M>);

impl<M: DateModel + ?Sized> DateField<M> {
    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let raw = M::date_adapter()
            .serialize(date)
            .map_err(serde::ser::Error::custom)?;
        raw.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawValue::deserialize(deserializer)?;
        M::date_adapter()
            .parse(&raw)
            .map_err(serde::de::Error::custom)
    }
}
