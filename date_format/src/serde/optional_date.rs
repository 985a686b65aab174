// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::{flavor::DateModel, raw::RawValue};
use chrono::NaiveDate;
use serde::{self, Deserialize, Deserializer, Serializer};
use std::marker::PhantomData;

/// Serde adapter for an optional [`NaiveDate`] field of the model `M`.
///
/// `null`, the empty string (text flavors) and `0` (numeric flavor) all
/// deserialize to `None`. `None` serializes as `null`. Add
/// `#[serde(default)]` to also accept a missing key.
pub struct OptionalDateField<M: ?Sized>(PhantomData<M>);

impl<M: DateModel + ?Sized> OptionalDateField<M> {
    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let raw = M::date_adapter()
            .serialize_optional(date.as_ref())
            .map_err(serde::ser::Error::custom)?;
        match raw {
            Some(raw) => serializer.serialize_some(&raw),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawValue>::deserialize(deserializer)? {
            Some(raw) => M::date_adapter()
                .deserialize(&raw, true)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
