// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use serde::de::{self, Deserialize, Deserializer, Unexpected, Visitor};
use serde::{Serialize, Serializer};
use std::fmt;
use strum_macros::Display;

/// The shape of a raw date value exchanged with serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum RawKind {
    /// A string such as `"2023-01-03"`.
    Text,
    /// An integer such as `20230103`.
    Number,
}

/// An untyped date value as it appears before deserialization and after
/// serialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawValue {
    Text(String),
    Number(i64),
}

impl RawValue {
    pub fn kind(&self) -> RawKind {
        match self {
            RawValue::Text(_) => RawKind::Text,
            RawValue::Number(_) => RawKind::Number,
        }
    }

    /// Returns `true` for the empty string and for the integer zero.
    ///
    /// Optional date fields treat an empty raw value as absence.
    pub fn is_empty(&self) -> bool {
        match self {
            RawValue::Text(text) => text.is_empty(),
            RawValue::Number(number) => *number == 0,
        }
    }

    /// Converts a JSON value into a raw value.
    ///
    /// Returns `None` for anything that is neither a string nor an integer
    /// fitting into an `i64`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(text) => Some(RawValue::Text(text.clone())),
            serde_json::Value::Number(number) => number.as_i64().map(RawValue::Number),
            _ => None,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Text(text) => write!(f, "{text:?}"),
            RawValue::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        RawValue::Text(text.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        RawValue::Text(text)
    }
}

impl From<i64> for RawValue {
    fn from(number: i64) -> Self {
        RawValue::Number(number)
    }
}

impl From<RawValue> for serde_json::Value {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Text(text) => serde_json::Value::String(text),
            RawValue::Number(number) => serde_json::Value::from(number),
        }
    }
}

impl Serialize for RawValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            RawValue::Text(text) => serializer.serialize_str(text),
            RawValue::Number(number) => serializer.serialize_i64(*number),
        }
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawValueVisitor;

        impl Visitor<'_> for RawValueVisitor {
            type Value = RawValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a date string or integer")
            }

            fn visit_str<E>(self, v: &str) -> Result<RawValue, E>
            where
                E: de::Error,
            {
                Ok(RawValue::Text(v.to_owned()))
            }

            fn visit_string<E>(self, v: String) -> Result<RawValue, E>
            where
                E: de::Error,
            {
                Ok(RawValue::Text(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<RawValue, E>
            where
                E: de::Error,
            {
                Ok(RawValue::Number(v))
            }

            fn visit_u64<E>(self, v: u64) -> Result<RawValue, E>
            where
                E: de::Error,
            {
                i64::try_from(v)
                    .map(RawValue::Number)
                    .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
            }
        }

        deserializer.deserialize_any(RawValueVisitor)
    }
}
