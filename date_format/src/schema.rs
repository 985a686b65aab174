// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! JSON schema support for the serde field adapters.
//!
//! Use the adapters as `#[schemars(with = "DateField<Model>")]` next to the
//! serde attribute to describe a date field with its raw representation.

use crate::{
    flavor::DateModel,
    format::DateFormat,
    raw::RawKind,
    serde::{DateField, OptionalDateField},
};
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use std::borrow::Cow;

/// Builds the schema of a raw date value of the given kind.
pub fn raw_schema(kind: RawKind, format: &DateFormat, optional: bool) -> Schema {
    let description = format!("calendar date in the format {format}");
    match (kind, optional) {
        (RawKind::Text, false) => json_schema!({
            "type": "string",
            "description": description
        }),
        (RawKind::Text, true) => json_schema!({
            "type": ["string", "null"],
            "description": description
        }),
        (RawKind::Number, false) => json_schema!({
            "type": "integer",
            "description": description
        }),
        (RawKind::Number, true) => json_schema!({
            "type": ["integer", "null"],
            "description": description
        }),
    }
}

impl<M: DateModel + ?Sized> JsonSchema for DateField<M> {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("FormattedDate")
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        let adapter = M::date_adapter();
        adapter
            .format()
            .schema_for(adapter.kind(), |kind| raw_schema(kind, adapter.format(), false))
    }
}

impl<M: DateModel + ?Sized> JsonSchema for OptionalDateField<M> {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("OptionalFormattedDate")
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        let adapter = M::date_adapter();
        adapter
            .format()
            .schema_for(adapter.kind(), |kind| raw_schema(kind, adapter.format(), true))
    }
}
