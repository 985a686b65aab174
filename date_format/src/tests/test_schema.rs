// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::test_helper::{DmyRecord, NumberOptionalRecord, NumberRecord};
use crate::{DateField, DateFormat, OptionalDateField, RawKind};
use schemars::{json_schema, schema_for};
use serde_json::json;

#[test]
fn schema_for_hands_back_handler_schema() {
    let format = DateFormat::new("%Y-%m-%d");
    let mut requested = None;
    let schema = format.schema_for("NaiveDate", |target| {
        requested = Some(target);
        json_schema!({ "type": "string", "format": "date" })
    });
    assert_eq!(requested, Some("NaiveDate"));
    assert_eq!(schema.as_value(), &json!({ "type": "string", "format": "date" }));
}

#[test]
fn schema_for_passes_any_target() {
    let format = DateFormat::new("%Y%m%d");
    let schema = format.schema_for(RawKind::Number, |kind| match kind {
        RawKind::Number => json_schema!({ "type": "integer" }),
        RawKind::Text => json_schema!({ "type": "string" }),
    });
    assert_eq!(schema.as_value()["type"], json!("integer"));
}

#[test]
fn text_field_schema() {
    let schema = schema_for!(DateField<DmyRecord>);
    let value = schema.as_value();
    assert_eq!(value["type"], json!("string"));
    assert_eq!(
        value["description"],
        json!("calendar date in the format %d/%m/%Y")
    );
}

#[test]
fn number_field_schema() {
    let schema = schema_for!(DateField<NumberRecord>);
    assert_eq!(schema.as_value()["type"], json!("integer"));
}

#[test]
fn optional_field_schema_allows_null() {
    let schema = schema_for!(OptionalDateField<NumberOptionalRecord>);
    assert_eq!(schema.as_value()["type"], json!(["integer", "null"]));
}
