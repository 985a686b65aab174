// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::{RawKind, RawValue};
use serde_json::json;

#[test]
fn empty_raw_values() {
    assert!(RawValue::from("").is_empty());
    assert!(RawValue::Number(0).is_empty());
    assert!(!RawValue::from("0").is_empty());
    assert!(!RawValue::Number(20190503).is_empty());
}

#[test]
fn raw_value_display_quotes_text() {
    assert_eq!(RawValue::from("2019-05-03").to_string(), r#""2019-05-03""#);
    assert_eq!(RawValue::Number(20190503).to_string(), "20190503");
}

#[test]
fn raw_value_from_json() {
    assert_eq!(
        RawValue::from_json(&json!("03/05/2019")),
        Some(RawValue::from("03/05/2019"))
    );
    assert_eq!(
        RawValue::from_json(&json!(20190503)),
        Some(RawValue::Number(20190503))
    );
    assert_eq!(RawValue::from_json(&json!(2019.5)), None);
    assert_eq!(RawValue::from_json(&json!(null)), None);
    assert_eq!(RawValue::from_json(&json!(true)), None);
}

#[test]
fn raw_value_into_json() {
    assert_eq!(serde_json::Value::from(RawValue::Number(20230103)), json!(20230103));
    assert_eq!(
        serde_json::Value::from(RawValue::from("2023-01-03")),
        json!("2023-01-03")
    );
}

#[test]
fn raw_value_deserializes_strings_and_integers() {
    let text: RawValue = serde_json::from_str(r#""2019-05-03""#).unwrap();
    assert_eq!(text.kind(), RawKind::Text);
    let number: RawValue = serde_json::from_str("20190503").unwrap();
    assert_eq!(number, RawValue::Number(20190503));
    assert!(serde_json::from_str::<RawValue>("[2019, 5, 3]").is_err());
    assert!(serde_json::from_str::<RawValue>("18446744073709551615").is_err());
}
