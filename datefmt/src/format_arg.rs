// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use date_format::{DateAdapter, DateFormat, KnownFormat, RawKind, RawValue};

/// Prefix selecting integer raw values for a custom pattern.
const NUMBER_PREFIX: &str = "number:";

/// Resolves a `--from`/`--to`/`--format` argument into an adapter.
///
/// Accepts a predefined name (`iso`, `dmy`, `mdy`, `number`), a literal
/// pattern such as `%d.%m.%Y`, or `number:<pattern>` for integer dates with
/// a custom digit grouping.
pub fn adapter_from_arg(arg: &str) -> DateAdapter {
    if let Ok(known) = arg.parse::<KnownFormat>() {
        return known.adapter();
    }
    match arg.strip_prefix(NUMBER_PREFIX) {
        Some(pattern) => DateFormat::new(pattern.to_owned()).number_adapter(),
        None => DateFormat::new(arg.to_owned()).text_adapter(),
    }
}

/// Turns a command line value into the raw value the adapter expects.
///
/// Number adapters get an integer when the value is a plain digit run without
/// sign or leading zero; anything else stays text and is refused by the
/// adapter with a descriptive error.
pub fn raw_from_arg(value: &str, kind: RawKind) -> RawValue {
    let plain_digits = !value.is_empty()
        && value.bytes().all(|b| b.is_ascii_digit())
        && (value == "0" || !value.starts_with('0'));
    match kind {
        RawKind::Number if plain_digits => value
            .parse::<i64>()
            .map(RawValue::Number)
            .unwrap_or_else(|_| RawValue::from(value)),
        _ => RawValue::from(value),
    }
}

/// Formats a raw value for plain text output.
pub fn raw_to_output(raw: &RawValue) -> String {
    match raw {
        RawValue::Text(text) => text.clone(),
        RawValue::Number(number) => number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use date_format::{ISO_FORMAT, NUMBER_FORMAT};

    #[test]
    fn known_names_resolve_to_predefined_adapters() {
        assert_eq!(adapter_from_arg("iso"), ISO_FORMAT.text_adapter());
        assert_eq!(adapter_from_arg("NUMBER"), NUMBER_FORMAT.number_adapter());
    }

    #[test]
    fn literal_patterns_are_text() {
        let adapter = adapter_from_arg("%d.%m.%Y");
        assert_eq!(adapter.format().pattern(), "%d.%m.%Y");
        assert_eq!(adapter.kind(), RawKind::Text);
    }

    #[test]
    fn number_prefix_selects_integer_values() {
        let adapter = adapter_from_arg("number:%d%m%Y");
        assert_eq!(adapter.format().pattern(), "%d%m%Y");
        assert_eq!(adapter.kind(), RawKind::Number);
    }

    #[test]
    fn raw_values_follow_adapter_kind() {
        assert_eq!(
            raw_from_arg("20230103", RawKind::Number),
            RawValue::Number(20230103)
        );
        assert_eq!(
            raw_from_arg("20230103", RawKind::Text),
            RawValue::from("20230103")
        );
        assert_eq!(
            raw_from_arg("2023-01-03", RawKind::Number),
            RawValue::from("2023-01-03")
        );
    }

    #[test]
    fn only_plain_digit_runs_become_integers() {
        for value in ["+20190503", "020190503", "-20190503", " 20190503", ""] {
            assert_eq!(
                raw_from_arg(value, RawKind::Number),
                RawValue::from(value),
                "{value}"
            );
        }
        assert_eq!(raw_from_arg("0", RawKind::Number), RawValue::Number(0));
        assert!(
            NUMBER_FORMAT
                .number_adapter()
                .parse(&raw_from_arg("020190503", RawKind::Number))
                .is_err()
        );
    }

    #[test]
    fn output_is_unquoted() {
        assert_eq!(raw_to_output(&RawValue::from("03/01/2023")), "03/01/2023");
        assert_eq!(raw_to_output(&RawValue::Number(20230103)), "20230103");
    }
}
