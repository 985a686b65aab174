// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::{
    error::DateFormatError,
    flavor::{DateFlavor, DateModel},
    format::DateFormat,
    pattern::{Component, Pattern, Token},
    raw::{RawKind, RawValue},
};
use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

/// Converts between raw values and calendar dates with a bound [`DateFormat`].
///
/// A `DateAdapter` is a [`DateFormat`] together with the [`RawKind`] the
/// dates are exchanged as. Text adapters read and write strings, number
/// adapters read and write integers.
///
/// Parsing is strict:
/// - the year has exactly four digits, two digit years are refused,
/// - text adapters accept one or two digits for month and day,
/// - number adapters require the full width of every component,
/// - literal separators have to match and no input may be left over,
/// - the resulting date has to exist in the proleptic Gregorian calendar.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use date_format::{DMY_FORMAT, NUMBER_FORMAT, RawValue};
///
/// let dmy = DMY_FORMAT.text_adapter();
/// let date = dmy.parse(&RawValue::from("3/5/2019")).unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2019, 5, 3).unwrap());
///
/// let number = NUMBER_FORMAT.number_adapter();
/// assert_eq!(number.serialize(&date).unwrap(), RawValue::Number(20190503));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateAdapter {
    format: DateFormat,
    kind: RawKind,
}

impl DateAdapter {
    pub fn new(format: DateFormat, kind: RawKind) -> Self {
        DateAdapter { format, kind }
    }

    /// Resolves the adapter of a model.
    ///
    /// The format declared by the model wins over the default of its flavor,
    /// the raw kind is always the one of the flavor.
    pub fn for_model<M: DateModel + ?Sized>() -> Self {
        let adapter = DateAdapter::new(M::date_format(), <M::Flavor as DateFlavor>::RAW_KIND);
        debug!(
            model = std::any::type_name::<M>(),
            format = %adapter.format,
            kind = %adapter.kind,
            "resolved date adapter"
        );
        adapter
    }

    pub fn format(&self) -> &DateFormat {
        &self.format
    }

    pub fn kind(&self) -> RawKind {
        self.kind
    }

    /// Converts a raw value into a date.
    ///
    /// For an `optional` field an empty raw value (`""` or `0`) yields
    /// `Ok(None)` without any parsing. Everything else is parsed with
    /// [`parse`](Self::parse).
    pub fn deserialize(
        &self,
        raw: &RawValue,
        optional: bool,
    ) -> Result<Option<NaiveDate>, DateFormatError> {
        if optional && raw.is_empty() {
            trace!(%raw, "empty raw value for optional date");
            return Ok(None);
        }
        self.parse(raw).map(Some)
    }

    /// Parses a raw value of a required field.
    ///
    /// # Errors
    ///
    /// A [`DateFormatError`] naming `raw` if it does not match the format.
    pub fn parse(&self, raw: &RawValue) -> Result<NaiveDate, DateFormatError> {
        let result = match (self.kind, raw) {
            (RawKind::Text, RawValue::Text(text)) => self.parse_text(text, raw),
            (RawKind::Number, RawValue::Number(number)) => self.parse_number(*number, raw),
            _ => Err(DateFormatError::KindMismatch {
                input: raw.to_string(),
                expected: self.kind,
            }),
        };
        match &result {
            Ok(date) => trace!(%raw, %date, format = %self.format, "parsed date"),
            Err(e) => debug!(%raw, format = %self.format, "rejected date: {e}"),
        }
        result
    }

    fn parse_text(&self, text: &str, raw: &RawValue) -> Result<NaiveDate, DateFormatError> {
        let pattern = Pattern::compile(self.format.pattern())?;
        Scanner::new(&pattern, raw, false).scan(text)
    }

    fn parse_number(&self, number: i64, raw: &RawValue) -> Result<NaiveDate, DateFormatError> {
        let pattern = self.numeric_pattern()?;
        let width = pattern.fixed_width();
        let digits = number.to_string();
        if number < 0 || digits.len() != width {
            return Err(DateFormatError::NumberWidth {
                input: raw.to_string(),
                width,
            });
        }
        Scanner::new(&pattern, raw, true).scan(&digits)
    }

    fn numeric_pattern(&self) -> Result<Pattern<'_>, DateFormatError> {
        let pattern = Pattern::compile(self.format.pattern())?;
        if !pattern.is_numeric() {
            return Err(DateFormatError::unsupported(
                self.format.pattern(),
                "integer dates may not contain separators other than digits",
            ));
        }
        Ok(pattern)
    }

    /// Converts a date into its raw value.
    ///
    /// # Errors
    ///
    /// [`DateFormatError::YearNotRenderable`] for years outside `0..=9999`,
    /// [`DateFormatError::UnsupportedPattern`] for an unusable pattern and
    /// [`DateFormatError::LeadingZero`] when a number adapter would render
    /// digits starting with zero (years below 1000 with `%Y%m%d`).
    pub fn serialize(&self, date: &NaiveDate) -> Result<RawValue, DateFormatError> {
        let raw = match self.kind {
            RawKind::Text => RawValue::Text(self.render(date)?),
            RawKind::Number => {
                self.numeric_pattern()?;
                let text = self.render(date)?;
                // Parsing checks the digit count, a dropped zero would not read back.
                if text.starts_with('0') {
                    return Err(DateFormatError::LeadingZero { rendered: text });
                }
                let number = text.parse::<i64>().map_err(|_| {
                    DateFormatError::unsupported(self.format.pattern(), "not an integer")
                })?;
                RawValue::Number(number)
            }
        };
        trace!(%date, %raw, format = %self.format, "rendered date");
        Ok(raw)
    }

    /// Converts an optional date, `None` stays `None`.
    pub fn serialize_optional(
        &self,
        date: Option<&NaiveDate>,
    ) -> Result<Option<RawValue>, DateFormatError> {
        date.map(|date| self.serialize(date)).transpose()
    }

    /// Writes `date` as text: the year with four digits, month and day with
    /// two digits each, zero padded.
    pub fn render(&self, date: &NaiveDate) -> Result<String, DateFormatError> {
        let year = date.year();
        if !(0..=9999).contains(&year) {
            return Err(DateFormatError::YearNotRenderable { year });
        }
        let pattern = Pattern::compile(self.format.pattern())?;
        let mut out = String::with_capacity(pattern.fixed_width());
        for token in pattern.tokens() {
            match token {
                Token::Literal(literal) => out.push_str(literal),
                Token::Component(Component::Year) => out.push_str(&format!("{year:04}")),
                Token::Component(Component::Month) => {
                    out.push_str(&format!("{:02}", date.month()))
                }
                Token::Component(Component::Day) => out.push_str(&format!("{:02}", date.day())),
            }
        }
        Ok(out)
    }
}

/// Walks the tokens of a pattern over an input string.
struct Scanner<'p, 'a> {
    pattern: &'p Pattern<'a>,
    raw: &'p RawValue,
    fixed_width: bool,
}

impl<'p, 'a> Scanner<'p, 'a> {
    fn new(pattern: &'p Pattern<'a>, raw: &'p RawValue, fixed_width: bool) -> Self {
        Scanner {
            pattern,
            raw,
            fixed_width,
        }
    }

    fn scan(&self, input: &str) -> Result<NaiveDate, DateFormatError> {
        let mut rest = input;
        let (mut year, mut month, mut day) = (0, 0, 0);

        for (idx, token) in self.pattern.tokens().iter().enumerate() {
            match *token {
                Token::Literal(literal) => {
                    rest = rest.strip_prefix(literal).ok_or_else(|| {
                        DateFormatError::LiteralMismatch {
                            input: self.raw.to_string(),
                            expected: literal.to_owned(),
                        }
                    })?;
                }
                Token::Component(component) => {
                    let bounded = self.fixed_width || self.pattern.followed_by_component(idx);
                    let (digits, tail) = self.take_digits(rest, component, bounded)?;
                    let value = digits
                        .bytes()
                        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
                    match component {
                        Component::Year => year = value,
                        Component::Month => month = value,
                        Component::Day => day = value,
                    }
                    rest = tail;
                }
            }
        }

        if !rest.is_empty() {
            return Err(DateFormatError::TrailingInput {
                input: self.raw.to_string(),
            });
        }
        // The year has at most four digits, the cast cannot truncate.
        NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| {
            DateFormatError::OutOfRange {
                input: self.raw.to_string(),
            }
        })
    }

    /// Splits the digits of `component` off the front of `rest`.
    ///
    /// A bounded component is directly followed by another component, so it
    /// takes exactly its width. An unbounded one takes the whole digit run,
    /// which has to be four digits for the year and one or two digits for
    /// month and day.
    fn take_digits<'i>(
        &self,
        rest: &'i str,
        component: Component,
        bounded: bool,
    ) -> Result<(&'i str, &'i str), DateFormatError> {
        let run = rest.bytes().take_while(u8::is_ascii_digit).count();
        let width = component.width();
        let accepted = match (bounded, component) {
            (true, _) => run >= width,
            (false, Component::Year) => run == width,
            (false, _) => (1..=width).contains(&run),
        };
        if !accepted {
            let input = self.raw.to_string();
            return Err(match component {
                Component::Year => DateFormatError::YearWidth { input },
                _ => DateFormatError::InvalidComponent { input, component },
            });
        }
        Ok(rest.split_at(if bounded { width } else { run }))
    }
}
