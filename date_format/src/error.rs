// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Error type for parsing and rendering dates.

use crate::{pattern::Component, raw::RawKind};

/// Error returned when a raw value does not match the bound date format.
///
/// Every variant that stems from an input names the offending raw value.
/// Text values are quoted, integer values are printed as they are.
/// Field paths are not known here, serde adds them when it reports the error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateFormatError {
    /// The year component does not consist of exactly four digits.
    #[error("year in {input} must have exactly 4 digits")]
    YearWidth {
        /// The rejected raw value.
        input: String,
    },

    /// A month or day component is missing, not numeric or too wide.
    #[error("{component} in {input} is missing or malformed")]
    InvalidComponent {
        /// The rejected raw value.
        input: String,
        /// The component that could not be read.
        component: Component,
    },

    /// The components were read but do not form a date of the calendar.
    #[error("{input} is not a valid calendar date")]
    OutOfRange {
        /// The rejected raw value.
        input: String,
    },

    /// A literal separator of the pattern is not present in the input.
    #[error("expected {expected:?} in {input}")]
    LiteralMismatch {
        /// The rejected raw value.
        input: String,
        /// The literal required by the pattern.
        expected: String,
    },

    /// The input continues after the pattern has been matched completely.
    #[error("unexpected trailing characters in {input}")]
    TrailingInput {
        /// The rejected raw value.
        input: String,
    },

    /// An integer raw value does not have the digit count of the pattern.
    #[error("{input} must have exactly {width} digits")]
    NumberWidth {
        /// The rejected raw value.
        input: String,
        /// The number of digits required by the pattern.
        width: usize,
    },

    /// The raw value is a string where an integer is expected or vice versa.
    #[error("expected a {expected} value, got {input}")]
    KindMismatch {
        /// The rejected raw value.
        input: String,
        /// The raw kind the format is bound to.
        expected: RawKind,
    },

    /// The pattern cannot be used to read or write dates.
    #[error("unsupported date pattern {pattern:?}: {reason}")]
    UnsupportedPattern {
        /// The pattern text.
        pattern: String,
        /// Why the pattern was refused.
        reason: String,
    },

    /// The year of the date does not fit into four digits.
    #[error("year {year} cannot be written with 4 digits")]
    YearNotRenderable {
        /// The year of the rejected date.
        year: i32,
    },

    /// The rendered digits start with a zero, which an integer cannot keep.
    #[error("{rendered} starts with a zero and cannot be written as an integer")]
    LeadingZero {
        /// The digits rendered from the date.
        rendered: String,
    },
}

impl DateFormatError {
    pub(crate) fn unsupported(pattern: &str, reason: impl Into<String>) -> Self {
        DateFormatError::UnsupportedPattern {
            pattern: pattern.to_owned(),
            reason: reason.into(),
        }
    }
}
