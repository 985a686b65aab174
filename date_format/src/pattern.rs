// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Tokenizer for date patterns.
//!
//! A pattern is a sequence of the directives `%Y`, `%m` and `%d` mixed with
//! literal text. `%%` is a literal percent sign. Each of the three date
//! components has to appear exactly once.

use crate::error::DateFormatError;
use strum_macros::Display;

/// A date component addressed by a pattern directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Component {
    Year,
    Month,
    Day,
}

impl Component {
    /// The number of digits the component is written with.
    pub const fn width(self) -> usize {
        match self {
            Component::Year => 4,
            Component::Month | Component::Day => 2,
        }
    }

    const fn index(self) -> usize {
        match self {
            Component::Year => 0,
            Component::Month => 1,
            Component::Day => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Component(Component),
    Literal(&'a str),
}

/// A compiled pattern borrowing its literals from the pattern text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> Pattern<'a> {
    /// Splits `pattern` into tokens.
    ///
    /// # Errors
    ///
    /// [`DateFormatError::UnsupportedPattern`] if the pattern contains an
    /// unknown directive, a dangling `%`, or does not name every component
    /// exactly once.
    pub fn compile(pattern: &'a str) -> Result<Self, DateFormatError> {
        let mut tokens = Vec::new();
        let mut seen = [false; 3];
        let mut literal_start = 0;
        let mut chars = pattern.char_indices();

        while let Some((idx, ch)) = chars.next() {
            if ch != '%' {
                continue;
            }
            if literal_start < idx {
                tokens.push(Token::Literal(&pattern[literal_start..idx]));
            }
            let component = match chars.next() {
                Some((_, 'Y')) => Component::Year,
                Some((_, 'm')) => Component::Month,
                Some((_, 'd')) => Component::Day,
                Some((pos, '%')) => {
                    tokens.push(Token::Literal(&pattern[pos..pos + 1]));
                    literal_start = pos + 1;
                    continue;
                }
                Some((_, other)) => {
                    return Err(DateFormatError::unsupported(
                        pattern,
                        format!("directive %{other} is not supported"),
                    ));
                }
                None => {
                    return Err(DateFormatError::unsupported(
                        pattern,
                        "dangling '%' at the end",
                    ));
                }
            };
            if seen[component.index()] {
                return Err(DateFormatError::unsupported(
                    pattern,
                    format!("{component} appears more than once"),
                ));
            }
            seen[component.index()] = true;
            tokens.push(Token::Component(component));
            literal_start = idx + 2;
        }
        if literal_start < pattern.len() {
            tokens.push(Token::Literal(&pattern[literal_start..]));
        }

        for component in [Component::Year, Component::Month, Component::Day] {
            if !seen[component.index()] {
                return Err(DateFormatError::unsupported(
                    pattern,
                    format!("{component} is missing"),
                ));
            }
        }
        Ok(Pattern { tokens })
    }

    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// The length of a date written with this pattern and zero padded components.
    pub fn fixed_width(&self) -> usize {
        self.tokens
            .iter()
            .map(|token| match token {
                Token::Component(component) => component.width(),
                Token::Literal(literal) => literal.len(),
            })
            .sum()
    }

    /// Returns `true` if a date written with this pattern consists of digits only.
    pub fn is_numeric(&self) -> bool {
        self.tokens.iter().all(|token| match token {
            Token::Component(_) => true,
            Token::Literal(literal) => literal.bytes().all(|b| b.is_ascii_digit()),
        })
    }

    /// Returns `true` if the token after `idx` is a date component, i.e. the
    /// component at `idx` is not delimited by a literal or the end of input.
    pub(crate) fn followed_by_component(&self, idx: usize) -> bool {
        matches!(self.tokens.get(idx + 1), Some(Token::Component(_)))
    }
}
