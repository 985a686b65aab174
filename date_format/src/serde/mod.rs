// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Field adapters for `#[serde(with = "...")]`.

pub mod date;
pub mod optional_date;

pub use date::DateField;
pub use optional_date::OptionalDateField;
