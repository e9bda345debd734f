// ABOUTME: Pure field validators for employee and motorcycle input
// ABOUTME: Email shape, CPF digits, fixed-length vehicle identifiers, and column limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LugiaTrack

//! Input validation
//!
//! Every function here is total and side-effect free. Lengths are counted in
//! Unicode scalar values, matching how the storage columns bound text.

use std::sync::LazyLock;

use lugiatrack_core::constants::{employee, motorcycle};
use regex::Regex;

/// `local@domain.tld`, with no whitespace and a single `@` per run
static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

/// True when the string is empty or whitespace only
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// True when `s` has at most `max` characters
#[must_use]
pub fn within_len(s: &str, max: usize) -> bool {
    s.chars().count() <= max
}

/// Optional field variant of [`within_len`]
#[must_use]
pub fn within_len_opt(s: Option<&str>, max: usize) -> bool {
    s.is_none_or(|v| within_len(v, max))
}

/// True iff `s` matches the `local@domain.tld` shape
#[must_use]
pub fn email_valid(s: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(s))
}

/// True iff `s` is exactly 11 ASCII digits
#[must_use]
pub fn cpf_valid(s: &str) -> bool {
    s.len() == employee::CPF_LEN && s.bytes().all(|b| b.is_ascii_digit())
}

/// True when `s` contains a control character such as `\n` or `\0`
#[must_use]
pub fn has_control_chars(s: &str) -> bool {
    s.chars().any(char::is_control)
}

/// True iff `s` is non-blank, free of control characters, and exactly 17 characters
#[must_use]
pub fn chassis_valid(s: &str) -> bool {
    !is_blank(s) && !has_control_chars(s) && s.chars().count() == motorcycle::CHASSIS_LEN
}

/// True iff `s` is non-blank, free of control characters, and exactly 7 characters
#[must_use]
pub fn plate_valid(s: &str) -> bool {
    !is_blank(s) && !has_control_chars(s) && s.chars().count() == motorcycle::PLATE_LEN
}

/// True iff every field is non-blank
#[must_use]
pub fn required_fields_present(fields: &[&str]) -> bool {
    fields.iter().all(|f| !is_blank(f))
}

/// Motorcycle identity and model check: all present, chassis and plate
/// at their fixed lengths, model within its column limit
#[must_use]
pub fn motorcycle_fields_valid(chassis: &str, plate: &str, model: &str) -> bool {
    required_fields_present(&[chassis, plate, model])
        && chassis_valid(chassis)
        && plate_valid(plate)
        && within_len(model, motorcycle::MODEL_MAX_LEN)
}
