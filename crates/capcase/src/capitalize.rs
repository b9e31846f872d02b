// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! First-character capitalization.
//!
//! Case conversion uses the standard library's full Unicode mappings, so a
//! character such as `ß` may expand (`"ßig"` becomes `"SSig"`). Characters
//! without case pass through unchanged.

use std::borrow::Cow;

/// Uppercase the first character of `input` and lowercase the remainder.
///
/// The empty string is returned as-is. The tail is lowercased as a single
/// string, so context-dependent mappings (Greek final sigma) see only the
/// tail.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out = String::with_capacity(input.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
    }
}

/// Like [`capitalize`], but borrows `input` when it is already capitalized.
pub fn capitalize_cow(input: &str) -> Cow<'_, str> {
    if is_capitalized(input) {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(capitalize(input))
    }
}

/// Method form of [`capitalize`].
pub trait Capitalize {
    fn capitalize(&self) -> String;
}

impl Capitalize for str {
    fn capitalize(&self) -> String {
        capitalize(self)
    }
}

/// True when [`capitalize`] would return `input` unchanged.
///
/// Checks per-char mappings, which are never identities for a capital
/// sigma, so the contextual final-sigma rule never needs evaluating here.
fn is_capitalized(input: &str) -> bool {
    let mut chars = input.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    first.to_uppercase().eq([first]) && chars.all(|c| c.to_lowercase().eq([c]))
}

#[cfg(test)]
#[path = "capitalize_tests.rs"]
mod tests;
