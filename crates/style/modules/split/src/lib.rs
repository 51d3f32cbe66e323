//! Bracket-aware slot splitting for composite style values.
//!
//! Composite values such as `10px solid red` or `url(a.png), url(b.png)` are
//! divided into slots at separator occurrences that sit outside any bracket
//! or function grouping. Nested content is carried through verbatim.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level separator vocabulary for composite values.
///
/// A property's grammar picks exactly one of these to delimit its slots;
/// the same separator is used when re-serializing resolved slots.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// Whitespace-delimited slots, e.g. `1px solid red`.
    Space,
    /// Comma-delimited slots, e.g. layered backgrounds.
    Comma,
    /// Slash-delimited slots, e.g. `radius / radius` pairs.
    Slash,
}

impl Separator {
    /// The character scanned for when splitting.
    pub const fn symbol(self) -> char {
        match self {
            Self::Space => ' ',
            Self::Comma => ',',
            Self::Slash => '/',
        }
    }

    /// The text inserted between slots when joining canonical forms back
    /// into a display value.
    pub const fn joiner(self) -> &'static str {
        match self {
            Self::Space => " ",
            Self::Comma => ", ",
            Self::Slash => " / ",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Space => "space",
            Self::Comma => "comma",
            Self::Slash => "slash",
        };
        formatter.write_str(name)
    }
}

/// Split `input` on `separator`, honoring bracket and parenthesis nesting.
///
/// The scan tracks a depth counter that increases on `[` and `(` and
/// decreases on `]` and `)`; separator occurrences only delimit slots at
/// depth zero. Depth is clamped at zero, so surplus closers and unterminated
/// opens never fail; the remaining text simply lands in the current slot.
/// Each produced slot is trimmed of surrounding ASCII whitespace.
///
/// A space separator treats any run of ASCII whitespace as a single
/// delimiter and never yields empty slots; other separators preserve empty
/// slots so that rejoining and resplitting is lossless. When no separator
/// occurs at depth zero the result is a single slot holding the trimmed
/// input.
pub fn split_value(input: &str, separator: char) -> Vec<String> {
    let collapse_whitespace = separator == ' ';
    let mut slots: Vec<String> = Vec::new();
    let mut buffer = String::new();
    let mut depth: u32 = 0;

    for character in input.chars() {
        match character {
            '[' | '(' => {
                depth += 1;
                buffer.push(character);
            }
            ']' | ')' => {
                depth = depth.saturating_sub(1);
                buffer.push(character);
            }
            _ if depth == 0 && is_boundary(character, separator, collapse_whitespace) => {
                flush_slot(&mut slots, &mut buffer, collapse_whitespace);
            }
            _ => buffer.push(character),
        }
    }
    flush_slot(&mut slots, &mut buffer, collapse_whitespace);

    if slots.is_empty() {
        slots.push(input.trim().to_owned());
    }
    slots
}

/// Whether `character` delimits a slot for the given separator mode.
fn is_boundary(character: char, separator: char, collapse_whitespace: bool) -> bool {
    if collapse_whitespace {
        character.is_ascii_whitespace()
    } else {
        character == separator
    }
}

/// Push the trimmed buffer as a slot and clear it. In whitespace mode empty
/// buffers are dropped so runs of spaces act as one delimiter.
fn flush_slot(slots: &mut Vec<String>, buffer: &mut String, skip_empty: bool) {
    let trimmed = buffer.trim();
    if !(skip_empty && trimmed.is_empty()) {
        slots.push(trimmed.to_owned());
    }
    buffer.clear();
}
