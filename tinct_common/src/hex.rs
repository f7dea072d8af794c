// Copyright 2025 the Tinct Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing of `#rgb` and `#rrggbb` color strings.

use crate::color::Rgba8;
use crate::Error;

/// Parse a hex color of the form `#rgb` or `#rrggbb` into an opaque color.
///
/// Digits are case-insensitive. In the short form each digit is repeated, so `#f80` is the
/// same color as `#ff8800`.
///
/// # Errors
///
/// Returns [`Error::InvalidHexColor`] if the string does not start with `#`, has a different
/// number of digits, or contains a character that is not a hex digit.
pub fn parse_hex_color(hex: &str) -> Result<Rgba8, Error> {
    let invalid = || Error::InvalidHexColor(hex.into());

    let digits = hex
        .strip_prefix('#')
        .ok_or_else(invalid)?
        .bytes()
        .map(|b| hex_digit(b).ok_or_else(invalid))
        .collect::<Result<Vec<u8>, _>>()?;

    let [r, g, b] = match digits[..] {
        [r, g, b] => [r * 17, g * 17, b * 17],
        [r1, r2, g1, g2, b1, b2] => [(r1 << 4) | r2, (g1 << 4) | g2, (b1 << 4) | b2],
        _ => return Err(invalid()),
    };

    Ok(Rgba8 { r, g, b, a: 255 })
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
