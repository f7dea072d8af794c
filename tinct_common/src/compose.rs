// Copyright 2025 the Tinct Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compositing of straight-alpha colors.
//!
//! All math happens in `f64`, and the result is rounded half away from zero only when it is
//! written back to the 8-bit channels.

use crate::color::Rgba8;

/// Composite `foreground` over `background`, using the alpha of `foreground` as blend weight.
///
/// This is the operator used by the gradient renderer. An opaque foreground replaces the
/// background, and a fully transparent one leaves it untouched; both cases are exact.
///
/// For other alphas, each color channel is `(bg * (255 - a) + fg * a) / 255` and the resulting
/// alpha is `255 - (255 - bg.a) * (255 - a) / 255`.
#[inline]
pub fn composite_over(background: Rgba8, foreground: Rgba8) -> Rgba8 {
    if foreground.a == 255 {
        return foreground;
    }

    let fg_alpha = f64::from(foreground.a);
    let inv_alpha = 255.0 - fg_alpha;
    let mix = |bg: u8, fg: u8| {
        quantize((f64::from(bg) * inv_alpha + f64::from(fg) * fg_alpha) / 255.0)
    };

    Rgba8 {
        r: mix(background.r, foreground.r),
        g: mix(background.g, foreground.g),
        b: mix(background.b, foreground.b),
        a: quantize(255.0 - (255.0 - f64::from(background.a)) * inv_alpha / 255.0),
    }
}

/// Composite `foreground` over `background` when both layers carry their own alpha.
///
/// This is the Porter-Duff source-over operator expressed on straight-alpha colors: the color
/// channels are weighted by the effective coverage of each layer and divided by the combined
/// alpha. If both layers are fully transparent the combined alpha is zero, and the result is
/// transparent black.
pub fn blend_over(background: Rgba8, foreground: Rgba8) -> Rgba8 {
    match (background.a, foreground.a) {
        (_, 255) => return foreground,
        (0, 0) => return TRANSPARENT,
        (_, 0) => return background,
        _ => {}
    }

    let fg_alpha = f64::from(foreground.a) / 255.0;
    let bg_weight = f64::from(background.a) / 255.0 * (1.0 - fg_alpha);
    let out_alpha = fg_alpha + bg_weight;

    if out_alpha <= 0.0 {
        return TRANSPARENT;
    }

    let mix = |bg: u8, fg: u8| {
        quantize((f64::from(fg) * fg_alpha + f64::from(bg) * bg_weight) / out_alpha)
    };

    Rgba8 {
        r: mix(background.r, foreground.r),
        g: mix(background.g, foreground.g),
        b: mix(background.b, foreground.b),
        a: quantize(out_alpha * 255.0),
    }
}

/// Transparent black.
pub const TRANSPARENT: Rgba8 = Rgba8 {
    r: 0,
    g: 0,
    b: 0,
    a: 0,
};

/// Round a channel value half away from zero and narrow it to a `u8`.
///
/// Values outside of `[0, 255]` saturate.
#[inline(always)]
#[expect(
    clippy::cast_possible_truncation,
    reason = "float to int casts saturate, which is the intended clamping"
)]
pub fn quantize(value: f64) -> u8 {
    value.round() as u8
}
