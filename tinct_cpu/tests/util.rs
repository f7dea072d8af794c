// Copyright 2025 the Tinct Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions shared across different tests.

use tinct_cpu::color::Rgba8;
use tinct_cpu::{Pixmap, RenderContext, RenderSettings};

pub(crate) const WHITE: Rgba8 = rgba(255, 255, 255, 255);
pub(crate) const RED: Rgba8 = rgba(255, 0, 0, 255);
pub(crate) const CLEAR_BLUE: Rgba8 = rgba(0, 0, 255, 0);

pub(crate) const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Rgba8 {
    Rgba8 { r, g, b, a }
}

pub(crate) fn single_threaded() -> RenderContext {
    RenderContext::new_with(RenderSettings { num_threads: 0 }).unwrap()
}

pub(crate) fn multi_threaded(num_threads: u16) -> RenderContext {
    RenderContext::new_with(RenderSettings { num_threads }).unwrap()
}

/// A pixmap filled with `color`, or a deterministic pattern of mixed opacities if `color`
/// is `None`.
pub(crate) fn get_pixmap(width: u16, height: u16, color: Option<Rgba8>) -> Pixmap {
    let mut pixmap = Pixmap::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let pixel = color.unwrap_or_else(|| {
                let v = x.wrapping_mul(31).wrapping_add(y.wrapping_mul(17)).to_le_bytes()[0];
                rgba(v, v.wrapping_mul(3), 255 - v, v.wrapping_add(64))
            });
            pixmap.set_pixel(x, y, pixel);
        }
    }

    pixmap
}

pub(crate) fn assert_close(actual: Rgba8, expected: Rgba8, tolerance: u8) {
    let channels = [
        (actual.r, expected.r),
        (actual.g, expected.g),
        (actual.b, expected.b),
        (actual.a, expected.a),
    ];

    assert!(
        channels.iter().all(|(a, e)| a.abs_diff(*e) <= tolerance),
        "{actual:?} differs from {expected:?} by more than {tolerance}"
    );
}
