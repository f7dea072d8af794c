// Copyright 2025 the Tinct Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-color gradient lookup tables.

use crate::color::Rgba8;
use crate::compose::quantize;
use crate::Error;

/// A linear interpolation between two colors over a distance domain.
///
/// The table stores the start color and the per-unit change of each channel as `f64`, so
/// looking up the color for any distance is O(1) and rounding only happens once, when the
/// channel is written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientTable {
    /// The start color, as `[r, g, b, a]`.
    base: [f64; 4],
    /// How much each channel changes per unit of distance.
    per_unit_delta: [f64; 4],
    /// The distance at which the end color is reached.
    domain_radius: f64,
}

impl GradientTable {
    /// Build a table that reaches `from` at distance 0 and `to` at `domain_radius`.
    ///
    /// Returns [`Error::InvalidDomain`] if `domain_radius` is not finite and positive.
    pub fn new(from: Rgba8, to: Rgba8, domain_radius: f64) -> Result<Self, Error> {
        if !(domain_radius.is_finite() && domain_radius > 0.0) {
            log::debug!("rejecting gradient domain of radius {domain_radius}");

            return Err(Error::InvalidDomain {
                radius: domain_radius,
            });
        }

        let base = channels(from);
        let end = channels(to);
        let per_unit_delta = core::array::from_fn(|i| (end[i] - base[i]) / domain_radius);

        Ok(Self {
            base,
            per_unit_delta,
            domain_radius,
        })
    }

    /// Return the interpolated color at `radius`.
    ///
    /// Channels are rounded half away from zero. A radius outside of `[0, domain_radius]`
    /// extrapolates, and channels that leave the `u8` range saturate at 0 or 255.
    #[inline]
    pub fn color_at(&self, radius: f64) -> Rgba8 {
        let channel = |i: usize| quantize(self.base[i] + self.per_unit_delta[i] * radius);

        Rgba8 {
            r: channel(0),
            g: channel(1),
            b: channel(2),
            a: channel(3),
        }
    }

    /// The distance at which the end color is reached.
    pub fn domain_radius(&self) -> f64 {
        self.domain_radius
    }

    /// The color at distance 0.
    pub fn start_color(&self) -> Rgba8 {
        self.color_at(0.0)
    }
}

fn channels(color: Rgba8) -> [f64; 4] {
    [color.r, color.g, color.b, color.a].map(f64::from)
}
