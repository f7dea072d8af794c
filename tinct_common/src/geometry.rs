// Copyright 2025 the Tinct Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distances used to lay out radial gradients.

use crate::kurbo::Point;

/// The Euclidean distance between two points.
#[inline(always)]
pub fn distance(a: Point, b: Point) -> f64 {
    let (dx, dy) = (a.x - b.x, a.y - b.y);
    (dx * dx + dy * dy).sqrt()
}

/// The largest distance from `center` to one of the four corners of a `width` x `height` area.
///
/// This is the radius at which a radial gradient centered at `center` reaches its end color,
/// so that every pixel of the area lies within the gradient's domain. A NaN coordinate in
/// `center` yields NaN.
pub fn max_corner_distance(width: u16, height: u16, center: Point) -> f64 {
    let (w, h) = (f64::from(width), f64::from(height));

    [
        Point::new(0.0, 0.0),
        Point::new(w, 0.0),
        Point::new(0.0, h),
        Point::new(w, h),
    ]
    .into_iter()
    .map(|corner| distance(center, corner))
    .fold(0.0, |max, d| if d.is_nan() || d > max { d } else { max })
}
