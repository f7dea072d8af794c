// Copyright 2025 the Tinct Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic render operations.

use crate::column::{Column, Columns};
#[cfg(feature = "multithreading")]
use crate::dispatch::multi_threaded::MultiThreadedDispatcher;
use crate::dispatch::single_threaded::SingleThreadedDispatcher;
use crate::dispatch::Dispatcher;
use tinct_common::color::Rgba8;
use tinct_common::compose::{blend_over, composite_over};
use tinct_common::geometry::{distance, max_corner_distance};
use tinct_common::gradient::GradientTable;
use tinct_common::kurbo::Point;
use tinct_common::pixmap::Pixmap;
use tinct_common::Error;

/// Settings to apply to the render context.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderSettings {
    /// The number of worker threads that should be used for rendering.
    ///
    /// A value of 0 renders everything on the calling thread. This setting only has an
    /// effect when the `multithreading` feature is enabled.
    pub num_threads: u16,
}

impl Default for RenderSettings {
    /// Twice the available parallelism of the host, or 0 without the `multithreading`
    /// feature.
    fn default() -> Self {
        #[cfg(feature = "multithreading")]
        let num_threads = std::thread::available_parallelism()
            .map(|n| u16::try_from(n.get().saturating_mul(2)).unwrap_or(u16::MAX))
            .unwrap_or(2);
        #[cfg(not(feature = "multithreading"))]
        let num_threads = 0;

        Self { num_threads }
    }
}

/// The direction along which [`RenderContext::fill_gradient`] changes color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum GradientOrientation {
    /// The color changes from the left edge to the right edge.
    #[default]
    Horizontal,
    /// The color changes from the top edge to the bottom edge.
    Vertical,
}

/// A render context.
///
/// The context owns the worker threads used for rendering and can be reused for any number of
/// pixmaps.
#[derive(Debug)]
pub struct RenderContext {
    dispatcher: Box<dyn Dispatcher>,
}

impl RenderContext {
    /// Create a new render context with the default settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WorkerSpawn`] if the worker threads couldn't be started.
    pub fn new() -> Result<Self, Error> {
        Self::new_with(RenderSettings::default())
    }

    /// Create a new render context with specific settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WorkerSpawn`] if the worker threads couldn't be started.
    pub fn new_with(settings: RenderSettings) -> Result<Self, Error> {
        #[cfg(feature = "multithreading")]
        let dispatcher: Box<dyn Dispatcher> = if settings.num_threads == 0 {
            Box::new(SingleThreadedDispatcher::new())
        } else {
            Box::new(MultiThreadedDispatcher::new(settings.num_threads)?)
        };

        #[cfg(not(feature = "multithreading"))]
        let dispatcher: Box<dyn Dispatcher> = {
            let _ = settings;
            Box::new(SingleThreadedDispatcher::new())
        };

        Ok(Self { dispatcher })
    }

    /// The number of worker threads, 0 if rendering happens on the calling thread.
    pub fn num_threads(&self) -> u16 {
        self.dispatcher.num_threads()
    }

    /// Run `func` once for every column of `pixmap`.
    ///
    /// Columns are processed in no particular order, possibly in parallel, and each one is
    /// handed to exactly one call of `func`. This method only returns once every column is
    /// done.
    ///
    /// # Errors
    ///
    /// If `func` panics, the remaining columns are still processed and the first panic is
    /// returned as [`Error::WorkerFailure`].
    pub fn render_columns(
        &self,
        pixmap: &mut Pixmap,
        func: impl Fn(&mut Column<'_>) + Sync,
    ) -> Result<(), Error> {
        let (width, height) = (pixmap.width(), pixmap.height());
        let columns = Columns::new(width, height, pixmap.data_mut());

        self.dispatcher.render_columns(columns, &func)
    }

    /// Draw a radial gradient over the whole pixmap.
    ///
    /// The gradient is `from` at `center` and reaches `to` at the corner of the pixmap that
    /// is farthest away from `center`. Every gradient color is composited over the existing
    /// content of the pixmap with [`composite_over`].
    ///
    /// A pixmap with a single pixel is simply filled with `from`, and an empty pixmap is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDomain`] if `center` is not a finite point, and
    /// [`Error::WorkerFailure`] if rendering a column failed.
    pub fn draw_radial_gradient(
        &self,
        pixmap: &mut Pixmap,
        center: Point,
        from: Rgba8,
        to: Rgba8,
    ) -> Result<(), Error> {
        if pixmap.is_empty() {
            return Ok(());
        }

        let (width, height) = (pixmap.width(), pixmap.height());
        let domain_radius = max_corner_distance(width, height, center);

        if pixmap.data().len() == 1 || domain_radius == 0.0 {
            log::trace!("degenerate {width}x{height} radial gradient, filling with start color");
            pixmap.data_mut().fill(from);

            return Ok(());
        }

        let table = GradientTable::new(from, to, domain_radius)?;

        log::debug!(
            "drawing {width}x{height} radial gradient around ({}, {}) with radius {domain_radius} on {} threads",
            center.x,
            center.y,
            self.num_threads()
        );

        self.render_columns(pixmap, |column| {
            let x = f64::from(column.x());

            for (y, pixel) in column.rows_mut() {
                let radius = distance(center, Point::new(x, f64::from(y)));
                *pixel = composite_over(*pixel, table.color_at(radius));
            }
        })
    }

    /// Overwrite every pixel of the pixmap with `color`.
    pub fn fill(&self, pixmap: &mut Pixmap, color: Rgba8) {
        pixmap.data_mut().fill(color);
    }

    /// Overwrite the pixmap with a two-color ramp along `orientation`.
    ///
    /// The first column (or row) is `from`, and each following one moves one step of
    /// `(to - from) / extent` towards `to`, so the last one stops one step short of `to`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WorkerFailure`] if rendering a column failed.
    pub fn fill_gradient(
        &self,
        pixmap: &mut Pixmap,
        from: Rgba8,
        to: Rgba8,
        orientation: GradientOrientation,
    ) -> Result<(), Error> {
        if pixmap.is_empty() {
            return Ok(());
        }

        let extent = match orientation {
            GradientOrientation::Horizontal => pixmap.width(),
            GradientOrientation::Vertical => pixmap.height(),
        };

        let table = GradientTable::new(from, to, f64::from(extent))?;

        self.render_columns(pixmap, |column| match orientation {
            GradientOrientation::Horizontal => {
                let color = table.color_at(f64::from(column.x()));
                for (_, pixel) in column.rows_mut() {
                    *pixel = color;
                }
            }
            GradientOrientation::Vertical => {
                for (y, pixel) in column.rows_mut() {
                    *pixel = table.color_at(f64::from(y));
                }
            }
        })
    }

    /// Composite `overlay` onto `pixmap`, with the top-left corner of `overlay` at `(x, y)`.
    ///
    /// Both images keep their own alpha and are combined with [`blend_over`]. Parts of
    /// `overlay` that fall outside of `pixmap` are ignored, and the offsets may be negative.
    pub fn paste(&self, pixmap: &mut Pixmap, overlay: &Pixmap, x: i32, y: i32) {
        // Returns the start in `overlay`, the start in `pixmap` and the length of the visible
        // span along one axis.
        let clip = |offset: i32, overlay_len: u16, target_len: u16| {
            let offset = i64::from(offset);
            let start = offset.max(0);
            let end = (offset + i64::from(overlay_len)).min(i64::from(target_len));

            if start >= end {
                return None;
            }

            Some((
                usize::try_from(start - offset).ok()?,
                usize::try_from(start).ok()?,
                usize::try_from(end - start).ok()?,
            ))
        };

        let (Some((src_x, dst_x, span_x)), Some((src_y, dst_y, span_y))) = (
            clip(x, overlay.width(), pixmap.width()),
            clip(y, overlay.height(), pixmap.height()),
        ) else {
            return;
        };

        let dst_stride = usize::from(pixmap.width());
        let src_stride = usize::from(overlay.width());

        for row in 0..span_y {
            let dst_start = (dst_y + row) * dst_stride + dst_x;
            let src_start = (src_y + row) * src_stride + src_x;
            let dst = &mut pixmap.data_mut()[dst_start..dst_start + span_x];
            let src = &overlay.data()[src_start..src_start + span_x];

            for (dst, src) in dst.iter_mut().zip(src) {
                *dst = blend_over(*dst, *src);
            }
        }
    }
}
