// Copyright 2025 the Tinct Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate implements a CPU-based raster toolkit. Its centerpiece is a radial gradient
//! renderer that splits the target pixmap into columns and shades them on a pool of worker
//! threads.
//!
//! ```
//! use tinct_cpu::color::Rgba8;
//! use tinct_cpu::kurbo::Point;
//! use tinct_cpu::{Pixmap, RenderContext, RenderSettings};
//!
//! let ctx = RenderContext::new_with(RenderSettings { num_threads: 2 })?;
//! let mut pixmap = Pixmap::new(64, 48);
//!
//! let red = Rgba8 { r: 255, g: 0, b: 0, a: 255 };
//! let clear_blue = Rgba8 { r: 0, g: 0, b: 255, a: 0 };
//! ctx.draw_radial_gradient(&mut pixmap, Point::new(32.0, 24.0), red, clear_blue)?;
//!
//! assert_eq!(pixmap.sample(32, 24), red);
//! # Ok::<(), tinct_cpu::Error>(())
//! ```
//!
//! # Features
//!
//! - `multithreading` (enabled by default): Render columns on a pool of worker threads.
//!   Without it, [`RenderSettings::num_threads`] is ignored.
//! - `png` (enabled by default): Allow loading [`Pixmap`]s from PNG images and encoding them
//!   back to PNG.
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
#![forbid(unsafe_code)]

mod column;
mod dispatch;
mod render;

pub use column::{Column, Columns};
pub use render::{GradientOrientation, RenderContext, RenderSettings};
pub use tinct_common::hex::parse_hex_color;
pub use tinct_common::pixmap::Pixmap;
pub use tinct_common::{color, kurbo, Error};
