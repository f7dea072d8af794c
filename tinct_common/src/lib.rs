// Copyright 2025 the Tinct Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate includes the pixel buffer, color math and gradient tables used by
//! [Tinct CPU][tinct_cpu].
//!
//! # Usage
//!
//! The pure parts (compositing, gradient lookup and hex parsing) can be used on their own, but
//! rendering into a [`Pixmap`][crate::pixmap::Pixmap] is done by [Tinct CPU][tinct_cpu], and
//! you probably want to use that.
//!
//! # Features
//!
//! - `png` (enabled by default): Allow loading [`Pixmap`][crate::pixmap::Pixmap]s from PNG images
//!   and encoding them back to PNG.
//!
//! # Contents
//!
//! - The straight-alpha [`Pixmap`][crate::pixmap::Pixmap]
//! - Compositing operators ([`compose`])
//! - Gradient color tables ([`gradient`])
//! - Distance helpers ([`geometry`])
//! - Hex color parsing ([`hex`])
//!
//! [tinct_cpu]: https://crates.io/crates/tinct_cpu
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

mod error;

pub mod compose;
pub mod geometry;
pub mod gradient;
pub mod hex;
pub mod pixmap;

pub use error::Error;
pub use peniko;
pub use peniko::color;
pub use peniko::kurbo;
