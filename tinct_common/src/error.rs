// Copyright 2025 the Tinct Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors that can occur in Tinct.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A gradient table was built over a radius that is not finite and positive.
    ///
    /// Callers are expected to special-case zero-extent images before building a table.
    #[error("gradient domain radius must be finite and positive, got {radius}")]
    InvalidDomain {
        /// The rejected radius.
        radius: f64,
    },
    /// A pixel coordinate was outside of the pixmap.
    #[error("pixel ({x}, {y}) is outside of the {width}x{height} pixmap")]
    OutOfBounds {
        /// The requested x coordinate.
        x: u16,
        /// The requested y coordinate.
        y: u16,
        /// Width of the pixmap.
        width: u16,
        /// Height of the pixmap.
        height: u16,
    },
    /// The work on a column panicked.
    ///
    /// Only the first failure of a render call is reported.
    #[error("rendering column {column} failed: {message}")]
    WorkerFailure {
        /// The column whose work failed.
        column: u16,
        /// The panic message, if it could be recovered.
        message: String,
    },
    /// A string could not be parsed as a `#rgb` or `#rrggbb` color.
    #[error("invalid hex color `{0}`")]
    InvalidHexColor(String),
    /// The worker threads used for rendering could not be created.
    #[error("couldn't spawn render workers: {0}")]
    WorkerSpawn(String),
}
