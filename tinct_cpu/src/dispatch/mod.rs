// Copyright 2025 the Tinct Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(feature = "multithreading")]
pub(crate) mod multi_threaded;
pub(crate) mod single_threaded;

use crate::column::{Column, Columns};
use core::fmt::Debug;
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::OnceLock;
use tinct_common::Error;

/// The work to run for a single column.
pub(crate) type ColumnFn<'f> = dyn Fn(&mut Column<'_>) + Sync + 'f;

pub(crate) trait Dispatcher: Debug + Send + Sync {
    /// Run `func` once for every column, and return once all of them are done.
    ///
    /// If `func` panics for some columns, the remaining columns still run and the first
    /// failure is returned.
    fn render_columns(&self, columns: Columns<'_>, func: &ColumnFn<'_>) -> Result<(), Error>;

    /// The number of worker threads, 0 if everything runs on the calling thread.
    fn num_threads(&self) -> u16;
}

/// Slot for the first failure of a render call.
#[derive(Debug, Default)]
pub(crate) struct FailureSlot {
    slot: OnceLock<Error>,
}

impl FailureSlot {
    /// Run `func` on `column`, recording a panic as a [`Error::WorkerFailure`].
    pub(crate) fn run(&self, column: &mut Column<'_>, func: &ColumnFn<'_>) {
        let x = column.x();

        if let Err(payload) = catch_unwind(AssertUnwindSafe(|| func(column))) {
            let failure = Error::WorkerFailure {
                column: x,
                message: panic_message(payload.as_ref()),
            };

            log::warn!("{failure}");

            // First failure wins, later ones have already been logged.
            let _ = self.slot.set(failure);
        }
    }

    pub(crate) fn into_result(self) -> Result<(), Error> {
        match self.slot.into_inner() {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
