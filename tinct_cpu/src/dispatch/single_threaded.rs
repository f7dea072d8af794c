// Copyright 2025 the Tinct Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::column::Columns;
use crate::dispatch::{ColumnFn, Dispatcher, FailureSlot};
use tinct_common::Error;

/// Runs every column on the calling thread, from left to right.
#[derive(Debug, Default)]
pub(crate) struct SingleThreadedDispatcher;

impl SingleThreadedDispatcher {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl Dispatcher for SingleThreadedDispatcher {
    fn render_columns(&self, mut columns: Columns<'_>, func: &ColumnFn<'_>) -> Result<(), Error> {
        let failure = FailureSlot::default();
        columns.update_columns(|column| failure.run(column, func));

        failure.into_result()
    }

    fn num_threads(&self) -> u16 {
        0
    }
}
