// Copyright 2025 the Tinct Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::column::{Column, Columns};
use crate::dispatch::{ColumnFn, Dispatcher, FailureSlot};
use core::fmt::{Debug, Formatter};
use crossbeam_channel::Receiver;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tinct_common::Error;

/// Distributes columns over a fixed pool of worker threads.
///
/// All columns of a render call are pushed into a shared queue, and every worker keeps
/// taking columns from it until the queue is empty. A column is received by exactly one
/// worker, so workers never touch the same pixels.
pub(crate) struct MultiThreadedDispatcher {
    thread_pool: ThreadPool,
    num_threads: u16,
}

impl MultiThreadedDispatcher {
    pub(crate) fn new(num_threads: u16) -> Result<Self, Error> {
        debug_assert!(num_threads > 0, "at least one worker is needed");

        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(usize::from(num_threads))
            .thread_name(|idx| format!("tinct-worker-{idx}"))
            .build()
            .map_err(|e| Error::WorkerSpawn(e.to_string()))?;

        log::debug!("spawned {num_threads} render workers");

        Ok(Self {
            thread_pool,
            num_threads,
        })
    }
}

impl Dispatcher for MultiThreadedDispatcher {
    fn render_columns(&self, columns: Columns<'_>, func: &ColumnFn<'_>) -> Result<(), Error> {
        let failure = FailureSlot::default();
        let (column_sender, column_receiver) = crossbeam_channel::unbounded();

        // Queue everything up front and close the queue, so that workers stop as soon as
        // it runs dry.
        for column in columns {
            // The receiver is still alive, so this can't fail.
            let _ = column_sender.send(column);
        }
        drop(column_sender);

        // The scope only returns once every spawned worker is done.
        self.thread_pool.in_place_scope(|scope| {
            for _ in 0..self.num_threads {
                let column_receiver = column_receiver.clone();
                let failure = &failure;

                scope.spawn(move |_| drain(&column_receiver, func, failure));
            }
        });

        failure.into_result()
    }

    fn num_threads(&self) -> u16 {
        self.num_threads
    }
}

fn drain(columns: &Receiver<Column<'_>>, func: &ColumnFn<'_>, failure: &FailureSlot) {
    while let Ok(mut column) = columns.recv() {
        failure.run(&mut column, func);
    }
}

impl Debug for MultiThreadedDispatcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MultiThreadedDispatcher")
            .field("num_threads", &self.num_threads)
            .finish_non_exhaustive()
    }
}
