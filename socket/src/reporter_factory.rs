// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::engine::SocketCommunicationEngine;
use crate::test_result_decorator::TestResultSocketDecorator;
use crate::test_set_result_decorator::TestSetResultSocketDecorator;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use test_dispatch_core::{
    ChannelId, ReporterFactory, RunListener, RunSummary, ThreadTimer, Timer,
};

/// Creates the reporting listeners used inside one worker, typically one
/// per test set or thread.
///
/// Each created listener gets the next [`ChannelId`] from a counter owned
/// by this factory instance (strictly increasing from 1, duplicate-free
/// under concurrent creation) and is wrapped in both socket decorators
/// sharing the factory's engine.
pub struct SocketReporterFactory<F, T: Timer = ThreadTimer>
where
    F: Fn(ChannelId) -> Box<dyn RunListener> + Send + Sync,
{
    engine: Arc<SocketCommunicationEngine<T>>,
    build_listener: F,
    next_channel_id: AtomicU32,
}

impl<F, T: Timer> SocketReporterFactory<F, T>
where
    F: Fn(ChannelId) -> Box<dyn RunListener> + Send + Sync,
{
    pub fn new(engine: Arc<SocketCommunicationEngine<T>>, build_listener: F) -> Self {
        Self {
            engine,
            build_listener,
            next_channel_id: AtomicU32::new(1),
        }
    }
}

impl<F, T> ReporterFactory for SocketReporterFactory<F, T>
where
    F: Fn(ChannelId) -> Box<dyn RunListener> + Send + Sync,
    T: Timer + 'static,
{
    fn create_reporter(&self) -> Box<dyn RunListener> {
        let id = ChannelId::new(self.next_channel_id.fetch_add(1, Ordering::SeqCst));
        let base = (self.build_listener)(id);
        let per_set = TestSetResultSocketDecorator::new(self.engine.clone(), base);
        Box::new(TestResultSocketDecorator::new(self.engine.clone(), per_set))
    }

    fn close(&self) -> RunSummary {
        // Sentinel counts; the dispatcher aggregates the real results from
        // the notifications it received per channel.
        RunSummary::new(17, 17, 17, 17)
    }
}
