// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Turns a dispatcher-issued work-item name into something invocable.
///
/// The surrounding infrastructure owns the resolution mechanism (and any
/// failure handling for names it cannot resolve); the work queue only asks
/// it for the next item.
pub trait WorkResolver: Send + Sync {
    type Item: Clone + Send;

    fn resolve(&self, name: &str) -> Self::Item;
}
