// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod endpoint;
pub use endpoint::DispatcherEndpoint;

mod hostname;
pub use hostname::resolve_hostname;

mod request;
pub use request::{Payload, RequestType};

mod engine;
pub use engine::{RetryPolicy, SocketCommunicationEngine};

mod work_queue;
pub use work_queue::{LazySocketWorkQueue, WorkCursor};

mod test_result_decorator;
pub use test_result_decorator::TestResultSocketDecorator;

mod test_set_result_decorator;
pub use test_set_result_decorator::TestSetResultSocketDecorator;

mod reporter_factory;
pub use reporter_factory::SocketReporterFactory;
