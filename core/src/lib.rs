// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod dispatch_error;
pub use dispatch_error::DispatchError;

mod report_entry;
pub use report_entry::ReportEntry;

mod request_fields;
pub use request_fields::RequestFields;

mod run_listener;
pub use run_listener::RunListener;

mod null_run_listener;
pub use null_run_listener::NullRunListener;

mod reporter_factory;
pub use reporter_factory::{ChannelId, ReporterFactory, RunSummary};

mod work_resolver;
pub use work_resolver::WorkResolver;

pub mod timer;
pub use timer::{Interrupted, Timer};

mod thread_timer;
pub use thread_timer::ThreadTimer;
