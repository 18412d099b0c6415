// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Renders a value as ordered field/value pairs for a dispatcher request.
///
/// Payload types declare their wire representation explicitly instead of
/// being introspected at runtime; the order returned here is the order the
/// fields appear in on the wire.
pub trait RequestFields {
    fn request_fields(&self) -> Vec<(&'static str, String)>;
}
