// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! Tests that expect violations need a continuation-capable process-wide
//! enforcer; `install_continuation` sets one up exactly once per process.

#![doc(hidden)]

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use crate::enforce::{self, Enforcer};
use crate::handler::{ContinuationHandler, RecordingHandler, VIOLATION_PREFIX};
use crate::level::BuildLevel;
use crate::violation::HandlerMode;

static INSTALL: Once = Once::new();

/// Install an AUDIT-level enforcer with the continuation handler.
///
/// Panics if another enforcer (e.g. the aborting build default) won the race,
/// since running violation tests against it would kill the test binary.
pub fn install_continuation() {
    INSTALL.call_once(|| {
        let _ = enforce::install(Enforcer::new(BuildLevel::Audit, ContinuationHandler));
    });
    assert_eq!(
        enforce::global().mode(),
        HandlerMode::Continue,
        "process-wide enforcer was installed before install_continuation()"
    );
}

/// An explicit enforcer at `level` that records instead of unwinding.
pub fn recording_enforcer(level: BuildLevel) -> (Enforcer, RecordingHandler) {
    let handler = RecordingHandler::new();
    (Enforcer::new(level, handler.clone()), handler)
}

fn panic_text(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
}

/// Run `f` and return the violation text if a continuation handler fired.
///
/// Panics that are not contract violations are propagated.
pub fn violation_message<F: FnOnce()>(f: F) -> Option<String> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(()) => None,
        Err(payload) => match panic_text(payload.as_ref()) {
            Some(text) if text.starts_with(VIOLATION_PREFIX) => Some(text.to_string()),
            _ => panic::resume_unwind(payload),
        },
    }
}

/// Does `f` trigger a contract violation?
pub fn violates<F: FnOnce()>(f: F) -> bool {
    violation_message(f).is_some()
}
