// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Violation handlers: what happens after a check fails.
//!
//! A handler receives exactly one [`ContractViolation`] per failure. Handlers
//! that report `HandlerMode::Abort` must not return. Handlers that report
//! `HandlerMode::Continue` may unwind (as [`ContinuationHandler`] does) or
//! return normally (as [`RecordingHandler`] does).

use std::sync::{Arc, Mutex, PoisonError};

use crate::violation::{ContractViolation, HandlerMode};

/// Prefix every handler puts in front of the rendered record.
pub const VIOLATION_PREFIX: &str = "CONTRACT VIOLATION!: ";

/// Strategy invoked with each violation.
pub trait ViolationHandler: Send + Sync {
    /// Mode recorded in violations dispatched to this handler.
    fn mode(&self) -> HandlerMode;

    fn handle(&self, violation: ContractViolation);
}

/// Fail-fast handler: log, print, abort. Never returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbortHandler;

impl ViolationHandler for AbortHandler {
    fn mode(&self) -> HandlerMode {
        HandlerMode::Abort
    }

    fn handle(&self, violation: ContractViolation) {
        tracing::error!(
            file = %violation.file_name,
            line = violation.line_number,
            function = %violation.function_name,
            level = %violation.assertion_level,
            "{}",
            violation.comment
        );
        eprintln!("{VIOLATION_PREFIX}{violation}");
        std::process::abort();
    }
}

/// Recoverable handler: panics with the rendered record so a caller (usually a
/// test) can catch it with `catch_unwind` or `#[should_panic]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContinuationHandler;

impl ViolationHandler for ContinuationHandler {
    fn mode(&self) -> HandlerMode {
        HandlerMode::Continue
    }

    fn handle(&self, violation: ContractViolation) {
        tracing::warn!(
            file = %violation.file_name,
            line = violation.line_number,
            function = %violation.function_name,
            level = %violation.assertion_level,
            "{}",
            violation.comment
        );
        panic!("{VIOLATION_PREFIX}{violation}");
    }
}

/// Collects violations and returns normally.
///
/// Clones share the same buffer, so one clone can be installed while another
/// is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingHandler {
    records: Arc<Mutex<Vec<ContractViolation>>>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn violations(&self) -> Vec<ContractViolation> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain the buffer.
    pub fn take(&self) -> Vec<ContractViolation> {
        std::mem::take(&mut *self.records.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ViolationHandler for RecordingHandler {
    fn mode(&self) -> HandlerMode {
        HandlerMode::Continue
    }

    fn handle(&self, violation: ContractViolation) {
        tracing::debug!(comment = %violation.comment, "recorded contract violation");
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(violation);
    }
}

/// The handler a build selects when nothing else is configured.
pub fn handler_for(mode: HandlerMode) -> Arc<dyn ViolationHandler> {
    match mode {
        HandlerMode::Continue => Arc::new(ContinuationHandler),
        HandlerMode::Abort => Arc::new(AbortHandler),
    }
}
