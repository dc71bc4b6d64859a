// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The record built when a check fails, and where it came from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use crate::config::ConfigError;
use crate::level::ContractLevel;

/// What the active handler does with a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerMode {
    /// Raise a recoverable panic; the caller may catch it.
    Continue,
    /// Log and abort the process.
    Abort,
}

impl HandlerMode {
    /// The default handler mode this crate was compiled with.
    #[cfg(contracts_continuation)]
    pub const BUILD: HandlerMode = HandlerMode::Continue;
    /// The default handler mode this crate was compiled with.
    #[cfg(not(contracts_continuation))]
    pub const BUILD: HandlerMode = HandlerMode::Abort;

    /// Rendered as the `violation_continuation_mode` field.
    pub fn continuation_flag(self) -> &'static str {
        match self {
            HandlerMode::Continue => "ON",
            HandlerMode::Abort => "OFF",
        }
    }
}

impl Default for HandlerMode {
    fn default() -> Self {
        HandlerMode::BUILD
    }
}

impl fmt::Display for HandlerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerMode::Continue => f.write_str("continue"),
            HandlerMode::Abort => f.write_str("abort"),
        }
    }
}

impl FromStr for HandlerMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continue" | "continuation" | "on" => Ok(HandlerMode::Continue),
            "abort" | "off" => Ok(HandlerMode::Abort),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

/// Source position of an enforcement call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub function: &'static str,
}

impl CallSite {
    /// The caller's file and line. The function name is unknown here; use
    /// `call_site!()` or [`CallSite::in_function`] to supply one.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
            function: "<unknown>",
        }
    }

    pub fn in_function(self, function: &'static str) -> Self {
        Self { function, ..self }
    }
}

/// A failed check, captured at the moment it failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractViolation {
    pub line_number: u32,
    pub comment: String,
    pub assertion_level: ContractLevel,
    pub violation_continuation_mode: HandlerMode,
    pub file_name: String,
    pub function_name: String,
}

impl ContractViolation {
    pub fn new(
        site: CallSite,
        comment: String,
        assertion_level: ContractLevel,
        mode: HandlerMode,
    ) -> Self {
        Self {
            line_number: site.line,
            comment,
            assertion_level,
            violation_continuation_mode: mode,
            file_name: site.file.to_string(),
            function_name: site.function.to_string(),
        }
    }
}

/// Single-line key:value rendering used by the handlers.
impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{comment: \"{}\", function_name: \"{}\", file_name: \"{}\", \
             line_number: \"{}\", assertion_level: \"{}\", \
             violation_continuation_mode: \"{}\"}}",
            self.comment,
            self.function_name,
            self.file_name,
            self.line_number,
            self.assertion_level,
            self.violation_continuation_mode.continuation_flag()
        )
    }
}
