// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Start-up configuration for the process-wide enforcer.
//!
//! Layers, lowest priority first:
//!
//! 1. Compile time: `BuildLevel::BUILD`, `HandlerMode::BUILD`
//! 2. Environment: `CONTRACTS_LEVEL`, `CONTRACTS_MODE`
//! 3. Explicit overrides (the CLI's `--level` / `--mode`)
//!
//! The result is turned into an [`Enforcer`] and installed once.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enforce::{self, Enforcer};
use crate::handler::handler_for;
use crate::level::BuildLevel;
use crate::violation::HandlerMode;

/// Runtime override for the build level.
pub const LEVEL_ENV: &str = "CONTRACTS_LEVEL";
/// Runtime override for the handler mode.
pub const MODE_ENV: &str = "CONTRACTS_MODE";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid build level `{0}` (expected off, default or audit)")]
    InvalidLevel(String),
    #[error("invalid handler mode `{0}` (expected abort or continue)")]
    InvalidMode(String),
    #[error("a contract enforcer is already installed for this process")]
    AlreadyInstalled,
}

/// Effective level and handler mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnforcementConfig {
    pub level: BuildLevel,
    pub mode: HandlerMode,
}

impl EnforcementConfig {
    /// What the crate was compiled with.
    pub fn from_build() -> Self {
        Self {
            level: BuildLevel::BUILD,
            mode: HandlerMode::BUILD,
        }
    }

    /// Build defaults overridden by `CONTRACTS_LEVEL` / `CONTRACTS_MODE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_build().with_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup. Unset keys keep the
    /// current value.
    pub fn with_lookup<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(LEVEL_ENV) {
            self.level = raw.parse()?;
        }
        if let Some(raw) = lookup(MODE_ENV) {
            self.mode = raw.parse()?;
        }
        Ok(self)
    }

    pub fn with_level(mut self, level: Option<BuildLevel>) -> Self {
        if let Some(level) = level {
            self.level = level;
        }
        self
    }

    pub fn with_mode(mut self, mode: Option<HandlerMode>) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        self
    }

    pub fn enforcer(&self) -> Enforcer {
        Enforcer::with_handler(self.level, handler_for(self.mode))
    }

    /// Install as the process-wide enforcer.
    pub fn install(&self) -> Result<(), ConfigError> {
        enforce::install(self.enforcer())
    }
}

impl Default for EnforcementConfig {
    fn default() -> Self {
        Self::from_build()
    }
}
