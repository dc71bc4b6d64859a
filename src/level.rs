// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Build levels and check tiers.
//!
//! Every check belongs to a tier (`ContractLevel::Default` or
//! `ContractLevel::Audit`). The active `BuildLevel` decides which tiers run:
//!
//! | BuildLevel | Default-tier checks | Audit-tier checks |
//! |------------|---------------------|-------------------|
//! | `Off`      | skipped             | skipped           |
//! | `Default`  | evaluated           | skipped           |
//! | `Audit`    | evaluated           | evaluated         |
//!
//! `BuildLevel::BUILD` is fixed at compile time by `build.rs`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// Tier a single check is declared at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContractLevel {
    Default,
    Audit,
}

impl ContractLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ContractLevel::Default => "DEFAULT",
            ContractLevel::Audit => "AUDIT",
        }
    }
}

impl fmt::Display for ContractLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which tiers of checks are evaluated. Ordered `Off < Default < Audit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BuildLevel {
    Off,
    Default,
    Audit,
}

impl BuildLevel {
    /// The level this crate was compiled with.
    #[cfg(contracts_level_off)]
    pub const BUILD: BuildLevel = BuildLevel::Off;
    /// The level this crate was compiled with.
    #[cfg(contracts_level_audit)]
    pub const BUILD: BuildLevel = BuildLevel::Audit;
    /// The level this crate was compiled with.
    #[cfg(not(any(contracts_level_off, contracts_level_audit)))]
    pub const BUILD: BuildLevel = BuildLevel::Default;

    /// Does this level evaluate checks of `tier`?
    #[inline]
    pub const fn includes(self, tier: ContractLevel) -> bool {
        match (self, tier) {
            (BuildLevel::Off, _) => false,
            (BuildLevel::Default, ContractLevel::Default) => true,
            (BuildLevel::Default, ContractLevel::Audit) => false,
            (BuildLevel::Audit, _) => true,
        }
    }

    /// The tier recorded in violations captured at this level.
    pub const fn active_tier(self) -> Option<ContractLevel> {
        match self {
            BuildLevel::Off => None,
            BuildLevel::Default => Some(ContractLevel::Default),
            BuildLevel::Audit => Some(ContractLevel::Audit),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildLevel::Off => "OFF",
            BuildLevel::Default => "DEFAULT",
            BuildLevel::Audit => "AUDIT",
        }
    }
}

impl Default for BuildLevel {
    fn default() -> Self {
        BuildLevel::BUILD
    }
}

impl fmt::Display for BuildLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(BuildLevel::Off),
            "default" => Ok(BuildLevel::Default),
            "audit" => Ok(BuildLevel::Audit),
            _ => Err(ConfigError::InvalidLevel(s.to_string())),
        }
    }
}
