// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The enforcement entry point.
//!
//! An [`Enforcer`] pairs a [`BuildLevel`] with a [`ViolationHandler`]. Calling
//! [`Enforcer::enforce`] with a tier and a check closure:
//!
//! 1. returns immediately if the level excludes the tier (the closure is never
//!    called),
//! 2. otherwise evaluates the closure,
//! 3. and on a failing [`Status`] builds a [`ContractViolation`] for the call
//!    site and hands it to the handler.
//!
//! One enforcer is process-wide. It is installed at most once, at start-up,
//! with [`install`]; if nothing was installed the first check installs
//! [`Enforcer::from_build`]. Validated types and the `default_enforce!` /
//! `audit_enforce!` macros go through it. Explicit enforcers can be built and
//! used directly wherever a different level or handler is wanted.
//!
//! With the `level-off` build every process-wide entry point compiles down to
//! an early return.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::config::ConfigError;
use crate::handler::{handler_for, ViolationHandler};
use crate::level::{BuildLevel, ContractLevel};
use crate::status::Status;
use crate::violation::{CallSite, ContractViolation, HandlerMode};

/// A build level plus the handler that receives violations.
#[derive(Clone)]
pub struct Enforcer {
    level: BuildLevel,
    handler: Arc<dyn ViolationHandler>,
}

impl Enforcer {
    pub fn new(level: BuildLevel, handler: impl ViolationHandler + 'static) -> Self {
        Self {
            level,
            handler: Arc::new(handler),
        }
    }

    pub fn with_handler(level: BuildLevel, handler: Arc<dyn ViolationHandler>) -> Self {
        Self { level, handler }
    }

    /// Compile-time level with the compile-time default handler.
    pub fn from_build() -> Self {
        Self::with_handler(BuildLevel::BUILD, handler_for(HandlerMode::BUILD))
    }

    pub fn level(&self) -> BuildLevel {
        self.level
    }

    pub fn mode(&self) -> HandlerMode {
        self.handler.mode()
    }

    #[inline]
    pub fn is_enabled(&self, tier: ContractLevel) -> bool {
        self.level.includes(tier)
    }

    /// Evaluate `check` if `tier` is enabled, dispatching a violation on failure.
    ///
    /// Returns `false` only when the check ran, failed, and the handler
    /// returned. A skipped check counts as passed.
    #[inline]
    pub fn enforce<S, F>(&self, tier: ContractLevel, site: CallSite, check: F) -> bool
    where
        S: Into<Status>,
        F: FnOnce() -> S,
    {
        if !self.level.includes(tier) {
            return true;
        }
        let status: Status = check().into();
        if status.is_ok() {
            return true;
        }
        self.violate(site, status.into_message());
        false
    }

    /// Default-tier check at the caller's location.
    #[track_caller]
    #[inline]
    pub fn enforce_default<S, F>(&self, check: F) -> bool
    where
        S: Into<Status>,
        F: FnOnce() -> S,
    {
        self.enforce(ContractLevel::Default, CallSite::caller(), check)
    }

    /// Audit-tier check at the caller's location.
    #[track_caller]
    #[inline]
    pub fn enforce_audit<S, F>(&self, check: F) -> bool
    where
        S: Into<Status>,
        F: FnOnce() -> S,
    {
        self.enforce(ContractLevel::Audit, CallSite::caller(), check)
    }

    /// Pick a message by verbosity: empty when off, `default` at DEFAULT,
    /// `audit` at AUDIT. Only the chosen arm runs.
    pub fn comment<D, A>(&self, default: D, audit: A) -> String
    where
        D: FnOnce() -> String,
        A: FnOnce() -> String,
    {
        match self.level {
            BuildLevel::Off => String::new(),
            BuildLevel::Default => default(),
            BuildLevel::Audit => audit(),
        }
    }

    #[cold]
    #[inline(never)]
    fn violate(&self, site: CallSite, comment: String) {
        // Only reachable when the level includes a tier, so never Off here
        let tier = self.level.active_tier().unwrap_or(ContractLevel::Default);
        let violation = ContractViolation::new(site, comment, tier, self.handler.mode());
        self.handler.handle(violation);
    }
}

impl Default for Enforcer {
    fn default() -> Self {
        Self::from_build()
    }
}

impl fmt::Debug for Enforcer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Enforcer")
            .field("level", &self.level)
            .field("mode", &self.handler.mode())
            .finish()
    }
}

// ============================================================================
// PROCESS-WIDE ENFORCER
// ============================================================================

static GLOBAL: OnceLock<Enforcer> = OnceLock::new();

/// Install the process-wide enforcer. Allowed once, before or instead of the
/// lazy default.
pub fn install(enforcer: Enforcer) -> Result<(), ConfigError> {
    if cfg!(contracts_level_off) && enforcer.level() != BuildLevel::Off {
        tracing::warn!(
            requested = %enforcer.level(),
            "built with level OFF: process-wide checks are compiled out"
        );
    }
    let summary = format!("{enforcer:?}");
    GLOBAL
        .set(enforcer)
        .map_err(|_| ConfigError::AlreadyInstalled)?;
    tracing::info!(enforcer = %summary, "installed contract enforcer");
    Ok(())
}

/// The process-wide enforcer, installing the build default on first use.
pub fn global() -> &'static Enforcer {
    GLOBAL.get_or_init(Enforcer::from_build)
}

pub fn is_installed() -> bool {
    GLOBAL.get().is_some()
}

/// Check through the process-wide enforcer with an explicit call site.
/// Same return value as [`Enforcer::enforce`].
#[inline]
pub fn enforce_at<S, F>(tier: ContractLevel, site: CallSite, check: F) -> bool
where
    S: Into<Status>,
    F: FnOnce() -> S,
{
    if cfg!(contracts_level_off) {
        return true;
    }
    global().enforce(tier, site, check)
}

/// Default-tier check through the process-wide enforcer.
#[track_caller]
#[inline]
pub fn enforce_default<S, F>(check: F) -> bool
where
    S: Into<Status>,
    F: FnOnce() -> S,
{
    enforce_at(ContractLevel::Default, CallSite::caller(), check)
}

/// Audit-tier check through the process-wide enforcer.
#[track_caller]
#[inline]
pub fn enforce_audit<S, F>(check: F) -> bool
where
    S: Into<Status>,
    F: FnOnce() -> S,
{
    enforce_at(ContractLevel::Audit, CallSite::caller(), check)
}

/// [`Enforcer::comment`] on the process-wide enforcer.
pub fn contract_comment<D, A>(default: D, audit: A) -> String
where
    D: FnOnce() -> String,
    A: FnOnce() -> String,
{
    if cfg!(contracts_level_off) {
        return String::new();
    }
    global().comment(default, audit)
}

#[doc(hidden)]
pub fn trim_closures(mut name: &'static str) -> &'static str {
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

// ============================================================================
// MACROS
// ============================================================================

/// Path of the enclosing function, e.g. `my_crate::module::function`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        $crate::enforce::trim_closures(name.strip_suffix("::__here").unwrap_or(name))
    }};
}

/// File, line and enclosing function of the invocation.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::violation::CallSite {
            file: ::std::file!(),
            line: ::std::line!(),
            function: $crate::function_name!(),
        }
    };
}

/// Default-tier check. The expression is only evaluated when the tier is on.
///
/// ```ignore
/// default_enforce!(in_range_closed_open(x, 0.0, 90.0));
/// default_enforce!(enforcer => Status::new("x is even", x % 2 == 0));
/// ```
#[macro_export]
macro_rules! default_enforce {
    ($enforcer:expr => $check:expr $(,)?) => {
        {
            $enforcer.enforce(
                $crate::level::ContractLevel::Default,
                $crate::call_site!(),
                || $check,
            );
        }
    };
    ($check:expr $(,)?) => {
        {
            $crate::enforce::enforce_at(
                $crate::level::ContractLevel::Default,
                $crate::call_site!(),
                || $check,
            );
        }
    };
}

/// Audit-tier check. The expression is only evaluated at level AUDIT.
#[macro_export]
macro_rules! audit_enforce {
    ($enforcer:expr => $check:expr $(,)?) => {
        {
            $enforcer.enforce(
                $crate::level::ContractLevel::Audit,
                $crate::call_site!(),
                || $check,
            );
        }
    };
    ($check:expr $(,)?) => {
        {
            $crate::enforce::enforce_at(
                $crate::level::ContractLevel::Audit,
                $crate::call_site!(),
                || $check,
            );
        }
    };
}
