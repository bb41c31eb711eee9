//! Theming boundary
//!
//! [`ThemeFlags`] is the process-wide presentation flag set that global styling
//! reads. Components never write it directly: they hold a [`ThemeScope`],
//! which acquires a [`ThemeGuard`] for the active environment and releases it
//! when the environment changes or the scope is dropped.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use crate::domain::environment::Environment;

/// Shared set of active theme flags
#[derive(Debug, Clone, Default)]
pub struct ThemeFlags {
    inner: Arc<Mutex<BTreeSet<Environment>>>,
}

impl ThemeFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently set flags, in a stable order
    pub fn active(&self) -> Vec<Environment> {
        match self.inner.lock() {
            Ok(flags) => flags.iter().copied().collect(),
            Err(poisoned) => poisoned.into_inner().iter().copied().collect(),
        }
    }

    /// The theme global styling should use, if any is set
    pub fn current(&self) -> Option<Environment> {
        self.active().into_iter().next()
    }

    pub fn contains(&self, environment: Environment) -> bool {
        self.active().contains(&environment)
    }

    /// Class names of the active flags, e.g. `theme-cafe`
    pub fn classes(&self) -> Vec<&'static str> {
        self.active().into_iter().map(Environment::theme_class).collect()
    }

    fn with_flags<F: FnOnce(&mut BTreeSet<Environment>)>(&self, f: F) {
        match self.inner.lock() {
            Ok(mut flags) => f(&mut flags),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }
}

/// Holds one theme flag for as long as it lives
#[derive(Debug)]
pub struct ThemeGuard {
    flags: ThemeFlags,
    environment: Environment,
}

impl ThemeGuard {
    pub fn acquire(flags: &ThemeFlags, environment: Environment) -> Self {
        flags.with_flags(|set| {
            set.insert(environment);
        });
        log::debug!("theme flag set: {}", environment.theme_class());
        Self {
            flags: flags.clone(),
            environment,
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }
}

impl Drop for ThemeGuard {
    fn drop(&mut self) {
        let environment = self.environment;
        self.flags.with_flags(|set| {
            set.remove(&environment);
        });
        log::debug!("theme flag cleared: {}", environment.theme_class());
    }
}

/// Lifecycle-scoped owner of the active theme flag
#[derive(Debug)]
pub struct ThemeScope {
    flags: ThemeFlags,
    guard: Option<ThemeGuard>,
}

impl ThemeScope {
    pub fn new(flags: ThemeFlags) -> Self {
        Self { flags, guard: None }
    }

    pub fn flags(&self) -> &ThemeFlags {
        &self.flags
    }

    pub fn active(&self) -> Option<Environment> {
        self.guard.as_ref().map(ThemeGuard::environment)
    }

    /// Makes `environment` the only flag this scope holds.
    /// Reactivating the current environment leaves the flags untouched.
    pub fn activate(&mut self, environment: Environment) {
        if self.active() == Some(environment) {
            return;
        }
        // Release the previous flag before setting the new one
        self.guard = None;
        self.guard = Some(ThemeGuard::acquire(&self.flags, environment));
    }

    pub fn release(&mut self) {
        self.guard = None;
    }
}
