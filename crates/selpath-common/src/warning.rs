//! Diagnostics with coloured terminal output.
//!
//! Provides deduplication so a document walked many times does not repeat
//! the same message. Used by the tree and selector crates to report inputs
//! they degrade on rather than reject.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// A poisoned set only means another thread panicked mid-insert; the set
/// itself is still usable.
fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Record `key`, returning `true` the first time it is seen.
fn should_print(key: String) -> bool {
    warned().get_or_insert_with(HashSet::new).insert(key)
}

/// Warn about a degraded input (prints once per unique message).
///
/// # Example
/// ```
/// use selpath_common::warning::warn_once;
///
/// warn_once("Selector", "walk reached a non-element node");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if should_print(format!("[{component}] {message}")) {
        eprintln!("{}", format!("[selpath {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings (call between unrelated documents).
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}

/// Print a trace line for a component, without deduplication.
///
/// Only meant for opt-in tracing features; regular diagnostics go through
/// [`warn_once`].
pub fn trace(component: &str, message: &str) {
    eprintln!("{}", format!("[selpath {component}] {message}").dimmed());
}
