//! Deduplicated diagnostics for unsupported input.
//!
//! The styling engine never fails on odd stylesheets; it skips what it does not
//! understand. Skips that a user may care about (an external stylesheet that was
//! not loaded, an at-rule that was dropped) are reported here once per unique
//! message.
//!
//! Messages are always recorded. They are only written to stderr once echoing
//! has been switched on with [`set_echo`], so library callers see no output
//! unless they ask for it.

use std::collections::BTreeSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;

/// Messages recorded since the last [`take_warnings`] / [`clear_warnings`].
static WARNED: Mutex<BTreeSet<String>> = Mutex::new(BTreeSet::new());

/// Whether new messages are echoed to stderr.
static ECHO: AtomicBool = AtomicBool::new(false);

/// Turn echoing of new warnings to stderr on or off.
pub fn set_echo(enabled: bool) {
    ECHO.store(enabled, Ordering::Relaxed);
}

/// Record a warning about unsupported input (reported once per unique message).
///
/// # Example
/// ```
/// wren_common::warning::warn_once("CSS", "skipped at-rule '@media screen'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let is_new = {
        let mut warned = WARNED.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        warned.insert(key)
    };

    if is_new && ECHO.load(Ordering::Relaxed) {
        eprintln!("{}", format!("[Wren {component}] warning: {message}").yellow());
    }
}

/// Drain and return every recorded warning, sorted.
pub fn take_warnings() -> Vec<String> {
    let mut warned = WARNED.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    std::mem::take(&mut *warned).into_iter().collect()
}

/// Forget all recorded warnings (call when loading a new document).
pub fn clear_warnings() {
    WARNED
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .clear();
}
