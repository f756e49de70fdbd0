//! Parser warnings with colored terminal output.
//!
//! Provides deduplication so the same degenerate-input warning is printed
//! at most once per process. Warnings are advisory texture only: the
//! tokenizer and tree builder never fail, and nothing here affects their
//! return values.

use std::collections::HashSet;
use std::sync::{LazyLock, Mutex};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: LazyLock<Mutex<HashSet<String>>> = LazyLock::new(|| Mutex::new(HashSet::new()));

/// Warn about degenerate input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Builder", "input ended with 2 unclosed tag(s); dropping them");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED.lock().unwrap().insert(key);

    if should_print {
        eprintln!("{YELLOW}[sprig {component}] ⚠ {message}{RESET}");
    }
}

/// Clear all recorded warnings (call before parsing a fresh document)
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    WARNED.lock().unwrap().clear();
}
