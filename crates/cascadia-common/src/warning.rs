//! Deduplicated engine warnings.
//!
//! Parsing a large stylesheet tends to hit the same unsupported construct
//! many times (an unknown property, a pseudo-class the matcher ignores).
//! Each distinct message is reported once per process, or until
//! [`clear_warnings`] is called, as a `tracing` WARN event carrying a
//! `component` field.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Messages already reported, keyed by `"[component] message"`.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about an unsupported feature (reported once per unique message).
///
/// Returns `true` if the warning was emitted, `false` if it had already
/// been reported.
///
/// # Example
/// ```
/// use cascadia_common::warning::warn_once;
///
/// let _ = warn_once("CSS", "unsupported property 'zoom'");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let first_time = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if first_time {
        tracing::warn!(component, "{message}");
    }
    first_time
}

/// Forget every recorded warning (call before processing a new document).
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_message_reported_once() {
        assert!(warn_once("test-dedup", "first"));
        assert!(!warn_once("test-dedup", "first"));
        assert!(warn_once("test-dedup", "second"));
    }

    #[test]
    fn test_component_is_part_of_the_key() {
        assert!(warn_once("test-component-a", "shared"));
        assert!(warn_once("test-component-b", "shared"));
    }
}
