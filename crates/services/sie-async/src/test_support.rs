//! Test-only helpers for mutating process-global state.

/// Scoped environment-variable override.
///
/// Restores the previous value (or removes the variable) on drop. Tests
/// using it must run under `#[serial(env)]` because `std::env::set_var`
/// is not thread-safe.
pub struct EnvGuard {
    key: &'static str,
    prev: Option<String>,
}

impl EnvGuard {
    /// Override `key` with `val` for the lifetime of the guard.
    #[must_use]
    pub fn set(key: &'static str, val: &str) -> Self {
        let prev = std::env::var(key).ok();
        // SAFETY: callers serialize env mutation with #[serial(env)]
        unsafe { std::env::set_var(key, val) };
        Self { key, prev }
    }

    /// Unset `key` for the lifetime of the guard.
    #[must_use]
    pub fn remove(key: &'static str) -> Self {
        let prev = std::env::var(key).ok();
        // SAFETY: callers serialize env mutation with #[serial(env)]
        unsafe { std::env::remove_var(key) };
        Self { key, prev }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: same serialization requirement as set/remove
        match &self.prev {
            Some(v) => unsafe { std::env::set_var(self.key, v) },
            None => unsafe { std::env::remove_var(self.key) },
        }
    }
}
