// src/exit.rs
//! Standardized process exit codes for `hubrank`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum HubrankExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, parse, config).
    Error = 1,
    /// Input validation failed (non-positive top count).
    InvalidInput = 2,
}

impl HubrankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for HubrankExit {
    fn report(self) -> std::process::ExitCode {
        // Scripts generally rely on 0 vs non-0, but distinct codes help debug.
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
