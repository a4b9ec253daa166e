// src/exit.rs
//! Process exit codes for `atomlint`.
//!
//! Provides a stable contract for scripts and CI.

use std::process::Termination;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AtomlintExit {
    /// Every checked reference respects the hierarchy.
    Success = 0,
    /// Generic error (I/O, unreadable input).
    Error = 1,
    /// The configuration could not be loaded or compiled.
    InvalidConfig = 2,
    /// At least one violation was reported.
    CheckFailed = 3,
}

impl AtomlintExit {
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl Termination for AtomlintExit {
    fn report(self) -> std::process::ExitCode {
        match self {
            Self::Success | Self::CheckFailed => info!(code = self.code(), "atomlint exiting"),
            _ => error!(code = self.code(), "atomlint exiting with error"),
        }
        std::process::ExitCode::from(self.code())
    }
}
