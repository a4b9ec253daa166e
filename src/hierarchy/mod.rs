// src/hierarchy/mod.rs
//! Atomic design hierarchy enforcement.
//!
//! Classifies files into ordered levels (atoms, molecules, ...) and reports
//! references that point at a same or higher level, plus references that
//! break module containment.

pub mod allowance;
pub mod classifier;
pub mod diagnostic;
pub mod marker;
pub mod module;
pub mod registry;
pub mod rule;
pub mod types;

pub use allowance::{allowed_levels, render_capability, AllowedLevels};
pub use classifier::Classifier;
pub use marker::{LevelFlag, MarkerTable};
pub use module::{FileModule, ModuleMode, ModuleVerdict, ModuleViolation};
pub use registry::{Level, LevelRegistry, LevelSpec};
pub use rule::{FileCheck, Resolve, Rule};
pub use types::{
    AllowReason, Diagnostic, Outcome, Reference, ReferenceKind, SkipReason, ViolationKind,
};
