// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Gradient Weave Kernel Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Configuration, error hierarchy, and read-only field snapshots for
//! the Gradient Weave delayed-feedback field kernel.

pub mod config;
pub mod error;
pub mod snapshot;

pub use config::WeaveConfig;
pub use error::{WeaveError, WeaveResult};
pub use snapshot::{sanitize_value, FieldSnapshot};
