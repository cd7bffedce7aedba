//! Multi-scanner registration.
//!
//! Folds every scanner reading into the frame of the first one, pairing the
//! growing universe with one remaining reading at a time.
//!
//! ## Components
//!
//! | Component | Purpose |
//! |-----------|---------|
//! | [`Registrar`] | Pass loop, termination, time budget |
//! | [`RegistrationConfig`] | Worker count and wall-clock budget |
//! | [`Registration`] | Universe, merge log, undersized readings |
//! | `RotationCache` | Per-(cloud, rotation) memoized variants |
//!
//! ## Pass Loop
//!
//! ```text
//! universe = reading[0]          remaining = {1..n}
//!     │
//!     ▼
//! ┌──────────────────────────────────────────────┐
//! │ for i in remaining (ascending):              │
//! │   for r in 0..24:                            │
//! │     try_align(universe, rotated(i, r))       │──► merge, drop i
//! └──────────────────────────────────────────────┘
//!     │
//!     ├── remaining empty ──► Registration
//!     ├── budget spent    ──► Error::TimeBudgetExceeded
//!     └── nothing merged  ──► Error::Unregistrable
//! ```

mod cache;
mod config;
mod driver;
mod parallel;
mod types;

pub use config::RegistrationConfig;
pub use driver::{Registrar, register};
pub use types::{MergeRecord, Registration};
