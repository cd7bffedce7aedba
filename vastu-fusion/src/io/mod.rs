//! Scanner report input and registration summary output.
//!
//! ## Reading Reports
//!
//! ```rust,ignore
//! use vastu_fusion::io::read_report;
//! use std::path::Path;
//!
//! let readings = read_report(Path::new("scanners.txt"))?;
//! ```
//!
//! ## Writing Summaries
//!
//! ```rust,ignore
//! use vastu_fusion::io::{OutputFormat, Summary};
//!
//! let summary = Summary::from_registration(&registration);
//! summary.write(&mut std::io::stdout(), OutputFormat::Json)?;
//! ```

mod report;
mod summary;

pub use report::{format_report, parse_report, read_report};
pub use summary::{OutputFormat, ScannerPosition, Summary};
