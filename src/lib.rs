//! # rpm-version
//!
//! Parse `[epoch:]version[-release]` identifiers and order them exactly like rpm's own
//! `rpmvercmp()`, quirks included.
//!
//! # Example
//!
//! ```rust
//! use rpm_version::{Version, rpmvercmp};
//! use std::cmp::Ordering;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let installed = Version::parse("1:20191210.1-0ubuntu0.19.04.2")?;
//! assert_eq!(installed.epoch(), 1);
//! assert_eq!(installed.upstream_version(), "20191210.1");
//! assert_eq!(installed.revision(), Some("0ubuntu0.19.04.2"));
//!
//! // epoch wins over everything else
//! assert!(Version::parse("9:99-99")? < Version::parse("10:01-01")?);
//!
//! // a requested version without a release accepts any release
//! assert!(installed.satisfies(&Version::parse("1:20191210.1")?));
//!
//! // tilde marks a pre-release
//! assert_eq!(rpmvercmp("1.0~rc1", "1.0"), Ordering::Less);
//! # Ok(())
//! # }
//! ```

#![allow(unknown_lints, clippy::uninlined_format_args)]

mod errors;
pub use crate::errors::*;

mod constants;
pub use crate::constants::*;

mod vercmp;
pub use crate::vercmp::*;

mod evr;
pub use crate::evr::*;

mod version;
pub use crate::version::*;

mod nevra;
pub use crate::nevra::*;
