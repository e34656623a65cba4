use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use crate::constants::is_known_arch;
use crate::vercmp::{compare_values, rpmvercmp};

/// The pieces of a raw `epoch:version-release[.arch]` string, as split by [`rpm_parse_evr`].
///
/// Any field except the version may be absent. Unlike [`crate::Version`] this is not validated:
/// whatever text sits between the separators is kept as-is, and comparisons simply operate on it.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ParsedEvr<'a> {
    epoch: Option<Cow<'a, str>>,
    version: &'a str,
    release: Option<&'a str>,
    arch: Option<&'a str>,
}

impl<'a> ParsedEvr<'a> {
    /// Create a new EVR from already separated values
    pub fn new<E: Into<Cow<'a, str>>>(
        epoch: Option<E>,
        version: &'a str,
        release: Option<&'a str>,
    ) -> Self {
        ParsedEvr {
            epoch: epoch.map(Into::into),
            version,
            release,
            arch: None,
        }
    }

    /// Create an EVR parsed from a string, see [`rpm_parse_evr`]
    pub fn parse(evr: &'a str) -> Self {
        rpm_parse_evr(evr)
    }

    /// The epoch value, normalized to a plain decimal number
    pub fn epoch(&self) -> Option<&str> {
        self.epoch.as_deref()
    }

    /// The version value
    pub fn version(&self) -> &str {
        self.version
    }

    /// The release value, without any recognized arch suffix
    pub fn release(&self) -> Option<&str> {
        self.release
    }

    /// The arch that was stripped from the release, if any
    pub fn arch(&self) -> Option<&str> {
        self.arch
    }
}

impl fmt::Display for ParsedEvr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(epoch) = &self.epoch {
            write!(f, "{}:", epoch)?;
        }
        write!(f, "{}", self.version)?;
        if let Some(release) = self.release {
            write!(f, "-{}", release)?;
        }
        if let Some(arch) = self.arch {
            write!(f, ".{}", arch)?;
        }
        Ok(())
    }
}

/// Split an `epoch:version-release[.arch]` string like rpmUtils' `stringToVersion()`.
///
/// The epoch is whatever precedes the first `:`; it is dropped if it isn't a number. The version
/// ends at the first `-`, everything after it is the release. A trailing `.arch` on the release
/// is split off when `arch` is one of [`crate::ARCH_LIST`].
pub fn rpm_parse_evr(evr: &str) -> ParsedEvr<'_> {
    let (epoch, vr) = match evr.split_once(':') {
        Some((epoch, vr)) => (epoch.parse::<u64>().ok(), vr),
        None => (None, evr),
    };

    let (version, release, arch) = match vr.split_once('-') {
        Some((version, release)) => match release.rsplit_once('.') {
            Some((release, arch)) if is_known_arch(arch) => (version, Some(release), Some(arch)),
            _ => (version, Some(release), None),
        },
        None => (vr, None, None),
    };

    ParsedEvr {
        epoch: epoch.map(|epoch| Cow::Owned(epoch.to_string())),
        version,
        release,
        arch,
    }
}

/// Compare a requested EVR (`yours`) against an installed one (`mine`).
///
/// Combines rpmUtils' `compareEVR()` and rpm's `labelCompare()`: epoch, then version, then
/// release, returning the first difference. Comparison only goes as deep as `yours` specifies:
///
/// * the epoch is only compared when `yours` has one
/// * if `yours` has no release, versions that agree so far are equal whatever `mine`'s release
///
/// This lets a caller ask for "any release of 1.0" without triggering an upgrade or downgrade.
pub fn compare_evr(yours: &ParsedEvr<'_>, mine: &ParsedEvr<'_>) -> Ordering {
    if yours.epoch.is_some() {
        let ordering = compare_values(yours.epoch(), mine.epoch());
        if ordering != Ordering::Equal {
            log::trace!("{} vs {}: decided by epoch ({:?})", yours, mine, ordering);
            return ordering;
        }
    }

    let ordering = compare_values(Some(yours.version), Some(mine.version));
    if ordering != Ordering::Equal {
        log::trace!("{} vs {}: decided by version ({:?})", yours, mine, ordering);
        return ordering;
    }

    if yours.release.is_none() {
        log::trace!("{} vs {}: no release requested, treating as equal", yours, mine);
        return Ordering::Equal;
    }

    let ordering = compare_values(yours.release, mine.release);
    log::trace!("{} vs {}: decided by release ({:?})", yours, mine, ordering);
    ordering
}

/// Compare two raw EVR strings, `yours` being the requested one.
///
/// Both sides are split with [`rpm_parse_evr`] and handed to [`compare_evr`], so the result is
/// the ordering of `yours` relative to `mine`.
pub fn compare_rpm_versions(mine: &str, yours: &str) -> Ordering {
    compare_evr(&rpm_parse_evr(yours), &rpm_parse_evr(mine))
}
