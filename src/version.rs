use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use nom::bytes::complete::take_while1;
use nom::character::complete::{char, digit1};
use nom::combinator::{all_consuming, opt};
use nom::sequence::terminated;
use nom::{IResult, Parser};

use crate::errors::*;
use crate::evr::{ParsedEvr, compare_evr};
use crate::vercmp::{compare_values, rpmvercmp};

/// A validated RPM version identifier, `[epoch:]upstream_version[-revision]`.
///
/// Epoch overrides all other fields and is generally only used as a last resort - in cases where
/// a change to the versioning scheme or packaging error creates a situation where newer packages
/// might otherwise sort as being older. It is `0` when not given.
///
/// The upstream version is the version string used by the upstream project.
///
/// The revision (the release, in rpm terms) is assigned by the packager. It is optional, and an
/// absent revision is distinct from an empty one (`1.0` vs `1.0-`).
///
/// Values are immutable once parsed.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Version {
    epoch: u64,
    upstream_version: String,
    revision: Option<String>,
}

impl Version {
    /// Parse a version identifier.
    ///
    /// The whole input must consist of an optional `digits:` epoch, followed by at least one of
    /// `[.+~0-9A-Za-z-]`. The revision starts after the last `-`, as long as that leaves a
    /// non-empty upstream version.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || {
            log::debug!("rejecting '{}': not a rpm version identifier", raw);
            Error::ValidationFailure(raw.to_owned())
        };

        let (_, (epoch, body)) = all_consuming(version_identifier)
            .parse(raw)
            .map_err(|_| invalid())?;

        let epoch = match epoch {
            Some(digits) => digits.parse::<u64>().map_err(|_| invalid())?,
            None => 0,
        };

        let (upstream_version, revision) = match body.rfind('-') {
            Some(idx) if idx > 0 => (&body[..idx], Some(&body[idx + 1..])),
            _ => (body, None),
        };

        Ok(Version {
            epoch,
            upstream_version: upstream_version.to_owned(),
            revision: revision.map(str::to_owned),
        })
    }

    /// The epoch value, `0` if none was given
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The upstream version value
    pub fn upstream_version(&self) -> &str {
        &self.upstream_version
    }

    /// The revision value, if one was given
    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    /// View this version as an EVR, for use with [`compare_evr`]
    pub fn to_evr(&self) -> ParsedEvr<'_> {
        ParsedEvr::new(
            Some(self.epoch.to_string()),
            &self.upstream_version,
            self.revision.as_deref(),
        )
    }

    /// Compare against a version that may only be partially specified.
    ///
    /// Behaves like [`Ord::cmp`], except that when `requested` carries no revision, the
    /// comparison stops after the upstream version: `1.0-5` is equal to a requested `1.0`.
    pub fn cmp_partial(&self, requested: &Version) -> Ordering {
        compare_evr(&requested.to_evr(), &self.to_evr()).reverse()
    }

    /// Whether this version matches `requested` to the level of detail `requested` gives
    pub fn satisfies(&self, requested: &Version) -> bool {
        self.cmp_partial(requested) == Ordering::Equal
    }
}

fn is_version_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '~' | '-')
}

/// optional `digits:` epoch, then the version and revision as one run
fn version_identifier(input: &str) -> IResult<&str, (Option<&str>, &str)> {
    (
        opt(terminated(digit1, char(':'))),
        take_while1(is_version_char),
    )
        .parse(input)
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Version::parse(value)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.epoch != 0 {
            write!(f, "{}:", self.epoch)?;
        }
        write!(f, "{}", self.upstream_version)?;
        if let Some(revision) = &self.revision {
            write!(f, "-{}", revision)?;
        }
        Ok(())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch
            .cmp(&other.epoch)
            .then_with(|| rpmvercmp(&self.upstream_version, &other.upstream_version))
            .then_with(|| compare_values(self.revision(), other.revision()))
    }
}
