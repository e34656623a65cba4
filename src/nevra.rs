use std::fmt;

use nom::bytes::complete::take_till1;
use nom::character::complete::char;
use nom::combinator::{all_consuming, opt};
use nom::{IResult, Parser};

use crate::constants::MULTIVERSION_SEPARATOR;
use crate::errors::*;
use crate::version::Version;

/// One installed package as reported by `rpm -q --qf` with [`crate::NEVRA_FORMAT`].
///
/// Name, Epoch, Version, Release and Architecture. rpm reports a missing epoch as `0`, so every
/// field is always present.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Nevra {
    name: String,
    epoch: String,
    version: String,
    release: String,
    arch: String,
}

impl Nevra {
    /// Parse a single line of query output, `name epoch version release arch`.
    ///
    /// Fields are separated by exactly one space and may not be blank. A single leading `'` (left
    /// over from shell quoting of the query format) is ignored, as is the line terminator.
    pub fn from_query_line(line: &str) -> Result<Self> {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        let (_, (name, epoch, version, release, arch)) = all_consuming(query_line)
            .parse(trimmed)
            .map_err(|_| {
                log::debug!("rejecting query line '{}'", line);
                Error::MalformedQueryLine(line.to_owned())
            })?;

        Ok(Nevra {
            name: name.to_owned(),
            epoch: epoch.to_owned(),
            version: version.to_owned(),
            release: release.to_owned(),
            arch: arch.to_owned(),
        })
    }

    /// Parse every non-blank line of query output
    pub fn parse_query_output(output: &str) -> Result<Vec<Self>> {
        output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(Nevra::from_query_line)
            .collect()
    }

    /// The name value
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The epoch value
    pub fn epoch(&self) -> &str {
        &self.epoch
    }

    /// The version value
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The release value
    pub fn release(&self) -> &str {
        &self.release
    }

    /// The arch value
    pub fn arch(&self) -> &str {
        &self.arch
    }

    /// The installed `epoch:version-release`, validated as a [`Version`]
    pub fn evr(&self) -> Result<Version> {
        Version::parse(&format!("{}:{}-{}", self.epoch, self.version, self.release))
    }
}

impl fmt::Display for Nevra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-", self.name)?;
        if self.epoch != "0" {
            write!(f, "{}:", self.epoch)?;
        }
        write!(f, "{}-{}.{}", self.version, self.release, self.arch)
    }
}

fn field(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace()).parse(input)
}

fn query_line(input: &str) -> IResult<&str, (&str, &str, &str, &str, &str)> {
    let (rest, (_, name, _, epoch, _, version, _, release, _, arch)) = (
        opt(char('\'')),
        field,
        char(' '),
        field,
        char(' '),
        field,
        char(' '),
        field,
        char(' '),
        field,
    )
        .parse(input)?;
    Ok((rest, (name, epoch, version, release, arch)))
}

/// Render several versions the way multiple installed versions of one package are reported
pub fn join_versions<'a, I>(versions: I) -> String
where
    I: IntoIterator<Item = &'a Version>,
{
    versions
        .into_iter()
        .map(Version::to_string)
        .collect::<Vec<_>>()
        .join(MULTIVERSION_SEPARATOR)
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_query_line() {
        let nevra = Nevra::from_query_line("bash 0 5.2.26 3.fc40 x86_64\n").unwrap();
        assert_eq!(nevra.name(), "bash");
        assert_eq!(nevra.epoch(), "0");
        assert_eq!(nevra.version(), "5.2.26");
        assert_eq!(nevra.release(), "3.fc40");
        assert_eq!(nevra.arch(), "x86_64");
        assert_eq!(nevra.to_string(), "bash-5.2.26-3.fc40.x86_64");

        let nevra = Nevra::from_query_line("'openssl 1 3.1.4 1.el9 x86_64").unwrap();
        assert_eq!(nevra.name(), "openssl");
        assert_eq!(nevra.epoch(), "1");
        assert_eq!(nevra.to_string(), "openssl-1:3.1.4-1.el9.x86_64");
    }

    #[test]
    fn test_from_query_line_malformed() {
        for line in [
            "",
            "bash 0 5.2.26 3.fc40",
            "bash 0 5.2.26 3.fc40 x86_64 extra",
            "bash  0 5.2.26 3.fc40 x86_64",
            " bash 0 5.2.26 3.fc40 x86_64",
            "bash\t0 5.2.26 3.fc40 x86_64",
        ] {
            assert_eq!(
                Nevra::from_query_line(line),
                Err(Error::MalformedQueryLine(line.to_owned()))
            );
        }
    }

    #[test]
    fn test_parse_query_output() {
        let output = "kernel 0 6.8.5 301.fc40 x86_64\nkernel 0 6.8.9 300.fc40 x86_64\n\n";
        let packages = Nevra::parse_query_output(output).unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[1].version(), "6.8.9");

        assert!(Nevra::parse_query_output("kernel 0 6.8.5\n").is_err());
        assert!(Nevra::parse_query_output("").unwrap().is_empty());
    }

    #[test]
    fn test_evr() {
        let nevra = Nevra::from_query_line("openssl 1 3.1.4 1.el9 x86_64").unwrap();
        let evr = nevra.evr().unwrap();
        assert_eq!(evr.epoch(), 1);
        assert_eq!(evr.upstream_version(), "3.1.4");
        assert_eq!(evr.revision(), Some("1.el9"));

        let nevra = Nevra::from_query_line("gpg-pubkey (none) 3228467c 613798eb noarch").unwrap();
        assert!(nevra.evr().is_err());
    }

    #[test]
    fn test_join_versions() {
        let versions = [
            Version::parse("6.8.5-301.fc40").unwrap(),
            Version::parse("1:6.8.9-300.fc40").unwrap(),
        ];
        assert_eq!(join_versions(&versions), "6.8.5-301.fc40; 1:6.8.9-300.fc40");
        assert_eq!(join_versions(&Vec::<Version>::new()), "");
    }
}
