//! RPM specific constants
//!
//! These values mirror what package tooling passes to and expects back from the `rpm` binary.

/// Query format used to list installed packages, one `name epoch version release arch` per line.
///
/// Packages without an epoch report `0`.
pub const NEVRA_FORMAT: &str = "%{NAME} %|EPOCH?{%{EPOCH}}:{0}| %{VERSION} %{RELEASE} %{ARCH}\\n";

/// Separator used when several installed versions of one package are reported together.
pub const MULTIVERSION_SEPARATOR: &str = "; ";

/// Machine architectures recognized as a `.arch` suffix on a release.
pub const ARCH_LIST: &[&str] = &[
    "noarch",
    "i386",
    "i686",
    "ppc",
    "ppc64",
    "armv3l",
    "armv4b",
    "armv4l",
    "armv4tl",
    "armv5tel",
    "armv5tejl",
    "armv6l",
    "armv7l",
    "m68kmint",
    "s390",
    "s390x",
    "ia64",
    "x86_64",
    "sh3",
    "sh4",
];

/// Whether `arch` is one of [`ARCH_LIST`]
pub fn is_known_arch(arch: &str) -> bool {
    ARCH_LIST.contains(&arch)
}
