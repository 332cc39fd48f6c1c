//! Package descriptor builders.
//!
//! Each submodule exposes the same `get_package()` shape: build a
//! [`Package`](crate::descriptor::Package) once, fully populated, and hand
//! it back behind an `Rc`. The [`env`] module assembles the root package the
//! generator consumes; [`unittest`], [`entry`] and [`base`] describe the
//! support libraries it pulls in.
//!
//! The whole family exists under two naming schemes that differ only by a
//! one-letter prefix (`cenv`/`xenv`, `cbase`/`xbase`, ...). [`Scheme`]
//! captures that substitution so the builders stay single-sourced.

use anyhow::bail;
use std::fmt;
use std::str::FromStr;

pub mod base;
pub mod entry;
pub mod env;
pub mod unittest;

/// Default repository scope the identifying paths are rooted in.
pub const DEFAULT_SCOPE: &str = "github.com/jurgen-kluft";

/// The two naming schemes of the package family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    #[default]
    Cenv,
    Xenv,
}

impl Scheme {
    fn prefix(self) -> char {
        match self {
            Scheme::Cenv => 'c',
            Scheme::Xenv => 'x',
        }
    }

    /// Prefixed name for a package stem, e.g. `unittest` -> `cunittest`.
    pub fn name(self, stem: &str) -> String {
        format!("{}{}", self.prefix(), stem)
    }

    /// Name of the root package: `cenv` or `xenv`.
    pub fn root_name(self) -> String {
        self.name("env")
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root_name())
    }
}

impl FromStr for Scheme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cenv" | "c" => Ok(Scheme::Cenv),
            "xenv" | "x" => Ok(Scheme::Xenv),
            other => bail!("unknown naming scheme '{other}' (expected 'cenv' or 'xenv')"),
        }
    }
}

/// Platform-style identifying path of a package repository.
pub fn dependency_path(scope: &str, name: &str) -> String {
    format!("{scope}/{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_prefixes_names() {
        assert_eq!(Scheme::Cenv.name("base"), "cbase");
        assert_eq!(Scheme::Xenv.name("unittest"), "xunittest");
        assert_eq!(Scheme::Cenv.root_name(), "cenv");
        assert_eq!(Scheme::Xenv.root_name(), "xenv");
    }

    #[test]
    fn test_scheme_from_str() {
        assert_eq!("cenv".parse::<Scheme>().unwrap(), Scheme::Cenv);
        assert_eq!("xenv".parse::<Scheme>().unwrap(), Scheme::Xenv);
        assert!("denv".parse::<Scheme>().is_err());
    }

    #[test]
    fn test_dependency_path() {
        assert_eq!(
            dependency_path(DEFAULT_SCOPE, "cbase"),
            "github.com/jurgen-kluft/cbase"
        );
    }
}
