//! Demo configuration, read from the environment.

use core::str::FromStr;
use std::env::VarError;

use thiserror::Error;

/// Environment variable selecting which walkthroughs to run.
pub const PRINCIPLES_ENV: &str = "SOLID_DEMO_PRINCIPLES";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown principle {0:?} (expected one of srp, ocp, lsp, isp, dip)")]
    UnknownPrinciple(String),

    #[error("{PRINCIPLES_ENV} selects no principles")]
    Empty,

    #[error("{PRINCIPLES_ENV} is not valid UTF-8")]
    NotUnicode,
}

/// One of the five walkthroughs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Principle {
    SingleResponsibility,
    OpenClosed,
    LiskovSubstitution,
    InterfaceSegregation,
    DependencyInversion,
}

impl Principle {
    pub const ALL: [Principle; 5] = [
        Principle::SingleResponsibility,
        Principle::OpenClosed,
        Principle::LiskovSubstitution,
        Principle::InterfaceSegregation,
        Principle::DependencyInversion,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "srp",
            Principle::OpenClosed => "ocp",
            Principle::LiskovSubstitution => "lsp",
            Principle::InterfaceSegregation => "isp",
            Principle::DependencyInversion => "dip",
        }
    }
}

impl core::fmt::Display for Principle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Principle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Principle::ALL
            .into_iter()
            .find(|p| p.code() == code)
            .ok_or_else(|| ConfigError::UnknownPrinciple(s.trim().to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Walkthroughs to run, in canonical order, without duplicates.
    pub principles: Vec<Principle>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            principles: Principle::ALL.to_vec(),
        }
    }
}

impl DemoConfig {
    /// Parse a comma-separated list such as `"ocp, dip"`.
    pub fn parse_principles(raw: &str) -> Result<Self, ConfigError> {
        let mut principles = raw
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(Principle::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        principles.sort();
        principles.dedup();

        if principles.is_empty() {
            return Err(ConfigError::Empty);
        }
        Ok(Self { principles })
    }

    /// Read `SOLID_DEMO_PRINCIPLES`; unset means every principle.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_var(std::env::var(PRINCIPLES_ENV))
    }

    fn from_var(var: Result<String, VarError>) -> Result<Self, ConfigError> {
        match var {
            Ok(raw) => Self::parse_principles(&raw),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode),
        }
    }
}
