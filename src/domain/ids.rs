//! Domain identifier types with validation
//!
//! Newtype wrappers for the names this tool passes between CloudWatch Logs
//! and Parameter Store, so the two are never mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CloudWatch log group name
///
/// # Examples
///
/// ```
/// use log_exporter::domain::ids::LogGroupName;
/// use std::str::FromStr;
///
/// let name = LogGroupName::from_str("/app/service").unwrap();
/// assert_eq!(name.as_str(), "/app/service");
/// assert_eq!(name.trimmed(), "app/service");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogGroupName(String);

impl LogGroupName {
    /// Creates a new LogGroupName from a string
    ///
    /// Returns `Err` if the name is empty or whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Log group name cannot be empty".to_string());
        }
        Ok(Self(name))
    }

    /// Returns the log group name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with leading and trailing `/` removed
    pub fn trimmed(&self) -> &str {
        self.0.trim_matches('/')
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LogGroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LogGroupName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for LogGroupName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Parameter Store parameter name
///
/// Parameter names are hierarchical paths such as
/// `/log-exporter-last-export/app/service`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterName(String);

impl ParameterName {
    /// Creates a new ParameterName from a string
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Parameter name cannot be empty".to_string());
        }
        Ok(Self(name))
    }

    /// Joins `base` and `leaf` with `/`, then replaces every `//` with `/`
    ///
    /// The replacement is a single left-to-right pass, so `///` becomes `//`.
    /// Existing watermark parameters were named this way and must keep
    /// resolving to the same keys.
    pub fn join(base: &str, leaf: &str) -> Self {
        Self(format!("{base}/{leaf}").replace("//", "/"))
    }

    /// Returns the parameter name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ParameterName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ParameterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
