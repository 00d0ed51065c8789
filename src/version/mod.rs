//! Build metadata resolution.
//!
//! The deployed function identifies itself by the package name and version
//! baked in at build time (`CARGO_PKG_NAME` / `CARGO_PKG_VERSION`). Both are
//! resolved once, at process start, into an immutable [`VersionInfo`] that
//! every invocation reads from.

use serde::Serialize;
use thiserror::Error;

/// Build metadata was missing or malformed.
///
/// This is a startup-time failure: it is surfaced from the handler binary's
/// `main` before the function starts serving, so no invocation can ever be
/// handled by a misconfigured process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("application name missing from build metadata")]
    MissingName,
    #[error("application version missing from build metadata")]
    MissingVersion,
}

/// Application name and version for the running build.
///
/// Resolved once and never mutated; handlers clone it into each invocation.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    application_name: String,
    application_version: String,
}

impl VersionInfo {
    /// Resolves the name and version from the package metadata of this build.
    pub fn from_build_metadata() -> Result<Self, ConfigurationError> {
        Self::from_parts(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    fn from_parts(name: &str, version: &str) -> Result<Self, ConfigurationError> {
        if name.trim().is_empty() {
            return Err(ConfigurationError::MissingName);
        }
        if version.trim().is_empty() {
            return Err(ConfigurationError::MissingVersion);
        }
        Ok(VersionInfo {
            application_name: name.to_string(),
            application_version: version.to_string(),
        })
    }

    /// The application's declared name.
    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    /// The application's declared semantic version.
    pub fn application_version(&self) -> &str {
        &self.application_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_application_name_from_package_metadata() {
        let info = VersionInfo::from_build_metadata().expect("build metadata must resolve");
        assert_eq!(info.application_name(), "lambda-pipeline");
    }

    #[test]
    fn test_resolves_a_defined_application_version() {
        let info = VersionInfo::from_build_metadata().expect("build metadata must resolve");
        assert!(
            !info.application_version().is_empty(),
            "version must be defined for every build"
        );
    }

    #[test]
    fn test_empty_name_is_a_configuration_error() {
        let err = VersionInfo::from_parts("", "1.0.0").unwrap_err();
        assert_eq!(err, ConfigurationError::MissingName);
    }

    #[test]
    fn test_blank_version_is_a_configuration_error() {
        let err = VersionInfo::from_parts("lambda-pipeline", "  ").unwrap_err();
        assert_eq!(err, ConfigurationError::MissingVersion);
    }
}
