use thiserror::Error;

/// Configuration-phase failures, detected either by this crate (duplicate
/// target names) or by the host and surfaced here (duplicate extension,
/// double plugin application).
///
/// Every variant aborts configuration; there is no recovery or partial
/// application.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("duplicate target `{0}` in target registry")]
    DuplicateTarget(String),

    #[error("extension `{0}` is already registered on this project")]
    DuplicateExtension(String),

    #[error("plugin `{0}` is already applied to this project")]
    PluginAlreadyApplied(String),

    #[error("deferred linker already executed for this project")]
    LinkerRetriggered,

    #[error("invalid dependency coordinate `{coordinate}`: {reason}")]
    InvalidCoordinate { coordinate: String, reason: String },
}

/// Opaque failure from the host toolchain, surfaced unmodified.
///
/// The convention layer adds no context and performs no translation; the
/// host's own diagnostic reporting is the user-facing surface.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ToolchainError(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Toolchain(#[from] ToolchainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolchain_error_is_passed_through_verbatim() {
        let host_message = "A problem occurred configuring project ':lib'.";
        let err: Error = ToolchainError(host_message.to_string()).into();
        assert_eq!(err.to_string(), host_message);
    }

    #[test]
    fn test_config_error_names_the_offender() {
        let err = ConfigError::DuplicateTarget("debug".to_string());
        assert!(err.to_string().contains("debug"));
    }
}
