//! Error types for qtforge
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Target platform and toolchain resolution errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Target string not recognized
    #[error("Unsupported target '{target}'")]
    UnsupportedTarget { target: String },

    /// Visual Studio version string not recognized
    #[error("Unknown Visual Studio version '{version}'. Supported versions: {supported}")]
    UnknownVsVersion { version: String, supported: String },

    /// Requested Visual Studio installation could not be located
    #[error("Visual Studio {version} not found for architecture '{arch}'. Set VSINSTALLDIR to override probing")]
    VisualStudioNotFound { version: String, arch: String },

    /// No supported Visual Studio installation found
    #[error("No supported Visual Studio installation found for architecture '{arch}'")]
    NoVisualStudioInstallation { arch: String },

    /// MSVC build requested with an environment that carries no toolset
    #[error("Build environment has no platform toolset; required for the MSVC strategy")]
    MissingToolset,
}

/// External build tool errors
#[derive(Error, Debug)]
pub enum CommandError {
    /// Tool could not be started
    #[error("Failed to start '{command}': {error}")]
    Spawn { command: String, error: String },

    /// Tool ran and returned a non-zero status
    #[error("Command '{command}' failed: {status}")]
    Failed { command: String, status: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove directory
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },

    /// Failed to copy a file
    #[error("Failed to copy '{from}' to '{to}': {error}")]
    CopyFile {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },

    /// Failed to copy a directory tree
    #[error("Failed to copy directory '{from}' to '{to}': {error}")]
    CopyDir {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },

    /// Failed to read a directory
    #[error("Failed to read directory '{path}': {error}")]
    ReadDir { path: PathBuf, error: String },

    /// Invalid library file pattern
    #[error("Invalid library pattern '{pattern}': {error}")]
    Pattern { pattern: String, error: String },

    /// A build step completed but did not produce an expected directory
    #[error("{producer} build did not produce expected directory '{path}'")]
    MissingArtifact { path: PathBuf, producer: String },
}

/// Top-level qtforge error type
#[derive(Error, Debug)]
pub enum QtforgeError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// External command error
    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),
}
