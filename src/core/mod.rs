//! Core build orchestration logic
//!
//! # Submodules
//!
//! - [`target`] - Target platform, architecture, and strategy selection
//! - [`build_env`] - Build environment snapshots and toolchain resolution
//! - [`artifact`] - Dependency build artifacts
//! - [`dependency`] - Dependency builder trait
//! - [`icu`] - ICU build strategies
//! - [`openssl`] - OpenSSL build strategies
//! - [`toolkit`] - Qt configure/build/install
//! - [`orchestrator`] - The top-level driver
//! - [`doctor`] - Host tool preflight

pub mod artifact;
pub mod build_env;
pub mod dependency;
pub mod doctor;
pub mod icu;
pub mod openssl;
pub mod orchestrator;
pub mod target;
pub mod toolkit;
