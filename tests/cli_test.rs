//! Command-line parsing

use clap::Parser;

use qtforge::cli::commands::Commands;
use qtforge::cli::Cli;

#[test]
fn linux_target_with_global_flags() {
    let cli = Cli::try_parse_from([
        "qtforge",
        "--rebuild",
        "-c",
        "-debug",
        "-c",
        "-no-opengl",
        "--skip-icu-build",
        "linux-gcc",
    ])
    .unwrap();

    assert!(cli.rebuild);
    assert!(cli.skip_icu_build);
    assert!(!cli.skip_openssl_build);
    assert_eq!(cli.config_option, vec!["-debug", "-no-opengl"]);
    assert!(matches!(cli.command, Commands::LinuxGcc));
}

#[test]
fn windows_target_takes_version_and_platform() {
    let cli = Cli::try_parse_from(["qtforge", "win32-msvc", "2017", "--platform", "amd64"]).unwrap();

    match cli.command {
        Commands::Win32Msvc {
            vs_version,
            platform,
        } => {
            assert_eq!(vs_version.as_deref(), Some("2017"));
            assert_eq!(platform, "amd64");
        }
        other => panic!("Expected win32-msvc, got: {other:?}"),
    }
}

#[test]
fn windows_version_is_optional_and_platform_defaults_to_x86() {
    let cli = Cli::try_parse_from(["qtforge", "win32-msvc"]).unwrap();

    match cli.command {
        Commands::Win32Msvc {
            vs_version,
            platform,
        } => {
            assert!(vs_version.is_none());
            assert_eq!(platform, "x86");
        }
        other => panic!("Expected win32-msvc, got: {other:?}"),
    }
}

#[test]
fn mac_platform_defaults_to_amd64() {
    let cli = Cli::try_parse_from(["qtforge", "macx-clang"]).unwrap();

    match cli.command {
        Commands::MacxClang { platform } => assert_eq!(platform, "amd64"),
        other => panic!("Expected macx-clang, got: {other:?}"),
    }
}

#[test]
fn unknown_platform_value_is_rejected() {
    assert!(Cli::try_parse_from(["qtforge", "macx-clang", "--platform", "arm64"]).is_err());
}

#[test]
fn install_and_jobs_flags_parse_before_the_subcommand() {
    let cli = Cli::try_parse_from([
        "qtforge",
        "--install",
        "/opt/qt-sdk",
        "--jobs",
        "8",
        "--json",
        "linux-gcc",
    ])
    .unwrap();

    assert_eq!(cli.install.as_deref(), Some(std::path::Path::new("/opt/qt-sdk")));
    assert_eq!(cli.jobs, Some(8));
    assert!(cli.json);
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["qtforge"]).is_err());
}
