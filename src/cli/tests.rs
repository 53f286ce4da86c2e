// repo-sync: Multi-repository sync helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::sync::RunMode;
use clap::Parser;

#[test]
fn test_parse_defaults() {
    let cli = Cli::try_parse_from(["repo-sync"]).unwrap();
    insta::assert_debug_snapshot!(cli, @r"
    Cli {
        check_only: false,
        sync: false,
        directory: None,
        configs: [],
        log_level: None,
        log_file: None,
        manifest: None,
    }
    ");
    assert_eq!(cli.mode(), RunMode::Interactive);
    assert_eq!(cli.base_dir(), Path::new("."));
    assert!(cli.to_config_overrides().is_empty());
}

#[test]
fn test_parse_modes() {
    let check = Cli::try_parse_from(["repo-sync", "--check-only"]).unwrap();
    let sync = Cli::try_parse_from(["repo-sync", "--sync"]).unwrap();

    assert_eq!(check.mode(), RunMode::Check);
    assert_eq!(sync.mode(), RunMode::Sync);
}

#[test]
fn test_modes_conflict() {
    let err = Cli::try_parse_from(["repo-sync", "--check-only", "--sync"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
}

#[test]
fn test_parse_all_options() {
    let cli = Cli::try_parse_from([
        "repo-sync",
        "-C",
        "/srv/mods",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "-l",
        "4",
        "--log-file",
        "sync.log",
        "--manifest",
        "repos.ini",
    ])
    .unwrap();

    assert_eq!(cli.base_dir(), Path::new("/srv/mods"));
    assert_eq!(
        cli.configs,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert_eq!(
        cli.to_config_overrides(),
        [
            ("global.log_level", "4".to_string()),
            ("global.log_file", "sync.log".to_string()),
            ("sync.manifest", "repos.ini".to_string()),
        ]
    );
}

#[test]
fn test_log_level_range() {
    assert!(Cli::try_parse_from(["repo-sync", "-l", "5"]).is_ok());
    assert!(Cli::try_parse_from(["repo-sync", "-l", "6"]).is_err());
}

#[test]
fn test_rejects_positional_arguments() {
    assert!(Cli::try_parse_from(["repo-sync", "extra"]).is_err());
}
