#![cfg(feature = "cli")]

use plas::cli::Cli;
use std::path::PathBuf;

#[test]
fn no_path_reports_the_missing_file_config_error() {
    let cli = Cli {
        path: None,
        dump_tokens: false,
        no_color: false,
    };
    let err = cli.to_config().unwrap_err();
    assert_eq!(err.to_string(), "unable to start process without a file");
}

#[test]
fn a_path_produces_a_usable_config() {
    let cli = Cli {
        path: Some(PathBuf::from("examples_program.plas")),
        dump_tokens: true,
        no_color: false,
    };
    let config = cli.to_config().unwrap();
    assert_eq!(config.path, PathBuf::from("examples_program.plas"));
    assert!(config.dump_tokens);
}
