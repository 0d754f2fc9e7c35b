use super::support::*;
use clap::Parser;
use rm_mirror::config::MirrorConfig;
use rm_mirror::sync::RunMode;
use rm_mirror::tooling::cli::{Cli, CliContext, OutputFormat};
use std::ffi::OsString;

#[test]
fn parses_positionals_and_defaults() {
    let cli = Cli::try_parse_from(["rm-mirror", "/data/xochitl", "/srv/mirror"]).unwrap();
    assert_eq!(cli.source.to_str(), Some("/data/xochitl"));
    assert_eq!(cli.destination.to_str(), Some("/srv/mirror"));
    assert_eq!(cli.format, OutputFormat::Text);
    assert_eq!(cli.run_mode(), RunMode::Apply);
    assert!(cli.config.is_none());
}

#[test]
fn parses_dry_run_and_json() {
    let cli = Cli::try_parse_from([
        "rm-mirror",
        "--dry-run",
        "--format",
        "json",
        "--config",
        "/etc/rm-mirror.toml",
        "src",
        "dst",
    ])
    .unwrap();
    assert_eq!(cli.run_mode(), RunMode::DryRun);
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(
        cli.config.as_deref().and_then(|p| p.to_str()),
        Some("/etc/rm-mirror.toml")
    );
}

#[test]
fn rejects_missing_destination() {
    assert!(Cli::try_parse_from(["rm-mirror", "src"]).is_err());
}

#[test]
fn rejects_unknown_format() {
    assert!(Cli::try_parse_from(["rm-mirror", "--format", "yaml", "src", "dst"]).is_err());
}

fn cli_for(fixture: &Fixture, extra: &[&str]) -> Cli {
    let mut args = vec![
        OsString::from("rm-mirror"),
        fixture.source.path().as_os_str().to_owned(),
        fixture.root().as_os_str().to_owned(),
    ];
    args.extend(extra.iter().map(OsString::from));
    Cli::try_parse_from(args).unwrap()
}

#[cfg(unix)]
fn shell_renderer_config() -> MirrorConfig {
    let mut config = MirrorConfig::default();
    config.render.program = "sh".to_string();
    config.render.args = vec!["-c".to_string(), "printf 'pdf:%s' \"$0\"".to_string(), "{id}".to_string()];
    config
}

#[cfg(unix)]
#[test]
fn executes_with_external_renderer() {
    let fixture = Fixture::new();
    fixture.folder(NOTES, "Notes", "");
    fixture.document(DRAFT, "Draft", NOTES, T1);

    let context = CliContext::with_config(shell_renderer_config());
    let output = context
        .execute(&cli_for(&fixture, &["--format", "json"]))
        .unwrap();

    let report: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(report["dry_run"], false);
    assert_eq!(report["created"].as_array().map(|a| a.len()), Some(2));

    let draft = fixture
        .path(&entry("notes", NOTES))
        .join(pdf("draft", DRAFT));
    assert_eq!(
        std::fs::read_to_string(draft).unwrap(),
        format!("pdf:{}", DRAFT)
    );
}

#[cfg(unix)]
#[test]
fn dry_run_text_output_leaves_mirror_empty() {
    let fixture = Fixture::new();
    fixture.folder(NOTES, "Notes", "");

    let context = CliContext::with_config(shell_renderer_config());
    let output = context.execute(&cli_for(&fixture, &["--dry-run"])).unwrap();

    assert!(output.contains("would create"));
    assert!(snapshot(fixture.root()).is_empty());
}
