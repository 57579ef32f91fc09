pub mod args;
mod setup;

pub use args::{AppArgs, AppCommand};

use anyhow::{Context, Result};
use chrono::Utc;
use repo_utils::helpers::{self, format_date_in, generate_id, parse_timestamp, require_locale};
use repo_utils::logging::{log, log_levels, Level};
use repo_utils::report;
use std::path::Path;
use tracing::debug;

pub fn launch() -> Result<()> {
    launch_with_args(AppArgs::from_cli())
}

pub fn launch_with_args(args: AppArgs) -> Result<()> {
    setup::configure_logging(args.verbose);
    debug!("running {:?}", args.command);

    match args.command {
        AppCommand::Date { at, locale } => {
            let locale = match locale {
                Some(name) => require_locale(&name)?,
                None => helpers::detect_locale(),
            };
            let date = match at {
                Some(ts) => parse_timestamp(&ts)?,
                None => Utc::now().fixed_offset(),
            };
            println!("{}", format_date_in(&date, locale));
        }
        AppCommand::Id { count } => {
            for _ in 0..count {
                println!("{}", generate_id());
            }
        }
        AppCommand::Log {
            level,
            message,
            strict,
        } => {
            if strict {
                level.parse::<Level>()?;
            }
            log(&level, message.join(" "));
        }
        AppCommand::Levels { json } => {
            println!("{}", render_levels(json)?);
        }
        AppCommand::Report { root, out } => {
            let out = out.unwrap_or_else(|| setup::default_report_path(&root, "weekly.md"));
            let content = report::build_report(&root, Utc::now())?;
            save_report(&out, &content)?;
        }
        AppCommand::Health { stats, out } => {
            let out =
                out.unwrap_or_else(|| setup::default_report_path(Path::new("."), "health.md"));
            let stats = report::RepoStats::load(&stats)?;
            let content = report::render_health_report(Utc::now(), &stats);
            save_report(&out, &content)?;
            println!(
                "Repository: {}",
                stats.full_name.as_deref().unwrap_or("Unknown")
            );
        }
    }

    Ok(())
}

fn render_levels(json: bool) -> Result<String> {
    let levels = log_levels();
    if json {
        return Ok(serde_json::to_string_pretty(&levels)?);
    }
    Ok(levels
        .into_iter()
        .map(|(name, label)| format!("{name} = {label}"))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn save_report(out: &Path, content: &str) -> Result<()> {
    let written = report::write_report(out, content)
        .with_context(|| format!("saving report to {}", out.display()))?;
    println!(
        "{} {}",
        if written { "Updated" } else { "Unchanged" },
        out.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use repo_utils::logging::ParseLevelError;
    use std::collections::BTreeMap;
    use std::fs;

    fn run(argv: &[&str]) -> Result<()> {
        let mut full = vec!["repo-utils"];
        full.extend_from_slice(argv);
        launch_with_args(AppArgs::try_parse_from(full)?)
    }

    #[test]
    fn strict_log_rejects_unknown_level_after_message() {
        let err = run(&["log", "TRACE", "hello", "--strict"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ParseLevelError>(),
            Some(&ParseLevelError("TRACE".to_string()))
        );

        run(&["log", "--strict", "info", "hello"]).unwrap();
        run(&["log", "TRACE", "still", "printed"]).unwrap();
    }

    #[test]
    fn levels_json_maps_names_to_themselves() {
        let parsed: BTreeMap<String, String> =
            serde_json::from_str(&render_levels(true).unwrap()).unwrap();
        assert_eq!(parsed.len(), 4);
        for name in ["ERROR", "WARN", "INFO", "DEBUG"] {
            assert_eq!(parsed.get(name).map(String::as_str), Some(name));
        }

        let plain = render_levels(false).unwrap();
        assert_eq!(plain.lines().count(), 4);
        assert!(plain.contains("WARN = WARN"));
        run(&["levels", "--json"]).unwrap();
    }

    #[test]
    fn date_rejects_bad_input() {
        run(&["date", "--at", "2026-10-17T08:30:00Z", "--locale", "de_DE"]).unwrap();
        assert!(run(&["date", "--at", "soon"]).is_err());
        assert!(run(&["date", "--locale", "xx_NOPE"]).is_err());
    }

    #[test]
    fn health_writes_report_from_stats_file() {
        let dir = tempfile::tempdir().unwrap();
        let stats = dir.path().join("repo.json");
        let out = dir.path().join("out").join("health.md");
        fs::write(&stats, r#"{"full_name":"acme/tool","open_issues":6}"#).unwrap();

        run(&[
            "health",
            "--stats",
            stats.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
        ])
        .unwrap();

        let content = fs::read_to_string(&out).unwrap();
        assert!(content.contains("| 🔄 Pull Requests | 1 (estimated) |"));
        assert!(content.contains("**87/100**"));
        let missing = dir.path().join("missing.json");
        assert!(run(&["health", "--stats", missing.to_str().unwrap()]).is_err());
    }

    #[test]
    fn report_writes_weekly_markdown() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("lib.rs"), "").unwrap();
        let out = dir.path().join("weekly.md");

        run(&[
            "report",
            "--root",
            dir.path().to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
        ])
        .unwrap();
        assert!(fs::read_to_string(&out).unwrap().contains("| `.rs` | 1 |"));
    }
}
