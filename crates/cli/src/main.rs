use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dissect::prelude::*;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod output;
mod provenance;
mod script_file;

#[derive(Parser)]
#[command(name = "dissect")]
#[command(about = "Replay chord scripts over a convex polygon and report the dissection")]
struct Cmd {
    /// Read vertex indices in scripts as 1-based
    #[arg(long, global = true)]
    one_based: bool,

    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Replay a script and write regions, dual tree and last query as JSON
    Run {
        #[arg(long)]
        input: PathBuf,
        /// CSV with `x,y` columns; overrides the script's inline polygon
        #[arg(long)]
        polygon: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Validate a script; report the first failing operation
    Check {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        polygon: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Run {
            input,
            polygon,
            out,
        } => run(&input, polygon.as_deref(), &out, cmd.one_based),
        Action::Check { input, polygon } => check(&input, polygon.as_deref(), cmd.one_based),
        Action::Report => report(),
    }
}

fn run(input: &Path, polygon: Option<&Path>, out: &Path, one_based: bool) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "run");
    let loaded = script_file::load(input, polygon, one_based)?;
    let replayed = replay(&loaded.polygon, &loaded.ops).context("replay failed")?;
    let outcome = replayed
        .resolve(&loaded.polygon)
        .context("resolving last query")?;
    tracing::info!(
        chords = replayed.chords.len(),
        regions = outcome.subdivision.regions().len(),
        query = outcome.query.is_some(),
        "dissected"
    );
    let report = output::Report::new(&loaded.polygon, &replayed.chords, &outcome);

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let mut payload = provenance::Payload::new(serde_json::json!({
        "one_based": loaded.base == IndexBase::One,
        "vertices": loaded.polygon.len(),
        "ops": loaded.ops.len(),
    }))
    .with_input(input);
    if let Some(csv) = polygon {
        payload = payload.with_input(csv);
    }
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn check(input: &Path, polygon: Option<&Path>, one_based: bool) -> Result<()> {
    let loaded = script_file::load(input, polygon, one_based)?;
    match replay(&loaded.polygon, &loaded.ops) {
        Ok(r) => {
            println!(
                "ok: {} ops, {} chords, last query {:?}",
                loaded.ops.len(),
                r.chords.len(),
                r.last_query
            );
            Ok(())
        }
        Err(e) => {
            let op = loaded.ops[e.position];
            Err(e).context(format!("script rejected at `{op}`"))
        }
    }
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "engine_version": dissect::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_script(dir: &Path, body: serde_json::Value) -> PathBuf {
        let path = dir.join("script.json");
        fs::write(&path, serde_json::to_vec(&body).unwrap()).unwrap();
        path
    }

    #[test]
    fn run_writes_report_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = write_script(
            dir.path(),
            serde_json::json!({
                "polygon": [[0, 0], [4, 0], [4, 4], [0, 4]],
                "ops": ["+ 0 2", "? 1 3"]
            }),
        );
        let out = dir.path().join("out/result.json");
        run(&input, None, &out, false).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["regions"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["edges"][0]["chord"], serde_json::json!([2, 0]));
        assert_eq!(parsed["query"]["path"], serde_json::json!([0, 1]));
        assert_eq!(parsed["query"]["kept_area"], 16.0);
        assert!(dir.path().join("out/result.provenance.json").exists());
    }

    #[test]
    fn run_reads_polygon_csv_and_one_based_ops() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("poly.csv");
        fs::write(&csv, "x,y\n0,0\n4,0\n4,4\n0,4\n").unwrap();
        let input = write_script(dir.path(), serde_json::json!({ "ops": ["+ 2 4"] }));
        let out = dir.path().join("result.json");
        run(&input, Some(&csv), &out, true).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["chords"], serde_json::json!([[1, 3]]));
        assert!(parsed["query"].is_null());
    }

    #[test]
    fn check_reports_failing_operation() {
        let dir = tempdir().unwrap();
        let input = write_script(
            dir.path(),
            serde_json::json!({
                "polygon": [[0, 0], [4, 0], [4, 4], [0, 4]],
                "ops": ["+ 0 2", "+ 1 3"]
            }),
        );
        let err = check(&input, None, false).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("+ 1 3"), "{msg}");
        assert!(msg.contains("operation 1"), "{msg}");
        assert!(msg.contains("crosses existing chord (0, 2)"), "{msg}");
    }
}
