use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hull2::geom2::{polylabel, LabelCfg};
use hull2::io::write_simple_format;
use hull2::Hull2;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod source;

use provenance::Payload;
use source::SourceArgs;

#[derive(Parser)]
#[command(name = "hull2")]
#[command(about = "Convex hulls of planar point sets")]
struct Cmd {
    /// Optional run tag; propagated to logs and provenance
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull and write it as SimpleFormat CSV
    Hull {
        #[command(flatten)]
        src: SourceArgs,
        #[arg(long, default_value = "generated-polygon.csv")]
        out: PathBuf,
    },
    /// Print the label point (pole of inaccessibility) of the hull as JSON
    Label {
        #[command(flatten)]
        src: SourceArgs,
        #[arg(long, default_value_t = 1.0)]
        precision: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { src, out } => hull(&src, &out, cmd.tag).map(|_| ()),
        Action::Label { src, precision } => label(&src, precision, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn hull(src: &SourceArgs, out: &Path, tag: Option<String>) -> Result<Hull2> {
    let (source, points) = source::load_points(src)?;
    tracing::info!(source = %source, points = points.len(), tag = ?tag, "hull");
    let hull = Hull2::from_points(&points);
    if hull.is_degenerate() {
        tracing::warn!(vertices = hull.len(), "degenerate hull (fewer than 3 vertices)");
    }

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    write_simple_format(BufWriter::new(file), &hull.vertices)
        .with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(
        vertices = hull.len(),
        area = hull.area(),
        out = %out.display(),
        "hull_written"
    );

    let params = serde_json::json!({
        "source": source.to_string(),
        "input": src.input,
        "count": points.len(),
        "seed": src.seed,
        "hull_vertices": hull.len(),
    });
    let prov = provenance::write_sidecar(out, Payload::new(params, tag))?;
    tracing::debug!(path = %prov.display(), "provenance_written");
    Ok(hull)
}

#[derive(Debug, Serialize)]
struct LabelReport {
    x: f64,
    y: f64,
    distance: f64,
    cells: usize,
    hull_vertices: Vec<[f64; 2]>,
}

fn label_report(src: &SourceArgs, precision: f64) -> Result<LabelReport> {
    let (source, points) = source::load_points(src)?;
    let hull = Hull2::from_points(&points);
    let cfg = LabelCfg {
        precision,
        ..LabelCfg::default()
    };
    let label = polylabel(&hull.vertices, cfg).context("no points to label")?;
    tracing::info!(
        source = %source,
        points = points.len(),
        vertices = hull.len(),
        cells = label.cells,
        "label"
    );
    Ok(LabelReport {
        x: label.point.x,
        y: label.point.y,
        distance: label.distance,
        cells: label.cells,
        hull_vertices: hull.vertices.iter().map(|p| [p.x, p.y]).collect(),
    })
}

fn label(src: &SourceArgs, precision: f64, tag: Option<String>) -> Result<()> {
    tracing::debug!(precision, tag = ?tag, "label_args");
    let report = label_report(src, precision)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = provenance::document(&Payload::new(serde_json::json!({}), tag), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn random_src(count: usize) -> SourceArgs {
        SourceArgs {
            source: Some(source::PointSource::Random),
            input: None,
            count,
            radius: 5.0,
            seed: 11,
        }
    }

    #[test]
    fn hull_writes_csv_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("poly.csv");
        let h = hull(&random_src(40), &out, Some("t".into())).unwrap();
        assert!(h.len() >= 3);
        let text = std::fs::read_to_string(&out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("SimpleFormat"));
        assert_eq!(lines.next(), Some("x,y"));
        let rows: Vec<&str> = lines.collect();
        assert_eq!(rows.len(), h.len());
        assert!(rows.iter().all(|r| r.ends_with(", 0")));
        assert!(dir.path().join("nested").join("poly.provenance.json").exists());
    }

    #[test]
    fn hull_from_csv_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("square.csv");
        std::fs::write(&input, "x,y\n0,0\n4,0\n4,4\n0,4\n2,2\n").unwrap();
        let src = SourceArgs {
            source: Some(source::PointSource::File),
            input: Some(input),
            ..random_src(0)
        };
        let out = dir.path().join("square-hull.csv");
        let h = hull(&src, &out, None).unwrap();
        assert_eq!(h.len(), 4);
        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(text, "SimpleFormat\nx,y\n0,0, 0\n0,4, 0\n4,4, 0\n4,0, 0\n");
    }

    #[test]
    fn source_flag_accepts_only_known_sources() {
        let cmd = Cmd::try_parse_from(["hull2", "hull", "--source", "random", "--count", "5"]).unwrap();
        match cmd.action {
            Action::Hull { src, .. } => {
                assert_eq!(src.source, Some(source::PointSource::Random));
                assert_eq!(src.count, 5);
            }
            _ => panic!("expected hull subcommand"),
        }
        let cmd = Cmd::try_parse_from(["hull2", "label"]).unwrap();
        assert!(matches!(cmd.action, Action::Label { src, .. } if src.source.is_none()));
        let err = Cmd::try_parse_from(["hull2", "hull", "--source", "keyboard"])
            .err()
            .expect("unknown source must be rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn label_report_lies_inside_hull() {
        let r = label_report(&random_src(60), 0.01).unwrap();
        let vertices: Vec<hull2::Point2> = r
            .hull_vertices
            .iter()
            .map(|p| hull2::Point2::new(p[0], p[1]))
            .collect();
        // The reported vertices already form a hull.
        let hull = Hull2::from_points(&vertices);
        assert_eq!(hull.vertices, vertices);
        assert!(r.distance > 0.0);
        assert!(hull.contains(hull2::Point2::new(r.x, r.y)));
        assert!(label_report(&random_src(0), 1.0).is_err());
    }
}
