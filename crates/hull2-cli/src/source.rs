//! Point acquisition for the CLI: console, CSV file, or seeded random cloud.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, ValueEnum};
use hull2::geom2::rand::{draw_point_cloud, CloudCfg, CloudShape, PointCount, ReplayToken};
use hull2::io::read_points;
use hull2::Point2;
use polars::prelude::*;
use std::fmt;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Args, Clone, Debug)]
pub struct SourceArgs {
    /// Point source (asked on stdin if omitted)
    #[arg(long, value_enum)]
    pub source: Option<PointSource>,
    /// CSV with `x` and `y` header columns (file source)
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Number of points (random source)
    #[arg(long, default_value_t = 32)]
    pub count: usize,
    /// Disk radius (random source)
    #[arg(long, default_value_t = 1.0)]
    pub radius: f64,
    /// Replay seed (random source)
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PointSource {
    File,
    Console,
    Random,
}

// Used for the interactive prompt; clap parses `--source` through `ValueEnum`.
impl FromStr for PointSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "file" => Ok(PointSource::File),
            "console" => Ok(PointSource::Console),
            "random" => Ok(PointSource::Random),
            other => Err(anyhow!(
                "unknown point source {other:?} (expected file, console or random)"
            )),
        }
    }
}

impl fmt::Display for PointSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PointSource::File => "file",
            PointSource::Console => "console",
            PointSource::Random => "random",
        })
    }
}

/// Resolve the source (asking on stdin if needed) and load its points.
pub fn load_points(args: &SourceArgs) -> Result<(PointSource, Vec<Point2>)> {
    let source = match args.source {
        Some(s) => s,
        None => ask_source()?,
    };
    let points = match source {
        PointSource::File => {
            let path = args
                .input
                .as_deref()
                .context("the file source needs --input <CSV>")?;
            read_csv_points(path)?
        }
        PointSource::Console => {
            eprintln!("Number of points, then one `x y` pair per point:");
            read_points(std::io::stdin().lock()).context("reading points from stdin")?
        }
        PointSource::Random => random_points(args)?,
    };
    tracing::debug!(source = %source, points = points.len(), "points loaded");
    Ok((source, points))
}

fn ask_source() -> Result<PointSource> {
    eprint!("Read points from a file or the console? (file, console) ");
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading point source from stdin")?;
    line.parse()
}

/// Read the `x` and `y` columns of a CSV file (other columns are ignored).
pub fn read_csv_points(path: &Path) -> Result<Vec<Point2>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point2::new(x, y)),
            _ => bail!("{}: row {row} is missing a coordinate", path.display()),
        })
        .collect()
}

fn random_points(args: &SourceArgs) -> Result<Vec<Point2>> {
    if !(args.radius.is_finite() && args.radius > 0.0) {
        bail!("--radius must be a positive number, got {}", args.radius);
    }
    let cfg = CloudCfg {
        count: PointCount::Fixed(args.count),
        shape: CloudShape::Disk {
            radius: args.radius,
        },
        ..CloudCfg::default()
    };
    Ok(draw_point_cloud(
        cfg,
        ReplayToken {
            seed: args.seed,
            index: 0,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn random_args(count: usize, seed: u64) -> SourceArgs {
        SourceArgs {
            source: Some(PointSource::Random),
            input: None,
            count,
            radius: 1.0,
            seed,
        }
    }

    #[test]
    fn parses_source_names() {
        assert_eq!("file".parse::<PointSource>().unwrap(), PointSource::File);
        assert_eq!(
            "console\n".parse::<PointSource>().unwrap(),
            PointSource::Console
        );
        assert_eq!("random".parse::<PointSource>().unwrap(), PointSource::Random);
        let err = "stdin".parse::<PointSource>().unwrap_err();
        assert!(err.to_string().contains("unknown point source"));
    }

    #[test]
    fn csv_source_reads_xy_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "x,y,label\n0,0,a\n4,0.5,b\n-1.5,2,c\n").unwrap();
        let pts = read_csv_points(&path).unwrap();
        assert_eq!(
            pts,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(4.0, 0.5),
                Point2::new(-1.5, 2.0)
            ]
        );
    }

    #[test]
    fn csv_source_rejects_missing_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("holes.csv");
        fs::write(&path, "x,y\n0,0\n1,\n").unwrap();
        assert!(read_csv_points(&path).is_err());
    }

    #[test]
    fn file_source_requires_input() {
        let args = SourceArgs {
            source: Some(PointSource::File),
            ..random_args(3, 0)
        };
        let err = load_points(&args).unwrap_err();
        assert!(err.to_string().contains("--input"));
    }

    #[test]
    fn random_source_is_reproducible() {
        let (src, a) = load_points(&random_args(25, 9)).unwrap();
        let (_, b) = load_points(&random_args(25, 9)).unwrap();
        assert_eq!(src, PointSource::Random);
        assert_eq!(a.len(), 25);
        assert_eq!(a, b);
        let bad = SourceArgs {
            radius: 0.0,
            ..random_args(3, 0)
        };
        assert!(load_points(&bad).is_err());
    }
}
