use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info, warn};

use nomos_cases::{CaseTableBuilder, DateKey};
use nomos_geo::{BoundarySource, GeoJsonFile, DEFAULT_NAME_PROPERTY};
use nomos_map::{
    join_for_date, MapController, MapDocument, MapError, MapStyle, RenderSurface, SnapshotWriter,
};

#[derive(Parser)]
#[command(name = "nomos")]
#[command(about = "Prefecture-level COVID-19 choropleth snapshots for Greece")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    quiet: bool,
}

/// Input locations shared by the map-producing subcommands.
#[derive(Args, Debug, Clone)]
struct InputArgs {
    /// Path to the prefecture boundary GeoJSON file
    #[arg(long)]
    boundaries: PathBuf,

    /// Directory holding geographic_distribution_{YYYY_MM_DD}.csv files
    #[arg(long)]
    data_dir: PathBuf,

    /// Feature property carrying the canonical prefecture name
    #[arg(long, default_value = DEFAULT_NAME_PROPERTY)]
    name_property: String,
}

#[derive(Subcommand)]
enum Command {
    /// Write snapshot GeoJSON files plus the style scheme
    Export {
        #[command(flatten)]
        input: InputArgs,

        /// Date label (YYYY_MM_DD) to export; repeatable. All ingested dates when omitted
        #[arg(long)]
        date: Vec<String>,

        /// Output directory for snapshot files
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        /// Filename prefix for output files (must match [a-zA-Z0-9_-]+)
        #[arg(long, default_value = "greece")]
        prefix: String,
    },

    /// Drive the map through date selections read from stdin, one YYYY_MM_DD label per line
    Interactive {
        #[command(flatten)]
        input: InputArgs,

        /// Output directory for rendered snapshot files
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        /// Filename prefix for output files (must match [a-zA-Z0-9_-]+)
        #[arg(long, default_value = "greece")]
        prefix: String,
    },

    /// List the dates available in the data directory
    Dates {
        /// Directory holding geographic_distribution_{YYYY_MM_DD}.csv files
        #[arg(long)]
        data_dir: PathBuf,
    },
}

// --- JSON stdout output structs ---

#[derive(Serialize)]
struct ExportOutput {
    n_regions: usize,
    n_dates: usize,
    latest: String,
    style: String,
    snapshots: Vec<SnapshotOutput>,
}

#[derive(Serialize)]
struct SnapshotOutput {
    date: String,
    path: String,
}

#[derive(Serialize)]
struct DatesOutput {
    n_dates: usize,
    latest: String,
    dates: Vec<String>,
}

#[derive(Serialize)]
struct SessionOutput {
    dates: Vec<String>,
    latest: String,
    written: Option<String>,
}

#[derive(Serialize)]
struct SelectionOutput {
    selected: String,
    written: Option<String>,
}

#[derive(Serialize)]
struct RejectionOutput {
    error: String,
}

/// Renders snapshots by writing them into the output directory.
struct FileSurface {
    writer: SnapshotWriter,
    last_path: Option<PathBuf>,
}

impl FileSurface {
    fn new(writer: SnapshotWriter) -> Self {
        Self {
            writer,
            last_path: None,
        }
    }

    fn last_path(&self) -> Option<String> {
        self.last_path.as_ref().map(|p| p.display().to_string())
    }
}

impl RenderSurface for FileSurface {
    fn render(&mut self, title: &str, document: &MapDocument) {
        match self.writer.write_snapshot(document) {
            Ok(path) => {
                info!(title, path = %path.display(), "snapshot rendered");
                self.last_path = Some(path);
            }
            Err(e) => {
                error!(error = %e, "failed to write rendered snapshot");
                self.last_path = None;
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Export {
            input,
            date,
            output_dir,
            prefix,
        } => {
            // 1. Load boundaries and ingest the dated case tables.
            let boundaries = GeoJsonFile::new(&input.boundaries)
                .with_name_property(input.name_property)
                .load()
                .context("failed to load boundary file")?;
            let cases = CaseTableBuilder::new()
                .build_from_dir(&input.data_dir)
                .context("failed to ingest case tables")?;

            // 2. Resolve the dates to export.
            let dates: Vec<DateKey> = if date.is_empty() {
                cases.dates()
            } else {
                date.iter()
                    .map(|label| DateKey::parse(label))
                    .collect::<Result<_, _>>()
                    .context("bad --date value")?
            };

            // 3. Write the style scheme and one snapshot per date.
            let writer = SnapshotWriter::new(&output_dir, prefix)?;
            let style_path = writer.write_style(&MapStyle::ylgnbu())?;

            let mut snapshots = Vec::with_capacity(dates.len());
            for date in dates {
                let snapshot = join_for_date(&boundaries, &cases, date)?;
                let document = MapDocument::from_snapshot(&snapshot);
                let path = writer.write_snapshot(&document)?;
                snapshots.push(SnapshotOutput {
                    date: date.to_string(),
                    path: path.display().to_string(),
                });
            }
            info!(n_snapshots = snapshots.len(), "export complete");

            // 4. Print the stdout summary.
            let output = ExportOutput {
                n_regions: boundaries.len(),
                n_dates: cases.n_dates(),
                latest: cases.latest().to_string(),
                style: style_path.display().to_string(),
                snapshots,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Command::Interactive {
            input,
            output_dir,
            prefix,
        } => {
            // 1. Load boundaries and ingest the dated case tables.
            let boundaries = GeoJsonFile::new(&input.boundaries)
                .with_name_property(input.name_property)
                .load()
                .context("failed to load boundary file")?;
            let cases = CaseTableBuilder::new()
                .build_from_dir(&input.data_dir)
                .context("failed to ingest case tables")?;

            // 2. Set up the file-backed surface; construction renders the latest date.
            let writer = SnapshotWriter::new(&output_dir, prefix)?;
            writer.write_style(&MapStyle::ylgnbu())?;
            let mut controller = MapController::new(&boundaries, &cases, FileSurface::new(writer))?;

            let session = SessionOutput {
                dates: controller.dates().iter().map(DateKey::to_string).collect(),
                latest: controller.current().to_string(),
                written: controller.surface().last_path(),
            };
            println!("{}", serde_json::to_string(&session)?);

            // 3. Apply selections until stdin closes. Rejected selections leave the
            //    rendered snapshot unchanged, so the loop reports them and carries on.
            for line in std::io::stdin().lock().lines() {
                let line = line.context("failed to read stdin")?;
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "quit" || line == "exit" {
                    break;
                }

                let event = match DateKey::parse(line) {
                    Ok(date) => match controller.select(date) {
                        Ok(()) => serde_json::to_string(&SelectionOutput {
                            selected: date.to_string(),
                            written: controller.surface().last_path(),
                        })?,
                        Err(e @ MapError::UnknownDate { .. }) => {
                            serde_json::to_string(&RejectionOutput {
                                error: e.to_string(),
                            })?
                        }
                        Err(e) => return Err(e.into()),
                    },
                    Err(e) => {
                        warn!(input = line, "unparseable date selection");
                        serde_json::to_string(&RejectionOutput {
                            error: e.to_string(),
                        })?
                    }
                };
                println!("{event}");
            }
            info!(displayed = %controller.current(), "session ended");
        }

        Command::Dates { data_dir } => {
            let cases = CaseTableBuilder::new()
                .build_from_dir(&data_dir)
                .context("failed to ingest case tables")?;

            let output = DatesOutput {
                n_dates: cases.n_dates(),
                latest: cases.latest().to_string(),
                dates: cases.dates().iter().map(DateKey::to_string).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
