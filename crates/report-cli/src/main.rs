use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use report_core::{
    FALLBACK_CATEGORY, ImageData, ReportSettings, ReportStore, STANDARD_CATEGORIES,
    SubtitleFormat, resolve_category,
};
use report_pdf::generate;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "reportgen", about = "Photo report builder CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a slide report from a CSV manifest
    Generate {
        /// Input CSV manifest (columns: category, description, image path)
        #[arg(short, long)]
        manifest: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Report title
        #[arg(long, default_value = "Field Inspection Report")]
        title: String,

        /// Subtitle text (overrides --date-format)
        #[arg(long)]
        subtitle: Option<String>,

        /// Derive the subtitle from today's date
        #[arg(long, default_value = "month-year", value_enum)]
        date_format: DateFormatArg,
    },

    /// Append every image as its own page with an empty description
    Batch {
        /// Image files, in page order
        #[arg(short, long, required = true, num_args = 1..)]
        images: Vec<PathBuf>,

        /// Category applied to every page
        #[arg(long, default_value = FALLBACK_CATEGORY)]
        category: String,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Report title
        #[arg(long, default_value = "Field Inspection Report")]
        title: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DateFormatArg {
    MonthYear,
    Date,
    DateTime,
}

impl From<DateFormatArg> for SubtitleFormat {
    fn from(arg: DateFormatArg) -> Self {
        match arg {
            DateFormatArg::MonthYear => Self::MonthYear,
            DateFormatArg::Date => Self::DateOnly,
            DateFormatArg::DateTime => Self::DateTime,
        }
    }
}

struct ManifestRow {
    category: String,
    description: String,
    image_path: PathBuf,
}

async fn load_manifest(path: &Path) -> Result<Vec<ManifestRow>> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;

    // CSV parsing is CPU-bound, spawn blocking
    let rows = tokio::task::spawn_blocking(move || {
        let mut reader = csv::Reader::from_reader(contents.as_bytes());
        let mut rows = Vec::new();

        for result in reader.records() {
            let record = result?;
            if record.len() >= 3 {
                rows.push(ManifestRow {
                    category: record[0].to_string(),
                    description: record[1].to_string(),
                    image_path: PathBuf::from(&record[2]),
                });
            }
        }
        Ok::<_, csv::Error>(rows)
    })
    .await??;

    Ok(rows)
}

async fn read_image(path: &Path) -> Result<ImageData> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read image {}", path.display()))?;
    Ok(ImageData::new(bytes))
}

async fn write_report(store: &ReportStore, settings: &ReportSettings, output: &Path) -> Result<()> {
    let report = generate(store, settings)?;
    tokio::fs::write(output, &report.bytes)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Generated {} pages → {}",
        store.len() + 1,
        output.display()
    );
    println!("Suggested filename: {}", report.suggested_filename);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            manifest,
            output,
            title,
            subtitle,
            date_format,
        } => {
            let rows = load_manifest(&manifest).await?;

            let mut store = ReportStore::new();
            for row in rows {
                let image = read_image(&row.image_path).await?;
                let category = resolve_category(&row.category, "", &STANDARD_CATEGORIES);
                store.append(category, row.description, image);
            }

            let subtitle = match subtitle {
                Some(text) => text,
                None => SubtitleFormat::from(date_format).resolve(chrono::Local::now()),
            };
            let settings = ReportSettings::new(title, subtitle);

            write_report(&store, &settings, &output).await?;
        }

        Commands::Batch {
            images,
            category,
            output,
            title,
        } => {
            let mut batch = Vec::with_capacity(images.len());
            for path in &images {
                batch.push(read_image(path).await?);
            }

            let mut store = ReportStore::new();
            store.append_batch(batch, &category);

            let subtitle = SubtitleFormat::MonthYear.resolve(chrono::Local::now());
            let settings = ReportSettings::new(title, subtitle);

            write_report(&store, &settings, &output).await?;
        }
    }

    Ok(())
}
