//! sift - recover tables and store metrics from spreadsheets

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use sheetsift::prelude::*;
use sheetsift::{build_grid, render_csv, ImporterOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sift")]
#[command(
    author,
    version,
    about = "Spreadsheet table inference and import tool"
)]
struct Cli {
    /// JSON file overriding inference settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the table of each sheet
    Extract {
        /// Input spreadsheet file (xlsx, xlsm, xlsb, xls, ods, csv)
        input: PathBuf,

        /// Only this sheet (0-based)
        #[arg(short, long)]
        sheet: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Aggregate actual/target metrics per store
    Metrics {
        /// Input spreadsheet file
        input: PathBuf,

        /// Sheet index (0-based, default: primary sheet)
        #[arg(short, long, default_value = "0")]
        sheet: usize,

        /// Keep stores whose name contains this text
        #[arg(short, long, default_value = "")]
        filter: String,

        /// Sort order: name|sum|avg followed by -asc or -desc
        #[arg(long, default_value = "name-asc")]
        sort: GallerySort,

        /// Print charts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show statistics of the numeric columns of a sheet
    Stats {
        /// Input spreadsheet file
        input: PathBuf,

        /// Sheet index (0-based, default: 0)
        #[arg(short, long, default_value = "0")]
        sheet: usize,

        /// Only this column, by letter (A, B, ..., AA)
        #[arg(short, long)]
        column: Option<String>,
    },

    /// Import a file, or every spreadsheet in a folder, into a row store
    Import {
        /// File or folder
        path: PathBuf,

        /// Row store file
        #[arg(long, default_value = sheetsift::DEFAULT_STORE_FILE)]
        store: PathBuf,

        /// Do not write CSV copies next to the sources
        #[arg(long)]
        no_export: bool,
    },

    /// Show the content of a row store
    Store {
        /// Row store file
        #[arg(long, default_value = sheetsift::DEFAULT_STORE_FILE)]
        store: PathBuf,

        /// Rows to print
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Rows to skip
        #[arg(short, long, default_value = "0")]
        offset: usize,
    },

    /// Convert a sheet to CSV and output to stdout or file
    #[command(alias = "csv")]
    ToCsv {
        /// Input spreadsheet file
        input: PathBuf,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Sheet index to convert (0-based, default: 0)
        #[arg(short, long, default_value = "0")]
        sheet: usize,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },

    /// List all sheets in a workbook
    Sheets {
        /// Input spreadsheet file
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Extract { input, sheet, json } => extract(&input, sheet, json, &config).await,
        Commands::Metrics {
            input,
            sheet,
            filter,
            sort,
            json,
        } => metrics(&input, sheet, &filter, sort, json, &config).await,
        Commands::Stats {
            input,
            sheet,
            column,
        } => stats(&input, sheet, column.as_deref(), &config).await,
        Commands::Import {
            path,
            store,
            no_export,
        } => import(&path, &store, !no_export, config).await,
        Commands::Store {
            store,
            limit,
            offset,
        } => show_store(&store, limit, offset),
        Commands::ToCsv {
            input,
            output,
            sheet,
            delimiter,
        } => to_csv(&input, output.as_deref(), sheet, delimiter).await,
        Commands::Sheets { input } => list_sheets(&input).await,
    }
}

fn load_config(path: Option<&Path>) -> Result<InferenceConfig> {
    let Some(path) = path else {
        return Ok(InferenceConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid config '{}'", path.display()))
}

async fn open(input: &Path) -> Result<Workbook> {
    read_workbook(input)
        .await
        .with_context(|| format!("Failed to open '{}'", input.display()))
}

fn sheet_at(workbook: &Workbook, index: usize) -> Result<&RawSheet> {
    workbook
        .sheets()
        .get(index)
        .with_context(|| format!("Sheet index {} not found", index))
}

async fn extract(
    input: &Path,
    sheet: Option<usize>,
    json: bool,
    config: &InferenceConfig,
) -> Result<()> {
    let workbook = open(input).await?;
    let results = match sheet {
        Some(index) => vec![extract_sheet(sheet_at(&workbook, index)?, config)],
        None => extract_workbook(&workbook, config),
    };

    if json {
        let text = serde_json::to_string_pretty(&results).context("Failed to serialize")?;
        println!("{text}");
        return Ok(());
    }

    for result in &results {
        println!("Sheet \"{}\"", result.name);
        if result.empty {
            println!("  (empty)");
            continue;
        }
        println!(
            "  {} rows, header at row {}",
            result.row_count,
            result.header_row + 1
        );
        for column in &result.columns {
            println!("  {}\t{}", column.name, column.column_type);
        }
    }
    Ok(())
}

async fn metrics(
    input: &Path,
    sheet: usize,
    filter: &str,
    sort: GallerySort,
    json: bool,
    config: &InferenceConfig,
) -> Result<()> {
    let workbook = open(input).await?;
    let result = extract_sheet(sheet_at(&workbook, sheet)?, config);

    let blocks = match aggregate_metrics(&result, config) {
        Ok(blocks) => blocks,
        Err(MetricError::ColumnsNotFound { headers }) => {
            eprintln!("Available columns: {}", headers.join(", "));
            bail!("No actual/target columns found in sheet \"{}\"", result.name);
        }
        Err(e) => bail!("Sheet \"{}\": {e}", result.name),
    };

    let gallery = Gallery::new(StoreChart::from_blocks(&blocks));
    let view = gallery.view(filter, sort);

    if json {
        let text = serde_json::to_string_pretty(&view).context("Failed to serialize")?;
        println!("{text}");
        return Ok(());
    }

    for chart in &view {
        println!(
            "{}\t{}\t{}\t{}",
            chart.label,
            chart.actual,
            chart.target,
            chart.percent_label()
        );
    }
    eprintln!("{} of {} stores", view.len(), gallery.len());
    Ok(())
}

async fn stats(
    input: &Path,
    sheet: usize,
    column: Option<&str>,
    config: &InferenceConfig,
) -> Result<()> {
    let workbook = open(input).await?;
    let result = extract_sheet(sheet_at(&workbook, sheet)?, config);
    let wanted = column
        .map(|name| sheetsift::column_index(name).with_context(|| format!("Bad column '{name}'")))
        .transpose()?;

    let columns = numeric_columns(&result, config);
    if columns.is_empty() {
        eprintln!("Warning: no numeric columns found");
    }
    for col in columns
        .iter()
        .filter(|c| wanted.map_or(true, |w| w == c.index))
    {
        let s = &col.stats;
        println!(
            "{}\t{}\tsum={}\tavg={:.2}\tmin={}\tmax={}\tcount={}",
            sheetsift::column_name(col.index),
            col.header,
            s.sum,
            s.avg,
            s.min,
            s.max,
            s.count
        );
    }
    Ok(())
}

async fn import(path: &Path, store: &Path, export: bool, config: InferenceConfig) -> Result<()> {
    let options = ImporterOptions {
        export_csv: export,
        ..Default::default()
    };
    let mut importer = Importer::with_options(RowStore::open(store), config, options);

    if path.is_dir() {
        let report = importer
            .process_folder(path)
            .await
            .with_context(|| format!("Failed to scan '{}'", path.display()))?;
        for (file, outcome) in &report.imported {
            eprintln!("{}: {}", file.display(), outcome.message());
        }
        for (file, error) in &report.failed {
            eprintln!("{}: {error}", file.display());
        }
        if !report.failed.is_empty() {
            bail!("{} files failed", report.failed.len());
        }
    } else {
        let outcome = importer
            .process_file(path)
            .await
            .with_context(|| format!("Failed to import '{}'", path.display()))?;
        if let ImportOutcome::Imported(summary) = &outcome {
            for exported in &summary.exported {
                eprintln!("Wrote '{}'", exported.display());
            }
        }
        eprintln!("{}", outcome.message());
    }
    Ok(())
}

fn show_store(store: &Path, limit: usize, offset: usize) -> Result<()> {
    let store = RowStore::open(store);
    let stats = store.global_stats();

    println!("Files: {}", stats.total_files);
    println!("Rows: {}", stats.total_rows);
    if let Some(last) = stats.last_import {
        println!("Last import: {}", last.format("%Y-%m-%d %H:%M:%S"));
    }
    let columns: Vec<String> = store.columns().into_iter().map(|c| c.column_name).collect();
    println!("Columns: {}", columns.join(", "));

    let mut stdout = io::stdout().lock();
    for row in store.rows(limit, offset) {
        let data = serde_json::to_string(&row.row_data).context("Failed to serialize")?;
        writeln!(stdout, "{}\t{}\t{}", row.filename, row.row_index, data)
            .context("Failed to write to stdout")?;
    }
    Ok(())
}

async fn to_csv(input: &Path, output: Option<&Path>, sheet: usize, delimiter: char) -> Result<()> {
    if !delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character");
    }
    let workbook = open(input).await?;
    let raw = sheet_at(&workbook, sheet)?;
    if raw.is_empty() {
        eprintln!("Warning: Sheet appears to be empty");
        return Ok(());
    }

    let grid = build_grid(raw);
    let options = CsvWriteOptions {
        delimiter: delimiter as u8,
        ..Default::default()
    };
    let bytes = render_csv(&grid, &options).context("Failed to render CSV")?;

    if let Some(output_path) = output {
        std::fs::write(output_path, &bytes)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!(
            "Wrote {} rows to '{}'",
            grid.row_count(),
            output_path.display()
        );
    } else {
        io::stdout()
            .write_all(&bytes)
            .context("Failed to write to stdout")?;
    }
    Ok(())
}

async fn list_sheets(input: &Path) -> Result<()> {
    let workbook = open(input).await?;
    for (i, sheet) in workbook.sheets().iter().enumerate() {
        println!("{}\t{}", i, sheet.name);
    }
    Ok(())
}
