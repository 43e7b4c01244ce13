use clap::Parser;
use std::io;
use std::path::Path;
use tabsum::output::ErrorResponse;
use tabsum::source::{FileSource, InlineSource, ReaderSource, TextSource};
use tabsum::{Config, Delimiter, TableSummarizer};
use tracing::debug;

/// tabsum - Parse CSV/TSV text and sum a column
#[derive(Parser, Debug)]
#[command(name = "tabsum")]
#[command(about = "Parse CSV/TSV text into a table and sum a numeric column")]
#[command(
    version,
    after_help = "Tool will print the header, column kinds, the column sum and a preview of the records in JSON format.\nWithout --filename or --text the table is read from stdin."
)]
struct Args {
    /// Path to CSV/TSV file
    #[arg(short = 'f', long = "filename", conflicts_with = "text")]
    filename: Option<String>,

    /// Table text given inline
    #[arg(short = 't', long = "text")]
    text: Option<String>,

    /// Field delimiter: comma or tab (detected from the first line by default)
    #[arg(short = 'd', long = "delimiter")]
    delimiter: Option<Delimiter>,

    /// Column to sum (default: last column)
    #[arg(short = 'c', long = "column")]
    column: Option<String>,

    /// Path to config file (default: ./tabsum.conf if present)
    #[arg(long = "config")]
    config_file: Option<String>,

    /// Number of records to return (default: 10)
    #[arg(long = "preview-rows")]
    preview_rows: Option<usize>,

    /// Log debug output to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            let response =
                ErrorResponse::new(e.error_type()).with_internal_message(e.to_string());
            eprintln!("{}", response.to_json());
            std::process::exit(1);
        }
    };
    debug!("Effective configuration: {:?}", config);

    let mut source: Box<dyn TextSource> = match (&args.filename, &args.text) {
        (Some(filename), _) => Box::new(FileSource::new(filename)),
        (None, Some(text)) => Box::new(InlineSource::new(text.clone())),
        (None, None) => Box::new(ReaderSource::new("stdin", io::stdin().lock())),
    };

    let summarizer = TableSummarizer::new(config);
    println!("{}", summarizer.run(source.as_mut()));
}

/// Set up logging to stderr, honouring RUST_LOG when set
fn setup_logging(verbose: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tabsum={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}

fn build_config(args: &Args) -> tabsum::Result<Config> {
    // Priority: CLI args > environment variables > config file > defaults
    let mut config = match &args.config_file {
        Some(path) if Path::new(path).exists() => Config::from_file(path)?,
        Some(path) => {
            return Err(tabsum::TabsumError::Config(format!(
                "Config file not found: {}",
                path
            )))
        }
        None => {
            let default_config = "tabsum.conf";
            if Path::new(default_config).exists() {
                Config::from_file(default_config)?
            } else {
                Config::default()
            }
        }
    };

    config = config.merge_env()?;

    if let Some(delimiter) = args.delimiter {
        config.delimiter = Some(delimiter);
    }
    if let Some(ref column) = args.column {
        config.column = Some(column.clone());
    }
    if let Some(preview_rows) = args.preview_rows {
        config.preview_rows = preview_rows;
    }

    Ok(config)
}
