use clap::{Parser, ValueEnum};
use crossterm::style::Stylize;
use std::path::PathBuf;
use std::process::ExitCode;
use vocab_index::persistence::{load_link_map, load_terms, save_index_binary, save_index_json, save_text};
use vocab_index::{build_locales, render, IndexBuild, IndexConfig, IndexError, Locale};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// HTML fragment (letter navigation and list)
    Html,
    /// Index structure as JSON
    Json,
    /// Binary index snapshot
    Binary,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
            OutputFormat::Binary => "bin",
        }
    }
}

/// Build locale-aware vocabulary indexes.
#[derive(Debug, Parser)]
#[command(name = "vocab-index", version)]
struct Cli {
    /// JSON array of vocabulary terms
    #[arg(long)]
    terms: PathBuf,
    /// JSON object mapping each term to its links
    #[arg(long)]
    links: PathBuf,
    /// Locale to build (repeatable); defaults to the configured locales
    #[arg(long = "locale")]
    locales: Vec<Locale>,
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,
    /// Exit with failure if any term was left out of an index
    #[arg(long)]
    deny_warnings: bool,
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(builds) => {
            print_summary(&builds);
            let warned = builds.iter().any(IndexBuild::has_warnings);
            if cli.deny_warnings && warned {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Vec<IndexBuild>, IndexError> {
    let config = match &cli.config {
        Some(path) => IndexConfig::load(path)?,
        None => IndexConfig::default(),
    };
    let locales = if cli.locales.is_empty() {
        config.locales()
    } else {
        cli.locales.clone()
    };

    let terms = load_terms(&cli.terms)?;
    let links = load_link_map(&cli.links)?;
    let builds = build_locales(&terms, &links, &locales, &config);

    for build in &builds {
        let locale = build.index.locale();
        let path = cli
            .out_dir
            .join(format!("{}.{}", locale.index_file_stem(), cli.format.extension()));
        match cli.format {
            OutputFormat::Html => save_text(&render::index_fragment(&build.index), &path)?,
            OutputFormat::Json => save_index_json(&build.index, &path)?,
            OutputFormat::Binary => save_index_binary(&build.index, &path)?,
        }
        tracing::info!(%locale, path = %path.display(), "wrote index");
    }
    Ok(builds)
}

fn print_summary(builds: &[IndexBuild]) {
    for build in builds {
        let index = &build.index;
        println!(
            "{} {}: {} terms under {} letters",
            "indexed".green().bold(),
            index.locale(),
            index.entry_count(),
            index.used_letters().len()
        );
        for diagnostic in &build.diagnostics {
            println!("  {} {}", "warning:".yellow().bold(), diagnostic);
        }
    }
}
