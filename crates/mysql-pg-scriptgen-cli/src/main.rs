//! mysql-pg-scriptgen CLI - MySQL to PostgreSQL migration script generator.

use clap::Parser;
use mysql_pg_scriptgen::{manifest, Config, GenError, Generator};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, Level};
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Parser)]
#[command(name = "mysql-pg-scriptgen")]
#[command(about = "Generates MySQL to PostgreSQL data-migration scripts")]
#[command(version)]
struct Cli {
    /// Path to the CSV manifest of migration jobs
    #[arg(short, long, default_value = "migrationlist.csv")]
    manifest: PathBuf,

    /// Directory the generated scripts are written to
    #[arg(long, default_value = "./src/migrations")]
    out_dir: PathBuf,

    /// Output JSON result to stdout
    #[arg(long)]
    output_json: bool,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info")]
    verbosity: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run() -> Result<(), GenError> {
    let cli = Cli::parse();

    // Pick up MYSQL_* / PG_* variables from a local .env if present,
    // the same file the emitted scripts read
    dotenvy::dotenv().ok();

    setup_logging(&cli.verbosity, &cli.log_format).map_err(GenError::Config)?;

    let mut config = Config::from_env()?;
    config.gen.manifest_path = cli.manifest;
    config.gen.out_dir = cli.out_dir;

    // Read the manifest before opening any connection; a malformed
    // manifest aborts without touching either database
    let entries = manifest::read_manifest(&config.gen.manifest_path)?;
    info!(
        "Loaded {} manifest entries from {:?}",
        entries.len(),
        config.gen.manifest_path
    );

    let generator = Generator::new(config).await?;
    let result = generator.run(&entries).await?;
    generator.close().await;

    if cli.output_json {
        println!("{}", result.to_json()?);
    } else {
        println!("\nGeneration completed!");
        println!(
            "  Scripts: {}/{}",
            result.scripts_written, result.scripts_total
        );
        println!("  Duration: {:.2}s", result.duration_seconds);
        if !result.failed_scripts.is_empty() {
            println!("  Failed scripts: {:?}", result.failed_scripts);
        }
    }

    Ok(())
}

fn setup_logging(verbosity: &str, format: &str) -> Result<(), String> {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    Ok(())
}
