//! gatusgen - Generate Gatus monitoring endpoints from GitOps YAML manifests
//!
//! Scans a directory tree of Kubernetes manifests and Helm values for
//! fully-qualified domain names and writes a Gatus endpoints file covering
//! every unique host it finds.

use anyhow::{Context, Result};
use clap::Parser;
use gatusgen::endpoints::{self, EndpointsFile};
use gatusgen::scan::Scanner;
use std::path::{Path, PathBuf};

/// Generate Gatus monitoring endpoints from GitOps YAML manifests
#[derive(Parser, Debug)]
#[command(name = "gatusgen")]
#[command(about = "Generate Gatus monitoring endpoints from GitOps YAML manifests", long_about = None)]
struct Args {
    /// Directory tree to scan for YAML manifests
    #[arg(default_value = "system")]
    root: PathBuf,

    /// Output file for the generated endpoints
    #[arg(long, short = 'o', default_value = "gatus-endpoints.yml")]
    output: PathBuf,

    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,
}

/// Initialize logging based on debug flag.
/// Events go to stderr; RUST_LOG overrides the level either way.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let scanner = Scanner::new(args.root.clone());
    let outcome = scanner
        .run()
        .with_context(|| format!("Failed to scan {:?}", args.root))?;

    let file = EndpointsFile::from_discovered(&outcome.discovered);
    endpoints::write_endpoints_file(&file, &args.output)
        .with_context(|| format!("Failed to write {:?}", args.output))?;

    println!(
        "Generated {} with {} unique endpoint(s)",
        args.output.display(),
        outcome.discovered.len()
    );

    if !outcome.discovered.is_empty() {
        println!("\nEndpoints found:");
        for discovered in &outcome.discovered {
            let source = Path::new(&discovered.source_file)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| discovered.source_file.clone());
            println!(
                "  - {} (app: {}, source: {})",
                discovered.fqdn, discovered.app_name, source
            );
        }
    }

    Ok(())
}
