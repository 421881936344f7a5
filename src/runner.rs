use std::path::{Path, PathBuf};

use crate::cli::Cli;
use cert_hunter::discover::crtsh;
use cert_hunter::extract::{extract_subdomains, parse_records};
use cert_hunter::http_client::{create_client, DEFAULT_CLIENT};
use cert_hunter::output::write_subdomains;
use cert_hunter::progress;
use cert_hunter::utils::default_output_path;

fn print_ascii_logo() {
    println!(r#"
              ____ _____ ____ _____   _   _ _   _ _   _ _____ _____ ____
             / ___| ____|  _ \_   _| | | | | | | | \ | |_   _| ____|  _ \
            | |   |  _| | |_) || |   | |_| | | | |  \| | | | |  _| | |_) |
            | |___| |___|  _ < | |   |  _  | |_| | |\  | | | | |___|  _ <
             \____|_____|_| \_\|_|   |_| |_|\___/|_| \_| |_| |_____|_| \_\

                      Passive Subdomain Recon v0.1.0
    "#);
}

pub async fn run_from_cli(cli: Cli) -> anyhow::Result<()> {
    // Configure logging based on global flags.
    // Keep external crates (reqwest/hyper) at INFO to avoid flooding the CLI.
    use tracing_subscriber::EnvFilter;
    let crate_level = if cli.debug { "debug" } else if cli.verbose { "info" } else { "warn" };
    let filter_str = format!(
        "cert_hunter={level},reqwest=info,hyper=info,h2=info",
        level = crate_level
    );
    let env_filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(true)
        .with_target(false)
        .init();

    print_ascii_logo();

    // The domain check stays manual: clap exits 2 on a missing required
    // argument, and wrapper scripts expect the usage failure to exit 1.
    let domain = match cli.domain.as_deref() {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => {
            let prog = std::env::args()
                .next()
                .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
            println!("Use: {prog} -d <domain> [-o <output file path>]");
            std::process::exit(1);
        }
    };

    let out_path = match cli.output {
        Some(p) => PathBuf::from(p),
        None => default_output_path(&domain)?,
    };

    tracing::info!(domain = %domain, out = %out_path.display(), timeout = ?cli.timeout, "Starting scan");

    println!("[>] Target: {domain}");
    println!("[>] Output: {}", out_path.display());
    println!();

    run_scan(&domain, &out_path, cli.timeout).await
}

async fn run_scan(domain: &str, out_path: &Path, timeout: Option<u64>) -> anyhow::Result<()> {
    let spinner = progress::start_spinner(domain);

    let client = match timeout {
        Some(_) => create_client(timeout),
        None => DEFAULT_CLIENT.clone(),
    };

    let body = crtsh::fetch_raw(&client, domain).await?;
    let records = parse_records(&body)?;
    tracing::debug!(records = records.len(), "decoded certificate records");

    let subdomains = extract_subdomains(&records);
    write_subdomains(out_path, &subdomains)?;

    spinner.finish_and_clear();
    println!("Scan completed. Results saved in {}", out_path.display());
    tracing::info!(count = subdomains.len(), "scan finished");
    Ok(())
}
