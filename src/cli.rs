use clap::Parser;

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target domain (e.g. example.com)
    #[arg(short = 'd', long)]
    pub domain: Option<String>,

    /// Output file path (default: <home>/result_directory/<domain>.crt.txt)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<String>,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Enable detailed debug logging (global)
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Enable verbose logging (global)
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
