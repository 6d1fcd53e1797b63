use clap::Parser;

/// Report the latest compatible macOS version for every device in Addigy
///
/// The API key is read from the ADDIGY_API_KEY environment variable.
#[derive(Parser, Debug)]
#[command(name = "mac-compat")]
#[command(version)]
#[command(
    about = "Report the latest compatible macOS version for every device in Addigy",
    long_about = None
)]
pub struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Output file path (defaults to ~/Downloads/os_compat.csv)
    #[arg(short = 'f', long, value_name = "PATH", conflicts_with = "stdout")]
    pub filepath: Option<String>,

    /// Write the report to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Only include devices in these policies (case-sensitive)
    /// Can be repeated or comma-separated: -p "Staff" -p "Lab,Kiosk"
    #[arg(short, long = "policy", value_name = "NAME", value_delimiter = ',')]
    pub policy: Vec<String>,

    /// Only include devices whose latest compatible macOS is one of these
    /// major versions (0 selects unsupported devices)
    #[arg(
        short = 'o',
        long = "filter-os-versions",
        value_name = "VERSION",
        value_delimiter = ','
    )]
    pub filter_os_versions: Vec<u32>,

    /// Devices requested per API page
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub per_page: Option<u32>,

    /// Path to a config file (defaults to ./mac-compat.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
