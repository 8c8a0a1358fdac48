use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "nps")]
#[command(about = "Browse U.S. national sites by state and find places nearby.")]
#[command(version)]
pub struct Cli {
    /// Print all state names
    #[arg(long)]
    pub regions: bool,

    /// Look up places near the N-th site of the listed state
    #[arg(long, value_name = "N", requires = "region")]
    pub nearby: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Choose color theme
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// Use this cache file instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub cache_file: Option<String>,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// State to list; starts the interactive menu when omitted
    #[arg(num_args = 1..)]
    pub region: Vec<String>,
}

impl Cli {
    /// The state name, with multi-word names re-joined ("new mexico").
    pub fn region_name(&self) -> Option<String> {
        if self.region.is_empty() {
            None
        } else {
            Some(self.region.join(" "))
        }
    }
}
