use std::path::PathBuf;

use clap::Parser;

/// Search-as-you-type for the Brasileirão Stats site.
#[derive(Debug, Parser)]
#[command(name = "suggest", version, about)]
pub struct Cli {
    /// Site root the suggestions endpoint is resolved against (overrides the config file).
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// RON configuration file; missing file means defaults.
    #[arg(long, value_name = "PATH", default_value = "suggest.ron")]
    pub config: PathBuf,

    /// Where to write the log.
    #[arg(long, value_name = "PATH", default_value = "suggest.log")]
    pub log_file: PathBuf,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}
