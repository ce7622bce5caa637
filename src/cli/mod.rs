use anyhow::{Context, Result};
use structopt::StructOpt;
use url::Url;

use std::path::Path;

use crate::models::Operation;
use crate::Config;
use crate::{ConsoleOutput, FeedlyCmd, FetchCmd, HelpCmd};

// Adaptor so that commands with different `CmdOutput` types can be boxed together: everything
// the binary needs from a command is the lines to print.
pub trait FeedlyCLICmd {
    /// Executes the command as in `execute` and returns the output from the `ConsoleOutput`
    /// trait i.e. a list of strings.
    fn execute_console(&self, cfg: &Config) -> Result<Vec<String>>;
}

impl<T: FeedlyCmd> FeedlyCLICmd for T
    where <T as FeedlyCmd>::CmdOutput: ConsoleOutput {
    fn execute_console(&self, cfg: &Config) -> Result<Vec<String>> {
        let output = self.execute(cfg)?;
        ConsoleOutput::output(&output)
    }
}


#[derive(Debug, StructOpt)]
#[structopt(name = "feedly-cli", about = "Feedly CLI Tool")]
pub struct FeedlyArgs {
    #[structopt(subcommand)]
    cmd: Option<SubArg>,

    #[structopt(short = "c", long = "config")]
    /// Read configuration from this TOML file.
    config_file: Option<String>,

    #[structopt(long = "base-url")]
    /// Send requests to this origin instead of the Feedly cloud API.
    base_url: Option<String>,

    #[structopt(long = "timeout")]
    /// Request timeout in seconds. 0 waits forever.
    timeout_secs: Option<u64>,

    #[structopt(long = "compact")]
    /// Print the JSON response on a single line.
    compact: bool,

    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    /// Log more detail to stderr. May be repeated.
    verbose: u8,
}

#[derive(Debug, StructOpt)]
enum SubArg {
    #[structopt(name = "search")]
    /// Search for feeds
    Search(SearchArg),

    #[structopt(name = "stream")]
    /// Get a feed stream
    Stream(StreamArg),

    #[structopt(name = "entry")]
    /// Get an entry
    Entry(EntryArg),

    // Anything else falls through to the usage text instead of a parse error.
    #[structopt(external_subcommand)]
    Unknown(Vec<String>),
}

#[derive(Debug, StructOpt)]
struct SearchArg {
    /// Search query
    pub query: String,
    #[structopt(long = "count", default_value = "15")]
    /// Number of results to return
    pub count: u32,
    #[structopt(long = "locale")]
    /// Locale for search results
    pub locale: Option<String>,
}

#[derive(Debug, StructOpt)]
struct StreamArg {
    /// Feed ID
    pub feed_id: String,
    #[structopt(long = "count", default_value = "15")]
    /// Number of entries to return
    pub count: u32,
}

#[derive(Debug, StructOpt)]
struct EntryArg {
    /// Entry ID
    pub entry_id: String,
}

impl FeedlyArgs {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn get_cfg_file(&self) -> Option<&Path> {
        self.config_file.as_ref().map(Path::new)
    }

    /// Loads the configuration file, if any, and applies the command line overrides on top.
    pub fn load_config(&self) -> Result<Config> {
        let mut cfg = Config::open(self.get_cfg_file())?;

        if let Some(base_url) = &self.base_url {
            cfg.base_url = Url::parse(base_url)
                .with_context(|| format!("Invalid base url: {}", base_url))?;
        }
        if let Some(secs) = self.timeout_secs {
            cfg.timeout_secs = Some(secs);
        }

        Ok(cfg)
    }

    /// Validates the sub-command's arguments. Without a recognized sub-command the result is a
    /// command that prints usage.
    pub fn to_cmd(self) -> Result<Box<dyn FeedlyCLICmd>> {
        let operation = match self.operation()? {
            Some(operation) => operation,
            None => return Ok(Box::new(HelpCmd(usage_text()?))),
        };

        let cmd = FetchCmd::new(operation);
        let cmd = if self.compact { cmd.compact() } else { cmd };
        Ok(Box::new(cmd))
    }

    /// The validated operation, if a known sub-command was given.
    pub fn operation(&self) -> Result<Option<Operation>> {
        let operation = match &self.cmd {
            Some(SubArg::Search(args)) => Operation::search(&args.query, args.count, args.locale.as_deref())?,
            Some(SubArg::Stream(args)) => Operation::stream(&args.feed_id, args.count)?,
            Some(SubArg::Entry(args)) => Operation::entry(&args.entry_id)?,
            Some(SubArg::Unknown(_)) | None => return Ok(None),
        };
        Ok(Some(operation))
    }
}

fn usage_text() -> Result<String> {
    let mut buf = Vec::new();
    FeedlyArgs::clap().write_help(&mut buf)
        .context("Could not render usage text")?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
