use anyhow::Result;

use crate::client::FeedlyClient;
use crate::config::Config;
use crate::models::Operation;

mod outputs;
pub use outputs::*;

/// A command the CLI can run. The output is kept as data so tests can inspect it before it is
/// turned into console lines.
pub trait FeedlyCmd {
    type CmdOutput;

    fn execute(&self, cfg: &Config) -> Result<Self::CmdOutput>;
}

/// Perform one API request and hand back the decoded JSON.
pub struct FetchCmd {
    pub operation: Operation,
    pub style: OutputStyle,
}

/// Print usage text. Never touches the network.
pub struct HelpCmd(pub String);

impl FetchCmd {
    pub fn new(operation: Operation) -> FetchCmd {
        FetchCmd {
            operation,
            style: OutputStyle::Pretty,
        }
    }

    pub fn compact(mut self) -> FetchCmd {
        self.style = OutputStyle::Compact;
        self
    }
}

impl FeedlyCmd for FetchCmd {
    type CmdOutput = ApiResponse;

    fn execute(&self, cfg: &Config) -> Result<ApiResponse> {
        let client = FeedlyClient::new(cfg)?;
        let value = client.execute(&self.operation)?;

        Ok(ApiResponse {
            value,
            style: self.style,
        })
    }
}

impl FeedlyCmd for HelpCmd {
    type CmdOutput = HelpOutput;

    fn execute(&self, _cfg: &Config) -> Result<HelpOutput> {
        Ok(HelpOutput(self.0.clone()))
    }
}
