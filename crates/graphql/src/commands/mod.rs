mod query;

use crate::Cli;
use crate::CommandResult;
use query::QueryCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    Query(Box<QueryCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Query(cmd) => cmd.run(cli).await
        }
    }
}
