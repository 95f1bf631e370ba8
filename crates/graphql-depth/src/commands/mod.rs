mod check;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-depth")]
pub(crate) enum CommandEnum {
    /// Measure the depth of every operation in one or more GraphQL files and
    /// fail if any operation exceeds the maximum depth.
    Check(Box<CheckCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await
        }
    }
}
