pub mod org_tree;
pub mod review;

use crate::cli::Commands;
use crate::context::AppContext;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: &Commands, ctx: &mut AppContext) -> anyhow::Result<()> {
    match command {
        Commands::Review(args) => review::handle(args, ctx),
        Commands::OrgTree(args) => org_tree::handle(args, ctx),
    }
}
