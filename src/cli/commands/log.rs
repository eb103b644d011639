use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;

/// Handle the `log` subcommand
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Log { message } = cmd {
        ctx.store.append(message.join(" ").trim(), ctx.now)?;
    }
    Ok(())
}
