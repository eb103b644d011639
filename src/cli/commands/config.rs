use crate::AppContext;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Config { print_config, path } = cmd {
        if *path {
            println!("{}", Config::config_file().display());
        }

        if *print_config || !*path {
            print!("{}", ctx.config.to_yaml()?);
            println!("# log file in use: {}", ctx.store.path().display());
        }
    }
    Ok(())
}
