use crate::AppContext;
use crate::cli::parser::Commands;
use crate::core::editor::edit_command;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::process::Command;
use tracing::debug;

const EDITOR_HINT: &str = "Set your default editor in EDITOR environment variable or \n\
call edit command with -e option and pass your editor, e.g.:\n\
timeflow edit -e vim";

/// Handle the `edit` subcommand
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Edit { editor } = cmd {
        let env_editor = std::env::var("EDITOR").ok();
        let Some(ed) = edit_command(
            editor.as_deref(),
            ctx.config.editor.as_deref(),
            env_editor.as_deref(),
            ctx.store.path(),
        ) else {
            info(EDITOR_HINT);
            return Ok(());
        };

        debug!(program = %ed.program, args = ?ed.args, "launching editor");
        let status = Command::new(&ed.program)
            .args(&ed.args)
            .status()
            .map_err(|e| AppError::Editor(format!("{}: {}", ed.program, e)))?;

        if !status.success() {
            warning(format!("Editor '{}' exited with {}", ed.program, status));
        }
    }
    Ok(())
}
