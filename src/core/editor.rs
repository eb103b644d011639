//! Resolves which editor opens the log file.

use std::ffi::OsString;
use std::path::Path;

/// Program and arguments for an editor invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    pub program: String,
    pub args: Vec<OsString>,
}

/// Picks the editor: explicit flag first, then the configured editor,
/// then `$EDITOR`. Only the implicit choices get the `+` jump-to-end
/// argument for vi/vim. Returns `None` when nothing is set.
pub fn edit_command(
    flag: Option<&str>,
    configured: Option<&str>,
    env_editor: Option<&str>,
    path: &Path,
) -> Option<EditorCommand> {
    if let Some(program) = non_empty(flag) {
        return Some(EditorCommand {
            program: program.to_string(),
            args: vec![path.as_os_str().to_os_string()],
        });
    }

    let program = non_empty(configured).or_else(|| non_empty(env_editor))?;
    let mut args = Vec::new();
    if matches!(program, "vi" | "vim") {
        args.push(OsString::from("+"));
    }
    args.push(path.as_os_str().to_os_string());

    Some(EditorCommand {
        program: program.to_string(),
        args,
    })
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
