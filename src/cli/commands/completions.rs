//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, PowerShell and
//! elvish.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::IntervalsError;

/// Execute the completions command.
///
/// # Errors
///
/// Returns an error if the shell is not supported.
pub fn completions(shell: &str, install: bool) -> Result<String, IntervalsError> {
    let shell = shell_from_str(shell)
        .ok_or_else(|| IntervalsError::InvalidInput(format!("Unsupported shell: {shell}")))?;

    if install {
        Ok(completion_install_instructions(shell))
    } else {
        generate_completions(shell)
    }
}

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, IntervalsError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "intervals", &mut buf);
    String::from_utf8(buf)
        .map_err(|e| IntervalsError::InvalidInput(format!("UTF-8 error: {e}")))
}

/// Get shell from string name.
#[must_use]
pub fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}

/// Get installation instructions for shell completions.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => r"# Add to ~/.bashrc or ~/.bash_profile:
source <(intervals completions bash)
"
        .to_string(),

        Shell::Zsh => r"# Save to your fpath:
intervals completions zsh > ~/.zsh/completions/_intervals
# Then add to ~/.zshrc:
fpath=(~/.zsh/completions $fpath)
autoload -Uz compinit && compinit
"
        .to_string(),

        Shell::Fish => r"# Save to fish completions directory:
intervals completions fish > ~/.config/fish/completions/intervals.fish
"
        .to_string(),

        Shell::PowerShell => r"# Add to your PowerShell profile ($PROFILE):
intervals completions powershell | Out-String | Invoke-Expression
"
        .to_string(),

        Shell::Elvish => r"# Save to elvish completions directory:
intervals completions elvish > ~/.elvish/lib/intervals.elv
"
        .to_string(),

        _ => "Unknown shell".to_string(),
    }
}
