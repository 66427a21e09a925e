// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    io::{self, Write},
};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::{Shell as ClapShell, generate};
use clap_complete_nushell::Nushell;
use daycal_core::APP_NAME;

use crate::Cli;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print the completion script of daycal for a shell")
            .arg(
                arg!(shell: <SHELL> "Shell to generate the script for")
                    .value_parser(value_parser!(Shell)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let shell = matches.get_one("shell").copied().unwrap_or_default();
        Self { shell }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(shell = ?self.shell, "printing shell completion");
        let mut stdout = io::stdout().lock();
        self.generate(&mut stdout);
        stdout.flush()?;
        Ok(())
    }

    pub fn generate(self, buf: &mut impl Write) {
        let mut cmd = Cli::command();
        match self.shell.clap_shell() {
            Some(shell) => generate(shell, &mut cmd, APP_NAME, buf),
            None => generate(Nushell {}, &mut cmd, APP_NAME, buf),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    #[default]
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    /// Generator shipped with `clap_complete`, `None` for nushell.
    fn clap_shell(self) -> Option<ClapShell> {
        match self {
            Shell::Bash => Some(ClapShell::Bash),
            Shell::Elvish => Some(ClapShell::Elvish),
            Shell::Fish => Some(ClapShell::Fish),
            Shell::Nushell => None,
            Shell::PowerShell => Some(ClapShell::PowerShell),
            Shell::Zsh => Some(ClapShell::Zsh),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(shell: &str) -> CmdGenerateCompletion {
        let matches = Cli::command()
            .try_get_matches_from([APP_NAME, CmdGenerateCompletion::NAME, shell])
            .unwrap_or_else(|e| panic!("Failed to parse for shell '{shell}': {e}"));
        let sub_matches = matches
            .subcommand_matches(CmdGenerateCompletion::NAME)
            .unwrap();
        CmdGenerateCompletion::from(sub_matches)
    }

    #[test]
    fn test_parse_shells() {
        for (name, shell) in [
            ("bash", Shell::Bash),
            ("elvish", Shell::Elvish),
            ("fish", Shell::Fish),
            ("nushell", Shell::Nushell),
            ("powershell", Shell::PowerShell),
            ("zsh", Shell::Zsh),
        ] {
            assert_eq!(parse(name).shell, shell);
        }
    }

    #[test]
    fn test_reject_unknown_shell() {
        let result = Cli::command().try_get_matches_from([APP_NAME, "generate-completion", "cmd"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_scripts_mention_calendar_flags() {
        for shell in Shell::value_variants() {
            let mut output = vec![];
            CmdGenerateCompletion { shell: *shell }.generate(&mut output);
            let script = String::from_utf8(output).unwrap();
            assert!(script.contains(APP_NAME), "{shell:?}");
            assert!(script.contains("filter"), "{shell:?}");
        }
    }
}
