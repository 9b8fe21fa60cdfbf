use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::workout::Setting;

#[derive(Parser)]
#[command(name = "intervals")]
#[command(about = "A workout interval timer for the terminal")]
#[command(long_about = "intervals - A workout interval timer for the terminal

Configure work, rest and round-reset durations, a round count and a list
of exercises, then let intervals count you through every phase.

QUICK START:
  intervals                       Open the interactive timer
  intervals run                   Count down in the current terminal
  intervals plan                  Show every phase of the workout
  intervals config set work 45s   Change the work duration
  intervals exercise add Burpees  Add an exercise

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  intervals <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory holding settings and the saved workout
    #[arg(long, global = true, env = "INTERVALS_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer (default)
    ///
    /// Shows the total workout time, the settings cards and a start
    /// control. The screen changes colour with each phase.
    ///
    /// # Keys
    ///
    ///   Space/s      Start (or restart) the workout
    ///   x            Stop and return to the start screen
    ///   j/k          Select a setting
    ///   Enter        Open the selected setting
    ///   +/-          Adjust the open setting
    ///   q/Esc        Close dialog / quit
    #[command(alias = "ui")]
    Tui,

    /// Run the workout in the current terminal
    ///
    /// Counts down without a full-screen interface, printing each phase
    /// as it begins. Overrides apply to this run only and are not saved.
    ///
    /// # Examples
    ///
    ///   intervals run                     Run the saved workout
    ///   intervals run --rounds 5          Five rounds this time
    ///   intervals run --work 40s --rest 20s
    ///   intervals run -o json | jq .phase Stream phase events
    #[command(alias = "r")]
    Run(RunArgs),

    /// Show the phase schedule of the workout
    ///
    /// Lists every phase in order with its start offset and length,
    /// followed by the total workout time.
    #[command(alias = "p")]
    Plan,

    /// View and edit workout settings
    ///
    /// # Examples
    ///
    ///   intervals config show             Show the current workout
    ///   intervals config set work 45s     Set work duration
    ///   intervals config set rounds 4     Set round count
    ///   intervals config adjust rest dec  Rest 5 seconds shorter
    ///   intervals config reset            Restore defaults
    Config(ConfigArgs),

    /// Manage the exercise list
    ///
    /// Exercises are addressed by 1-based position or by id.
    ///
    /// # Examples
    ///
    ///   intervals exercise list
    ///   intervals exercise add "Jumping jacks"
    ///   intervals exercise rename 2 Lunges
    ///   intervals exercise remove 1
    #[command(alias = "ex")]
    Exercise(ExerciseArgs),

    /// Generate shell completions
    ///
    /// Example: intervals completions bash > ~/.bash_completion.d/intervals
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },
}

/// Arguments for the run command.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Work duration for this run (e.g., 40, 40s, 1m)
    #[arg(long, short = 'w')]
    pub work: Option<String>,

    /// Rest duration for this run
    #[arg(long, short = 'r')]
    pub rest: Option<String>,

    /// Round reset duration for this run
    #[arg(long)]
    pub reset: Option<String>,

    /// Number of rounds for this run
    #[arg(long, short = 'n')]
    pub rounds: Option<u32>,

    /// Don't ring the terminal bell
    #[arg(long)]
    pub no_bell: bool,

    /// Tick period in milliseconds
    #[arg(long, hide = true, default_value_t = 1000)]
    pub tick_millis: u64,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current workout
    Show,

    /// Print the workout file path
    Path,

    /// Set a setting to a value
    ///
    /// Durations accept 45, 45s, 1m30s or 01:30.
    Set {
        /// Setting to change
        #[arg(value_enum)]
        setting: Setting,

        /// New value
        value: String,
    },

    /// Step a setting up or down
    ///
    /// Durations move by the configured step (5 seconds by default),
    /// rounds move by one.
    Adjust {
        /// Setting to change
        #[arg(value_enum)]
        setting: Setting,

        /// Direction
        #[arg(value_enum)]
        direction: Direction,
    },

    /// Restore the default workout
    Reset,

    /// Write a settings file with every option at its default
    Init {
        /// Overwrite an existing settings file
        #[arg(long, short = 'f')]
        force: bool,
    },
}

/// Adjustment direction.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Increase.
    #[value(alias = "+")]
    Inc,
    /// Decrease.
    #[value(alias = "-")]
    Dec,
}

impl Direction {
    /// Sign of the adjustment.
    #[must_use]
    pub const fn sign(self) -> i64 {
        match self {
            Self::Inc => 1,
            Self::Dec => -1,
        }
    }
}

#[derive(Args)]
pub struct ExerciseArgs {
    #[command(subcommand)]
    pub command: ExerciseCommands,
}

/// Exercise subcommands.
#[derive(Subcommand)]
pub enum ExerciseCommands {
    /// List exercises
    #[command(alias = "ls")]
    List,

    /// Add an exercise to the end of the list
    Add {
        /// Exercise name
        name: String,
    },

    /// Rename an exercise
    Rename {
        /// Position (1-based) or id
        which: String,

        /// New name
        name: String,
    },

    /// Remove an exercise
    #[command(alias = "rm")]
    Remove {
        /// Position (1-based) or id
        which: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["intervals"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_run_overrides() {
        let cli = Cli::try_parse_from([
            "intervals", "run", "--work", "40s", "--rounds", "5", "--no-bell",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Run(args)) => {
                assert_eq!(args.work.as_deref(), Some("40s"));
                assert_eq!(args.rounds, Some(5));
                assert!(args.no_bell);
                assert_eq!(args.tick_millis, 1000);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_config_set_parses_setting() {
        let cli = Cli::try_parse_from(["intervals", "config", "set", "reset", "20"]).unwrap();
        match cli.command {
            Some(Commands::Config(ConfigArgs {
                command: ConfigCommands::Set { setting, value },
            })) => {
                assert_eq!(setting, Setting::Reset);
                assert_eq!(value, "20");
            }
            _ => panic!("expected config set"),
        }
    }

    #[test]
    fn test_parse_config_init() {
        let cli = Cli::try_parse_from(["intervals", "config", "init", "--force"]).unwrap();
        match cli.command {
            Some(Commands::Config(ConfigArgs {
                command: ConfigCommands::Init { force },
            })) => assert!(force),
            _ => panic!("expected config init"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["intervals", "plan", "-o", "json", "-vv"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }
}
