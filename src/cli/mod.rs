//! CLI argument definitions for promptgen.
//!
//! This module defines the command-line interface using clap derive macros.

use clap::{ArgAction, Args, Parser, Subcommand};
use promptgen::reasoning::Paradigm;
use std::path::PathBuf;

/// promptgen: assemble system prompts from configuration records and presets.
#[derive(Parser, Debug)]
#[command(name = "promptgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file (YAML). Defaults apply when omitted.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the built-in presets in catalog order
    List,

    /// Show the first preset whose name contains the query (case-insensitive)
    Find(FindArgs),

    /// Print a preset's configuration record as YAML
    Show(ShowArgs),

    /// Generate a system prompt from a preset, a record file, or both
    Generate(GenerateArgs),

    /// Select a reasoning paradigm for a task and print its prompt
    Paradigm(ParadigmArgs),

    /// Print the analysis prompt for an instruction
    Instruct(InstructArgs),
}

/// Arguments for the `find` command.
#[derive(Args, Debug)]
pub struct FindArgs {
    /// Text to look for in preset names
    pub query: String,
}

/// Arguments for the `show` command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Exact preset name (case-insensitive)
    pub preset: String,
}

/// Arguments for the `generate` command.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Start from the preset with this exact name
    #[arg(long, conflicts_with = "query")]
    pub preset: Option<String>,

    /// Start from the first preset whose name contains this text
    #[arg(long)]
    pub query: Option<String>,

    /// Load the record from a YAML or JSON file (replaces any preset)
    #[arg(long, value_name = "FILE")]
    pub record: Option<PathBuf>,

    /// Override one field, as field=value (repeatable)
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub set: Vec<String>,

    /// Append an example pattern (repeatable)
    #[arg(long = "pattern", value_name = "TEXT")]
    pub patterns: Vec<String>,

    /// Render a named template from the settings file instead of the built-in body
    #[arg(long, value_name = "NAME")]
    pub template: Option<String>,

    /// Write the prompt to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip record validation before rendering
    #[arg(long)]
    pub no_validate: bool,
}

/// Arguments for the `paradigm` command.
#[derive(Args, Debug, Default)]
pub struct ParadigmArgs {
    /// Task description
    pub task: String,

    /// World state entry, as key=value (repeatable; JSON values keep their type)
    #[arg(long = "world", value_name = "KEY=VALUE")]
    pub world: Vec<String>,

    /// Force a paradigm instead of selecting one
    /// (conceptual_chaining, chunked_symbolism, expert_lexicon, default)
    #[arg(long)]
    pub paradigm: Option<Paradigm>,
}

/// Arguments for the `instruct` command.
#[derive(Args, Debug)]
pub struct InstructArgs {
    /// Instruction to analyze
    pub instruction: String,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_list() {
        let cli = Cli::try_parse_from(["promptgen", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List));
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
    }

    #[test]
    fn parse_find() {
        let cli = Cli::try_parse_from(["promptgen", "find", "project"]).unwrap();
        if let Command::Find(args) = cli.command {
            assert_eq!(args.query, "project");
        } else {
            panic!("Expected Find command");
        }
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "promptgen",
            "show",
            "Research Analyst",
            "--config",
            "settings.yaml",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("settings.yaml")));
        if let Command::Show(args) = cli.command {
            assert_eq!(args.preset, "Research Analyst");
        } else {
            panic!("Expected Show command");
        }
    }

    #[test]
    fn parse_generate_full() {
        let cli = Cli::try_parse_from([
            "promptgen",
            "generate",
            "--query",
            "support",
            "--set",
            "agentName=Helper",
            "--set",
            "confidenceThresholds.high=95",
            "--pattern",
            "Do X",
            "--pattern",
            "Do Y",
            "--template",
            "short",
            "-o",
            "out.md",
            "--no-validate",
        ])
        .unwrap();
        if let Command::Generate(args) = cli.command {
            assert_eq!(args.query.as_deref(), Some("support"));
            assert!(args.preset.is_none());
            assert_eq!(args.set, vec!["agentName=Helper", "confidenceThresholds.high=95"]);
            assert_eq!(args.patterns, vec!["Do X", "Do Y"]);
            assert_eq!(args.template.as_deref(), Some("short"));
            assert_eq!(args.output, Some(PathBuf::from("out.md")));
            assert!(args.no_validate);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn generate_rejects_preset_with_query() {
        let result = Cli::try_parse_from([
            "promptgen",
            "generate",
            "--preset",
            "Research Analyst",
            "--query",
            "research",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_paradigm_with_world() {
        let cli = Cli::try_parse_from([
            "promptgen",
            "paradigm",
            "Why do leaves fall?",
            "--world",
            "season=autumn",
            "--world",
            "temperature=12",
        ])
        .unwrap();
        if let Command::Paradigm(args) = cli.command {
            assert_eq!(args.task, "Why do leaves fall?");
            assert_eq!(args.world.len(), 2);
            assert!(args.paradigm.is_none());
        } else {
            panic!("Expected Paradigm command");
        }
    }

    #[test]
    fn parse_forced_paradigm() {
        let cli = Cli::try_parse_from([
            "promptgen",
            "paradigm",
            "Add the totals",
            "--paradigm",
            "expert_lexicon",
        ])
        .unwrap();
        if let Command::Paradigm(args) = cli.command {
            assert_eq!(args.paradigm, Some(Paradigm::ExpertLexicon));
        } else {
            panic!("Expected Paradigm command");
        }
    }

    #[test]
    fn parse_unknown_paradigm_is_rejected() {
        let err = Cli::try_parse_from(["promptgen", "paradigm", "task", "--paradigm", "telepathy"])
            .unwrap_err();
        assert!(err.to_string().contains("unknown paradigm 'telepathy'"));
    }

    #[test]
    fn parse_instruct_requires_instruction() {
        assert!(Cli::try_parse_from(["promptgen", "instruct"]).is_err());
    }
}
