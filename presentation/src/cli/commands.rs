//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use senate_domain::Decision;
use std::path::PathBuf;

/// CLI arguments for senate
#[derive(Parser, Debug)]
#[command(name = "senate")]
#[command(author, version)]
#[command(about = "Senate - deterministic panel deliberation with binding verdicts")]
#[command(long_about = r#"
Senate convenes a panel of perspectives over a filed case and synthesizes a
verdict: approved, rejected, amended or deferred.

The process has four steps:
1. Initial positions: every seat takes a stance on the case
2. Challenges: each seat challenges the first seat that disagrees with it
3. Final positions: outliers align with the majority
4. Verdict: majority decision, reasoning, dissent and implementation guidance

Binding verdicts are handed off to the bead tracker and every verdict is
indexed as searchable precedent.

Configuration files are loaded from (in priority order):
1. SENATE_* environment variables
2. --config <path>     Explicit config file
3. ./senate.toml       Project-level config
4. ~/.config/senate/config.toml   Global config

Example:
  senate deliberate --quick "Should we bypass the rollback safeguard?"
  senate deliberate --case case.json --agents 5 --no-handoff
  senate precedent search --query "rollback safeguard" --verdict rejected
  senate handoff --case-id senate-20260220-101112
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Override the state directory root (default: ./state)
    #[arg(long, global = true, value_name = "PATH")]
    pub state_dir: Option<PathBuf>,

    /// Emit JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run deliberation and synthesize a verdict
    Deliberate(DeliberateArgs),

    /// Queue a case filing envelope in the relay outbox
    FileCase(CaseArgs),

    /// Work with stored verdict precedents
    #[command(subcommand)]
    Precedent(PrecedentCommand),

    /// Create the implementation bead for a stored verdict
    Handoff(HandoffArgs),

    /// Show configuration file locations and warnings
    Config,

    /// Print version
    Version,
}

/// Where the case comes from: a JSON file or a one-line question
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct CaseSource {
    /// Case JSON file
    #[arg(long, value_name = "FILE")]
    pub case: Option<PathBuf>,

    /// Build an ad-hoc case from a single question
    #[arg(long, value_name = "QUESTION")]
    pub quick: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct CaseArgs {
    #[command(flatten)]
    pub source: CaseSource,

    /// Filer recorded on the case when the case leaves it blank
    #[arg(long, value_name = "NAME")]
    pub filed_by: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DeliberateArgs {
    #[command(flatten)]
    pub case: CaseArgs,

    /// Number of panel seats; zero or negative uses the default
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub agents: Option<i64>,

    /// Override perspective labels (comma separated)
    #[arg(long, value_name = "A,B", value_delimiter = ',')]
    pub perspectives: Vec<String>,

    /// Override model labels (comma separated)
    #[arg(long, value_name = "M1,M2", value_delimiter = ',')]
    pub models: Vec<String>,

    /// Model label recorded for the judge
    #[arg(long, value_name = "MODEL")]
    pub judge_model: Option<String>,

    /// Workspace the bead tracker runs in
    #[arg(long, value_name = "PATH")]
    pub workspace: Option<PathBuf>,

    /// Do not create an implementation bead
    #[arg(long)]
    pub no_handoff: bool,
}

#[derive(Subcommand, Debug)]
pub enum PrecedentCommand {
    /// Search stored verdict precedents
    Search(SearchArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Free-text query; empty lists every precedent
    #[arg(long, default_value = "")]
    pub query: String,

    /// Only return this case type
    #[arg(long = "type", value_name = "TYPE")]
    pub case_type: Option<String>,

    /// Only return this decision
    #[arg(long)]
    pub verdict: Option<Decision>,

    /// Maximum number of results; zero or negative uses the default
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub limit: Option<i64>,
}

#[derive(Args, Debug, Clone)]
pub struct HandoffArgs {
    /// Case whose verdict should be handed off
    #[arg(long)]
    pub case_id: String,

    /// Workspace the bead tracker runs in
    #[arg(long, value_name = "PATH")]
    pub workspace: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use senate_domain::deliberation::panel_size;
    use senate_domain::precedent::search_limit;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("senate").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_deliberate_quick_with_overrides() {
        let cli = parse(&[
            "deliberate",
            "--quick",
            "Ship it?",
            "--agents",
            "5",
            "--perspectives",
            "ops,security",
            "--no-handoff",
            "--json",
        ]);
        assert!(cli.json);
        let Command::Deliberate(args) = cli.command else {
            panic!("expected deliberate");
        };
        assert_eq!(args.case.source.quick.as_deref(), Some("Ship it?"));
        assert_eq!(args.agents, Some(5));
        assert_eq!(args.perspectives, vec!["ops", "security"]);
        assert!(args.models.is_empty());
        assert!(args.no_handoff);
    }

    #[test]
    fn test_case_source_is_required_and_exclusive() {
        assert!(Cli::try_parse_from(["senate", "deliberate"]).is_err());
        assert!(
            Cli::try_parse_from(["senate", "file-case", "--case", "c.json", "--quick", "q"])
                .is_err()
        );
    }

    #[test]
    fn test_precedent_search() {
        let cli = parse(&[
            "--state-dir",
            "/tmp/s",
            "precedent",
            "search",
            "--query",
            "rollback",
            "--type",
            "general",
            "--verdict",
            "reject",
            "--limit",
            "3",
        ]);
        assert_eq!(cli.state_dir, Some(PathBuf::from("/tmp/s")));
        let Command::Precedent(PrecedentCommand::Search(args)) = cli.command else {
            panic!("expected precedent search");
        };
        assert_eq!(args.query, "rollback");
        assert_eq!(args.case_type.as_deref(), Some("general"));
        assert_eq!(args.verdict, Some(Decision::Rejected));
        assert_eq!(args.limit, Some(3));
    }

    #[test]
    fn test_negative_limit_and_agents_parse() {
        let cli = parse(&["precedent", "search", "--limit", "-1"]);
        let Command::Precedent(PrecedentCommand::Search(args)) = cli.command else {
            panic!("expected precedent search");
        };
        assert_eq!(args.limit, Some(-1));
        assert_eq!(search_limit(-1), 20);

        let cli = parse(&["deliberate", "--quick", "Ship it?", "--agents", "-1"]);
        let Command::Deliberate(args) = cli.command else {
            panic!("expected deliberate");
        };
        assert_eq!(args.agents, Some(-1));
        assert_eq!(panel_size(-1), 3);
    }

    #[test]
    fn test_unknown_verdict_filter_is_rejected() {
        assert!(
            Cli::try_parse_from(["senate", "precedent", "search", "--verdict", "maybe"]).is_err()
        );
    }

    #[test]
    fn test_handoff_requires_case_id() {
        assert!(Cli::try_parse_from(["senate", "handoff"]).is_err());
        let cli = parse(&["handoff", "--case-id", "senate-1", "-vv"]);
        assert_eq!(cli.verbose, 2);
        let Command::Handoff(args) = cli.command else {
            panic!("expected handoff");
        };
        assert_eq!(args.case_id, "senate-1");
    }
}
