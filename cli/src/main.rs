//! CLI entrypoint for senate
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use chrono::Utc;
use clap::Parser;
use senate_application::{
    DeliberateInput, DeliberateUseCase, FileCaseUseCase, HandoffParams, HandoffVerdictInput,
    HandoffVerdictUseCase, NoProgress, PanelParams, ProgressNotifier, SearchPrecedentsInput,
    SearchPrecedentsUseCase,
};
use senate_domain::deliberation::panel_size;
use senate_domain::precedent::search_limit;
use senate_domain::{Case, SearchOptions};
use senate_infrastructure::handoff::DEFAULT_BEADS_COMMAND;
use senate_infrastructure::{
    BeadsHandoff, ConfigLoader, DEFAULT_STATE_DIR, FileConfig, JsonlPrecedentIndex, StateDir,
    read_case_file,
};
use senate_presentation::{
    CaseArgs, Cli, Command, ConsoleFormatter, DeliberateArgs, JsonFormatter, OutputFormatter,
    PrecedentCommand, ProgressReporter, SimpleProgress,
};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Fallback workspace for the bead tracker when none is configured
const WORKSPACE_ENV: &str = "ATHENA_WORKSPACE";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("senate: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).map_err(|e| anyhow!("load config: {e}"))?
    };

    // Held until exit so buffered file logs are flushed
    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;

    let issues = config.validate();
    for issue in &issues {
        warn!("config {}", issue);
    }
    if !config.output.color {
        ConsoleFormatter::set_color(false);
    }

    info!("Starting senate");

    match &cli.command {
        Command::Version => {
            println!("senate {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Command::Config => {
            ConfigLoader::print_config_sources(cli.config.as_deref());
            for issue in &issues {
                println!("  warning: {issue}");
            }
            return Ok(());
        }
        _ => {}
    }

    // === Dependency Injection ===
    let state = Arc::new(open_state(cli.state_dir.as_deref(), &config)?);
    let precedents = Arc::new(JsonlPrecedentIndex::new(state.precedent_index_path()));

    let json = cli.json || config.output.is_json();
    let formatter: Box<dyn OutputFormatter> = if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(ConsoleFormatter)
    };
    let progress: Box<dyn ProgressNotifier> = if cli.quiet || json {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let now = Utc::now();
    let rendered = match cli.command {
        Command::Deliberate(args) => {
            let case = load_case(&args.case)?;
            let input = DeliberateInput::new(case, now)
                .with_panel(panel_params(&config, &args))
                .with_handoff(deliberate_handoff_params(&config, &args));

            let use_case =
                DeliberateUseCase::new(state.clone(), precedents.clone(), beads_handoff(&config));
            let output = use_case
                .execute_with_progress(input, progress.as_ref())
                .await?;
            formatter.format_deliberation(&output)
        }
        Command::FileCase(args) => {
            let case = load_case(&args)?;
            let output = FileCaseUseCase::new(state.clone(), state.clone()).execute(case, now)?;
            formatter.format_case_filed(&output)
        }
        Command::Precedent(PrecedentCommand::Search(args)) => {
            let limit = args.limit.map_or_else(|| config.precedent.limit(), search_limit);
            let mut options = SearchOptions::default().with_limit(limit);
            if let Some(case_type) = args.case_type.as_deref().map(str::trim)
                && !case_type.is_empty()
            {
                options = options.with_type(case_type);
            }
            if let Some(verdict) = args.verdict {
                options = options.with_verdict(verdict);
            }

            let input = SearchPrecedentsInput::new(args.query).with_options(options);
            let records = SearchPrecedentsUseCase::new(precedents.clone()).execute(input)?;
            formatter.format_precedents(&records)
        }
        Command::Handoff(args) => {
            let mut params = handoff_params(&config);
            // an explicit handoff ignores `[handoff] enabled`
            params.enabled = true;
            if let Some(workspace) = args.workspace {
                params = params.with_workspace(workspace);
            }

            let input = HandoffVerdictInput::new(args.case_id, now).with_params(params);
            let use_case = HandoffVerdictUseCase::new(
                state.clone(),
                precedents.clone(),
                beads_handoff(&config),
            );
            let output = use_case
                .execute_with_progress(input, progress.as_ref())
                .await?;
            formatter.format_handoff(&output)
        }
        Command::Version | Command::Config => return Ok(()),
    };

    if rendered.ends_with('\n') {
        print!("{rendered}");
    } else {
        println!("{rendered}");
    }
    Ok(())
}

/// Install the tracing subscriber: stderr always, plus `[logging] file` if set
fn init_logging(verbose: u8, file: Option<&str>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match file.map(str::trim).filter(|f| !f.is_empty()) {
        Some(path) => {
            let path = Path::new(path);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let Some(name) = path.file_name() else {
                bail!("logging.file has no file name: {}", path.display());
            };
            std::fs::create_dir_all(dir)
                .map_err(|e| anyhow!("create log directory {}: {e}", dir.display()))?;

            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let layer = tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// `--state-dir`, then `state_dir` / `SENATE_STATE_DIR`, then `./state`
fn open_state(flag: Option<&Path>, config: &FileConfig) -> Result<StateDir> {
    let root = flag
        .map(Path::to_path_buf)
        .or_else(|| {
            config
                .state_dir
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR));

    StateDir::open(&root).map_err(|e| anyhow!("init store {}: {e}", root.display()))
}

/// Build the case from `--quick` or `--case`, filling a blank filer from `--filed-by`
fn load_case(args: &CaseArgs) -> Result<Case> {
    let filed_by = args.filed_by.as_deref().map(str::trim).unwrap_or_default();

    if let Some(question) = args.source.quick.as_deref()
        && !question.trim().is_empty()
    {
        return Ok(Case::quick(question, filed_by));
    }

    let Some(path) = args.source.case.as_deref() else {
        bail!("must provide --case <file> or --quick <question>");
    };
    let mut case = read_case_file(path).map_err(|e| anyhow!("load case: {e}"))?;
    if case.filed_by.trim().is_empty() {
        case.filed_by = filed_by.to_string();
    }
    Ok(case)
}

/// Panel from `[panel]`, overridden by command-line flags
fn panel_params(config: &FileConfig, args: &DeliberateArgs) -> PanelParams {
    let mut params = config.panel.to_params();

    if let Some(agents) = args.agents {
        params = params.with_agents(panel_size(agents));
    }
    let perspectives = non_blank(&args.perspectives);
    if !perspectives.is_empty() {
        params = params.with_perspectives(perspectives);
    }
    let models = non_blank(&args.models);
    if !models.is_empty() {
        params = params.with_models(models);
    }
    if let Some(judge) = args.judge_model.as_deref()
        && !judge.trim().is_empty()
    {
        params = params.with_judge_model(judge.trim());
    }

    params
}

fn non_blank(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

fn handoff_params(config: &FileConfig) -> HandoffParams {
    let fallback = std::env::var(WORKSPACE_ENV).ok();
    config.handoff.to_params(fallback.as_deref())
}

fn deliberate_handoff_params(config: &FileConfig, args: &DeliberateArgs) -> HandoffParams {
    let mut params = handoff_params(config);
    if let Some(workspace) = &args.workspace {
        params = params.with_workspace(workspace.clone());
    }
    if args.no_handoff {
        params.enabled = false;
    }
    params
}

fn beads_handoff(config: &FileConfig) -> Arc<BeadsHandoff> {
    let command = config.handoff.command.trim();
    let command = if command.is_empty() {
        DEFAULT_BEADS_COMMAND
    } else {
        command
    };
    Arc::new(
        BeadsHandoff::new()
            .with_command(command)
            .with_priority(config.handoff.priority),
    )
}
