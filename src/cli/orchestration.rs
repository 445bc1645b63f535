//! Check workflow orchestration
//!
//! Everything between parsed CLI arguments and printed output: configuration
//! overrides, head/base resolution, the policy run and rendering. Kept out of
//! main.rs so the workflow can be driven without clap.

use crate::config::Config;
use crate::domain::{BranchPair, Report};
use crate::error::{BranchGuardError, Result};
use crate::git::Repository;
use crate::policy::PolicyRunner;
use crate::suggest::SuggestStrategy;
use crate::ui::{MarkdownSink, TerminalSink};

/// Remote whose default branch stands in for a missing base branch.
pub const DEFAULT_REMOTE: &str = "origin";

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

/// Arguments for the check workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckWorkflowArgs {
    /// Head branch; resolved from the local checkout when absent
    pub head: Option<String>,

    /// Base branch; resolved from the remote default branch when absent
    pub base: Option<String>,

    /// Overrides `protected_branch` from the configuration
    pub protected: Option<String>,

    /// Overrides `suggestion.strategy` from the configuration
    pub strategy: Option<SuggestStrategy>,

    pub format: OutputFormat,
}

/// Result of a check workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub report: Report,

    /// Rendered report, ready to print
    pub output: String,
}

impl WorkflowResult {
    /// True when the pull request gate should fail.
    pub fn is_blocking(&self) -> bool {
        self.report.is_blocking()
    }
}

/// Apply command-line overrides on top of the loaded configuration.
pub fn apply_overrides(mut config: Config, args: &CheckWorkflowArgs) -> Config {
    if let Some(protected) = &args.protected {
        config.protected_branch = protected.clone();
    }
    if let Some(strategy) = args.strategy {
        config.suggestion.strategy = strategy;
    }
    config
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Work out the head and base branches of the merge being checked.
///
/// Explicit values win. CI providers export empty variables outside pull
/// requests, so empty values count as missing. Missing values are read from
/// `repo`; without one they are an error.
pub fn resolve_branches(
    head: Option<String>,
    base: Option<String>,
    repo: Option<&dyn Repository>,
) -> Result<BranchPair> {
    let head = match non_empty(head) {
        Some(head) => head,
        None => {
            let repo = repo.ok_or_else(|| BranchGuardError::branch("no head branch given"))?;
            let head = repo.current_branch()?;
            tracing::debug!(%head, "head branch read from checkout");
            head
        }
    };

    let base = match non_empty(base) {
        Some(base) => base,
        None => {
            let repo = repo.ok_or_else(|| BranchGuardError::branch("no base branch given"))?;
            let base = repo.default_branch(DEFAULT_REMOTE)?.ok_or_else(|| {
                BranchGuardError::branch(format!(
                    "no base branch given and {}/HEAD is not set; pass --base explicitly",
                    DEFAULT_REMOTE
                ))
            })?;
            tracing::debug!(%base, "base branch read from remote default");
            base
        }
    };

    Ok(BranchPair::new(head, base))
}

/// Render a report in the requested format.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut sink = TerminalSink::new();
            report.emit(&mut sink);
            Ok(sink.into_output())
        }
        OutputFormat::Markdown => {
            let mut sink = MarkdownSink::new();
            report.emit(&mut sink);
            Ok(sink.into_output())
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Main check workflow
///
/// 1. Apply CLI overrides to the configuration
/// 2. Resolve head and base branches
/// 3. Run the policy
/// 4. Render the report
pub fn run_check_workflow(
    args: CheckWorkflowArgs,
    config: Config,
    repo: Option<&dyn Repository>,
) -> Result<WorkflowResult> {
    let config = apply_overrides(config, &args);
    config.validate()?;
    let runner = PolicyRunner::from_config(&config)?;

    let pair = resolve_branches(args.head, args.base, repo)?;
    tracing::info!(head = %pair.head, base = %pair.base, "checking branch policy");

    let report = runner.run(&pair.head, &pair.base);
    let output = render(&report, args.format)?;

    Ok(WorkflowResult { report, output })
}
