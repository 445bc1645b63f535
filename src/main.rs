use anyhow::Result;
use clap::Parser;

use branch_guard::cli::orchestration::{self, CheckWorkflowArgs, OutputFormat};
use branch_guard::config;
use branch_guard::git::{Git2Repository, Repository};
use branch_guard::suggest::SuggestStrategy;
use branch_guard::ui;

#[derive(clap::Parser)]
#[command(
    name = "branch-guard",
    version,
    about = "Check pull request branch names and merge direction"
)]
struct Args {
    #[arg(long, env = "GITHUB_HEAD_REF", help = "Head (source) branch of the merge")]
    head: Option<String>,

    #[arg(long, env = "GITHUB_BASE_REF", help = "Base (target) branch of the merge")]
    base: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Protected branch that triggers the merge-direction check")]
    protected: Option<String>,

    #[arg(long, value_enum, help = "Suggestion strategy for invalid names")]
    strategy: Option<SuggestStrategy>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
    format: OutputFormat,

    #[arg(long, help = "Show the configured naming rules and exit")]
    list: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the rendered report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let check = CheckWorkflowArgs {
        head: args.head,
        base: args.base,
        protected: args.protected,
        strategy: args.strategy,
        format: args.format,
    };

    if args.list {
        let config = orchestration::apply_overrides(config, &check);
        let rules = config.rule_set()?;
        ui::display_rules(&rules, &config.protected_branch);
        return Ok(());
    }

    // Only touch the checkout when a branch name is missing
    let needs_repo = [&check.head, &check.base]
        .iter()
        .any(|b| b.as_deref().map_or(true, str::is_empty));
    let repo = if needs_repo {
        match Git2Repository::open(".") {
            Ok(repo) => Some(repo),
            Err(e) => {
                ui::display_error(&format!("Git repository error: {}", e));
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    let result = match orchestration::run_check_workflow(
        check,
        config,
        repo.as_ref().map(|r| r as &dyn Repository),
    ) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    println!("{}", result.output);

    if result.is_blocking() {
        std::process::exit(1);
    }

    Ok(())
}
