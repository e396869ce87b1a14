use std::io::{self, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result};
use diag_match::MatchingEngine;
use diag_rules::{load_from_source, resolve_rule_source};
use tracing::info;

use crate::cli::{AnalyzeArgs, OutputArgs, OutputFormatArg};
use diag_cli::render::{OutputFormat, render_rule_set};
use diag_cli::session::{SessionSettings, run_demo, run_interactive, write_diagnosis};

/// Load the configured rule set and build the engine.
///
/// Any failure here is a fatal configuration error.
pub fn build_engine(rules: Option<&Path>) -> Result<MatchingEngine> {
    let source = resolve_rule_source(rules);
    let rule_set =
        load_from_source(&source).with_context(|| format!("load rules from {source}"))?;
    info!(source = %source, rules = rule_set.len(), "rules ready");
    MatchingEngine::with_defaults(rule_set).context("build matching engine")
}

pub fn run_analyze(engine: &MatchingEngine, args: &AnalyzeArgs) -> Result<()> {
    let description = args.text.join(" ");
    let settings = session_settings(args.output);
    let mut stdout = io::stdout().lock();
    write_diagnosis(&mut stdout, engine, &description, &settings)
}

pub fn run_interactive_session(engine: &MatchingEngine, args: OutputArgs) -> Result<()> {
    let settings = session_settings(args);
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let summary = run_interactive(engine, &settings, stdin, &mut stdout)?;
    info!(
        analyzed = summary.analyzed,
        rejected = summary.rejected,
        "session finished"
    );
    Ok(())
}

pub fn run_demo_session(engine: &MatchingEngine, args: OutputArgs) -> Result<()> {
    let settings = session_settings(args);
    let mut stdout = io::stdout().lock();
    run_demo(engine, &settings, &mut stdout)?;
    Ok(())
}

/// Interactive when a person is at the keyboard, demo otherwise.
pub fn run_default(engine: &MatchingEngine) -> Result<()> {
    if io::stdin().is_terminal() {
        run_interactive_session(engine, OutputArgs::default())
    } else {
        run_demo_session(engine, OutputArgs::default())
    }
}

pub fn run_rules(engine: &MatchingEngine) -> Result<()> {
    println!("{}", render_rule_set(engine.rule_set()));
    Ok(())
}

fn session_settings(args: OutputArgs) -> SessionSettings {
    SessionSettings {
        format: match args.format {
            OutputFormatArg::Table => OutputFormat::Table,
            OutputFormatArg::Plain => OutputFormat::Plain,
            OutputFormatArg::Json => OutputFormat::Json,
        },
        explain: args.explain,
        show_all: args.all,
    }
}
