//! Interactive and demo sessions over arbitrary reader/writer pairs.

use std::io::{BufRead, Write};

use anyhow::Result;
use diag_match::MatchingEngine;
use diag_model::MatchResult;
use tracing::{debug, info_span};

use crate::render::{OutputFormat, render_results};

/// Descriptions shorter than this are rejected before analysis.
pub const MIN_DESCRIPTION_CHARS: usize = 5;

/// Words that end an interactive session (case-insensitive).
pub const EXIT_WORDS: &[&str] = &["sair", "exit", "quit"];

/// Answers that continue the session after a diagnosis.
const CONTINUE_ANSWERS: &[&str] = &["s", "sim", "y", "yes"];

/// Sample descriptions shown in demo mode.
pub const DEMO_DESCRIPTIONS: &[&str] = &[
    "Meu computador está muito lento e demora para abrir os programas",
    "Aparecem muitos pop-ups e anúncios suspeitos na tela",
    "O computador travou e mostrou tela azul de erro",
    "Não consigo conectar à internet mas outros dispositivos funcionam",
];

const SEPARATOR_WIDTH: usize = 60;

/// How results are presented during a session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionSettings {
    pub format: OutputFormat,
    pub explain: bool,
    /// Show every matching rule instead of the capped top results.
    pub show_all: bool,
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub analyzed: usize,
    pub rejected: usize,
}

/// Classification of one line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    Exit,
    TooShort,
    Description(String),
}

/// Classify a raw input line.
pub fn classify_input(line: &str) -> UserInput {
    let trimmed = line.trim();
    if EXIT_WORDS
        .iter()
        .any(|word| trimmed.eq_ignore_ascii_case(word))
    {
        return UserInput::Exit;
    }
    if trimmed.chars().count() < MIN_DESCRIPTION_CHARS {
        return UserInput::TooShort;
    }
    UserInput::Description(trimmed.to_string())
}

/// Analyze one description according to the session settings.
pub fn diagnose(
    engine: &MatchingEngine,
    description: &str,
    settings: &SessionSettings,
) -> Vec<MatchResult> {
    if settings.show_all {
        engine.score_all(description)
    } else {
        engine.analyze(description)
    }
}

/// Write the diagnosis block for one description.
pub fn write_diagnosis<W: Write>(
    output: &mut W,
    engine: &MatchingEngine,
    description: &str,
    settings: &SessionSettings,
) -> Result<()> {
    let results = diagnose(engine, description, settings);
    debug!(results = results.len(), "description analyzed");
    if settings.format != OutputFormat::Json {
        writeln!(output, "\nAnalisando: \"{description}\"\n")?;
    }
    writeln!(
        output,
        "{}",
        render_results(&results, settings.format, settings.explain)?
    )?;
    Ok(())
}

/// Prompt loop: read descriptions until an exit word or end of input.
pub fn run_interactive<R: BufRead, W: Write>(
    engine: &MatchingEngine,
    settings: &SessionSettings,
    mut input: R,
    output: &mut W,
) -> Result<SessionSummary> {
    let span = info_span!("interactive");
    let _guard = span.enter();
    let mut summary = SessionSummary::default();

    writeln!(output, "=== SISTEMA ESPECIALISTA DE DIAGNÓSTICO DE TI ===")?;
    writeln!(
        output,
        "Descreva o problema que você está enfrentando com seu computador."
    )?;
    writeln!(
        output,
        "Seja o mais detalhado possível: sintomas, quando começou, etc."
    )?;
    writeln!(output, "Digite 'sair' para encerrar.\n")?;

    loop {
        let Some(line) = prompt(&mut input, output, "Descrição do problema: ")? else {
            break;
        };
        match classify_input(&line) {
            UserInput::Exit => break,
            UserInput::TooShort => {
                debug!("description rejected as too short");
                summary.rejected += 1;
                writeln!(
                    output,
                    "Por favor, forneça uma descrição mais detalhada (mínimo {MIN_DESCRIPTION_CHARS} caracteres)."
                )?;
            }
            UserInput::Description(description) => {
                write_diagnosis(output, engine, &description, settings)?;
                summary.analyzed += 1;

                let answer = prompt(&mut input, output, "\nDeseja diagnosticar outro problema? (s/n): ")?;
                let again = answer.is_some_and(|answer| {
                    let answer = answer.trim().to_lowercase();
                    CONTINUE_ANSWERS.contains(&answer.as_str())
                });
                if !again {
                    break;
                }
                writeln!(output, "\n{}\n", "=".repeat(SEPARATOR_WIDTH))?;
            }
        }
    }

    writeln!(output, "Obrigado por usar o Sistema Especialista de Diagnóstico de TI!")?;
    Ok(summary)
}

/// Run the sample descriptions through the engine.
pub fn run_demo<W: Write>(
    engine: &MatchingEngine,
    settings: &SessionSettings,
    output: &mut W,
) -> Result<SessionSummary> {
    let span = info_span!("demo");
    let _guard = span.enter();

    writeln!(output, "=== MODO DEMONSTRAÇÃO ===")?;
    writeln!(
        output,
        "Como não há entrada interativa disponível, aqui estão alguns exemplos:\n"
    )?;
    for (index, description) in DEMO_DESCRIPTIONS.iter().enumerate() {
        writeln!(output, "EXEMPLO {}:", index + 1)?;
        write_diagnosis(output, engine, description, settings)?;
        writeln!(output, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    }
    writeln!(
        output,
        "\nUse `diag interactive` ou `diag analyze <TEXTO>` para diagnosticar seu próprio problema."
    )?;
    Ok(SessionSummary {
        analyzed: DEMO_DESCRIPTIONS.len(),
        rejected: 0,
    })
}

/// Print a prompt and read one line; `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
