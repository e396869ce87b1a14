//! Presentation of diagnosis results.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use diag_model::{MatchResult, RuleSet, Severity};

/// Output format for diagnoses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Plain,
    Json,
}

/// Printed when no rule scored above zero.
pub const NO_MATCH_MESSAGE: &str = "Não foi possível identificar problemas específicos na sua descrição.\n\
     Tente fornecer mais detalhes sobre os sintomas.";

/// Printed after a non-empty diagnosis.
pub const ADVISORY_NOTE: &str = "NOTA: este é um diagnóstico preliminar baseado em regras. \
     Consulte um técnico especializado para o reparo adequado.";

/// Render results in the requested format.
pub fn render_results(
    results: &[MatchResult],
    format: OutputFormat,
    explain: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(results, explain)),
        OutputFormat::Plain => Ok(render_plain(results, explain)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
    }
}

/// Numbered, line-oriented listing suitable for pipes and logs.
pub fn render_plain(results: &[MatchResult], explain: bool) -> String {
    if results.is_empty() {
        return NO_MATCH_MESSAGE.to_string();
    }
    let mut lines = Vec::new();
    for (index, result) in results.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.push(format!("{}. {}", index + 1, result.diagnosis_label));
        lines.push(format!("   Confiança: {}", percent(result.confidence)));
        lines.push(format!("   Severidade: {}", severity_label(result.severity)));
        lines.push(format!("   Solução: {}", result.remedy_text));
        lines.push(format!(
            "   Palavras identificadas: {}",
            result.matched_terms.join(", ")
        ));
        if explain {
            lines.push(format!("   Evidências: {}", result.explain()));
        }
    }
    lines.push(String::new());
    lines.push(ADVISORY_NOTE.to_string());
    lines.join("\n")
}

/// Boxed table with one row per diagnosis.
pub fn render_table(results: &[MatchResult], explain: bool) -> String {
    if results.is_empty() {
        return NO_MATCH_MESSAGE.to_string();
    }
    let mut headers = vec![
        header_cell("#"),
        header_cell("Diagnóstico"),
        header_cell("Confiança"),
        header_cell("Severidade"),
        header_cell("Solução"),
        header_cell("Palavras identificadas"),
    ];
    if explain {
        headers.push(header_cell("Evidências"));
    }
    let mut table = Table::new();
    table.set_header(headers);
    apply_result_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);

    for (index, result) in results.iter().enumerate() {
        let mut row = vec![
            dim_cell(index + 1),
            Cell::new(&result.diagnosis_label).add_attribute(Attribute::Bold),
            confidence_cell(result.confidence),
            severity_cell(result.severity),
            Cell::new(&result.remedy_text),
            Cell::new(result.matched_terms.join(", ")),
        ];
        if explain {
            row.push(dim_cell(result.explain()));
        }
        table.add_row(row);
    }
    format!("{table}\n{ADVISORY_NOTE}")
}

/// Table listing every rule in the set.
pub fn render_rule_set(rules: &RuleSet) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Regra"),
        header_cell("Diagnóstico"),
        header_cell("Severidade"),
        header_cell("Termos"),
        header_cell("Palavras-chave"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for rule in rules {
        table.add_row(vec![
            Cell::new(rule.id())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(rule.diagnosis_label()),
            severity_cell(rule.severity()),
            Cell::new(rule.trigger_terms().len()),
            Cell::new(rule.trigger_terms().join(", ")),
        ]);
    }
    table.to_string()
}

/// Confidence as a percentage with one decimal.
pub fn percent(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_result_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 6 {
        let mut constraints = vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(3)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
        ];
        if table.column_count() >= 7 {
            constraints.push(ColumnConstraint::UpperBoundary(Width::Percentage(30)));
        }
        table.set_constraints(constraints);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn confidence_cell(confidence: f64) -> Cell {
    let cell = Cell::new(percent(confidence));
    if confidence >= 0.5 {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

/// Severity as written in the rule documents.
pub fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "Alto",
        Severity::Medium => "Médio",
        Severity::Low => "Baixo",
    }
}

fn severity_cell(severity: Severity) -> Cell {
    let cell = Cell::new(severity_label(severity).to_uppercase());
    match severity {
        Severity::High => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        Severity::Medium => cell.fg(Color::Yellow),
        Severity::Low => cell.fg(Color::Green),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
