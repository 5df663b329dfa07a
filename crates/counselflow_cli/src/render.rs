//! Plain-text rendering of records and cards.

use counselflow_core::aggregate::SummaryCard;
use counselflow_core::model::compliance::{ComplianceAlert, ComplianceFramework, ComplianceItem};
use counselflow_core::model::contract::Contract;
use counselflow_core::model::dispute::Dispute;
use counselflow_core::model::entity::Entity;
use counselflow_core::model::matter::Matter;
use counselflow_core::model::policy::Policy;
use counselflow_core::model::risk::Risk;
use counselflow_core::model::task::Task;
use counselflow_core::model::vendor::Vendor;
use counselflow_core::{Tone, Toned};
use std::fmt::Display;

/// A record printable as one table row.
pub trait TableRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

/// Label prefixed with a marker for its tone.
pub fn badge<T: Toned + Display>(value: &T) -> String {
    let marker = match value.tone() {
        Tone::Success => "+",
        Tone::Info => "i",
        Tone::Accent => "*",
        Tone::Warning => "!",
        Tone::Danger => "x",
        Tone::Critical => "!!",
        Tone::Neutral => "-",
    };
    format!("{marker} {value}")
}

pub fn print_table<R: TableRow>(rows: &[&R]) {
    let headers = R::headers();
    let body: Vec<Vec<String>> = rows.iter().map(|row| row.cells()).collect();

    let mut widths: Vec<usize> = headers.iter().map(|header| header.chars().count()).collect();
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header_cells: Vec<String> = headers.iter().map(|header| header.to_string()).collect();
    println!("{}", join_padded(&header_cells, &widths));
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    println!("{}", join_padded(&rule, &widths));
    for cells in &body {
        println!("{}", join_padded(cells, &widths));
    }
    println!("({} rows)", rows.len());
}

pub fn print_cards(cards: &[SummaryCard]) {
    let width = cards
        .iter()
        .map(|card| card.label.chars().count())
        .max()
        .unwrap_or(0);
    for card in cards {
        println!("{:<width$}  {}", card.label, card.value);
    }
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}", width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

impl TableRow for Contract {
    fn headers() -> &'static [&'static str] {
        &["ID", "Title", "Type", "Value", "End", "Status", "Risk"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.kind.to_string(),
            self.value.to_string(),
            self.end_date.to_string(),
            badge(&self.status),
            badge(&self.risk_level),
        ]
    }
}

impl TableRow for Matter {
    fn headers() -> &'static [&'static str] {
        &["ID", "Title", "Client", "Type", "Budget", "Spend", "Status", "Risk"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.client.clone(),
            self.matter_type.to_string(),
            self.budget.to_string(),
            self.actual_spend.to_string(),
            badge(&self.status),
            self.risk_score.to_string(),
        ]
    }
}

impl TableRow for Entity {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Type", "Jurisdiction", "Formed", "Status", "Compliance"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.kind.to_string(),
            self.primary_jurisdiction().unwrap_or("-").to_string(),
            self.formation_date.to_string(),
            badge(&self.status),
            self.compliance_score.to_string(),
        ]
    }
}

impl TableRow for Task {
    fn headers() -> &'static [&'static str] {
        &["ID", "Title", "Assignee", "Due", "Priority", "Status", "Progress"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.assignee.clone(),
            self.due_date.to_string(),
            badge(&self.priority),
            badge(&self.status),
            format!("{}%", self.progress),
        ]
    }
}

impl TableRow for Risk {
    fn headers() -> &'static [&'static str] {
        &[
            "ID",
            "Title",
            "Category",
            "Level",
            "Owner",
            "Probability",
            "Impact",
            "Residual",
            "Status",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.category.to_string(),
            badge(&self.overall_level),
            self.owner.clone(),
            format!("{} ({}/10)", self.probability, self.probability_score),
            format!("{} ({}/10)", self.impact, self.impact_score),
            self.residual_risk.to_string(),
            badge(&self.status),
        ]
    }
}

impl TableRow for Dispute {
    fn headers() -> &'static [&'static str] {
        &["ID", "Title", "Type", "Filed", "Value", "Status", "Priority", "Risk"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.kind.to_string(),
            self.filing_date.to_string(),
            self.estimated_value.to_string(),
            badge(&self.status),
            badge(&self.priority),
            self.risk_score.to_string(),
        ]
    }
}

impl TableRow for Policy {
    fn headers() -> &'static [&'static str] {
        &["ID", "Title", "Category", "Version", "Updated", "Status", "Risk"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.category.to_string(),
            self.version.clone(),
            self.last_updated.to_string(),
            badge(&self.status),
            badge(&self.risk_level),
        ]
    }
}

impl TableRow for Vendor {
    fn headers() -> &'static [&'static str] {
        &["ID", "Firm", "Practice areas", "Spend", "Budget", "Rating", "Relationship"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.practice_areas.join(", "),
            self.total_spend.to_string(),
            self.annual_budget.to_string(),
            format!("{:.1}", self.performance_rating),
            badge(&self.relationship),
        ]
    }
}

impl TableRow for ComplianceItem {
    fn headers() -> &'static [&'static str] {
        &["ID", "Title", "Category", "Due", "Priority", "Status", "Score"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.category.to_string(),
            self.due_date.to_string(),
            badge(&self.priority),
            badge(&self.status),
            self.compliance_score.to_string(),
        ]
    }
}

impl TableRow for ComplianceFramework {
    fn headers() -> &'static [&'static str] {
        &["Framework", "Jurisdiction", "Score", "Status", "Outstanding", "Next review"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.jurisdiction.clone(),
            format!("{}%", self.score),
            badge(&self.status),
            self.outstanding_requirements().to_string(),
            self.next_review.to_string(),
        ]
    }
}

impl TableRow for ComplianceAlert {
    fn headers() -> &'static [&'static str] {
        &["Severity", "Framework", "Title", "Due", "Ack"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            badge(&self.severity),
            self.framework.clone(),
            self.title.clone(),
            self.due_date
                .map(|date| date.to_string())
                .unwrap_or_else(|| "-".to_string()),
            if self.acknowledged { "yes" } else { "no" }.to_string(),
        ]
    }
}
