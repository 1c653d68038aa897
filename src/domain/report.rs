use chrono::{DateTime, Utc};

use crate::domain::{check::CheckOutcome, domain_name::DomainName};

const REPORT_HEADER: &str = "*Domain Status Report*";
const EMPTY_REPORT_LINE: &str = "No domains configured.";

/// One `(domain, outcome)` pair of a report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub domain: DomainName,
    pub outcome: CheckOutcome,
}

/// A single report run: ordered per-domain outcomes plus the moment the
/// run was assembled. Never persisted; rendered fresh on every trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<ReportLine>,
    generated_at: DateTime<Utc>,
}

impl Report {
    pub fn new(lines: Vec<ReportLine>) -> Self {
        Self {
            lines,
            generated_at: Utc::now(),
        }
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    pub fn render(&self) -> String {
        let mut rendered = vec![
            REPORT_HEADER.to_owned(),
            format!(
                "_Generated at {}_",
                self.generated_at.format("%Y-%m-%d %H:%M UTC")
            ),
            String::new(),
        ];

        if self.lines.is_empty() {
            rendered.push(EMPTY_REPORT_LINE.to_owned());
        } else {
            rendered.extend(self.lines.iter().map(render_line));
        }

        rendered.join("\n")
    }
}

fn render_line(line: &ReportLine) -> String {
    let status = line.outcome.status;
    match &line.outcome.detail {
        Some(detail) => format!(
            "{}: {} {} ({detail})",
            line.domain,
            status.symbol(),
            status.as_text()
        ),
        None => format!("{}: {} {}", line.domain, status.symbol(), status.as_text()),
    }
}
