//! Rendering of computed results for output.

mod format;
mod text;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::{dataset::Dataset, quiz::{QuizAnswers, QuizOptions}, stats::Summary};

pub use format::NumberFormat;

/// Blank lines between the summary and the quiz block.
const QUIZ_SEPARATOR: &str = "\n\n\n\n\n";

/// Output flavor for rendered results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything the tool reports about a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz: Option<QuizAnswers>,
}

impl Report {
    /// Compute the summary and all quiz answers.
    pub fn compute(dataset: &Dataset, top_counties: usize, options: &QuizOptions) -> Result<Self> {
        Ok(Self {
            summary: Some(Summary::compute(dataset, top_counties)?),
            quiz: Some(QuizAnswers::compute(dataset, options)?),
        })
    }

    pub fn summary_only(summary: Summary) -> Self { Self { summary: Some(summary), quiz: None } }

    pub fn quiz_only(quiz: QuizAnswers) -> Self { Self { summary: None, quiz: Some(quiz) } }

    /// Human-readable sentences, one per line.
    pub fn to_text(&self, fmt: &NumberFormat) -> Result<String> {
        let mut out = String::new();
        if let Some(summary) = &self.summary {
            text::write_summary(&mut out, summary, fmt)?;
        }
        if let Some(quiz) = &self.quiz {
            if self.summary.is_some() { out.push_str(QUIZ_SEPARATOR) }
            text::write_quiz(&mut out, quiz, fmt)?;
        }
        Ok(out)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("[report] Failed to serialize report to JSON")
    }

    pub fn render(&self, format: OutputFormat, fmt: &NumberFormat) -> Result<String> {
        match format {
            OutputFormat::Text => self.to_text(fmt),
            OutputFormat::Json => self.to_json(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{quiz::WindowBounds, types::{County, State}};

    fn dataset() -> Dataset {
        let state = |name: &str, population: u64, land: f64, n_ec_votes: u32| State {
            name: name.into(),
            area_sq_mi: land + 10.0,
            land_area_sq_mi: land,
            water_area_sq_mi: 10.0,
            population,
            n_rep_votes: n_ec_votes.saturating_sub(2),
            n_senate_votes: if n_ec_votes > 0 { 2 } else { 0 },
            n_ec_votes,
        };
        let county = |name: &str, population: u64, area_sq_mi: f64| County {
            name: name.into(), county_seat: format!("{name} Seat"), population, area_sq_mi,
        };
        Dataset::new(
            vec![
                state("Alpha", 1_500_000, 4_000.0, 4),
                state("Beta", 2_500_000, 9_000.0, 5),
                state("Gamma", 30_000_000, 150_000.0, 40),
                state("Isles", 100_000, 50.0, 0),
            ],
            vec![
                county("North", 10_000_000, 4_000.0),
                county("South", 3_000_000, 4_500.0),
                county("East", 2_000_000, 900.0),
                county("West", 1_000_000, 20_000.0),
                county("Bay", 500_000, 50.0),
            ],
        ).unwrap()
    }

    #[test]
    fn text_report_contains_summary_and_quiz() {
        let options = QuizOptions { include_dc: false, window: WindowBounds::new(3_000_000, 5_000_000).unwrap() };
        let report = Report::compute(&dataset(), 3, &options).unwrap();
        let text = report.to_text(&NumberFormat::en_us()).unwrap();

        assert!(text.contains("The largest state or territory by area is Gamma and the smallest one is Isles."));
        assert!(text.contains("The largest CA county by area is West and the smallest one is Bay."));
        assert!(text.contains("The total US population is 34,100,000."));
        assert!(text.contains("This means that there are 100,000 people who live in US territories."));
        assert!(text.contains("The total number of Electoral College votes is 49."));
        assert!(text.contains("largest 3 counties (North, South, East) in CA is 15,000,000 which is 90.91% of CA"));
        assert!(text.contains("1. 2 (states with population below 3,500,000"));
        assert!(text.contains("2. 2 (states with land area at most 20000 sq mi, the area of West)"));
        assert!(text.contains("3. ec_sum = 9, Gamma ec votes: 40, ec_sum - Gamma ec votes = -31"));
    }

    #[test]
    fn quiz_block_keeps_heading_and_states_dc_scope() {
        let options = QuizOptions { include_dc: true, ..QuizOptions::default() };
        let report = Report::compute(&dataset(), 3, &options).unwrap();
        let text = report.to_text(&NumberFormat::en_us()).unwrap();

        assert!(text.contains("of the US population.\n\n\n\n\n\n-----Quiz 8-----\nDistrict of Columbia is counted as a state.\n1. "));

        let quiz_only = Report::quiz_only(report.quiz.unwrap()).to_text(&NumberFormat::en_us()).unwrap();
        assert!(quiz_only.starts_with("-----Quiz 8-----\n"));
    }

    #[test]
    fn dc_scope_line_when_excluded() {
        let report = Report::compute(&dataset(), 3, &QuizOptions::default()).unwrap();
        let text = report.to_text(&NumberFormat::en_us()).unwrap();
        assert!(text.contains("-----Quiz 8-----\nDistrict of Columbia is not counted as a state.\n"));
    }

    #[test]
    fn json_report_omits_missing_sections() {
        let summary = Summary::compute(&dataset(), 3).unwrap();
        let json = Report::summary_only(summary).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["total_population"], 34_100_000);
        assert!(value.get("quiz").is_none());
    }
}
