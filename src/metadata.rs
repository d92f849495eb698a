use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanMetadata {
    pub plan_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Default for PlanMetadata {
    fn default() -> Self {
        Self {
            plan_name: "Horner Classic".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap_or_default(),
        }
    }
}

impl PlanMetadata {
    pub fn new(plan_name: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            plan_name: plan_name.into(),
            start_date,
            end_date,
        }
    }

    /// `YYYYMMDD-YYYYMMDD`, used in every export file name.
    pub fn date_range_token(&self) -> String {
        format!(
            "{}-{}",
            self.start_date.format("%Y%m%d"),
            self.end_date.format("%Y%m%d")
        )
    }

    /// File prefix for the raw export, e.g. `horner_classic`.
    pub fn raw_prefix(&self) -> String {
        slug(&self.plan_name, '_')
    }

    /// File prefix for the formatted exports, e.g. `horner-classic-formatted`.
    pub fn formatted_prefix(&self) -> String {
        format!("{}-formatted", slug(&self.plan_name, '-'))
    }

    /// Heading prefix for month sections, e.g. `Horner Classic Bible Reading Plan`.
    pub fn section_title(&self) -> String {
        format!("{} Bible Reading Plan", self.plan_name)
    }
}

fn slug(name: &str, separator: char) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join(&separator.to_string())
}
