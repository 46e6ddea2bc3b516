use super::enums::{classify, Urgency};
use crate::error::TaskError;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Date format used in records and prompts (DD-MM-YY)
pub const DATE_FORMAT: &str = "%d-%m-%y";

/// Working set of tasks keyed by their load-order id (starting at 1)
pub type TaskMap = BTreeMap<usize, Task>;

/// Parse a DD-MM-YY date
pub fn parse_date(value: &str) -> Result<NaiveDate, TaskError> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| TaskError::invalid_date(value))
}

/// Format a date as DD-MM-YY
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Whole days until the end of `end_date`, counting the deadline day itself
pub fn days_until(end_date: NaiveDate, today: NaiveDate) -> i64 {
    (end_date - today).num_days() + 1
}

/// Fields to override when editing a task
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    pub name: Option<String>,
    pub end_date: Option<NaiveDate>,
    pub urgency: Option<Urgency>,
}

impl TaskEdit {
    /// Check if the edit leaves every field unchanged
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.end_date.is_none() && self.urgency.is_none()
    }
}

/// A task with its deadline-derived urgency
///
/// Tasks are values: editing builds a new task rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    urgency: Urgency,
    days_left: i64,
}

impl Task {
    /// Build a task as seen on `today`, tightening `urgency` to its floor
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        urgency: Urgency,
        today: NaiveDate,
    ) -> Result<Self, TaskError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TaskError::EmptyName);
        }

        let days_left = days_until(end_date, today);

        Ok(Self {
            name,
            start_date,
            end_date,
            urgency: classify(days_left, urgency),
            days_left,
        })
    }

    /// Build a task from the raw text fields of a record
    pub fn from_fields(
        name: &str,
        start_date: &str,
        end_date: &str,
        urgency: &str,
        today: NaiveDate,
    ) -> Result<Self, TaskError> {
        let start_date = parse_date(start_date)?;
        let end_date = parse_date(end_date)?;
        let urgency = Urgency::parse_id(urgency)?;
        Self::new(name, start_date, end_date, urgency, today)
    }

    /// Build the replacement task for an edit, keeping the start date
    pub fn edited(&self, edit: &TaskEdit, today: NaiveDate) -> Result<Self, TaskError> {
        Self::new(
            edit.name.clone().unwrap_or_else(|| self.name.clone()),
            self.start_date,
            edit.end_date.unwrap_or(self.end_date),
            edit.urgency.unwrap_or(self.urgency),
            today,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[cfg(test)]
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn urgency(&self) -> Urgency {
        self.urgency
    }

    pub fn days_left(&self) -> i64 {
        self.days_left
    }

    /// Serialize to the record form `name,start,end,urgency`
    pub fn to_record(&self) -> String {
        format!(
            "{},{},{},{}",
            self.name,
            format_date(self.start_date),
            format_date(self.end_date),
            self.urgency.id()
        )
    }
}
