use serde::{Deserialize, Serialize};

use super::Record;
use crate::validation::{FieldErrors, Validate, ValidationError};

const INVALID_DATE: &str = "Invalid date: day must be 1-31 and month must be 1-12";

/// One-off exception to the weekly schedule for a calendar date, recurring
/// every year. The day is not checked against the month's length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreOverwrite {
    pub id: String,
    pub day: i32,
    pub month: i32,
    pub is_open: bool,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewStoreOverwrite {
    pub day: i32,
    pub month: i32,
    pub is_open: bool,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreOverwritePatch {
    pub day: Option<i32>,
    pub month: Option<i32>,
    pub is_open: Option<bool>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Date problems get their own message so clients can tell them apart
fn finish(errors: FieldErrors) -> Result<(), ValidationError> {
    let message = if errors.contains("day") || errors.contains("month") {
        INVALID_DATE
    } else {
        "Invalid store overwrite"
    };
    errors.into_result(message)
}

impl Validate for NewStoreOverwrite {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = FieldErrors::new();
        errors.check_range("day", self.day, 1, 31);
        errors.check_range("month", self.month, 1, 12);
        errors.check_clock_time("start_time", &self.start_time);
        errors.check_clock_time("end_time", &self.end_time);
        finish(errors)
    }
}

impl Validate for StoreOverwritePatch {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = FieldErrors::new();
        if let Some(day) = self.day {
            errors.check_range("day", day, 1, 31);
        }
        if let Some(month) = self.month {
            errors.check_range("month", month, 1, 12);
        }
        if let Some(start_time) = &self.start_time {
            errors.check_clock_time("start_time", start_time);
        }
        if let Some(end_time) = &self.end_time {
            errors.check_clock_time("end_time", end_time);
        }
        finish(errors)
    }
}

impl Record for StoreOverwrite {
    type Draft = NewStoreOverwrite;
    type Patch = StoreOverwritePatch;

    const KIND: &'static str = "store overwrite";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: NewStoreOverwrite) -> Self {
        Self {
            id,
            day: draft.day,
            month: draft.month,
            is_open: draft.is_open,
            start_time: draft.start_time,
            end_time: draft.end_time,
        }
    }

    fn merge(&self, patch: StoreOverwritePatch) -> Self {
        Self {
            id: self.id.clone(),
            day: patch.day.unwrap_or(self.day),
            month: patch.month.unwrap_or(self.month),
            is_open: patch.is_open.unwrap_or(self.is_open),
            start_time: patch.start_time.unwrap_or_else(|| self.start_time.clone()),
            end_time: patch.end_time.unwrap_or_else(|| self.end_time.clone()),
        }
    }
}
