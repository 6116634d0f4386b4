use serde::{Deserialize, Serialize};

use super::{nullable, Record};
use crate::validation::{FieldErrors, Validate, ValidationError};

/// Weekly recurring opening-hours rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreTime {
    pub id: String,
    /// 0-6
    pub day_of_week: i32,
    pub is_open: bool,
    /// "HH:MM", null on closed days
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewStoreTime {
    pub day_of_week: i32,
    pub is_open: bool,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreTimePatch {
    pub day_of_week: Option<i32>,
    pub is_open: Option<bool>,
    #[serde(default, deserialize_with = "nullable")]
    pub start_time: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub end_time: Option<Option<String>>,
}

fn check_day_of_week(errors: &mut FieldErrors, day_of_week: i32) {
    errors.check_range("day_of_week", day_of_week, 0, 6);
}

impl Validate for NewStoreTime {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = FieldErrors::new();
        check_day_of_week(&mut errors, self.day_of_week);
        errors.check_optional_clock_time("start_time", self.start_time.as_deref());
        errors.check_optional_clock_time("end_time", self.end_time.as_deref());
        errors.into_result("Invalid store time")
    }
}

impl Validate for StoreTimePatch {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = FieldErrors::new();
        if let Some(day_of_week) = self.day_of_week {
            check_day_of_week(&mut errors, day_of_week);
        }
        if let Some(start_time) = &self.start_time {
            errors.check_optional_clock_time("start_time", start_time.as_deref());
        }
        if let Some(end_time) = &self.end_time {
            errors.check_optional_clock_time("end_time", end_time.as_deref());
        }
        errors.into_result("Invalid store time")
    }
}

impl Record for StoreTime {
    type Draft = NewStoreTime;
    type Patch = StoreTimePatch;

    const KIND: &'static str = "store time";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: NewStoreTime) -> Self {
        Self {
            id,
            day_of_week: draft.day_of_week,
            is_open: draft.is_open,
            start_time: draft.start_time,
            end_time: draft.end_time,
        }
    }

    fn merge(&self, patch: StoreTimePatch) -> Self {
        Self {
            id: self.id.clone(),
            day_of_week: patch.day_of_week.unwrap_or(self.day_of_week),
            is_open: patch.is_open.unwrap_or(self.is_open),
            start_time: patch.start_time.unwrap_or_else(|| self.start_time.clone()),
            end_time: patch.end_time.unwrap_or_else(|| self.end_time.clone()),
        }
    }
}
