//! Query constraints shared by every page.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::util::format_util::FormatUtil;
use crate::core::util::query_util::{compact, QueryPairs};

/// Optional constraints sent with a metrics/list request.
///
/// Dates are `YYYY-MM-DD`. Empty values never reach the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technician: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

/// Addressable filter field; each one is a re-fetch trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    StartDate,
    EndDate,
    Status,
    Priority,
    Technician,
    Level,
}

impl FilterField {
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
            Self::Status => "status",
            Self::Priority => "priority",
            Self::Technician => "technician",
            Self::Level => "level",
        }
    }
}

impl FilterSet {
    pub fn with_date_range(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start_date: Some(FormatUtil::iso_date(start)),
            end_date: Some(FormatUtil::iso_date(end)),
            ..Self::default()
        }
    }

    /// `[today - days, today]`.
    pub fn last_days(today: NaiveDate, days: i64) -> Self {
        Self::with_date_range(today - Duration::days(days), today)
    }

    pub fn get(&self, field: FilterField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Stores `value`, with the empty string treated as "no filter".
    /// Returns whether the effective value changed.
    pub fn set(&mut self, field: FilterField, value: Option<String>) -> bool {
        let value = value.filter(|v| !v.is_empty());
        let slot = self.slot_mut(field);
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    /// Wire pairs: present, non-empty fields in declaration order.
    pub fn query_pairs(&self) -> QueryPairs {
        compact([
            ("start_date", self.start_date.clone()),
            ("end_date", self.end_date.clone()),
            ("status", self.status.clone()),
            ("priority", self.priority.clone()),
            ("technician", self.technician.clone()),
            ("level", self.level.clone()),
        ])
    }

    fn slot(&self, field: FilterField) -> &Option<String> {
        match field {
            FilterField::StartDate => &self.start_date,
            FilterField::EndDate => &self.end_date,
            FilterField::Status => &self.status,
            FilterField::Priority => &self.priority,
            FilterField::Technician => &self.technician,
            FilterField::Level => &self.level,
        }
    }

    fn slot_mut(&mut self, field: FilterField) -> &mut Option<String> {
        match field {
            FilterField::StartDate => &mut self.start_date,
            FilterField::EndDate => &mut self.end_date,
            FilterField::Status => &mut self.status,
            FilterField::Priority => &mut self.priority,
            FilterField::Technician => &mut self.technician,
            FilterField::Level => &mut self.level,
        }
    }
}
