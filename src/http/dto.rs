use crate::model::{Rotation, ScheduleEntry};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Paramètres de `/{items}` et `/api/{items}`.
#[derive(Debug, Default, Deserialize)]
pub struct RotationQuery {
    pub tz: Option<String>,
    pub start: Option<String>,
    pub start_item: Option<String>,
}

/// Paramètres de `/select` (cible du formulaire).
#[derive(Debug, Default, Deserialize)]
pub struct SelectQuery {
    pub items: Option<String>,
    pub tz: Option<String>,
    pub start: Option<String>,
    pub start_item: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScheduleQuery {
    pub tz: Option<String>,
    pub start: Option<String>,
    pub start_item: Option<String>,
    pub days: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RotationResponse {
    pub item: u32,
    pub item_count: u32,
    pub start_date: NaiveDate,
    pub start_item: u32,
    pub date: NaiveDate,
    pub display_date: String,
    pub timezone: String,
}

impl From<&Rotation> for RotationResponse {
    fn from(r: &Rotation) -> Self {
        Self {
            item: r.item,
            item_count: r.config.item_count(),
            start_date: r.config.start_date(),
            start_item: r.config.start_item(),
            date: r.date,
            display_date: r.display_date(),
            timezone: r.timezone_name().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub timezone: String,
    pub entries: Vec<ScheduleEntry>,
}
