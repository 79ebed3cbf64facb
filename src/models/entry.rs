use super::status::Status;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// Timestamp format used in spreadsheets and listings.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Entries are never aggregated, every row counts once.
pub const FREQUENCY: &str = "1";

/// Header shared by the append file and the export file.
pub const HEADERS: [&str; 7] = [
    "Timestamp",
    "Name",
    "Wellness Activity",
    "Me-Time Activity",
    "Off-screen Time (min)",
    "Frequency",
    "Status",
];

/// The four user-editable fields, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Activity,
    MeTime,
    ScreenTime,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Activity,
        Field::MeTime,
        Field::ScreenTime,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Activity => "Mental Wellness Activity",
            Field::MeTime => "Me-Time Activity",
            Field::ScreenTime => "Screen-free time",
        }
    }

    /// Helper: convert a session keyword (case-insensitive)
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "name" => Some(Field::Name),
            "activity" => Some(Field::Activity),
            "metime" | "me-time" => Some(Field::MeTime),
            "minutes" | "screen" | "screentime" => Some(Field::ScreenTime),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unvalidated form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub name: String,
    pub activity: String,
    pub me_time: String,
    pub screen_time: String,
}

impl RawEntry {
    pub fn new(
        name: impl Into<String>,
        activity: impl Into<String>,
        me_time: impl Into<String>,
        screen_time: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            activity: activity.into(),
            me_time: me_time.into(),
            screen_time: screen_time.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Activity => &self.activity,
            Field::MeTime => &self.me_time,
            Field::ScreenTime => &self.screen_time,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Activity => &mut self.activity,
            Field::MeTime => &mut self.me_time,
            Field::ScreenTime => &mut self.screen_time,
        }
    }
}

/// One logged record. Built only by the entry log, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WellnessEntry {
    #[serde(rename = "Timestamp", serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Wellness Activity")]
    pub activity: String,
    #[serde(rename = "Me-Time Activity")]
    pub me_time: String,
    #[serde(rename = "Off-screen Time (min)")]
    pub off_screen_minutes: u32,
    #[serde(rename = "Frequency")]
    pub frequency: &'static str,
    #[serde(rename = "Status")]
    pub status: Status,
}

fn serialize_timestamp<S: serde::Serializer>(
    ts: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&ts.format(TIMESTAMP_FORMAT))
}

impl WellnessEntry {
    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Spreadsheet row, same order as [`HEADERS`].
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp_str(),
            self.name.clone(),
            self.activity.clone(),
            self.me_time.clone(),
            self.off_screen_minutes.to_string(),
            self.frequency.to_string(),
            self.status.label().to_string(),
        ]
    }

    /// "Name | Activity | MeTime | N mins"
    pub fn display_line(&self) -> String {
        format!(
            "{} | {} | {} | {} mins",
            self.name, self.activity, self.me_time, self.off_screen_minutes
        )
    }
}
