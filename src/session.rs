// src/session.rs
//! Session shapes flowing through the pipeline:
//! list page → `SessionStub`, detail page → `SessionDetail`, merged → `SessionRecord`.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Day {
    Day1,
    Day2,
}

impl Day {
    pub const ALL: [Day; 2] = [Day::Day1, Day::Day2];

    /// Value of the `?day=` query parameter.
    pub fn query(self) -> &'static str {
        match self { Day::Day1 => "1", Day::Day2 => "2" }
    }

    /// Label written to the `day` column.
    pub fn as_str(self) -> &'static str {
        match self { Day::Day1 => "day1", Day::Day2 => "day2" }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimal record read off a list page. `title` and `speaker` are never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionStub {
    pub title: String,
    pub speaker: String,
    pub day: Day,
    pub track: Option<String>,
    pub detail_url: Option<String>,
}

/// Supplementary fields from a detail page. All optional; `Default` is "nothing found".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionDetail {
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub speaker_affiliation: Option<String>,
    pub speaker_profile: Option<String>,
    pub speaker_icon_url: Option<String>,
    pub speaker_github: Option<String>,
    pub speaker_twitter: Option<String>,
}

impl SessionDetail {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One output row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionRecord {
    pub title: String,
    pub description: Option<String>,
    pub room: Option<String>,
    pub day: Day,
    pub track: Option<String>,
    pub thumbnail_url: Option<String>,
    pub speaker: String,
    pub speaker_affiliation: Option<String>,
    pub speaker_profile: Option<String>,
    pub speaker_github: Option<String>,
    pub speaker_twitter: Option<String>,
    pub speaker_icon_url: Option<String>,
    pub detail_url: Option<String>,
}
