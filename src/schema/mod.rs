//! Schema Registry
//!
//! Canonical identifiers for events, regions and genders, plus the static
//! mapping from (region, event) to the label that region uses in its raw
//! result files.
//!
//! A region that has no label for an event does not administer it; callers
//! treat that as "zero samples", never as an error.

pub mod tables;

use crate::error::RankError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub use tables::{EventInfo, RegionSchema};

/// Whether a larger raw score is the better performance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

/// Canonical physical test event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum EventKey {
    #[serde(rename = "standing_long_jump")]
    StandingLongJump,
    #[serde(rename = "vertical_jump")]
    VerticalJump,
    #[serde(rename = "grip_strength")]
    GripStrength,
    #[serde(rename = "sit_up")]
    SitUp,
    #[serde(rename = "10m_dash")]
    Dash10m,
    #[serde(rename = "20m_dash")]
    Dash20m,
    #[serde(rename = "long_run")]
    LongRun,
    #[serde(rename = "medicine_ball_throw")]
    MedicineBallThrow,
    #[serde(rename = "front_bend")]
    FrontBend,
}

impl EventKey {
    pub const ALL: [EventKey; 9] = [
        EventKey::StandingLongJump,
        EventKey::VerticalJump,
        EventKey::GripStrength,
        EventKey::SitUp,
        EventKey::Dash10m,
        EventKey::Dash20m,
        EventKey::LongRun,
        EventKey::MedicineBallThrow,
        EventKey::FrontBend,
    ];

    pub fn info(self) -> &'static EventInfo {
        &tables::EVENT_TABLE[self as usize]
    }

    /// Canonical key string, e.g. `10m_dash`
    pub fn key(self) -> &'static str {
        self.info().key
    }

    pub fn display_name(self) -> &'static str {
        self.info().display_name
    }

    pub fn unit(self) -> &'static str {
        self.info().unit
    }

    /// Time-based events (dashes, long run) are lower-is-better
    pub fn direction(self) -> Direction {
        self.info().direction
    }

    pub fn plausible_range(self) -> (f64, f64) {
        self.info().bounds
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for EventKey {
    type Err = RankError;

    /// Accepts the canonical key or the Korean display name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        tables::EVENT_TABLE
            .iter()
            .find(|info| info.key.eq_ignore_ascii_case(needle) || info.display_name == needle)
            .map(|info| info.event)
            .ok_or_else(|| RankError::UnknownEvent(s.to_string()))
    }
}

/// Administrative region contributing result files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Seoul,
    Incheon,
    Jeju,
    Chungnam,
    Chungbuk,
    Daejeon,
    Gwangju,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Region::Seoul,
        Region::Incheon,
        Region::Jeju,
        Region::Chungnam,
        Region::Chungbuk,
        Region::Daejeon,
        Region::Gwangju,
    ];

    pub fn schema(self) -> &'static RegionSchema {
        &tables::REGION_TABLE[self as usize]
    }

    pub fn display_name(self) -> &'static str {
        self.schema().display_name
    }

    pub fn file_stem(self) -> &'static str {
        self.schema().file_stem
    }

    /// Native label for `event`, or `None` when the region does not run it
    pub fn label_for(self, event: EventKey) -> Option<&'static str> {
        self.schema()
            .labels
            .iter()
            .find(|(key, _)| *key == event)
            .map(|(_, label)| *label)
    }

    /// Reverse lookup of a native label
    pub fn event_for_label(self, label: &str) -> Option<EventKey> {
        self.schema()
            .labels
            .iter()
            .find(|(_, native)| *native == label)
            .map(|(key, _)| *key)
    }

    pub fn administers(self, event: EventKey) -> bool {
        self.label_for(event).is_some()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.schema().name)
    }
}

impl FromStr for Region {
    type Err = RankError;

    /// Accepts the region name, its data file stem or its Korean name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        tables::REGION_TABLE
            .iter()
            .find(|schema| {
                schema.name.eq_ignore_ascii_case(needle)
                    || schema.file_stem.eq_ignore_ascii_case(needle)
                    || schema.display_name == needle
            })
            .map(|schema| schema.region)
            .ok_or_else(|| RankError::UnknownRegion(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Exact label used in the raw result files
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "남",
            Gender::Female => "여",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "남" | "남자" | "m" | "male" => Ok(Gender::Male),
            "여" | "여자" | "f" | "female" => Ok(Gender::Female),
            _ => Err(RankError::UnknownGender(s.to_string())),
        }
    }
}

/// Native label for `event` in `region`
pub fn label_for(region: Region, event: EventKey) -> Option<&'static str> {
    region.label_for(event)
}

pub fn direction_of(event: EventKey) -> Direction {
    event.direction()
}
