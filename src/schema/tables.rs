//! Embedded schema tables
//!
//! Event metadata and per-region adapters as they appear in the regional
//! result files. Region labels are matched byte-for-byte against the raw
//! data, so spacing and letter case (`10M` vs `10m`) are significant.
//!
//! Row order must follow the declaration order of `EventKey` and `Region`;
//! lookups index these slices by discriminant.

use super::{Direction, EventKey, Region};

/// Static metadata for one canonical event
#[derive(Debug)]
pub struct EventInfo {
    pub event: EventKey,
    pub key: &'static str,
    pub display_name: &'static str,
    pub unit: &'static str,
    pub direction: Direction,
    /// Plausible recorded range, used by outlier filtering
    pub bounds: (f64, f64),
}

/// Field names and event labels used by one region's result files
#[derive(Debug)]
pub struct RegionSchema {
    pub region: Region,
    pub name: &'static str,
    pub display_name: &'static str,
    /// Data file stem (`<stem>.json`); spellings follow the published files
    pub file_stem: &'static str,
    /// Candidate gender fields, first non-empty wins
    pub gender_fields: &'static [&'static str],
    pub event_field: &'static str,
    pub score_field: &'static str,
    pub labels: &'static [(EventKey, &'static str)],
}

const GENDER_FIELDS: &[&str] = &["성별", "gender", "Gender"];
const EVENT_FIELD: &str = "종목";
const SCORE_FIELD: &str = "기록";

// ============================================================================
// EVENTS
// ============================================================================

pub static EVENT_TABLE: &[EventInfo] = &[
    EventInfo { event: EventKey::StandingLongJump, key: "standing_long_jump", display_name: "제자리멀리뛰기", unit: "cm", direction: Direction::HigherIsBetter, bounds: (50.0, 350.0) },
    EventInfo { event: EventKey::VerticalJump, key: "vertical_jump", display_name: "서전트점프", unit: "cm", direction: Direction::HigherIsBetter, bounds: (20.0, 120.0) },
    EventInfo { event: EventKey::GripStrength, key: "grip_strength", display_name: "배근력", unit: "kg", direction: Direction::HigherIsBetter, bounds: (20.0, 300.0) },
    EventInfo { event: EventKey::SitUp, key: "sit_up", display_name: "윗몸일으키기", unit: "회", direction: Direction::HigherIsBetter, bounds: (1.0, 200.0) },
    EventInfo { event: EventKey::Dash10m, key: "10m_dash", display_name: "10m 달리기", unit: "초", direction: Direction::LowerIsBetter, bounds: (5.0, 20.0) },
    EventInfo { event: EventKey::Dash20m, key: "20m_dash", display_name: "20m 달리기", unit: "초", direction: Direction::LowerIsBetter, bounds: (10.0, 30.0) },
    EventInfo { event: EventKey::LongRun, key: "long_run", display_name: "오래달리기", unit: "초", direction: Direction::LowerIsBetter, bounds: (100.0, 1200.0) },
    EventInfo { event: EventKey::MedicineBallThrow, key: "medicine_ball_throw", display_name: "메디신볼던지기", unit: "m", direction: Direction::HigherIsBetter, bounds: (1.0, 20.0) },
    EventInfo { event: EventKey::FrontBend, key: "front_bend", display_name: "앉아윗몸앞으로굽히기", unit: "cm", direction: Direction::HigherIsBetter, bounds: (-20.0, 50.0) },
];

// ============================================================================
// REGIONS
// ============================================================================

pub static REGION_TABLE: &[RegionSchema] = &[
    RegionSchema {
        region: Region::Seoul,
        name: "seoul",
        display_name: "서울",
        file_stem: "seoul",
        gender_fields: GENDER_FIELDS,
        event_field: EVENT_FIELD,
        score_field: SCORE_FIELD,
        labels: &[
            (EventKey::StandingLongJump, "제자리멀리뛰기"),
            (EventKey::SitUp, "앉아윗몸앞으로굽히기"),
            (EventKey::Dash10m, "10m왕복달리기"),
            (EventKey::VerticalJump, "서전트점프"),
            (EventKey::Dash20m, "20m왕복달리기"),
            (EventKey::GripStrength, "배근력"),
            (EventKey::MedicineBallThrow, "메디신볼던지기"),
        ],
    },
    RegionSchema {
        region: Region::Incheon,
        name: "incheon",
        display_name: "인천",
        file_stem: "inchoen",
        gender_fields: GENDER_FIELDS,
        event_field: EVENT_FIELD,
        score_field: SCORE_FIELD,
        labels: &[
            (EventKey::StandingLongJump, "제자리멀리뛰기"),
            (EventKey::SitUp, "윗몸일으키기"),
            (EventKey::Dash10m, "10m 왕복달리기"),
            (EventKey::GripStrength, "배근력"),
            (EventKey::MedicineBallThrow, "메디신볼던지기"),
            (EventKey::FrontBend, "좌전굴"),
        ],
    },
    RegionSchema {
        region: Region::Jeju,
        name: "jeju",
        display_name: "제주",
        file_stem: "jeju",
        gender_fields: GENDER_FIELDS,
        event_field: EVENT_FIELD,
        score_field: SCORE_FIELD,
        labels: &[
            (EventKey::StandingLongJump, "제자리멀리뛰기"),
            (EventKey::SitUp, "윗몸일으키기"),
            (EventKey::Dash20m, "20m달리기"),
            (EventKey::GripStrength, "배근력"),
        ],
    },
    RegionSchema {
        region: Region::Chungnam,
        name: "chungnam",
        display_name: "충남",
        file_stem: "chungnam",
        gender_fields: GENDER_FIELDS,
        event_field: EVENT_FIELD,
        score_field: SCORE_FIELD,
        labels: &[
            (EventKey::StandingLongJump, "제자리멀리뛰기"),
            (EventKey::VerticalJump, "서전트점프"),
            (EventKey::GripStrength, "배근력"),
            (EventKey::Dash10m, "10M왕복달리기"),
            (EventKey::MedicineBallThrow, "메디신볼던지기"),
            (EventKey::SitUp, "앉아윗몸앞으로굽히기"),
        ],
    },
    RegionSchema {
        region: Region::Chungbuk,
        name: "chungbuk",
        display_name: "충북",
        file_stem: "chungbuk",
        gender_fields: GENDER_FIELDS,
        event_field: EVENT_FIELD,
        score_field: SCORE_FIELD,
        labels: &[
            (EventKey::StandingLongJump, "제자리멀리뛰기"),
            (EventKey::GripStrength, "배근력"),
            (EventKey::Dash10m, "10m왕복달리기"),
            (EventKey::MedicineBallThrow, "메디신볼던지기"),
            (EventKey::SitUp, "앉아윗몸앞으로굽히기"),
        ],
    },
    RegionSchema {
        region: Region::Daejeon,
        name: "daejeon",
        display_name: "대전",
        file_stem: "deajeon",
        gender_fields: GENDER_FIELDS,
        event_field: EVENT_FIELD,
        score_field: SCORE_FIELD,
        labels: &[
            (EventKey::StandingLongJump, "제자리멀리뛰기"),
            (EventKey::SitUp, "싯업"),
            (EventKey::FrontBend, "앉아윗몸앞으로굽히기"),
            (EventKey::Dash10m, "10M왕복달리기"),
            (EventKey::MedicineBallThrow, "메디신볼던지기"),
        ],
    },
    RegionSchema {
        region: Region::Gwangju,
        name: "gwangju",
        display_name: "광주",
        file_stem: "kwangju",
        gender_fields: GENDER_FIELDS,
        event_field: EVENT_FIELD,
        score_field: SCORE_FIELD,
        labels: &[
            (EventKey::Dash10m, "10M 왕복 기록"),
            (EventKey::StandingLongJump, "제자리멀리뛰기 기록"),
            (EventKey::GripStrength, "배근력 기록"),
            (EventKey::FrontBend, "좌전굴 기록"),
            (EventKey::MedicineBallThrow, "메디신볼던지기 기록"),
        ],
    },
];
