//! 線上結構與儲存紀錄之間的欄位對應

use uuid::Uuid;

use crate::models::{Mood, Project};

use super::records::{MoodRecord, MoodsByWeek, ProjectRecord};

/// 由儲存紀錄組裝對外的專案
pub fn to_project(id: &str, record: ProjectRecord, moods: MoodsByWeek) -> Project {
    Project {
        id: Some(id.to_string()),
        name: record.name,
        archived: record.archived,
        moods_by_week: moods
            .into_iter()
            .map(|(week, mood)| (week, Mood(mood.0)))
            .collect(),
        extra: record.extra,
    }
}

/// 拆分為專案紀錄與心情紀錄，忽略 `id`
pub fn to_project_record(project: &Project) -> (ProjectRecord, MoodsByWeek) {
    let record = ProjectRecord {
        name: project.name.clone(),
        archived: project.archived,
        extra: project.extra.clone(),
    };
    let moods = project
        .moods_by_week
        .iter()
        .map(|(week, mood)| (week.clone(), to_mood_record(mood.clone())))
        .collect();

    (record, moods)
}

pub fn to_mood_record(mood: Mood) -> MoodRecord {
    MoodRecord(mood.0)
}

/// 沿用給定的 UUID，未給定或為空字串時產生新的 v4 UUID
pub fn id_or_new_uuid(id: Option<&str>) -> Result<Uuid, uuid::Error> {
    match id.map(str::trim) {
        None | Some("") => Ok(Uuid::new_v4()),
        Some(raw) => Uuid::parse_str(raw),
    }
}
