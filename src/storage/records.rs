use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

use super::error::{StorageError, StorageResult};

/// 專案雜湊中的欄位名
pub const FIELD_NAME: &str = "name";
pub const FIELD_ARCHIVED: &str = "archived";
/// 其他描述欄位，整體存為 JSON 物件
pub const FIELD_EXTRA: &str = "extra";

/// 儲存中的專案欄位
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectRecord {
    pub name: String,
    pub archived: bool,
    pub extra: Map<String, Value>,
}

impl ProjectRecord {
    /// 轉換為雜湊欄位
    pub fn to_fields(&self) -> StorageResult<Vec<(&'static str, String)>> {
        Ok(vec![
            (FIELD_NAME, self.name.clone()),
            (FIELD_ARCHIVED, self.archived.to_string()),
            (FIELD_EXTRA, serde_json::to_string(&self.extra)?),
        ])
    }

    /// 從雜湊欄位還原，`key` 僅用於錯誤訊息
    pub fn from_fields(key: &str, fields: &HashMap<String, String>) -> StorageResult<Self> {
        let corrupt = |reason: String| StorageError::Corrupt {
            key: key.to_string(),
            reason,
        };

        let archived = match fields.get(FIELD_ARCHIVED).map(String::as_str) {
            None | Some("false") => false,
            Some("true") => true,
            Some(other) => return Err(corrupt(format!("archived 欄位值無效: {}", other))),
        };
        let extra = match fields.get(FIELD_EXTRA) {
            None => Map::new(),
            Some(raw) => serde_json::from_str(raw).map_err(|e| corrupt(e.to_string()))?,
        };

        Ok(Self {
            name: fields.get(FIELD_NAME).cloned().unwrap_or_default(),
            archived,
            extra,
        })
    }
}

/// 儲存中的單週心情，任意 JSON 值，以字串存入雜湊
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoodRecord(pub Value);

impl MoodRecord {
    pub fn to_json(&self) -> StorageResult<String> {
        Ok(serde_json::to_string(&self.0)?)
    }

    pub fn from_json(key: &str, raw: &str) -> StorageResult<Self> {
        serde_json::from_str(raw)
            .map(MoodRecord)
            .map_err(|e| StorageError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }
}

/// 週次 -> 心情，週次為不透明字串
pub type MoodsByWeek = BTreeMap<String, MoodRecord>;

/// 從心情雜湊還原
pub fn moods_from_fields(key: &str, fields: &HashMap<String, String>) -> StorageResult<MoodsByWeek> {
    fields
        .iter()
        .map(|(week, raw)| Ok((week.clone(), MoodRecord::from_json(key, raw)?)))
        .collect()
}

/// 一個完整的已儲存專案
#[derive(Debug, Clone, PartialEq)]
pub struct StoredProject {
    pub id: String,
    pub project: ProjectRecord,
    pub moods: MoodsByWeek,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_project_fields() {
        let mut record = ProjectRecord { name: "Garden".to_string(), archived: true, ..Default::default() };
        record.extra.insert("color".to_string(), json!("green"));
        let stored: HashMap<String, String> = record
            .to_fields()
            .unwrap()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();

        assert_eq!(ProjectRecord::from_fields("project:x", &stored).unwrap(), record);
    }

    #[test]
    fn test_project_missing_fields_default() {
        let record = ProjectRecord::from_fields("project:x", &fields(&[("name", "Solo")])).unwrap();
        assert_eq!(record, ProjectRecord { name: "Solo".to_string(), ..Default::default() });
    }

    #[test]
    fn test_project_bad_archived_flag() {
        let result = ProjectRecord::from_fields("project:x", &fields(&[("archived", "yes")]));
        assert_matches!(result, Err(StorageError::Corrupt { key, .. }) if key == "project:x");
    }

    #[test]
    fn test_project_extra_must_be_object() {
        let result = ProjectRecord::from_fields("project:x", &fields(&[("extra", "[1]")]));
        assert_matches!(result, Err(StorageError::Corrupt { .. }));
    }

    #[test]
    fn test_moods_from_fields() {
        let moods = moods_from_fields(
            "project:x:moods",
            &fields(&[("7", r#"{"value":3,"comment":"tired"}"#), ("2024-W03", "\"meh\"")]),
        )
        .unwrap();

        assert_eq!(moods.len(), 2);
        assert_eq!(moods["7"], MoodRecord(json!({ "value": 3, "comment": "tired" })));
        assert_eq!(moods["2024-W03"], MoodRecord(json!("meh")));
    }

    #[test]
    fn test_moods_bad_json() {
        let result = moods_from_fields("project:x:moods", &fields(&[("1", "{oops")]));
        assert_matches!(result, Err(StorageError::Corrupt { .. }));
    }
}
