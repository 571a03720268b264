use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::mood::Mood;

/// 專案及其每週心情
///
/// 除已知欄位外的其他描述欄位收進 `extra`，儲存後原樣返回。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// 專案 UUID，新建時可省略
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub archived: bool,
    /// 週次 -> 心情，週次是不透明字串
    #[serde(default)]
    pub moods_by_week: BTreeMap<String, Mood>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_camel_case() {
        let project: Project = serde_json::from_value(json!({
            "name": "Rewrite",
            "archived": true,
            "moodsByWeek": { "2024-W12": { "value": 4 } }
        }))
        .unwrap();

        assert_eq!(project.id, None);
        assert_eq!(project.name, "Rewrite");
        assert!(project.archived);
        assert_eq!(project.moods_by_week["2024-W12"], Mood(json!({ "value": 4 })));
        assert!(project.extra.is_empty());
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        let raw = json!({
            "id": "7d6f0a38-4b8e-4f6e-9a57-6f8f0b8f1c11",
            "name": "Rewrite",
            "archived": false,
            "moodsByWeek": {},
            "description": "kept",
            "color": "red"
        });
        let project: Project = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(project.extra["color"], "red");
        assert_eq!(serde_json::to_value(&project).unwrap(), raw);
    }

    #[test]
    fn test_wrong_type_for_known_field_is_rejected() {
        assert!(serde_json::from_value::<Project>(json!({ "archived": "yes" })).is_err());
    }
}
