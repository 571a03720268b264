use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 某一週的心情紀錄
///
/// 內容由客戶端自由決定，任何 JSON 值都原樣保存並原樣返回。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mood(pub Value);
