//! Redis 鍵佈局
//!
//! - `projects`：有序集合，成員為專案 id，分數為首次建立時間（毫秒）
//! - `project:{id}`：雜湊，專案欄位
//! - `project:{id}:moods`：雜湊，週次 -> 心情 JSON

/// 專案列表鍵
pub const PROJECTS_KEY: &str = "projects";

/// 專案欄位雜湊鍵
pub fn project_key(id: &str) -> String {
    format!("project:{}", id)
}

/// 專案心情雜湊鍵
pub fn moods_key(id: &str) -> String {
    format!("project:{}:moods", id)
}
