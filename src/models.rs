//! 線上 JSON 結構
//!
//! 對外 API 收發的專案與心情資料形狀，欄位使用 camelCase。

pub mod mood;
pub mod project;

pub use mood::Mood;
pub use project::Project;
