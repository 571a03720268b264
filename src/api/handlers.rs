/// 專案與心情處理器
pub mod projects;
/// 系統資訊處理器
pub mod system;
