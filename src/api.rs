// api.rs - API服務模組，宣告子模組
//
// 對外提供專案與每週心情的 JSON REST 接口。

/// REST API 伺服器
pub mod rest;
/// API路由定義
pub mod routes;
/// API處理器模組
pub mod handlers;
/// 請求錯誤與回應
pub mod error;
/// 處理器共享狀態
pub mod state;

pub use error::ApiError;
pub use rest::RestApi;
pub use state::AppState;
