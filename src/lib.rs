// 模組定義
pub mod api;
pub mod config;
pub mod models;
pub mod redis;
pub mod storage;
