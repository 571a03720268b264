use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::time::Duration;
use thiserror::Error;
use tracing::error;

use crate::storage::StorageError;

/// 請求處理錯誤
///
/// 所有錯誤一律回應 500，本文為錯誤的原始文字。
#[derive(Error, Debug)]
pub enum ApiError {
    /// 無法讀取請求本文
    #[error(transparent)]
    Body(#[from] BytesRejection),

    /// JSON 解碼失敗
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// 專案 id 不是有效的 UUID
    #[error(transparent)]
    InvalidId(#[from] uuid::Error),

    /// 請求處理超過時限
    #[error("請求處理超時 ({}秒)", .0.as_secs())]
    Timeout(Duration),

    /// 儲存層錯誤
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("請求處理失敗: {}", self);

        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
