//! Redis連接模組
//!
//! 提供基於 deadpool-redis 的連接池，每個請求從池中取出一條連接，
//! 用完後隨連接被丟棄自動歸還。

pub mod pool;

#[cfg(test)]
pub mod test_config;

pub use pool::*;
