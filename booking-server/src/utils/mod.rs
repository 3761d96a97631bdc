//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型
//! - [`AppResult`] - 应用 Result 别名
//! - 日志、时间、输入校验等工具

pub mod error;
pub mod extract;
pub mod logger;
pub mod result;
pub mod time;
pub mod validation;

pub use error::{AppError, ok, ok_with_email};
pub use extract::{AppJson, AppQuery};
pub use result::AppResult;
