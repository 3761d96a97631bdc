//! 邮件模块
//!
//! - [`templates`] - 预订通知 HTML 模板 (纯字符串渲染)
//! - [`Mailer`] - SMTP 发送服务 (lettre)

pub mod mailer;
pub mod templates;

pub use mailer::{MailError, Mailer, SmtpConfig};
