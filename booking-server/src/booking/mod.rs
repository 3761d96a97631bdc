//! 预订生命周期管理
//!
//! 状态转换校验 + 通知指令生成；不执行持久化，不发送邮件。

pub mod lifecycle;

pub use lifecycle::{
    BookingAction, LifecycleError, LifecyclePolicy, Notification, Transition, apply,
};
