//! 时段余位计算
//!
//! 按 (日期, 时段, 分店) 聚合预订占用，纯函数，无存储状态。

pub mod calculator;

pub use calculator::{BranchCapacity, compute_slots};
