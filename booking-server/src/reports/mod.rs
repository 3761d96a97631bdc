//! 报表聚合
//!
//! 全量预订集的快照聚合，每次请求重新计算 (无缓存/增量)。

pub mod aggregator;

pub use aggregator::{ReportPolicy, build_report, dashboard_counts};
