//! Moon Restaurant Booking Server
//!
//! # 架构概述
//!
//! 本模块是预订服务的主入口，提供以下核心功能：
//!
//! - **HTTP API** (`api`): 公开预订/评价接口 + 管理后台接口
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储 (booking / review 两张表)
//! - **预订生命周期** (`booking`): 状态转换 + 通知指令生成
//! - **时段计算** (`slots`): 按 (日期, 时段, 分店) 聚合占用与余位
//! - **报表** (`reports`): 全量预订集的快照聚合
//! - **邮件** (`mail`): HTML 模板渲染 + SMTP 发送
//!
//! # 模块结构
//!
//! ```text
//! booking-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── booking/       # 预订生命周期管理
//! ├── slots/         # 时段余位计算
//! ├── reports/       # 报表聚合
//! ├── mail/          # 邮件模板与发送
//! ├── db/            # 数据库层
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod booking;
pub mod core;
pub mod db;
pub mod mail;
pub mod reports;
pub mod slots;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger setup
pub use utils::logger::init_logger_with_file;

pub fn print_banner() {
    println!(
        r#"
    __  ___
   /  |/  /___  ____  ____
  / /|_/ / __ \/ __ \/ __ \
 / /  / / /_/ / /_/ / / / /
/_/  /_/\____/\____/_/ /_/
    ____             __   _
   / __ )____  ____ / /__(_)___  ____ _
  / __  / __ \/ __ \ //_/ / __ \/ __ `/
 / /_/ / /_/ / /_/ / ,< / / / / / /_/ /
/_____/\____/\____/_/|_/_/_/ /_/\__, /
                               /____/
    "#
    );
}
