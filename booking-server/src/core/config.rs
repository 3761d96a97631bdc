use shared::models::Branch;

use crate::slots::BranchCapacity;

/// 服务器配置 - 预订服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/moon/booking | 工作目录 (数据库、日志) |
/// | HTTP_PORT | 5000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志目录 (未设置则仅 stdout) |
/// | FRONTEND_URL | http://localhost:3000 | 前端地址 (邮件内链接) |
/// | SLOT_CAPACITY | 50 | 每分店每时段默认容量 |
/// | SLOT_CAPACITY_NARAN | SLOT_CAPACITY | Naran 分店容量 |
/// | SLOT_CAPACITY_BESAR | SLOT_CAPACITY | Besar 分店容量 |
/// | SLOT_LOW_WATER_MARK | 5 | 余位 <= 此值时标记 "limited" |
/// | SLOT_WINDOW_DAYS | 30 | 时段查询默认窗口天数 |
/// | TIME_SLOTS | 见下 | 逗号分隔的时段列表 (声明顺序即排序顺序) |
/// | REVENUE_PER_GUEST | 25.0 | 报表营收估算系数 (每客) |
/// | RECENT_ACTIVITY_LIMIT | 20 | 报表最近动态条数 |
/// | UPCOMING_LIMIT | 10 | 报表即将到来预订条数 |
/// | REVIEW_PAGE_SIZE | 50 | 评价列表条数上限 |
/// | NOTIFY_ON_CLOSE | false | 关闭预订时是否发送客户通知 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/moon HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、日志等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 日志目录 (可选)
    pub log_dir: Option<String>,
    /// 前端地址，用于拒绝邮件中的 "Make New Booking" 链接
    pub frontend_url: String,

    // === 时段策略 ===
    /// Naran 分店每时段容量
    pub capacity_naran: u32,
    /// Besar 分店每时段容量
    pub capacity_besar: u32,
    /// 余位低水位线: 0 < available <= 此值 时标记 "limited"
    pub slot_low_water_mark: u32,
    /// 时段查询默认窗口天数
    pub slot_window_days: u32,
    /// 时段标签，按展示顺序排列
    pub time_labels: Vec<String>,

    // === 报表策略 ===
    /// 营收估算系数 (展示用估算，非财务数据)
    pub revenue_per_guest: f64,
    /// 最近动态条数
    pub recent_activity_limit: usize,
    /// 即将到来预订条数
    pub upcoming_limit: usize,

    // === 其他策略 ===
    /// 评价列表条数上限
    pub review_page_size: usize,
    /// 关闭预订时是否通知客户 (原系统行为不一致，显式开关)
    pub notify_on_close: bool,
}

/// 默认时段列表 (与原预订表单一致)
pub const DEFAULT_TIME_SLOTS: [&str; 9] = [
    "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "5:00 PM", "6:00 PM", "7:00 PM", "8:00 PM",
    "9:00 PM",
];

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let default_capacity: u32 = env_parse("SLOT_CAPACITY", 50);

        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/moon/booking".into()),
            http_port: env_parse("HTTP_PORT", 5000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),

            capacity_naran: env_parse("SLOT_CAPACITY_NARAN", default_capacity),
            capacity_besar: env_parse("SLOT_CAPACITY_BESAR", default_capacity),
            slot_low_water_mark: env_parse("SLOT_LOW_WATER_MARK", 5),
            slot_window_days: env_parse("SLOT_WINDOW_DAYS", 30),
            time_labels: std::env::var("TIME_SLOTS")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(|_| DEFAULT_TIME_SLOTS.iter().map(|s| s.to_string()).collect()),

            revenue_per_guest: env_parse("REVENUE_PER_GUEST", 25.0),
            recent_activity_limit: env_parse("RECENT_ACTIVITY_LIMIT", 20),
            upcoming_limit: env_parse("UPCOMING_LIMIT", 10),

            review_page_size: env_parse("REVIEW_PAGE_SIZE", 50),
            notify_on_close: env_parse("NOTIFY_ON_CLOSE", false),
        }
    }

    /// 每分店容量，按 [`Branch::ALL`] 顺序
    pub fn branch_capacities(&self) -> Vec<BranchCapacity> {
        vec![
            BranchCapacity {
                branch: Branch::Naran,
                capacity: self.capacity_naran,
            },
            BranchCapacity {
                branch: Branch::Besar,
                capacity: self.capacity_besar,
            },
        ]
    }

    /// 数据库目录 (work_dir/database)
    pub fn database_dir(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.work_dir).join("database")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
