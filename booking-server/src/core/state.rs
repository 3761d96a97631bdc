use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::mail::{Mailer, SmtpConfig};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc / Surreal 内部引用计数实现浅拷贝，每个请求克隆成本极低。
/// 除数据库外不持有任何跨请求可变状态。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | mailer | Option<Arc<Mailer>> | SMTP 发送服务 (未配置时为 None) |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// 邮件发送服务；`SMTP_HOST` 未设置时禁用，
    /// 状态转换照常生效，响应中 `emailSent=false`
    pub mailer: Option<Arc<Mailer>>,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>, mailer: Option<Arc<Mailer>>) -> Self {
        Self { config, db, mailer }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构
    /// 2. 数据库 (work_dir/database/moon.db)
    /// 3. 邮件服务 (SMTP_HOST 未设置时跳过)
    ///
    /// # Panics
    ///
    /// 数据库初始化失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        let db_dir = config.database_dir();
        std::fs::create_dir_all(&db_dir).expect("Failed to create database directory");

        let db = crate::db::connect(&db_dir.join("moon.db"))
            .await
            .expect("Failed to initialize database");

        let mailer = match SmtpConfig::from_env() {
            Some(smtp) => match Mailer::new(smtp) {
                Ok(m) => Some(Arc::new(m)),
                Err(e) => {
                    tracing::warn!("SMTP configured but mailer init failed: {}", e);
                    None
                }
            },
            None => {
                tracing::info!("SMTP_HOST not set, customer notifications disabled");
                None
            }
        };

        Self::new(config.clone(), db, mailer)
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
