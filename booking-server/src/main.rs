use booking_server::{Config, Server, print_banner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 加载 .env (可选)
    dotenvy::dotenv().ok();

    // 2. 加载配置 + 初始化日志
    let config = Config::from_env();
    booking_server::init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    print_banner();
    tracing::info!("🌙 Moon Booking Server starting...");

    // 3. 启动 HTTP 服务器 (内部初始化数据库 + 邮件)
    let server = Server::new(config);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
