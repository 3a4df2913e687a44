//! 用户 API 服务入口

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};
use user_api::infrastructure::{config, logger::Logger};
use user_api::{create_router, AppState, UserStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = config::find_config_file();
    let config = config::load_config(config_path.as_deref()).context("加载配置失败")?;

    Logger::init(&config.logging.level);

    match &config_path {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    let store = UserStore::seeded();
    info!("✅ 已初始化 {} 个示例用户", store.len());

    let app = create_router(AppState::new(store), &config.static_files.dir);
    let addr = config.socket_addr()?;

    // 绑定失败直接退出，不重试
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Server failed to start: 无法绑定到 {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("🚀 Server starting on {}", addr);
    info!("📖 Visit http://localhost:{} for API documentation", addr.port());

    axum::serve(listener, app).await.context("服务器运行失败")?;
    Ok(())
}
