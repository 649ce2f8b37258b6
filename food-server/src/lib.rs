//! Food Server - 在线点餐服务
//!
//! # 架构概述
//!
//! 浏览餐厅、查看菜单、下单和跟踪订单的小型 REST 服务：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储，含内存回退
//! - **订单生命周期** (`orders`): 状态机和金额计算
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! food-server/src/
//! ├── core/          # 配置、状态、错误
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 持久化网关、实体存储、种子数据
//! ├── orders/        # 订单生命周期管理
//! └── utils/         # 错误映射、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use orders::OrdersManager;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv, 日志)
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // .env 文件可选；不存在时忽略
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(Some(&log_level), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ______                __
   / ____/___  ____  ____/ /
  / /_  / __ \/ __ \/ __  /
 / __/ / /_/ / /_/ / /_/ /
/_/    \____/\____/\__,_/
    ______
   / ____/  ______  ________  __________
  / __/ | |/_/ __ \/ ___/ _ \/ ___/ ___/
 / /____>  </ /_/ / /  /  __(__  |__  )
/_____/_/|_/ .___/_/   \___/____/____/
          /_/
    "#
    );
}
