/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | DB_PATH | data/food.db | 嵌入式数据库路径 |
/// | DB_NAMESPACE | food | SurrealDB namespace |
/// | DB_NAME | delivery | SurrealDB database |
/// | PUBLIC_DIR | public | 静态资源目录 |
/// | REQUIRE_DATABASE | false | 数据库打不开时是否直接退出 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// 日志相关的 LOG_LEVEL / LOG_DIR 由 [`crate::setup_environment`] 读取。
///
/// # 示例
///
/// ```ignore
/// DB_PATH=/data/food.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 嵌入式数据库路径
    pub db_path: String,
    /// SurrealDB namespace
    pub db_namespace: String,
    /// SurrealDB database
    pub db_name: String,
    /// 静态资源目录
    pub public_dir: String,
    /// true 时数据库打开失败直接退出，而不是回退到内存存储
    pub require_database: bool,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            db_path: std::env::var("DB_PATH").unwrap_or_else(|_| "data/food.db".into()),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or_else(|_| "food".into()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "delivery".into()),
            public_dir: std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".into()),
            require_database: std::env::var("REQUIRE_DATABASE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(db_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.db_path = db_path.into();
        config.http_port = http_port;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
