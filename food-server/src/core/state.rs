use std::sync::Arc;

use crate::core::{Config, ServerError};
use crate::db::{BackendKind, Gateway, Stores, seed};
use crate::orders::OrdersManager;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求处理器拿到的都是同一组存储句柄。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | backend | 当前存储后端 (surrealdb \| memory) |
/// | stores | 实体存储句柄 |
/// | orders | 订单生命周期管理器 |
/// | gateway | 持久化网关 (用于关闭连接) |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub backend: BackendKind,
    pub stores: Stores,
    pub orders: OrdersManager,
    pub gateway: Arc<Gateway>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 1. 连接嵌入式数据库；失败时根据 `require_database` 决定退出
    ///    还是回退到内存存储
    /// 2. 初始化餐厅种子数据 (仅当集合为空)
    /// 3. 构造订单管理器
    pub async fn initialize(config: &Config) -> Result<Self, ServerError> {
        let gateway = match Gateway::connect(config).await {
            Ok(gateway) => gateway,
            Err(err) if !config.require_database => {
                tracing::warn!(
                    error = %err,
                    "Database unreachable; falling back to in-memory storage (data will not survive restarts)"
                );
                Gateway::ephemeral()
            }
            Err(err) => return Err(err.into()),
        };

        Self::from_gateway(config, gateway).await
    }

    /// 构造仅内存后端的状态 (测试用)
    pub async fn ephemeral(config: &Config) -> Result<Self, ServerError> {
        Self::from_gateway(config, Gateway::ephemeral()).await
    }

    async fn from_gateway(config: &Config, gateway: Gateway) -> Result<Self, ServerError> {
        let stores = gateway.stores()?;

        seed::initialize_sample_data(stores.restaurants.as_ref()).await?;

        let orders = OrdersManager::new(stores.orders.clone());

        Ok(Self {
            config: config.clone(),
            backend: gateway.kind(),
            stores,
            orders,
            gateway: Arc::new(gateway),
        })
    }
}
