use std::sync::Arc;

use async_trait::async_trait;

use crate::analytics::{ClickEvent, Product, PromotionClickEvent};
use crate::errors::Result;

pub mod backend;
pub mod memory;

pub use backend::SeaOrmStorage;
pub use memory::MemoryStore;

/// 持久层读取接口
///
/// 聚合层对数据来源没有要求：SQL 表、文档库、测试夹具，
/// 能产出 `analytics` 里的值对象即可。服务层通过这个 trait
/// 取全量快照，聚合函数在快照上全量重算。
#[async_trait]
pub trait EventStore: Send + Sync {
    /// 读取全部出站联盟点击，按时间倒序
    async fn fetch_click_events(&self) -> Result<Vec<ClickEvent>>;

    /// 读取全部推广位点击，按时间倒序
    async fn fetch_promotion_clicks(&self) -> Result<Vec<PromotionClickEvent>>;

    /// 读取商品目录
    async fn fetch_products(&self) -> Result<Vec<Product>>;
}

pub struct StorageFactory;

impl StorageFactory {
    pub async fn create() -> Result<Arc<SeaOrmStorage>> {
        let config = crate::config::get_config();
        let database_url = &config.database.url;

        // 从 URL 自动推断数据库类型
        let backend_type = backend::infer_backend_from_url(database_url)?;

        let storage = backend::SeaOrmStorage::new(database_url, &backend_type).await?;
        Ok(Arc::new(storage))
    }
}
