//! 内存后端
//!
//! 测试夹具和本地开发用，不做持久化。

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::analytics::{ClickEvent, Product, PromotionClickEvent};
use crate::errors::Result;
use crate::storage::EventStore;

#[derive(Default)]
pub struct MemoryStore {
    clicks: RwLock<Vec<ClickEvent>>,
    promotions: RwLock<Vec<PromotionClickEvent>>,
    products: RwLock<Vec<Product>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record_click(&self, event: ClickEvent) {
        self.clicks.write().await.push(event);
    }

    pub async fn record_promotion_click(&self, event: PromotionClickEvent) {
        self.promotions.write().await.push(event);
    }

    pub async fn insert_product(&self, item: Product) {
        self.products.write().await.push(item);
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn fetch_click_events(&self) -> Result<Vec<ClickEvent>> {
        let mut rows = self.clicks.read().await.clone();
        rows.sort_by(|a, b| b.clicked_at.cmp(&a.clicked_at));
        Ok(rows)
    }

    async fn fetch_promotion_clicks(&self) -> Result<Vec<PromotionClickEvent>> {
        let mut rows = self.promotions.read().await.clone();
        rows.sort_by(|a, b| b.clicked_at.cmp(&a.clicked_at));
        Ok(rows)
    }

    async fn fetch_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }
}
