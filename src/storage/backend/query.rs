//! 仪表盘取数查询
//!
//! 聚合层每次全量重算，这里只负责把三张表的行物化成领域值对象，
//! 按时间倒序返回。

use async_trait::async_trait;
use sea_orm::{EntityTrait, QueryOrder};

use migration::entities::{click_event, product, promotion_click};

use super::converters;
use crate::analytics::{ClickEvent, Product, PromotionClickEvent};
use crate::errors::Result;
use crate::storage::EventStore;

#[async_trait]
impl EventStore for super::SeaOrmStorage {
    async fn fetch_click_events(&self) -> Result<Vec<ClickEvent>> {
        let rows = click_event::Entity::find()
            .order_by_desc(click_event::Column::ClickedAt)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(converters::model_to_click_event)
            .collect())
    }

    async fn fetch_promotion_clicks(&self) -> Result<Vec<PromotionClickEvent>> {
        let rows = promotion_click::Entity::find()
            .order_by_desc(promotion_click::Column::ClickedAt)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(converters::model_to_promotion_click)
            .collect())
    }

    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let rows = product::Entity::find()
            .order_by_desc(product::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(converters::model_to_product).collect())
    }
}
