//! 写入路径
//!
//! 站点的点击上报最终落在这里；集成测试也用它铺数据。

use sea_orm::{ActiveValue::Set, EntityTrait};

use migration::entities::{click_event, product, promotion_click};

use crate::analytics::{ClickEvent, Product, PromotionClickEvent};
use crate::errors::Result;

impl super::SeaOrmStorage {
    /// 记录一次出站联盟点击
    pub async fn record_click(&self, event: &ClickEvent) -> Result<()> {
        let model = click_event::ActiveModel {
            product_id: Set(event.product_id.clone()),
            clicked_at: Set(event.clicked_at),
            source: Set(event.source.clone()),
            ..Default::default()
        };

        click_event::Entity::insert(model).exec(&self.db).await?;
        Ok(())
    }

    /// 记录一次推广位点击
    pub async fn record_promotion_click(&self, event: &PromotionClickEvent) -> Result<()> {
        let model = promotion_click::ActiveModel {
            product_id: Set(event.product_id.clone()),
            clicked_at: Set(event.clicked_at),
            promotion_area: Set(event.promotion_area.clone()),
            ..Default::default()
        };

        promotion_click::Entity::insert(model)
            .exec(&self.db)
            .await?;
        Ok(())
    }

    /// 写入一条商品目录记录
    pub async fn insert_product(&self, item: &Product) -> Result<()> {
        let model = product::ActiveModel {
            id: Set(item.id.clone()),
            name: Set(item.name.clone()),
            brand: Set(item.brand.clone()),
            created_at: Set(item.created_at),
        };

        product::Entity::insert(model).exec(&self.db).await?;
        Ok(())
    }
}
