//! 实体行与领域值对象的互转

use migration::entities::{click_event, product, promotion_click};

use crate::analytics::{ClickEvent, Product, PromotionClickEvent};

pub fn model_to_click_event(model: click_event::Model) -> ClickEvent {
    ClickEvent {
        product_id: model.product_id,
        clicked_at: model.clicked_at,
        source: model.source,
    }
}

pub fn model_to_promotion_click(model: promotion_click::Model) -> PromotionClickEvent {
    PromotionClickEvent {
        product_id: model.product_id,
        clicked_at: model.clicked_at,
        promotion_area: model.promotion_area,
    }
}

pub fn model_to_product(model: product::Model) -> Product {
    Product {
        id: model.id,
        name: model.name,
        brand: model.brand,
        created_at: model.created_at,
    }
}
