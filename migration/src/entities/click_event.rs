//! Click event entity for outbound affiliate-link clicks

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "click_events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// 可为空：无法归因到商品的点击
    pub product_id: Option<String>,
    pub clicked_at: DateTimeUtc,
    /// 流量来源 (utm_source param, ref:{domain}, or direct)
    pub source: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
