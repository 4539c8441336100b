//! 初始表迁移
//!
//! 创建仪表盘统计所依赖的三张基础表：
//! - products：商品目录（联表展示用）
//! - click_events：出站联盟链接点击
//! - promotion_clicks：站内推广位点击

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建 products 表
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Products::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Products::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Products::Brand).string_len(255).null())
                    .col(
                        ColumnDef::new(Products::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建 click_events 表
        manager
            .create_table(
                Table::create()
                    .table(ClickEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClickEvents::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ClickEvents::ProductId).string_len(64).null())
                    .col(
                        ColumnDef::new(ClickEvents::ClickedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClickEvents::Source).string_len(255).null())
                    .to_owned(),
            )
            .await?;

        // 创建 promotion_clicks 表
        manager
            .create_table(
                Table::create()
                    .table(PromotionClicks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PromotionClicks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PromotionClicks::ProductId)
                            .string_len(64)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(PromotionClicks::ClickedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PromotionClicks::PromotionArea)
                            .string_len(255)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建 clicked_at 索引（用于时间范围查询）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_click_events_clicked_at")
                    .table(ClickEvents::Table)
                    .col(ClickEvents::ClickedAt)
                    .to_owned(),
            )
            .await?;

        // 创建 product_id 索引（用于按商品分组）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_click_events_product_id")
                    .table(ClickEvents::Table)
                    .col(ClickEvents::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_promotion_clicks_clicked_at")
                    .table(PromotionClicks::Table)
                    .col(PromotionClicks::ClickedAt)
                    .to_owned(),
            )
            .await?;

        // 创建 created_at 索引（用于新品统计）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_products_created_at")
                    .table(Products::Table)
                    .col(Products::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 删除索引
        manager
            .drop_index(Index::drop().name("idx_products_created_at").to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_promotion_clicks_clicked_at")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name("idx_click_events_product_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_click_events_clicked_at").to_owned())
            .await?;

        // 删除表
        manager
            .drop_table(Table::drop().table(PromotionClicks::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ClickEvents::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Products {
    #[sea_orm(iden = "products")]
    Table,
    Id,
    Name,
    Brand,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ClickEvents {
    #[sea_orm(iden = "click_events")]
    Table,
    Id,
    ProductId,
    ClickedAt,
    Source,
}

#[derive(DeriveIden)]
enum PromotionClicks {
    #[sea_orm(iden = "promotion_clicks")]
    Table,
    Id,
    ProductId,
    ClickedAt,
    PromotionArea,
}
