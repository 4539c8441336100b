//! Dashboard service layer
//!
//! Fetches raw rows from the configured `EventStore` and assembles the
//! aggregate view rendered by the admin panel. All figures are recomputed
//! from a full snapshot on every call; the caller decides the polling
//! cadence.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::analytics::{
    ActivityItem, DashboardOverview, RankedProduct, clicks_percentage_change, count_created_since,
    estimate_conversion_rate, estimate_revenue, recent_activity, top_products_by_clicks,
};
use crate::errors::Result;
use crate::storage::EventStore;

/// 展示条数上限的硬顶，防止误配置把整表灌给前端
const MAX_WIDGET_LIMIT: usize = 50;

/// Dashboard 服务
pub struct DashboardService {
    store: Arc<dyn EventStore>,
}

impl DashboardService {
    /// 创建 DashboardService 实例
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// 组装仪表盘总览（以当前时刻为基准）
    pub async fn overview(&self) -> Result<DashboardOverview> {
        self.overview_at(Utc::now()).await
    }

    /// 组装仪表盘总览（显式传入基准时刻，测试用固定时间注入）
    pub async fn overview_at(&self, now: DateTime<Utc>) -> Result<DashboardOverview> {
        info!("Dashboard: assembling overview at {}", now);

        let config = crate::config::get_config();

        // 并发拉取三个集合
        let (clicks, promotions, products) = tokio::try_join!(
            self.store.fetch_click_events(),
            self.store.fetch_promotion_clicks(),
            self.store.fetch_products(),
        )?;

        let total_clicks = clicks.len() as u64;
        let conversion_rate = estimate_conversion_rate(&clicks, now);

        let overview = DashboardOverview {
            total_clicks,
            clicks_change_percent: clicks_percentage_change(&clicks, now),
            conversion_rate,
            estimated_revenue: estimate_revenue(total_clicks, conversion_rate),
            new_products: count_created_since(
                &products,
                now,
                config.analytics.new_product_window_days,
            ),
            top_products: top_products_by_clicks(
                &clicks,
                config.analytics.top_products_limit.min(MAX_WIDGET_LIMIT),
            ),
            recent_activity: recent_activity(
                &clicks,
                &promotions,
                now,
                config.analytics.recent_activity_limit.min(MAX_WIDGET_LIMIT),
            ),
        };

        debug!(
            "Dashboard: overview assembled, {} clicks, {} promotion clicks, {} products, {} feed items",
            total_clicks,
            promotions.len(),
            products.len(),
            overview.recent_activity.len()
        );

        Ok(overview)
    }

    /// 获取热门商品排名（部分刷新用）
    pub async fn top_products(&self, limit: usize) -> Result<Vec<RankedProduct>> {
        info!("Dashboard: get_top_products limit={}", limit);

        let clicks = self.store.fetch_click_events().await?;
        let top = top_products_by_clicks(&clicks, limit.min(MAX_WIDGET_LIMIT));

        debug!("Dashboard: get_top_products returned {} products", top.len());

        Ok(top)
    }

    /// 获取最近活动流（部分刷新用）
    pub async fn recent_activity(&self, limit: usize) -> Result<Vec<ActivityItem>> {
        self.recent_activity_at(Utc::now(), limit).await
    }

    /// 获取最近活动流（显式基准时刻）
    pub async fn recent_activity_at(
        &self,
        now: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<ActivityItem>> {
        info!("Dashboard: get_recent_activity limit={}", limit);

        let (clicks, promotions) = tokio::try_join!(
            self.store.fetch_click_events(),
            self.store.fetch_promotion_clicks(),
        )?;

        let feed = recent_activity(&clicks, &promotions, now, limit.min(MAX_WIDGET_LIMIT));

        debug!("Dashboard: get_recent_activity returned {} items", feed.len());

        Ok(feed)
    }

    /// 获取估算转化率（部分刷新用）
    pub async fn conversion_rate(&self) -> Result<f64> {
        let clicks = self.store.fetch_click_events().await?;
        Ok(estimate_conversion_rate(&clicks, Utc::now()))
    }
}
