//! 仪表盘统计领域模型
//!
//! 定义聚合层消费的事件/商品值对象、派生出的展示类型，
//! 以及编码既有产品决策的启发式常量。

pub mod aggregates;

pub use aggregates::{
    clicks_percentage_change, count_created_since, estimate_conversion_rate, estimate_revenue,
    recent_activity, top_products_by_clicks,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::AsRefStr;
use ts_rs::TS;

// ============ 启发式常量 ============
//
// 这些数字是产品层面的既定策略，不是推导出来的统计模型，
// 调整前先跟运营对齐。

/// 转化率基线（百分比）。没有真实购买数据时的兜底估计值。
pub const BASELINE_CONVERSION_PERCENT: f64 = 5.2;

/// 假定客单价（美元），用于估算收入
pub const AVERAGE_ORDER_VALUE: f64 = 24.99;

/// 转化率估算的时间窗口（小时）
pub const CONVERSION_WINDOW_HOURS: i64 = 24;

/// 点击趋势对比的时间窗口（天）
pub const TREND_WINDOW_DAYS: i64 = 7;

/// 新品统计的默认时间窗口（天）
pub const NEW_PRODUCT_WINDOW_DAYS: u64 = 30;

// ============ 输入值对象 ============

/// 出站联盟链接点击
///
/// 持久层的只读行，聚合函数不会修改它。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    /// 可为空：无法归因到商品的点击
    pub product_id: Option<String>,
    /// 点击时间戳
    pub clicked_at: DateTime<Utc>,
    /// 流量来源 (utm_source param, ref:{domain}, or direct)
    pub source: Option<String>,
}

/// 站内推广位点击（banner、对比表等），区别于出站联盟点击
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionClickEvent {
    pub product_id: Option<String>,
    pub clicked_at: DateTime<Utc>,
    /// 推广位标识 (hero banner, sidebar, comparison table...)
    pub promotion_area: String,
}

/// 商品目录条目
///
/// 聚合层只用到 `id` 和 `created_at`；`name`/`brand` 是联表展示元数据。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============ 派生展示类型 ============

/// 活动流条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, AsRefStr)]
#[ts(export, export_to = "../admin-panel/src/services/types.generated.ts")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ActivityKind {
    /// 出站联盟点击
    Click,
    /// 站内推广位点击
    Promotion,
}

/// 活动流条目（每次聚合调用重新生成，无独立生命周期）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../admin-panel/src/services/types.generated.ts")]
pub struct ActivityItem {
    pub kind: ActivityKind,
    pub product_id: Option<String>,
    pub occurred_at: DateTime<Utc>,
    /// 点击事件的流量来源（缺失时为 "unknown"），推广点击的推广位标识
    pub source: String,
    /// 人类可读的相对时间标签
    pub time_ago: String,
}

/// 热门商品排名条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../admin-panel/src/services/types.generated.ts")]
pub struct RankedProduct {
    pub product_id: String,
    pub click_count: u64,
}

/// 仪表盘总览
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../admin-panel/src/services/types.generated.ts")]
pub struct DashboardOverview {
    pub total_clicks: u64,
    /// 近 7 天点击相对之前全部点击的比值（百分比，可为负、可超 100）
    pub clicks_change_percent: i64,
    /// 估算转化率（百分比）
    pub conversion_rate: f64,
    /// 估算收入，两位小数，不带货币符号
    pub estimated_revenue: String,
    /// 统计窗口内新上架的商品数
    pub new_products: usize,
    pub top_products: Vec<RankedProduct>,
    pub recent_activity: Vec<ActivityItem>,
}
