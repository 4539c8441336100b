//! 仪表盘聚合核心
//!
//! 六个纯函数，输入是持久层已物化的事件集合和显式的 `now`：
//! - 转化率估算（24 小时窗口启发式）
//! - 收入估算（点击数 × 转化率 × 客单价）
//! - 热门商品排名（按点击数分组取 Top-N）
//! - 最近活动流（双事件流合并倒序）
//! - 周期对比（近 7 天 vs 之前全部）
//! - 新品计数（N 天窗口）
//!
//! 相同输入必然产生相同输出，不修改入参，空集合是正常状态。
//! 调用方负责轮询取数与刷新节奏，这里每次全量重算。

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, Utc};

use super::{
    ActivityItem, ActivityKind, BASELINE_CONVERSION_PERCENT, CONVERSION_WINDOW_HOURS, ClickEvent,
    Product, PromotionClickEvent, RankedProduct, TREND_WINDOW_DAYS,
};
use crate::utils::timeago::time_ago;

/// 估算转化率（百分比，如 5.2 表示 5.2%）
///
/// 启发式：近 24 小时内点击越集中在少数商品上，估值越高。
/// 公式为 `去重商品数 * 基线 / 窗口内点击数`，不是经过验证的统计模型，
/// 没有购买数据时的展示用近似值。
///
/// 空输入或窗口内无点击时返回基线值。
pub fn estimate_conversion_rate(clicks: &[ClickEvent], now: DateTime<Utc>) -> f64 {
    if clicks.is_empty() {
        return BASELINE_CONVERSION_PERCENT;
    }

    let cutoff = now - Duration::hours(CONVERSION_WINDOW_HOURS);
    let recent: Vec<&ClickEvent> = clicks.iter().filter(|c| c.clicked_at > cutoff).collect();

    if recent.is_empty() {
        return BASELINE_CONVERSION_PERCENT;
    }

    // 去重统计被点击的商品数，无归因的点击不计入
    let unique_products: HashSet<&str> = recent
        .iter()
        .filter_map(|c| c.product_id.as_deref())
        .collect();

    (unique_products.len() as f64 * BASELINE_CONVERSION_PERCENT) / recent.len() as f64
}

/// 估算收入
///
/// `总点击数 × 转化率 × 客单价`，输出两位小数的金额字符串。
/// 货币符号是展示层的事，这里不带。
pub fn estimate_revenue(total_clicks: u64, conversion_rate_percent: f64) -> String {
    let revenue =
        total_clicks as f64 * (conversion_rate_percent / 100.0) * super::AVERAGE_ORDER_VALUE;
    format!("{:.2}", revenue)
}

/// 按点击数取热门商品 Top-N
///
/// 无归因（product_id 为空）的点击不参与分组，也不会出现哨兵条目。
/// 点击数相同时保持输入中的首次出现顺序（稳定排序），保证结果可复现。
pub fn top_products_by_clicks(clicks: &[ClickEvent], limit: usize) -> Vec<RankedProduct> {
    if clicks.is_empty() {
        return Vec::new();
    }

    // 按首次出现顺序建组，便于平局时保持确定性
    let mut ranked: Vec<RankedProduct> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for click in clicks {
        let Some(product_id) = click.product_id.as_deref() else {
            continue;
        };
        match index.get(product_id) {
            Some(&i) => ranked[i].click_count += 1,
            None => {
                index.insert(product_id, ranked.len());
                ranked.push(RankedProduct {
                    product_id: product_id.to_string(),
                    click_count: 1,
                });
            }
        }
    }

    // sort_by 是稳定排序，计数相同的条目保持先后顺序
    ranked.sort_by(|a, b| b.click_count.cmp(&a.click_count));
    ranked.truncate(limit);
    ranked
}

/// 合并两个事件流为倒序活动流
///
/// 点击事件标记为 `click` 并携带来源（缺失时用字面量 "unknown"），
/// 推广点击标记为 `promotion` 并携带推广位。与排名不同，这里
/// 不过滤无归因事件——展示层会把它们显示为未知商品。
/// 截断到 `limit` 条后才生成相对时间标签；两个输入都为空时
/// 直接返回空，不会触发时间格式化。
pub fn recent_activity(
    clicks: &[ClickEvent],
    promotions: &[PromotionClickEvent],
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<ActivityItem> {
    let mut tagged: Vec<(ActivityKind, Option<String>, DateTime<Utc>, String)> =
        Vec::with_capacity(clicks.len() + promotions.len());

    for click in clicks {
        tagged.push((
            ActivityKind::Click,
            click.product_id.clone(),
            click.clicked_at,
            click
                .source
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        ));
    }
    for promo in promotions {
        tagged.push((
            ActivityKind::Promotion,
            promo.product_id.clone(),
            promo.clicked_at,
            promo.promotion_area.clone(),
        ));
    }

    // 最近的在前
    tagged.sort_by(|a, b| b.2.cmp(&a.2));
    tagged.truncate(limit);

    tagged
        .into_iter()
        .map(|(kind, product_id, occurred_at, source)| ActivityItem {
            kind,
            product_id,
            occurred_at,
            source,
            time_ago: time_ago(occurred_at, now),
        })
        .collect()
}

/// 近 7 天点击相对之前全部点击的变化百分比（取整，可为负）
///
/// 公式刻意保留为 `recent / prior * 100`：近期 vs 其余全部的比值，
/// 不是常规的环比增量，也不是占总量的百分比，可以超过 100。
/// 之前周期为 0 时固定返回 100（零基线按 100% 增长处理）。
pub fn clicks_percentage_change(clicks: &[ClickEvent], now: DateTime<Utc>) -> i64 {
    if clicks.is_empty() {
        return 0;
    }

    let cutoff = now - Duration::days(TREND_WINDOW_DAYS);
    let recent = clicks.iter().filter(|c| c.clicked_at > cutoff).count();
    let prior = clicks.len() - recent;

    if prior == 0 {
        return 100;
    }

    ((recent as f64 / prior as f64) * 100.0).round() as i64
}

/// 统计窗口内新上架的商品数
pub fn count_created_since(products: &[Product], now: DateTime<Utc>, window_days: u64) -> usize {
    let cutoff = now - Duration::days(window_days as i64);
    products.iter().filter(|p| p.created_at > cutoff).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(product_id: Option<&str>, minutes_ago: i64, now: DateTime<Utc>) -> ClickEvent {
        ClickEvent {
            product_id: product_id.map(String::from),
            clicked_at: now - Duration::minutes(minutes_ago),
            source: None,
        }
    }

    #[test]
    fn test_conversion_rate_empty_is_baseline() {
        let now = Utc::now();
        assert_eq!(estimate_conversion_rate(&[], now), 5.2);
    }

    #[test]
    fn test_conversion_rate_stale_clicks_is_baseline() {
        let now = Utc::now();
        // 全部在 24 小时窗口之外
        let clicks = vec![click(Some("p1"), 25 * 60, now), click(Some("p2"), 48 * 60, now)];
        assert_eq!(estimate_conversion_rate(&clicks, now), 5.2);
    }

    #[test]
    fn test_conversion_rate_single_product_concentration() {
        let now = Utc::now();
        let clicks = vec![
            click(Some("p1"), 10, now),
            click(Some("p1"), 20, now),
            click(Some("p1"), 30, now),
        ];
        let rate = estimate_conversion_rate(&clicks, now);
        assert!((rate - 5.2 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_revenue_zero_clicks() {
        assert_eq!(estimate_revenue(0, 5.2), "0.00");
    }

    #[test]
    fn test_revenue_formula() {
        // 100 * 0.052 * 24.99 = 129.948
        assert_eq!(estimate_revenue(100, 5.2), "129.95");
    }

    #[test]
    fn test_top_products_counts_and_order() {
        let now = Utc::now();
        let clicks = vec![
            click(Some("a"), 1, now),
            click(Some("a"), 2, now),
            click(Some("b"), 3, now),
            click(Some("a"), 4, now),
            click(Some("c"), 5, now),
            click(Some("c"), 6, now),
        ];
        let top = top_products_by_clicks(&clicks, 5);
        assert_eq!(top.len(), 3);
        assert_eq!((top[0].product_id.as_str(), top[0].click_count), ("a", 3));
        assert_eq!((top[1].product_id.as_str(), top[1].click_count), ("c", 2));
        assert_eq!((top[2].product_id.as_str(), top[2].click_count), ("b", 1));
    }

    #[test]
    fn test_top_products_skips_unattributed() {
        let now = Utc::now();
        let clicks = vec![click(None, 1, now), click(None, 2, now), click(Some("a"), 3, now)];
        let top = top_products_by_clicks(&clicks, 5);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].product_id, "a");
    }

    #[test]
    fn test_percentage_change_formula() {
        let now = Utc::now();
        // 10 条点击，3 条在 7 天内，prior = 7 -> round(3/7*100) = 43
        let mut clicks: Vec<ClickEvent> = (0..3).map(|i| click(Some("p"), i + 1, now)).collect();
        clicks.extend((0..7).map(|i| click(Some("p"), 8 * 24 * 60 + i, now)));
        assert_eq!(clicks_percentage_change(&clicks, now), 43);
    }

    #[test]
    fn test_percentage_change_zero_prior_is_100() {
        let now = Utc::now();
        let clicks = vec![click(Some("p"), 10, now), click(Some("p"), 20, now)];
        assert_eq!(clicks_percentage_change(&clicks, now), 100);
    }

    #[test]
    fn test_count_created_since() {
        let now = Utc::now();
        let product = |days_ago: i64| Product {
            id: format!("p{}", days_ago),
            name: "Test".to_string(),
            brand: None,
            created_at: now - Duration::days(days_ago),
        };
        let products = vec![product(1), product(29), product(31)];
        assert_eq!(count_created_since(&products, now, 30), 2);
        assert_eq!(count_created_since(&[], now, 30), 0);
    }
}
