use serde::{Deserialize, Serialize};

/// 静态配置（从 TOML 加载，启动时使用）
///
/// 包含基础设施配置：
/// - database: 数据库连接配置
/// - logging: 日志配置
/// - analytics: 仪表盘展示配置
///
/// 注意：转化率基线、客单价等启发式常量属于产品策略，
/// 定义在 `crate::analytics` 中，不在这里配置。
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > affistats.toml > 默认值
    /// ENV 前缀：AFFISTATS，分隔符：__
    /// 示例：AFFISTATS__DATABASE__URL=postgres://...
    pub fn load() -> Self {
        use config::{Config, Environment, File};

        let path = "affistats.toml";

        let builder = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖，前缀 AFFISTATS，分隔符 __
            .add_source(
                Environment::with_prefix("AFFISTATS")
                    .separator("__")
                    .try_parsing(true),
            );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<StaticConfig>() {
                Ok(config) => {
                    if std::path::Path::new(path).exists() {
                        eprintln!("[INFO] Configuration loaded from: {}", path);
                    }
                    config
                }
                Err(e) => {
                    eprintln!("[ERROR] Failed to deserialize config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[ERROR] Failed to build config: {}", e);
                Self::default()
            }
        }
    }
}

/// 数据库连接配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_database_pool_size")]
    pub pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            pool_size: default_database_pool_size(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

/// 仪表盘展示配置
///
/// 只有展示用的条数上限和新品统计窗口是运维可调的。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default = "default_top_products_limit")]
    pub top_products_limit: usize,
    #[serde(default = "default_recent_activity_limit")]
    pub recent_activity_limit: usize,
    #[serde(default = "default_new_product_window_days")]
    pub new_product_window_days: u64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_products_limit: default_top_products_limit(),
            recent_activity_limit: default_recent_activity_limit(),
            new_product_window_days: default_new_product_window_days(),
        }
    }
}

// ============================================================
// Default value functions for static config
// ============================================================

fn default_database_url() -> String {
    "affistats.db".to_string()
}

fn default_database_pool_size() -> u32 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    7
}

fn default_enable_rotation() -> bool {
    true
}

fn default_top_products_limit() -> usize {
    5
}

fn default_recent_activity_limit() -> usize {
    5
}

fn default_new_product_window_days() -> u64 {
    crate::analytics::NEW_PRODUCT_WINDOW_DAYS
}
