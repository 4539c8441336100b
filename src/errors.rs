use std::fmt;

#[derive(Debug, Clone)]
pub enum AffistatsError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Validation(String),
    NotFound(String),
    Serialization(String),
    DateParse(String),
}

impl AffistatsError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            AffistatsError::DatabaseConfig(_) => "E001",
            AffistatsError::DatabaseConnection(_) => "E002",
            AffistatsError::DatabaseOperation(_) => "E003",
            AffistatsError::Validation(_) => "E004",
            AffistatsError::NotFound(_) => "E005",
            AffistatsError::Serialization(_) => "E006",
            AffistatsError::DateParse(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            AffistatsError::DatabaseConfig(_) => "Database Configuration Error",
            AffistatsError::DatabaseConnection(_) => "Database Connection Error",
            AffistatsError::DatabaseOperation(_) => "Database Operation Error",
            AffistatsError::Validation(_) => "Validation Error",
            AffistatsError::NotFound(_) => "Resource Not Found",
            AffistatsError::Serialization(_) => "Serialization Error",
            AffistatsError::DateParse(_) => "Date Parse Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            AffistatsError::DatabaseConfig(msg) => msg,
            AffistatsError::DatabaseConnection(msg) => msg,
            AffistatsError::DatabaseOperation(msg) => msg,
            AffistatsError::Validation(msg) => msg,
            AffistatsError::NotFound(msg) => msg,
            AffistatsError::Serialization(msg) => msg,
            AffistatsError::DateParse(msg) => msg,
        }
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AffistatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AffistatsError {}

// 便捷的构造函数
impl AffistatsError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        AffistatsError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        AffistatsError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        AffistatsError::DatabaseOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        AffistatsError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        AffistatsError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        AffistatsError::Serialization(msg.into())
    }

    pub fn date_parse<T: Into<String>>(msg: T) -> Self {
        AffistatsError::DateParse(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for AffistatsError {
    fn from(err: sea_orm::DbErr) -> Self {
        AffistatsError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for AffistatsError {
    fn from(err: serde_json::Error) -> Self {
        AffistatsError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for AffistatsError {
    fn from(err: chrono::ParseError) -> Self {
        AffistatsError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AffistatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        // 前端按 code 区分错误，别重排枚举
        assert_eq!(AffistatsError::database_config("x").code(), "E001");
        assert_eq!(AffistatsError::database_connection("x").code(), "E002");
        assert_eq!(AffistatsError::database_operation("x").code(), "E003");
        assert_eq!(AffistatsError::validation("x").code(), "E004");
        assert_eq!(AffistatsError::not_found("x").code(), "E005");
        assert_eq!(AffistatsError::serialization("x").code(), "E006");
        assert_eq!(AffistatsError::date_parse("x").code(), "E007");
    }

    #[test]
    fn test_display_uses_simple_format() {
        let err = AffistatsError::validation("limit must be positive");
        assert_eq!(
            err.to_string(),
            "Validation Error: limit must be positive"
        );
    }

    #[test]
    fn test_from_chrono_parse_error() {
        let parse_err = "not-a-date".parse::<chrono::DateTime<chrono::Utc>>();
        let err: AffistatsError = parse_err.unwrap_err().into();
        assert_eq!(err.code(), "E007");
    }
}
