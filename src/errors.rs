//! 统一错误处理模块
//!
//! 每个错误变体带有错误代码、类型名称与所属类别。
//! 类别决定批量操作里该错误是记为跳过还是失败。

use std::fmt;

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 数据库、缓存、序列化等基础设施故障
    Infrastructure,
    /// 调用者不拥有评委分配，或不是当选评奖人
    Authorization,
    /// 输入不合法，整个操作被拒绝
    Validation,
    /// 引用的资源不存在
    NotFound,
    /// 与现有状态冲突
    Conflict,
}

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() / error_type() / category() / message()
/// - 便捷构造函数
macro_rules! define_judging_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal, $category:ident)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum JudgingError {
            $($variant(String),)*
        }

        impl JudgingError {
            pub fn code(&self) -> &'static str {
                match self {
                    $(JudgingError::$variant(_) => $code,)*
                }
            }

            pub fn error_type(&self) -> &'static str {
                match self {
                    $(JudgingError::$variant(_) => $type_name,)*
                }
            }

            pub fn category(&self) -> ErrorCategory {
                match self {
                    $(JudgingError::$variant(_) => ErrorCategory::$category,)*
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    $(JudgingError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl JudgingError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        JudgingError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_judging_errors! {
    CacheConnection("E001", "Cache Connection Error", Infrastructure),
    CachePluginNotFound("E002", "Cache Plugin Not Found", Infrastructure),
    DatabaseConfig("E003", "Database Configuration Error", Infrastructure),
    DatabaseConnection("E004", "Database Connection Error", Infrastructure),
    DatabaseOperation("E005", "Database Operation Error", Infrastructure),
    // 通知渠道投递失败，由调度器实现返回
    NotificationDelivery("E006", "Notification Delivery Error", Infrastructure),
    Validation("E007", "Validation Error", Validation),
    NotFound("E008", "Resource Not Found", NotFound),
    Serialization("E009", "Serialization Error", Infrastructure),
    Authorization("E010", "Authorization Error", Authorization),
    // 条目已过可编辑期，属于校验失败
    EditWindowClosed("E011", "Edit Window Closed", Validation),
    Conflict("E012", "Conflict", Conflict),
}

impl JudgingError {
    /// 批量操作中应记为跳过而不是失败
    pub fn is_skippable(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for JudgingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for JudgingError {}

impl From<sea_orm::DbErr> for JudgingError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::RecordNotFound(msg) => JudgingError::NotFound(msg),
            other => JudgingError::DatabaseOperation(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for JudgingError {
    fn from(err: serde_json::Error) -> Self {
        JudgingError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, JudgingError>;
