//! 统一的环境变量管理
//!
//! 提供类型安全、可验证的环境变量访问。只有日志相关的开关可以通过环境变量调整，
//! 远程资源地址和模板内容不可配置。

use std::env;
use std::fmt;

use tracing::Level;

/// 环境变量解析错误
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                if let Some(default) = Self::DEFAULT {
                    Ok(default)
                } else {
                    Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: "Required environment variable not set".to_string(),
                    })
                }
            }
        }
    }

    fn get_or_default(default: T) -> T {
        Self::get().unwrap_or(default)
    }
}

/// 日志级别
pub struct LogLevel;
impl EnvVar<Level> for LogLevel {
    const NAME: &'static str = "RELNOTE_LOG_LEVEL";
    const DEFAULT: Option<Level> = Some(Level::INFO);

    fn parse(value: &str) -> EnvResult<Level> {
        match value.trim().to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            _ => Err(EnvError {
                variable: Self::NAME.to_string(),
                message: format!(
                    "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                    value
                ),
            }),
        }
    }
}

/// 禁用颜色输出
pub struct NoColor;
impl EnvVar<bool> for NoColor {
    const NAME: &'static str = "NO_COLOR";
    const DEFAULT: Option<bool> = Some(false);

    fn parse(value: &str) -> EnvResult<bool> {
        // NO_COLOR 遵循标准：任何值都表示禁用颜色
        Ok(!value.is_empty())
    }
}
