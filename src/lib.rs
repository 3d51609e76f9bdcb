//! # Relnote Library
//!
//! 把导出的 HTML 页面改写为带品牌页眉、页脚的发布说明邮件模板。
//!
//! ## 模块组织
//!
//! - `core` - 处理流程、错误类型和运行选项
//! - `parsers` - HTML解析、结构重组、图片迁移、序列化
//! - `builders` - 发布说明固定片段的构建
//! - `utils` - 文件名与 URL 工具函数
//! - `env` - 环境变量

pub mod builders;
pub mod core;
pub mod env;
pub mod parsers;
pub mod utils;

// Re-export commonly used items for convenience
pub use crate::core::*;
pub use crate::parsers::*;
pub use crate::utils::*;
