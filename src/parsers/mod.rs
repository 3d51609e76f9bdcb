//! # 解析器模块
//!
//! 这个模块包含解析和改写 HTML 文档的全部功能：
//!
//! - HTML解析和DOM操作
//! - 文档结构重组
//! - 图片资源迁移和引用改写
//! - 带缩进的序列化
//!
//! # 模块组织
//!
//! - `html` - HTML文档解析、DOM操作、结构重组、资源迁移、序列化

pub mod html;

// Re-export commonly used items for convenience
pub use html::{
    html_to_dom, serialize_document, set_image_width_inside_main, wrap_body, AssetRelocator,
    RelocationSummary,
};
