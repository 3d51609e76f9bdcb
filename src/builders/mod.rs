//! # 构建器模块
//!
//! 这个模块包含用于构建输出文档固定部分的构建器：
//!
//! - 发布说明的页眉、页脚和外层容器
//!
//! # 模块组织
//!
//! - `release_note` - 发布说明模板片段的构建

pub mod release_note;

// Re-export commonly used items for convenience
pub use release_note::{ReleaseNoteBuilder, ASSET_BASE_URL, WRAPPER_STYLE};
