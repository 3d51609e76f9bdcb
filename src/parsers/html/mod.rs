//! HTML解析和处理模块
//!
//! 这个模块被拆分为多个子模块：
//!
//! - `dom`: 基础DOM操作
//! - `outline`: 记录源文件中显式出现的 `<html>`、`<head>`、`<body>` 标签
//! - `layout`: 用页眉、页脚和外层容器重组 `<body>`
//! - `assets`: 本地图片的改名、移动和引用改写
//! - `styles`: `<main>` 内图片的宽度规范化
//! - `serializer`: 带缩进的序列化

pub mod assets;
pub mod dom;
pub mod layout;
pub mod outline;
pub mod serializer;
pub mod styles;

// 重新导出主要的公共 API
pub use assets::{anonymized_file_name, AssetRelocator, RelocatedAsset, RelocationSummary};
pub use dom::{
    create_node, find_ancestor, find_nodes, get_node_attr, get_node_name, get_parent_node,
    decode_html, html_to_dom, parse_html, set_node_attr,
};
pub use layout::{unwrap_implied_elements, wrap_body};
pub use outline::SourceOutline;
pub use serializer::serialize_document;
pub use styles::{set_image_width_inside_main, FULL_WIDTH_STYLE};
