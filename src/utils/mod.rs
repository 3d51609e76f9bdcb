//! # 工具模块
//!
//! 这个模块包含各种工具函数和实用程序：
//!
//! - 输入文件名的获取与规范化
//! - 本地引用的解码和远程资源地址的拼接
//!
//! # 模块组织
//!
//! - `path` - 文件名提示、扩展名补全、基础目录判定
//! - `url` - 远程地址判断、URL 解码、资源地址拼接

pub mod path;
pub mod url;

// Re-export commonly used items for convenience
pub use path::{ensure_html_extension, get_base_directory, get_filename_from_cli_or_prompt};
pub use url::{decode_local_reference, is_remote_url, remote_asset_url};
