//! HTML 图片资源迁移模块
//!
//! 本模块负责把文档引用的本地图片改名为匿名文件名，并把引用改写为远程资源地址：
//! - 跳过已经指向远程主机的图片
//! - 对 URL 编码的本地引用解码，并相对基础目录解析为文件路径
//! - 为每个文件生成基于 UUID 的新文件名（保留原扩展名及其大小写）
//! - 在原目录中完成移动，并改写 `<img src>` 以及外层 `<a href>`
//!
//! 同一次运行中，指向同一路径的多个引用只移动一次文件，共享同一个新文件名。
//! 移动一旦完成便不可撤销，后续步骤失败时不会回滚。

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use markup5ever_rcdom::{Handle, RcDom};
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::RelnoteError;
use crate::utils::url::{decode_local_reference, is_remote_url, remote_asset_url};

use super::dom::{find_ancestor, find_nodes, get_node_attr, set_node_attr};

/// A local image that was renamed and moved during the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocatedAsset {
    pub original_path: PathBuf,
    pub new_path: PathBuf,
    pub remote_url: String,
}

/// Outcome of one relocation pass
#[derive(Debug, Default, Clone)]
pub struct RelocationSummary {
    /// Files physically moved, in the order they were first referenced
    pub moved: Vec<RelocatedAsset>,
    /// References served from the rename cache
    pub reused: usize,
    /// References already pointing at a remote host
    pub skipped_remote: usize,
}

/// 本地图片迁移器
///
/// 重命名缓存只在一次运行内有效，以完整的解析后路径为键。
pub struct AssetRelocator<'a> {
    base_directory: &'a Path,
    asset_base_url: &'a str,
    renamed_files: HashMap<PathBuf, String>,
    summary: RelocationSummary,
}

impl<'a> AssetRelocator<'a> {
    pub fn new(base_directory: &'a Path, asset_base_url: &'a str) -> Self {
        Self {
            base_directory,
            asset_base_url,
            renamed_files: HashMap::new(),
            summary: RelocationSummary::default(),
        }
    }

    /// Relocates every local `<img src>` of the document, in document order.
    ///
    /// Stops at the first file-system error; images handled before it stay moved.
    pub fn relocate(&mut self, dom: RcDom) -> Result<RcDom, RelnoteError> {
        info!("Starting image processing");

        for img in find_nodes(&dom.document, &["img"]) {
            if let Some(src) = get_node_attr(&img, "src") {
                self.relocate_image(&img, &src)?;
            }
        }

        info!(
            "Image processing complete: {} moved, {} reused, {} external",
            self.summary.moved.len(),
            self.summary.reused,
            self.summary.skipped_remote
        );
        Ok(dom)
    }

    pub fn into_summary(self) -> RelocationSummary {
        self.summary
    }

    fn relocate_image(&mut self, img: &Handle, src: &str) -> Result<(), RelnoteError> {
        if is_remote_url(src) {
            debug!("External image found, skipping: {}", src);
            self.summary.skipped_remote += 1;
            return Ok(());
        }
        if src.is_empty() {
            debug!("Image without a source, skipping");
            return Ok(());
        }

        let decoded_src = decode_local_reference(src);
        let new_image_name = self.renamed_file_name(&decoded_src)?;

        let new_src = remote_asset_url(self.asset_base_url, &new_image_name);
        set_node_attr(img, "src", Some(new_src.clone()));
        info!("Updated image src: {}", new_src);

        if let Some(anchor) = find_ancestor(img, "a") {
            if get_node_attr(&anchor, "href").is_some() {
                set_node_attr(&anchor, "href", Some(new_src.clone()));
                info!("Updated parent <a> href: {}", new_src);
            }
        }

        Ok(())
    }

    /// Returns the anonymized name for `decoded_src`, moving the file on first sight
    fn renamed_file_name(&mut self, decoded_src: &str) -> Result<String, RelnoteError> {
        let original_image_path = self.base_directory.join(decoded_src);

        if let Some(new_image_name) = self.renamed_files.get(&original_image_path) {
            debug!(
                "Using cached renamed file for: {}",
                original_image_path.display()
            );
            self.summary.reused += 1;
            return Ok(new_image_name.clone());
        }

        let src_path = Path::new(decoded_src);
        let new_image_name = anonymized_file_name(src_path);

        let new_image_directory = match src_path.parent() {
            Some(src_directory) => self.base_directory.join(src_directory),
            None => self.base_directory.to_path_buf(),
        };
        fs::create_dir_all(&new_image_directory).map_err(|source| RelnoteError::Io {
            action: "create directory",
            path: new_image_directory.clone(),
            source,
        })?;

        let new_image_path = new_image_directory.join(&new_image_name);
        fs::rename(&original_image_path, &new_image_path).map_err(|source| {
            RelnoteError::Move {
                from: original_image_path.clone(),
                to: new_image_path.clone(),
                source,
            }
        })?;
        info!(
            "Renamed and moved: '{}' -> '{}'",
            original_image_path.display(),
            new_image_path.display()
        );

        self.renamed_files
            .insert(original_image_path.clone(), new_image_name.clone());
        self.summary.moved.push(RelocatedAsset {
            original_path: original_image_path,
            new_path: new_image_path,
            remote_url: remote_asset_url(self.asset_base_url, &new_image_name),
        });

        Ok(new_image_name)
    }
}

/// Random UUID followed by the original extension, dot and case preserved
pub fn anonymized_file_name(original: &Path) -> String {
    let extension = original
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    format!("{}{}", Uuid::new_v4(), extension)
}
