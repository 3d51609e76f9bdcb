// 集成测试公共模块
//
// 提供临时目录中的测试文档和图片

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use markup5ever_rcdom::{Handle, RcDom};
use tempfile::TempDir;

use relnote::core::{InputTarget, ProcessSummary, ReleaseNoteProcessor, RelnoteOptions};
use relnote::parsers::html::{find_nodes, get_node_attr, html_to_dom};

/// 临时站点：一个 HTML 文档加上它引用的图片
pub struct TestSite {
    dir: TempDir,
}

impl TestSite {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Writes `contents` to `relative`, creating parent directories
    pub fn write(&self, relative: &str, contents: &[u8]) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, contents).expect("write file");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("read file")
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Files directly inside `relative`, sorted by name
    pub fn list(&self, relative: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path(relative))
            .expect("read dir")
            .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Runs the whole pipeline on `relative`, addressed by absolute path
    pub fn process(&self, relative: &str) -> Result<ProcessSummary, relnote::core::RelnoteError> {
        let target = InputTarget::resolve(self.path(relative).to_str().expect("utf-8 path"))?;
        ReleaseNoteProcessor::new(RelnoteOptions::default()).process_file(&target)
    }
}

/// Parses the rewritten document back for structural assertions
pub fn parse(html: &str) -> RcDom {
    html_to_dom(html.as_bytes(), "utf-8")
}

pub fn image_sources(node: &Handle) -> Vec<String> {
    find_nodes(node, &["img"])
        .iter()
        .filter_map(|img| get_node_attr(img, "src"))
        .collect()
}

pub const PNG_BYTES: &[u8] = b"\x89PNG\x0D\x0A\x1A\x0Afake image data";
