use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::builders::release_note::{ReleaseNoteBuilder, ASSET_BASE_URL};
use crate::env::{EnvVar, NoColor};
use crate::parsers::html::{
    decode_html, parse_html, serialize_document, set_image_width_inside_main,
    unwrap_implied_elements, wrap_body, AssetRelocator, RelocationSummary, SourceOutline,
};
use crate::utils::path::{ensure_html_extension, get_base_directory};

/// Represents errors that can occur while turning a document into a release note
#[derive(Debug, Error)]
pub enum RelnoteError {
    #[error("No filename provided. Exiting.")]
    NoFilename,

    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to move {} to {}: {source}", .from.display(), .to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize document: {0}")]
    Serialize(#[source] io::Error),
}

/// Configuration for one run
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct RelnoteOptions {
    /// Host under which relocated images are published
    pub asset_base_url: String,
    /// Encoding used to read and write the document
    pub encoding: String,
}

impl Default for RelnoteOptions {
    fn default() -> Self {
        Self {
            asset_base_url: ASSET_BASE_URL.to_string(),
            encoding: "utf-8".to_string(),
        }
    }
}

/// What a run did to the document and its images
#[derive(Debug, Default, Clone)]
pub struct ProcessSummary {
    pub relocation: RelocationSummary,
    /// Number of images set to full width, `None` when there was no `<main>`
    pub images_resized: Option<usize>,
}

/// A document path together with the directory its image references resolve against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputTarget {
    pub path: PathBuf,
    pub base_directory: PathBuf,
}

impl InputTarget {
    /// Normalizes `filename` to end in `.html` and determines its base directory
    pub fn resolve(filename: &str) -> Result<InputTarget, RelnoteError> {
        let path = PathBuf::from(ensure_html_extension(filename));
        let base_directory = get_base_directory(&path).map_err(|source| RelnoteError::Io {
            action: "determine base directory for",
            path: path.clone(),
            source,
        })?;

        Ok(InputTarget {
            path,
            base_directory,
        })
    }
}

/// 文档处理器，负责协调整个处理流程
///
/// 每一步都取得 DOM 的所有权，修改后再交还给下一步。
pub struct ReleaseNoteProcessor {
    options: RelnoteOptions,
}

impl ReleaseNoteProcessor {
    pub fn new(options: RelnoteOptions) -> Self {
        Self { options }
    }

    /// Transforms the document at `target.path` and overwrites it in place
    pub fn process_file(&self, target: &InputTarget) -> Result<ProcessSummary, RelnoteError> {
        let input_data = fs::read(&target.path).map_err(|source| RelnoteError::Io {
            action: "read",
            path: target.path.clone(),
            source,
        })?;

        let (output_data, summary) =
            self.process_document(&input_data, &target.base_directory)?;

        fs::write(&target.path, output_data).map_err(|source| RelnoteError::Io {
            action: "write",
            path: target.path.clone(),
            source,
        })?;
        info!("HTML file successfully saved: {}", target.path.display());

        Ok(summary)
    }

    /// Runs every step on raw document bytes and returns the serialized result.
    ///
    /// Image files referenced by the document are moved as a side effect.
    pub fn process_document(
        &self,
        input_data: &[u8],
        base_directory: &Path,
    ) -> Result<(Vec<u8>, ProcessSummary), RelnoteError> {
        let source = decode_html(input_data, &self.options.encoding);
        let outline = SourceOutline::scan(&source);
        let dom = parse_html(&source);

        // 1. 重组 <body>
        info!("Restructuring <body>");
        let dom = if outline.has_body {
            let builder = ReleaseNoteBuilder::new(&self.options.asset_base_url);
            wrap_body(dom, &builder)
        } else {
            warn!("No <body> element found, leaving document structure as is");
            dom
        };

        // 2. 迁移本地图片
        let mut relocator = AssetRelocator::new(base_directory, &self.options.asset_base_url);
        let dom = relocator.relocate(dom)?;

        // 3. <main> 内图片铺满宽度
        let (dom, images_resized) = set_image_width_inside_main(dom);

        // 4. 序列化，去掉解析器补全的结构元素
        let dom = unwrap_implied_elements(dom, &outline);
        let output_data =
            serialize_document(dom, &self.options.encoding).map_err(RelnoteError::Serialize)?;

        Ok((
            output_data,
            ProcessSummary {
                relocation: relocator.into_summary(),
                images_resized,
            },
        ))
    }
}

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

/// Prints an error message to stderr, in red when stderr is a terminal
pub fn print_error_message(msg: &str) {
    if NoColor::get_or_default(false) || !atty::is(atty::Stream::Stderr) {
        eprintln!("{msg}");
    } else {
        eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
    }
}

/// Prints an info message to stdout
pub fn print_info_message(msg: &str) {
    println!("{msg}");
}
