use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::info;

/// Extension every processed document must carry
pub const HTML_EXTENSION: &str = ".html";

pub const FILENAME_PROMPT: &str = "Enter the filename (with or without .html extension): ";

/// Returns the filename given on the command line, or asks for one on `input`.
///
/// An empty argument, an empty answer or end of input yields `None`. The prompt is
/// only shown when no argument was given at all.
pub fn get_filename_from_cli_or_prompt<R: BufRead, W: Write>(
    cli_filename: Option<String>,
    mut input: R,
    mut output: W,
) -> io::Result<Option<String>> {
    if let Some(filename) = cli_filename {
        info!("Filename provided via CLI: {}", filename);
        return Ok(Some(filename).filter(|f| !f.is_empty()));
    }

    write!(output, "{FILENAME_PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let filename = line.trim();

    if filename.is_empty() {
        Ok(None)
    } else {
        info!("Filename provided via input: {}", filename);
        Ok(Some(filename.to_string()))
    }
}

/// Appends `.html` unless the name already ends with it
pub fn ensure_html_extension(filename: &str) -> String {
    if filename.ends_with(HTML_EXTENSION) {
        filename.to_string()
    } else {
        let filename = format!("{filename}{HTML_EXTENSION}");
        info!("Ensured HTML extension: {}", filename);
        filename
    }
}

/// 确定解析相对图片路径时使用的基础目录
///
/// 绝对路径使用文件所在目录，相对路径使用当前工作目录。
pub fn get_base_directory(path: &Path) -> io::Result<PathBuf> {
    let base_directory = if path.is_absolute() {
        path.parent().map(Path::to_path_buf).unwrap_or_default()
    } else {
        env::current_dir()?
    };

    info!("Base directory determined: {}", base_directory.display());
    Ok(base_directory)
}
