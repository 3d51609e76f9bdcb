use percent_encoding::percent_decode_str;

/// Prefixes of references that already point at a remote host
pub const REMOTE_URL_PREFIXES: &[&str] = &["http://", "https://"];

/// 判断引用是否为远程地址
pub fn is_remote_url(reference: &str) -> bool {
    REMOTE_URL_PREFIXES
        .iter()
        .any(|prefix| reference.starts_with(prefix))
}

/// 将经过 URL 编码的本地引用还原为文件系统相对路径
pub fn decode_local_reference(reference: &str) -> String {
    percent_decode_str(reference)
        .decode_utf8_lossy()
        .into_owned()
}

/// Joins the asset host and a file name into the published asset URL
pub fn remote_asset_url(asset_base_url: &str, file_name: &str) -> String {
    format!("{}/{}", asset_base_url.trim_end_matches('/'), file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_prefixes() {
        assert!(is_remote_url("https://example.com/a.png"));
        assert!(is_remote_url("http://example.com/a.png"));

        assert!(!is_remote_url("img/a.png"));
        assert!(!is_remote_url("/abs/a.png"));
        assert!(!is_remote_url("httpdocs/a.png"));
        assert!(!is_remote_url("HTTPS://example.com/a.png"));
    }

    #[test]
    fn decodes_percent_escapes() {
        assert_eq!(
            decode_local_reference("Release%2010%20(1)/Screenshot%202024.png"),
            "Release 10 (1)/Screenshot 2024.png"
        );
        assert_eq!(decode_local_reference("img/pic.PNG"), "img/pic.PNG");
        assert_eq!(decode_local_reference("caf%C3%A9.png"), "café.png");
    }

    #[test]
    fn joins_asset_url() {
        assert_eq!(
            remote_asset_url("https://d3cf387e7yjscm.cloudfront.net", "x.PNG"),
            "https://d3cf387e7yjscm.cloudfront.net/x.PNG"
        );
        assert_eq!(
            remote_asset_url("https://assets.example.com/", "x.png"),
            "https://assets.example.com/x.png"
        );
    }
}
