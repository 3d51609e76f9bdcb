//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

mod common;

#[cfg(test)]
mod passing {
    use relnote::builders::WRAPPER_STYLE;
    use relnote::parsers::html::{find_nodes, get_node_attr, get_node_name};

    use crate::common::{image_sources, parse, TestSite};

    const EXPORTED_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Release 42</title></head>
<body>
<article id="release-42" class="page sans">
<h2>New</h2>
<ul><li>Faster exports</li><li>Dark mode</li></ul>
<h2>Fixed</h2>
<p>Login &amp; logout flow</p>
</article>
</body>
</html>
"#;

    #[test]
    fn wraps_body_with_header_main_and_footer() {
        let site = TestSite::new();
        site.write("release.html", EXPORTED_PAGE.as_bytes());

        site.process("release.html").unwrap();

        let output = site.read("release.html");
        let dom = parse(&output);

        let wrappers: Vec<_> = find_nodes(&dom.document, &["div"])
            .into_iter()
            .filter(|div| get_node_attr(div, "style").as_deref() == Some(WRAPPER_STYLE))
            .collect();
        assert_eq!(wrappers.len(), 1);

        let children: Vec<_> = wrappers[0]
            .children
            .borrow()
            .iter()
            .filter_map(|child| get_node_name(child).map(str::to_string))
            .collect();
        assert_eq!(children, vec!["header", "main", "footer"]);

        let main = find_nodes(&dom.document, &["main"]).remove(0);
        let article = find_nodes(&main, &["article"]).remove(0);
        assert_eq!(get_node_attr(&article, "id").as_deref(), Some("release-42"));
        assert_eq!(get_node_attr(&article, "class").as_deref(), Some("page sans"));
        assert!(output.contains("Login &amp; logout flow"));
        assert!(output.contains("<title>"));
        assert!(output.contains("Release 42"));
    }

    #[test]
    fn header_and_footer_carry_fixed_content() {
        let site = TestSite::new();
        site.write("release.html", EXPORTED_PAGE.as_bytes());

        site.process("release.html").unwrap();

        let output = site.read("release.html");
        let dom = parse(&output);
        let header = find_nodes(&dom.document, &["header"]).remove(0);
        let footer = find_nodes(&dom.document, &["footer"]).remove(0);

        let logo = "https://d3cf387e7yjscm.cloudfront.net/shalion-logo-light@2x.png";
        assert_eq!(image_sources(&header), vec![logo]);
        assert_eq!(image_sources(&footer), vec![logo]);

        assert!(output.contains("THE TECH TEAM"));
        assert!(output.contains("We've updated the Console!"));
        assert!(output.contains("privacy@shalion.com"));
    }

    #[test]
    fn output_is_indented() {
        let site = TestSite::new();
        site.write("release.html", EXPORTED_PAGE.as_bytes());

        site.process("release.html").unwrap();

        let output = site.read("release.html");
        assert!(output.starts_with("<!DOCTYPE html>\n<html>\n <head>\n"));
        assert!(output.contains("\n <div style=\"width: 640px; margin: 0 auto; padding: 20px;\">\n  <header"));
        assert!(output.ends_with("</html>\n"));
    }

    #[test]
    fn second_run_finds_no_body_to_wrap() {
        let site = TestSite::new();
        site.write("release.html", EXPORTED_PAGE.as_bytes());

        site.process("release.html").unwrap();
        let first = site.read("release.html");
        site.process("release.html").unwrap();

        // The first run replaced <body>, so the second one leaves the structure alone
        let second = site.read("release.html");
        let dom = parse(&second);
        assert_eq!(find_nodes(&dom.document, &["header"]).len(), 1);
        assert_eq!(find_nodes(&dom.document, &["footer"]).len(), 1);
        assert_eq!(find_nodes(&dom.document, &["main"]).len(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn document_without_body_is_left_alone() {
        let site = TestSite::new();
        site.write("fragment.html", b"<p>Hello</p>");

        let summary = site.process("fragment.html").unwrap();

        assert_eq!(site.read("fragment.html"), "<p>\n Hello\n</p>\n");
        assert_eq!(summary.images_resized, None);
        assert_eq!(summary.relocation.skipped_remote, 0);
    }

    #[test]
    fn head_without_body_keeps_its_shape() {
        let site = TestSite::new();
        site.write(
            "partial.html",
            b"<html><head><title>Draft</title></head><p>Not yet</p></html>",
        );

        site.process("partial.html").unwrap();

        assert_eq!(
            site.read("partial.html"),
            "<html>\n <head>\n  <title>\n   Draft\n  </title>\n </head>\n <p>\n  Not yet\n </p>\n</html>\n"
        );
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use relnote::core::RelnoteError;

    use crate::common::TestSite;

    #[test]
    fn missing_document() {
        let site = TestSite::new();

        let error = site.process("absent.html").unwrap_err();

        assert!(matches!(error, RelnoteError::Io { action: "read", .. }));
        assert!(!site.exists("absent.html"));
    }
}
