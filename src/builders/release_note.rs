//! 发布说明模板构建器
//!
//! 负责构建发布说明邮件的固定片段：页眉、页脚以及包裹整个内容的外层容器。
//! 这些片段是写死在程序中的，不接受运行时配置。

use markup5ever_rcdom::{Handle, RcDom};
use tracing::debug;

use crate::parsers::html::dom::{create_node, find_nodes, html_to_dom};

/// Host that serves relocated release-note images
pub const ASSET_BASE_URL: &str = "https://d3cf387e7yjscm.cloudfront.net";

/// Logo file uploaded alongside release-note images
pub const LOGO_FILE_NAME: &str = "shalion-logo-light@2x.png";

/// Inline style of the fixed-width centered wrapper
pub const WRAPPER_STYLE: &str = "width: 640px; margin: 0 auto; padding: 20px;";

const HEADER_TEMPLATE: &str = r#"
<header style="margin-bottom: 60px; text-align: center">

  <p style="color: lightgrey; font-family: sans-serif; font-weight: bold">THE TECH TEAM</p>
  <br>

  <!-- The logo image has been uploaded into our private S3 bucket used for release note images -->
  <img src="%asset_base_url%/%logo%" width="188px" height="40px">

  <h1 class="page-title" style="text-align: center">🥳 We've updated the Console!</h1>
  <p>Check out the release notes below to see what's new, improved, and fixed.</p>

</header>
"#;

const FOOTER_TEMPLATE: &str = r#"
<footer style="text-align: center">

  <hr style="background-color: #f2f2f2; border-radius: 16px; display: block; height: 2px; margin: 0 auto; margin-top: 32px; margin-bottom: 64px; width: 100px; text-align: center;">
  <p>As always, if you have any questions or concerns regarding these changes please let us know by responding to this email or through the usual channels.</p>
  <br>
  <br>
  <p><strong>THE TECH TEAM</strong></p>
  <br>
  <!-- The logo image has been uploaded into our private S3 bucket used for release note images -->
  <img src="%asset_base_url%/%logo%" width="113px" height="24px">
  <br>
  <br>

  <p>This message and its attachments are intended solely for the recipient and may contain confidential information subject to professional secrecy. Reproduction or distribution without express authorization is prohibited. If you are not the intended recipient, please delete it and inform us through this channel. In accordance with current data protection regulations, we inform you that your personal data and email address are part of a file, the responsibility of Shalion Data Services S.L. The purpose of the file is to maintain, develop, and monitor the contractual and business relationship, as well as to send you information about products and services of our own or related to your sector of activity. If you wish, you may exercise your rights of access, rectification, cancellation, and opposition by email to: privacy@shalion.com, indicating the right you wish to exercise in the subject line.</p>

</footer>
"#;

/// 构建发布说明的固定片段
pub struct ReleaseNoteBuilder<'a> {
    asset_base_url: &'a str,
}

impl<'a> ReleaseNoteBuilder<'a> {
    pub fn new(asset_base_url: &'a str) -> Self {
        Self { asset_base_url }
    }

    /// 构建 `<header>` 元素（Logo 188×40）
    pub fn build_header(&self) -> Option<Handle> {
        self.build_fragment(HEADER_TEMPLATE, "header")
    }

    /// 构建 `<footer>` 元素（Logo 113×24，含保密与隐私声明）
    pub fn build_footer(&self) -> Option<Handle> {
        self.build_fragment(FOOTER_TEMPLATE, "footer")
    }

    /// 构建外层容器，子节点依次为页眉、主体、页脚
    ///
    /// `main` 必须是一个尚未挂载到任何父节点上的元素。
    pub fn build_wrapper(&self, dom: &RcDom, main: Handle) -> Handle {
        let wrapper = create_node(dom, "div", &[("style", WRAPPER_STYLE)]);

        let mut children = Vec::with_capacity(3);
        children.extend(self.build_header());
        children.push(main);
        children.extend(self.build_footer());

        for child in children {
            child.parent.set(Some(std::rc::Rc::downgrade(&wrapper)));
            wrapper.children.borrow_mut().push(child);
        }

        wrapper
    }

    fn render(&self, template: &str) -> String {
        template
            .replace("%asset_base_url%", self.asset_base_url)
            .replace("%logo%", LOGO_FILE_NAME)
    }

    /// 解析模板并取出其中唯一的顶层元素，使其脱离临时文档
    fn build_fragment(&self, template: &str, element_name: &str) -> Option<Handle> {
        let markup = self.render(template);
        let fragment_dom = html_to_dom(markup.as_bytes(), "utf-8");

        let element = find_nodes(&fragment_dom.document, &["html", "body", element_name])
            .into_iter()
            .next()?;

        if let Some(parent) = element.parent.take().and_then(|weak| weak.upgrade()) {
            parent
                .children
                .borrow_mut()
                .retain(|child| !std::rc::Rc::ptr_eq(child, &element));
        }

        debug!("Built <{}> fragment", element_name);
        Some(element)
    }
}

impl Default for ReleaseNoteBuilder<'static> {
    fn default() -> Self {
        Self::new(ASSET_BASE_URL)
    }
}
