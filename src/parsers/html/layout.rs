//! 文档结构重组
//!
//! 把 `<body>` 的全部内容移入新的 `<main>`，再用带页眉、页脚的外层容器替换原来的 `<body>`。

use std::rc::Rc;

use markup5ever_rcdom::{Handle, RcDom};
use tracing::{debug, info, warn};

use crate::builders::release_note::ReleaseNoteBuilder;

use super::dom::{create_node, find_nodes, get_parent_node};
use super::outline::SourceOutline;

/// Replaces `<body>` with the release-note wrapper.
///
/// Returns the DOM untouched when the document has no `<body>`. The children of
/// `<body>` keep their order and identity inside the new `<main>`.
pub fn wrap_body(dom: RcDom, builder: &ReleaseNoteBuilder) -> RcDom {
    let Some(body) = find_nodes(&dom.document, &["html", "body"]).into_iter().next() else {
        warn!("No <body> element found, leaving document structure as is");
        return dom;
    };
    let Some(parent) = get_parent_node(&body) else {
        warn!("<body> element is detached, leaving document structure as is");
        return dom;
    };

    let main = create_node(&dom, "main", &[]);
    reparent_children(&body, &main);

    let wrapper = builder.build_wrapper(&dom, main);
    replace_node(&parent, &body, wrapper);

    info!("Body replaced with <main> and wrapped with header and footer");
    dom
}

/// Removes the `<html>`, `<head>` and `<body>` elements the parser had to invent.
///
/// Elements missing from `outline` are replaced by their own children, so a
/// fragment comes back out as the fragment it went in as.
pub fn unwrap_implied_elements(dom: RcDom, outline: &SourceOutline) -> RcDom {
    let implied = [
        (["html", "body"], !outline.has_body),
        (["html", "head"], !outline.has_head),
    ];
    for (path, is_implied) in implied {
        if !is_implied {
            continue;
        }
        if let Some(node) = find_nodes(&dom.document, &path).into_iter().next() {
            debug!("Unwrapping implied <{}>", path[1]);
            unwrap_node(&node);
        }
    }

    if !outline.has_html {
        if let Some(html) = find_nodes(&dom.document, &["html"]).into_iter().next() {
            debug!("Unwrapping implied <html>");
            unwrap_node(&html);
        }
    }

    dom
}

/// Puts the children of `node` where `node` was and detaches it
fn unwrap_node(node: &Handle) {
    let Some(parent) = get_parent_node(node) else {
        return;
    };
    let children = std::mem::take(&mut *node.children.borrow_mut());
    let mut siblings = parent.children.borrow_mut();

    if let Some(index) = siblings.iter().position(|child| Rc::ptr_eq(child, node)) {
        for child in &children {
            child.parent.set(Some(Rc::downgrade(&parent)));
        }
        siblings.splice(index..=index, children);
        node.parent.take();
    }
}

fn reparent_children(node: &Handle, new_parent: &Handle) {
    let children = std::mem::take(&mut *node.children.borrow_mut());
    let mut new_children = new_parent.children.borrow_mut();

    for child in children {
        child.parent.set(Some(Rc::downgrade(new_parent)));
        new_children.push(child);
    }
}

fn replace_node(parent: &Handle, old_node: &Handle, new_node: Handle) {
    let mut siblings = parent.children.borrow_mut();

    if let Some(index) = siblings.iter().position(|child| Rc::ptr_eq(child, old_node)) {
        new_node.parent.set(Some(Rc::downgrade(parent)));
        old_node.parent.take();
        siblings[index] = new_node;
    }
}
