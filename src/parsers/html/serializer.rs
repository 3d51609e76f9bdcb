use std::io;

use encoding_rs::Encoding;
use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

use super::dom::{get_node_name, get_parent_node};

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose text content is written without escaping
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "iframe",
    "noembed",
    "noframes",
    "noscript",
    "plaintext",
    "script",
    "style",
    "xmp",
];

/// Elements whose whitespace is significant and must be kept verbatim
const PREFORMATTED_ELEMENTS: &[&str] = &["pre", "textarea"];

const INDENT: &str = " ";

/// 序列化文档（带缩进）
///
/// 每个节点单独一行，每层嵌套缩进一个空格；文本节点去除首尾空白，纯空白文本被丢弃。
/// `pre` 和 `textarea` 原样输出，以保留其中的空白。
pub fn serialize_document(dom: RcDom, document_encoding: &str) -> io::Result<Vec<u8>> {
    let mut output = String::new();
    write_node(&mut output, &dom.document, 0)?;

    if let Some(encoding) = Encoding::for_label(document_encoding.as_bytes()) {
        let (data, _, _) = encoding.encode(&output);
        Ok(data.into_owned())
    } else {
        Ok(output.into_bytes())
    }
}

fn write_node(output: &mut String, node: &Handle, depth: usize) -> io::Result<()> {
    match &node.data {
        NodeData::Document => {
            for child in node.children.borrow().iter() {
                write_node(output, child, depth)?;
            }
        }
        NodeData::Doctype {
            name,
            public_id,
            system_id,
        } => push_line(output, depth, &doctype(name, public_id, system_id)),
        NodeData::Comment { contents } => push_line(output, depth, &format!("<!--{contents}-->")),
        NodeData::ProcessingInstruction { target, contents } => {
            push_line(output, depth, &format!("<?{target} {contents}>"))
        }
        NodeData::Text { contents } => {
            let contents = contents.borrow();
            let text = contents.trim();
            if !text.is_empty() {
                let raw = get_parent_name(node)
                    .is_some_and(|parent| RAW_TEXT_ELEMENTS.contains(&parent.as_str()));
                if raw {
                    push_line(output, depth, text);
                } else {
                    push_line(output, depth, &escape_text(text));
                }
            }
        }
        NodeData::Element {
            name,
            attrs,
            template_contents,
            ..
        } => {
            let tag_name: &str = &name.local;

            if PREFORMATTED_ELEMENTS.contains(&tag_name) {
                push_line(output, depth, &serialize_verbatim(node)?);
                return Ok(());
            }

            let mut open_tag = format!("<{tag_name}");
            for attr in attrs.borrow().iter() {
                open_tag.push(' ');
                if let Some(prefix) = &attr.name.prefix {
                    open_tag.push_str(prefix);
                    open_tag.push(':');
                }
                open_tag.push_str(&attr.name.local);
                open_tag.push_str("=\"");
                open_tag.push_str(&escape_attr_value(&attr.value));
                open_tag.push('"');
            }
            open_tag.push('>');
            push_line(output, depth, &open_tag);

            if VOID_ELEMENTS.contains(&tag_name) {
                return Ok(());
            }

            // <template> keeps its content in a separate document fragment
            let content_holder = template_contents
                .borrow()
                .clone()
                .unwrap_or_else(|| node.clone());
            for child in content_holder.children.borrow().iter() {
                write_node(output, child, depth + 1)?;
            }

            push_line(output, depth, &format!("</{tag_name}>"));
        }
    }

    Ok(())
}

fn push_line(output: &mut String, depth: usize, line: &str) {
    output.push_str(&INDENT.repeat(depth));
    output.push_str(line);
    output.push('\n');
}

fn doctype(name: &str, public_id: &str, system_id: &str) -> String {
    match (public_id.is_empty(), system_id.is_empty()) {
        (true, true) => format!("<!DOCTYPE {name}>"),
        (true, false) => format!("<!DOCTYPE {name} SYSTEM \"{system_id}\">"),
        (false, true) => format!("<!DOCTYPE {name} PUBLIC \"{public_id}\">"),
        (false, false) => format!("<!DOCTYPE {name} PUBLIC \"{public_id}\" \"{system_id}\">"),
    }
}

fn get_parent_name(node: &Handle) -> Option<String> {
    get_parent_node(node).and_then(|parent| get_node_name(&parent).map(str::to_string))
}

/// Serializes the element and its subtree exactly as html5ever would
fn serialize_verbatim(node: &Handle) -> io::Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    let serializable: SerializableHandle = node.clone().into();
    serialize(
        &mut buf,
        &serializable,
        SerializeOpts {
            traversal_scope: TraversalScope::IncludeNode,
            ..Default::default()
        },
    )?;

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '\u{00A0}' => escaped.push_str("&nbsp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn escape_attr_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '\u{00A0}' => escaped.push_str("&nbsp;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}
