use encoding_rs::Encoding;
use html5ever::interface::{Attribute, QualName};
use html5ever::parse_document;
use html5ever::tendril::{format_tendril, TendrilSink};
use html5ever::tree_builder::create_element;
use html5ever::{namespace_url, ns, LocalName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// 将 HTML 字节转换为 DOM
pub fn html_to_dom(data: &[u8], document_encoding: &str) -> RcDom {
    parse_html(&decode_html(data, document_encoding))
}

/// 按指定编码解码 HTML 字节，未知编码按 UTF-8 处理
pub fn decode_html(data: &[u8], document_encoding: &str) -> String {
    if let Some(encoding) = Encoding::for_label(document_encoding.as_bytes()) {
        let (string, _, _) = encoding.decode(data);
        string.into_owned()
    } else {
        String::from_utf8_lossy(data).into_owned()
    }
}

pub fn parse_html(source: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(source)
}

/// 查找指定路径的DOM节点
///
/// `node_names` 是一条元素路径（例如 `["html", "body"]`），路径中间的元素可以不直接相邻。
/// 只给出一个名称时，返回所有同名的后代元素（包括 `node` 自身），按文档顺序排列。
pub fn find_nodes(node: &Handle, node_names: &[&str]) -> Vec<Handle> {
    assert!(!node_names.is_empty());

    let mut found_nodes = Vec::new();
    let node_name = node_names[0];

    if node_names.len() == 1 {
        if get_node_name(node) == Some(node_name) {
            found_nodes.push(node.clone());
        }

        for child_node in node.children.borrow().iter() {
            found_nodes.append(&mut find_nodes(child_node, node_names));
        }
    } else if get_node_name(node) == Some(node_name) {
        found_nodes.append(&mut find_nodes(node, &node_names[1..]));
    } else {
        for child_node in node.children.borrow().iter() {
            found_nodes.append(&mut find_nodes(child_node, node_names));
        }
    }

    found_nodes
}

/// 获取节点属性值
pub fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == attr_name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// 获取节点名称
pub fn get_node_name(node: &Handle) -> Option<&'_ str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// 获取父节点
///
/// 节点的父指针保存在 `Cell` 中，这里取出后会放回原处，不会破坏树结构。
pub fn get_parent_node(child: &Handle) -> Option<Handle> {
    let parent = child.parent.take();
    child.parent.set(parent.clone());
    parent.and_then(|weak| weak.upgrade())
}

/// 查找最近的指定名称的祖先元素
pub fn find_ancestor(node: &Handle, ancestor_name: &str) -> Option<Handle> {
    let mut current = get_parent_node(node);

    while let Some(candidate) = current {
        if get_node_name(&candidate) == Some(ancestor_name) {
            return Some(candidate);
        }
        current = get_parent_node(&candidate);
    }

    None
}

/// 创建一个不属于任何父节点的新元素
pub fn create_node(dom: &RcDom, node_name: &str, attrs: &[(&str, &str)]) -> Handle {
    create_element(
        dom,
        QualName::new(None, ns!(), LocalName::from(node_name)),
        attrs
            .iter()
            .map(|(name, value)| Attribute {
                name: QualName::new(None, ns!(), LocalName::from(*name)),
                value: format_tendril!("{}", value),
            })
            .collect(),
    )
}

/// 设置节点属性
pub fn set_node_attr(node: &Handle, attr_name: &str, attr_value: Option<String>) {
    if let NodeData::Element { attrs, .. } = &node.data {
        let attrs_mut = &mut attrs.borrow_mut();
        let mut i = 0;
        let mut found_existing_attr: bool = false;

        while i < attrs_mut.len() {
            if &attrs_mut[i].name.local == attr_name {
                found_existing_attr = true;

                if let Some(attr_value) = attr_value.as_deref() {
                    attrs_mut[i].value.clear();
                    attrs_mut[i].value.push_slice(attr_value);
                } else {
                    // Remove attr completely if attr_value is not defined
                    attrs_mut.remove(i);
                    continue;
                }
            }

            i += 1;
        }

        if !found_existing_attr {
            // Add new attribute (since originally the target node didn't have it)
            if let Some(attr_value) = attr_value {
                attrs_mut.push(Attribute {
                    name: QualName::new(None, ns!(), LocalName::from(attr_name)),
                    value: format_tendril!("{}", attr_value),
                });
            }
        }
    };
}
