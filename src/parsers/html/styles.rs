use markup5ever_rcdom::RcDom;
use tracing::{info, warn};

use super::dom::{find_nodes, set_node_attr};

/// Inline style forcing an image to the width of its container
pub const FULL_WIDTH_STYLE: &str = "width: 100%";

/// Overwrites the `style` of every `<img>` inside the first `<main>`.
///
/// Images outside `<main>` (header and footer logos) keep their attributes.
/// Returns the DOM together with the number of images updated, or `None`
/// when the document has no `<main>`.
pub fn set_image_width_inside_main(dom: RcDom) -> (RcDom, Option<usize>) {
    let Some(main) = find_nodes(&dom.document, &["main"]).into_iter().next() else {
        warn!("No <main> element found, skipping image width updates");
        return (dom, None);
    };

    let images = find_nodes(&main, &["img"]);
    for img in &images {
        set_node_attr(img, "style", Some(FULL_WIDTH_STYLE.to_string()));
    }

    info!("Updated {} <img> tags inside <main> to full width", images.len());
    (dom, Some(images.len()))
}
