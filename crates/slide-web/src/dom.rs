use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn query_html(document: &web::Document, selector: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow!("bad selector {selector:?}: {e:?}"))?
        .ok_or_else(|| anyhow!("missing {selector}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow!("{selector} is not an HTML element"))
}

/// Element children that are HTML elements, in document order.
pub fn html_children(parent: &web::Element) -> Vec<web::HtmlElement> {
    let children = parent.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::error!("[dom] set {property}: {e:?}");
    }
}
