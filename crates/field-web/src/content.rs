use crate::constants::{
    ACTIVE_CLASS, DOTS_CONTAINER_ID, DOT_CLASS, SECTION_SELECTOR, TRANSITION_CSS_VAR,
};
use field_core::SectionView;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Section elements and their navigation dots.
///
/// Reads the section view and mirrors the current index into an `active`
/// class; the page stylesheet decides what that looks like.
pub struct SectionMarkup {
    pub sections: Vec<web::Element>,
    pub dots: Vec<web::Element>,
}

impl SectionMarkup {
    pub fn collect(document: &web::Document) -> anyhow::Result<Self> {
        let list = document
            .query_selector_all(SECTION_SELECTOR)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let sections: Vec<web::Element> = (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<web::Element>().ok())
            .collect();
        let dots = build_dots(document, sections.len());
        Ok(Self { sections, dots })
    }

    pub fn show(&self, view: &SectionView) {
        for (i, el) in self.sections.iter().enumerate() {
            set_active(el, view.is_current(i));
            let _ = el.set_attribute("aria-hidden", if view.is_current(i) { "false" } else { "true" });
        }
        for (i, el) in self.dots.iter().enumerate() {
            set_active(el, view.is_current(i));
        }
    }
}

#[inline]
fn set_active(el: &web::Element, active: bool) {
    let _ = el.class_list().toggle_with_force(ACTIVE_CLASS, active);
}

// One button per section inside #section-dots; no container means no dots.
fn build_dots(document: &web::Document, count: usize) -> Vec<web::Element> {
    let Some(container) = document.get_element_by_id(DOTS_CONTAINER_ID) else {
        log::info!("[content] no #{} container; skipping dots", DOTS_CONTAINER_ID);
        return Vec::new();
    };
    container.set_inner_html("");
    let mut dots = Vec::with_capacity(count);
    for i in 0..count {
        let Ok(dot) = document.create_element("button") else {
            continue;
        };
        let _ = dot.class_list().add_1(DOT_CLASS);
        let _ = dot.set_attribute("type", "button");
        let _ = dot.set_attribute("data-index", &i.to_string());
        let _ = dot.set_attribute("aria-label", &format!("Go to section {}", i + 1));
        if let Err(e) = container.append_child(&dot) {
            log::warn!("[content] dot {} not attached: {:?}", i, e);
        }
        dots.push(dot);
    }
    dots
}

/// Publish the visual transition duration as a CSS custom property.
pub fn set_transition_duration(document: &web::Document, duration: Duration) {
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        let _ = root
            .style()
            .set_property(TRANSITION_CSS_VAR, &format!("{}ms", duration.as_millis()));
    }
}
