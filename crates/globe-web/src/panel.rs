use crate::dom;
use globe_core::constants::PANEL_HIDE_DELAY_MS;
use globe_core::InfoPanel;
use web_sys as web;

const PANEL_ID: &str = "info-panel";
const TITLE_ID: &str = "info-title";
const DETAILS_ID: &str = "info-details";
const LOADING_ID: &str = "loading";

fn field_paragraph(document: &web::Document, label: &str, value: &str) -> Option<web::Element> {
    let p = document.create_element("p").ok()?;
    let strong = document.create_element("strong").ok()?;
    strong.set_text_content(Some(&format!("{}:", label)));
    _ = p.append_child(&strong);
    _ = p.append_child(&document.create_text_node(&format!(" {}", value)));
    Some(p)
}

/// Fill the panel and slide it in.
pub fn show(document: &web::Document, panel: &InfoPanel) {
    if let Some(title) = document.get_element_by_id(TITLE_ID) {
        title.set_text_content(Some(&panel.title));
    }
    if let Some(details) = document.get_element_by_id(DETAILS_ID) {
        details.set_text_content(None);
        for (label, value) in &panel.fields {
            if let Some(p) = field_paragraph(document, label, value) {
                _ = details.append_child(&p);
            }
        }
        if let Ok(p) = document.create_element("p") {
            if let Ok(em) = document.create_element("em") {
                em.set_text_content(Some(panel.footnote));
                _ = p.append_child(&em);
                _ = details.append_child(&p);
            }
        }
    }
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        dom::set_class(&el, "hidden", false);
        dom::set_class(&el, "show", true);
    }
}

/// Slide the panel out, then hide it once the CSS transition is over.
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        dom::set_class(&el, "show", false);
        dom::set_timeout(PANEL_HIDE_DELAY_MS, move || {
            // a marker picked during the transition keeps the panel open
            if !el.class_list().contains("show") {
                dom::set_class(&el, "hidden", true);
            }
        });
    }
}

pub fn set_loading(document: &web::Document, loading: bool) {
    if let Some(el) = document.get_element_by_id(LOADING_ID) {
        dom::set_class(&el, "hidden", !loading);
    }
}
