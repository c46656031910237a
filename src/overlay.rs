use crate::constants::{INSTRUCTIONS_ID, LOADING_ID};
use web_sys as web;

#[inline]
pub fn hide_instructions(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(INSTRUCTIONS_ID) {
        _ = el.class_list().remove_1("active");
    }
}

#[inline]
pub fn show_instructions(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(INSTRUCTIONS_ID) {
        _ = el.class_list().add_1("active");
    }
}

#[inline]
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback for pages without the stylesheet
        _ = el.set_attribute("style", "display:none");
    }
}
