use crate::constants::{PHRASES_ATTR, TYPED_TEXT_ID};
use crate::dom;
use folio_core::constants::DEFAULT_PHRASES;
use folio_core::{Typewriter, TypewriterTimings};
use web_sys as web;

pub fn wire_typewriter(document: &web::Document) -> anyhow::Result<()> {
    let Some(target) = document.get_element_by_id(TYPED_TEXT_ID) else {
        return Ok(());
    };
    let phrases = target
        .get_attribute(PHRASES_ATTR)
        .map(|attr| Typewriter::parse_phrases(&attr))
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| DEFAULT_PHRASES.iter().map(|s| s.to_string()).collect());
    log::info!("[typewriter] cycling {} phrases", phrases.len());
    let typewriter = Typewriter::new(phrases, TypewriterTimings::default())?;
    run(target, typewriter);
    Ok(())
}

// Each step schedules the next one with the delay the machine asks for.
fn run(target: web::Element, mut typewriter: Typewriter) {
    let step = typewriter.step();
    target.set_text_content(Some(&step.text));
    dom::set_timeout(step.delay, move || run(target, typewriter));
}
