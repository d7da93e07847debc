// src/specs/talks.rs
//! Scraping *spec* for the talks list page (`/talks?day=N`).
//!
//! Purpose:
//! - Turn a rendered list page into `SessionStub`s, one per talk.
//! - Resolve lightning-talk bundles: a container holding an LT wrapper is N talks,
//!   not one. Each bundle item is read on its own; the bundle's own title/speaker/link
//!   are dropped, its day and track are inherited.
//!
//! Responsibilities:
//! - DOM queries through the compiled selector schema.
//! - Detail links absolutized against the base URL.
//!
//! Non-Responsibilities:
//! - **No rendering.** The caller hands in HTML (`extract_list`) or a parsed document.
//! - **No detail enrichment / merging.**
//!
//! A card that happens to contain the LT wrapper pattern is treated as a bundle.
//! That is how the site marks bundles; there is no other signal.

use std::collections::HashSet;

use scraper::{ElementRef, Html};

use crate::core::html::{ancestor_within, attr, closest, first, non_empty, select_text};
use crate::core::urls::BaseUrl;
use crate::session::{Day, SessionStub};
use crate::specs::selectors::CompiledList;

/// What a container turned out to be. Resolved once per container.
pub enum Container<'a> {
    Single(ElementRef<'a>),
    Bundle(Vec<ElementRef<'a>>),
}

impl<'a> Container<'a> {
    pub fn classify(el: ElementRef<'a>, sel: &CompiledList) -> Self {
        let wrappers: Vec<_> = el.select(&sel.lt_wrapper).collect();
        if wrappers.is_empty() {
            return Container::Single(el);
        }
        // Nested wrappers reach the same items more than once; keep the first sighting.
        let mut seen = HashSet::new();
        let items = wrappers
            .into_iter()
            .flat_map(|w| w.select(&sel.lt_item))
            .filter(|item| seen.insert(item.id()))
            .collect();
        Container::Bundle(items)
    }
}

/// Parse `html` and extract stubs for `day`.
pub fn extract_list(html: &str, day: Day, sel: &CompiledList, base: &BaseUrl) -> Vec<SessionStub> {
    let doc = Html::parse_document(html);
    extract_from_document(&doc, day, sel, base)
}

pub fn extract_from_document(
    doc: &Html,
    day: Day,
    sel: &CompiledList,
    base: &BaseUrl,
) -> Vec<SessionStub> {
    let mut out = Vec::new();

    for el in doc.select(&sel.container) {
        let track = track_of(el, sel);

        match Container::classify(el, sel) {
            Container::Single(el) => {
                let title = select_text(el, &sel.title);
                let speaker = select_text(el, &sel.speaker);
                let detail_url = title_link(el, sel).map(|href| base.absolutize(&href));
                push_stub(&mut out, title, speaker, day, &track, detail_url);
            }
            Container::Bundle(items) => {
                logd!("LT bundle with {} item(s)", items.len());
                for item in items {
                    let title = select_text(item, &sel.title);
                    let speaker = select_text(item, &sel.speaker);
                    let detail_url = first(item, &sel.link)
                        .and_then(|a| attr(a, "href"))
                        .map(|href| base.absolutize(&href));
                    push_stub(&mut out, title, speaker, day, &track, detail_url);
                }
            }
        }
    }

    out
}

fn push_stub(
    out: &mut Vec<SessionStub>,
    title: String,
    speaker: String,
    day: Day,
    track: &Option<String>,
    detail_url: Option<String>,
) {
    if title.is_empty() || speaker.is_empty() {
        logd!("skipping candidate without title/speaker: title={title:?} speaker={speaker:?}");
        return;
    }
    out.push(SessionStub { title, speaker, day, track: track.clone(), detail_url });
}

/// The track badge sits in the enclosing card, not in the container.
fn track_of(el: ElementRef<'_>, sel: &CompiledList) -> Option<String> {
    let card = closest(el, &sel.card)?;
    non_empty(select_text(card, &sel.track))
}

/// href of the nearest link wrapping the (first) title element.
fn title_link(el: ElementRef<'_>, sel: &CompiledList) -> Option<String> {
    let title = first(el, &sel.title)?;
    let a = ancestor_within(title, &sel.link, el)?;
    attr(a, "href")
}
