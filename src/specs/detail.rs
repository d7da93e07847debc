// src/specs/detail.rs
//! Scraping *spec* for a session detail page.
//!
//! Reads description, thumbnail and the speaker block (icon, affiliation, profile,
//! GitHub / X links) for exactly one stub. Room is not derived here; see `merge`.

use scraper::{ElementRef, Html};

use crate::core::html::{attr, first, non_empty, text_of};
use crate::core::urls::BaseUrl;
use crate::session::{SessionDetail, SessionStub};
use crate::specs::selectors::CompiledDetail;

/// Parse `html` and extract the detail fields for `stub`.
/// A stub without a detail URL has no detail page: the result is empty.
pub fn extract_detail(
    html: &str,
    stub: &SessionStub,
    sel: &CompiledDetail,
    base: &BaseUrl,
) -> SessionDetail {
    if stub.detail_url.is_none() {
        return SessionDetail::default();
    }
    let doc = Html::parse_document(html);
    extract_from_document(&doc, stub, sel, base)
}

pub fn extract_from_document(
    doc: &Html,
    stub: &SessionStub,
    sel: &CompiledDetail,
    base: &BaseUrl,
) -> SessionDetail {
    if stub.detail_url.is_none() {
        return SessionDetail::default();
    }
    let root = doc.root_element();
    let mut detail = SessionDetail {
        description: first(root, &sel.description).map(text_of).and_then(non_empty),
        thumbnail_url: thumbnail(root, &stub.title, sel).map(|src| base.absolutize(&src)),
        ..Default::default()
    };

    let sections: Vec<ElementRef<'_>> = doc.select(&sel.speaker_section).collect();

    detail.speaker_icon_url = first_in(&sections, |s| first(s, &sel.speaker_icon))
        .and_then(|img| attr(img, "src"))
        .map(|src| base.absolutize(&src));
    detail.speaker_affiliation = first_in(&sections, |s| first(s, &sel.speaker_affiliation))
        .map(text_of)
        .and_then(non_empty);
    detail.speaker_profile = first_in(&sections, |s| first(s, &sel.speaker_profile))
        .map(text_of)
        .and_then(non_empty);

    // last link of each kind wins
    for a in sections.iter().flat_map(|s| s.select(&sel.speaker_links)) {
        let Some(href) = attr(a, "href") else { continue };
        if href.contains("github.com") {
            detail.speaker_github = Some(href);
        } else if href.contains("twitter.com") || href.contains("x.com") {
            detail.speaker_twitter = Some(href);
        }
    }

    detail
}

/// Image whose alt text is the session title; else the first schema thumbnail.
fn thumbnail(root: ElementRef<'_>, title: &str, sel: &CompiledDetail) -> Option<String> {
    let by_alt = root
        .select(&sel.titled_image)
        .find(|img| img.value().attr("alt").map(str::trim) == Some(title));
    by_alt
        .or_else(|| first(root, &sel.thumbnail))
        .and_then(|img| attr(img, "src"))
}

fn first_in<'a, F>(sections: &[ElementRef<'a>], mut f: F) -> Option<ElementRef<'a>>
where
    F: FnMut(ElementRef<'a>) -> Option<ElementRef<'a>>,
{
    sections.iter().find_map(|s| f(*s))
}
