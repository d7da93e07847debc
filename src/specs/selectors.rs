// src/specs/selectors.rs
//! Selector schema: logical field → CSS query, for the list page and the detail page.
//!
//! The raw schema (`SelectorSchema`) is plain strings so it can be swapped or
//! versioned without touching the extractors. `compile()` turns it into
//! `CompiledSchema`, which the extractors take by reference.
//!
//! Defaults match the current conference site's markup (Tailwind utility classes).

use scraper::Selector;

use crate::error::ScrapeError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListSelectors {
    /// One per session (or per lightning-talk bundle).
    pub container: String,
    pub title: String,
    pub speaker: String,
    /// Nearest enclosing card of a container; the track badge lives in here.
    pub card: String,
    pub track: String,
    /// Anchor wrapping a title; also the per-item link inside a bundle.
    pub link: String,
    /// Marker that turns a container into a bundle of lightning talks.
    pub lt_wrapper: String,
    pub lt_item: String,
}

impl Default for ListSelectors {
    fn default() -> Self {
        Self {
            container: s!(".bg-white .text-left"),
            title: s!("p.text-16"),
            speaker: s!("p.text-14"),
            card: s!("[class*='bg-white']"),
            track: s!("[class*='bg-track-']"),
            link: s!(r"a.hover\:underline"),
            lt_wrapper: s!(".flex.flex-col.gap-5"),
            lt_item: s!(".flex.flex-col.gap-1"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailSelectors {
    pub description: String,
    /// Images searched for one whose alt text is the session title.
    pub titled_image: String,
    /// Fallback when no image carries the session title as alt text.
    pub thumbnail: String,
    pub speaker_section: String,
    /// Queried inside the speaker section.
    pub speaker_icon: String,
    pub speaker_affiliation: String,
    pub speaker_profile: String,
    pub speaker_links: String,
}

impl Default for DetailSelectors {
    fn default() -> Self {
        Self {
            description: s!(".prose"),
            titled_image: s!("img"),
            thumbnail: s!(".rounded-lg.overflow-hidden img"),
            speaker_section: s!(".bg-white.rounded-lg"),
            speaker_icon: s!("img"),
            speaker_affiliation: s!("p.text-sm.text-gray-600"),
            speaker_profile: s!(".mt-4"),
            speaker_links: s!("a"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorSchema {
    pub list: ListSelectors,
    pub detail: DetailSelectors,
}

impl SelectorSchema {
    /// Selector group that matches once either page kind has rendered its content:
    /// a list container or a detail description.
    pub fn ready_selector(&self) -> String {
        format!("{}, {}", self.list.container, self.detail.description)
    }

    pub fn compile(&self) -> Result<CompiledSchema, ScrapeError> {
        let l = &self.list;
        let d = &self.detail;
        Ok(CompiledSchema {
            list: CompiledList {
                container: parse("list.container", &l.container)?,
                title: parse("list.title", &l.title)?,
                speaker: parse("list.speaker", &l.speaker)?,
                card: parse("list.card", &l.card)?,
                track: parse("list.track", &l.track)?,
                link: parse("list.link", &l.link)?,
                lt_wrapper: parse("list.lt_wrapper", &l.lt_wrapper)?,
                lt_item: parse("list.lt_item", &l.lt_item)?,
            },
            detail: CompiledDetail {
                description: parse("detail.description", &d.description)?,
                thumbnail: parse("detail.thumbnail", &d.thumbnail)?,
                titled_image: parse("detail.titled_image", &d.titled_image)?,
                speaker_section: parse("detail.speaker_section", &d.speaker_section)?,
                speaker_icon: parse("detail.speaker_icon", &d.speaker_icon)?,
                speaker_affiliation: parse("detail.speaker_affiliation", &d.speaker_affiliation)?,
                speaker_profile: parse("detail.speaker_profile", &d.speaker_profile)?,
                speaker_links: parse("detail.speaker_links", &d.speaker_links)?,
            },
        })
    }
}

fn parse(field: &'static str, css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        field,
        selector: s!(css),
        reason: e.to_string(),
    })
}

#[derive(Debug)]
pub struct CompiledList {
    pub container: Selector,
    pub title: Selector,
    pub speaker: Selector,
    pub card: Selector,
    pub track: Selector,
    pub link: Selector,
    pub lt_wrapper: Selector,
    pub lt_item: Selector,
}

#[derive(Debug)]
pub struct CompiledDetail {
    pub description: Selector,
    pub thumbnail: Selector,
    pub titled_image: Selector,
    pub speaker_section: Selector,
    pub speaker_icon: Selector,
    pub speaker_affiliation: Selector,
    pub speaker_profile: Selector,
    pub speaker_links: Selector,
}

#[derive(Debug)]
pub struct CompiledSchema {
    pub list: CompiledList,
    pub detail: CompiledDetail,
}
