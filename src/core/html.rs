// src/core/html.rs
// Small DOM helpers over `scraper` used by the page specs.
// Text helpers trim but do not collapse inner whitespace.

use scraper::{ElementRef, Selector};

/// Concatenated text of every match of `sel` under `scope`, trimmed.
pub fn select_text(scope: ElementRef<'_>, sel: &Selector) -> String {
    let mut out = s!();
    for el in scope.select(sel) {
        out.extend(el.text());
    }
    out.trim().to_string()
}

/// Trimmed text of a single element.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// `Some(s)` unless `s` is empty.
pub fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

/// First match of `sel` under `scope`.
pub fn first<'a>(scope: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    scope.select(sel).next()
}

/// Attribute of an element, `None` when missing or blank.
pub fn attr(el: ElementRef<'_>, name: &str) -> Option<String> {
    el.value()
        .attr(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Nearest element matching `sel`, starting with `el` itself and walking up.
pub fn closest<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    if sel.matches(&el) {
        return Some(el);
    }
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| sel.matches(a))
}

/// Nearest strict ancestor of `el` matching `sel`, not looking past `limit`.
/// `limit` itself is a candidate.
pub fn ancestor_within<'a>(
    el: ElementRef<'a>,
    sel: &Selector,
    limit: ElementRef<'a>,
) -> Option<ElementRef<'a>> {
    for node in el.ancestors() {
        let Some(a) = ElementRef::wrap(node) else { continue };
        if sel.matches(&a) {
            return Some(a);
        }
        if a.id() == limit.id() {
            break;
        }
    }
    None
}
