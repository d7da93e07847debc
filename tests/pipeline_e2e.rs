// tests/pipeline_e2e.rs
//
// Whole run against canned pages: list pages → detail pages → CSV on disk.
//
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use talks_scrape::config::options::ScrapeOptions;
use talks_scrape::core::render::StaticPages;
use talks_scrape::csv::{parse_rows, COLUMNS};
use talks_scrape::error::ScrapeError;
use talks_scrape::runner;

const BASE: &str = "https://conf.example";

const DAY1: &str = r#"<html><body><main>
  <div class="bg-white rounded-md">
    <span class="bg-track-a">Aトラック</span>
    <div class="text-left">
      <a class="hover:underline" href="/talks/101"><p class="text-16">Ownership in practice</p></a>
      <p class="text-14">Alice</p>
    </div>
  </div>
  <div class="bg-white rounded-md">
    <span class="bg-track-b">Bトラック</span>
    <div class="text-left">
      <p class="text-16">Lightning Talks</p>
      <p class="text-14">Various</p>
      <div class="flex flex-col gap-5">
        <div class="flex flex-col gap-1">
          <a class="hover:underline" href="/talks/201"><p class="text-16">LT one</p></a>
          <p class="text-14">Bob</p>
        </div>
        <div class="flex flex-col gap-1">
          <a class="hover:underline" href="/talks/202"><p class="text-16">LT "two"</p></a>
          <p class="text-14">Carol</p>
        </div>
      </div>
    </div>
  </div>
</main></body></html>"#;

const DAY2: &str = "<html><body><main><p>Coming soon</p></main></body></html>";

fn detail_page(title: &str, who: &str) -> String {
    format!(
        r#"<html><body>
          <img src="/img/{who}.png" alt='{title}'>
          <div class="prose">About {title}</div>
          <div class="bg-white rounded-lg">
            <img src="/icons/{who}.png">
            <p class="text-sm text-gray-600">{who} Corp</p>
            <div class="mt-4">{who} likes Rust.</div>
            <a href="https://github.com/{who}">GitHub</a>
            <a href="https://x.com/{who}">X</a>
          </div>
        </body></html>"#
    )
}

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("talks_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    p
}

fn options(out: PathBuf) -> ScrapeOptions {
    let mut opts = ScrapeOptions::default();
    opts.base_url = Some(BASE.into());
    opts.out_path = out;
    opts.render.delay = Duration::ZERO;
    opts
}

fn site() -> StaticPages {
    // /talks/201 is deliberately missing: that detail page fails to render
    StaticPages::new()
        .with_page(format!("{BASE}/talks?day=1"), DAY1)
        .with_page(format!("{BASE}/talks?day=2"), DAY2)
        .with_page(format!("{BASE}/talks/101"), detail_page("Ownership in practice", "alice"))
        .with_page(format!("{BASE}/talks/202"), detail_page(r#"LT "two""#, "carol"))
}

fn col(name: &str) -> usize {
    COLUMNS.iter().position(|c| *c == name).unwrap()
}

#[test]
fn failing_detail_keeps_session_with_empty_detail_fields() {
    let dir = tmp_dir("partial");
    let out = dir.join("nested").join("sessions.csv");
    let mut pages = site();

    let summary = runner::run(&options(out.clone()), &mut pages, None).unwrap();
    assert_eq!(summary.rows, 3);
    assert_eq!(summary.path, out);

    let rows = parse_rows(&fs::read_to_string(&out).unwrap(), ',');
    assert_eq!(rows.len(), 4, "header + 3 sessions");
    assert_eq!(rows[0], COLUMNS);

    let titles: Vec<_> = rows[1..].iter().map(|r| r[col("title")].as_str()).collect();
    assert_eq!(titles, ["Ownership in practice", "LT one", r#"LT "two""#]);

    let failed = &rows[2];
    for c in [
        "description", "thumbnailUrl", "speakerAffiliation", "speakerProfile",
        "speakerGithub", "speakerTwitter", "speakerIconUrl",
    ] {
        assert_eq!(failed[col(c)], "", "{c} should be empty");
    }
    assert_eq!(failed[col("speaker")], "Bob");
    assert_eq!(failed[col("track")], "Bトラック");
    assert_eq!(failed[col("room")], "Bルーム");
    assert_eq!(failed[col("day")], "day1");

    let ok = &rows[3];
    assert_eq!(ok[col("description")], r#"About LT "two""#);
    assert_eq!(ok[col("thumbnailUrl")], "https://conf.example/img/carol.png");
    assert_eq!(ok[col("speakerIconUrl")], "https://conf.example/icons/carol.png");
    assert_eq!(ok[col("speakerAffiliation")], "carol Corp");
    assert_eq!(ok[col("speakerGithub")], "https://github.com/carol");
    assert_eq!(ok[col("speakerTwitter")], "https://x.com/carol");

    let first = &rows[1];
    assert_eq!(first[col("room")], "Aルーム");
    assert_eq!(first[col("speakerProfile")], "alice likes Rust.");
}

#[test]
fn pages_are_requested_lists_first_then_details_in_row_order() {
    let dir = tmp_dir("order");
    let mut pages = site();
    runner::run(&options(dir.join("s.csv")), &mut pages, None).unwrap();

    assert_eq!(
        pages.requested,
        [
            format!("{BASE}/talks?day=1"),
            format!("{BASE}/talks?day=2"),
            format!("{BASE}/talks/101"),
            format!("{BASE}/talks/201"),
            format!("{BASE}/talks/202"),
        ]
    );
}

#[test]
fn unavailable_list_page_yields_header_only_file() {
    let dir = tmp_dir("empty");
    let out = dir.join("sessions.csv");
    let mut pages = StaticPages::new();

    let summary = runner::run(&options(out.clone()), &mut pages, None).unwrap();
    assert_eq!(summary.rows, 0);

    let text = fs::read_to_string(&out).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert_eq!(pages.requested.len(), 2, "both days still attempted");
}

#[test]
fn output_is_overwritten_not_appended() {
    let dir = tmp_dir("overwrite");
    let out = dir.join("sessions.csv");
    runner::run(&options(out.clone()), site(), None).unwrap();
    runner::run(&options(out.clone()), site(), None).unwrap();

    let rows = parse_rows(&fs::read_to_string(&out).unwrap(), ',');
    assert_eq!(rows.len(), 4);
}

#[test]
fn unwritable_output_fails_the_run() {
    let dir = tmp_dir("blocked");
    fs::create_dir_all(&dir).unwrap();
    let blocker = dir.join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let err = runner::run(&options(blocker.join("sessions.csv")), site(), None).unwrap_err();
    assert!(matches!(err, ScrapeError::WriteFailure { .. }));
}

#[test]
fn missing_base_url_is_rejected_before_any_request() {
    let mut opts = options(tmp_dir("nobase").join("s.csv"));
    opts.base_url = None;
    let mut pages = site();

    let err = runner::run(&opts, &mut pages, None).unwrap_err();
    assert!(matches!(err, ScrapeError::Config(_)));
    assert!(pages.requested.is_empty());
}
