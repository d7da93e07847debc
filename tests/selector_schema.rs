// tests/selector_schema.rs
//
// The selector schema is configuration: swapping it re-targets extraction
// without touching the extractors.
//
use talks_scrape::core::urls::BaseUrl;
use talks_scrape::error::ScrapeError;
use talks_scrape::session::{Day, SessionStub};
use talks_scrape::specs::{detail, talks};
use talks_scrape::specs::selectors::{DetailSelectors, ListSelectors, SelectorSchema};

fn base() -> BaseUrl {
    BaseUrl::parse("https://other.example/").unwrap()
}

fn semantic_schema() -> SelectorSchema {
    SelectorSchema {
        list: ListSelectors {
            container: "article.talk".into(),
            title: "h3".into(),
            speaker: ".who".into(),
            card: "section.slot".into(),
            track: ".track".into(),
            link: "a.more".into(),
            lt_wrapper: "ul.lightning".into(),
            lt_item: "li".into(),
        },
        detail: DetailSelectors {
            description: "#abstract".into(),
            titled_image: "main img".into(),
            thumbnail: "figure img".into(),
            speaker_section: "aside.speaker".into(),
            speaker_icon: "img.avatar".into(),
            speaker_affiliation: ".org".into(),
            speaker_profile: ".bio".into(),
            speaker_links: "a".into(),
        },
    }
}

const LIST: &str = r#"<html><body>
  <section class="slot">
    <span class="track">Main</span>
    <article class="talk"><a class="more" href="/t/1"><h3>Async all the way</h3></a><span class="who">Dana</span></article>
  </section>
  <section class="slot">
    <span class="track">Side</span>
    <article class="talk">
      <h3>LT block</h3><span class="who">MC</span>
      <ul class="lightning">
        <li><a class="more" href="/t/2"><h3>Tiny one</h3></a><span class="who">Eli</span></li>
        <li><a class="more" href="https://elsewhere.example/t/3"><h3>Tiny two</h3></a><span class="who">Fay</span></li>
      </ul>
    </article>
  </section>
</body></html>"#;

#[test]
fn custom_list_schema_drives_extraction() {
    let schema = semantic_schema().compile().unwrap();
    let stubs = talks::extract_list(LIST, Day::Day1, &schema.list, &base());

    let got: Vec<_> = stubs
        .iter()
        .map(|s| (s.title.as_str(), s.speaker.as_str(), s.track.as_deref(), s.detail_url.as_deref()))
        .collect();
    assert_eq!(
        got,
        [
            ("Async all the way", "Dana", Some("Main"), Some("https://other.example/t/1")),
            ("Tiny one", "Eli", Some("Side"), Some("https://other.example/t/2")),
            ("Tiny two", "Fay", Some("Side"), Some("https://elsewhere.example/t/3")),
        ]
    );
}

#[test]
fn default_schema_finds_nothing_on_foreign_markup() {
    let schema = SelectorSchema::default().compile().unwrap();
    assert!(talks::extract_list(LIST, Day::Day1, &schema.list, &base()).is_empty());
}

#[test]
fn custom_detail_schema_drives_extraction() {
    let schema = semantic_schema().compile().unwrap();
    let stub = SessionStub {
        title: "Async all the way".into(),
        speaker: "Dana".into(),
        day: Day::Day2,
        track: Some("Main".into()),
        detail_url: Some("https://other.example/t/1".into()),
    };
    let html = r#"<html><body>
      <figure><img src="/covers/1.jpg"></figure>
      <p id="abstract">Futures, pinned.</p>
      <aside class="speaker">
        <img class="logo" src="/org.png"><img class="avatar" src="/dana.png">
        <span class="org">Acme</span><p class="bio">Runtime hacker.</p>
        <a href="https://twitter.com/dana">t</a>
      </aside>
    </body></html>"#;

    let d = detail::extract_detail(html, &stub, &schema.detail, &base());
    assert_eq!(d.description.as_deref(), Some("Futures, pinned."));
    assert_eq!(d.thumbnail_url.as_deref(), Some("https://other.example/covers/1.jpg"));
    assert_eq!(d.speaker_icon_url.as_deref(), Some("https://other.example/dana.png"));
    assert_eq!(d.speaker_affiliation.as_deref(), Some("Acme"));
    assert_eq!(d.speaker_profile.as_deref(), Some("Runtime hacker."));
    assert_eq!(d.speaker_twitter.as_deref(), Some("https://twitter.com/dana"));
    assert_eq!(d.speaker_github, None);
}

#[test]
fn titled_image_lookup_is_scoped_by_schema() {
    let schema = semantic_schema().compile().unwrap();
    let stub = SessionStub {
        title: "Async all the way".into(),
        speaker: "Dana".into(),
        day: Day::Day1,
        track: None,
        detail_url: Some("https://other.example/t/1".into()),
    };

    // Alt matches, but outside `main`: the fallback thumbnail wins.
    let outside = r#"<html><body>
      <header><img alt="Async all the way" src="/banner.png"></header>
      <main><figure><img src="/covers/1.jpg"></figure></main>
    </body></html>"#;
    let d = detail::extract_detail(outside, &stub, &schema.detail, &base());
    assert_eq!(d.thumbnail_url.as_deref(), Some("https://other.example/covers/1.jpg"));

    let inside = r#"<html><body>
      <main><img alt="Async all the way" src="/hero.png"><figure><img src="/covers/1.jpg"></figure></main>
    </body></html>"#;
    let d = detail::extract_detail(inside, &stub, &schema.detail, &base());
    assert_eq!(d.thumbnail_url.as_deref(), Some("https://other.example/hero.png"));
}

#[test]
fn invalid_schema_is_reported_at_compile_time() {
    let mut schema = SelectorSchema::default();
    schema.detail.speaker_section = "div[".into();
    let err = schema.compile().unwrap_err();
    assert!(matches!(err, ScrapeError::Selector { field: "detail.speaker_section", .. }));
}
