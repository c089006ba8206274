//! Integration tests for the page loader
//!
//! These tests drive a [`Router`] over the built-in page table with an
//! in-memory fetcher and a recording host:
//! 1. Static documents, collections and detail pages
//! 2. History handling per navigation provenance
//! 3. Failure handling and cleanup
//! 4. Last-navigation-wins for overlapping navigations

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use rstest::{fixture, rstest};
use serde_json::json;

use schoolsite_core::testing::MemoryFetcher;
use schoolsite_core::{Fetcher, HistoryEntry, PageError, PageResult, Provenance, SiteSettings};
use schoolsite_renderers::{PageInput, RenderContext, Renderer, RendererRegistry};
use schoolsite_router::testing::{HistoryOp, RecordingHost};
use schoolsite_router::{Host, NavigationOutcome, PageConfig, PageTable, RendererRef, Router};

const NEWS: &str = r#"[
	{ "id": 1, "title": "วันไหว้ครู", "date": "2024-06-13", "summary": "s1", "imageUrls": ["a.jpg", "b.jpg"] },
	{ "id": "2", "title": "รับสมัครนักเรียน", "date": "2024-02-01", "summary": "s2", "important": true },
	{ "id": 5, "title": "กีฬาสี", "date": "2024-01-19", "summary": "s5" }
]"#;

fn error_message() -> String {
	SiteSettings::default().messages.error
}

fn entry(page_id: &str, item_id: Option<&str>) -> HistoryEntry {
	HistoryEntry {
		page_id: page_id.to_string(),
		item_id: item_id.map(str::to_string),
		url: schoolsite_core::Fragment::build(page_id, item_id),
	}
}

#[fixture]
fn fetcher() -> MemoryFetcher {
	MemoryFetcher::new()
		.with("vision.html", "<h1>วิสัยทัศน์</h1>")
		.with("contact.html", "<h1>ติดต่อเรา</h1>")
		.with("news.json", NEWS)
		.with(
			"home.html",
			r#"<body><div id="home-news-content"></div><div id="home-gallery-content"></div></body>"#,
		)
		.with("gallery.json", "[]")
}

fn router_with(fetcher: MemoryFetcher, host: RecordingHost) -> Router<MemoryFetcher, RecordingHost> {
	let table = PageTable::builtin(&RendererRegistry::builtin()).unwrap();
	Router::new(table, fetcher, host, SiteSettings::default())
}

/// Renderer that records the input it was given.
#[derive(Default)]
struct CapturingRenderer {
	inputs: RefCell<Vec<PageInput>>,
}

#[async_trait(?Send)]
impl Renderer for CapturingRenderer {
	async fn render(&self, input: PageInput, _ctx: &RenderContext<'_>) -> PageResult<String> {
		self.inputs.borrow_mut().push(input);
		Ok("<p>captured</p>".to_string())
	}
}

// ---------------------------------------------------------------------------
// Static documents and collections
// ---------------------------------------------------------------------------

#[rstest]
#[tokio::test]
async fn test_static_document_written_verbatim(fetcher: MemoryFetcher) {
	let router = router_with(fetcher, RecordingHost::new());

	let outcome = router.navigate("vision", None, Provenance::User).await;

	assert_eq!(outcome, NavigationOutcome::Rendered);
	assert_eq!(router.host().content(), "<h1>วิสัยทัศน์</h1>");
	assert_eq!(router.fetcher().requests(), vec!["vision.html"]);
}

#[rstest]
#[tokio::test]
async fn test_static_document_never_invokes_a_renderer() {
	let capture = Rc::new(CapturingRenderer::default());
	let mut table = PageTable::new();
	table.insert(PageConfig::document("qa", "qa.html")).unwrap();
	table
		.insert(PageConfig::data(
			"faq",
			"faq.json",
			RendererRef::new("capture", Rc::clone(&capture) as Rc<dyn Renderer>),
		))
		.unwrap();
	let fetcher = MemoryFetcher::new()
		.with("qa.html", "<p>qa</p>")
		.with("faq.json", "[]");
	let router = Router::new(table, fetcher, RecordingHost::new(), SiteSettings::default());

	router.navigate("qa", None, Provenance::User).await;

	assert!(capture.inputs.borrow().is_empty());
	assert_eq!(router.host().content(), "<p>qa</p>");
}

#[rstest]
#[tokio::test]
async fn test_collection_page_receives_whole_collection() {
	let capture = Rc::new(CapturingRenderer::default());
	let mut table = PageTable::new();
	table
		.insert(PageConfig::data(
			"news",
			"news.json",
			RendererRef::new("capture", Rc::clone(&capture) as Rc<dyn Renderer>),
		))
		.unwrap();
	let router = Router::new(
		table,
		MemoryFetcher::new().with("news.json", NEWS),
		RecordingHost::new(),
		SiteSettings::default(),
	);

	// An item id on a list page is ignored.
	router.navigate("news", Some("2"), Provenance::User).await;

	let inputs = capture.inputs.borrow();
	let expected: serde_json::Value = serde_json::from_str(NEWS).unwrap();
	assert_eq!(*inputs, vec![PageInput::Collection(expected)]);
}

#[rstest]
#[tokio::test]
async fn test_news_page_uses_news_renderer(fetcher: MemoryFetcher) {
	let router = router_with(fetcher, RecordingHost::new());

	router.navigate("news", None, Provenance::User).await;

	let html = router.host().content();
	assert!(html.contains("ข่าวประชาสัมพันธ์"));
	let important = html.find("รับสมัครนักเรียน").unwrap();
	let newest = html.find("วันไหว้ครู").unwrap();
	assert!(important < newest);
}

#[rstest]
#[tokio::test]
async fn test_home_page_fetches_its_own_data(fetcher: MemoryFetcher) {
	let router = router_with(fetcher, RecordingHost::new());

	let outcome = router.navigate("home", None, Provenance::User).await;

	assert_eq!(outcome, NavigationOutcome::Rendered);
	assert!(router.host().content().contains("วันไหว้ครู"));
	for path in ["home.html", "news.json", "gallery.json"] {
		assert_eq!(router.fetcher().request_count(path), 1, "{}", path);
	}
}

// ---------------------------------------------------------------------------
// Detail pages
// ---------------------------------------------------------------------------

#[rstest]
#[case("1", "วันไหว้ครู")]
#[case("2", "รับสมัครนักเรียน")]
#[case("5", "กีฬาสี")]
#[tokio::test]
async fn test_detail_page_renders_matching_record(
	fetcher: MemoryFetcher,
	#[case] item_id: &str,
	#[case] title: &str,
) {
	let router = router_with(fetcher, RecordingHost::new());

	let outcome = router.navigate("news-detail", Some(item_id), Provenance::User).await;

	assert_eq!(outcome, NavigationOutcome::Rendered);
	let html = router.host().content();
	assert!(html.contains(title));
	assert!(html.contains(r#"data-page="news""#));
}

#[rstest]
#[tokio::test]
async fn test_detail_renderer_receives_exactly_one_record() {
	let capture = Rc::new(CapturingRenderer::default());
	let mut table = PageTable::new();
	table
		.insert(
			PageConfig::data(
				"news-detail",
				"news.json",
				RendererRef::new("capture", Rc::clone(&capture) as Rc<dyn Renderer>),
			)
			.detail(),
		)
		.unwrap();
	let router = Router::new(
		table,
		MemoryFetcher::new().with("news.json", NEWS),
		RecordingHost::new(),
		SiteSettings::default(),
	);

	router.navigate("news-detail", Some("5"), Provenance::User).await;

	let inputs = capture.inputs.borrow();
	assert_eq!(inputs.len(), 1);
	assert!(matches!(&inputs[0], PageInput::Record(record) if record["title"] == json!("กีฬาสี")));
}

#[rstest]
#[tokio::test]
async fn test_detail_without_match_shows_error_and_skips_history(fetcher: MemoryFetcher) {
	let router = router_with(fetcher, RecordingHost::new());

	let outcome = router.navigate("news-detail", Some("9"), Provenance::User).await;

	assert_eq!(
		outcome,
		NavigationOutcome::Failed(PageError::ItemNotFound {
			page_id: "news-detail".to_string(),
			item_id: "9".to_string(),
		})
	);
	assert_eq!(router.host().content(), error_message());
	assert!(router.host().history().is_empty());
	assert_eq!(router.host().menu_closes(), 1);
	assert_eq!(router.host().scrolls(), 1);
}

#[rstest]
#[tokio::test]
async fn test_detail_without_item_id_shows_error_and_skips_history(fetcher: MemoryFetcher) {
	let router = router_with(fetcher, RecordingHost::new());

	let outcome = router.navigate("news-detail", None, Provenance::User).await;

	assert_eq!(
		outcome,
		NavigationOutcome::Failed(PageError::ItemIdMissing("news-detail".to_string()))
	);
	assert_eq!(router.host().content(), error_message());
	assert!(router.host().history().is_empty());
	assert_eq!(router.state().current(), None);
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

#[rstest]
#[tokio::test]
async fn test_user_navigation_pushes_fragment(fetcher: MemoryFetcher) {
	let router = router_with(fetcher, RecordingHost::new());

	router.navigate("news-detail", Some("2"), Provenance::User).await;

	assert_eq!(
		router.host().history(),
		vec![HistoryOp::Push(entry("news-detail", Some("2")))]
	);
	assert_eq!(router.host().location_hash(), "#/news-detail/2");
}

#[rstest]
#[tokio::test]
async fn test_history_replay_does_not_touch_history(fetcher: MemoryFetcher) {
	let router = router_with(fetcher, RecordingHost::with_hash("#/contact"));

	let outcome = router.handle_url_change().await;

	assert_eq!(outcome, NavigationOutcome::Rendered);
	assert_eq!(router.host().content(), "<h1>ติดต่อเรา</h1>");
	assert!(router.host().history().is_empty());
}

#[rstest]
#[tokio::test]
async fn test_initial_load_without_fragment_replaces_entry(fetcher: MemoryFetcher) {
	let router = router_with(fetcher, RecordingHost::new());

	router.handle_url_change().await;

	assert_eq!(router.host().history(), vec![HistoryOp::Replace(entry("home", None))]);
	assert_eq!(router.host().location_hash(), "#/home");
}

#[rstest]
#[case("#/news-detail/2", "รับสมัครนักเรียน")]
#[case("#/", "วันไหว้ครู")]
#[case("#/vision", "วิสัยทัศน์")]
#[tokio::test]
async fn test_url_change_parses_fragment(
	fetcher: MemoryFetcher,
	#[case] hash: &str,
	#[case] expected: &str,
) {
	let router = router_with(fetcher, RecordingHost::with_hash(hash));

	let outcome = router.handle_url_change().await;

	assert!(outcome.is_rendered());
	assert!(router.host().content().contains(expected));
}

#[rstest]
#[tokio::test]
async fn test_back_navigation_replays_previous_page(fetcher: MemoryFetcher) {
	let router = router_with(fetcher, RecordingHost::new());
	router.navigate("vision", None, Provenance::User).await;
	router.navigate("contact", None, Provenance::User).await;

	router.host().set_hash("#/vision");
	router.handle_url_change().await;

	assert_eq!(router.host().content(), "<h1>วิสัยทัศน์</h1>");
	assert_eq!(router.host().history().len(), 2);
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[rstest]
#[tokio::test]
async fn test_transport_failure_shows_error() {
	let router = router_with(
		MemoryFetcher::new().with_status("news.json", 500, ""),
		RecordingHost::new(),
	);

	let outcome = router.navigate("news", None, Provenance::User).await;

	assert_eq!(
		outcome,
		NavigationOutcome::Failed(PageError::Transport {
			path: "news.json".to_string(),
			status: 500,
		})
	);
	assert_eq!(router.host().content(), error_message());
	assert!(router.host().history().is_empty());
}

#[rstest]
#[tokio::test]
async fn test_network_failure_shows_error() {
	let router = router_with(
		MemoryFetcher::new().with_network_error("vision.html", "offline"),
		RecordingHost::new(),
	);

	let outcome = router.navigate("vision", None, Provenance::User).await;

	assert!(matches!(outcome, NavigationOutcome::Failed(PageError::Network { .. })));
	assert_eq!(router.host().content(), error_message());
}

#[rstest]
#[tokio::test]
async fn test_router_usable_after_failure(fetcher: MemoryFetcher) {
	let router = router_with(fetcher, RecordingHost::new());

	router.navigate("missing", None, Provenance::User).await;
	let outcome = router.navigate("vision", None, Provenance::User).await;

	assert_eq!(outcome, NavigationOutcome::Rendered);
	assert_eq!(router.host().history(), vec![HistoryOp::Push(entry("vision", None))]);
}

// ---------------------------------------------------------------------------
// Overlapping navigations
// ---------------------------------------------------------------------------

/// Fetcher that holds back one path until released.
struct GatedFetcher {
	inner: MemoryFetcher,
	gated_path: String,
	gate: RefCell<Option<oneshot::Receiver<()>>>,
}

#[async_trait(?Send)]
impl Fetcher for GatedFetcher {
	async fn fetch_text(&self, path: &str) -> PageResult<String> {
		if path == self.gated_path {
			let gate = self.gate.borrow_mut().take();
			if let Some(gate) = gate {
				let _ = gate.await;
			}
		}
		self.inner.fetch_text(path).await
	}
}

#[rstest]
#[tokio::test]
async fn test_late_navigation_is_superseded(fetcher: MemoryFetcher) {
	let (release, gate) = oneshot::channel();
	let gated = GatedFetcher {
		inner: fetcher,
		gated_path: "vision.html".to_string(),
		gate: RefCell::new(Some(gate)),
	};
	let table = PageTable::builtin(&RendererRegistry::builtin()).unwrap();
	let router = Router::new(table, gated, RecordingHost::new(), SiteSettings::default());

	let (slow, fast) = futures::join!(
		router.navigate("vision", None, Provenance::User),
		async {
			let outcome = router.navigate("contact", None, Provenance::User).await;
			release.send(()).unwrap();
			outcome
		}
	);

	assert_eq!(slow, NavigationOutcome::Superseded);
	assert_eq!(fast, NavigationOutcome::Rendered);
	assert_eq!(router.host().content(), "<h1>ติดต่อเรา</h1>");
	assert_eq!(router.host().history(), vec![HistoryOp::Push(entry("contact", None))]);
	assert_eq!(router.host().menu_closes(), 1);
	assert_eq!(router.host().scrolls(), 1);
	assert_eq!(router.state().current().unwrap().page_id, "contact");
}
