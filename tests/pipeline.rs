//! End-to-end tests driving the engine through a simulated host.
//!
//! The harness executes every action the handler returns: patches go to a
//! recording surface, timer and frame requests are held until the test
//! fires them, analytics events are collected. Time and frames are fully
//! simulated, so debounce and supersession behavior is deterministic.

use bionav::app::FilterGroup;
use bionav::catalog::{summarize_categories, CatalogLoader, CatalogSource, StaticSource};
use bionav::telemetry::AnalyticsEvent;
use bionav::{
    apply_patch, handle_event, initialize, Action, AppState, BionavError, Config, Event,
    ListSurface, ResourceCard,
};

const CATALOG: &str = r#"[
    {"id": "1", "name": "Alpha", "category": "genomics", "category_name": "Genomics",
     "resource_type": "database", "short_description": "Genome browser",
     "url": "https://example.org/alpha"},
    {"id": "2", "name": "Beta", "category": "plant", "category_name": "Plant",
     "resource_type": "web", "short_description": "Plant portal",
     "url": "https://example.org/beta"},
    {"id": "3", "name": "Gamma", "category": "genomics", "category_name": "Genomics",
     "resource_type": "web", "short_description": "Variant viewer",
     "url": "https://example.org/gamma"}
]"#;

#[derive(Default)]
struct RecordingSurface {
    cards: Vec<ResourceCard>,
    clears: usize,
}

impl ListSurface for RecordingSurface {
    fn clear(&mut self) {
        self.cards.clear();
        self.clears += 1;
    }

    fn append(&mut self, cards: &[ResourceCard]) {
        self.cards.extend_from_slice(cards);
    }
}

/// Simulated host: owns the state, the surface, and the two pending
/// scheduling slots the engine can occupy.
struct Harness {
    state: AppState,
    surface: RecordingSurface,
    pending_timer: Option<u64>,
    pending_frame: Option<u64>,
    rendered_counts: Vec<usize>,
    marks: Vec<(FilterGroup, String)>,
    tracked: Vec<AnalyticsEvent>,
}

impl Harness {
    fn new(batch_size: usize) -> Self {
        let config = Config {
            batch_size,
            ..Config::default()
        };
        Self {
            state: initialize(&config),
            surface: RecordingSurface::default(),
            pending_timer: None,
            pending_frame: None,
            rendered_counts: Vec::new(),
            marks: Vec::new(),
            tracked: Vec::new(),
        }
    }

    fn dispatch(&mut self, event: Event) {
        let actions = handle_event(&mut self.state, &event).unwrap();
        self.execute(actions);
    }

    fn execute(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::ArmSearchTimer { token, .. } => self.pending_timer = Some(token),
                Action::RequestFrame { generation } => self.pending_frame = Some(generation),
                Action::Patch(patch) => apply_patch(Some(&mut self.surface), &patch),
                Action::MarkActive { group, key } => self.marks.push((group, key)),
                Action::NotifyRendered { count } => self.rendered_counts.push(count),
                Action::Track(event) => self.tracked.push(event),
            }
        }
    }

    /// Fires the pending debounce timer, if any.
    fn elapse_quiet_interval(&mut self) {
        if let Some(token) = self.pending_timer.take() {
            self.dispatch(Event::SearchElapsed { token });
        }
    }

    /// Drives frame callbacks until the render pass stops requesting them.
    fn run_frames(&mut self) {
        while let Some(generation) = self.pending_frame.take() {
            self.dispatch(Event::FrameTick { generation });
        }
    }

    fn load_catalog(&mut self) {
        let mut loader = CatalogLoader::new(Box::new(StaticSource::new(CATALOG, "embedded")));
        let resources = loader.load().unwrap();
        self.dispatch(Event::CatalogLoaded { resources });
        self.run_frames();
    }

    fn displayed_ids(&self) -> Vec<&str> {
        self.surface.cards.iter().map(|c| c.id.as_str()).collect()
    }
}

#[test]
fn load_renders_the_full_catalog() {
    let mut harness = Harness::new(50);
    harness.load_catalog();

    assert_eq!(harness.displayed_ids(), ["1", "2", "3"]);
    assert_eq!(harness.rendered_counts, [3]);
    assert!(harness
        .tracked
        .contains(&AnalyticsEvent::CatalogLoaded { count: 3 }));
}

#[test]
fn category_filter_narrows_the_display() {
    let mut harness = Harness::new(50);
    harness.load_catalog();

    harness.dispatch(Event::SelectCategory {
        key: "genomics".to_string(),
    });
    harness.run_frames();

    assert_eq!(harness.displayed_ids(), ["1", "3"]);
    assert_eq!(
        harness.marks.last(),
        Some(&(FilterGroup::Category, "genomics".to_string()))
    );
}

#[test]
fn combined_filters_and_search_intersect() {
    let mut harness = Harness::new(50);
    harness.load_catalog();

    harness.dispatch(Event::SelectCategory {
        key: "genomics".to_string(),
    });
    harness.run_frames();
    harness.dispatch(Event::SelectType {
        key: "web".to_string(),
    });
    harness.run_frames();
    harness.dispatch(Event::SearchInput {
        text: "Variant".to_string(),
    });
    harness.elapse_quiet_interval();
    harness.run_frames();

    assert_eq!(harness.displayed_ids(), ["3"]);
    assert_eq!(harness.rendered_counts.last(), Some(&1));
}

#[test]
fn search_matches_case_insensitively_over_the_whole_collection() {
    let mut harness = Harness::new(50);
    harness.load_catalog();

    harness.dispatch(Event::SearchInput {
        text: "ALPHA".to_string(),
    });
    harness.elapse_quiet_interval();
    harness.run_frames();

    assert_eq!(harness.displayed_ids(), ["1"]);
    assert!(harness.tracked.contains(&AnalyticsEvent::Search {
        term: "alpha".to_string(),
        result_count: 1,
    }));
}

#[test]
fn rapid_typing_collapses_to_one_evaluation() {
    let mut harness = Harness::new(50);
    harness.load_catalog();

    // Three keystrokes inside the quiet interval; only the last timer
    // survives in the host's single slot, and only its token is current.
    for text in ["p", "pl", "plant"] {
        harness.dispatch(Event::SearchInput {
            text: text.to_string(),
        });
    }
    let searches_before = harness
        .tracked
        .iter()
        .filter(|e| matches!(e, AnalyticsEvent::Search { .. }))
        .count();
    assert_eq!(searches_before, 0);

    harness.elapse_quiet_interval();
    harness.run_frames();

    assert_eq!(harness.displayed_ids(), ["2"]);
    let searches: Vec<&AnalyticsEvent> = harness
        .tracked
        .iter()
        .filter(|e| matches!(e, AnalyticsEvent::Search { .. }))
        .collect();
    assert_eq!(searches.len(), 1);
}

#[test]
fn batch_size_one_renders_chunk_by_chunk() {
    let mut harness = Harness::new(1);

    let mut loader = CatalogLoader::new(Box::new(StaticSource::new(CATALOG, "embedded")));
    let resources = loader.load().unwrap();
    harness.dispatch(Event::CatalogLoaded { resources });

    // First chunk is synchronous; the rest wait for frames.
    assert_eq!(harness.displayed_ids(), ["1"]);
    assert!(harness.rendered_counts.is_empty());

    harness.run_frames();
    assert_eq!(harness.displayed_ids(), ["1", "2", "3"]);
    assert_eq!(harness.rendered_counts, [3]);
}

#[test]
fn superseding_render_discards_the_stale_pass() {
    let mut harness = Harness::new(1);
    let mut loader = CatalogLoader::new(Box::new(StaticSource::new(CATALOG, "embedded")));
    let resources = loader.load().unwrap();
    harness.dispatch(Event::CatalogLoaded { resources });

    // The initial pass still has two chunks in flight.
    let stale_generation = harness.pending_frame.unwrap();

    // A filter selection starts a new pass before the first finishes.
    harness.dispatch(Event::SelectCategory {
        key: "plant".to_string(),
    });
    let after_restart = harness.displayed_ids().len();

    // The stale frame callback fires anyway; it must append nothing.
    harness.dispatch(Event::FrameTick {
        generation: stale_generation,
    });
    assert_eq!(harness.displayed_ids().len(), after_restart);

    // The new pass completes and the display equals its full output.
    harness.run_frames();
    assert_eq!(harness.displayed_ids(), ["2"]);
    assert_eq!(harness.rendered_counts, [1]);
}

#[test]
fn clearing_the_search_restores_the_base_filtered_set() {
    let mut harness = Harness::new(50);
    harness.load_catalog();

    harness.dispatch(Event::SelectType {
        key: "web".to_string(),
    });
    harness.run_frames();
    harness.dispatch(Event::SearchInput {
        text: "plant".to_string(),
    });
    harness.elapse_quiet_interval();
    harness.run_frames();
    assert_eq!(harness.displayed_ids(), ["2"]);

    harness.dispatch(Event::SearchInput {
        text: "   ".to_string(),
    });
    harness.elapse_quiet_interval();
    harness.run_frames();

    assert_eq!(harness.displayed_ids(), ["2", "3"]);
}

#[test]
fn load_failure_keeps_the_display_empty() {
    struct DeadSource;
    impl CatalogSource for DeadSource {
        fn fetch(&mut self) -> bionav::Result<String> {
            Err(BionavError::Catalog("network unreachable".to_string()))
        }
        fn describe(&self) -> String {
            "dead".to_string()
        }
    }

    let mut harness = Harness::new(50);
    let mut loader = CatalogLoader::new(Box::new(DeadSource));
    let error = loader.load().unwrap_err();

    harness.dispatch(Event::CatalogFailed {
        error: error.to_string(),
    });

    assert!(harness.displayed_ids().is_empty());
    assert_eq!(harness.surface.clears, 0);
    assert!(harness.rendered_counts.is_empty());
}

#[test]
fn category_summary_feeds_the_filter_controls() {
    let mut loader = CatalogLoader::new(Box::new(StaticSource::new(CATALOG, "embedded")));
    let resources = loader.load().unwrap();
    let summaries = summarize_categories(&resources);

    assert_eq!(summaries[0].key, "all");
    assert_eq!(summaries[0].count, 3);
    assert_eq!(summaries[1].key, "genomics");
    assert_eq!(summaries[1].label, "Genomics");
    assert_eq!(summaries[1].count, 2);
    assert_eq!(summaries[2].key, "plant");
    assert_eq!(summaries[2].count, 1);
}

#[test]
fn data_attributes_survive_to_the_surface() {
    let mut harness = Harness::new(50);
    harness.load_catalog();

    let card = &harness.surface.cards[1];
    assert_eq!(card.category, "plant");
    assert_eq!(card.kind_key, "web");
    assert_eq!(card.access_label, "访问网站");
    assert_eq!(card.url, "https://example.org/beta");
}

#[test]
fn opened_resources_are_tracked_through_the_sink() {
    use bionav::telemetry::{track, FileSink};

    let mut harness = Harness::new(50);
    harness.load_catalog();
    harness.dispatch(Event::ResourceOpened {
        id: "1".to_string(),
    });

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analytics.jsonl");
    let mut sink = FileSink::new(path.clone());
    for event in harness.tracked.drain(..) {
        track(&mut sink, event);
    }

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.lines().any(|line| {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        value["event"] == "resource_access" && value["id"] == "1"
    }));
}
