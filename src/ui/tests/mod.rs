//! Unit tests for the UI layer.

use std::rc::Rc;

use crate::app::BoardApp;
use crate::config::BoardConfig;
use crate::ui::adapters::memory::{InMemoryDocument, RecordingNotifier};
use rstest::fixture;


/// A started board plus concrete handles on its adapters.
pub(super) struct Harness {
    pub document: Rc<InMemoryDocument>,
    pub notifier: Rc<RecordingNotifier>,
    pub app: BoardApp,
}

#[fixture]
pub(super) fn harness() -> Harness {
    start_board(BoardConfig::default())
}

pub(super) fn start_board(config: BoardConfig) -> Harness {
    let document = Rc::new(InMemoryDocument::for_board(&config));
    let notifier = Rc::new(RecordingNotifier::new());
    let app = BoardApp::start(document.clone(), notifier.clone(), config)
        .expect("stock page has every template");
    Harness {
        document,
        notifier,
        app,
    }
}
