//! Shared world state for project board BDD scenarios.

use std::rc::Rc;

use projectboard::{
    app::BoardApp,
    board::domain::{ItemStatus, WorkItemId},
    config::BoardConfig,
    ui::{
        adapters::memory::{InMemoryDocument, RecordingNotifier},
        components::ProjectList,
        services::DropOutcome,
    },
    validation::RawFormInput,
};
use rstest::fixture;

/// Scenario world holding a running board and the last interaction results.
pub struct BoardWorld {
    pub document: Rc<InMemoryDocument>,
    pub notifier: Rc<RecordingNotifier>,
    pub app: BoardApp,
    pub last_input: Option<RawFormInput>,
    pub last_outcome: Option<DropOutcome>,
}

impl BoardWorld {
    /// Starts a board on the stock page.
    ///
    /// # Panics
    ///
    /// Panics if the stock page is missing a template.
    #[must_use]
    pub fn new() -> Self {
        let config = BoardConfig::default();
        let document = Rc::new(InMemoryDocument::for_board(&config));
        let notifier = Rc::new(RecordingNotifier::new());
        let app = BoardApp::start(document.clone(), notifier.clone(), config)
            .expect("stock page has every template");

        Self {
            document,
            notifier,
            app,
            last_input: None,
            last_outcome: None,
        }
    }

    /// Resolves a lane from its status name.
    pub fn lane(&self, name: &str) -> Result<&Rc<ProjectList>, eyre::Report> {
        let status = ItemStatus::try_from(name)
            .map_err(|err| eyre::eyre!("invalid lane in scenario: {err}"))?;
        Ok(self.app.lane(status))
    }

    /// Finds the id of the item with the given title.
    pub fn item_id(&self, title: &str) -> Result<WorkItemId, eyre::Report> {
        self.app
            .store()
            .snapshot()
            .iter()
            .find(|item| item.title() == title)
            .map(|item| item.id())
            .ok_or_else(|| eyre::eyre!("no item titled {title:?} on the board"))
    }

    /// Titles rendered in a lane, top to bottom.
    pub fn lane_titles(&self, name: &str) -> Result<Vec<String>, eyre::Report> {
        let lane = self.lane(name)?;
        Ok(self.document.texts_of(lane.list_element(), "h2"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
