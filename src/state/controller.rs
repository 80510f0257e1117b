use std::collections::VecDeque;
use std::io::BufRead;
use std::path::Path;

use crate::data::{loader, parser};
use crate::state::notice::Notice;
use crate::state::number_store::NumberStore;
use crate::state::view_model::ViewModel;

/// Owns the number list and turns every mutation into a fresh [`ViewModel`].
///
/// Each action runs to completion on the caller's thread: mutate the store,
/// rebuild the view model, queue any notices.
#[derive(Debug)]
pub struct PresentationController {
    store: NumberStore,
    view: ViewModel,
    notices: VecDeque<Notice>,
}

impl PresentationController {
    pub fn new() -> Self {
        Self {
            store: NumberStore::new(),
            view: ViewModel::empty(),
            notices: VecDeque::new(),
        }
    }

    /// Parse the entry text and append it.
    ///
    /// Returns `true` when a number was added, so the caller can clear the
    /// entry field. Blank input is ignored without a notice.
    pub fn submit(&mut self, text: &str) -> bool {
        let token = text.trim();
        if token.is_empty() {
            return false;
        }
        match parser::parse(token) {
            Ok(n) => {
                self.store.append(n);
                self.refresh();
                true
            }
            Err(e) => {
                tracing::warn!("Rejected input: {e}");
                self.notices.push_back(Notice::from(&e));
                false
            }
        }
    }

    pub fn load_file(&mut self, path: &Path) {
        match loader::open(path) {
            Ok(reader) => self.load_reader(reader, path),
            Err(e) => self.finish_load(path, loader::LoadOutcome::failed(e)),
        }
    }

    /// Ingest whitespace-separated numbers from `reader`, which was opened
    /// from `source`.
    pub fn load_reader<R: BufRead>(&mut self, reader: R, source: &Path) {
        let store = &mut self.store;
        let outcome = loader::load_reader(reader, source, |ns| store.append_all(ns));
        self.finish_load(source, outcome);
    }

    fn finish_load(&mut self, source: &Path, outcome: loader::LoadOutcome) {
        for e in &outcome.rejected {
            tracing::warn!("Rejected token in {:?}: {e}", source);
            self.notices.push_back(Notice::from(e));
        }
        match &outcome.failure {
            Some(e) => {
                tracing::error!("{e}, kept {} numbers", outcome.added);
                self.notices.push_back(Notice::from(e));
            }
            None => tracing::info!("Loaded {} numbers from {:?}", outcome.added, source),
        }
        // Refresh even after a failure so the display matches whatever was kept.
        self.refresh();
    }

    pub fn clear(&mut self) {
        if !self.store.is_empty() {
            tracing::info!("Cleared {} numbers", self.store.len());
        }
        self.store.clear();
        self.refresh();
    }

    /// Rebuild the view model from the current store contents.
    pub fn refresh(&mut self) -> &ViewModel {
        self.view = ViewModel::build(self.store.snapshot());
        &self.view
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.view
    }

    /// The notice currently due for display, if any.
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.notices.pop_front()
    }
}

impl Default for PresentationController {
    fn default() -> Self {
        Self::new()
    }
}
