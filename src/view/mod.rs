mod html;
mod text;
mod theme;

pub use html::render_html;
pub use text::render_text;
use theme::THEME;

use crate::archive::{self, Category, ContentSource, LoadState, MediaEntry};
use crate::config::RenderFormat;
use crate::embed::{self, Resolution};
use tracing::{debug, warn};

pub const PAGE_TITLE: &str = "Dungeon Synth Archive";

/// Identifies one load cycle: the tab it was issued for and its place in
/// the sequence of selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub category: Category,
    generation: u64,
}

/// The selected tab and what is currently shown for it.
#[derive(Debug)]
pub struct ArchiveView {
    category: Category,
    state: LoadState,
    generation: u64,
    discard_stale: bool,
}

/// What the content area shows, derived from the view state.
#[derive(Debug)]
pub enum Panel<'a> {
    Empty,
    Loading,
    Error(&'a str),
    Cards(Vec<Card<'a>>),
}

#[derive(Debug)]
pub struct Card<'a> {
    pub entry: &'a MediaEntry,
    pub resolution: Resolution,
}

impl ArchiveView {
    pub fn new(discard_stale: bool) -> Self {
        Self {
            category: Category::default(),
            state: LoadState::Idle,
            generation: 0,
            discard_stale,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    #[cfg(test)]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Switches to `category` and enters `Loading` right away. Reselecting
    /// the current tab starts a new cycle too.
    pub fn select(&mut self, category: Category) -> LoadTicket {
        self.category = category;
        self.generation += 1;
        self.state = LoadState::Loading;

        LoadTicket {
            category,
            generation: self.generation,
        }
    }

    /// Applies the outcome of the load issued with `ticket`. Returns whether
    /// the view changed.
    pub fn apply(&mut self, ticket: LoadTicket, outcome: LoadState) -> bool {
        if !outcome.is_settled() {
            warn!("Ignoring unsettled load outcome for {}", ticket.category);
            return false;
        }

        if ticket.generation != self.generation {
            if self.discard_stale {
                debug!(
                    "Dropping stale {} result (generation {}, current {})",
                    ticket.category, ticket.generation, self.generation
                );
                return false;
            }
            debug!(
                "Applying out-of-date {} result while {} is selected",
                ticket.category, self.category
            );
        }

        self.state = outcome;
        true
    }

    /// Selects `category` and runs its load to completion.
    pub async fn refresh(&mut self, source: &dyn ContentSource, category: Category) -> &LoadState {
        let ticket = self.select(category);
        let outcome = archive::load(source, category).await;
        self.apply(ticket, outcome);
        &self.state
    }

    pub fn panel(&self) -> Panel<'_> {
        match &self.state {
            LoadState::Idle => Panel::Empty,
            LoadState::Loading => Panel::Loading,
            LoadState::Failed(message) => Panel::Error(message),
            LoadState::Loaded(entries) => Panel::Cards(
                entries
                    .iter()
                    .map(|entry| Card {
                        entry,
                        resolution: embed::resolve(entry),
                    })
                    .collect(),
            ),
        }
    }
}

pub fn render(view: &ArchiveView, format: RenderFormat) -> String {
    match format {
        RenderFormat::Text => render_text(view),
        RenderFormat::Html => render_html(view),
    }
}
