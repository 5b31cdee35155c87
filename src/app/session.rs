use crate::archive::{self, Category, ContentSource, LoadState};
use crate::view::{ArchiveView, LoadTicket};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, info, warn};

type Outcome = (LoadTicket, LoadState);

fn start_load(
    view: &mut ArchiveView,
    source: &Arc<dyn ContentSource>,
    results: &UnboundedSender<Outcome>,
    category: Category,
) {
    let ticket = view.select(category);
    let source = Arc::clone(source);
    let results = results.clone();

    tokio::spawn(async move {
        let outcome = archive::load(source.as_ref(), ticket.category).await;
        if results.send((ticket, outcome)).is_err() {
            debug!("Session closed before {} finished loading", ticket.category);
        }
    });
}

/// Drives the tab bar from `input`, one category key per line.
///
/// Loads run concurrently and are never cancelled; their results are applied
/// to the view in arrival order. `emit` is called whenever the view changes.
/// `quit` stops immediately, end of input stops once pending loads settle.
pub async fn run_session<R, F>(
    input: R,
    source: Arc<dyn ContentSource>,
    initial: Category,
    discard_stale: bool,
    mut emit: F,
) -> Result<ArchiveView>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(&ArchiveView) -> Result<()>,
{
    let mut view = ArchiveView::new(discard_stale);
    let (results, mut outcomes) = mpsc::unbounded_channel::<Outcome>();
    let mut lines = input.lines();
    let mut input_open = true;
    let mut pending = 1usize;

    start_load(&mut view, &source, &results, initial);
    emit(&view)?;

    while input_open || pending > 0 {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line.context("Failed to read tab selection")? else {
                    debug!("Input closed with {} loads pending", pending);
                    input_open = false;
                    continue;
                };

                let key = line.trim();
                if key.is_empty() {
                    continue;
                }
                if key == "quit" || key == "q" {
                    info!("Leaving archive session");
                    break;
                }

                match key.parse::<Category>() {
                    Ok(category) => {
                        start_load(&mut view, &source, &results, category);
                        pending += 1;
                        emit(&view)?;
                    }
                    Err(e) => warn!("{}", e),
                }
            }
            Some((ticket, outcome)) = outcomes.recv() => {
                pending -= 1;
                if view.apply(ticket, outcome) {
                    emit(&view)?;
                }
            }
        }
    }

    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::loader::LoadError;
    use crate::archive::MediaEntry;
    use async_trait::async_trait;
    use std::time::Duration;

    /// Answers slowly for releases and quickly for everything else.
    struct SlowReleases;

    #[async_trait]
    impl ContentSource for SlowReleases {
        fn name(&self) -> &'static str {
            "slow-releases"
        }

        async fn fetch(&self, category: Category) -> Result<Vec<MediaEntry>, LoadError> {
            let delay = if category == Category::Releases { 200 } else { 10 };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(vec![MediaEntry::new(
                "youtube",
                &format!("https://youtu.be/{category}"),
            )])
        }
    }

    fn entries_for(category: Category) -> LoadState {
        LoadState::Loaded(vec![MediaEntry::new(
            "youtube",
            &format!("https://youtu.be/{category}"),
        )])
    }

    #[tokio::test]
    async fn test_stale_response_is_dropped() {
        let mut emitted = Vec::new();
        let view = run_session(
            "mixes\n".as_bytes(),
            Arc::new(SlowReleases),
            Category::Releases,
            true,
            |view| {
                emitted.push(view.state().clone());
                Ok(())
            },
        )
        .await
        .unwrap();

        assert_eq!(view.category(), Category::Mixes);
        assert_eq!(view.state(), &entries_for(Category::Mixes));
        assert_eq!(
            emitted,
            vec![LoadState::Loading, LoadState::Loading, entries_for(Category::Mixes)]
        );
    }

    #[tokio::test]
    async fn test_last_resolved_wins_without_discarding() {
        let view = run_session(
            "mixes\n".as_bytes(),
            Arc::new(SlowReleases),
            Category::Releases,
            false,
            |_| Ok(()),
        )
        .await
        .unwrap();

        assert_eq!(view.category(), Category::Mixes);
        assert_eq!(view.state(), &entries_for(Category::Releases));
    }

    #[tokio::test]
    async fn test_unknown_key_keeps_session_alive() {
        let view = run_session(
            "podcasts\n\ninterviews\n".as_bytes(),
            Arc::new(SlowReleases),
            Category::Mixes,
            true,
            |_| Ok(()),
        )
        .await
        .unwrap();

        assert_eq!(view.category(), Category::Interviews);
        assert_eq!(view.state(), &entries_for(Category::Interviews));
    }

    #[tokio::test]
    async fn test_quit_stops_without_waiting() {
        let view = run_session(
            "quit\n".as_bytes(),
            Arc::new(SlowReleases),
            Category::Releases,
            true,
            |_| Ok(()),
        )
        .await
        .unwrap();

        assert_eq!(view.state(), &LoadState::Loading);
    }
}
