//! Debounced commit of price-range edits.
//!
//! Two numeric inputs and a two-thumb slider all project onto the same
//! `(min, max)` pair, and a drag produces a burst of raw events. The
//! [`Debouncer`] is an explicit schedule/cancel abstraction: every raw event
//! cancels the pending commit and schedules a new one, so a burst collapses
//! into a single recompute and a single URL write once input goes quiet.

use std::time::Duration;

use pixel_commerce::{FilterState, PriceBounds, RangeError};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Cancels and reschedules a pending commit on every input event.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer with a fixed delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `commit` to run after the delay, cancelling any pending one.
    pub fn schedule<F>(&mut self, commit: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            commit();
        }));
    }

    /// Cancel the pending commit, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Edit-time state for the price-range inputs.
///
/// Raw edits are validated against the facet-extracted bounds and the other
/// thumb immediately (so the field can show an inline message), but the
/// validated draft is only *committed* — sent to the controller's channel —
/// after the debounce delay. A rejected edit changes nothing.
pub struct PriceRangeEditor {
    bounds: PriceBounds,
    draft: (f64, f64),
    debouncer: Debouncer,
    commits: mpsc::UnboundedSender<(f64, f64)>,
}

impl PriceRangeEditor {
    /// Create an editor over the current bounds and committed range, wired to
    /// a commit channel. The paired receiver feeds
    /// [`UiEvent::CommitPriceRange`](crate::controller::UiEvent).
    pub fn new(
        bounds: PriceBounds,
        committed: (f64, f64),
        delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<(f64, f64)>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                bounds,
                draft: committed,
                debouncer: Debouncer::new(delay),
                commits: tx,
            },
            rx,
        )
    }

    /// Current draft range (what the inputs display).
    pub fn draft(&self) -> (f64, f64) {
        self.draft
    }

    /// Handle a raw edit of the minimum input.
    pub fn edit_min(&mut self, value: f64) -> Result<(), RangeError> {
        // Validate against the draft, not the committed range, so two quick
        // edits of min then max behave like the user saw them.
        let mut scratch = FilterState::default().with_price_range(self.draft.0, self.draft.1);
        scratch.try_set_min(value, &self.bounds)?;
        self.draft.0 = value;
        self.schedule_commit();
        Ok(())
    }

    /// Handle a raw edit of the maximum input.
    pub fn edit_max(&mut self, value: f64) -> Result<(), RangeError> {
        let mut scratch = FilterState::default().with_price_range(self.draft.0, self.draft.1);
        scratch.try_set_max(value, &self.bounds)?;
        self.draft.1 = value;
        self.schedule_commit();
        Ok(())
    }

    /// Handle a slider tick moving both thumbs at once.
    pub fn edit_range(&mut self, min: f64, max: f64) -> Result<(), RangeError> {
        let mut scratch = FilterState::default().with_price_range(self.draft.0, self.draft.1);
        // Order matters when both move: widen first so the pair never crosses.
        if max >= scratch.price_range.1 {
            scratch.try_set_max(max, &self.bounds)?;
            scratch.try_set_min(min, &self.bounds)?;
        } else {
            scratch.try_set_min(min, &self.bounds)?;
            scratch.try_set_max(max, &self.bounds)?;
        }
        self.draft = (min, max);
        self.schedule_commit();
        Ok(())
    }

    fn schedule_commit(&mut self) {
        let draft = self.draft;
        let commits = self.commits.clone();
        self.debouncer.schedule(move || {
            // Receiver gone means the page is being torn down.
            let _ = commits.send(draft);
        });
    }
}
