//! # Panel: cache + draft for one collection
//!
//! A [`Panel`] is the state behind one section of the page: the last list the
//! server returned (the cache) and the uncommitted form values (the draft).
//! The server is the only source of truth. The cache is a snapshot that is
//! replaced wholesale on every successful fetch and never edited in place.
//!
//! ## Synchronisation
//!
//! [`refresh`] and [`submit`] are free async functions that drive any
//! [`PanelState`] holder against any [`ResourceClient`]. State is only touched
//! through short synchronous [`PanelState::update`] calls between awaits, so the
//! same code works on a bare `Panel` in tests and on a reactive UI signal.
//!
//! | Step | refresh | submit |
//! |------|---------|--------|
//! | 1 | `begin_refresh` → `Loading` | `begin_submit` → validate, build payload, `Submitting` |
//! | 2 | `GET /{path}` | `POST /{path}` |
//! | 3 | `apply_list` (ok) / `abort_refresh` (err) | `finish_submit` clears draft (ok) / `abort_submit` (err) |
//! | 4 | | `refresh` |
//!
//! POST and the trailing refresh are not a transaction: if the POST succeeds and
//! the refresh fails, the draft is already cleared and the cache is stale.

use crate::client::{ListQuery, ResourceClient};
use crate::draft::Draft;
use crate::resource::{Creatable, Resource};

/// What a panel is waiting on, if anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Submitting,
}

/// Result of a [`submit`] that did not fail.
#[derive(Clone, Debug, PartialEq)]
pub enum Submitted<T> {
    /// Nothing was sent: a required field was empty or a submit was in flight.
    Skipped,
    /// The record was created and the list refreshed.
    Created(T),
}

/// Cache and draft for one resource.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel<R: Resource> {
    cache: Vec<R::Record>,
    draft: Draft,
    query: Option<ListQuery>,
    phase: Phase,
}

impl<R: Resource> Default for Panel<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> Panel<R> {
    pub fn new() -> Self {
        Self {
            cache: Vec::new(),
            draft: Draft::new(R::FIELDS),
            query: R::query(),
            phase: Phase::Idle,
        }
    }

    /// Records from the last successful list call, in server order.
    pub fn cache(&self) -> &[R::Record] {
        &self.cache
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn query(&self) -> Option<&ListQuery> {
        self.query.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Update one draft field from user input.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        self.draft.set(name, value)
    }

    /// Mark a list call as started and hand out the filter to use.
    pub fn begin_refresh(&mut self) -> Option<ListQuery> {
        if self.phase == Phase::Idle {
            self.phase = Phase::Loading;
        }
        self.query.clone()
    }

    /// Replace the cache with `items`, exactly as received.
    pub fn apply_list(&mut self, items: Vec<R::Record>) {
        self.cache = items;
        self.settle(Phase::Loading);
    }

    pub fn abort_refresh(&mut self) {
        self.settle(Phase::Loading);
    }

    fn settle(&mut self, from: Phase) {
        if self.phase == from {
            self.phase = Phase::Idle;
        }
    }
}

impl<R: Creatable> Panel<R> {
    /// Validate the draft and build the request body.
    ///
    /// Returns `None`, leaving everything untouched, when a required field is
    /// empty or another submit has not finished its POST yet.
    pub fn begin_submit(&mut self, flag: R::Flag) -> Option<R::Payload> {
        if self.phase == Phase::Submitting || !R::is_ready(&self.draft) {
            return None;
        }
        self.phase = Phase::Submitting;
        Some(R::payload(&self.draft, flag))
    }

    /// The POST went through: empty the form.
    pub fn finish_submit(&mut self) {
        self.draft.clear();
        self.settle(Phase::Submitting);
    }

    /// The POST failed: keep what the user typed.
    pub fn abort_submit(&mut self) {
        self.settle(Phase::Submitting);
    }
}

/// Something that owns a [`Panel`] and can lend it out briefly.
pub trait PanelState<R: Resource> {
    fn update<T>(&mut self, f: impl FnOnce(&mut Panel<R>) -> T) -> T;
}

impl<R: Resource> PanelState<R> for Panel<R> {
    fn update<T>(&mut self, f: impl FnOnce(&mut Panel<R>) -> T) -> T {
        f(self)
    }
}

/// Fetch the collection and replace the panel's cache with it.
///
/// Returns the number of records received.
pub async fn refresh<R, C, S>(client: &C, state: &mut S) -> Result<usize, C::Error>
where
    R: Resource,
    C: ResourceClient,
    S: PanelState<R>,
{
    let query = state.update(Panel::begin_refresh);
    tracing::debug!(path = R::PATH, query = ?query, "refreshing");

    match client.list::<R::Record>(R::PATH, query.as_ref()).await {
        Ok(items) => {
            let count = items.len();
            state.update(|panel| panel.apply_list(items));
            tracing::debug!(path = R::PATH, count, "refreshed");
            Ok(count)
        }
        Err(err) => {
            state.update(Panel::abort_refresh);
            Err(err)
        }
    }
}

/// Create a record from the panel's draft, then refresh the list.
pub async fn submit<R, C, S>(
    client: &C,
    state: &mut S,
    flag: R::Flag,
) -> Result<Submitted<R::Record>, C::Error>
where
    R: Creatable,
    C: ResourceClient,
    S: PanelState<R>,
{
    let Some(payload) = state.update(|panel| panel.begin_submit(flag)) else {
        tracing::debug!(path = R::PATH, "submit skipped");
        return Ok(Submitted::Skipped);
    };

    let created = match client.create::<_, R::Record>(R::PATH, &payload).await {
        Ok(record) => record,
        Err(err) => {
            state.update(Panel::abort_submit);
            return Err(err);
        }
    };
    state.update(Panel::finish_submit);
    tracing::debug!(path = R::PATH, record = ?created, "created");

    refresh::<R, C, S>(client, state).await?;
    Ok(Submitted::Created(created))
}
