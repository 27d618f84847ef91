// ── Debounced city resolver ──
//
// Turns free-text input into (city, country) candidates. Each keystroke
// restarts the quiescence window; a request generation counter invalidates
// superseded timers before they fire and discards any in-flight lookup
// whose generation is no longer current, so at most one lookup's result is
// ever applied. Lookup failures degrade silently to an empty list.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::model::CityCandidate;

/// Source of suggestion candidates (the seam the tests fake).
pub trait SuggestionSource: Send + Sync + 'static {
    fn suggest(
        &self,
        query: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<CityCandidate>, hilal_api::Error>> + Send;
}

/// Production source backed by the Nominatim client.
///
/// Maps raw geocoding results to candidates, dropping any that lack a
/// settlement or country.
pub struct NominatimSource {
    client: hilal_api::NominatimClient,
}

impl NominatimSource {
    pub fn new(client: hilal_api::NominatimClient) -> Self {
        Self { client }
    }
}

impl SuggestionSource for NominatimSource {
    async fn suggest(&self, query: &str, limit: u32) -> Result<Vec<CityCandidate>, hilal_api::Error> {
        let results = self.client.search(query, limit).await?;
        Ok(results
            .iter()
            .filter_map(|r| {
                Some(CityCandidate {
                    city: r.settlement()?.to_owned(),
                    country: r.country()?.to_owned(),
                })
            })
            .collect())
    }
}

/// What the suggestion dropdown renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionState {
    /// The input the candidates belong to.
    pub query: String,
    pub candidates: Vec<CityCandidate>,
    pub loading: bool,
}

/// Debounced autocomplete engine.
///
/// Cheaply cloneable. Pending lookup tasks are short-lived (one debounce
/// window plus one request); [`close`](Self::close) aborts them early on
/// teardown. Must be used within a Tokio runtime.
pub struct CityResolver<S> {
    inner: Arc<ResolverInner<S>>,
}

impl<S> Clone for CityResolver<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct ResolverInner<S> {
    source: S,
    debounce: Duration,
    limit: u32,
    /// Bumped on every keystroke; a task whose generation is stale must
    /// not issue a lookup nor apply a result.
    generation: AtomicU64,
    state: watch::Sender<SuggestionState>,
    cancel: CancellationToken,
}

impl<S: SuggestionSource> CityResolver<S> {
    pub fn new(source: S, debounce: Duration, limit: u32) -> Self {
        let (state, _) = watch::channel(SuggestionState::default());
        Self {
            inner: Arc::new(ResolverInner {
                source,
                debounce,
                limit,
                generation: AtomicU64::new(0),
                state,
                cancel: CancellationToken::new(),
            }),
        }
    }

    /// Subscribe to suggestion updates.
    pub fn subscribe(&self) -> watch::Receiver<SuggestionState> {
        self.inner.state.subscribe()
    }

    /// The current suggestion state.
    pub fn current(&self) -> SuggestionState {
        self.inner.state.borrow().clone()
    }

    /// Abort any pending debounce timer or in-flight lookup.
    pub fn close(&self) {
        self.inner.cancel.cancel();
    }

    /// Feed one keystroke's worth of input.
    ///
    /// Restarts the debounce window. Blank input clears the list without
    /// any lookup.
    pub fn input(&self, text: &str) {
        let query = text.trim().to_owned();
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if query.is_empty() {
            self.inner.state.send_replace(SuggestionState::default());
            return;
        }

        self.inner.state.send_modify(|s| {
            s.query.clone_from(&query);
            s.loading = true;
        });

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::select! {
                () = inner.cancel.cancelled() => return,
                () = tokio::time::sleep(inner.debounce) => {}
            }

            // Superseded timer: a newer keystroke owns the window now.
            if inner.generation.load(Ordering::SeqCst) != generation {
                return;
            }

            debug!(%query, "suggestion lookup");
            let result = tokio::select! {
                () = inner.cancel.cancelled() => return,
                result = inner.source.suggest(&query, inner.limit) => result,
            };

            // The input moved on while the lookup was in flight.
            if inner.generation.load(Ordering::SeqCst) != generation {
                debug!(%query, "discarding stale suggestion result");
                return;
            }

            let candidates = match result {
                Ok(candidates) => dedup_candidates(candidates),
                Err(e) => {
                    // Soft failure: no user-facing error, just no list.
                    warn!(error = %e, %query, "suggestion lookup failed");
                    Vec::new()
                }
            };

            inner.state.send_replace(SuggestionState {
                query,
                candidates,
                loading: false,
            });
        });
    }
}

/// Drop duplicates by `"{city}-{country}"`, keeping first-seen order.
fn dedup_candidates(candidates: Vec<CityCandidate>) -> Vec<CityCandidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.dedup_key()))
        .collect()
}
