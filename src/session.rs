//! Background fetching for interactive front-ends.
//!
//! A [`FetchSession`] runs at most one fetch at a time on a Tokio task and hands
//! the typed result back over a channel that the UI drains from its own event
//! loop, either with the non-blocking [`FetchSession::poll`] or by awaiting
//! [`FetchSession::next_outcome`].
//!
//! Triggering a fetch while another is in flight cancels the older one; only the
//! most recent trigger can change what is displayed.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use wiki_reflect::{Config, FetchSession, ViewState, WikiReflector};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let reflector = Arc::new(WikiReflector::new(&config)?);
//! let mut session = FetchSession::new(reflector, tokio::runtime::Handle::current());
//!
//! session.trigger(config.language.clone());
//! match session.next_outcome().await {
//!     ViewState::Showing(article) => println!("{}", article.title),
//!     ViewState::Failed { message } => eprintln!("{message}"),
//!     _ => {}
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

use crate::error::{Error, Result};
use crate::reflector::ArticleSource;
use crate::render::failure_message;
use crate::types::{ArticleContent, LanguageCode};

/// Identifier of one triggered fetch, increasing per session
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchId(pub(crate) u64);

impl FetchId {
    /// Get the inner value
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for FetchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the article area currently shows
#[derive(Clone, Debug, Default)]
pub enum ViewState {
    /// Nothing fetched yet
    #[default]
    Idle,
    /// A fetch is in flight; the trigger is disabled
    Fetching {
        /// The in-flight fetch
        id: FetchId,
        /// Edition being queried
        language: LanguageCode,
    },
    /// The last successful fetch, replaced wholesale by the next one
    Showing(Arc<ArticleContent>),
    /// The last fetch failed; the message is shown in place of the article
    Failed {
        /// Human-readable failure text
        message: String,
    },
}

impl ViewState {
    /// Whether the "new article" trigger should be enabled
    pub fn trigger_enabled(&self) -> bool {
        !matches!(self, ViewState::Fetching { .. })
    }

    /// The displayed article, if any
    pub fn article(&self) -> Option<&Arc<ArticleContent>> {
        match self {
            ViewState::Showing(article) => Some(article),
            _ => None,
        }
    }
}

/// A finished fetch travelling back to the session
struct Completed {
    id: FetchId,
    result: Result<ArticleContent>,
}

/// Book-keeping for the one fetch that may be running
struct InFlight {
    id: FetchId,
    token: CancellationToken,
    /// View to restore if this fetch is cancelled
    previous: ViewState,
}

/// Single-worker fetch controller holding the displayed-article state
pub struct FetchSession {
    source: Arc<dyn ArticleSource>,
    runtime: Handle,
    tx: mpsc::UnboundedSender<Completed>,
    rx: mpsc::UnboundedReceiver<Completed>,
    in_flight: Option<InFlight>,
    next_id: u64,
    view: ViewState,
}

impl FetchSession {
    /// Create a session that spawns fetches on `runtime`
    pub fn new(source: Arc<dyn ArticleSource>, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            source,
            runtime,
            tx,
            rx,
            in_flight: None,
            next_id: 1,
            view: ViewState::Idle,
        }
    }

    /// Current view
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Whether a fetch is in flight
    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start fetching a random article in `language`
    ///
    /// Any fetch already in flight is cancelled first; its result, should it
    /// still arrive, is discarded.
    pub fn trigger(&mut self, language: LanguageCode) -> FetchId {
        let previous = match self.in_flight.take() {
            Some(superseded) => {
                debug!(fetch = %superseded.id, "cancelling superseded fetch");
                superseded.token.cancel();
                superseded.previous
            }
            None => std::mem::take(&mut self.view),
        };

        let id = FetchId(self.next_id);
        self.next_id += 1;

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let task_language = language.clone();

        // A panicking source surfaces as a JoinError on the inner task
        let runtime = self.runtime.clone();
        self.runtime.spawn(async move {
            let mut fetch =
                runtime.spawn(async move { source.random_article(&task_language).await });
            tokio::select! {
                _ = cancelled.cancelled() => {
                    fetch.abort();
                    debug!(fetch = %id, "fetch task cancelled");
                }
                joined = &mut fetch => {
                    let result = joined.unwrap_or_else(|e| {
                        error!(fetch = %id, error = %e, "fetch task panicked");
                        Err(Error::Task(e.to_string()))
                    });
                    // The receiver only goes away with the session itself
                    tx.send(Completed { id, result }).ok();
                }
            }
        });

        debug!(fetch = %id, language = %language, "fetch started");
        self.in_flight = Some(InFlight {
            id,
            token,
            previous,
        });
        self.view = ViewState::Fetching { id, language };
        id
    }

    /// Cancel the in-flight fetch, restoring what was shown before it started
    ///
    /// Returns `false` if nothing was in flight.
    pub fn cancel(&mut self) -> bool {
        match self.in_flight.take() {
            Some(in_flight) => {
                debug!(fetch = %in_flight.id, "fetch cancelled by caller");
                in_flight.token.cancel();
                self.view = in_flight.previous;
                true
            }
            None => false,
        }
    }

    /// Apply finished fetches without blocking
    ///
    /// Meant to be called from a UI event loop. Returns `true` if the view changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(done) = self.rx.try_recv() {
            changed |= self.apply(done);
        }
        changed
    }

    /// Wait until the in-flight fetch (if any) settles and return the view
    ///
    /// Cancel-safe: dropping the future loses no result.
    pub async fn next_outcome(&mut self) -> &ViewState {
        while self.in_flight.is_some() {
            match self.rx.recv().await {
                Some(done) => {
                    self.apply(done);
                }
                None => break,
            }
        }
        &self.view
    }

    fn apply(&mut self, done: Completed) -> bool {
        if self.in_flight.as_ref().map(|f| f.id) != Some(done.id) {
            debug!(fetch = %done.id, "discarding result of superseded fetch");
            return false;
        }
        self.in_flight = None;

        self.view = match done.result {
            Ok(article) => {
                debug!(fetch = %done.id, title = %article.title, "fetch succeeded");
                ViewState::Showing(Arc::new(article))
            }
            Err(e) => {
                warn!(fetch = %done.id, error = %e, code = e.error_code(), "fetch failed");
                ViewState::Failed {
                    message: failure_message(&e),
                }
            }
        };
        true
    }
}

impl Drop for FetchSession {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.token.cancel();
        }
    }
}
