//! One-shot loading of the icon library with a bounded wait, plus the queue
//! of icon operations requested before the library is usable.

use super::markup::{self, IconMarkup};
use super::provider::{RenderProvider, Ticker};
use super::{BootstrapError, IconNameMap, ResourceState};
use crate::shared::config::IconsConfig;
use futures::future::{self, Either};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::pin::pin;

/// Operation waiting for the library
enum Deferred {
    Refresh,
    Task(Box<dyn FnOnce()>),
}

/// Counters of what the bootstrap actually did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BootstrapStats {
    /// Script fetches started
    pub acquisitions: u32,
    /// Readiness checks made by the polling loop
    pub polls: u32,
    /// Render passes requested from the library
    pub render_passes: u32,
    /// Queued operations executed by the drain
    pub drained: u32,
    /// Queued operations dropped because the library failed
    pub discarded: u32,
    /// Degraded-mode passes over the markup
    pub degrade_passes: u32,
}

#[derive(Default)]
struct Inner {
    state: ResourceState,
    queue: VecDeque<Deferred>,
    outcome: Option<Result<(), BootstrapError>>,
    stats: BootstrapStats,
}

/// Owner of the icon library lifecycle.
///
/// State and queue are private; callers only go through [`bootstrap`],
/// [`request_icon_refresh`] and [`run_when_ready`]. No `RefCell` borrow is
/// held across an `.await` or while a queued operation runs, so operations
/// may call back into the bootstrap.
///
/// [`bootstrap`]: IconBootstrap::bootstrap
/// [`request_icon_refresh`]: IconBootstrap::request_icon_refresh
/// [`run_when_ready`]: IconBootstrap::run_when_ready
pub struct IconBootstrap<P, M, T> {
    provider: P,
    markup: M,
    ticker: T,
    names: IconNameMap,
    config: IconsConfig,
    inner: RefCell<Inner>,
}

impl<P, M, T> IconBootstrap<P, M, T>
where
    P: RenderProvider,
    M: IconMarkup,
    T: Ticker,
{
    pub fn new(provider: P, markup: M, ticker: T, config: IconsConfig) -> Self {
        Self {
            provider,
            markup,
            ticker,
            names: IconNameMap::feather(),
            config,
            inner: RefCell::new(Inner::default()),
        }
    }

    pub fn with_names(mut self, names: IconNameMap) -> Self {
        self.names = names;
        self
    }

    pub fn state(&self) -> ResourceState {
        self.inner.borrow().state
    }

    /// Operations waiting for the library
    pub fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    pub fn stats(&self) -> BootstrapStats {
        self.inner.borrow().stats
    }

    /// Load the library and bring the markup up to date.
    ///
    /// Runs at most once per page; later calls report the first outcome
    /// without side effects, calls during loading get `InProgress`.
    pub async fn bootstrap(&self) -> Result<(), BootstrapError> {
        {
            let inner = self.inner.borrow();
            if let Some(outcome) = &inner.outcome {
                return outcome.clone();
            }
            if inner.state == ResourceState::Loading {
                return Err(BootstrapError::InProgress);
            }
        }

        if self.provider.is_ready() {
            log::debug!("icon library already present, skipping fetch");
            let result = self.initial_render();
            return self.finish(result);
        }

        self.transition(ResourceState::Loading);
        let result = match self.await_ready().await {
            Ok(()) => self.initial_render(),
            Err(e) => Err(e),
        };
        self.finish(result)
    }

    /// Bring icons up to date after a markup change.
    ///
    /// Ready: normalize and render now; a render error degrades this pass
    /// only. Not loaded yet: queued. Failed: dropped, the markup was
    /// degraded once when the library failed.
    pub fn request_icon_refresh(&self) {
        match self.state() {
            ResourceState::Ready => self.refresh_now(),
            ResourceState::Failed => {
                log::debug!("icon library unavailable, dropping refresh");
            }
            ResourceState::Unloaded | ResourceState::Loading => self.enqueue(Deferred::Refresh),
        }
    }

    /// Run `op` once the library is usable, after everything queued before
    /// it. Dropped if the library never becomes ready.
    pub fn run_when_ready(&self, op: impl FnOnce() + 'static) {
        match self.state() {
            ResourceState::Ready => op(),
            ResourceState::Failed => {
                log::debug!("icon library unavailable, dropping deferred operation");
            }
            ResourceState::Unloaded | ResourceState::Loading => {
                self.enqueue(Deferred::Task(Box::new(op)))
            }
        }
    }

    /// Degraded-mode pass over the current markup
    pub fn degrade(&self) {
        let labelled = markup::degrade(&self.markup);
        self.inner.borrow_mut().stats.degrade_passes += 1;
        log::debug!("icons degraded to text, {} label(s) inserted", labelled);
    }

    // ------------------------------------------------------------------------

    /// Fetch, then poll readiness; the whole of it bounded by `timeout_ms`.
    async fn await_ready(&self) -> Result<(), BootstrapError> {
        let timeout_ms = self.config.timeout_ms;
        let timeout = self.ticker.sleep(timeout_ms);
        let load = pin!(self.load_and_poll());

        // Timeout first: it wins a tie with the last readiness check.
        match future::select(timeout, load).await {
            Either::Left(((), _)) => Err(BootstrapError::TimeoutExceeded(timeout_ms)),
            Either::Right((result, _)) => result,
        }
    }

    async fn load_and_poll(&self) -> Result<(), BootstrapError> {
        self.inner.borrow_mut().stats.acquisitions += 1;
        self.provider.acquire().await?;

        let interval = self.config.poll_interval_ms.max(1);
        loop {
            self.ticker.sleep(interval).await;
            self.inner.borrow_mut().stats.polls += 1;
            if self.provider.is_ready() {
                return Ok(());
            }
        }
    }

    fn initial_render(&self) -> Result<(), BootstrapError> {
        markup::normalize_names(&self.markup, &self.names);
        self.inner.borrow_mut().stats.render_passes += 1;
        self.provider.render()
    }

    fn refresh_now(&self) {
        markup::normalize_names(&self.markup, &self.names);
        self.inner.borrow_mut().stats.render_passes += 1;
        if let Err(e) = self.provider.render() {
            log::warn!("⚠️ icon refresh failed, falling back to text: {}", e);
            self.degrade();
        }
    }

    fn finish(&self, result: Result<(), BootstrapError>) -> Result<(), BootstrapError> {
        match &result {
            Ok(()) => {
                self.transition(ResourceState::Ready);
                self.inner.borrow_mut().outcome = Some(Ok(()));
                let stats = self.stats();
                log::info!(
                    "✨ icon library ready after {} poll(s), draining {} queued operation(s)",
                    stats.polls,
                    self.pending()
                );
                self.drain();
            }
            Err(e) => {
                self.transition(ResourceState::Failed);
                let discarded = {
                    let mut inner = self.inner.borrow_mut();
                    inner.outcome = Some(Err(e.clone()));
                    let queue = std::mem::take(&mut inner.queue);
                    inner.stats.discarded += queue.len() as u32;
                    queue
                };
                log::warn!(
                    "❌ icon library unavailable ({}), {} queued operation(s) dropped",
                    e,
                    discarded.len()
                );
                drop(discarded);
                self.degrade();
            }
        }
        result
    }

    fn drain(&self) {
        while let Some(op) = self.next_deferred() {
            self.inner.borrow_mut().stats.drained += 1;
            match op {
                Deferred::Refresh => self.refresh_now(),
                Deferred::Task(task) => task(),
            }
        }
    }

    fn next_deferred(&self) -> Option<Deferred> {
        self.inner.borrow_mut().queue.pop_front()
    }

    fn enqueue(&self, op: Deferred) {
        let mut inner = self.inner.borrow_mut();
        inner.queue.push_back(op);
        log::debug!("icon operation queued ({} pending)", inner.queue.len());
    }

    fn transition(&self, next: ResourceState) {
        let mut inner = self.inner.borrow_mut();
        if inner.state.can_transition_to(next) {
            log::debug!("icon library: {:?} -> {:?}", inner.state, next);
            inner.state = next;
        } else {
            log::warn!("icon library: refused move {:?} -> {:?}", inner.state, next);
        }
    }
}
