//! Deterministic stand-ins for the page capabilities: a manual clock, a
//! scripted icon library and an in-memory markup tree.

use super::{BootstrapError, IconMarkup, RenderProvider, Ticker};
use futures::future::LocalBoxFuture;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::task::{Poll, Waker};

// ============================================================================
// Clock
// ============================================================================

#[derive(Default)]
struct ClockState {
    now: u32,
    wakers: Vec<Waker>,
}

/// Virtual time; sleeps complete only when the test advances the clock
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

impl ManualClock {
    pub fn now(&self) -> u32 {
        self.state.borrow().now
    }

    pub fn advance(&self, ms: u32) {
        let wakers = {
            let mut state = self.state.borrow_mut();
            state.now += ms;
            std::mem::take(&mut state.wakers)
        };
        for waker in wakers {
            waker.wake();
        }
    }
}

impl Ticker for ManualClock {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        let clock = self.clone();
        let deadline = self.now() + ms;
        Box::pin(futures::future::poll_fn(move |cx| {
            let mut state = clock.state.borrow_mut();
            if state.now >= deadline {
                Poll::Ready(())
            } else {
                state.wakers.push(cx.waker().clone());
                Poll::Pending
            }
        }))
    }
}

// ============================================================================
// Icon library
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Acquire {
    Loads,
    Fails(String),
    Hangs,
}

struct ProviderState {
    clock: ManualClock,
    acquire: Acquire,
    ready_at: Cell<Option<u32>>,
    failing_renders: Cell<u32>,
    acquisitions: Cell<u32>,
    renders: Cell<u32>,
}

/// Icon library whose readiness follows the manual clock
#[derive(Clone)]
pub struct ScriptedProvider {
    state: Rc<ProviderState>,
}

impl ScriptedProvider {
    /// Becomes ready once the clock reaches `ready_at` ms
    pub fn new(clock: &ManualClock, acquire: Acquire, ready_at: Option<u32>) -> Self {
        Self {
            state: Rc::new(ProviderState {
                clock: clock.clone(),
                acquire,
                ready_at: Cell::new(ready_at),
                failing_renders: Cell::new(0),
                acquisitions: Cell::new(0),
                renders: Cell::new(0),
            }),
        }
    }

    /// Already present on the page before the bootstrap runs
    pub fn present(clock: &ManualClock) -> Self {
        Self::new(clock, Acquire::Loads, Some(clock.now()))
    }

    pub fn become_ready_at(&self, ms: u32) {
        self.state.ready_at.set(Some(ms));
    }

    /// The next `n` render passes throw
    pub fn fail_renders(&self, n: u32) {
        self.state.failing_renders.set(n);
    }

    pub fn acquisitions(&self) -> u32 {
        self.state.acquisitions.get()
    }

    pub fn renders(&self) -> u32 {
        self.state.renders.get()
    }
}

impl RenderProvider for ScriptedProvider {
    fn is_ready(&self) -> bool {
        self.state
            .ready_at
            .get()
            .is_some_and(|at| self.state.clock.now() >= at)
    }

    fn acquire(&self) -> LocalBoxFuture<'static, Result<(), BootstrapError>> {
        let state = self.state.clone();
        Box::pin(async move {
            state.acquisitions.set(state.acquisitions.get() + 1);
            match state.acquire.clone() {
                Acquire::Loads => Ok(()),
                Acquire::Fails(reason) => Err(BootstrapError::AcquisitionFailure {
                    url: "test://feather.min.js".into(),
                    reason,
                }),
                Acquire::Hangs => futures::future::pending().await,
            }
        })
    }

    fn render(&self) -> Result<(), BootstrapError> {
        self.state.renders.set(self.state.renders.get() + 1);
        let failing = self.state.failing_renders.get();
        if failing > 0 {
            self.state.failing_renders.set(failing - 1);
            return Err(BootstrapError::RenderError("malformed placeholder".into()));
        }
        Ok(())
    }
}

// ============================================================================
// Markup
// ============================================================================

#[derive(Debug, Clone)]
pub enum Node {
    Text(String),
    Icon { id: usize, name: String, hidden: bool },
}

impl Node {
    pub fn text(text: &str) -> Self {
        Node::Text(text.to_string())
    }

    pub fn icon(name: &str) -> Self {
        Node::Icon {
            id: 0,
            name: name.to_string(),
            hidden: false,
        }
    }
}

#[derive(Default)]
struct Container {
    nodes: Vec<Node>,
    inline: bool,
}

#[derive(Default)]
struct MarkupState {
    containers: Vec<Container>,
    next_icon: usize,
}

/// Flat list of containers, each holding text and icon nodes
#[derive(Clone, Default)]
pub struct MemoryMarkup {
    state: Rc<RefCell<MarkupState>>,
}

impl MemoryMarkup {
    /// Returns the container index
    pub fn add_container(&self, nodes: Vec<Node>) -> usize {
        let mut state = self.state.borrow_mut();
        let mut container = Container::default();
        for node in nodes {
            let node = match node {
                Node::Icon { name, hidden, .. } => {
                    state.next_icon += 1;
                    Node::Icon {
                        id: state.next_icon,
                        name,
                        hidden,
                    }
                }
                text => text,
            };
            container.nodes.push(node);
        }
        state.containers.push(container);
        state.containers.len() - 1
    }

    /// Visible text with whitespace collapsed
    pub fn rendered_text(&self, container: usize) -> String {
        let state = self.state.borrow();
        Self::raw_text(&state.containers[container])
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn all_icons_hidden(&self, container: usize) -> bool {
        self.state.borrow().containers[container]
            .nodes
            .iter()
            .all(|n| !matches!(n, Node::Icon { hidden: false, .. }))
    }

    pub fn is_inline(&self, container: usize) -> bool {
        self.state.borrow().containers[container].inline
    }

    pub fn icon_names(&self) -> Vec<String> {
        self.state
            .borrow()
            .containers
            .iter()
            .flat_map(|c| c.nodes.iter())
            .filter_map(|n| match n {
                Node::Icon { name, .. } => Some(name.clone()),
                Node::Text(_) => None,
            })
            .collect()
    }

    fn raw_text(container: &Container) -> String {
        container
            .nodes
            .iter()
            .filter_map(|n| match n {
                Node::Text(t) => Some(t.as_str()),
                Node::Icon { .. } => None,
            })
            .collect()
    }

    fn locate(state: &MarkupState, icon: usize) -> Option<(usize, usize)> {
        state.containers.iter().enumerate().find_map(|(ci, c)| {
            c.nodes
                .iter()
                .position(|n| matches!(n, Node::Icon { id, .. } if *id == icon))
                .map(|ni| (ci, ni))
        })
    }
}

impl IconMarkup for MemoryMarkup {
    type Placeholder = usize;

    fn placeholders(&self) -> Vec<usize> {
        self.state
            .borrow()
            .containers
            .iter()
            .flat_map(|c| c.nodes.iter())
            .filter_map(|n| match n {
                Node::Icon { id, .. } => Some(*id),
                Node::Text(_) => None,
            })
            .collect()
    }

    fn icon_name(&self, icon: &usize) -> Option<String> {
        let state = self.state.borrow();
        let (ci, ni) = Self::locate(&state, *icon)?;
        match &state.containers[ci].nodes[ni] {
            Node::Icon { name, .. } => Some(name.clone()),
            Node::Text(_) => None,
        }
    }

    fn set_icon_name(&self, icon: &usize, new_name: &str) {
        let mut state = self.state.borrow_mut();
        if let Some((ci, ni)) = Self::locate(&state, *icon) {
            if let Node::Icon { name, .. } = &mut state.containers[ci].nodes[ni] {
                *name = new_name.to_string();
            }
        }
    }

    fn hide(&self, icon: &usize) {
        let mut state = self.state.borrow_mut();
        if let Some((ci, ni)) = Self::locate(&state, *icon) {
            if let Node::Icon { hidden, .. } = &mut state.containers[ci].nodes[ni] {
                *hidden = true;
            }
        }
    }

    fn container_text(&self, icon: &usize) -> Option<String> {
        let state = self.state.borrow();
        let (ci, _) = Self::locate(&state, *icon)?;
        Some(Self::raw_text(&state.containers[ci]).trim().to_string())
    }

    fn show_container_inline(&self, icon: &usize) {
        let mut state = self.state.borrow_mut();
        if let Some((ci, _)) = Self::locate(&state, *icon) {
            state.containers[ci].inline = true;
        }
    }

    fn insert_label(&self, icon: &usize, label: &str) {
        let mut state = self.state.borrow_mut();
        if let Some((ci, ni)) = Self::locate(&state, *icon) {
            state.containers[ci].nodes.insert(ni, Node::text(label));
        }
    }
}
