/// Lifecycle of the icon library for one page lifetime.
///
/// `Ready` and `Failed` are terminal; the state only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceState {
    #[default]
    Unloaded,
    Loading,
    Ready,
    Failed,
}

impl ResourceState {
    pub fn is_terminal(self) -> bool {
        matches!(self, ResourceState::Ready | ResourceState::Failed)
    }

    /// Legal forward moves. `Unloaded -> Ready` is the already-present fast
    /// path, `Unloaded -> Failed` a render error on that path.
    pub fn can_transition_to(self, next: ResourceState) -> bool {
        use ResourceState::*;
        matches!(
            (self, next),
            (Unloaded, Loading)
                | (Unloaded, Ready)
                | (Unloaded, Failed)
                | (Loading, Ready)
                | (Loading, Failed)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::ResourceState::*;
    use super::*;

    #[test]
    fn test_terminal_states_never_move() {
        for from in [Ready, Failed] {
            for to in [Unloaded, Loading, Ready, Failed] {
                assert!(!from.can_transition_to(to), "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn test_no_regression_to_unloaded() {
        assert!(!Loading.can_transition_to(Unloaded));
        assert!(!Loading.can_transition_to(Loading));
        assert!(Loading.can_transition_to(Ready));
        assert!(Loading.can_transition_to(Failed));
    }
}
