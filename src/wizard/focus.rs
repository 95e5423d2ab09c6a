//! Focus order for the wizard
//!
//! Elements are listed in document order. The step header sits in that
//! order but is skipped by sequential traversal, so it can only receive
//! focus programmatically after a navigation.

/// Something on the wizard page that can hold focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// Anchor above the wizard used to restart keyboard traversal
    FocusReset,
    /// Navigation link of an earlier step
    NavLink(usize),
    /// Header of the active step
    Header,
    /// Input of the active step
    Input,
    CancelButton,
    PreviousButton,
    /// Next, or submit on the last step
    PrimaryButton,
}

impl FocusTarget {
    /// Whether Tab/Shift+Tab may land here
    pub fn is_tabbable(self) -> bool {
        !matches!(self, FocusTarget::Header)
    }

    /// Whether Enter/Space triggers an action here
    pub fn is_activatable(self) -> bool {
        matches!(
            self,
            FocusTarget::NavLink(_)
                | FocusTarget::CancelButton
                | FocusTarget::PreviousButton
                | FocusTarget::PrimaryButton
        )
    }
}

/// Focusable elements of the current step in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRing {
    order: Vec<FocusTarget>,
}

impl FocusRing {
    /// Build the order for the given active step
    pub fn for_step(active_step_index: usize, has_input: bool) -> Self {
        let mut order = vec![FocusTarget::FocusReset];
        order.extend((0..active_step_index).map(FocusTarget::NavLink));
        order.push(FocusTarget::Header);
        if has_input {
            order.push(FocusTarget::Input);
        }
        order.push(FocusTarget::CancelButton);
        if active_step_index > 0 {
            order.push(FocusTarget::PreviousButton);
        }
        order.push(FocusTarget::PrimaryButton);
        Self { order }
    }

    pub fn targets(&self) -> &[FocusTarget] {
        &self.order
    }

    pub fn contains(&self, target: FocusTarget) -> bool {
        self.order.contains(&target)
    }

    /// Target reached by Tab from `current`, wrapping at the end
    pub fn next(&self, current: Option<FocusTarget>) -> FocusTarget {
        let start = current.and_then(|c| self.position(c));
        let len = self.order.len();
        let candidates = (1..=len).map(|offset| match start {
            Some(pos) => (pos + offset) % len,
            None => offset - 1,
        });
        self.first_tabbable(candidates)
    }

    /// Target reached by Shift+Tab from `current`, wrapping at the start
    pub fn prev(&self, current: Option<FocusTarget>) -> FocusTarget {
        let start = current.and_then(|c| self.position(c));
        let len = self.order.len();
        let candidates = (1..=len).map(|offset| match start {
            Some(pos) => (pos + len - offset) % len,
            None => len - offset,
        });
        self.first_tabbable(candidates)
    }

    fn position(&self, target: FocusTarget) -> Option<usize> {
        self.order.iter().position(|t| *t == target)
    }

    fn first_tabbable(&self, mut indices: impl Iterator<Item = usize>) -> FocusTarget {
        indices
            .find_map(|i| self.order.get(i).copied().filter(|t| t.is_tabbable()))
            .unwrap_or(FocusTarget::FocusReset)
    }
}
