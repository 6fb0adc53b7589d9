//! Request fencing for greenhouse-scoped loads.
//!
//! Every fetch for a greenhouse is started with the current [`LoadTicket`].
//! When the user switches greenhouse the generation moves on, and any
//! response still carrying the old ticket is dropped on arrival.

/// Tag attached to a greenhouse-scoped fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    pub greenhouse_id: i64,
    pub generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Fence {
    current: Option<LoadTicket>,
    generation: u64,
}

impl Fence {
    /// Start a new selection generation. `None` clears the selection.
    pub fn advance(&mut self, greenhouse_id: Option<i64>) -> Option<LoadTicket> {
        self.generation += 1;
        self.current = greenhouse_id.map(|greenhouse_id| LoadTicket {
            greenhouse_id,
            generation: self.generation,
        });
        self.current
    }

    pub fn current(&self) -> Option<LoadTicket> {
        self.current
    }

    /// Whether a response started under `ticket` may still be applied.
    pub fn admits(&self, ticket: LoadTicket) -> bool {
        self.current == Some(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn old_ticket_is_rejected_after_switch() {
        let mut fence = Fence::default();
        let first = fence.advance(Some(1)).unwrap();
        assert!(fence.admits(first));

        let second = fence.advance(Some(2)).unwrap();
        assert!(!fence.admits(first));
        assert!(fence.admits(second));
    }

    #[test]
    fn reselecting_same_greenhouse_bumps_generation() {
        let mut fence = Fence::default();
        let first = fence.advance(Some(1)).unwrap();
        let again = fence.advance(Some(1)).unwrap();
        assert_ne!(first, again);
        assert!(!fence.admits(first));
    }

    #[test]
    fn clearing_selection_rejects_everything() {
        let mut fence = Fence::default();
        let ticket = fence.advance(Some(3)).unwrap();
        assert_eq!(fence.advance(None), None);
        assert!(!fence.admits(ticket));
        assert_eq!(fence.current(), None);
    }
}
