//! Page-wide "content unlocked" notification.
//!
//! The host creates one bus and hands it to every widget that should wake
//! up on the milestone. Notifications carry no payload; subscribers only
//! observe that the counter has moved past zero.

#[cfg(test)]
#[path = "milestone_test.rs"]
mod milestone_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct MilestoneBus {
    seq: RwSignal<u64>,
}

impl Default for MilestoneBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MilestoneBus {
    pub fn new() -> Self {
        Self { seq: RwSignal::new(0) }
    }

    /// Announce that the milestone was reached.
    pub fn notify(&self) {
        self.seq.update(|n| *n += 1);
    }

    /// Number of notifications so far. Tracked, so effects re-run on change.
    pub fn count(&self) -> u64 {
        self.seq.get()
    }

    pub fn reached(&self) -> bool {
        self.count() > 0
    }

    #[cfg(test)]
    pub(crate) fn count_untracked(&self) -> u64 {
        self.seq.get_untracked()
    }
}
