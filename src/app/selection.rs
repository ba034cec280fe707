//! Profile selection handoff from the menu task to the control loop.
//!
//! A latest-value-wins `embassy-sync` [`Signal`]: the menu publishes, the
//! control loop takes at the start of each cycle.  The value moves under
//! a critical section, so the loop never sees a torn selection.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::control::Profile;

pub struct ProfileSelector {
    pending: Signal<CriticalSectionRawMutex, Profile>,
}

impl ProfileSelector {
    pub const fn new() -> Self {
        Self {
            pending: Signal::new(),
        }
    }

    /// Publish a selection.  Replaces any selection not yet taken.
    pub fn publish(&self, profile: Profile) {
        self.pending.signal(profile);
    }

    /// Take the pending selection, if any.
    pub fn take(&self) -> Option<Profile> {
        self.pending.try_take()
    }
}

impl Default for ProfileSelector {
    fn default() -> Self {
        Self::new()
    }
}
