//! Scoped override of the host's selection-order tracking preference.

use std::ops::{Deref, DerefMut};

use tracing::debug;

use crate::traits::SelectionProvider;

/// Turns selection-order tracking on for as long as the guard lives.
///
/// If tracking was already enabled nothing changes. Otherwise it is enabled on
/// acquire and switched back off when the guard drops, on every exit path.
/// The host is reachable through the guard while it is held.
pub struct SelectionOrderGuard<'a, H: SelectionProvider + ?Sized> {
    host: &'a mut H,
    restore_to: Option<bool>,
}

impl<'a, H: SelectionProvider + ?Sized> SelectionOrderGuard<'a, H> {
    pub fn acquire(host: &'a mut H) -> Self {
        let restore_to = if host.track_selection_order() {
            None
        } else {
            debug!("enabling selection order tracking for this operation");
            host.set_track_selection_order(true);
            Some(false)
        };
        Self { host, restore_to }
    }

    /// Whether dropping the guard will change the preference back.
    pub fn will_restore(&self) -> bool {
        self.restore_to.is_some()
    }
}

impl<H: SelectionProvider + ?Sized> Deref for SelectionOrderGuard<'_, H> {
    type Target = H;
    fn deref(&self) -> &H {
        self.host
    }
}

impl<H: SelectionProvider + ?Sized> DerefMut for SelectionOrderGuard<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        self.host
    }
}

impl<H: SelectionProvider + ?Sized> Drop for SelectionOrderGuard<'_, H> {
    fn drop(&mut self) {
        if let Some(previous) = self.restore_to {
            debug!(previous, "restoring selection order tracking");
            self.host.set_track_selection_order(previous);
        }
    }
}
