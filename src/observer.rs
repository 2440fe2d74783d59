//! State-change notifications for presentation layers.
//!
//! An engine notifies its observers once per state-changing command, after
//! every field has been updated. Observers receive a shared reference to the
//! engine and query whatever they need from it. A panicking observer does not
//! unregister anyone: the registry stays in place while it runs.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Receives a notification after every state change of a game `G`.
pub trait Observer<G: ?Sized>: Send {
    /// Called after the game state changed.
    fn state_changed(&mut self, game: &G);
}

impl<G: ?Sized, F> Observer<G> for F
where
    F: FnMut(&G) + Send,
{
    fn state_changed(&mut self, game: &G) {
        self(game);
    }
}

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u32);

/// Registered observers of a game `G`, notified in subscription order.
pub struct Observers<G: ?Sized> {
    entries: Vec<(ObserverId, Box<dyn Observer<G>>)>,
    next_id: u32,
}

impl<G: ?Sized> Observers<G> {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers an observer.
    pub fn subscribe<O>(&mut self, observer: O) -> ObserverId
    where
        O: Observer<G> + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Notifies every observer.
    pub fn notify(&mut self, game: &G) {
        for (_, observer) in &mut self.entries {
            observer.state_changed(game);
        }
    }

    /// Returns the number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no observer is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<G: ?Sized> Default for Observers<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: ?Sized> fmt::Debug for Observers<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}
