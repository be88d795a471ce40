// SPDX-License-Identifier: MPL-2.0
//! Deferred mutations of the notification store.
//!
//! Any thread may send, change or close notifications through a
//! [`Sender`]. Each call only appends a [`Command`] under a short mutex
//! hold; the render thread takes the whole list once per frame and applies
//! it before laying anything out. Since the lock is released before any
//! command runs, a custom content callback that sends a notification while
//! it is being drawn cannot deadlock: its command simply lands in the next
//! frame's list.

use super::lifecycle::Entry;
use super::notification::{Notification, NotificationId};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// A store mutation waiting for the next frame.
#[derive(Debug)]
pub(crate) enum Command {
    Send(Box<Entry>),
    Change(NotificationId, Notification),
    CloseAfter(NotificationId, Duration),
    CloseImmediately(NotificationId),
}

/// Thread-safe handle for sending, changing and closing notifications.
///
/// Cheap to clone; every clone feeds the same [`Manager`](super::Manager).
#[derive(Debug, Clone, Default)]
pub struct Sender {
    pending: Arc<Mutex<Vec<Command>>>,
}

impl Sender {
    /// Queues a notification and returns its id right away.
    ///
    /// The id is usable immediately with [`change`](Self::change) and the
    /// close methods, even before the notification reaches the screen.
    pub fn send(&self, notification: Notification) -> NotificationId {
        let entry = Entry::new(notification);
        let id = entry.id();
        self.push(Command::Send(Box::new(entry)));
        id
    }

    /// Replaces the content of a live notification.
    ///
    /// Does nothing if the notification has already been closed.
    pub fn change(&self, id: NotificationId, notification: Notification) {
        self.push(Command::Change(id, notification));
    }

    /// Starts the closing animation after at most `delay`.
    ///
    /// Does nothing if the notification has already been closed.
    pub fn close_after(&self, id: NotificationId, delay: Duration) {
        self.push(Command::CloseAfter(id, delay));
    }

    /// Starts the closing animation now.
    ///
    /// A notification that never made it on screen is dropped without
    /// animating at all. Does nothing if it has already been closed.
    pub fn close_immediately(&self, id: NotificationId) {
        self.push(Command::CloseImmediately(id));
    }

    /// Number of commands waiting for the next frame.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.lock().len()
    }

    /// Takes every queued command, oldest first, leaving the queue empty.
    pub(crate) fn drain(&self) -> Vec<Command> {
        std::mem::take(&mut *self.lock())
    }

    fn push(&self, command: Command) {
        self.lock().push(command);
    }

    // The list is valid after any panic mid-push, so a poisoned lock is
    // still usable.
    fn lock(&self) -> MutexGuard<'_, Vec<Command>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn send_returns_distinct_ids_immediately() {
        let sender = Sender::default();
        let a = sender.send(Notification::info("a"));
        let b = sender.send(Notification::info("b"));
        assert_ne!(a, b);
        assert_eq!(sender.pending_len(), 2);
    }

    #[test]
    fn drain_preserves_enqueue_order_and_empties_queue() {
        let sender = Sender::default();
        let id = sender.send(Notification::info("a"));
        sender.change(id, Notification::info("b"));
        sender.close_after(id, Duration::from_secs(1));
        sender.close_immediately(id);

        let commands = sender.drain();
        assert_eq!(commands.len(), 4);
        assert!(matches!(&commands[0], Command::Send(entry) if entry.id() == id));
        assert!(matches!(&commands[1], Command::Change(i, _) if *i == id));
        assert!(matches!(&commands[2], Command::CloseAfter(i, d) if *i == id && *d == Duration::from_secs(1)));
        assert!(matches!(&commands[3], Command::CloseImmediately(i) if *i == id));
        assert_eq!(sender.pending_len(), 0);
    }

    #[test]
    fn clones_share_one_queue() {
        let sender = Sender::default();
        let clone = sender.clone();
        clone.send(Notification::info("from clone"));
        assert_eq!(sender.drain().len(), 1);
    }

    #[test]
    fn commands_pushed_after_drain_wait_for_next_drain() {
        let sender = Sender::default();
        sender.send(Notification::info("first"));
        let first = sender.drain();
        sender.send(Notification::info("second"));

        assert_eq!(first.len(), 1);
        assert_eq!(sender.drain().len(), 1);
    }

    #[test]
    fn concurrent_senders_keep_per_thread_order() {
        let sender = Sender::default();
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let sender = sender.clone();
                thread::spawn(move || {
                    (0..25)
                        .map(|i| sender.send(Notification::info(format!("{t}-{i}"))))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        let per_thread: Vec<Vec<NotificationId>> = handles
            .into_iter()
            .map(|h| h.join().expect("sender thread panicked"))
            .collect();

        let drained: Vec<NotificationId> = sender
            .drain()
            .into_iter()
            .filter_map(|c| match c {
                Command::Send(entry) => Some(entry.id()),
                _ => None,
            })
            .collect();
        assert_eq!(drained.len(), 100);

        for ids in per_thread {
            let positions: Vec<usize> = ids
                .iter()
                .map(|id| drained.iter().position(|d| d == id).expect("id drained"))
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
