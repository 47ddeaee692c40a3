//! The quote store
//!
//! Single authoritative owner of the in-memory quote collection. The store
//! drains its persistence port once at construction, routes every collection
//! write through its own operations so observers stay in sync, and snapshots
//! the collection back to the port on save. At most one store may be live
//! per process; a second one would silently fork the collection and lose
//! data on save.

use crate::domain::{Quote, QuoteField};
use crate::error::{DictumError, Result};
use crate::infrastructure::{QuoteStorage, Speech};
use std::sync::atomic::{AtomicBool, Ordering};

// Process-wide single-instance guard, released when the store drops.
static STORE_OPEN: AtomicBool = AtomicBool::new(false);

/// A change to the collection or to one of its quotes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added { index: usize, quote: Quote },
    Removed { index: usize, quote: Quote },
    Updated { index: usize, field: QuoteField },
}

/// Token returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

type Observer = Box<dyn FnMut(&StoreEvent)>;

pub struct QuoteStore {
    quotes: Vec<Quote>,
    storage: Box<dyn QuoteStorage>,
    observers: Vec<(u64, Observer)>,
    next_observer: u64,
}

impl QuoteStore {
    /// Open the store, populating it from the persistence port.
    ///
    /// Fails with `StoreAlreadyOpen` when a store is already live in this
    /// process. The port's `load` iterator is drained exactly once, here;
    /// the collection is never reloaded.
    pub fn open(storage: Box<dyn QuoteStorage>) -> Result<Self> {
        if STORE_OPEN.swap(true, Ordering::SeqCst) {
            return Err(DictumError::StoreAlreadyOpen);
        }

        let quotes = storage.load().collect();

        Ok(QuoteStore {
            quotes,
            storage,
            observers: Vec::new(),
            next_observer: 0,
        })
    }

    /// The live collection, in insertion order
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// A quote by zero-based position
    pub fn quote(&self, index: usize) -> Option<&Quote> {
        self.quotes.get(index)
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Append a quote to the end of the collection
    pub fn add(&mut self, quote: Quote) {
        self.quotes.push(quote);
        let index = self.quotes.len() - 1;
        let quote = self.quotes[index].clone();
        self.notify(&StoreEvent::Added { index, quote });
    }

    /// Remove the first occurrence equal to `quote`.
    ///
    /// Returns `false` without raising when no occurrence exists.
    pub fn remove(&mut self, quote: &Quote) -> bool {
        match self.quotes.iter().position(|q| q == quote) {
            Some(index) => {
                self.remove_at(index);
                true
            }
            None => false,
        }
    }

    /// Remove the quote at a zero-based position
    pub fn remove_at(&mut self, index: usize) -> Option<Quote> {
        if index >= self.quotes.len() {
            return None;
        }
        let quote = self.quotes.remove(index);
        self.notify(&StoreEvent::Removed {
            index,
            quote: quote.clone(),
        });
        Some(quote)
    }

    /// Overwrite a quote's fields in place, preserving its position.
    ///
    /// Emits one update event per field that actually changed.
    pub fn update_at(&mut self, index: usize, author: &str, text: &str) -> Result<()> {
        let quote = self
            .quotes
            .get_mut(index)
            .ok_or(DictumError::QuoteNotFound(index + 1))?;

        // Author first, then text, matching the edit form's write-back order
        let changes = [quote.set_author(author), quote.set_text(text)];
        for field in changes.into_iter().flatten() {
            self.notify(&StoreEvent::Updated { index, field });
        }
        Ok(())
    }

    /// Snapshot the current collection to the persistence port.
    ///
    /// A failed save surfaces as an error; the in-memory collection is
    /// untouched either way.
    pub fn save(&self) -> Result<()> {
        self.storage.save(&self.quotes)
    }

    /// Speak a quote through the given speech capability.
    ///
    /// The utterance is the text, suffixed with `"; by <author>"` when the
    /// author is non-blank. Fails with `MissingQuote` before any delegation
    /// when no quote is given.
    pub fn announce(&self, quote: Option<&Quote>, speech: &dyn Speech) -> Result<()> {
        let quote = quote.ok_or(DictumError::MissingQuote)?;

        let mut utterance = quote.text().to_string();
        if !quote.author().trim().is_empty() {
            utterance.push_str("; by ");
            utterance.push_str(quote.author());
        }

        speech.speak(&utterance)
    }

    /// Register an observer called synchronously on every change
    pub fn subscribe(&mut self, observer: impl FnMut(&StoreEvent) + 'static) -> Subscription {
        let id = self.next_observer;
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        Subscription(id)
    }

    /// Drop a previously registered observer
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.observers.retain(|(id, _)| *id != subscription.0);
    }

    fn notify(&mut self, event: &StoreEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer(event);
        }
    }
}

impl Drop for QuoteStore {
    fn drop(&mut self) {
        STORE_OPEN.store(false, Ordering::SeqCst);
    }
}


#[cfg(test)]
mod tests {
    use super::doubles::{store_guard_lock, FailingStorage, MemoryStorage, RecordingSpeech};
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn two_quotes() -> Vec<Quote> {
        vec![Quote::new("A", "first"), Quote::new("B", "second")]
    }

    #[test]
    fn test_second_open_fails_and_first_is_unchanged() {
        let _lock = store_guard_lock().lock().unwrap();

        let store = QuoteStore::open(Box::new(MemoryStorage::with_quotes(two_quotes()))).unwrap();

        let second = QuoteStore::open(Box::new(MemoryStorage::default()));
        assert!(matches!(second, Err(DictumError::StoreAlreadyOpen)));

        // The failed attempt left the original collection alone
        assert_eq!(store.len(), 2);
        assert_eq!(store.quote(0).unwrap().author(), "A");
    }

    #[test]
    fn test_dropping_the_store_releases_the_guard() {
        let _lock = store_guard_lock().lock().unwrap();

        let store = QuoteStore::open(Box::new(MemoryStorage::default())).unwrap();
        drop(store);

        let reopened = QuoteStore::open(Box::new(MemoryStorage::default()));
        assert!(reopened.is_ok());
    }

    #[test]
    fn test_open_populates_in_load_order() {
        let _lock = store_guard_lock().lock().unwrap();

        let store = QuoteStore::open(Box::new(MemoryStorage::with_quotes(two_quotes()))).unwrap();
        assert_eq!(store.quotes()[0].text(), "first");
        assert_eq!(store.quotes()[1].text(), "second");
    }

    #[test]
    fn test_add_and_remove_keep_insertion_order() {
        let _lock = store_guard_lock().lock().unwrap();

        let mut store = QuoteStore::open(Box::new(MemoryStorage::default())).unwrap();
        store.add(Quote::new("A", "one"));
        store.add(Quote::new("B", "two"));
        store.add(Quote::new("C", "three"));

        store.remove_at(1);

        let texts: Vec<&str> = store.quotes().iter().map(|q| q.text()).collect();
        assert_eq!(texts, vec!["one", "three"]);
    }

    #[test]
    fn test_remove_absent_quote_is_a_noop() {
        let _lock = store_guard_lock().lock().unwrap();

        let mut store = QuoteStore::open(Box::new(MemoryStorage::with_quotes(two_quotes()))).unwrap();
        let absent = Quote::new("Nobody", "never stored");

        assert!(!store.remove(&absent));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_at_out_of_range_is_a_noop() {
        let _lock = store_guard_lock().lock().unwrap();

        let mut store = QuoteStore::open(Box::new(MemoryStorage::with_quotes(two_quotes()))).unwrap();
        assert!(store.remove_at(5).is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_takes_first_matching_occurrence() {
        let _lock = store_guard_lock().lock().unwrap();

        let mut store = QuoteStore::open(Box::new(MemoryStorage::default())).unwrap();
        store.add(Quote::new("A", "dup"));
        store.add(Quote::new("B", "other"));
        store.add(Quote::new("A", "dup"));

        assert!(store.remove(&Quote::new("A", "dup")));
        assert_eq!(store.len(), 2);
        assert_eq!(store.quote(0).unwrap().text(), "other");
    }

    #[test]
    fn test_collection_events_carry_kind_and_item() {
        let _lock = store_guard_lock().lock().unwrap();

        let mut store = QuoteStore::open(Box::new(MemoryStorage::default())).unwrap();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        let quote = Quote::new("A", "one");
        store.add(quote.clone());
        store.remove(&quote);

        let events = events.borrow();
        assert_eq!(
            events[0],
            StoreEvent::Added {
                index: 0,
                quote: quote.clone()
            }
        );
        assert_eq!(events[1], StoreEvent::Removed { index: 0, quote });
    }

    #[test]
    fn test_update_emits_only_changed_fields() {
        let _lock = store_guard_lock().lock().unwrap();

        let mut store = QuoteStore::open(Box::new(MemoryStorage::with_quotes(two_quotes()))).unwrap();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        // Same author, new text: one event
        store.update_at(0, "A", "rewritten").unwrap();
        assert_eq!(
            events.borrow().as_slice(),
            &[StoreEvent::Updated {
                index: 0,
                field: QuoteField::Text
            }]
        );

        // Identical values: nothing
        store.update_at(0, "A", "rewritten").unwrap();
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn test_update_out_of_range_fails() {
        let _lock = store_guard_lock().lock().unwrap();

        let mut store = QuoteStore::open(Box::new(MemoryStorage::default())).unwrap();
        let result = store.update_at(3, "A", "x");
        assert!(matches!(result, Err(DictumError::QuoteNotFound(4))));
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let _lock = store_guard_lock().lock().unwrap();

        let mut store = QuoteStore::open(Box::new(MemoryStorage::default())).unwrap();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let subscription = store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        store.add(Quote::new("A", "one"));
        store.unsubscribe(subscription);
        store.add(Quote::new("B", "two"));

        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn test_save_round_trips_through_the_port() {
        let _lock = store_guard_lock().lock().unwrap();

        let storage = MemoryStorage::default();
        let mut store = QuoteStore::open(Box::new(storage.clone())).unwrap();
        store.add(Quote::new("A", "one"));
        store.add(Quote::new("B", "two"));

        store.save().unwrap();
        let saved = storage.last_saved().unwrap();
        drop(store);

        // A fresh load from the port yields exactly what was saved
        let reloaded = QuoteStore::open(Box::new(MemoryStorage::with_quotes(saved))).unwrap();
        let expected = vec![Quote::new("A", "one"), Quote::new("B", "two")];
        assert_eq!(reloaded.quotes(), expected.as_slice());
    }

    #[test]
    fn test_save_empty_collection_is_valid() {
        let _lock = store_guard_lock().lock().unwrap();

        let storage = MemoryStorage::default();
        let store = QuoteStore::open(Box::new(storage.clone())).unwrap();

        store.save().unwrap();
        assert_eq!(storage.last_saved().unwrap().len(), 0);
    }

    #[test]
    fn test_failed_save_leaves_collection_intact() {
        let _lock = store_guard_lock().lock().unwrap();

        let store =
            QuoteStore::open(Box::new(FailingStorage::with_quotes(two_quotes()))).unwrap();

        assert!(store.save().is_err());
        assert_eq!(store.len(), 2);
        assert_eq!(store.quote(0).unwrap().text(), "first");
    }

    #[test]
    fn test_announce_formats_text_and_author() {
        let _lock = store_guard_lock().lock().unwrap();

        let store = QuoteStore::open(Box::new(MemoryStorage::default())).unwrap();
        let speech = RecordingSpeech::default();
        let quote = Quote::new("Mark Twain", "Brevity.");

        store.announce(Some(&quote), &speech).unwrap();
        assert_eq!(speech.spoken(), vec!["Brevity.; by Mark Twain"]);
    }

    #[test]
    fn test_announce_skips_blank_author() {
        let _lock = store_guard_lock().lock().unwrap();

        let store = QuoteStore::open(Box::new(MemoryStorage::default())).unwrap();
        let speech = RecordingSpeech::default();

        store
            .announce(Some(&Quote::new("   ", "Brevity.")), &speech)
            .unwrap();
        assert_eq!(speech.spoken(), vec!["Brevity."]);
    }

    #[test]
    fn test_announce_nothing_fails_before_delegation() {
        let _lock = store_guard_lock().lock().unwrap();

        let store = QuoteStore::open(Box::new(MemoryStorage::default())).unwrap();
        let speech = RecordingSpeech::default();

        let result = store.announce(None, &speech);
        assert!(matches!(result, Err(DictumError::MissingQuote)));
        assert!(speech.spoken().is_empty());
    }
}
