//! Host ports: everything the controller calls but never implements.
//!
//! Speech goes through a `SpeechSink`, a single shared service with a FIFO
//! contract: utterances are spoken in the order they were enqueued and are
//! never revoked. The remaining host actions are grouped in `HostPorts`, a
//! capability record where each callback slot is independently optional.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;

/// One piece of spoken feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    /// Final text to speak. Deletions already carry the marker word.
    pub text: String,
    /// Whether this utterance announces a deletion.
    ///
    /// Informational only, for a different voice or earcon. Sinks must not
    /// add the marker word again.
    pub deletion: bool,
}

impl Utterance {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            deletion: false,
        }
    }
}

/// Shared speech output.
///
/// Implementations must speak utterances in `enqueue` order without
/// interleaving, and must not block the caller. `Utterance::text` is spoken
/// as given.
pub trait SpeechSink: Send + Sync {
    fn enqueue(&self, utterance: Utterance);
}

/// In-process FIFO sink.
///
/// Hosts drain it from their audio loop; tests read it back to check exactly
/// what was said and in which order.
#[derive(Debug, Default)]
pub struct SpeechQueue {
    queue: Mutex<VecDeque<Utterance>>,
}

impl SpeechQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next utterance to speak.
    pub fn pop(&self) -> Option<Utterance> {
        self.lock().pop_front()
    }

    /// Take every queued utterance, oldest first.
    pub fn drain(&self) -> Vec<Utterance> {
        self.lock().drain(..).collect()
    }

    /// Texts of the queued utterances, oldest first, without consuming them.
    pub fn texts(&self) -> Vec<String> {
        self.lock().iter().map(|u| u.text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<Utterance>> {
        // Pushes and pops never leave the deque inconsistent; ignore poisoning.
        self.queue.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SpeechSink for SpeechQueue {
    fn enqueue(&self, utterance: Utterance) {
        self.lock().push_back(utterance);
    }
}

type FieldSink<H> = Box<dyn FnMut(&H, &str)>;
type Action = Box<dyn FnMut()>;

/// Optional host callbacks.
///
/// An empty slot is a silent no-op. `H` is the host's opaque handle for a
/// field's input target.
pub struct HostPorts<H> {
    update_field: Option<FieldSink<H>>,
    submit_form: Option<Action>,
    navigate_back: Option<Action>,
}

impl<H> HostPorts<H> {
    /// Ports with every slot empty.
    pub fn new() -> Self {
        Self {
            update_field: None,
            submit_form: None,
            navigate_back: None,
        }
    }

    /// Receive the active field's joined text whenever it changes.
    pub fn on_update_field(mut self, f: impl FnMut(&H, &str) + 'static) -> Self {
        self.update_field = Some(Box::new(f));
        self
    }

    pub fn on_submit_form(mut self, f: impl FnMut() + 'static) -> Self {
        self.submit_form = Some(Box::new(f));
        self
    }

    pub fn on_navigate_back(mut self, f: impl FnMut() + 'static) -> Self {
        self.navigate_back = Some(Box::new(f));
        self
    }

    pub fn has_update_field(&self) -> bool {
        self.update_field.is_some()
    }

    pub fn has_submit_form(&self) -> bool {
        self.submit_form.is_some()
    }

    pub fn has_navigate_back(&self) -> bool {
        self.navigate_back.is_some()
    }

    pub(crate) fn update_field(&mut self, handle: &H, text: &str) {
        if let Some(f) = self.update_field.as_mut() {
            f(handle, text);
        }
    }

    pub(crate) fn submit_form(&mut self) {
        if let Some(f) = self.submit_form.as_mut() {
            f();
        }
    }

    pub(crate) fn navigate_back(&mut self) {
        if let Some(f) = self.navigate_back.as_mut() {
            f();
        }
    }
}

impl<H> Default for HostPorts<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> fmt::Debug for HostPorts<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostPorts")
            .field("update_field", &self.has_update_field())
            .field("submit_form", &self.has_submit_form())
            .field("navigate_back", &self.has_navigate_back())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_speech_queue_is_fifo() {
        let queue = SpeechQueue::new();
        queue.enqueue(Utterance::new("one"));
        queue.enqueue(Utterance::new("two"));
        queue.enqueue(Utterance::new("three"));

        assert_eq!(queue.texts(), vec!["one", "two", "three"]);
        assert_eq!(queue.pop().map(|u| u.text), Some("one".to_string()));
        let rest: Vec<_> = queue.drain().into_iter().map(|u| u.text).collect();
        assert_eq!(rest, vec!["two", "three"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_empty_ports_are_noops() {
        let mut ports: HostPorts<usize> = HostPorts::new();
        assert!(!ports.has_update_field());
        ports.update_field(&0, "abc");
        ports.submit_form();
        ports.navigate_back();
    }

    #[test]
    fn test_ports_invoke_present_slots_only() {
        let submitted = Rc::new(RefCell::new(0));
        let counter = submitted.clone();
        let mut ports: HostPorts<usize> =
            HostPorts::new().on_submit_form(move || *counter.borrow_mut() += 1);

        assert!(ports.has_submit_form());
        assert!(!ports.has_navigate_back());
        ports.submit_form();
        ports.navigate_back();
        assert_eq!(*submitted.borrow(), 1);
    }
}
