//! Console speech output.
//!
//! `ConsoleSpeech` is a `SpeechSink` that never blocks the session: every
//! utterance is sent over an mpsc channel to a speaker thread, which writes
//! them out one line each in the order they were enqueued.

use std::io::Write;
use std::sync::mpsc::{self, Sender};
use std::sync::Mutex;
use std::thread::JoinHandle;

use anyhow::{anyhow, Result};
use morsetouch_core::{SpeechSink, Utterance};

/// Sending half of the speaker channel.
#[derive(Debug)]
pub struct ConsoleSpeech {
    tx: Mutex<Sender<Utterance>>,
}

impl SpeechSink for ConsoleSpeech {
    fn enqueue(&self, utterance: Utterance) {
        let tx = self.tx.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if tx.send(utterance).is_err() {
            tracing::warn!("speaker thread has stopped, utterance dropped");
        }
    }
}

/// Handle to the speaker thread.
#[derive(Debug)]
pub struct Speaker {
    handle: JoinHandle<Result<usize>>,
}

impl Speaker {
    /// Start a speaker thread writing to `out`.
    ///
    /// The thread runs until every `ConsoleSpeech` clone is dropped.
    pub fn spawn<W>(out: W) -> (ConsoleSpeech, Speaker)
    where
        W: Write + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<Utterance>();
        let handle = std::thread::spawn(move || -> Result<usize> {
            let mut out = out;
            let mut spoken = 0;
            for utterance in rx {
                let marker = if utterance.deletion { "⌫" } else { "🔊" };
                writeln!(out, "{} {}", marker, utterance.text)?;
                out.flush()?;
                spoken += 1;
            }
            Ok(spoken)
        });
        (
            ConsoleSpeech {
                tx: Mutex::new(tx),
            },
            Speaker { handle },
        )
    }

    /// Wait for the queue to drain. Returns the number of utterances spoken.
    pub fn finish(self) -> Result<usize> {
        self.handle
            .join()
            .map_err(|_| anyhow!("speaker thread panicked"))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use morsetouch_core::{Announcement, Phrasebook};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_speaker_preserves_order() {
        let buf = SharedBuf::default();
        let (speech, speaker) = Speaker::spawn(buf.clone());

        speech.enqueue(Utterance::new("dot"));
        speech.enqueue(Utterance::new("dash"));
        speech.enqueue(Utterance {
            text: "delete a".to_string(),
            deletion: true,
        });
        drop(speech);

        assert_eq!(speaker.finish().unwrap(), 3);
        let text = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(text, "🔊 dot\n🔊 dash\n⌫ delete a\n");
    }

    #[test]
    fn test_speaker_prints_deletion_text_as_given() {
        let buf = SharedBuf::default();
        let (speech, speaker) = Speaker::spawn(buf.clone());

        let book = Phrasebook::default();
        speech.enqueue(book.render(&Announcement::Deletion("b".to_string())));
        drop(speech);

        speaker.finish().unwrap();
        let text = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(text, "⌫ delete b\n");
    }
}
