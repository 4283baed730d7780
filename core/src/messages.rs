//! Diagnostic callbacks installed by the embedding application.
//!
//! Backends report problems (missing patches, bad config lines) through
//! these handlers. Without an installed callback the messages go to the
//! `log` facade.

use std::{fmt, sync::Arc};

/// Severity of a softsynth message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
    Fatal,
}

impl MessageKind {
    /// Maps the numeric message types used by Timidity-style synths.
    pub fn from_raw(value: i32) -> Self {
        match value {
            i32::MIN..=0 => MessageKind::Info,
            1 => MessageKind::Warning,
            2 => MessageKind::Error,
            _ => MessageKind::Fatal,
        }
    }
}

/// How chatty a message is. Higher levels are only of interest when debugging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verbosity {
    Normal,
    Verbose,
    Noisy,
    Debug,
}

impl Verbosity {
    pub fn from_raw(value: i32) -> Self {
        match value {
            i32::MIN..=0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            2 => Verbosity::Noisy,
            _ => Verbosity::Debug,
        }
    }
}

type MessageCallback = dyn Fn(MessageKind, Verbosity, &str) + Send + Sync;

/// Message sink for the GUS and Timidity backends.
#[derive(Clone, Default)]
pub struct MessageHandler {
    callback: Option<Arc<MessageCallback>>,
}

impl MessageHandler {
    pub fn new(callback: impl Fn(MessageKind, Verbosity, &str) + Send + Sync + 'static) -> Self {
        Self {
            callback: Some(Arc::new(callback)),
        }
    }

    pub fn is_installed(&self) -> bool {
        self.callback.is_some()
    }

    pub fn report(&self, kind: MessageKind, verbosity: Verbosity, args: fmt::Arguments) {
        match &self.callback {
            Some(callback) => callback(kind, verbosity, &args.to_string()),
            None => match (kind, verbosity) {
                (MessageKind::Fatal | MessageKind::Error, _) => log::error!("{args}"),
                (MessageKind::Warning, _) => log::warn!("{args}"),
                (MessageKind::Info, Verbosity::Normal) => log::info!("{args}"),
                (MessageKind::Info, Verbosity::Verbose) => log::debug!("{args}"),
                (MessageKind::Info, _) => log::trace!("{args}"),
            },
        }
    }
}

impl fmt::Debug for MessageHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageHandler")
            .field("installed", &self.is_installed())
            .finish()
    }
}

type WildMidiCallback = dyn Fn(&str) + Send + Sync;

/// Message sink for the WildMidi backend, which only reports errors.
#[derive(Clone, Default)]
pub struct WildMidiMessageHandler {
    callback: Option<Arc<WildMidiCallback>>,
}

impl WildMidiMessageHandler {
    pub fn new(callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            callback: Some(Arc::new(callback)),
        }
    }

    pub fn is_installed(&self) -> bool {
        self.callback.is_some()
    }

    pub fn report(&self, args: fmt::Arguments) {
        match &self.callback {
            Some(callback) => callback(&args.to_string()),
            None => log::error!("{args}"),
        }
    }
}

impl fmt::Debug for WildMidiMessageHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WildMidiMessageHandler")
            .field("installed", &self.is_installed())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn test_callback_receives_messages() {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();
        let handler = MessageHandler::new(move |kind, verbosity, text| {
            sink.lock().unwrap().push((kind, verbosity, text.to_owned()));
        });

        assert!(handler.is_installed());
        handler.report(
            MessageKind::Warning,
            Verbosity::Normal,
            format_args!("missing patch {}", 42),
        );

        let received = received.lock().unwrap();
        assert_eq!(
            *received,
            vec![(
                MessageKind::Warning,
                Verbosity::Normal,
                "missing patch 42".to_owned()
            )]
        );
    }

    #[test]
    fn test_fallback_to_log() {
        let _ = env_logger::builder().is_test(true).try_init();

        let handler = MessageHandler::default();
        assert!(!handler.is_installed());
        handler.report(MessageKind::Error, Verbosity::Normal, format_args!("no callback"));

        let handler = WildMidiMessageHandler::default();
        handler.report(format_args!("no callback"));
    }

    #[test]
    fn test_wildmidi_callback() {
        let received = Arc::new(Mutex::new(String::new()));
        let sink = received.clone();
        let handler = WildMidiMessageHandler::new(move |text| {
            sink.lock().unwrap().push_str(text);
        });

        let cloned = handler.clone();
        cloned.report(format_args!("bad config line {}", 3));
        assert_eq!(*received.lock().unwrap(), "bad config line 3");
    }

    #[test]
    fn test_raw_levels() {
        assert_eq!(MessageKind::from_raw(0), MessageKind::Info);
        assert_eq!(MessageKind::from_raw(2), MessageKind::Error);
        assert_eq!(MessageKind::from_raw(9), MessageKind::Fatal);
        assert_eq!(Verbosity::from_raw(-1), Verbosity::Normal);
        assert_eq!(Verbosity::from_raw(3), Verbosity::Debug);
    }
}
