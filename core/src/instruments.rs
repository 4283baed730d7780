//! Instrument sets shared between a backend config and the playing device.
//!
//! Parsing a patch set is slow, so the parsed instruments are kept in the
//! config after the first load and handed to every device created from it.
//! The set stays alive as long as either the config or a device holds it.

use std::{fmt, sync::Arc};

use crate::reader::SoundFontReader;

pub struct InstrumentCache<I> {
    loaded_config: String,
    instruments: Option<Arc<I>>,
}

impl<I> InstrumentCache<I> {
    /// Name of the source the cached set was loaded from. Empty when nothing is cached.
    pub fn loaded_config(&self) -> &str {
        &self.loaded_config
    }

    pub fn is_loaded(&self) -> bool {
        self.instruments.is_some()
    }

    /// Returns the cached set if it was loaded from `source`.
    pub fn lookup(&self, source: &str) -> Option<Arc<I>> {
        match &self.instruments {
            Some(instruments) if self.loaded_config == source => {
                log::debug!("Reusing cached instruments from {source}");
                Some(instruments.clone())
            }
            _ => None,
        }
    }

    /// Replaces the cached set and returns a handle for the device.
    pub fn store(&mut self, source: impl Into<String>, instruments: I) -> Arc<I> {
        self.store_shared(source, Arc::new(instruments))
    }

    /// Like `store`, for a set the device already holds.
    pub fn store_shared(&mut self, source: impl Into<String>, instruments: Arc<I>) -> Arc<I> {
        self.loaded_config = source.into();
        self.instruments = Some(instruments.clone());
        instruments
    }

    /// Another handle to the cached set, regardless of its source.
    pub fn share(&self) -> Option<Arc<I>> {
        self.instruments.clone()
    }

    /// Drops the config's handle. Devices still holding the set keep it alive.
    pub fn release(&mut self) {
        if let Some(instruments) = self.instruments.take() {
            log::debug!(
                "Releasing instruments from {} ({} other holders)",
                self.loaded_config,
                Arc::strong_count(&instruments) - 1
            );
        }
        self.loaded_config.clear();
    }

    /// Number of live handles to the cached set, including the config's own.
    pub fn holders(&self) -> usize {
        self.instruments.as_ref().map_or(0, Arc::strong_count)
    }
}

impl<I> Default for InstrumentCache<I> {
    fn default() -> Self {
        Self {
            loaded_config: String::new(),
            instruments: None,
        }
    }
}

impl<I> Clone for InstrumentCache<I> {
    fn clone(&self) -> Self {
        Self {
            loaded_config: self.loaded_config.clone(),
            instruments: self.instruments.clone(),
        }
    }
}

impl<I> fmt::Debug for InstrumentCache<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstrumentCache")
            .field("loaded_config", &self.loaded_config)
            .field("holders", &self.holders())
            .finish()
    }
}

/// Common access to the reader and cache fields of the softsynth configs.
pub trait InstrumentSource {
    type Instruments;

    fn reader(&self) -> Option<&Arc<dyn SoundFontReader>>;

    fn reader_name(&self) -> &str;

    fn cache(&self) -> &InstrumentCache<Self::Instruments>;

    fn cache_mut(&mut self) -> &mut InstrumentCache<Self::Instruments>;

    /// Name of the instrument set a load would produce right now.
    fn requested_source(&self) -> &str {
        match self.reader() {
            Some(reader) => reader.name(),
            None => self.reader_name(),
        }
    }

    /// The cached set, if it matches what would be loaded. Callers that need
    /// a fresh load must change or clear the reader fields first.
    fn reusable_instruments(&self) -> Option<Arc<Self::Instruments>> {
        self.cache().lookup(self.requested_source())
    }
}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct Tracked<'a>(&'a AtomicUsize);

    impl Drop for Tracked<'_> {
        fn drop(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_lookup_by_source() {
        let mut cache = InstrumentCache::default();
        assert!(cache.lookup("").is_none());

        cache.store("gus.cfg", vec![1, 2, 3]);
        assert_eq!(cache.loaded_config(), "gus.cfg");
        assert_eq!(*cache.lookup("gus.cfg").unwrap(), vec![1, 2, 3]);
        assert!(cache.lookup("other.cfg").is_none());
        assert!(cache.is_loaded());
    }

    #[test]
    fn test_config_released_first() {
        let drops = AtomicUsize::new(0);
        let mut cache = InstrumentCache::default();

        let device = cache.store("timidity.cfg", Tracked(&drops));
        assert_eq!(cache.holders(), 2);

        cache.release();
        assert!(!cache.is_loaded());
        assert_eq!(cache.loaded_config(), "");
        assert_eq!(drops.load(Ordering::SeqCst), 0);
        assert_eq!(Arc::strong_count(&device), 1);

        drop(device);
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_device_released_first() {
        let drops = AtomicUsize::new(0);
        let mut cache = InstrumentCache::default();

        let device = cache.store("wildmidi.cfg", Tracked(&drops));
        drop(device);
        assert_eq!(drops.load(Ordering::SeqCst), 0);
        assert_eq!(cache.holders(), 1);
        assert!(cache.share().is_some());

        cache.release();
        assert_eq!(drops.load(Ordering::SeqCst), 1);
        assert_eq!(cache.holders(), 0);
    }

    #[test]
    fn test_store_replaces_previous_set() {
        let drops = AtomicUsize::new(0);
        let mut cache = InstrumentCache::default();

        cache.store("a.cfg", Tracked(&drops));
        cache.store("b.cfg", Tracked(&drops));
        assert_eq!(drops.load(Ordering::SeqCst), 1);
        assert!(cache.lookup("a.cfg").is_none());
        assert!(cache.lookup("b.cfg").is_some());
    }
}
