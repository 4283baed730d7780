use std::{fmt, sync::Arc};

use crate::{
    instruments::{InstrumentCache, InstrumentSource},
    messages::MessageHandler,
    reader::SoundFontReader,
};

/// Options and instrument cache of the GUS-style wavetable backend.
///
/// Keep one instance alive for the whole session and pass it to every device;
/// otherwise the patch set is parsed again for each song. To reuse the cached
/// set, leave `reader` and `dmxgus` empty.
pub struct GusConfig<I> {
    /// Default: `32`
    pub midi_voices: i32,

    /// Emulated GUS memory in kilobytes. `0` means unlimited.
    ///
    /// Default: `0`
    pub gus_memsize: i32,

    pub error_handler: MessageHandler,

    pub reader: Option<Arc<dyn SoundFontReader>>,
    pub reader_name: String,

    /// Contents of a DMXGUS lump to build the instrument set from. The patches
    /// it names are read from `gus_patchdir`.
    pub dmxgus: Vec<u8>,
    pub gus_patchdir: String,

    pub instruments: InstrumentCache<I>,
}

impl<I> GusConfig<I> {
    pub fn uses_dmxgus(&self) -> bool {
        !self.dmxgus.is_empty()
    }
}

impl<I> Default for GusConfig<I> {
    fn default() -> Self {
        Self {
            midi_voices: 32,
            gus_memsize: 0,
            error_handler: MessageHandler::default(),
            reader: None,
            reader_name: String::new(),
            dmxgus: Vec::new(),
            gus_patchdir: String::new(),
            instruments: InstrumentCache::default(),
        }
    }
}

impl<I> Clone for GusConfig<I> {
    fn clone(&self) -> Self {
        Self {
            midi_voices: self.midi_voices,
            gus_memsize: self.gus_memsize,
            error_handler: self.error_handler.clone(),
            reader: self.reader.clone(),
            reader_name: self.reader_name.clone(),
            dmxgus: self.dmxgus.clone(),
            gus_patchdir: self.gus_patchdir.clone(),
            instruments: self.instruments.clone(),
        }
    }
}

impl<I> fmt::Debug for GusConfig<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GusConfig")
            .field("midi_voices", &self.midi_voices)
            .field("gus_memsize", &self.gus_memsize)
            .field("error_handler", &self.error_handler)
            .field("reader", &self.reader)
            .field("reader_name", &self.reader_name)
            .field("dmxgus_len", &self.dmxgus.len())
            .field("gus_patchdir", &self.gus_patchdir)
            .field("instruments", &self.instruments)
            .finish()
    }
}

impl<I> InstrumentSource for GusConfig<I> {
    type Instruments = I;

    fn reader(&self) -> Option<&Arc<dyn SoundFontReader>> {
        self.reader.as_ref()
    }

    fn reader_name(&self) -> &str {
        &self.reader_name
    }

    fn cache(&self) -> &InstrumentCache<I> {
        &self.instruments
    }

    fn cache_mut(&mut self) -> &mut InstrumentCache<I> {
        &mut self.instruments
    }

    /// A pending DMXGUS lump always asks for a fresh instrument set.
    fn reusable_instruments(&self) -> Option<Arc<I>> {
        if self.uses_dmxgus() {
            return None;
        }
        self.instruments.lookup(self.requested_source())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::reader::MemoryReader;

    #[test]
    fn test_defaults() {
        let config = GusConfig::<()>::default();
        assert_eq!(config.midi_voices, 32);
        assert_eq!(config.gus_memsize, 0);
        assert!(!config.error_handler.is_installed());
        assert!(config.reader.is_none());
        assert!(config.reader_name.is_empty());
        assert!(!config.uses_dmxgus());
        assert!(config.gus_patchdir.is_empty());
        assert!(!config.instruments.is_loaded());
        assert_eq!(config.instruments.loaded_config(), "");
    }

    #[test]
    fn test_cache_shared_with_device() {
        let mut config = GusConfig::<Vec<u8>>::default();
        config.reader = Some(Arc::new(MemoryReader::new("gus:default", Vec::new())));
        assert!(config.reusable_instruments().is_none());

        let source = config.requested_source().to_owned();
        let device = config.cache_mut().store(source, vec![0x47, 0x55, 0x53]);

        // Second song: no new reader, the cached set is picked by name.
        config.reader = None;
        config.reader_name = "gus:default".to_owned();
        let second = config.reusable_instruments().unwrap();
        assert!(Arc::ptr_eq(&device, &second));

        let cloned = config.clone();
        assert_eq!(cloned.instruments.holders(), 4);

        config.reader_name = "gus:other".to_owned();
        assert!(config.reusable_instruments().is_none());
    }

    #[test]
    fn test_dmxgus_skips_cached_set() {
        let mut config = GusConfig::<Vec<u8>>::default();
        config.reader_name = "gus.cfg".to_owned();
        let device = config.cache_mut().store("gus.cfg", vec![1, 2, 3]);
        assert!(config.reusable_instruments().is_some());

        config.dmxgus = b"#dmxgus lump".to_vec();
        assert!(config.reusable_instruments().is_none());
        assert!(Arc::ptr_eq(&config.instruments.share().unwrap(), &device));

        config.dmxgus.clear();
        assert!(config.reusable_instruments().is_some());
    }
}
