use std::{fmt, sync::Arc};

use crate::{
    instruments::{InstrumentCache, InstrumentSource},
    messages::WildMidiMessageHandler,
    reader::SoundFontReader,
};

/// Options, instrument source and cache of the WildMidi backend.
pub struct WildMidiConfig<I> {
    /// Default: `false`
    pub reverb: bool,

    /// Default: `true`
    pub enhanced_resampling: bool,

    pub error_handler: WildMidiMessageHandler,

    pub reader: Option<Arc<dyn SoundFontReader>>,
    pub reader_name: String,

    pub instruments: InstrumentCache<I>,
}

impl<I> Default for WildMidiConfig<I> {
    fn default() -> Self {
        Self {
            reverb: false,
            enhanced_resampling: true,
            error_handler: WildMidiMessageHandler::default(),
            reader: None,
            reader_name: String::new(),
            instruments: InstrumentCache::default(),
        }
    }
}

impl<I> Clone for WildMidiConfig<I> {
    fn clone(&self) -> Self {
        Self {
            reverb: self.reverb,
            enhanced_resampling: self.enhanced_resampling,
            error_handler: self.error_handler.clone(),
            reader: self.reader.clone(),
            reader_name: self.reader_name.clone(),
            instruments: self.instruments.clone(),
        }
    }
}

impl<I> fmt::Debug for WildMidiConfig<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WildMidiConfig")
            .field("reverb", &self.reverb)
            .field("enhanced_resampling", &self.enhanced_resampling)
            .field("error_handler", &self.error_handler)
            .field("reader", &self.reader)
            .field("reader_name", &self.reader_name)
            .field("instruments", &self.instruments)
            .finish()
    }
}

impl<I> InstrumentSource for WildMidiConfig<I> {
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
}
