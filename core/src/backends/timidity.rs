use std::{fmt, sync::Arc};

use crate::{
    instruments::{InstrumentCache, InstrumentSource},
    messages::MessageHandler,
    reader::SoundFontReader,
};

/// Instrument source and cache of the Timidity++ style backend.
///
/// Like `GusConfig`, this should outlive the devices created from it so the
/// parsed instruments can be reused. Leave `reader` empty to reuse them.
pub struct TimidityConfig<I> {
    pub error_handler: MessageHandler,

    pub reader: Option<Arc<dyn SoundFontReader>>,
    pub reader_name: String,

    pub instruments: InstrumentCache<I>,
}

impl<I> Default for TimidityConfig<I> {
    fn default() -> Self {
        Self {
            error_handler: MessageHandler::default(),
            reader: None,
            reader_name: String::new(),
            instruments: InstrumentCache::default(),
        }
    }
}

impl<I> Clone for TimidityConfig<I> {
    fn clone(&self) -> Self {
        Self {
            error_handler: self.error_handler.clone(),
            reader: self.reader.clone(),
            reader_name: self.reader_name.clone(),
            instruments: self.instruments.clone(),
        }
    }
}

impl<I> fmt::Debug for TimidityConfig<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimidityConfig")
            .field("error_handler", &self.error_handler)
            .field("reader", &self.reader)
            .field("reader_name", &self.reader_name)
            .field("instruments", &self.instruments)
            .finish()
    }
}

impl<I> InstrumentSource for TimidityConfig<I> {
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

/// Playback tunables of the Timidity++ style backend.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimidityTuning {
    pub modulation_wheel: bool,
    pub portamento: bool,

    /// Reverb mode (0 = off, 1 = standard, 2 = global, 3 = freeverb, 4 = global freeverb).
    pub reverb: i32,
    /// Reverb send level, 0-127. `0` uses the channel's own level.
    pub reverb_level: i32,
    /// Chorus mode (0 = off, 1 = standard, 2 = surround).
    pub chorus: i32,
    pub surround_chorus: bool,
    pub channel_pressure: bool,
    /// Resonant low-pass filter type (0 = off, 1 = Chamberlin, 2 = Moog).
    pub lpf_def: i32,
    pub temper_control: bool,
    pub modulation_envelope: bool,
    pub overlap_voice_allow: bool,
    pub drum_effect: bool,
    pub pan_delay: bool,
    /// Transposition in semitones.
    pub key_adjust: i32,

    pub drum_power: f32,
    pub tempo_adjust: f32,
    /// Minimum sustain time in milliseconds.
    pub min_sustain_time: f32,
}

impl Default for TimidityTuning {
    fn default() -> Self {
        Self {
            modulation_wheel: true,
            portamento: true,
            reverb: 0,
            reverb_level: 0,
            chorus: 0,
            surround_chorus: false,
            channel_pressure: false,
            lpf_def: 1,
            temper_control: true,
            modulation_envelope: true,
            overlap_voice_allow: true,
            drum_effect: false,
            pan_delay: false,
            key_adjust: 0,
            drum_power: 1.0,
            tempo_adjust: 1.0,
            min_sustain_time: 5000.0,
        }
    }
}
