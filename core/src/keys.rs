//! Stable integer identities for every tunable.
//!
//! The ordinal of each key is the index into the storage arrays kept by a
//! config manager, so the order of the declarations below is part of the
//! public contract. New keys may only be appended at the end of a list.
//! The count of each list is exposed as `COUNT` on the key type and as a
//! `NUM_*_CONFIGS` constant; it is not a key and can't be used as one.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::backends::Backend;

/// Returned when a key name doesn't match any declared key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown config key: {0}")]
pub struct UnknownKeyError(pub String);

macro_rules! config_keys {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($count:ident) {
            $($(#[$vmeta:meta])* $variant:ident = $str:literal => $backend:ident,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u32)]
        $vis enum $name {
            $($(#[$vmeta])* $variant,)*
        }

        impl $name {
            /// Every key, in ordinal order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Number of keys. Equal to the ordinal one past the last key.
            pub const COUNT: usize = [$($str,)*].len();

            /// The storage index of this key.
            pub const fn index(self) -> usize {
                self as usize
            }

            pub fn from_index(index: usize) -> Option<Self> {
                Self::ALL.get(index).copied()
            }

            /// The snake_case name used in settings files.
            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $str,)*
                }
            }

            /// The backend reading this tunable.
            pub const fn backend(self) -> $crate::backends::Backend {
                match self {
                    $($name::$variant => $crate::backends::Backend::$backend,)*
                }
            }
        }

        $vis const $count: usize = $name::COUNT;

        const _: () = {
            assert!($name::ALL.len() == $count);
            let mut i = 0;
            while i < $name::ALL.len() {
                assert!($name::ALL[i] as usize == i);
                i += 1;
            }
        };

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::keys::UnknownKeyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|key| key.name() == s)
                    .ok_or_else(|| $crate::keys::UnknownKeyError(s.to_owned()))
            }
        }
    };
}

config_keys! {
    /// Keys of integer and boolean tunables. Booleans are stored as 0 or 1.
    pub enum IntConfigKey (NUM_INT_CONFIGS) {
        AdlChipsCount = "adl_chips_count" => Adl,
        AdlEmulatorId = "adl_emulator_id" => Adl,
        AdlRunAtPcmRate = "adl_run_at_pcm_rate" => Adl,
        AdlFullpan = "adl_fullpan" => Adl,
        AdlBank = "adl_bank" => Adl,
        AdlUseCustomBank = "adl_use_custom_bank" => Adl,
        AdlVolumeModel = "adl_volume_model" => Adl,

        FluidReverb = "fluid_reverb" => Fluid,
        FluidChorus = "fluid_chorus" => Fluid,
        FluidVoices = "fluid_voices" => Fluid,
        FluidInterp = "fluid_interp" => Fluid,
        FluidSamplerate = "fluid_samplerate" => Fluid,
        FluidThreads = "fluid_threads" => Fluid,
        FluidChorusVoices = "fluid_chorus_voices" => Fluid,
        FluidChorusType = "fluid_chorus_type" => Fluid,

        OplNumchips = "opl_numchips" => Opl,
        OplCore = "opl_core" => Opl,
        OplFullpan = "opl_fullpan" => Opl,

        OpnChipsCount = "opn_chips_count" => Opn,
        OpnEmulatorId = "opn_emulator_id" => Opn,
        OpnRunAtPcmRate = "opn_run_at_pcm_rate" => Opn,
        OpnFullpan = "opn_fullpan" => Opn,
        OpnUseCustomBank = "opn_use_custom_bank" => Opn,

        MidiDmxgus = "midi_dmxgus" => Gus,
        MidiVoices = "midi_voices" => Gus,
        GusMemsize = "gus_memsize" => Gus,

        TimidityModulationWheel = "timidity_modulation_wheel" => Timidity,
        TimidityPortamento = "timidity_portamento" => Timidity,
        TimidityReverb = "timidity_reverb" => Timidity,
        TimidityReverbLevel = "timidity_reverb_level" => Timidity,
        TimidityChorus = "timidity_chorus" => Timidity,
        TimiditySurroundChorus = "timidity_surround_chorus" => Timidity,
        TimidityChannelPressure = "timidity_channel_pressure" => Timidity,
        TimidityLpfDef = "timidity_lpf_def" => Timidity,
        TimidityTemperControl = "timidity_temper_control" => Timidity,
        TimidityModulationEnvelope = "timidity_modulation_envelope" => Timidity,
        TimidityOverlapVoiceAllow = "timidity_overlap_voice_allow" => Timidity,
        TimidityDrumEffect = "timidity_drum_effect" => Timidity,
        TimidityPanDelay = "timidity_pan_delay" => Timidity,
        TimidityKeyAdjust = "timidity_key_adjust" => Timidity,

        WildmidiReverb = "wildmidi_reverb" => WildMidi,
        WildmidiEnhancedResampling = "wildmidi_enhanced_resampling" => WildMidi,

        SndMidiprecache = "snd_midiprecache" => Misc,

        ModSamplerate = "mod_samplerate" => Dumb,
        ModVolramp = "mod_volramp" => Dumb,
        ModInterp = "mod_interp" => Dumb,
        ModAutochip = "mod_autochip" => Dumb,
        ModAutochipSizeForce = "mod_autochip_size_force" => Dumb,
        ModAutochipSizeScan = "mod_autochip_size_scan" => Dumb,
        ModAutochipScanThreshold = "mod_autochip_scan_threshold" => Dumb,

        SndStreambuffersize = "snd_streambuffersize" => Misc,
    }
}

config_keys! {
    /// Keys of floating point tunables.
    pub enum FloatConfigKey (NUM_FLOAT_CONFIGS) {
        FluidGain = "fluid_gain" => Fluid,
        FluidReverbRoomsize = "fluid_reverb_roomsize" => Fluid,
        FluidReverbDamping = "fluid_reverb_damping" => Fluid,
        FluidReverbWidth = "fluid_reverb_width" => Fluid,
        FluidReverbLevel = "fluid_reverb_level" => Fluid,
        FluidChorusLevel = "fluid_chorus_level" => Fluid,
        FluidChorusSpeed = "fluid_chorus_speed" => Fluid,
        FluidChorusDepth = "fluid_chorus_depth" => Fluid,

        TimidityDrumPower = "timidity_drum_power" => Timidity,
        TimidityTempoAdjust = "timidity_tempo_adjust" => Timidity,
        MinSustainTime = "min_sustain_time" => Timidity,

        GmeStereodepth = "gme_stereodepth" => Misc,
        ModDumbMastervolume = "mod_dumb_mastervolume" => Dumb,
    }
}

config_keys! {
    /// Keys of string tunables.
    pub enum StringConfigKey (NUM_STRING_CONFIGS) {
        AdlCustomBank = "adl_custom_bank" => Adl,
        FluidLib = "fluid_lib" => Fluid,
        FluidPatchset = "fluid_patchset" => Fluid,
        OpnCustomBank = "opn_custom_bank" => Opn,
        MidiConfig = "midi_config" => Gus,
        GusPatchdir = "gus_patchdir" => Gus,
        TimidityConfig = "timidity_config" => Timidity,
        WildmidiConfig = "wildmidi_config" => WildMidi,
    }
}

/// A key of any of the three value types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    Int(IntConfigKey),
    Float(FloatConfigKey),
    String(StringConfigKey),
}

impl ConfigKey {
    pub fn name(self) -> &'static str {
        match self {
            ConfigKey::Int(key) => key.name(),
            ConfigKey::Float(key) => key.name(),
            ConfigKey::String(key) => key.name(),
        }
    }

    pub fn backend(self) -> Backend {
        match self {
            ConfigKey::Int(key) => key.backend(),
            ConfigKey::Float(key) => key.backend(),
            ConfigKey::String(key) => key.backend(),
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigKey {
    type Err = UnknownKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(key) = s.parse() {
            return Ok(ConfigKey::Int(key));
        }
        if let Ok(key) = s.parse() {
            return Ok(ConfigKey::Float(key));
        }
        s.parse().map(ConfigKey::String)
    }
}
