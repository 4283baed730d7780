//! Range rules applied to incoming values.
//!
//! Out of range values are clamped rather than rejected, matching how the
//! backends themselves treat user settings. Only non-finite floats are
//! refused outright.

use std::ops::RangeInclusive;

use midiconf_core::{FloatConfigKey, IntConfigKey, StringConfigKey};

use crate::ConfigError;

pub(crate) fn is_bool(key: IntConfigKey) -> bool {
    use IntConfigKey::*;

    matches!(
        key,
        AdlRunAtPcmRate
            | AdlFullpan
            | AdlUseCustomBank
            | FluidReverb
            | FluidChorus
            | OplFullpan
            | OpnRunAtPcmRate
            | OpnFullpan
            | OpnUseCustomBank
            | MidiDmxgus
            | TimidityModulationWheel
            | TimidityPortamento
            | TimiditySurroundChorus
            | TimidityChannelPressure
            | TimidityTemperControl
            | TimidityModulationEnvelope
            | TimidityOverlapVoiceAllow
            | TimidityDrumEffect
            | TimidityPanDelay
            | WildmidiReverb
            | WildmidiEnhancedResampling
            | SndMidiprecache
            | ModAutochip
    )
}

fn int_range(key: IntConfigKey) -> Option<RangeInclusive<i32>> {
    use IntConfigKey::*;

    let range = match key {
        AdlChipsCount => 1..=100,
        FluidVoices => 16..=4096,
        FluidThreads => 1..=256,
        FluidChorusVoices => 0..=99,
        FluidChorusType => 0..=1,
        OplNumchips => 1..=8,
        OpnChipsCount => 1..=32,
        MidiVoices => 16..=256,
        GusMemsize => 0..=1024 * 1024,
        TimidityReverb => 0..=4,
        TimidityReverbLevel => 0..=127,
        TimidityChorus => 0..=2,
        TimidityLpfDef => 0..=2,
        TimidityKeyAdjust => -24..=24,
        SndStreambuffersize => 16..=1024,
        _ => return None,
    };
    Some(range)
}

fn float_range(key: FloatConfigKey) -> RangeInclusive<f32> {
    use FloatConfigKey::*;

    match key {
        FluidGain => 0.0..=10.0,
        FluidReverbRoomsize => 0.0..=1.2,
        FluidReverbDamping => 0.0..=1.0,
        FluidReverbWidth => 0.0..=100.0,
        FluidReverbLevel => 0.0..=1.0,
        FluidChorusLevel => 0.0..=10.0,
        FluidChorusSpeed => 0.1..=5.0,
        FluidChorusDepth => 0.0..=256.0,
        TimidityDrumPower => 0.0..=2.0,
        TimidityTempoAdjust => 0.25..=10.0,
        MinSustainTime => 0.0..=f32::MAX,
        GmeStereodepth => 0.0..=1.0,
        ModDumbMastervolume => 0.0..=f32::MAX,
    }
}

pub(crate) fn normalize_int(key: IntConfigKey, value: i32) -> i32 {
    if is_bool(key) {
        return (value != 0) as i32;
    }

    let normalized = match key {
        IntConfigKey::FluidInterp => match value {
            i32::MIN..=0 => 0,
            1 => 1,
            2..=4 => 4,
            _ => 7,
        },
        IntConfigKey::FluidSamplerate if value <= 0 => 0,
        IntConfigKey::FluidSamplerate => value.clamp(8000, 96000),
        _ => match int_range(key) {
            Some(range) => value.clamp(*range.start(), *range.end()),
            None => value,
        },
    };

    if normalized != value {
        log::warn!("{key} value {value} is out of range, using {normalized}");
    }
    normalized
}

pub(crate) fn normalize_float(key: FloatConfigKey, value: f32) -> Result<f32, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::InvalidFloat {
            key: key.name(),
            value,
        });
    }

    let range = float_range(key);
    let normalized = value.clamp(*range.start(), *range.end());
    if normalized != value {
        log::warn!("{key} value {value} is out of range, using {normalized}");
    }
    Ok(normalized)
}

pub(crate) fn split_patchset(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

pub(crate) fn normalize_string(key: StringConfigKey, value: &str) -> String {
    match key {
        StringConfigKey::FluidPatchset => split_patchset(value).join(";"),
        _ => value.to_owned(),
    }
}
