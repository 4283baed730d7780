/// Options for the FluidSynth-style SoundFont backend.
///
/// The reverb and chorus coefficients are the sonic baseline of the backend
/// and are kept bit-identical to the values the synthesizer ships with.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FluidConfig {
    /// Path of the synthesizer shared library to load. Empty uses the
    /// platform default.
    pub lib: String,

    /// SoundFonts to load, in order. Later entries are stacked on top.
    pub patchset: Vec<String>,

    /// Default: `false`
    pub reverb: bool,

    /// Default: `false`
    pub chorus: bool,

    /// Polyphony limit.
    ///
    /// Default: `128`
    pub voices: i32,

    /// Sample interpolation method (0 = none, 1 = linear, 4 = 4th order, 7 = 7th order).
    ///
    /// Default: `1`
    pub interp: i32,

    /// Synthesis sample rate. `0` follows the output device.
    ///
    /// Default: `0`
    pub samplerate: i32,

    /// Number of rendering threads.
    ///
    /// Default: `1`
    pub threads: i32,

    /// Default: `3`
    pub chorus_voices: i32,

    /// Chorus modulation waveform (0 = sine, 1 = triangle).
    ///
    /// Default: `0`
    pub chorus_type: i32,

    /// Master gain.
    ///
    /// Default: `0.5`
    pub gain: f32,

    /// Default: `0.61`
    pub reverb_roomsize: f32,

    /// Default: `0.23`
    pub reverb_damping: f32,

    /// Default: `0.76`
    pub reverb_width: f32,

    /// Default: `0.57`
    pub reverb_level: f32,

    /// Default: `1.2`
    pub chorus_level: f32,

    /// Chorus modulation speed in Hz.
    ///
    /// Default: `0.3`
    pub chorus_speed: f32,

    /// Chorus modulation depth in milliseconds.
    ///
    /// Default: `8.0`
    pub chorus_depth: f32,
}

impl Default for FluidConfig {
    fn default() -> Self {
        Self {
            lib: String::new(),
            patchset: Vec::new(),
            reverb: false,
            chorus: false,
            voices: 128,
            interp: 1,
            samplerate: 0,
            threads: 1,
            chorus_voices: 3,
            chorus_type: 0,
            gain: 0.5,
            reverb_roomsize: 0.61,
            reverb_damping: 0.23,
            reverb_width: 0.76,
            reverb_level: 0.57,
            chorus_level: 1.2,
            chorus_speed: 0.3,
            chorus_depth: 8.0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FluidConfig::default();
        assert!(config.lib.is_empty());
        assert!(config.patchset.is_empty());
        assert!(!config.reverb);
        assert!(!config.chorus);
        assert_eq!(config.voices, 128);
        assert_eq!(config.interp, 1);
        assert_eq!(config.samplerate, 0);
        assert_eq!(config.threads, 1);
        assert_eq!(config.chorus_voices, 3);
        assert_eq!(config.chorus_type, 0);
    }

    #[test]
    fn test_default_coefficients_are_exact() {
        let config = FluidConfig::default();
        let expected: [(f32, u32); 8] = [
            (config.gain, 0x3f00_0000),
            (config.reverb_roomsize, 0.61f32.to_bits()),
            (config.reverb_damping, 0.23f32.to_bits()),
            (config.reverb_width, 0.76f32.to_bits()),
            (config.reverb_level, 0.57f32.to_bits()),
            (config.chorus_level, 1.2f32.to_bits()),
            (config.chorus_speed, 0.3f32.to_bits()),
            (config.chorus_depth, 0x4100_0000),
        ];
        for (value, bits) in expected {
            assert_eq!(value.to_bits(), bits);
        }
        assert_eq!(config.reverb_roomsize.to_bits(), 0x3f1c_28f6);
    }
}
