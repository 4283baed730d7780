/// Options for module (MOD/S3M/XM/IT) playback.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DumbConfig {
    /// Output sample rate. `0` follows the output device.
    ///
    /// Default: `0`
    pub mod_samplerate: i32,

    /// Volume ramping mode (0 = none, 1 = logarithmic, 2 = XM/IT style).
    ///
    /// Default: `2`
    pub mod_volramp: i32,

    /// Resampling quality (0 = aliasing, 1 = linear, 2 = cubic).
    ///
    /// Default: `2`
    pub mod_interp: i32,

    /// Pick the emulated chip count from the module's polyphony.
    ///
    /// Default: `false`
    pub mod_autochip: bool,

    /// Modules at most this large (in samples) always get auto chip sizing.
    ///
    /// Default: `100`
    pub mod_autochip_size_force: i32,

    /// Modules at most this large are scanned before sizing.
    ///
    /// Default: `500`
    pub mod_autochip_size_scan: i32,

    /// Default: `12`
    pub mod_autochip_scan_threshold: i32,

    /// Default: `1.0`
    pub mod_dumb_mastervolume: f32,
}

impl Default for DumbConfig {
    fn default() -> Self {
        Self {
            mod_samplerate: 0,
            mod_volramp: 2,
            mod_interp: 2,
            mod_autochip: false,
            mod_autochip_size_force: 100,
            mod_autochip_size_scan: 500,
            mod_autochip_scan_threshold: 12,
            mod_dumb_mastervolume: 1.0,
        }
    }
}
