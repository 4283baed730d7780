/// Volume scaling model used by the FM-chip backend.
pub const ADL_VOLUME_MODEL_DMX: i32 = 3;

/// Options for the libADLMIDI-style FM-chip backend.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AdlConfig {
    /// Number of emulated OPL3 chips.
    ///
    /// Default: `6`
    pub chips_count: i32,

    /// Index of the chip emulator core.
    ///
    /// Default: `0`
    pub emulator_id: i32,

    /// Index of the embedded instrument bank.
    ///
    /// Default: `14`
    pub bank: i32,

    /// Volume model, see `ADL_VOLUME_MODEL_DMX`.
    ///
    /// Default: `3` (DMX)
    pub volume_model: i32,

    /// Run the emulator at the output sample rate instead of the native chip rate.
    ///
    /// Default: `false`
    pub run_at_pcm_rate: bool,

    /// Use full stereo panning instead of hard left/center/right.
    ///
    /// Default: `true`
    pub fullpan: bool,

    /// Path of a WOPL bank used instead of the embedded banks. Empty means none.
    pub custom_bank: String,
}

impl Default for AdlConfig {
    fn default() -> Self {
        Self {
            chips_count: 6,
            emulator_id: 0,
            bank: 14,
            volume_model: ADL_VOLUME_MODEL_DMX,
            run_at_pcm_rate: false,
            fullpan: true,
            custom_bank: String::new(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdlConfig::default();
        assert_eq!(config.chips_count, 6);
        assert_eq!(config.emulator_id, 0);
        assert_eq!(config.bank, 14);
        assert_eq!(config.volume_model, 3);
        assert!(!config.run_at_pcm_rate);
        assert!(config.fullpan);
        assert!(config.custom_bank.is_empty());
    }
}
