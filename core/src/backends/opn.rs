/// Options for the OPN2 emulation backend.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OpnConfig {
    /// Default: `8`
    pub chips_count: i32,

    /// Default: `0`
    pub emulator_id: i32,

    /// Default: `false`
    pub run_at_pcm_rate: bool,

    /// Default: `true`
    pub fullpan: bool,

    /// Path of a WOPN bank used instead of `default_bank`. Empty means none.
    pub custom_bank: String,

    /// Contents of the bank used when no custom bank is set.
    pub default_bank: Vec<u8>,
}

impl Default for OpnConfig {
    fn default() -> Self {
        Self {
            chips_count: 8,
            emulator_id: 0,
            run_at_pcm_rate: false,
            fullpan: true,
            custom_bank: String::new(),
            default_bank: Vec::new(),
        }
    }
}
