/// Global tunables not owned by a single backend.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MiscConfig {
    /// Load all instruments of a song before playback starts.
    pub snd_midiprecache: bool,

    /// Stereo separation applied to game music emulation output.
    pub gme_stereodepth: f32,

    /// Size of streamed audio buffers in kilobytes.
    pub snd_streambuffersize: i32,
}

impl Default for MiscConfig {
    fn default() -> Self {
        Self {
            snd_midiprecache: false,
            gme_stereodepth: 0.0,
            snd_streambuffersize: 64,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MiscConfig::default();
        assert!(!config.snd_midiprecache);
        assert_eq!(config.gme_stereodepth, 0.0);
        assert_eq!(config.snd_streambuffersize, 64);
    }
}
