use midiconf_core::{
    keys::{NUM_FLOAT_CONFIGS, NUM_INT_CONFIGS, NUM_STRING_CONFIGS},
    AdlConfig, Backend, ConfigKey, DumbConfig, FloatConfigKey, FluidConfig, GusConfig,
    IntConfigKey, MiscConfig, OplConfig, OpnConfig, StringConfigKey, TimidityConfig,
    TimidityTuning, WildMidiConfig,
};

use crate::{
    normalize::{normalize_float, normalize_int, normalize_string, split_patchset},
    ConfigError, SettingChange, SettingValue, Settings,
};

/// Owns one config per backend and addresses every tunable by key.
///
/// The storage arrays are indexed by key ordinal and kept in sync with the
/// backend structs on every set. Fields reachable by a key must be changed
/// through `set_int`, `set_float` or `set_string`; the `*_mut` accessors are
/// meant for the parts that have no key (readers, callbacks, caches, banks).
///
/// `G`, `T` and `W` are the instrument set types cached by the GUS, Timidity
/// and WildMidi configs.
pub struct ConfigStore<G = (), T = (), W = ()> {
    adl: AdlConfig,
    fluid: FluidConfig,
    opl: OplConfig,
    opn: OpnConfig,
    gus: GusConfig<G>,
    timidity: TimidityConfig<T>,
    timidity_tuning: TimidityTuning,
    wildmidi: WildMidiConfig<W>,
    dumb: DumbConfig,
    misc: MiscConfig,

    ints: [i32; NUM_INT_CONFIGS],
    floats: [f32; NUM_FLOAT_CONFIGS],
    strings: [String; NUM_STRING_CONFIGS],
}

impl<G, T, W> ConfigStore<G, T, W> {
    pub fn new() -> Self {
        let mut store = Self {
            adl: Default::default(),
            fluid: Default::default(),
            opl: Default::default(),
            opn: Default::default(),
            gus: Default::default(),
            timidity: Default::default(),
            timidity_tuning: Default::default(),
            wildmidi: Default::default(),
            dumb: Default::default(),
            misc: Default::default(),
            ints: [0; NUM_INT_CONFIGS],
            floats: [0.0; NUM_FLOAT_CONFIGS],
            strings: Default::default(),
        };

        for key in IntConfigKey::ALL {
            store.ints[key.index()] = store.read_int_field(*key);
        }
        for key in FloatConfigKey::ALL {
            store.floats[key.index()] = store.read_float_field(*key);
        }
        for key in StringConfigKey::ALL {
            store.strings[key.index()] = store.read_string_field(*key);
        }

        store
    }

    /// Builds a store from defaults overlaid with `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let mut store = Self::new();
        store.apply(settings)?;
        Ok(store)
    }

    pub fn int(&self, key: IntConfigKey) -> i32 {
        self.ints[key.index()]
    }

    pub fn bool(&self, key: IntConfigKey) -> bool {
        self.int(key) != 0
    }

    pub fn float(&self, key: FloatConfigKey) -> f32 {
        self.floats[key.index()]
    }

    pub fn string(&self, key: StringConfigKey) -> &str {
        &self.strings[key.index()]
    }

    pub fn get(&self, key: ConfigKey) -> SettingValue {
        match key {
            ConfigKey::Int(key) => SettingValue::Int(self.int(key)),
            ConfigKey::Float(key) => SettingValue::Float(self.float(key)),
            ConfigKey::String(key) => SettingValue::String(self.string(key).to_owned()),
        }
    }

    pub fn set_int(&mut self, key: IntConfigKey, value: i32) -> SettingChange<i32> {
        let value = normalize_int(key, value);
        let changed = self.ints[key.index()] != value;

        self.ints[key.index()] = value;
        self.write_int_field(key, value);

        SettingChange {
            value,
            restart: (changed && int_needs_restart(key)).then(|| key.backend()),
        }
    }

    pub fn set_bool(&mut self, key: IntConfigKey, value: bool) -> SettingChange<bool> {
        self.set_int(key, value as i32).map(|v| v != 0)
    }

    pub fn set_float(
        &mut self,
        key: FloatConfigKey,
        value: f32,
    ) -> Result<SettingChange<f32>, ConfigError> {
        let value = normalize_float(key, value)?;
        let changed = self.floats[key.index()].to_bits() != value.to_bits();

        self.floats[key.index()] = value;
        self.write_float_field(key, value);

        Ok(SettingChange {
            value,
            restart: (changed && float_needs_restart(key)).then(|| key.backend()),
        })
    }

    pub fn set_string(&mut self, key: StringConfigKey, value: &str) -> SettingChange<String> {
        let value = normalize_string(key, value);
        let changed = self.strings[key.index()] != value;

        self.write_string_field(key, &value);
        self.strings[key.index()] = value.clone();

        SettingChange {
            value,
            restart: changed.then(|| key.backend()),
        }
    }

    pub fn set(
        &mut self,
        key: ConfigKey,
        value: SettingValue,
    ) -> Result<SettingChange<SettingValue>, ConfigError> {
        let change = match (key, value) {
            (ConfigKey::Int(key), SettingValue::Int(v)) => self.set_int(key, v).map(SettingValue::Int),
            (ConfigKey::Float(key), SettingValue::Float(v)) => {
                self.set_float(key, v)?.map(SettingValue::Float)
            }
            // Whole numbers in a float slot are accepted, the reverse isn't.
            (ConfigKey::Float(key), SettingValue::Int(v)) => {
                self.set_float(key, v as f32)?.map(SettingValue::Float)
            }
            (ConfigKey::String(key), SettingValue::String(v)) => {
                self.set_string(key, &v).map(SettingValue::String)
            }
            (key, _) => {
                return Err(ConfigError::TypeMismatch {
                    key: key.name(),
                    expected: expected_type(key),
                })
            }
        };
        Ok(change)
    }

    pub fn set_by_name(
        &mut self,
        name: &str,
        value: impl Into<SettingValue>,
    ) -> Result<SettingChange<SettingValue>, ConfigError> {
        let key: ConfigKey = name.parse()?;
        self.set(key, value.into())
    }

    /// The custom ADL bank path, if one is set and enabled.
    pub fn adl_custom_bank(&self) -> Option<&str> {
        let path = self.string(StringConfigKey::AdlCustomBank);
        (self.bool(IntConfigKey::AdlUseCustomBank) && !path.is_empty()).then_some(path)
    }

    /// The custom OPN bank path, if one is set and enabled.
    pub fn opn_custom_bank(&self) -> Option<&str> {
        let path = self.string(StringConfigKey::OpnCustomBank);
        (self.bool(IntConfigKey::OpnUseCustomBank) && !path.is_empty()).then_some(path)
    }

    /// Whether the GUS backend should build its instrument set from a DMXGUS lump.
    pub fn use_dmxgus(&self) -> bool {
        self.bool(IntConfigKey::MidiDmxgus)
    }

    /// Every key and its current value, by name.
    pub fn snapshot(&self) -> Settings {
        Settings {
            ints: IntConfigKey::ALL
                .iter()
                .map(|key| (key.name().to_owned(), self.int(*key)))
                .collect(),
            floats: FloatConfigKey::ALL
                .iter()
                .map(|key| (key.name().to_owned(), self.float(*key)))
                .collect(),
            strings: StringConfigKey::ALL
                .iter()
                .map(|key| (key.name().to_owned(), self.string(*key).to_owned()))
                .collect(),
        }
    }

    /// Applies every entry of `settings`. Unknown or mistyped entries are
    /// skipped with a warning. Returns the backends that need a restart.
    pub fn apply(&mut self, settings: &Settings) -> Result<Vec<Backend>, ConfigError> {
        let mut restarts = Vec::new();
        let mut record = |restart: Option<Backend>| {
            if let Some(backend) = restart {
                if !restarts.contains(&backend) {
                    restarts.push(backend);
                }
            }
        };

        let entries = settings
            .ints
            .iter()
            .map(|(name, value)| (name, SettingValue::Int(*value)))
            .chain(
                settings
                    .floats
                    .iter()
                    .map(|(name, value)| (name, SettingValue::Float(*value))),
            )
            .chain(
                settings
                    .strings
                    .iter()
                    .map(|(name, value)| (name, SettingValue::String(value.clone()))),
            );

        for (name, value) in entries {
            match self.set_by_name(name, value) {
                Ok(change) => record(change.restart),
                Err(e @ (ConfigError::UnknownKey(_) | ConfigError::TypeMismatch { .. })) => {
                    log::warn!("Skipping setting {name}: {e}");
                }
                Err(e) => return Err(e),
            }
        }

        Ok(restarts)
    }

    pub fn adl(&self) -> &AdlConfig {
        &self.adl
    }

    pub fn fluid(&self) -> &FluidConfig {
        &self.fluid
    }

    pub fn opl(&self) -> &OplConfig {
        &self.opl
    }

    pub fn opl_mut(&mut self) -> &mut OplConfig {
        &mut self.opl
    }

    pub fn opn(&self) -> &OpnConfig {
        &self.opn
    }

    pub fn opn_mut(&mut self) -> &mut OpnConfig {
        &mut self.opn
    }

    pub fn gus(&self) -> &GusConfig<G> {
        &self.gus
    }

    pub fn gus_mut(&mut self) -> &mut GusConfig<G> {
        &mut self.gus
    }

    pub fn timidity(&self) -> &TimidityConfig<T> {
        &self.timidity
    }

    pub fn timidity_mut(&mut self) -> &mut TimidityConfig<T> {
        &mut self.timidity
    }

    pub fn timidity_tuning(&self) -> &TimidityTuning {
        &self.timidity_tuning
    }

    pub fn wildmidi(&self) -> &WildMidiConfig<W> {
        &self.wildmidi
    }

    pub fn wildmidi_mut(&mut self) -> &mut WildMidiConfig<W> {
        &mut self.wildmidi
    }

    pub fn dumb(&self) -> &DumbConfig {
        &self.dumb
    }

    pub fn misc(&self) -> &MiscConfig {
        &self.misc
    }

    fn read_int_field(&self, key: IntConfigKey) -> i32 {
        use IntConfigKey::*;

        let t = &self.timidity_tuning;
        match key {
            AdlChipsCount => self.adl.chips_count,
            AdlEmulatorId => self.adl.emulator_id,
            AdlRunAtPcmRate => self.adl.run_at_pcm_rate as i32,
            AdlFullpan => self.adl.fullpan as i32,
            AdlBank => self.adl.bank,
            AdlVolumeModel => self.adl.volume_model,

            FluidReverb => self.fluid.reverb as i32,
            FluidChorus => self.fluid.chorus as i32,
            FluidVoices => self.fluid.voices,
            FluidInterp => self.fluid.interp,
            FluidSamplerate => self.fluid.samplerate,
            FluidThreads => self.fluid.threads,
            FluidChorusVoices => self.fluid.chorus_voices,
            FluidChorusType => self.fluid.chorus_type,

            OplNumchips => self.opl.numchips,
            OplCore => self.opl.core,
            OplFullpan => self.opl.fullpan as i32,

            OpnChipsCount => self.opn.chips_count,
            OpnEmulatorId => self.opn.emulator_id,
            OpnRunAtPcmRate => self.opn.run_at_pcm_rate as i32,
            OpnFullpan => self.opn.fullpan as i32,

            MidiVoices => self.gus.midi_voices,
            GusMemsize => self.gus.gus_memsize,

            TimidityModulationWheel => t.modulation_wheel as i32,
            TimidityPortamento => t.portamento as i32,
            TimidityReverb => t.reverb,
            TimidityReverbLevel => t.reverb_level,
            TimidityChorus => t.chorus,
            TimiditySurroundChorus => t.surround_chorus as i32,
            TimidityChannelPressure => t.channel_pressure as i32,
            TimidityLpfDef => t.lpf_def,
            TimidityTemperControl => t.temper_control as i32,
            TimidityModulationEnvelope => t.modulation_envelope as i32,
            TimidityOverlapVoiceAllow => t.overlap_voice_allow as i32,
            TimidityDrumEffect => t.drum_effect as i32,
            TimidityPanDelay => t.pan_delay as i32,
            TimidityKeyAdjust => t.key_adjust,

            WildmidiReverb => self.wildmidi.reverb as i32,
            WildmidiEnhancedResampling => self.wildmidi.enhanced_resampling as i32,

            SndMidiprecache => self.misc.snd_midiprecache as i32,

            ModSamplerate => self.dumb.mod_samplerate,
            ModVolramp => self.dumb.mod_volramp,
            ModInterp => self.dumb.mod_interp,
            ModAutochip => self.dumb.mod_autochip as i32,
            ModAutochipSizeForce => self.dumb.mod_autochip_size_force,
            ModAutochipSizeScan => self.dumb.mod_autochip_size_scan,
            ModAutochipScanThreshold => self.dumb.mod_autochip_scan_threshold,

            SndStreambuffersize => self.misc.snd_streambuffersize,

            // Flags without a struct field live only in the storage array.
            AdlUseCustomBank | OpnUseCustomBank | MidiDmxgus => self.ints[key.index()],
        }
    }

    fn write_int_field(&mut self, key: IntConfigKey, value: i32) {
        use IntConfigKey::*;

        let flag = value != 0;
        let t = &mut self.timidity_tuning;
        match key {
            AdlChipsCount => self.adl.chips_count = value,
            AdlEmulatorId => self.adl.emulator_id = value,
            AdlRunAtPcmRate => self.adl.run_at_pcm_rate = flag,
            AdlFullpan => self.adl.fullpan = flag,
            AdlBank => self.adl.bank = value,
            AdlVolumeModel => self.adl.volume_model = value,

            FluidReverb => self.fluid.reverb = flag,
            FluidChorus => self.fluid.chorus = flag,
            FluidVoices => self.fluid.voices = value,
            FluidInterp => self.fluid.interp = value,
            FluidSamplerate => self.fluid.samplerate = value,
            FluidThreads => self.fluid.threads = value,
            FluidChorusVoices => self.fluid.chorus_voices = value,
            FluidChorusType => self.fluid.chorus_type = value,

            OplNumchips => self.opl.numchips = value,
            OplCore => self.opl.core = value,
            OplFullpan => self.opl.fullpan = flag,

            OpnChipsCount => self.opn.chips_count = value,
            OpnEmulatorId => self.opn.emulator_id = value,
            OpnRunAtPcmRate => self.opn.run_at_pcm_rate = flag,
            OpnFullpan => self.opn.fullpan = flag,

            MidiVoices => self.gus.midi_voices = value,
            GusMemsize => self.gus.gus_memsize = value,

            TimidityModulationWheel => t.modulation_wheel = flag,
            TimidityPortamento => t.portamento = flag,
            TimidityReverb => t.reverb = value,
            TimidityReverbLevel => t.reverb_level = value,
            TimidityChorus => t.chorus = value,
            TimiditySurroundChorus => t.surround_chorus = flag,
            TimidityChannelPressure => t.channel_pressure = flag,
            TimidityLpfDef => t.lpf_def = value,
            TimidityTemperControl => t.temper_control = flag,
            TimidityModulationEnvelope => t.modulation_envelope = flag,
            TimidityOverlapVoiceAllow => t.overlap_voice_allow = flag,
            TimidityDrumEffect => t.drum_effect = flag,
            TimidityPanDelay => t.pan_delay = flag,
            TimidityKeyAdjust => t.key_adjust = value,

            WildmidiReverb => self.wildmidi.reverb = flag,
            WildmidiEnhancedResampling => self.wildmidi.enhanced_resampling = flag,

            SndMidiprecache => self.misc.snd_midiprecache = flag,

            ModSamplerate => self.dumb.mod_samplerate = value,
            ModVolramp => self.dumb.mod_volramp = value,
            ModInterp => self.dumb.mod_interp = value,
            ModAutochip => self.dumb.mod_autochip = flag,
            ModAutochipSizeForce => self.dumb.mod_autochip_size_force = value,
            ModAutochipSizeScan => self.dumb.mod_autochip_size_scan = value,
            ModAutochipScanThreshold => self.dumb.mod_autochip_scan_threshold = value,

            SndStreambuffersize => self.misc.snd_streambuffersize = value,

            AdlUseCustomBank | OpnUseCustomBank | MidiDmxgus => {}
        }
    }

    fn read_float_field(&self, key: FloatConfigKey) -> f32 {
        use FloatConfigKey::*;

        match key {
            FluidGain => self.fluid.gain,
            FluidReverbRoomsize => self.fluid.reverb_roomsize,
            FluidReverbDamping => self.fluid.reverb_damping,
            FluidReverbWidth => self.fluid.reverb_width,
            FluidReverbLevel => self.fluid.reverb_level,
            FluidChorusLevel => self.fluid.chorus_level,
            FluidChorusSpeed => self.fluid.chorus_speed,
            FluidChorusDepth => self.fluid.chorus_depth,
            TimidityDrumPower => self.timidity_tuning.drum_power,
            TimidityTempoAdjust => self.timidity_tuning.tempo_adjust,
            MinSustainTime => self.timidity_tuning.min_sustain_time,
            GmeStereodepth => self.misc.gme_stereodepth,
            ModDumbMastervolume => self.dumb.mod_dumb_mastervolume,
        }
    }

    fn write_float_field(&mut self, key: FloatConfigKey, value: f32) {
        use FloatConfigKey::*;

        let field = match key {
            FluidGain => &mut self.fluid.gain,
            FluidReverbRoomsize => &mut self.fluid.reverb_roomsize,
            FluidReverbDamping => &mut self.fluid.reverb_damping,
            FluidReverbWidth => &mut self.fluid.reverb_width,
            FluidReverbLevel => &mut self.fluid.reverb_level,
            FluidChorusLevel => &mut self.fluid.chorus_level,
            FluidChorusSpeed => &mut self.fluid.chorus_speed,
            FluidChorusDepth => &mut self.fluid.chorus_depth,
            TimidityDrumPower => &mut self.timidity_tuning.drum_power,
            TimidityTempoAdjust => &mut self.timidity_tuning.tempo_adjust,
            MinSustainTime => &mut self.timidity_tuning.min_sustain_time,
            GmeStereodepth => &mut self.misc.gme_stereodepth,
            ModDumbMastervolume => &mut self.dumb.mod_dumb_mastervolume,
        };
        *field = value;
    }

    fn read_string_field(&self, key: StringConfigKey) -> String {
        match key {
            StringConfigKey::AdlCustomBank => self.adl.custom_bank.clone(),
            StringConfigKey::FluidLib => self.fluid.lib.clone(),
            StringConfigKey::FluidPatchset => self.fluid.patchset.join(";"),
            StringConfigKey::OpnCustomBank => self.opn.custom_bank.clone(),
            StringConfigKey::MidiConfig => self.gus.reader_name.clone(),
            StringConfigKey::GusPatchdir => self.gus.gus_patchdir.clone(),
            StringConfigKey::TimidityConfig => self.timidity.reader_name.clone(),
            StringConfigKey::WildmidiConfig => self.wildmidi.reader_name.clone(),
        }
    }

    fn write_string_field(&mut self, key: StringConfigKey, value: &str) {
        match key {
            StringConfigKey::AdlCustomBank => self.adl.custom_bank = value.to_owned(),
            StringConfigKey::FluidLib => self.fluid.lib = value.to_owned(),
            StringConfigKey::FluidPatchset => self.fluid.patchset = split_patchset(value),
            StringConfigKey::OpnCustomBank => self.opn.custom_bank = value.to_owned(),
            StringConfigKey::MidiConfig => self.gus.reader_name = value.to_owned(),
            StringConfigKey::GusPatchdir => self.gus.gus_patchdir = value.to_owned(),
            StringConfigKey::TimidityConfig => self.timidity.reader_name = value.to_owned(),
            StringConfigKey::WildmidiConfig => self.wildmidi.reader_name = value.to_owned(),
        }
    }
}

impl<G, T, W> Default for ConfigStore<G, T, W> {
    fn default() -> Self {
        Self::new()
    }
}

fn expected_type(key: ConfigKey) -> &'static str {
    match key {
        ConfigKey::Int(_) => "int",
        ConfigKey::Float(_) => "float",
        ConfigKey::String(_) => "string",
    }
}

/// Int tunables a running device can't pick up on the fly.
fn int_needs_restart(key: IntConfigKey) -> bool {
    use IntConfigKey::*;

    !matches!(
        key,
        FluidReverb
            | FluidChorus
            | SndMidiprecache
            | SndStreambuffersize
            | ModSamplerate
            | ModVolramp
            | ModInterp
            | ModAutochip
            | ModAutochipSizeForce
            | ModAutochipSizeScan
            | ModAutochipScanThreshold
    )
}

fn float_needs_restart(key: FloatConfigKey) -> bool {
    use FloatConfigKey::*;

    matches!(key, TimidityDrumPower | TimidityTempoAdjust | MinSustainTime)
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use midiconf_core::{instruments::InstrumentSource, reader::MemoryReader};

    use super::*;

    type Store = ConfigStore<Vec<u8>, (), ()>;

    #[test]
    fn test_defaults_match_structs() {
        let store = Store::new();

        assert_eq!(store.int(IntConfigKey::AdlChipsCount), 6);
        assert_eq!(store.int(IntConfigKey::AdlBank), 14);
        assert_eq!(store.int(IntConfigKey::FluidVoices), 128);
        assert_eq!(store.int(IntConfigKey::OpnChipsCount), 8);
        assert_eq!(store.int(IntConfigKey::MidiVoices), 32);
        assert!(store.bool(IntConfigKey::WildmidiEnhancedResampling));
        assert!(!store.bool(IntConfigKey::AdlUseCustomBank));
        assert_eq!(store.int(IntConfigKey::SndStreambuffersize), 64);
        assert_eq!(store.float(FloatConfigKey::FluidGain), 0.5);
        assert_eq!(store.float(FloatConfigKey::FluidReverbRoomsize), 0.61);
        assert_eq!(store.float(FloatConfigKey::MinSustainTime), 5000.0);
        assert_eq!(store.string(StringConfigKey::FluidPatchset), "");

        assert_eq!(store.adl(), &AdlConfig::default());
        assert_eq!(store.fluid(), &FluidConfig::default());
        assert_eq!(store.dumb(), &DumbConfig::default());
    }

    #[test]
    fn test_set_int_updates_struct() {
        let mut store = Store::new();

        let change = store.set_int(IntConfigKey::OplNumchips, 12);
        assert_eq!(change.value, 8);
        assert_eq!(change.restart, Some(Backend::Opl));
        assert!(change.needs_restart(Backend::Opl));
        assert!(!change.needs_restart(Backend::Fluid));
        assert_eq!(store.opl().numchips, 8);
        assert_eq!(store.int(IntConfigKey::OplNumchips), 8);

        let change = store.set_int(IntConfigKey::OplNumchips, 8);
        assert_eq!(change.restart, None);

        let change = store.set_bool(IntConfigKey::AdlFullpan, false);
        assert!(!change.value);
        assert!(!store.adl().fullpan);

        store.set_int(IntConfigKey::TimidityKeyAdjust, -5);
        assert_eq!(store.timidity_tuning().key_adjust, -5);
    }

    #[test]
    fn test_live_settings_need_no_restart() {
        let mut store = Store::new();

        let change = store.set_bool(IntConfigKey::FluidReverb, true);
        assert_eq!(change.restart, None);
        assert!(store.fluid().reverb);

        let change = store
            .set_float(FloatConfigKey::FluidReverbRoomsize, 0.8)
            .unwrap();
        assert_eq!(change.restart, None);
        assert_eq!(store.fluid().reverb_roomsize, 0.8);

        let change = store.set_float(FloatConfigKey::TimidityTempoAdjust, 2.0).unwrap();
        assert_eq!(change.restart, Some(Backend::Timidity));
    }

    #[test]
    fn test_set_string() {
        let mut store = Store::new();

        let change = store.set_string(StringConfigKey::FluidPatchset, "gm.sf2;;drums.sf2");
        assert_eq!(change.value, "gm.sf2;drums.sf2");
        assert_eq!(change.restart, Some(Backend::Fluid));
        assert_eq!(store.fluid().patchset, vec!["gm.sf2", "drums.sf2"]);

        store.set_string(StringConfigKey::MidiConfig, "gus.cfg");
        assert_eq!(store.gus().reader_name, "gus.cfg");
        store.set_string(StringConfigKey::WildmidiConfig, "wildmidi.cfg");
        assert_eq!(store.wildmidi().reader_name, "wildmidi.cfg");
    }

    #[test]
    fn test_custom_banks() {
        let mut store = Store::new();
        store.set_string(StringConfigKey::AdlCustomBank, "banks/doom.wopl");
        assert_eq!(store.adl_custom_bank(), None);
        assert_eq!(store.adl().custom_bank, "banks/doom.wopl");

        store.set_bool(IntConfigKey::AdlUseCustomBank, true);
        assert_eq!(store.adl_custom_bank(), Some("banks/doom.wopl"));

        store.set_bool(IntConfigKey::OpnUseCustomBank, true);
        assert_eq!(store.opn_custom_bank(), None);
    }

    #[test]
    fn test_set_by_name() {
        let mut store = Store::new();

        let change = store.set_by_name("fluid_gain", 0.75f32).unwrap();
        assert_eq!(change.value, SettingValue::Float(0.75));

        let change = store.set_by_name("fluid_chorus_depth", 12).unwrap();
        assert_eq!(change.value, SettingValue::Float(12.0));

        store.set_by_name("midi_dmxgus", true).unwrap();
        assert!(store.use_dmxgus());

        assert!(matches!(
            store.set_by_name("fluid_voices", "many"),
            Err(ConfigError::TypeMismatch {
                key: "fluid_voices",
                expected: "int"
            })
        ));
        assert!(matches!(
            store.set_by_name("NUM_INT_CONFIGS", 1),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            store.set_by_name("fluid_gain", f32::NAN),
            Err(ConfigError::InvalidFloat { .. })
        ));
        assert_eq!(store.float(FloatConfigKey::FluidGain), 0.75);
    }

    #[test]
    fn test_snapshot_and_apply() {
        let mut store = Store::new();
        store.set_int(IntConfigKey::AdlChipsCount, 2);
        store.set_string(StringConfigKey::GusPatchdir, "/usr/share/gus");

        let snapshot = store.snapshot();
        assert_eq!(snapshot.ints.len(), NUM_INT_CONFIGS);
        assert_eq!(snapshot.floats.len(), NUM_FLOAT_CONFIGS);
        assert_eq!(snapshot.strings.len(), NUM_STRING_CONFIGS);

        let mut other = Store::new();
        let restarts = other.apply(&snapshot).unwrap();
        assert_eq!(restarts, vec![Backend::Adl, Backend::Gus]);
        assert_eq!(other.adl().chips_count, 2);
        assert_eq!(other.gus().gus_patchdir, "/usr/share/gus");
        assert_eq!(other.snapshot(), snapshot);
    }

    #[test]
    fn test_apply_skips_unknown() {
        let mut settings = Settings::empty();
        settings.ints.insert("not_a_key".to_owned(), 1);
        settings.ints.insert("fluid_gain".to_owned(), 2);
        settings.ints.insert("fluid_voices".to_owned(), 64);

        let store = Store::from_settings(&settings).unwrap();
        assert_eq!(store.fluid().voices, 64);
        assert_eq!(store.fluid().gain, 2.0);
    }

    #[test]
    fn test_cache_survives_settings_changes() {
        let mut store = Store::new();
        store.set_string(StringConfigKey::MidiConfig, "gus.cfg");

        let gus = store.gus_mut();
        gus.reader = Some(Arc::new(MemoryReader::new("gus.cfg", Vec::new())));
        let source = gus.requested_source().to_owned();
        let device = gus.cache_mut().store(source, vec![1, 2]);
        gus.reader = None;

        store.set_int(IntConfigKey::MidiVoices, 64);
        let reused = store.gus().reusable_instruments().unwrap();
        assert!(Arc::ptr_eq(&device, &reused));
    }
}
