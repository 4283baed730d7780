use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::prelude::*,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use crate::{ConfigError, ConfigStore};

const CONFIG_DIR: &str = "midiconf";

/// All tunables by key name, as stored in the settings file.
///
/// Names rather than ordinals are persisted, so files survive new keys being
/// appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ints: BTreeMap<String, i32>,
    pub floats: BTreeMap<String, f32>,
    pub strings: BTreeMap<String, String>,
}

impl Settings {
    /// A document without any entries. Applying it changes nothing.
    pub fn empty() -> Self {
        Self {
            ints: BTreeMap::new(),
            floats: BTreeMap::new(),
            strings: BTreeMap::new(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        ConfigStore::<(), (), ()>::new().snapshot()
    }
}

impl ConfigPath for Settings {
    fn filename() -> PathBuf {
        "settings.json".into()
    }
}

pub trait ConfigPath {
    fn filename() -> PathBuf;
}

/// A JSON document in the user's config directory.
pub struct ConfigFile<T>
where
    T: Default + Serialize + DeserializeOwned + ConfigPath,
{
    path: PathBuf,
    _config: PhantomData<T>,
}

impl<T> ConfigFile<T>
where
    T: Default + Serialize + DeserializeOwned + ConfigPath,
{
    pub fn default_path() -> PathBuf {
        match directories::BaseDirs::new() {
            Some(dirs) => {
                let mut path = dirs.config_dir().to_path_buf();
                path.push(CONFIG_DIR);
                path.push(T::filename());
                path
            }
            None => T::filename(),
        }
    }

    pub fn new() -> Self {
        Self::at(Self::default_path())
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _config: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_from_file(&self) -> Result<T, ConfigError> {
        let mut file = File::open(&self.path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self, config: &T) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string_pretty(config)?;
        let mut file = File::create(&self.path)?;
        file.write_all(contents.as_bytes())?;

        Ok(())
    }

    fn create_empty(&self) -> Result<(), ConfigError> {
        log::info!("Creating default settings at {}", self.path.display());
        self.save(&T::default())
    }

    /// Loads the file, writing the defaults first if it doesn't exist yet.
    pub fn load(&self) -> Result<T, ConfigError> {
        if !self.path.exists() {
            self.create_empty()?;
        }
        self.load_from_file()
    }
}

impl<T> Default for ConfigFile<T>
where
    T: Default + Serialize + DeserializeOwned + ConfigPath,
{
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigFile<Settings> {
    /// Rewrites the file with every key present and every value normalized.
    pub fn repair(&self) -> Result<(), ConfigError> {
        let store = ConfigStore::<(), (), ()>::from_settings(&self.load()?)?;
        log::info!("Repairing settings at {}", self.path.display());
        self.save(&store.snapshot())
    }

    /// Loads the file into a fresh store.
    pub fn load_store<G, T, W>(&self) -> Result<ConfigStore<G, T, W>, ConfigError> {
        ConfigStore::from_settings(&self.load()?)
    }
}

#[cfg(test)]
mod test {
    use midiconf_core::{
        keys::NUM_INT_CONFIGS, FloatConfigKey, FluidConfig, IntConfigKey, OplConfig,
        StringConfigKey, OPL_INSTRUMENT_BANK_SIZE,
    };

    use super::*;

    fn settings_file(dir: &tempfile::TempDir) -> ConfigFile<Settings> {
        ConfigFile::at(dir.path().join("midiconf").join("settings.json"))
    }

    #[test]
    fn test_default_document_lists_every_key() {
        let settings = Settings::default();
        assert_eq!(settings.ints.len(), NUM_INT_CONFIGS);
        assert_eq!(settings.ints["adl_bank"], 14);
        assert_eq!(settings.floats["fluid_reverb_level"], 0.57);
        assert_eq!(settings.strings["wildmidi_config"], "");
    }

    #[test]
    fn test_load_creates_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file = settings_file(&dir);
        assert!(!file.path().exists());

        let settings = file.load().unwrap();
        assert!(file.path().exists());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load_store() {
        let dir = tempfile::tempdir().unwrap();
        let file = settings_file(&dir);

        let mut store = ConfigStore::<(), (), ()>::new();
        store.set_int(IntConfigKey::FluidVoices, 512);
        store.set_float(FloatConfigKey::ModDumbMastervolume, 0.5).unwrap();
        store.set_string(StringConfigKey::TimidityConfig, "/etc/timidity.cfg");
        file.save(&store.snapshot()).unwrap();

        let loaded = file.load_store::<(), (), ()>().unwrap();
        assert_eq!(loaded.fluid().voices, 512);
        assert_eq!(loaded.dumb().mod_dumb_mastervolume, 0.5);
        assert_eq!(loaded.timidity().reader_name, "/etc/timidity.cfg");
    }

    #[test]
    fn test_repair() {
        let _ = env_logger::builder().is_test(true).try_init();

        let dir = tempfile::tempdir().unwrap();
        let file = settings_file(&dir);
        fs::create_dir_all(file.path().parent().unwrap()).unwrap();
        fs::write(
            file.path(),
            r#"{ "ints": { "opl_numchips": 40, "bogus": 1 }, "floats": { "fluid_gain": 0.25 } }"#,
        )
        .unwrap();

        file.repair().unwrap();

        let settings = file.load().unwrap();
        assert_eq!(settings.ints["opl_numchips"], 8);
        assert_eq!(settings.ints["adl_chips_count"], 6);
        assert_eq!(settings.floats["fluid_gain"], 0.25);
        assert!(!settings.ints.contains_key("bogus"));
    }

    #[test]
    fn test_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = settings_file(&dir);
        fs::create_dir_all(file.path().parent().unwrap()).unwrap();
        fs::write(file.path(), "not json").unwrap();

        assert!(matches!(file.load(), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_backend_configs_as_json() {
        let mut fluid = FluidConfig::default();
        fluid.patchset = vec!["gm.sf2".to_owned(), "drums.sf2".to_owned()];
        fluid.voices = 256;
        let json = serde_json::to_string(&fluid).unwrap();
        let loaded: FluidConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, fluid);

        let partial: FluidConfig = serde_json::from_str(r#"{ "gain": 0.25 }"#).unwrap();
        assert_eq!(partial.gain, 0.25);
        assert_eq!(partial.reverb_level, FluidConfig::default().reverb_level);

        let mut opl = OplConfig::default();
        opl.numchips = 4;
        opl.load_genmidi(&[7u8; OPL_INSTRUMENT_BANK_SIZE]).unwrap();
        let json = serde_json::to_string(&opl).unwrap();
        assert!(!json.contains("instruments"));

        let loaded: OplConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.numchips, 4);
        assert!(loaded.genmidiset);
        assert!(loaded.instruments.as_bytes().iter().all(|&b| b == 0));
    }
}
