use std::fmt;

use thiserror::Error;

/// Size in bytes of one GENMIDI instrument record.
pub const GENMIDI_INSTRUMENT_SIZE: usize = 36;

/// Number of instruments in a GENMIDI lump (128 melodic + 47 percussion).
pub const GENMIDI_NUM_TOTAL: usize = 175;

pub const OPL_INSTRUMENT_BANK_SIZE: usize = GENMIDI_INSTRUMENT_SIZE * GENMIDI_NUM_TOTAL;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OplBankError {
    #[error("Instrument bank must be {expected} bytes, got {actual}")]
    InvalidSize { expected: usize, actual: usize },
}

/// Raw GENMIDI instrument records.
///
/// The record layout belongs to the OPL renderer; this type only reserves the
/// storage and never looks inside it.
#[derive(Clone, PartialEq, Eq)]
pub struct OplInstrumentBank(Box<[u8; OPL_INSTRUMENT_BANK_SIZE]>);

impl OplInstrumentBank {
    pub fn as_bytes(&self) -> &[u8; OPL_INSTRUMENT_BANK_SIZE] {
        &self.0
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8; OPL_INSTRUMENT_BANK_SIZE] {
        &mut self.0
    }

    /// Overwrites the whole bank. `data` must be exactly one bank long.
    pub fn copy_from_slice(&mut self, data: &[u8]) -> Result<(), OplBankError> {
        if data.len() != OPL_INSTRUMENT_BANK_SIZE {
            return Err(OplBankError::InvalidSize {
                expected: OPL_INSTRUMENT_BANK_SIZE,
                actual: data.len(),
            });
        }
        self.0.copy_from_slice(data);
        Ok(())
    }
}

impl Default for OplInstrumentBank {
    fn default() -> Self {
        Self(Box::new([0; OPL_INSTRUMENT_BANK_SIZE]))
    }
}

impl TryFrom<&[u8]> for OplInstrumentBank {
    type Error = OplBankError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        let mut bank = Self::default();
        bank.copy_from_slice(data)?;
        Ok(bank)
    }
}

impl fmt::Debug for OplInstrumentBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OplInstrumentBank")
            .field("len", &self.0.len())
            .finish()
    }
}

/// Options for the OPL emulation backend.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OplConfig {
    /// Default: `2`
    pub numchips: i32,

    /// Index of the emulator core.
    ///
    /// Default: `0`
    pub core: i32,

    /// Default: `true`
    pub fullpan: bool,

    /// Set once `instruments` holds a loaded GENMIDI set.
    ///
    /// Default: `false`
    pub genmidiset: bool,

    #[cfg_attr(feature = "serde", serde(skip))]
    pub instruments: OplInstrumentBank,
}

impl OplConfig {
    /// Copies a GENMIDI instrument set into the config and marks it loaded.
    pub fn load_genmidi(&mut self, data: &[u8]) -> Result<(), OplBankError> {
        self.instruments.copy_from_slice(data)?;
        self.genmidiset = true;
        Ok(())
    }
}

impl Default for OplConfig {
    fn default() -> Self {
        Self {
            numchips: 2,
            core: 0,
            fullpan: true,
            genmidiset: false,
            instruments: OplInstrumentBank::default(),
        }
    }
}
