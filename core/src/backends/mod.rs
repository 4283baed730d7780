//! Parameter bundles for each synthesizer backend.
//!
//! Every struct has a working baseline as its `Default`. Nothing here
//! validates values; a config manager or the backend itself does that.

use std::fmt;

mod adl;
pub use adl::*;

mod dumb;
pub use dumb::*;

mod fluid;
pub use fluid::*;

mod gus;
pub use gus::*;

mod misc;
pub use misc::*;

mod opl;
pub use opl::*;

mod opn;
pub use opn::*;

mod timidity;
pub use timidity::*;

mod wildmidi;
pub use wildmidi::*;

/// The synthesizer backend a tunable belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Backend {
    /// libADLMIDI-style OPL3 FM emulation with embedded banks
    Adl,

    /// FluidSynth-style SoundFont synthesis
    Fluid,

    /// OPL2/OPL3 emulation using a GENMIDI instrument lump
    Opl,

    /// OPN2 FM emulation
    Opn,

    /// Gravis Ultrasound style wavetable synthesis
    Gus,

    /// Timidity++ style softsynth
    Timidity,

    /// WildMidi softsynth
    WildMidi,

    /// Module/tracker playback
    Dumb,

    /// Global tunables not owned by a single backend
    Misc,
}

impl Backend {
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Adl => "adl",
            Backend::Fluid => "fluid",
            Backend::Opl => "opl",
            Backend::Opn => "opn",
            Backend::Gus => "gus",
            Backend::Timidity => "timidity",
            Backend::WildMidi => "wildmidi",
            Backend::Dumb => "dumb",
            Backend::Misc => "misc",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
