//! Dynamic markings attached to a staff

use serde::{Deserialize, Serialize};

/// Volume level; serialized as its MIDI velocity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
#[repr(u8)]
pub enum VolumeLevel {
    Off = 0,
    Ppp = 16,
    Pp = 32,
    P = 48,
    Mp = 64,
    Mf = 80,
    #[default]
    F = 96,
    Ff = 112,
    Fff = 127,
}

impl VolumeLevel {
    pub fn text(&self) -> &'static str {
        match self {
            VolumeLevel::Off => "off",
            VolumeLevel::Ppp => "ppp",
            VolumeLevel::Pp => "pp",
            VolumeLevel::P => "p",
            VolumeLevel::Mp => "mp",
            VolumeLevel::Mf => "mf",
            VolumeLevel::F => "f",
            VolumeLevel::Ff => "ff",
            VolumeLevel::Fff => "fff",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Dynamic {
    pub position: i32,
    pub volume: VolumeLevel,
}

impl Dynamic {
    pub fn new(position: i32, volume: VolumeLevel) -> Self {
        Self { position, volume }
    }
}
