//! Message shapes sent to the plate synth: discrete `/hit` events and
//! continuous `/state` snapshots.

use std::fmt;

use rosc::{OscMessage, OscType};

pub const HIT_ADDR: &str = "/hit";
pub const STATE_ADDR: &str = "/state";

/// Zone of the plate a hit is attributed to. The discriminant is the wire value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    Left = 0,
    Right = 1,
    Top = 2,
    Bottom = 3,
}

impl Surface {
    pub const ALL: [Surface; 4] = [Surface::Left, Surface::Right, Surface::Top, Surface::Bottom];

    /// Cycles through `ALL`, so any index maps to a surface.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for Surface {
    // Reports print the numeric code, same as the receiver sees it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A discrete interaction: position on the plate, strike energy and surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitEvent {
    pub particle_id: i32,
    pub x: f32,
    pub y: f32,
    pub energy: f32,
    pub surface: Surface,
}

impl HitEvent {
    /// `/hit [int32 id, float32 x, float32 y, float32 energy, int32 surface]`
    pub fn to_osc(&self) -> OscMessage {
        OscMessage {
            addr: HIT_ADDR.to_string(),
            args: vec![
                OscType::Int(self.particle_id),
                OscType::Float(self.x),
                OscType::Float(self.y),
                OscType::Float(self.energy),
                OscType::Int(self.surface.code()),
            ],
        }
    }
}

/// Aggregate activity snapshot, sent independently of hits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateEvent {
    pub activity: f32,
    pub gesture: f32,
    pub presence: f32,
}

impl StateEvent {
    pub fn to_osc(&self) -> OscMessage {
        OscMessage {
            addr: STATE_ADDR.to_string(),
            args: vec![
                OscType::Float(self.activity),
                OscType::Float(self.gesture),
                OscType::Float(self.presence),
            ],
        }
    }
}
