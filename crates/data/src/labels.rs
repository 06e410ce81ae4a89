use strum::EnumCount as _;
use strum_macros::{Display, EnumCount, EnumIter};

/// Perception classes, in the column order of `Agent::label_probabilities`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum PerceptionLabel {
    NotSet,
    Unknown,
    DontCare,
    Car,
    Van,
    Tram,
    Bus,
    Truck,
    EmergencyVehicle,
    OtherVehicle,
    Bicycle,
    Motorcycle,
    Cyclist,
    Motorcyclist,
    Pedestrian,
    Animal,
    AvDontCare,
}

pub const NUM_PERCEPTION_LABELS: usize = PerceptionLabel::COUNT;

/// Classes an agent must be confidently labelled as to be kept for sampling.
pub const LABELS_TO_KEEP: [PerceptionLabel; 3] = [
    PerceptionLabel::Car,
    PerceptionLabel::Cyclist,
    PerceptionLabel::Pedestrian,
];

impl PerceptionLabel {
    pub fn index(&self) -> usize {
        *self as usize
    }
}
