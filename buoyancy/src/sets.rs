use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum BuoyancySet {
    /// Re-partitions every buoyant mesh against the current water surface.
    Forces,
}
