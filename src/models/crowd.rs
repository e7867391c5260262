//! Crowd forecast model for attractions

use serde::{Deserialize, Serialize};

/// Expected crowd level for one time slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyCrowd {
    /// Slot label, e.g. "6 AM"
    pub hour: String,

    /// Crowd level, 0-100
    pub level: u8,
}

impl HourlyCrowd {
    pub fn new(hour: impl Into<String>, level: u8) -> Self {
        Self {
            hour: hour.into(),
            level,
        }
    }
}

/// Crowd forecast for one attraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrowdForecast {
    pub attraction: String,

    /// Current crowd level, 0-100
    pub current_level: u8,

    #[serde(default)]
    pub wait_time: String,

    /// Hourly forecast in chronological order
    #[serde(default)]
    pub hourly: Vec<HourlyCrowd>,

    #[serde(default)]
    pub recommendation: String,
}

impl CrowdForecast {
    /// Least crowded slot, earliest on ties
    pub fn quietest_slot(&self) -> Option<&HourlyCrowd> {
        self.hourly
            .iter()
            .enumerate()
            .min_by_key(|(i, slot)| (slot.level, *i))
            .map(|(_, slot)| slot)
    }

    /// Most crowded slot, earliest on ties
    pub fn peak_slot(&self) -> Option<&HourlyCrowd> {
        self.hourly
            .iter()
            .enumerate()
            .max_by_key(|(i, slot)| (slot.level, std::cmp::Reverse(*i)))
            .map(|(_, slot)| slot)
    }
}
