use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Planets offered by the gravity picker, with their surface gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    /// Every planet in picker order.
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// Surface gravity in m/s².
    pub const fn gravity(self) -> f64 {
        match self {
            Planet::Mercury => 3.7,
            Planet::Venus => 8.87,
            Planet::Earth => 9.81,
            Planet::Mars => 3.711,
            Planet::Jupiter => 24.79,
            Planet::Saturn => 10.44,
            Planet::Uranus => 8.69,
            Planet::Neptune => 11.15,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Earth => "Earth",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
        }
    }

    /// Polish label shown by the original picker.
    pub const fn polish_name(self) -> &'static str {
        match self {
            Planet::Mercury => "Merkury",
            Planet::Venus => "Wenus",
            Planet::Earth => "Ziemia",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jowisz",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uran",
            Planet::Neptune => "Neptun",
        }
    }

    /// Finds the planet whose tabulated gravity equals `gravity` exactly.
    pub fn from_gravity(gravity: f64) -> Option<Planet> {
        Self::ALL.into_iter().find(|p| p.gravity() == gravity)
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known planet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown planet `{0}`")]
pub struct UnknownPlanet(pub String);

impl FromStr for Planet {
    type Err = UnknownPlanet;

    /// Accepts English or Polish names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| {
                p.name().eq_ignore_ascii_case(needle) || p.polish_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| UnknownPlanet(s.to_string()))
    }
}
