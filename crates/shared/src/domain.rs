use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_AGE: u8 = 0;
pub const MAX_AGE: u8 = 18;

/// Gender option for portrait generation, serialized lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Boy,
    Girl,
    Child,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Boy, Gender::Girl, Gender::Child];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Boy => "Boy",
            Gender::Girl => "Girl",
            Gender::Child => "Child",
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            Gender::Boy => "boy",
            Gender::Girl => "girl",
            Gender::Child => "child",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

#[derive(Debug, Error)]
#[error("unknown gender '{0}', expected one of: boy, girl, child")]
pub struct ParseGenderError(String);

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "boy" => Ok(Gender::Boy),
            "girl" => Ok(Gender::Girl),
            "child" => Ok(Gender::Child),
            other => Err(ParseGenderError(other.to_string())),
        }
    }
}

/// Named point on the age slider; selecting one snaps age to its exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeStage {
    pub age: u8,
    pub label: &'static str,
}

pub const AGE_STAGES: [AgeStage; 6] = [
    AgeStage { age: 0, label: "Newborn" },
    AgeStage { age: 2, label: "Toddler" },
    AgeStage { age: 5, label: "Child" },
    AgeStage { age: 10, label: "Preteen" },
    AgeStage { age: 15, label: "Teen" },
    AgeStage { age: 18, label: "Young Adult" },
];

pub fn clamp_age(age: i32) -> u8 {
    age.clamp(MIN_AGE as i32, MAX_AGE as i32) as u8
}
