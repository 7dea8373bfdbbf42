//! Named initial configurations
//!
//! Every generator returns three bodies with fresh ids, radii derived from
//! their masses, and empty trails. Generators never touch core state.

use crate::physics::body::Body;
use crate::physics::math::{Scalar, Vector};
use crate::resources::SharedRng;
use bevy::color::Color;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display tags given to the first, second, and third preset body
pub fn preset_colors() -> [Color; 3] {
    [
        Color::srgb_u8(0xff, 0x6b, 0x6b),
        Color::srgb_u8(0x4e, 0xcd, 0xc4),
        Color::srgb_u8(0x45, 0xb7, 0xd1),
    ]
}

#[derive(Serialize, Deserialize, clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Equal masses on the periodic figure-eight orbit
    #[value(name = "figure8")]
    Figure8,
    /// Equal masses at the corners of an equilateral triangle
    Triangle,
    /// Three bodies with uniformly sampled state
    Random,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Figure8, Preset::Triangle, Preset::Random];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Figure8 => "figure8",
            Preset::Triangle => "triangle",
            Preset::Random => "random",
        }
    }

    /// Generate this preset's bodies; only [`Preset::Random`] draws from `rng`
    pub fn bodies(self, rng: &mut SharedRng) -> Vec<Body> {
        match self {
            Preset::Figure8 => figure8(),
            Preset::Triangle => triangle(),
            Preset::Random => random(rng),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPreset(pub String);

impl fmt::Display for UnknownPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown preset: {}", self.0)
    }
}

impl std::error::Error for UnknownPreset {}

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

fn unit_mass_bodies(states: [([Scalar; 3], [Scalar; 3]); 3]) -> Vec<Body> {
    states
        .into_iter()
        .zip(preset_colors())
        .map(|((position, velocity), color)| {
            Body::from_valid_parts(
                Vector::from_array(position),
                Vector::from_array(velocity),
                1.0,
                color,
            )
        })
        .collect()
}

/// Three unit masses on the figure-eight periodic solution
pub fn figure8() -> Vec<Body> {
    unit_mass_bodies([
        ([-1.0, 0.0, 0.0], [0.347, 0.532, 0.0]),
        ([1.0, 0.0, 0.0], [0.347, 0.532, 0.0]),
        ([0.0, 0.0, 0.0], [-0.694, -1.064, 0.0]),
    ])
}

/// Three unit masses on a triangle of circumradius 2, velocities rotated
/// with the vertices
pub fn triangle() -> Vec<Body> {
    unit_mass_bodies([
        ([2.0, 0.0, 0.0], [0.0, 0.5, 0.0]),
        ([-1.0, 1.732, 0.0], [-0.433, -0.25, 0.0]),
        ([-1.0, -1.732, 0.0], [0.433, -0.25, 0.0]),
    ])
}

/// Three bodies with positions in `[-2, 2) x [-2, 2) x [-1, 1)`, velocities
/// in `[-1, 1) x [-1, 1) x [-0.5, 0.5)`, and masses in `[0.5, 2.5)`
pub fn random(rng: &mut SharedRng) -> Vec<Body> {
    preset_colors()
        .into_iter()
        .map(|color| {
            let position = Vector::new(
                rng.random_range(-2.0..2.0),
                rng.random_range(-2.0..2.0),
                rng.random_range(-1.0..1.0),
            );
            let velocity = Vector::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-0.5..0.5),
            );
            let mass = rng.random_range(0.5..2.5);
            Body::from_valid_parts(position, velocity, mass, color)
        })
        .collect()
}
