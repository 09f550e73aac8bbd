//! Host-side utilities built on the Park-Miller generator
//!
//! Colour value helpers, the turtle-walk squiggle generator, and the
//! sampling and file helpers used by the `squiggle` CLI.

pub mod colour;
pub mod config;
pub mod squiggle;

use pm_prng::ParkMiller;
use serde::{Deserialize, Serialize};
use std::fs;

pub use colour::{hsv_to_rgb, rgb_to_hsv, Colour, Hsv, Rgb};
pub use config::SquiggleSettings;
pub use squiggle::{render_svg, Squiggle, Stroke};

/// Which derived operation a sample run uses
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SampleKind {
    /// `next_int_range(min, max)`, or raw `next_int()` without bounds
    Int,
    /// `next_double_range(min, max)`, or `next_double()` without bounds
    Double,
    /// `next_boolean()`
    Bool,
}

impl Default for SampleKind {
    fn default() -> Self {
        SampleKind::Int
    }
}

impl std::str::FromStr for SampleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "int" => Ok(SampleKind::Int),
            "double" => Ok(SampleKind::Double),
            "bool" | "boolean" => Ok(SampleKind::Bool),
            _ => Err(format!("Invalid sample kind: '{}'. Must be 'int', 'double', or 'bool'", s)),
        }
    }
}

impl std::fmt::Display for SampleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleKind::Int => write!(f, "int"),
            SampleKind::Double => write!(f, "double"),
            SampleKind::Bool => write!(f, "bool"),
        }
    }
}

/// A single sampled value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Sample {
    Int(i64),
    Double(f64),
    Bool(bool),
}

impl std::fmt::Display for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sample::Int(v) => write!(f, "{}", v),
            Sample::Double(v) => write!(f, "{}", v),
            Sample::Bool(v) => write!(f, "{}", v),
        }
    }
}

/// Draw `count` samples of one kind from a fresh generator.
///
/// `bounds` selects the ranged variant for ints and doubles and is ignored
/// for booleans.
///
/// # Example
/// ```
/// use squiggle::{sample, Sample, SampleKind};
///
/// let values = sample(1, SampleKind::Int, None, 2).unwrap();
/// assert_eq!(values, vec![Sample::Int(16807), Sample::Int(282475249)]);
/// ```
pub fn sample(
    seed: u32,
    kind: SampleKind,
    bounds: Option<(f64, f64)>,
    count: usize,
) -> Result<Vec<Sample>, Box<dyn std::error::Error>> {
    tracing::info!("Sampling {} {} values from seed {} (bounds: {:?})", count, kind, seed, bounds);

    let mut rng = ParkMiller::new(seed)?;
    let values = (0..count)
        .map(|_| match (kind, bounds) {
            (SampleKind::Int, None) => Sample::Int(rng.next_int() as i64),
            (SampleKind::Int, Some((min, max))) => Sample::Int(rng.next_int_range(min as i64, max as i64)),
            (SampleKind::Double, None) => Sample::Double(rng.next_double()),
            (SampleKind::Double, Some((min, max))) => Sample::Double(rng.next_double_range(min, max)),
            (SampleKind::Bool, _) => Sample::Bool(rng.next_boolean()),
        })
        .collect();

    Ok(values)
}

/// A finished squiggle drawing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drawing {
    /// The seed the walk was generated from
    pub seed: u32,

    /// Canvas and walk parameters
    pub settings: SquiggleSettings,

    /// Strokes in drawing order
    pub strokes: Vec<Stroke>,

    /// Generator state after the last stroke; reseeding with it continues
    /// the same random sequence
    pub final_seed: u32,
}

/// Run a full squiggle walk from a seed.
///
/// The same seed and settings always produce the same drawing.
///
/// # Example
/// ```
/// use squiggle::{draw_squiggle, SquiggleSettings};
///
/// let drawing = draw_squiggle(2918957, SquiggleSettings::default()).unwrap();
/// assert_eq!(drawing.strokes.len(), 500);
/// ```
pub fn draw_squiggle(
    seed: u32,
    settings: SquiggleSettings,
) -> Result<Drawing, Box<dyn std::error::Error>> {
    settings.validate()?;
    tracing::info!(
        "Drawing squiggle for seed {} ({}x{}, {} steps)",
        seed,
        settings.width,
        settings.height,
        settings.steps
    );

    let rng = ParkMiller::new(seed)?;
    let mut squiggle = Squiggle::new(settings, rng);
    let strokes = squiggle.run(settings.steps);
    let final_seed = squiggle.rng().seed();

    tracing::info!("Squiggle drawn successfully ({} strokes)", strokes.len());

    Ok(Drawing {
        seed,
        settings,
        strokes,
        final_seed,
    })
}

/// Save a drawing as pretty JSON, or as SVG when `path` ends in `.svg`
pub fn save_drawing(drawing: &Drawing, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let contents = if path.to_lowercase().ends_with(".svg") {
        render_svg(&drawing.settings, &drawing.strokes)
    } else {
        serde_json::to_string_pretty(drawing)?
    };
    fs::write(path, contents)?;
    Ok(())
}

/// Load a drawing previously saved as JSON
pub fn load_drawing(path: &str) -> Result<Drawing, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)?;
    let drawing: Drawing = serde_json::from_str(&json)?;
    Ok(drawing)
}
