//! Turtle-walk "squiggle" generator
//!
//! A pen (the turtle) wanders around the canvas. Each step nudges its alpha,
//! thickness and colour, turns it by a random angle and moves it a random
//! distance, producing one stroke. When it leaves the margin box it is
//! pointed back at the centre.
//!
//! Every random draw comes from the generator owned by the [`Squiggle`], so a
//! seed fully determines the drawing.

use pm_prng::{ParkMiller, SeedError};
use serde::{Deserialize, Serialize};

use crate::colour::Colour;
use crate::config::SquiggleSettings;

const MIN_ALPHA: f64 = 5.0;
const MAX_ALPHA: f64 = 100.0;
const MIN_THICKNESS: f64 = 1.0;
const MAX_THICKNESS: f64 = 5.0;

/// One line segment of the drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub from: (f64, f64),
    pub to: (f64, f64),
    /// Line width in pixels, [1, 5]
    pub width: f64,
    /// `#RRGGBB`
    pub colour: String,
    /// Opacity percentage, [5, 100]
    pub alpha: f64,
}

/// Pen state
#[derive(Debug, Clone)]
struct Turtle {
    x: f64,
    y: f64,
    /// Heading in degrees
    theta: f64,
    radius: f64,
    colour: Colour,
    alpha: f64,
    thickness: f64,
}

/// Seeded squiggle generator
pub struct Squiggle {
    settings: SquiggleSettings,
    rng: ParkMiller,
    turtle: Turtle,
    colour_rate: f64,
    theta_range: f64,
    randomize_theta_range: bool,
}

impl Squiggle {
    /// Create a generator and draw its starting parameters from `rng`
    pub fn new(settings: SquiggleSettings, rng: ParkMiller) -> Self {
        let mut squiggle = Self {
            settings,
            rng,
            turtle: Turtle {
                x: 0.0,
                y: 0.0,
                theta: 0.0,
                radius: 1.0,
                colour: Colour::default(),
                alpha: 0.0,
                thickness: 0.0,
            },
            colour_rate: 0.0,
            theta_range: 0.0,
            randomize_theta_range: false,
        };
        squiggle.reset();
        squiggle
    }

    /// Restart the drawing, optionally reseeding the generator first
    pub fn generate(&mut self, seed: Option<u32>) -> Result<(), SeedError> {
        if let Some(seed) = seed {
            self.rng.set_seed(seed)?;
        }
        self.reset();
        Ok(())
    }

    fn reset(&mut self) {
        self.turtle = Turtle {
            x: self.settings.width / 2.0,
            y: self.settings.height / 2.0,
            theta: 0.0,
            radius: 1.0,
            colour: Colour::from_packed(self.rng.next_int()),
            alpha: 50.0,
            thickness: 1.0,
        };
        self.colour_rate = self.rng.next_double_range(0.0, 10.0);

        // How fast the turtle turns
        self.theta_range = self.rng.next_int_range(0, 180) as f64;
        self.randomize_theta_range = self.rng.next_boolean();

        tracing::debug!(
            "Squiggle reset: colour={}, colour_rate={:.3}, theta_range={}, randomize_theta_range={}",
            self.turtle.colour,
            self.colour_rate,
            self.theta_range,
            self.randomize_theta_range
        );
    }

    /// Current position of the pen
    pub fn position(&self) -> (f64, f64) {
        (self.turtle.x, self.turtle.y)
    }

    /// Generator state, for resuming a walk elsewhere
    pub fn rng(&self) -> &ParkMiller {
        &self.rng
    }

    /// Advance the walk by one stroke
    pub fn step(&mut self) -> Stroke {
        let rng = &mut self.rng;
        let turtle = &mut self.turtle;
        let from = (turtle.x, turtle.y);

        turtle.alpha = (turtle.alpha + rng.next_double_range(-10.0, 7.0)).clamp(MIN_ALPHA, MAX_ALPHA);
        turtle.thickness =
            (turtle.thickness + rng.next_double_range(-1.0, 1.0)).clamp(MIN_THICKNESS, MAX_THICKNESS);

        let rate = self.colour_rate;
        let r = turtle.colour.r + rng.next_double_range(-rate, rate);
        let g = turtle.colour.g + rng.next_double_range(-rate, rate);
        let b = turtle.colour.b + rng.next_double_range(-rate, rate);
        turtle.colour = Colour::from_rgb(r, g, b).with_alpha(turtle.alpha);

        let theta_range = if self.randomize_theta_range {
            rng.next_double_range(0.0, 180.0)
        } else {
            self.theta_range
        };
        turtle.radius = rng.next_int_range(1, 10) as f64;
        // Same rounding as next_int_range, but the range may be fractional
        turtle.theta += rng.next_double_range(-theta_range, theta_range).round();

        let (dx, dy) = polar_to_cartesian(turtle.radius, turtle.theta);
        turtle.x += dx;
        turtle.y += dy;

        let stroke = Stroke {
            from,
            to: (turtle.x, turtle.y),
            width: turtle.thickness,
            colour: turtle.colour.to_string(),
            alpha: turtle.alpha,
        };

        let SquiggleSettings { width, height, margin, .. } = self.settings;
        if turtle.x > width - margin || turtle.x < margin || turtle.y > height - margin || turtle.y < margin {
            let (_, theta) = cartesian_to_polar(width / 2.0 - turtle.x, height / 2.0 - turtle.y);
            turtle.theta = theta;
        }

        stroke
    }

    /// Draw `steps` strokes
    pub fn run(&mut self, steps: usize) -> Vec<Stroke> {
        (0..steps).map(|_| self.step()).collect()
    }
}

/// (r, theta in degrees) -> (x, y)
fn polar_to_cartesian(r: f64, theta: f64) -> (f64, f64) {
    let radians = theta.to_radians();
    (r * radians.cos(), r * radians.sin())
}

/// (x, y) -> (r, theta in degrees)
fn cartesian_to_polar(x: f64, y: f64) -> (f64, f64) {
    (x.hypot(y), y.atan2(x).to_degrees())
}

/// Render strokes as a standalone SVG document on a white background
pub fn render_svg(settings: &SquiggleSettings, strokes: &[Stroke]) -> String {
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = settings.width,
        h = settings.height
    );
    svg.push_str("  <rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n");

    for stroke in strokes {
        svg.push_str(&format!(
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{:.2}\" stroke-opacity=\"{:.2}\" stroke-linecap=\"round\"/>\n",
            stroke.from.0,
            stroke.from.1,
            stroke.to.0,
            stroke.to.1,
            stroke.colour,
            stroke.width,
            stroke.alpha / 100.0
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squiggle(seed: u32) -> Squiggle {
        Squiggle::new(SquiggleSettings::default(), ParkMiller::new(seed).unwrap())
    }

    #[test]
    fn test_starts_at_centre() {
        let s = squiggle(1);
        assert_eq!(s.position(), (400.0, 300.0));
        assert_eq!(s.turtle.alpha, 50.0);
        assert_eq!(s.turtle.thickness, 1.0);
    }

    #[test]
    fn test_reset_draws_from_generator() {
        // Four draws: colour, colour rate, theta range, randomize flag
        let s = squiggle(1);
        let mut rng = ParkMiller::new(1).unwrap();
        assert_eq!(s.turtle.colour, Colour::from_packed(rng.next_int()));
        assert_eq!(s.colour_rate, rng.next_double_range(0.0, 10.0));
        assert_eq!(s.theta_range, rng.next_int_range(0, 180) as f64);
        assert_eq!(s.randomize_theta_range, rng.next_boolean());
        assert_eq!(s.rng(), &rng);
    }

    #[test]
    fn test_stroke_bounds() {
        let mut s = squiggle(2918957);
        for stroke in s.run(2000) {
            assert!((MIN_ALPHA..=MAX_ALPHA).contains(&stroke.alpha), "alpha {}", stroke.alpha);
            assert!(
                (MIN_THICKNESS..=MAX_THICKNESS).contains(&stroke.width),
                "width {}",
                stroke.width
            );
            assert_eq!(stroke.colour.len(), 7);
            assert!(stroke.colour.starts_with('#'));

            // Each stroke is exactly `radius` long, an integer in 1..=10
            let len = (stroke.to.0 - stroke.from.0).hypot(stroke.to.1 - stroke.from.1);
            assert!((len - len.round()).abs() < 1e-6, "length {}", len);
            assert!((1.0..=10.0).contains(&len.round()), "length {}", len);
        }
    }

    #[test]
    fn test_strokes_are_contiguous() {
        let mut s = squiggle(77);
        let strokes = s.run(100);
        for pair in strokes.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
        assert_eq!(strokes.last().unwrap().to, s.position());
    }

    #[test]
    fn test_out_of_bounds_turns_to_centre() {
        let mut s = squiggle(5);
        s.turtle.x = 0.0;
        s.turtle.y = 0.0;
        s.step();

        // At most 10px from the corner, so still outside the 50px margin
        let (x, y) = s.position();
        assert!(x < 50.0 && y < 50.0);
        let expected = (300.0 - y).atan2(400.0 - x).to_degrees();
        assert!((s.turtle.theta - expected).abs() < 1e-9);
    }

    #[test]
    fn test_generate_reseeds() {
        let mut a = squiggle(123);
        let first = a.run(50);

        let mut b = squiggle(999);
        b.run(10);
        b.generate(Some(123)).unwrap();
        assert_eq!(b.run(50), first);

        assert_eq!(b.generate(Some(0)), Err(SeedError::Zero));
    }

    #[test]
    fn test_polar_conversions() {
        let (x, y) = polar_to_cartesian(2.0, 90.0);
        assert!(x.abs() < 1e-12);
        assert!((y - 2.0).abs() < 1e-12);

        let (r, theta) = cartesian_to_polar(-3.0, 0.0);
        assert_eq!(r, 3.0);
        assert!((theta - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_render_svg() {
        let settings = SquiggleSettings {
            width: 200.0,
            height: 150.0,
            ..SquiggleSettings::default()
        };
        let strokes = vec![Stroke {
            from: (1.0, 2.0),
            to: (3.5, 4.25),
            width: 2.0,
            colour: "#FF8000".to_string(),
            alpha: 50.0,
        }];

        let svg = render_svg(&settings, &strokes);
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"200\" height=\"150\""));
        assert!(svg.contains(
            "<line x1=\"1.00\" y1=\"2.00\" x2=\"3.50\" y2=\"4.25\" stroke=\"#FF8000\" stroke-width=\"2.00\" stroke-opacity=\"0.50\""
        ));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
