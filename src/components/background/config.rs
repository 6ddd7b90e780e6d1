//! Tunable parameters for the background field.
//!
//! Defaults reproduce the stock look; a host page can override any subset by
//! embedding JSON (see [`FieldConfig::from_overrides`]). Missing keys keep
//! their defaults, including keys missing inside a nested section.

use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Half-open uniform range `[min, max)`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Span {
	pub min: f64,
	pub max: f64,
}

impl Span {
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Draw a uniform sample. Degenerate or inverted spans yield `min`.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
		if self.max > self.min {
			rng.gen_range(self.min..self.max)
		} else {
			self.min
		}
	}
}

/// Population and attribute ranges for one entity kind.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EntityConfig {
	/// Fixed population size
	pub count: usize,
	/// How far past each viewport edge an entity may travel before recycling
	pub margin: f64,
	pub radius: Span,
	/// Upward pixels per frame
	pub speed: Span,
	/// Horizontal pixels per frame
	pub drift: Span,
	pub opacity: Span,
	/// Wobble angular frequency in radians per millisecond (bubbles only)
	pub wobble: Span,
	/// Peak horizontal wobble in pixels per frame (bubbles only)
	pub wobble_amplitude: f64,
}

impl EntityConfig {
	pub fn particles() -> Self {
		Self {
			count: 50,
			margin: 50.0,
			radius: Span::new(1.0, 4.0),
			speed: Span::new(0.5, 1.5),
			drift: Span::new(-0.25, 0.25),
			opacity: Span::new(0.2, 0.7),
			wobble: Span::new(0.0, 0.0),
			wobble_amplitude: 0.0,
		}
	}

	pub fn bubbles() -> Self {
		Self {
			count: 15,
			margin: 100.0,
			radius: Span::new(10.0, 30.0),
			speed: Span::new(0.3, 1.1),
			drift: Span::new(-0.15, 0.15),
			opacity: Span::new(0.1, 0.4),
			wobble: Span::new(0.01, 0.03),
			wobble_amplitude: 0.5,
		}
	}
}

impl Default for EntityConfig {
	fn default() -> Self {
		Self::particles()
	}
}

/// Connection line parameters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConnectionConfig {
	/// Pairs at or beyond this distance are not connected
	pub distance: f64,
	/// Alpha of a line between two coincident particles
	pub base_alpha: f64,
	pub line_width: f64,
}

impl Default for ConnectionConfig {
	fn default() -> Self {
		Self {
			distance: 100.0,
			base_alpha: 0.2,
			line_width: 1.0,
		}
	}
}

/// Cursor trail parameters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrailConfig {
	pub enabled: bool,
	/// Probability that a single pointer move spawns a dot
	pub spawn_chance: f64,
	/// Per-axis velocity range in pixels per frame
	pub velocity: Span,
	/// Life lost per frame (life starts at 1.0)
	pub decay: Span,
}

impl Default for TrailConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			spawn_chance: 0.1,
			velocity: Span::new(-1.0, 1.0),
			decay: Span::new(0.01, 0.03),
		}
	}
}

/// Complete background configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
	pub particles: EntityConfig,
	pub bubbles: EntityConfig,
	pub connections: ConnectionConfig,
	pub trail: TrailConfig,
	/// Shadow blur applied to the particle glow core
	pub glow_blur: f64,
	/// Theme preset name, see [`super::theme::Theme::by_name`]
	pub theme: String,
}

impl FieldConfig {
	/// Apply a JSON object of overrides on top of the defaults.
	///
	/// Objects are merged key by key, so `{"bubbles": {"count": 4}}` keeps every
	/// other bubble default. Any other value replaces the default wholesale.
	pub fn from_overrides(json: &str) -> Result<Self, serde_json::Error> {
		let patch: Value = serde_json::from_str(json)?;
		let mut merged = serde_json::to_value(Self::default())?;
		merge(&mut merged, patch);
		serde_json::from_value(merged)
	}
}

fn merge(base: &mut Value, patch: Value) {
	match (base, patch) {
		(Value::Object(base), Value::Object(patch)) => {
			for (key, value) in patch {
				match base.get_mut(&key) {
					Some(slot) => merge(slot, value),
					None => {
						base.insert(key, value);
					}
				}
			}
		}
		(slot, value) => *slot = value,
	}
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			particles: EntityConfig::particles(),
			bubbles: EntityConfig::bubbles(),
			connections: ConnectionConfig::default(),
			trail: TrailConfig::default(),
			glow_blur: 10.0,
			theme: "tidewater".to_string(),
		}
	}
}
