//! Visual theming for the ambient background.
//!
//! Every colour the renderer touches lives here so presets can restyle the
//! field without touching the drawing code.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Always emits `rgba(...)`; the canvas accepts it for every alpha.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// A gradient colour stop, `offset` in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
	pub offset: f64,
	pub color: Color,
}

impl ColorStop {
	pub const fn new(offset: f64, color: Color) -> Self {
		Self { offset, color }
	}
}

/// Backdrop composited every frame instead of a hard clear.
#[derive(Clone, Debug)]
pub struct BackdropStyle {
	/// Top-to-bottom stops. Low alpha leaves fading trails behind moving entities.
	pub stops: Vec<ColorStop>,
}

/// Particle fill and glow.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Radial stops from centre to rim
	pub stops: Vec<ColorStop>,
	/// Shadow colour of the inner glow core
	pub glow_color: Color,
}

/// Bubble outline and specular highlight.
#[derive(Clone, Debug)]
pub struct BubbleStyle {
	pub outline: Color,
	pub outline_width: f64,
	/// Radial stops of the offset highlight
	pub highlight_stops: Vec<ColorStop>,
}

/// Connection line colour.
#[derive(Clone, Debug)]
pub struct ConnectionStyle {
	pub color: Color,
}

/// Cursor trail dot colour. Alpha is taken from each dot's remaining life.
#[derive(Clone, Debug)]
pub struct TrailStyle {
	pub color: Color,
	pub radius: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub backdrop: BackdropStyle,
	pub particle: ParticleStyle,
	pub bubble: BubbleStyle,
	pub connection: ConnectionStyle,
	pub trail: TrailStyle,
}

impl Theme {
	/// Cyan/teal glow on a near-black navy backdrop (default)
	pub fn tidewater() -> Self {
		Self {
			name: "tidewater",
			backdrop: BackdropStyle {
				stops: vec![
					ColorStop::new(0.0, Color::rgba(10, 10, 10, 0.1)),
					ColorStop::new(0.5, Color::rgba(26, 26, 46, 0.1)),
					ColorStop::new(1.0, Color::rgba(22, 33, 62, 0.1)),
				],
			},
			particle: ParticleStyle {
				stops: vec![
					ColorStop::new(0.0, Color::rgba(0, 255, 255, 0.8)),
					ColorStop::new(0.5, Color::rgba(0, 255, 136, 0.4)),
					ColorStop::new(1.0, Color::rgba(0, 136, 255, 0.1)),
				],
				glow_color: Color::rgba(0, 255, 255, 0.5),
			},
			bubble: BubbleStyle {
				outline: Color::rgba(0, 255, 255, 0.6),
				outline_width: 1.0,
				highlight_stops: vec![
					ColorStop::new(0.0, Color::rgba(255, 255, 255, 0.4)),
					ColorStop::new(1.0, Color::rgba(255, 255, 255, 0.0)),
				],
			},
			connection: ConnectionStyle {
				color: Color::rgba(0, 255, 255, 0.1),
			},
			trail: TrailStyle {
				color: Color::rgb(0, 255, 255),
				radius: 1.5,
			},
		}
	}

	/// Warm amber sparks over a charcoal backdrop
	pub fn ember() -> Self {
		Self {
			name: "ember",
			backdrop: BackdropStyle {
				stops: vec![
					ColorStop::new(0.0, Color::rgba(18, 12, 10, 0.1)),
					ColorStop::new(0.5, Color::rgba(36, 24, 20, 0.1)),
					ColorStop::new(1.0, Color::rgba(48, 26, 18, 0.1)),
				],
			},
			particle: ParticleStyle {
				stops: vec![
					ColorStop::new(0.0, Color::rgba(255, 200, 120, 0.8)),
					ColorStop::new(0.5, Color::rgba(255, 140, 60, 0.4)),
					ColorStop::new(1.0, Color::rgba(200, 60, 30, 0.1)),
				],
				glow_color: Color::rgba(255, 160, 80, 0.5),
			},
			bubble: BubbleStyle {
				outline: Color::rgba(255, 170, 90, 0.5),
				outline_width: 1.0,
				highlight_stops: vec![
					ColorStop::new(0.0, Color::rgba(255, 240, 220, 0.35)),
					ColorStop::new(1.0, Color::rgba(255, 240, 220, 0.0)),
				],
			},
			connection: ConnectionStyle {
				color: Color::rgba(255, 170, 90, 0.1),
			},
			trail: TrailStyle {
				color: Color::rgb(255, 180, 100),
				radius: 1.5,
			},
		}
	}

	/// Muted violet variant for darker pages
	pub fn midnight() -> Self {
		Self {
			name: "midnight",
			backdrop: BackdropStyle {
				stops: vec![
					ColorStop::new(0.0, Color::rgba(8, 8, 14, 0.1)),
					ColorStop::new(0.5, Color::rgba(18, 20, 36, 0.1)),
					ColorStop::new(1.0, Color::rgba(26, 22, 48, 0.1)),
				],
			},
			particle: ParticleStyle {
				stops: vec![
					ColorStop::new(0.0, Color::rgba(190, 170, 255, 0.8)),
					ColorStop::new(0.5, Color::rgba(130, 120, 230, 0.4)),
					ColorStop::new(1.0, Color::rgba(80, 90, 200, 0.1)),
				],
				glow_color: Color::rgba(170, 150, 255, 0.5),
			},
			bubble: BubbleStyle {
				outline: Color::rgba(160, 150, 255, 0.5),
				outline_width: 1.0,
				highlight_stops: vec![
					ColorStop::new(0.0, Color::rgba(255, 255, 255, 0.3)),
					ColorStop::new(1.0, Color::rgba(255, 255, 255, 0.0)),
				],
			},
			connection: ConnectionStyle {
				color: Color::rgba(160, 150, 255, 0.1),
			},
			trail: TrailStyle {
				color: Color::rgb(190, 170, 255),
				radius: 1.5,
			},
		}
	}

	/// Look up a preset by name, falling back to the default theme.
	pub fn by_name(name: &str) -> Self {
		match name {
			"ember" => Self::ember(),
			"midnight" => Self::midnight(),
			_ => Self::tidewater(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::tidewater()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_uses_rgba_notation() {
		assert_eq!(Color::rgba(0, 255, 255, 0.1).to_css(), "rgba(0, 255, 255, 0.1)");
		assert_eq!(Color::rgb(1, 2, 3).to_css(), "rgba(1, 2, 3, 1)");
	}

	#[test]
	fn unknown_theme_name_falls_back_to_default() {
		assert_eq!(Theme::by_name("ember").name, "ember");
		assert_eq!(Theme::by_name("midnight").name, "midnight");
		assert_eq!(Theme::by_name("no-such-theme").name, "tidewater");
	}

	#[test]
	fn backdrop_stops_are_translucent() {
		for theme in [Theme::tidewater(), Theme::ember(), Theme::midnight()] {
			assert!(theme.backdrop.stops.iter().all(|s| s.color.a < 0.5));
		}
	}
}
