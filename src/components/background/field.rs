//! The particle/bubble field simulation.
//!
//! Owns a fixed population of particles and bubbles plus the RNG used to
//! recycle them. The population is exposed only as slices, so its size cannot
//! change after construction.

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::config::FieldConfig;
use super::connections::{self, Connection};
use super::entity::{Bubble, Particle};

/// Fixed-population field of drifting entities over a `width` x `height` surface.
pub struct AmbientField {
	particles: Vec<Particle>,
	bubbles: Vec<Bubble>,
	config: FieldConfig,
	rng: StdRng,
	width: f64,
	height: f64,
}

impl AmbientField {
	/// Populate the field with entropy from the host.
	pub fn new(config: FieldConfig, width: f64, height: f64) -> Self {
		Self::from_rng(config, width, height, StdRng::from_entropy())
	}

	/// Populate the field deterministically.
	pub fn with_seed(config: FieldConfig, width: f64, height: f64, seed: u64) -> Self {
		Self::from_rng(config, width, height, StdRng::seed_from_u64(seed))
	}

	fn from_rng(config: FieldConfig, width: f64, height: f64, mut rng: StdRng) -> Self {
		let particles = (0..config.particles.count)
			.map(|_| Particle::scattered(&mut rng, &config.particles, width, height))
			.collect();
		let bubbles = (0..config.bubbles.count)
			.map(|_| Bubble::scattered(&mut rng, &config.bubbles, width, height))
			.collect();

		Self {
			particles,
			bubbles,
			config,
			rng,
			width,
			height,
		}
	}

	/// Advance every entity by one frame. `now_ms` is wall-clock time and only
	/// drives the bubble wobble phase.
	pub fn advance(&mut self, now_ms: f64) {
		let (w, h) = (self.width, self.height);

		for p in &mut self.particles {
			p.advance(&mut self.rng, &self.config.particles, w, h);
		}
		for b in &mut self.bubbles {
			b.advance(&mut self.rng, &self.config.bubbles, w, h, now_ms);
		}
	}

	/// Track new surface dimensions. Entities keep their positions; any that
	/// end up outside the new bounds are recycled on their next advance.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Lines between particle pairs closer than the connection distance.
	pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
		connections::connections(&self.particles, &self.config.connections)
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	#[cfg(test)]
	pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	pub fn bubbles(&self) -> &[Bubble] {
		&self.bubbles
	}

	#[cfg(test)]
	pub(crate) fn bubbles_mut(&mut self) -> &mut [Bubble] {
		&mut self.bubbles
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn field(seed: u64) -> AmbientField {
		AmbientField::with_seed(FieldConfig::default(), 800.0, 600.0, seed)
	}

	fn assert_in_bounds(field: &AmbientField) {
		let (w, h) = (field.width(), field.height());
		let pm = field.config().particles.margin;
		for p in field.particles() {
			assert!((-pm..=w + pm).contains(&p.x), "particle x {}", p.x);
			assert!((-pm..=h + pm).contains(&p.y), "particle y {}", p.y);
		}
		let bm = field.config().bubbles.margin;
		for b in field.bubbles() {
			assert!((-bm..=w + bm).contains(&b.x), "bubble x {}", b.x);
			assert!((-bm..=h + bm).contains(&b.y), "bubble y {}", b.y);
		}
	}

	#[test]
	fn initial_population_covers_the_surface() {
		let field = field(1);
		assert_eq!(field.particles().len(), 50);
		assert_eq!(field.bubbles().len(), 15);
		for p in field.particles() {
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
		}
	}

	#[test]
	fn population_and_bounds_hold_across_many_frames() {
		let mut field = field(2);
		for frame in 0..5000 {
			field.advance(frame as f64 * 16.7);
			assert_eq!(field.particles().len(), 50);
			assert_eq!(field.bubbles().len(), 15);
			assert_in_bounds(&field);
		}
	}

	#[test]
	fn same_seed_same_first_frame() {
		let (mut a, mut b) = (field(42), field(42));
		a.advance(1_000.0);
		b.advance(1_000.0);
		assert_eq!(a.particles(), b.particles());
		assert_eq!(a.bubbles(), b.bubbles());

		let mut c = field(43);
		c.advance(1_000.0);
		assert_ne!(a.particles(), c.particles());
	}

	#[test]
	fn particle_rises_until_recycled_at_the_bottom() {
		let mut field = field(3);
		{
			let p = &mut field.particles_mut()[0];
			p.x = 400.0;
			p.y = 600.0;
			p.speed = 1.0;
			p.drift = 0.0;
		}

		let mut previous = field.particles()[0].y;
		let mut recycled_at = None;
		for frame in 0..1000 {
			field.advance(0.0);
			let y = field.particles()[0].y;
			if y > previous {
				recycled_at = Some((frame, y));
				break;
			}
			previous = y;
		}

		let (frame, y) = recycled_at.expect("particle never recycled");
		// 600 -> -51 takes 651 frames.
		assert_eq!(frame, 650);
		assert_eq!(y, 650.0);
	}

	#[test]
	fn shrinking_recycles_stranded_entities_on_next_frame() {
		let mut field = field(4);
		field.resize(200.0, 150.0);
		// Not repositioned on resize
		assert!(field.particles().iter().any(|p| p.x > 250.0 || p.y > 200.0));

		field.advance(0.0);
		assert_in_bounds(&field);
		assert_eq!(field.particles().len(), 50);
	}

	#[test]
	fn connections_follow_particle_positions() {
		let mut field = field(5);
		for (i, p) in field.particles_mut().iter_mut().enumerate() {
			p.x = i as f64 * 1000.0;
			p.y = 0.0;
		}
		assert_eq!(field.connections().count(), 0);

		field.particles_mut()[1].x = 50.0;
		let lines: Vec<_> = field.connections().collect();
		assert_eq!(lines.len(), 1);
		assert!((lines[0].alpha - 0.5 * 0.2).abs() < 1e-12);
	}
}
