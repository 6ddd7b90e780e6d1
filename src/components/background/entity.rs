//! Drifting entities that populate the background field.
//!
//! Both kinds rise from the bottom of the viewport and are recycled in place
//! once they leave it, so the field never allocates after start-up.

use rand::Rng;

use super::config::EntityConfig;

/// A small glowing dot. Nearby particles are joined by connection lines.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub speed: f64,
	pub drift: f64,
	pub opacity: f64,
}

/// A larger outlined bubble that sways as it rises.
#[derive(Clone, Debug, PartialEq)]
pub struct Bubble {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub speed: f64,
	pub drift: f64,
	pub opacity: f64,
	/// Angular frequency in radians per millisecond
	pub wobble: f64,
	/// Phase offset so bubbles sway out of step
	pub wobble_offset: f64,
}

/// True once `(x, y)` has left the viewport grown by `margin` on every side.
pub fn out_of_bounds(x: f64, y: f64, width: f64, height: f64, margin: f64) -> bool {
	y < -margin || y > height + margin || x < -margin || x > width + margin
}

impl Particle {
	/// A particle scattered anywhere on the surface.
	pub fn scattered<R: Rng + ?Sized>(
		rng: &mut R,
		config: &EntityConfig,
		width: f64,
		height: f64,
	) -> Self {
		let mut particle = Self::spawn(rng, config, width, height);
		particle.y = rng.gen_range(0.0..height.max(f64::MIN_POSITIVE));
		particle
	}

	/// A fresh particle just below the bottom edge.
	pub fn spawn<R: Rng + ?Sized>(
		rng: &mut R,
		config: &EntityConfig,
		width: f64,
		height: f64,
	) -> Self {
		Self {
			x: rng.gen_range(0.0..width.max(f64::MIN_POSITIVE)),
			y: height + config.margin,
			radius: config.radius.sample(rng),
			speed: config.speed.sample(rng),
			drift: config.drift.sample(rng),
			opacity: config.opacity.sample(rng),
		}
	}

	/// Move one frame; recycle in place when out of bounds.
	pub fn advance<R: Rng + ?Sized>(
		&mut self,
		rng: &mut R,
		config: &EntityConfig,
		width: f64,
		height: f64,
	) {
		self.y -= self.speed;
		self.x += self.drift;

		if out_of_bounds(self.x, self.y, width, height, config.margin) {
			*self = Self::spawn(rng, config, width, height);
		}
	}
}

impl Bubble {
	pub fn scattered<R: Rng + ?Sized>(
		rng: &mut R,
		config: &EntityConfig,
		width: f64,
		height: f64,
	) -> Self {
		let mut bubble = Self::spawn(rng, config, width, height);
		bubble.y = rng.gen_range(0.0..height.max(f64::MIN_POSITIVE));
		bubble
	}

	pub fn spawn<R: Rng + ?Sized>(
		rng: &mut R,
		config: &EntityConfig,
		width: f64,
		height: f64,
	) -> Self {
		Self {
			x: rng.gen_range(0.0..width.max(f64::MIN_POSITIVE)),
			y: height + config.margin,
			radius: config.radius.sample(rng),
			speed: config.speed.sample(rng),
			drift: config.drift.sample(rng),
			opacity: config.opacity.sample(rng),
			wobble: config.wobble.sample(rng),
			wobble_offset: rng.gen_range(0.0..std::f64::consts::TAU),
		}
	}

	/// Horizontal sway at wall-clock time `now_ms`.
	pub fn sway(&self, now_ms: f64, amplitude: f64) -> f64 {
		(now_ms * self.wobble + self.wobble_offset).sin() * amplitude
	}

	pub fn advance<R: Rng + ?Sized>(
		&mut self,
		rng: &mut R,
		config: &EntityConfig,
		width: f64,
		height: f64,
		now_ms: f64,
	) {
		self.y -= self.speed;
		self.x += self.drift + self.sway(now_ms, config.wobble_amplitude);

		if out_of_bounds(self.x, self.y, width, height, config.margin) {
			*self = Self::spawn(rng, config, width, height);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn bounds_are_inclusive_of_margin() {
		assert!(!out_of_bounds(-50.0, 650.0, 800.0, 600.0, 50.0));
		assert!(!out_of_bounds(850.0, -50.0, 800.0, 600.0, 50.0));
		assert!(out_of_bounds(-50.1, 0.0, 800.0, 600.0, 50.0));
		assert!(out_of_bounds(850.1, 0.0, 800.0, 600.0, 50.0));
		assert!(out_of_bounds(0.0, -50.1, 800.0, 600.0, 50.0));
		assert!(out_of_bounds(0.0, 650.1, 800.0, 600.0, 50.0));
	}

	#[test]
	fn spawn_enters_from_below_with_attributes_in_range() {
		let mut rng = StdRng::seed_from_u64(1);
		let config = EntityConfig::particles();
		for _ in 0..200 {
			let p = Particle::spawn(&mut rng, &config, 800.0, 600.0);
			assert_eq!(p.y, 650.0);
			assert!((0.0..800.0).contains(&p.x));
			assert!((1.0..4.0).contains(&p.radius));
			assert!((0.5..1.5).contains(&p.speed));
			assert!((-0.25..0.25).contains(&p.drift));
			assert!((0.2..0.7).contains(&p.opacity));
		}
	}

	#[test]
	fn scattered_bubbles_cover_the_surface() {
		let mut rng = StdRng::seed_from_u64(2);
		let config = EntityConfig::bubbles();
		for _ in 0..200 {
			let b = Bubble::scattered(&mut rng, &config, 800.0, 600.0);
			assert!((0.0..600.0).contains(&b.y));
			assert!((0.01..0.03).contains(&b.wobble));
			assert!((0.0..std::f64::consts::TAU).contains(&b.wobble_offset));
		}
	}

	#[test]
	fn particle_integrates_speed_and_drift() {
		let mut rng = StdRng::seed_from_u64(3);
		let config = EntityConfig::particles();
		let mut p = Particle {
			x: 100.0,
			y: 300.0,
			radius: 2.0,
			speed: 1.25,
			drift: -0.2,
			opacity: 0.5,
		};
		p.advance(&mut rng, &config, 800.0, 600.0);
		assert_eq!(p.y, 298.75);
		assert!((p.x - 99.8).abs() < 1e-12);
		assert_eq!(p.radius, 2.0);
	}

	#[test]
	fn bubble_sway_is_bounded_by_amplitude() {
		let b = Bubble {
			x: 0.0,
			y: 0.0,
			radius: 10.0,
			speed: 0.5,
			drift: 0.0,
			opacity: 0.2,
			wobble: 0.02,
			wobble_offset: 1.0,
		};
		for t in 0..1000 {
			assert!(b.sway(t as f64 * 16.7, 0.5).abs() <= 0.5);
		}
		assert_eq!(b.sway(0.0, 0.5), 1.0f64.sin() * 0.5);
	}

	#[test]
	fn bubble_leaving_sideways_is_recycled() {
		let mut rng = StdRng::seed_from_u64(4);
		let config = EntityConfig::bubbles();
		let mut b = Bubble {
			x: 899.9,
			y: 300.0,
			radius: 10.0,
			speed: 0.5,
			drift: 0.15,
			opacity: 0.2,
			wobble: 0.0,
			wobble_offset: std::f64::consts::FRAC_PI_2,
		};
		b.advance(&mut rng, &config, 800.0, 600.0, 0.0);
		assert_eq!(b.y, 700.0);
		assert!((0.0..800.0).contains(&b.x));
	}
}
