//! Short-lived sparks that follow the pointer.

use rand::Rng;

use super::config::TrailConfig;

/// One fading spark.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailDot {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Remaining life, starts at 1.0 and doubles as draw alpha
	pub life: f64,
	pub decay: f64,
}

/// Pointer trail. Unlike the field, its population grows and shrinks.
#[derive(Debug)]
pub struct CursorTrail {
	dots: Vec<TrailDot>,
	config: TrailConfig,
}

impl CursorTrail {
	pub fn new(config: TrailConfig) -> Self {
		Self {
			dots: Vec::new(),
			config,
		}
	}

	/// Maybe spawn a dot at the pointer. Returns whether one was spawned.
	pub fn pointer_moved<R: Rng + ?Sized>(&mut self, rng: &mut R, x: f64, y: f64) -> bool {
		if !self.config.enabled || !rng.gen_bool(self.config.spawn_chance.clamp(0.0, 1.0)) {
			return false;
		}
		self.dots.push(TrailDot {
			x,
			y,
			vx: self.config.velocity.sample(rng),
			vy: self.config.velocity.sample(rng),
			life: 1.0,
			decay: self.config.decay.sample(rng),
		});
		true
	}

	/// Move every dot one frame and drop the ones that have faded out.
	pub fn advance(&mut self) {
		for dot in &mut self.dots {
			dot.x += dot.vx;
			dot.y += dot.vy;
			dot.life -= dot.decay;
		}
		self.dots.retain(|dot| dot.life > 0.0);
	}

	pub fn dots(&self) -> &[TrailDot] {
		&self.dots
	}

	#[cfg(test)]
	pub(crate) fn dots_mut(&mut self) -> &mut [TrailDot] {
		&mut self.dots
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn always() -> TrailConfig {
		TrailConfig {
			spawn_chance: 1.0,
			..TrailConfig::default()
		}
	}

	#[test]
	fn spawn_chance_is_honoured() {
		let mut rng = StdRng::seed_from_u64(11);
		let mut never = CursorTrail::new(TrailConfig {
			spawn_chance: 0.0,
			..TrailConfig::default()
		});
		let mut sometimes = CursorTrail::new(TrailConfig::default());
		for _ in 0..2000 {
			never.pointer_moved(&mut rng, 10.0, 10.0);
			sometimes.pointer_moved(&mut rng, 10.0, 10.0);
		}
		assert!(never.dots().is_empty());
		// 10% of 2000 moves, with generous slack
		assert!((100..300).contains(&sometimes.dots().len()));
	}

	#[test]
	fn disabled_trail_never_spawns() {
		let mut rng = StdRng::seed_from_u64(12);
		let mut trail = CursorTrail::new(TrailConfig {
			enabled: false,
			..always()
		});
		assert!(!trail.pointer_moved(&mut rng, 0.0, 0.0));
		assert!(trail.dots().is_empty());
	}

	#[test]
	fn dots_move_fade_and_expire() {
		let mut rng = StdRng::seed_from_u64(13);
		let mut trail = CursorTrail::new(always());
		assert!(trail.pointer_moved(&mut rng, 100.0, 50.0));

		let spawned = trail.dots()[0].clone();
		assert_eq!(spawned.life, 1.0);
		assert!((-1.0..1.0).contains(&spawned.vx));
		assert!((0.01..0.03).contains(&spawned.decay));

		trail.advance();
		let moved = &trail.dots()[0];
		assert_eq!(moved.x, 100.0 + spawned.vx);
		assert_eq!(moved.y, 50.0 + spawned.vy);
		assert_eq!(moved.life, 1.0 - spawned.decay);

		// Slowest decay is 0.01 per frame
		for _ in 0..100 {
			trail.advance();
		}
		assert!(trail.dots().is_empty());
	}
}
