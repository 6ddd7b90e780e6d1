//! Connection lines between nearby particles.
//!
//! Recomputed from scratch every frame by brute force over all unordered
//! pairs. The population is small and fixed, so no spatial index is kept.

use super::config::ConnectionConfig;
use super::entity::Particle;

/// A line to draw this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	pub from: (f64, f64),
	pub to: (f64, f64),
	pub alpha: f64,
}

/// Line alpha for two particles `distance` apart, or `None` when they are too
/// far apart to connect. Falls off linearly from `base_alpha` at distance 0.
pub fn connection_alpha(distance: f64, config: &ConnectionConfig) -> Option<f64> {
	if distance.is_nan() || distance >= config.distance || config.distance <= 0.0 {
		return None;
	}
	let closeness = (config.distance - distance.max(0.0)) / config.distance;
	Some(closeness * config.base_alpha)
}

/// Every connected pair among `particles`.
pub fn connections<'a>(
	particles: &'a [Particle],
	config: &'a ConnectionConfig,
) -> impl Iterator<Item = Connection> + 'a {
	particles.iter().enumerate().flat_map(move |(i, a)| {
		particles[i + 1..].iter().filter_map(move |b| {
			let distance = (a.x - b.x).hypot(a.y - b.y);
			connection_alpha(distance, config).map(|alpha| Connection {
				from: (a.x, a.y),
				to: (b.x, b.y),
				alpha,
			})
		})
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn particle_at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			radius: 2.0,
			speed: 1.0,
			drift: 0.0,
			opacity: 0.5,
		}
	}

	#[test]
	fn alpha_is_linear_in_distance() {
		let config = ConnectionConfig::default();
		let alpha = connection_alpha(50.0, &config).unwrap();
		assert!((alpha - 0.5 * config.base_alpha).abs() < 1e-12);
		assert_eq!(connection_alpha(0.0, &config), Some(config.base_alpha));
	}

	#[test]
	fn no_line_at_or_beyond_threshold() {
		let config = ConnectionConfig::default();
		assert_eq!(connection_alpha(100.0, &config), None);
		assert_eq!(connection_alpha(250.0, &config), None);
		assert_eq!(connection_alpha(f64::NAN, &config), None);
	}

	#[test]
	fn alpha_strictly_decreases_and_stays_in_range() {
		let config = ConnectionConfig::default();
		let mut previous = f64::INFINITY;
		for step in 0..1000 {
			let distance = step as f64 * 0.1;
			let alpha = connection_alpha(distance, &config).unwrap();
			assert!(alpha > 0.0 && alpha <= config.base_alpha);
			assert!(alpha < previous);
			previous = alpha;
		}
	}

	#[test]
	fn pairs_are_unordered_and_unique() {
		let config = ConnectionConfig::default();
		let particles = vec![
			particle_at(0.0, 0.0),
			particle_at(30.0, 40.0),
			particle_at(60.0, 80.0),
			particle_at(500.0, 500.0),
		];
		let lines: Vec<_> = connections(&particles, &config).collect();

		// (0,1) and (1,2) are 50 apart, (0,2) is exactly 100 apart.
		assert_eq!(lines.len(), 2);
		assert_eq!(lines[0].from, (0.0, 0.0));
		assert_eq!(lines[0].to, (30.0, 40.0));
		assert_eq!(lines[1].from, (30.0, 40.0));
		assert_eq!(lines[1].to, (60.0, 80.0));
		for line in &lines {
			assert!((line.alpha - 0.1).abs() < 1e-12);
		}
	}

	#[test]
	fn custom_threshold_is_respected() {
		let config = ConnectionConfig {
			distance: 40.0,
			..ConnectionConfig::default()
		};
		let particles = vec![particle_at(0.0, 0.0), particle_at(30.0, 40.0)];
		assert_eq!(connections(&particles, &config).count(), 0);
	}
}
