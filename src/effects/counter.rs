//! Count-up animation for headline figures.

use log::debug;
use web_sys::{Document, HtmlElement};

use super::dom::{self, Visibility};

const DURATION_MS: f64 = 2000.0;
const TICK_MS: i32 = 16;

/// Linear count from zero to a target in fixed-size steps.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
	target: f64,
	step: f64,
	current: f64,
	done: bool,
}

impl CounterAnimation {
	/// Count to `target` over roughly `duration_ms`, ticking every `tick_ms`.
	pub fn new(target: i64, duration_ms: f64, tick_ms: f64) -> Self {
		let ticks = (duration_ms / tick_ms).max(1.0);
		let target = target as f64;
		Self {
			target,
			step: target / ticks,
			current: 0.0,
			done: false,
		}
	}

	/// Advance one tick and return the value to display.
	pub fn tick(&mut self) -> i64 {
		if !self.done {
			self.current += self.step;
			if self.current >= self.target {
				self.current = self.target;
				self.done = true;
			}
		}
		self.current.floor() as i64
	}

	pub fn is_done(&self) -> bool {
		self.done
	}
}

/// Parse a counter target the lenient way: optional sign, then leading
/// digits; anything after them is ignored (`"250+"` is 250).
pub fn parse_target(raw: &str) -> Option<i64> {
	let raw = raw.trim_start();
	let (sign, digits) = match raw.strip_prefix('-') {
		Some(rest) => (-1, rest),
		None => (1, raw.strip_prefix('+').unwrap_or(raw)),
	};
	let end = digits
		.find(|c: char| !c.is_ascii_digit())
		.unwrap_or(digits.len());
	digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

fn run(el: HtmlElement, mut animation: CounterAnimation) {
	el.set_text_content(Some(&animation.tick().to_string()));
	if !animation.is_done() {
		dom::after(TICK_MS, move || run(el, animation));
	}
}

/// Every `.result-number[data-target]` counts up the first time it is seen.
pub fn install_counters(document: &Document) {
	let counters = dom::query_all(document, ".result-number");
	dom::observe_once(&counters, Visibility::ANY, |el| {
		let Some(target) = el.get_attribute("data-target").as_deref().and_then(parse_target) else {
			debug!("tidewater-fx: counter without numeric data-target");
			return;
		};
		run(el, CounterAnimation::new(target, DURATION_MS, TICK_MS as f64));
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reaches_target_exactly_and_stops() {
		let mut counter = CounterAnimation::new(1500, 2000.0, 16.0);
		let mut ticks = 0;
		let mut last = 0;
		while !counter.is_done() {
			let value = counter.tick();
			assert!(value >= last);
			last = value;
			ticks += 1;
			assert!(ticks <= 126, "counter overran");
		}
		assert_eq!(last, 1500);
		assert_eq!(counter.tick(), 1500);
		// 2000 / 16 = 125 steps, plus at most one for rounding
		assert!((125..=126).contains(&ticks));
	}

	#[test]
	fn displays_floored_values() {
		let mut counter = CounterAnimation::new(10, 2000.0, 16.0);
		// step = 0.08
		assert_eq!(counter.tick(), 0);
		for _ in 0..12 {
			counter.tick();
		}
		assert_eq!(counter.tick(), 1);
	}

	#[test]
	fn zero_and_negative_targets_finish_immediately() {
		let mut zero = CounterAnimation::new(0, 2000.0, 16.0);
		assert_eq!(zero.tick(), 0);
		assert!(zero.is_done());

		let mut negative = CounterAnimation::new(-5, 2000.0, 16.0);
		assert_eq!(negative.tick(), -5);
		assert!(negative.is_done());
	}

	#[test]
	fn parses_leading_integer() {
		assert_eq!(parse_target("98"), Some(98));
		assert_eq!(parse_target("  250+"), Some(250));
		assert_eq!(parse_target("-12kg"), Some(-12));
		assert_eq!(parse_target("+7"), Some(7));
		assert_eq!(parse_target("abc"), None);
		assert_eq!(parse_target(""), None);
	}
}
