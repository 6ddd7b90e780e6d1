//! Scroll-triggered reveals: fade-ins, staggered sequences and the glow pulse.

use log::debug;
use web_sys::Document;

use super::dom::{self, Visibility};

/// Lifecycle of a one-shot trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
	#[default]
	Pending,
	Triggered,
	Done,
}

/// Guards an animation that must start at most once, however many times its
/// trigger fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OneShot {
	phase: Phase,
}

impl OneShot {
	/// Move from `Pending` to `Triggered`. Returns false for any repeat.
	pub fn trigger(&mut self) -> bool {
		if self.phase != Phase::Pending {
			return false;
		}
		self.phase = Phase::Triggered;
		true
	}

	/// Mark a triggered animation as finished. No-op in any other phase.
	pub fn finish(&mut self) {
		if self.phase == Phase::Triggered {
			self.phase = Phase::Done;
		}
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}
}

/// Delay before the `index`-th element of a staggered sequence.
pub fn stagger_delay(index: usize, step_ms: i32) -> i32 {
	i32::try_from(index).unwrap_or(i32::MAX).saturating_mul(step_ms)
}

const HIDDEN: &[(&str, &str)] = &[
	("opacity", "0"),
	("transform", "translateY(30px)"),
	("transition", "all 0.8s ease"),
];
const SHOWN: &[(&str, &str)] = &[("opacity", "1"), ("transform", "translateY(0)")];
const STEP_SHOWN: &[(&str, &str)] = &[("opacity", "1"), ("transform", "translateX(0)")];
const GLOW: &str = "0 0 20px rgba(0, 255, 255, 0.3)";

const FLOW_STEP_MS: i32 = 200;
const GALLERY_STEP_MS: i32 = 100;
const TANK_RESTART_MS: i32 = 100;
const GLOW_HOLD_MS: i32 = 1000;

/// Titles, cards and timeline entries slide up the first time they are seen.
pub fn install_reveals(document: &Document) {
	let targets = dom::query_all(document, ".section-title, .glass-card, .timeline-item");
	for el in &targets {
		dom::set_styles(el, HIDDEN);
	}
	dom::observe_once(&targets, Visibility::SETTLED, |el| dom::set_styles(&el, SHOWN));

	// Gallery items start hidden via the stylesheet.
	let items = dom::query_all(document, ".gallery-item");
	dom::observe_once(&items, Visibility::SETTLED, |el| dom::set_styles(&el, SHOWN));
}

/// When the process section appears, every flow step on the page is revealed
/// one after another and each tank's fill animation restarts.
pub fn install_process_flow(document: &Document) {
	let Some(section) = dom::by_id(document, "process") else {
		debug!("tidewater-fx: no #process section, skipping flow animation");
		return;
	};
	let document = document.clone();
	dom::observe_once(&[section], Visibility::ANY, move |_| {
		for (index, step) in dom::query_all(&document, ".flow-step").into_iter().enumerate() {
			dom::after(stagger_delay(index, FLOW_STEP_MS), move || {
				dom::set_styles(&step, STEP_SHOWN);
				if let Some(tank) = dom::query_in(&step, ".tank") {
					dom::set_styles(&tank, &[("animation", "none")]);
					dom::after(TANK_RESTART_MS, move || dom::set_styles(&tank, &[("animation", "")]));
				}
			});
		}
	});
}

/// Gallery items cascade in when the gallery section first appears.
pub fn install_gallery_stagger(document: &Document) {
	let Some(section) = dom::by_id(document, "gallery") else {
		debug!("tidewater-fx: no #gallery section, skipping stagger");
		return;
	};
	let visibility = Visibility {
		threshold: 0.2,
		root_margin: "0px",
	};
	dom::observe_once(&[section], visibility, |section| {
		for (index, item) in dom::query_all_in(&section, ".gallery-item").into_iter().enumerate() {
			dom::after(stagger_delay(index, GALLERY_STEP_MS), move || {
				dom::set_styles(&item, SHOWN);
			});
		}
	});
}

/// Cards, tanks and timeline markers pulse a glow every time they enter view.
pub fn install_scroll_glow(document: &Document) {
	let targets = dom::query_all(document, ".glass-card, .tank, .timeline-marker");
	dom::observe(&targets, Visibility::ANY, |el, _| {
		dom::set_styles(&el, &[("box-shadow", GLOW)]);
		dom::after(GLOW_HOLD_MS, move || dom::set_styles(&el, &[("box-shadow", "")]));
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn one_shot_fires_once() {
		let mut shot = OneShot::default();
		assert_eq!(shot.phase(), Phase::Pending);

		assert!(shot.trigger());
		assert_eq!(shot.phase(), Phase::Triggered);
		assert!(!shot.trigger());

		shot.finish();
		assert_eq!(shot.phase(), Phase::Done);
		assert!(!shot.trigger());
		assert_eq!(shot.phase(), Phase::Done);
	}

	#[test]
	fn finish_before_trigger_is_ignored() {
		let mut shot = OneShot::default();
		shot.finish();
		assert_eq!(shot.phase(), Phase::Pending);
		assert!(shot.trigger());
	}

	#[test]
	fn stagger_grows_linearly() {
		assert_eq!(stagger_delay(0, 200), 0);
		assert_eq!(stagger_delay(3, 200), 600);
		assert_eq!(stagger_delay(usize::MAX, 100), i32::MAX);
	}

	#[test]
	fn reveal_undoes_every_hidden_motion() {
		for (property, _) in HIDDEN.iter().filter(|(p, _)| *p != "transition") {
			assert!(SHOWN.iter().any(|(p, _)| p == property), "{property} never revealed");
		}
	}
}
