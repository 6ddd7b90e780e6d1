//! Hover flourishes on cards, tanks and gallery tiles.

use web_sys::{Document, Event};

use super::dom;

type Styles = &'static [(&'static str, &'static str)];

/// Inline styles applied while the pointer is over matching elements.
#[derive(Clone, Copy, Debug)]
pub struct HoverRule {
	pub selector: &'static str,
	pub enter: Styles,
	pub leave: Styles,
	/// Optional descendant restyled alongside the element
	pub child: Option<(&'static str, Styles, Styles)>,
}

const BADGE_ENTER: Styles = &[("transform", "scale(1.1)")];
const BADGE_LEAVE: Styles = &[("transform", "scale(1)")];

pub const RULES: &[HoverRule] = &[
	HoverRule {
		selector: ".glass-card",
		enter: &[("transform", "translateY(-10px) scale(1.02)")],
		leave: &[("transform", "translateY(0) scale(1)")],
		child: None,
	},
	HoverRule {
		selector: ".tank",
		enter: &[
			("transform", "scale(1.1) rotateY(10deg)"),
			("box-shadow", "0 0 30px rgba(0, 255, 255, 0.6)"),
		],
		leave: &[("transform", "scale(1) rotateY(0deg)"), ("box-shadow", "none")],
		child: None,
	},
	HoverRule {
		selector: ".gallery-item",
		enter: &[("box-shadow", "0 20px 40px rgba(0, 255, 255, 0.3)")],
		leave: &[("box-shadow", "")],
		child: Some((".media-type-badge", BADGE_ENTER, BADGE_LEAVE)),
	},
];

fn apply(rule: &HoverRule, document: &Document) {
	for el in dom::query_all(document, rule.selector) {
		let child = rule
			.child
			.and_then(|(selector, enter, leave)| Some((dom::query_in(&el, selector)?, enter, leave)));

		let (target, child_enter) = (el.clone(), child.clone());
		let enter = rule.enter;
		dom::on(&el, "mouseenter", move |_: Event| {
			dom::set_styles(&target, enter);
			if let Some((badge, styles, _)) = &child_enter {
				dom::set_styles(badge, styles);
			}
		});

		let (target, leave) = (el.clone(), rule.leave);
		dom::on(&el, "mouseleave", move |_: Event| {
			dom::set_styles(&target, leave);
			if let Some((badge, _, styles)) = &child {
				dom::set_styles(badge, styles);
			}
		});
	}
}

pub fn install_hover_effects(document: &Document) {
	for rule in RULES {
		apply(rule, document);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn restores(enter: Styles, leave: Styles) -> bool {
		enter
			.iter()
			.all(|(property, _)| leave.iter().any(|(p, _)| p == property))
	}

	#[test]
	fn leaving_restores_everything_entering_set() {
		for rule in RULES {
			assert!(restores(rule.enter, rule.leave), "{} leaks styles", rule.selector);
			if let Some((selector, enter, leave)) = rule.child {
				assert!(restores(enter, leave), "{selector} leaks styles");
			}
		}
	}
}
