//! Retypes the hero tagline one character at a time.

use web_sys::{Document, HtmlElement};

use super::dom;

const START_DELAY_MS: i32 = 1000;
const CHAR_INTERVAL_MS: i32 = 100;

/// Progressive reveal of a fixed string, one `char` per step.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
	text: String,
	shown: usize,
}

impl Typewriter {
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			shown: 0,
		}
	}

	/// Reveal one more character and return the visible prefix, or `None` once
	/// the whole text is showing.
	pub fn next_frame(&mut self) -> Option<&str> {
		let (offset, ch) = self.text[self.shown..].char_indices().next()?;
		self.shown += offset + ch.len_utf8();
		Some(&self.text[..self.shown])
	}

	pub fn is_done(&self) -> bool {
		self.shown >= self.text.len()
	}
}

fn type_next(el: HtmlElement, mut typewriter: Typewriter) {
	if let Some(visible) = typewriter.next_frame() {
		el.set_text_content(Some(visible));
		if !typewriter.is_done() {
			dom::after(CHAR_INTERVAL_MS, move || type_next(el, typewriter));
		}
	}
}

/// Clear `.typing-text` and type it back in after a short pause.
pub fn install_typewriter(document: &Document) {
	let Some(el) = dom::query(document, ".typing-text") else {
		return;
	};
	let typewriter = Typewriter::new(el.text_content().unwrap_or_default());
	el.set_text_content(Some(""));
	dom::after(START_DELAY_MS, move || type_next(el, typewriter));
}
