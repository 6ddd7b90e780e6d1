//! The immediate-mode drawing operations the renderer needs.
//!
//! Implemented for the browser's 2D context; tests use a recording surface.

use std::f64::consts::PI;

use web_sys::{CanvasGradient, CanvasRenderingContext2d};

use super::theme::{Color, ColorStop};

/// Paint source for filled shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint<'a> {
	/// Gradient along the segment `(x0, y0)` to `(x1, y1)`.
	Linear {
		x0: f64,
		y0: f64,
		x1: f64,
		y1: f64,
		stops: &'a [ColorStop],
	},
	/// Gradient between two circles, usually concentric.
	Radial {
		x0: f64,
		y0: f64,
		r0: f64,
		x1: f64,
		y1: f64,
		r1: f64,
		stops: &'a [ColorStop],
	},
	Solid(Color),
}

/// Minimal 2D drawing surface.
pub trait Surface {
	/// Push the current alpha and glow state.
	fn save(&mut self);
	/// Pop the state pushed by the matching [`Surface::save`].
	fn restore(&mut self);
	fn set_global_alpha(&mut self, alpha: f64);
	/// Blurred shadow behind subsequent fills. A blur of 0 disables it.
	fn set_glow(&mut self, blur: f64, color: Color);
	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: &Paint<'_>);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, paint: &Paint<'_>);
	fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, width: f64);
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64);
}

fn gradient(ctx: &CanvasRenderingContext2d, paint: &Paint<'_>) -> Option<CanvasGradient> {
	let (gradient, stops) = match *paint {
		Paint::Linear {
			x0,
			y0,
			x1,
			y1,
			stops,
		} => (ctx.create_linear_gradient(x0, y0, x1, y1), stops),
		Paint::Radial {
			x0,
			y0,
			r0,
			x1,
			y1,
			r1,
			stops,
		} => (ctx.create_radial_gradient(x0, y0, r0, x1, y1, r1).ok()?, stops),
		Paint::Solid(_) => return None,
	};
	for stop in stops {
		let _ = gradient.add_color_stop(stop.offset as f32, &stop.color.to_css());
	}
	Some(gradient)
}

fn set_fill(ctx: &CanvasRenderingContext2d, paint: &Paint<'_>) {
	match paint {
		Paint::Solid(color) => ctx.set_fill_style_str(&color.to_css()),
		_ => {
			if let Some(gradient) = gradient(ctx, paint) {
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
			}
		}
	}
}

impl Surface for CanvasRenderingContext2d {
	fn save(&mut self) {
		CanvasRenderingContext2d::save(self);
	}

	fn restore(&mut self) {
		CanvasRenderingContext2d::restore(self);
	}

	fn set_global_alpha(&mut self, alpha: f64) {
		CanvasRenderingContext2d::set_global_alpha(self, alpha);
	}

	fn set_glow(&mut self, blur: f64, color: Color) {
		self.set_shadow_blur(blur);
		self.set_shadow_color(&color.to_css());
	}

	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: &Paint<'_>) {
		set_fill(self, paint);
		CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, paint: &Paint<'_>) {
		set_fill(self, paint);
		self.begin_path();
		let _ = self.arc(x, y, radius.max(0.0), 0.0, PI * 2.0);
		self.fill();
	}

	fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, width: f64) {
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.begin_path();
		let _ = self.arc(x, y, radius.max(0.0), 0.0, PI * 2.0);
		self.stroke();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}
}

/// Records every call for assertions in renderer tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct Recorder {
	pub calls: Vec<Call>,
	alpha: f64,
	stack: Vec<f64>,
}

#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
	FillRect { width: f64, height: f64, alpha: f64, stops: usize },
	FillCircle { x: f64, y: f64, radius: f64, alpha: f64 },
	StrokeCircle { x: f64, y: f64, radius: f64, alpha: f64 },
	Line { from: (f64, f64), to: (f64, f64), alpha: f64 },
	Glow { blur: f64 },
}

#[cfg(test)]
impl Recorder {
	pub fn new() -> Self {
		Self {
			alpha: 1.0,
			..Self::default()
		}
	}

	/// Depth of unmatched `save` calls.
	pub fn depth(&self) -> usize {
		self.stack.len()
	}
}

#[cfg(test)]
impl Surface for Recorder {
	fn save(&mut self) {
		self.stack.push(self.alpha);
	}

	fn restore(&mut self) {
		self.alpha = self.stack.pop().unwrap_or(1.0);
	}

	fn set_global_alpha(&mut self, alpha: f64) {
		self.alpha = alpha;
	}

	fn set_glow(&mut self, blur: f64, _color: Color) {
		self.calls.push(Call::Glow { blur });
	}

	fn fill_rect(&mut self, _x: f64, _y: f64, width: f64, height: f64, paint: &Paint<'_>) {
		let stops = match paint {
			Paint::Linear { stops, .. } | Paint::Radial { stops, .. } => stops.len(),
			Paint::Solid(_) => 0,
		};
		self.calls.push(Call::FillRect {
			width,
			height,
			alpha: self.alpha,
			stops,
		});
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, _paint: &Paint<'_>) {
		self.calls.push(Call::FillCircle {
			x,
			y,
			radius,
			alpha: self.alpha,
		});
	}

	fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, _color: Color, _width: f64) {
		self.calls.push(Call::StrokeCircle {
			x,
			y,
			radius,
			alpha: self.alpha,
		});
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), _color: Color, _width: f64) {
		self.calls.push(Call::Line {
			from,
			to,
			alpha: self.alpha,
		});
	}
}
