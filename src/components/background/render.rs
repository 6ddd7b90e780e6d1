//! Per-frame drawing of the ambient field.
//!
//! Passes, back to front:
//! 1. Translucent backdrop (leaves fading trails instead of a hard clear)
//! 2. Particles with glow cores
//! 3. Bubbles with offset highlights
//! 4. Connection lines
//! 5. Cursor trail

use super::cursor::CursorTrail;
use super::field::AmbientField;
use super::surface::{Paint, Surface};
use super::theme::Theme;

/// Renders one complete frame.
pub fn render<S: Surface>(
	surface: &mut S,
	field: &AmbientField,
	theme: &Theme,
	trail: Option<&CursorTrail>,
) {
	draw_backdrop(surface, field, theme);
	draw_particles(surface, field, theme);
	draw_bubbles(surface, field, theme);
	draw_connections(surface, field, theme);

	if let Some(trail) = trail {
		draw_trail(surface, trail, theme);
	}
}

fn draw_backdrop<S: Surface>(surface: &mut S, field: &AmbientField, theme: &Theme) {
	let paint = Paint::Linear {
		x0: 0.0,
		y0: 0.0,
		x1: 0.0,
		y1: field.height(),
		stops: &theme.backdrop.stops,
	};
	surface.fill_rect(0.0, 0.0, field.width(), field.height(), &paint);
}

fn draw_particles<S: Surface>(surface: &mut S, field: &AmbientField, theme: &Theme) {
	let glow_blur = field.config().glow_blur;

	for p in field.particles() {
		surface.save();
		surface.set_global_alpha(p.opacity);

		let paint = Paint::Radial {
			x0: p.x,
			y0: p.y,
			r0: 0.0,
			x1: p.x,
			y1: p.y,
			r1: p.radius,
			stops: &theme.particle.stops,
		};
		surface.fill_circle(p.x, p.y, p.radius, &paint);

		surface.set_glow(glow_blur, theme.particle.glow_color);
		surface.fill_circle(p.x, p.y, p.radius * 0.5, &paint);

		surface.restore();
	}
}

fn draw_bubbles<S: Surface>(surface: &mut S, field: &AmbientField, theme: &Theme) {
	let style = &theme.bubble;

	for b in field.bubbles() {
		surface.save();
		surface.set_global_alpha(b.opacity);

		surface.stroke_circle(b.x, b.y, b.radius, style.outline, style.outline_width);

		// Highlight sits up and to the left, like light from the top-left
		let (hx, hy, hr) = (b.x - b.radius * 0.3, b.y - b.radius * 0.3, b.radius * 0.5);
		let paint = Paint::Radial {
			x0: hx,
			y0: hy,
			r0: 0.0,
			x1: hx,
			y1: hy,
			r1: hr,
			stops: &style.highlight_stops,
		};
		surface.fill_circle(hx, hy, hr, &paint);

		surface.restore();
	}
}

fn draw_connections<S: Surface>(surface: &mut S, field: &AmbientField, theme: &Theme) {
	let width = field.config().connections.line_width;

	surface.save();
	for line in field.connections() {
		surface.set_global_alpha(line.alpha);
		surface.stroke_line(line.from, line.to, theme.connection.color, width);
	}
	surface.restore();
}

fn draw_trail<S: Surface>(surface: &mut S, trail: &CursorTrail, theme: &Theme) {
	let paint = Paint::Solid(theme.trail.color);

	surface.save();
	for dot in trail.dots() {
		surface.set_global_alpha(dot.life.clamp(0.0, 1.0));
		surface.fill_circle(dot.x, dot.y, theme.trail.radius, &paint);
	}
	surface.restore();
}
