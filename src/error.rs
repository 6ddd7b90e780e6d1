//! Errors raised while attaching effects to the page.

use thiserror::Error;

/// Why the background canvas could not be set up.
#[derive(Debug, Error)]
pub enum CanvasError {
	#[error("no browser window")]
	NoWindow,
	#[error("viewport size unavailable")]
	NoViewport,
	#[error("canvas has no 2d context")]
	NoContext,
	#[error("2d context has an unexpected type")]
	NotCanvas2d,
}
