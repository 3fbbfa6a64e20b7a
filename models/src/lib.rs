#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::missing_docs_in_private_items)]

//! Headless models for the console. Everything in here is independent of the
//! view layer so that the page lifecycle can be driven and tested without a
//! browser.

/// The tabbed detail page controller and all the types it works with.
pub mod page;

pub mod prelude {
	//! Commonly used items, re-exported for the view and application crates.

	pub use crate::page::*;
}
