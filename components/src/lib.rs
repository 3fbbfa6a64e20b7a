#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::missing_docs_in_private_items)]

//! Reusable view components of the console, most importantly the
//! [`PageWithTabs`](page_with_tabs::PageWithTabs) detail page.

/// Prelude module. Used to re-export commonly used items.
pub mod prelude {
	pub use crate::{
		alert::*,
		badge::*,
		containers::*,
		error_page::*,
		link::*,
		page_title::*,
		page_with_tabs::*,
		spinner::*,
		tabs::*,
		utils::*,
	};
}

/// Items used by every component in this crate
mod imports {
	pub use leptos::*;
	pub use models::prelude::*;

	pub use crate::prelude::*;
}

/// Dismissible alerts shown at the top of a page
pub mod alert;
/// Status badges
pub mod badge;
/// The layout containers of a page: the page itself and the tab panel
pub mod containers;
/// Full page messages: errors, not found and access denied
pub mod error_page;
/// Buttons and links
pub mod link;
/// Page titles and breadcrumbs
pub mod page_title;
/// The tabbed detail page
pub mod page_with_tabs;
/// Loading indicators
pub mod spinner;
/// The tab strip of a page
pub mod tabs;
/// Colors and other small helpers shared by the components
pub mod utils;
