#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::missing_docs_in_private_items)]

//! The repository management console

/// Prelude module. Used to re-export commonly used items.
pub mod prelude {
	pub use components::prelude::*;
	pub use leptos::*;
	pub use leptos_router::*;
	pub use models::prelude::*;

	pub use crate::{api::*, permissions::*, utils::*};
}

/// The API Module. This contains the client the console uses to talk to the
/// backend, and the types it sends and receives.
pub mod api;
/// The application logic code. This contains the router.
pub mod app;
/// The pages module. This contains all the pages used in the console.
pub mod pages;
/// What the current user is allowed to do
pub mod permissions;
/// Configuration, paths and other helpers
pub mod utils;

use prelude::*;

/// Starts the console in the browser
#[cfg(all(target_arch = "wasm32", feature = "csr"))]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
	wasm_logger::init(wasm_logger::Config::default());

	if cfg!(debug_assertions) {
		console_error_panic_hook::set_once();
	}

	mount_to_body(render);
}

/// The main render function. Reads the configuration and provides the API
/// client to the rest of the application.
pub fn render() -> impl IntoView {
	let config = parse_config().unwrap_or_else(|error| {
		log::error!("{error}, falling back to the default configuration");
		ConsoleConfig::default()
	});
	log::info!(
		"starting the console in {} against `{}`",
		config.environment,
		config.api_base_url
	);

	match HttpConsoleApi::new(&config) {
		Ok(api) => {
			provide_context(config);
			provide_context(api);
			view! { <app::App/> }.into_view()
		}
		Err(error) => {
			log::error!("unable to create the API client: {error}");
			view! { <ErrorPage title="The console is not configured correctly."/> }.into_view()
		}
	}
}
