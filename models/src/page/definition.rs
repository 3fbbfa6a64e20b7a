use std::{borrow::Cow, future::Future};

use super::{ActionDescriptor, Breadcrumb, LoadError, RouteParams, TabDescriptor, TabList};

/// What the permission check of a page gets to see. Before the entity is
/// loaded, only the route is available, so a page never leaks whether an
/// entity exists to someone who isn't allowed to see it.
#[derive(Debug)]
pub struct PermissionContext<'a, E> {
	/// The current route
	pub params: &'a RouteParams,
	/// The entity, once it has been loaded
	pub entity: Option<&'a E>,
}

/// The declarative description of a detail page with tabs. Implement this for
/// a page configuration and hand it to a [`PageController`] (or the view
/// layer's page component) to get loading, error, not-found, breadcrumb and
/// tab handling for free.
///
/// [`PageController`]: super::PageController
pub trait DetailPage: Clone + 'static {
	/// The entity shown on the page
	type Entity: Clone + 'static;

	/// The route parameter that holds the key of the entity. The entity is
	/// loaded again whenever this parameter changes.
	const KEY_PARAM: &'static str;

	/// A name for the page, used in log lines
	fn display_name(&self) -> &'static str;

	/// The tabs of the page, in display order
	fn tabs(&self) -> &TabList;

	/// Whether the current user may see the page. Called with no entity before
	/// anything is loaded, and again with the entity once it has been loaded.
	fn condition(&self, context: &PermissionContext<'_, Self::Entity>) -> bool;

	/// Loads the entity for the route. Must fail with [`LoadError::NotFound`]
	/// when the entity does not exist, including when a keyed lookup returns
	/// no results. Any auxiliary lookups are up to the implementation, which
	/// decides whether their failure is fatal.
	fn query(
		&self,
		params: &RouteParams,
	) -> impl Future<Output = Result<Self::Entity, LoadError>> + 'static;

	/// The breadcrumbs of the page. [`None`] entries are dropped, which allows
	/// for conditional segments.
	fn breadcrumbs(
		&self,
		entity: &Self::Entity,
		tab: &TabDescriptor,
		params: &RouteParams,
	) -> Vec<Option<Breadcrumb>>;

	/// The title shown in the header of the page
	fn title(&self, entity: &Self::Entity) -> String;

	/// The URL of this page for the given route
	fn detail_url(&self, params: &RouteParams) -> String;

	/// The URL of the collection this entity belongs to
	fn list_url(&self) -> String;

	/// Shown when the entity could not be loaded for any reason other than it
	/// not existing
	fn error_title(&self) -> Cow<'static, str>;

	/// The actions shown in the header, in display order
	fn header_actions(&self) -> Vec<ActionDescriptor<Self::Entity>> {
		Vec::new()
	}

	/// Cleans up the route before switching tabs. Parameters that only make
	/// sense within one tab should be removed here, so that they don't end up
	/// in deep-links to other tabs.
	fn tab_update_params(&self, params: RouteParams) -> RouteParams {
		params
	}
}
