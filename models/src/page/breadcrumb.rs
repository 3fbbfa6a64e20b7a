use super::{TabDescriptor, TabView};

/// One segment of the navigational trail shown above a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
	/// Where the segment navigates to. The last segment (the current page)
	/// has no URL.
	pub url: Option<String>,
	/// The label of the segment
	pub name: String,
}

impl Breadcrumb {
	/// A segment that navigates somewhere
	pub fn link(url: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			url: Some(url.into()),
			name: name.into(),
		}
	}

	/// A segment that doesn't navigate anywhere
	pub fn text(name: impl Into<String>) -> Self {
		Self {
			url: None,
			name: name.into(),
		}
	}
}

/// Everything needed to build the usual breadcrumbs of a detail page
#[derive(Debug, Clone)]
pub struct BreadcrumbInput<'a> {
	/// URL of the collection list
	pub list_url: String,
	/// Label of the collection list
	pub list_name: String,
	/// URL of the entity's detail page, on its default tab
	pub entity_url: String,
	/// Label of the entity
	pub entity_name: String,
	/// URL of the active tab, without any sub-selection
	pub tab_url: String,
	/// The active tab
	pub tab: &'a TabDescriptor,
	/// Whether the active tab is the page's default tab
	pub is_default_tab: bool,
	/// The resolved view of the active tab
	pub view: TabView,
}

/// Builds the breadcrumbs of a detail page:
///
/// 1. a link to the collection list
/// 2. a link to the entity, on its default tab
/// 3. a link to the active tab, when it isn't the default tab and a sub-view
///    is selected
/// 4. the label of the selected sub-view, or else the name of the tab
///
/// The returned entries are optional so that callers can splice in their own
/// conditional segments; [`filter_breadcrumbs`] drops the empty ones.
pub fn standard_breadcrumbs(input: BreadcrumbInput<'_>) -> Vec<Option<Breadcrumb>> {
	let BreadcrumbInput {
		list_url,
		list_name,
		entity_url,
		entity_name,
		tab_url,
		tab,
		is_default_tab,
		view,
	} = input;

	let (tab_link, last) = match view {
		TabView::SubParamView { label, .. } => (
			(!is_default_tab).then(|| Breadcrumb::link(tab_url, tab.name.as_ref())),
			Breadcrumb::text(label),
		),
		TabView::DefaultView => (None, Breadcrumb::text(tab.name.as_ref())),
	};

	vec![
		Some(Breadcrumb::link(list_url, list_name)),
		Some(Breadcrumb::link(entity_url, entity_name)),
		tab_link,
		Some(last),
	]
}

/// Drops the missing and unlabelled segments, and makes sure the last segment
/// doesn't navigate anywhere since it is the current page.
pub fn filter_breadcrumbs(crumbs: Vec<Option<Breadcrumb>>) -> Vec<Breadcrumb> {
	let mut crumbs = crumbs
		.into_iter()
		.flatten()
		.filter(|crumb| !crumb.name.is_empty())
		.collect::<Vec<_>>();
	if let Some(last) = crumbs.last_mut() {
		last.url = None;
	}
	crumbs
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::page::{RouteParams, TabList};

	fn tabs() -> TabList {
		TabList::new(vec![
			TabDescriptor::new("details", "Details"),
			TabDescriptor::new("access", "Access"),
			TabDescriptor::new("versions", "Versions")
				.with_sub_param("version", |version| format!("Version {version}")),
		])
		.unwrap()
	}

	fn crumbs(tab_id: &str, params: &RouteParams) -> Vec<Breadcrumb> {
		let tabs = tabs();
		let tab = tabs.get(tab_id).unwrap();
		filter_breadcrumbs(standard_breadcrumbs(BreadcrumbInput {
			list_url: "/repositories".to_string(),
			list_name: "Repositories".to_string(),
			entity_url: "/repositories/alpha".to_string(),
			entity_name: "alpha".to_string(),
			tab_url: format!("/repositories/alpha?tab={tab_id}"),
			tab,
			is_default_tab: tabs.is_default(tab_id),
			view: TabView::resolve(tab, params),
		}))
	}

	#[test]
	fn default_tab_ends_with_tab_name() {
		assert_eq!(
			crumbs("details", &RouteParams::new()),
			vec![
				Breadcrumb::link("/repositories", "Repositories"),
				Breadcrumb::link("/repositories/alpha", "alpha"),
				Breadcrumb::text("Details"),
			]
		);
	}

	#[test]
	fn selected_version_replaces_tab_label() {
		let params = RouteParams::new().with("tab", "versions").with("version", "3");

		assert_eq!(
			crumbs("versions", &params),
			vec![
				Breadcrumb::link("/repositories", "Repositories"),
				Breadcrumb::link("/repositories/alpha", "alpha"),
				Breadcrumb::link("/repositories/alpha?tab=versions", "Versions"),
				Breadcrumb::text("Version 3"),
			]
		);
	}

	#[test]
	fn irrelevant_sub_param_is_ignored() {
		let params = RouteParams::new().with("tab", "access").with("version", "3");

		assert_eq!(crumbs("access", &params).last(), Some(&Breadcrumb::text("Access")));
		assert_eq!(crumbs("access", &params).len(), 3);
	}

	#[test]
	fn derivation_is_pure() {
		let params = RouteParams::new().with("tab", "versions").with("version", "3");

		assert_eq!(crumbs("versions", &params), crumbs("versions", &params));
	}

	#[test]
	fn filter_drops_missing_and_unlabelled_segments() {
		let filtered = filter_breadcrumbs(vec![
			Some(Breadcrumb::link("/a", "A")),
			None,
			Some(Breadcrumb::link("/b", "")),
			Some(Breadcrumb::link("/c", "C")),
		]);

		assert_eq!(filtered, vec![Breadcrumb::link("/a", "A"), Breadcrumb::text("C")]);
	}
}
