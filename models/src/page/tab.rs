use std::{borrow::Cow, collections::HashSet};

use super::{ConfigError, RouteParams};

/// A route parameter that selects a sub-view inside a tab, like a specific
/// version inside a versions tab.
#[derive(Debug, Clone, Copy)]
pub struct SubParam {
	/// The route parameter key holding the selected value
	pub key: &'static str,
	/// Formats the breadcrumb label for a selected value
	pub label: fn(&str) -> String,
}

/// A single tab of a detail page
#[derive(Debug, Clone)]
pub struct TabDescriptor {
	/// The id of the tab, used in the URL. Must be unique within a page.
	pub id: Cow<'static, str>,
	/// The display name of the tab
	pub name: Cow<'static, str>,
	/// The sub-parameter this tab understands, if any
	pub sub_param: Option<SubParam>,
}

impl TabDescriptor {
	/// Creates a tab without a sub-parameter
	pub fn new(id: impl Into<Cow<'static, str>>, name: impl Into<Cow<'static, str>>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			sub_param: None,
		}
	}

	/// Attaches a sub-parameter to the tab
	pub fn with_sub_param(mut self, key: &'static str, label: fn(&str) -> String) -> Self {
		self.sub_param = Some(SubParam { key, label });
		self
	}
}

/// The ordered, non-empty list of tabs of a page. The first tab is the
/// default tab.
#[derive(Debug, Clone)]
pub struct TabList {
	/// The tabs, in display order
	tabs: Vec<TabDescriptor>,
}

impl TabList {
	/// Validates and creates a tab list. The list must not be empty and tab
	/// ids must be unique.
	pub fn new(tabs: Vec<TabDescriptor>) -> Result<Self, ConfigError> {
		if tabs.is_empty() {
			return Err(ConfigError::EmptyTabList);
		}

		let mut seen = HashSet::new();
		if let Some(duplicate) = tabs.iter().find(|tab| !seen.insert(tab.id.as_ref())) {
			return Err(ConfigError::DuplicateTabId(duplicate.id.to_string()));
		}

		Ok(Self { tabs })
	}

	/// The default tab
	pub fn first(&self) -> &TabDescriptor {
		&self.tabs[0]
	}

	/// Finds a tab by id
	pub fn get(&self, id: &str) -> Option<&TabDescriptor> {
		self.tabs.iter().find(|tab| tab.id == id)
	}

	/// Whether the tab with the given id is the default tab
	pub fn is_default(&self, id: &str) -> bool {
		self.first().id == id
	}

	/// Resolves the active tab from the route. Falls back to the first tab if
	/// the `tab` parameter is absent or names a tab that doesn't exist.
	pub fn resolve(&self, params: &RouteParams) -> &TabDescriptor {
		match params.tab() {
			None => self.first(),
			Some(id) => self.get(id).unwrap_or_else(|| {
				log::debug!("unknown tab `{id}` requested, falling back to `{}`", self.first().id);
				self.first()
			}),
		}
	}

	/// Iterates over the tabs in display order
	pub fn iter(&self) -> impl Iterator<Item = &TabDescriptor> {
		self.tabs.iter()
	}
}

/// Which view of a tab is being shown. Derived once from the route and then
/// matched on when building labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabView {
	/// The tab itself, without any sub-selection
	DefaultView,
	/// A sub-view selected through the tab's sub-parameter
	SubParamView {
		/// The route parameter key
		key: &'static str,
		/// The selected value
		value: String,
		/// The formatted label for the selection
		label: String,
	},
}

impl TabView {
	/// Derives the view from the active tab and the route. Sub-parameters
	/// belonging to other tabs are ignored.
	pub fn resolve(tab: &TabDescriptor, params: &RouteParams) -> Self {
		let Some(SubParam { key, label }) = tab.sub_param else {
			return Self::DefaultView;
		};

		match params.get(key) {
			Some(value) => Self::SubParamView {
				key,
				value: value.to_string(),
				label: label(value),
			},
			None => Self::DefaultView,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tabs() -> TabList {
		TabList::new(vec![
			TabDescriptor::new("details", "Details"),
			TabDescriptor::new("access", "Access").with_sub_param("group", |group| format!("Group {group}")),
			TabDescriptor::new("versions", "Versions")
				.with_sub_param("version", |version| format!("Version {version}")),
		])
		.unwrap()
	}

	#[test]
	fn no_tab_param_resolves_to_first_tab() {
		let tabs = tabs();

		assert_eq!(tabs.resolve(&RouteParams::new()).id, "details");
		assert_eq!(tabs.resolve(&RouteParams::new().with("name", "alpha")).id, "details");
	}

	#[test]
	fn unknown_tab_falls_back_to_first_tab() {
		let tabs = tabs();

		for id in ["logs", "DETAILS", " versions", "settings/versions"] {
			let params = RouteParams::new().with("tab", id);
			assert_eq!(tabs.resolve(&params).id, "details", "tab `{id}`");
		}
	}

	#[test]
	fn known_tab_is_resolved() {
		let params = RouteParams::new().with("tab", "versions");

		assert_eq!(tabs().resolve(&params).id, "versions");
	}

	#[test]
	fn rejects_invalid_tab_lists() {
		assert!(matches!(TabList::new(vec![]), Err(ConfigError::EmptyTabList)));
		assert!(matches!(
			TabList::new(vec![
				TabDescriptor::new("details", "Details"),
				TabDescriptor::new("details", "More details"),
			]),
			Err(ConfigError::DuplicateTabId(id)) if id == "details"
		));
	}

	#[test]
	fn sub_param_view_is_derived_for_the_owning_tab_only() {
		let tabs = tabs();
		let params = RouteParams::new().with("version", "3").with("group", "");

		assert_eq!(
			TabView::resolve(tabs.get("versions").unwrap(), &params),
			TabView::SubParamView {
				key: "version",
				value: "3".to_string(),
				label: "Version 3".to_string(),
			}
		);
		assert_eq!(TabView::resolve(tabs.get("access").unwrap(), &params), TabView::DefaultView);
		assert_eq!(TabView::resolve(tabs.get("details").unwrap(), &params), TabView::DefaultView);
	}

	#[test]
	fn without_sub_params_drops_every_tab_selection() {
		let params = RouteParams::new()
			.with("name", "alpha")
			.with("tab", "versions")
			.with("version", "3")
			.with("group", "admins")
			.without_sub_params(&tabs());

		assert_eq!(params, RouteParams::new().with("name", "alpha").with("tab", "versions"));
	}
}
