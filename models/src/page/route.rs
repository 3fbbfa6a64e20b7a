use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::TabList;

/// The name of the route parameter that holds the id of the active tab
pub const TAB_PARAM: &str = "tab";

/// The parameters of the current route. This is a merge of the path
/// parameters (like the key of the entity being shown) and the query string
/// (the active tab and any tab specific sub-parameters).
///
/// This is the single source of truth for which tab is active and which
/// sub-view within the tab is shown. Empty values are treated as if the
/// parameter was not present at all, so `?tab=` is the same as no tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
	/// Creates an empty set of route parameters
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses the route parameters from a query string, with or without the
	/// leading `?`. Returns an error if the query string is not valid url
	/// encoding.
	pub fn from_query(query: &str) -> Result<Self, serde_urlencoded::de::Error> {
		serde_urlencoded::from_str(query.trim_start_matches('?'))
	}

	/// Gets the value of a parameter. Returns [`None`] if the parameter is not
	/// present or is empty
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0
			.get(name)
			.map(String::as_str)
			.filter(|value| !value.is_empty())
	}

	/// Whether the parameter is present with a non-empty value
	pub fn contains(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	/// Sets a parameter, replacing any previous value
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.0.insert(name.into(), value.into());
	}

	/// Builder style variant of [`RouteParams::set`]
	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.set(name, value);
		self
	}

	/// Removes a parameter, returning its previous value (if any)
	pub fn remove(&mut self, name: &str) -> Option<String> {
		self.0.remove(name)
	}

	/// The id of the tab requested by the route, if any
	pub fn tab(&self) -> Option<&str> {
		self.get(TAB_PARAM)
	}

	/// Returns a copy of the params with every tab's sub-parameter removed.
	/// Useful when switching tabs, so that a selection made in one tab does not
	/// leak into a deep-link of another.
	pub fn without_sub_params(mut self, tabs: &TabList) -> Self {
		for sub_param in tabs.iter().filter_map(|tab| tab.sub_param.as_ref()) {
			self.remove(sub_param.key);
		}
		self
	}

	/// Renders the params as a query string (without the leading `?`),
	/// excluding the given keys, which are usually the path parameters.
	/// Empty values are skipped.
	pub fn to_query_string(&self, exclude: &[&str]) -> String {
		let pairs = self
			.iter()
			.filter(|(name, _)| !exclude.contains(name))
			.collect::<Vec<_>>();
		serde_urlencoded::to_string(pairs).unwrap_or_default()
	}

	/// Iterates over all the non-empty parameters in key order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0
			.iter()
			.filter(|(_, value)| !value.is_empty())
			.map(|(name, value)| (name.as_str(), value.as_str()))
	}
}
