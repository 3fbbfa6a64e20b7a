use std::fmt::{Display, Formatter};

use models::prelude::RouteParams;

/// The route parameter holding the name of a repository
pub const REPOSITORY_NAME_PARAM: &str = "name";

/// The routes of the repository pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryRoute {
	/// The list of repositories
	List,
	/// The detail page of a repository
	Detail {
		/// The name of the repository
		name: String,
	},
	/// The edit form of a repository
	Edit {
		/// The name of the repository
		name: String,
	},
	/// The create form, prefilled from an existing repository
	Copy {
		/// The name of the repository being copied
		name: String,
	},
}

impl RepositoryRoute {
	/// The path of the route, followed by the query string of the given params.
	/// The repository name is part of the path, so it is left out of the query.
	pub fn with_query(&self, params: &RouteParams) -> String {
		let query = params.to_query_string(&[REPOSITORY_NAME_PARAM]);
		if query.is_empty() {
			self.to_string()
		} else {
			format!("{self}?{query}")
		}
	}
}

impl Display for RepositoryRoute {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::List => write!(f, "/repositories"),
			Self::Detail { name } => write!(f, "/repositories/{}", encode(name)),
			Self::Edit { name } => write!(f, "/repositories/{}/edit", encode(name)),
			Self::Copy { name } => write!(f, "/repositories/new?copy={}", encode(name)),
		}
	}
}

/// Percent-encodes a single path segment
fn encode(segment: &str) -> String {
	url::form_urlencoded::byte_serialize(segment.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn detail_paths_carry_the_query_without_the_name() {
		let params = RouteParams::new()
			.with(REPOSITORY_NAME_PARAM, "community")
			.with("tab", "repository-versions")
			.with("repositoryVersion", "3");

		let path = RepositoryRoute::Detail {
			name: "community".into(),
		}
		.with_query(&params);

		assert_eq!(
			path,
			"/repositories/community?repositoryVersion=3&tab=repository-versions"
		);
	}

	#[test]
	fn names_are_encoded() {
		assert_eq!(
			RepositoryRoute::Edit {
				name: "team/one".into()
			}
			.to_string(),
			"/repositories/team%2Fone/edit"
		);
		assert_eq!(RepositoryRoute::List.with_query(&RouteParams::new()), "/repositories");
	}
}
