mod config;
mod paths;

pub use self::{config::*, paths::*};

/// The id of a resource, which is the last segment of its href.
/// `/api/v3/repositories/ansible/ansible/0190-aa/` has the id `0190-aa`.
pub fn id_from_href(href: &str) -> Option<&str> {
	href.trim_end_matches('/')
		.rsplit('/')
		.next()
		.filter(|id| !id.is_empty())
}

/// The version number at the end of a repository version href, like the `3`
/// in `.../ansible/0190-aa/versions/3/`
pub fn version_from_href(href: &str) -> Option<u64> {
	id_from_href(href)?.parse().ok()
}

/// A module containing constants that are used throughout the console.
pub mod constants {
	/// The API the console talks to when nothing else is configured
	pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001/api/";
	/// The page size used when fetching a single entity from a list endpoint
	pub const SINGLE_ITEM_PAGE_SIZE: u32 = 1;
	/// The page size of the repository list
	pub const LIST_PAGE_SIZE: u32 = 20;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ids_come_from_the_last_path_segment() {
		assert_eq!(
			id_from_href("/api/v3/repositories/ansible/ansible/0190-aa/"),
			Some("0190-aa")
		);
		assert_eq!(id_from_href("0190-aa"), Some("0190-aa"));
		assert_eq!(id_from_href("/"), None);
	}

	#[test]
	fn versions_are_parsed_from_version_hrefs() {
		assert_eq!(
			version_from_href("/api/v3/repositories/ansible/ansible/0190-aa/versions/3/"),
			Some(3)
		);
		assert_eq!(
			version_from_href("/api/v3/repositories/ansible/ansible/0190-aa/"),
			None
		);
	}
}
