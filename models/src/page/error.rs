use std::{
	fmt::{Display, Formatter},
	sync::Arc,
};

use http::StatusCode;
use thiserror::Error;

/// Errors in the static configuration of a page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
	/// A page needs at least one tab to show
	#[error("a tabbed page needs at least one tab")]
	EmptyTabList,
	/// Two tabs share the same id, so the URL cannot tell them apart
	#[error("duplicate tab id `{0}`")]
	DuplicateTabId(String),
}

/// The reason the entity of a page could not be loaded.
///
/// A keyed lookup must resolve to exactly one record or fail. Loaders backed
/// by a list endpoint (filter by key, take the first result) must report an
/// empty result set as [`LoadError::NotFound`] and never as an empty success,
/// see [`LoadError::expect_single`].
#[derive(Debug, Clone)]
pub enum LoadError {
	/// The entity does not exist
	NotFound,
	/// Any other failure. The cause is kept for diagnostics only and is not
	/// meant to be shown to the user.
	Other(Arc<anyhow::Error>),
}

impl LoadError {
	/// Wraps any failure as [`LoadError::Other`]
	pub fn other(cause: impl Into<anyhow::Error>) -> Self {
		Self::Other(Arc::new(cause.into()))
	}

	/// Classifies a failed response by its status code. A `404` is
	/// [`LoadError::NotFound`], anything else is [`LoadError::Other`].
	pub fn from_status(status: StatusCode, cause: impl Into<anyhow::Error>) -> Self {
		if status == StatusCode::NOT_FOUND {
			Self::NotFound
		} else {
			Self::other(cause)
		}
	}

	/// Takes the only result of a keyed lookup. An empty result set is a
	/// [`LoadError::NotFound`].
	pub fn expect_single<T>(results: impl IntoIterator<Item = T>) -> Result<T, Self> {
		results.into_iter().next().ok_or(Self::NotFound)
	}

	/// Whether this is a [`LoadError::NotFound`]
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::NotFound)
	}
}

impl PartialEq for LoadError {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::NotFound, Self::NotFound) => true,
			(Self::Other(this), Self::Other(other)) => this.to_string() == other.to_string(),
			_ => false,
		}
	}
}

impl Display for LoadError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::NotFound => write!(f, "the requested resource does not exist"),
			Self::Other(cause) => write!(f, "{cause:#}"),
		}
	}
}

impl std::error::Error for LoadError {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_404_is_not_found() {
		assert!(LoadError::from_status(StatusCode::NOT_FOUND, anyhow::anyhow!("gone")).is_not_found());

		for status in [
			StatusCode::BAD_REQUEST,
			StatusCode::UNAUTHORIZED,
			StatusCode::FORBIDDEN,
			StatusCode::INTERNAL_SERVER_ERROR,
		] {
			let error = LoadError::from_status(status, anyhow::anyhow!("status {status}"));
			assert!(!error.is_not_found(), "{status}");
		}
	}

	#[test]
	fn empty_result_set_is_not_found() {
		assert_eq!(LoadError::expect_single(Vec::<u32>::new()), Err(LoadError::NotFound));
		assert_eq!(LoadError::expect_single(vec![7, 8]), Ok(7));
	}
}
