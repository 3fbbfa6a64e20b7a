use models::prelude::LoadError;
use reqwest::StatusCode;
use thiserror::Error;

/// Why a request to the API failed
#[derive(Debug, Error)]
pub enum ApiError {
	/// The URL of the request could not be built
	#[error("invalid request URL: {0}")]
	InvalidUrl(#[from] url::ParseError),
	/// The request never got a response, or the response could not be read
	#[error("request failed: {0}")]
	Transport(#[from] reqwest::Error),
	/// The API responded with an error status
	#[error("the API responded with {status}: {message}")]
	Status {
		/// The status of the response
		status: StatusCode,
		/// The body of the response
		message: String,
	},
}

impl ApiError {
	/// The status the API responded with, if it responded at all
	pub fn status(&self) -> Option<StatusCode> {
		match self {
			Self::Status { status, .. } => Some(*status),
			Self::Transport(error) => error.status(),
			Self::InvalidUrl(_) => None,
		}
	}
}

impl From<ApiError> for LoadError {
	fn from(error: ApiError) -> Self {
		match error.status() {
			Some(status) => LoadError::from_status(status, error),
			None => LoadError::other(error),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_entities_are_not_found() {
		let error = ApiError::Status {
			status: StatusCode::NOT_FOUND,
			message: r#"{"detail":"Not found."}"#.into(),
		};

		assert_eq!(LoadError::from(error), LoadError::NotFound);
	}

	#[test]
	fn other_failures_keep_their_cause() {
		let error = ApiError::Status {
			status: StatusCode::INTERNAL_SERVER_ERROR,
			message: "oops".into(),
		};

		let error = LoadError::from(error);

		assert!(!error.is_not_found());
		assert!(error.to_string().contains("500"));
	}
}
