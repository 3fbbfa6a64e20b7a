use std::future::Future;

mod client;
mod error;
mod types;

pub use self::{client::*, error::*, types::*};

/// The API calls the console makes. The browser client implements it over
/// HTTP; tests implement it in memory.
pub trait ConsoleApi: Clone + 'static {
	/// The current user and their model permissions
	fn current_user(&self) -> impl Future<Output = Result<CurrentUser, ApiError>>;

	/// Lists repositories matching the query
	fn list_repositories(
		&self,
		query: &RepositoryListQuery,
	) -> impl Future<Output = Result<Paginated<AnsibleRepository>, ApiError>>;

	/// The base path of the distribution serving the repository, if any
	fn distribution_base_path(
		&self,
		repository_href: &str,
	) -> impl Future<Output = Result<Option<String>, ApiError>>;

	/// The permissions the current user holds on the repository with the
	/// given id
	fn my_permissions(
		&self,
		repository_id: &str,
	) -> impl Future<Output = Result<Vec<String>, ApiError>>;

	/// Starts syncing the repository from its remote
	fn sync_repository(
		&self,
		repository_href: &str,
		request: &SyncRequest,
	) -> impl Future<Output = Result<TaskResponse, ApiError>>;

	/// Starts deleting the repository
	fn delete_repository(
		&self,
		repository_href: &str,
	) -> impl Future<Output = Result<TaskResponse, ApiError>>;
}
