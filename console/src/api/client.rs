use reqwest::{Client, Method};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use super::*;
use crate::utils::ConsoleConfig;

/// The list endpoint of content repositories
const REPOSITORIES_PATH: &str = "pulp/api/v3/repositories/ansible/ansible/";
/// The list endpoint of distributions
const DISTRIBUTIONS_PATH: &str = "pulp/api/v3/distributions/ansible/ansible/";
/// The current user
const ME_PATH: &str = "_ui/v1/me/";

/// The [`ConsoleApi`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpConsoleApi {
	/// The HTTP client, shared between clones
	client: Client,
	/// Every path is resolved against this URL
	base_url: Url,
}

impl HttpConsoleApi {
	/// Creates a client for the API configured in the console config
	pub fn new(config: &ConsoleConfig) -> Result<Self, ApiError> {
		Ok(Self {
			client: Client::new(),
			base_url: Url::parse(&config.api_base_url)?,
		})
	}

	/// Makes a request to the API and parses the JSON response. Any status
	/// other than a success is returned as [`ApiError::Status`].
	async fn request<T, Q, B>(
		&self,
		method: Method,
		path: &str,
		query: &Q,
		body: Option<&B>,
	) -> Result<T, ApiError>
	where
		T: DeserializeOwned,
		Q: Serialize + ?Sized,
		B: Serialize + ?Sized,
	{
		let url = self.base_url.join(path)?;
		log::trace!("{method} {url}");

		let builder = self.client.request(method, url).query(query);
		let response = match body {
			Some(body) => builder.json(body),
			None => builder,
		}
		.send()
		.await?;

		let status = response.status();
		if !status.is_success() {
			let message = response.text().await.unwrap_or_default();
			return Err(ApiError::Status { status, message });
		}

		Ok(response.json::<T>().await?)
	}
}

impl ConsoleApi for HttpConsoleApi {
	async fn current_user(&self) -> Result<CurrentUser, ApiError> {
		self.request(Method::GET, ME_PATH, &(), None::<&()>).await
	}

	async fn list_repositories(
		&self,
		query: &RepositoryListQuery,
	) -> Result<Paginated<AnsibleRepository>, ApiError> {
		self.request(Method::GET, REPOSITORIES_PATH, query, None::<&()>)
			.await
	}

	async fn distribution_base_path(
		&self,
		repository_href: &str,
	) -> Result<Option<String>, ApiError> {
		let distributions: Paginated<AnsibleDistribution> = self
			.request(
				Method::GET,
				DISTRIBUTIONS_PATH,
				&[("repository", repository_href)],
				None::<&()>,
			)
			.await?;

		Ok(distributions
			.results
			.into_iter()
			.next()
			.map(|distribution| distribution.base_path))
	}

	async fn my_permissions(&self, repository_id: &str) -> Result<Vec<String>, ApiError> {
		let path = format!("{REPOSITORIES_PATH}{repository_id}/my_permissions/");
		let permissions: ObjectPermissions = self
			.request(Method::GET, &path, &(), None::<&()>)
			.await?;

		Ok(permissions.permissions)
	}

	async fn sync_repository(
		&self,
		repository_href: &str,
		request: &SyncRequest,
	) -> Result<TaskResponse, ApiError> {
		self.request(
			Method::POST,
			&format!("{repository_href}sync/"),
			&(),
			Some(request),
		)
		.await
	}

	async fn delete_repository(&self, repository_href: &str) -> Result<TaskResponse, ApiError> {
		self.request(Method::DELETE, repository_href, &(), None::<&()>)
			.await
	}
}
