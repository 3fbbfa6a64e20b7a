use crate::prelude::*;

/// A repository along with what the detail page shows about it on top of the
/// repository itself
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryDetails {
	/// The repository
	pub repository: AnsibleRepository,
	/// The base path of the distribution serving the repository
	pub distro_base_path: Option<String>,
	/// The permissions the current user holds on the repository
	pub my_permissions: Vec<String>,
}

impl RepositoryDetails {
	/// Whether a sync of the repository is queued or running
	pub fn is_syncing(&self) -> bool {
		self.repository
			.last_sync_task
			.as_ref()
			.is_some_and(|task| task.state.is_running())
	}
}

/// Loads a repository by name.
///
/// The repository comes from the list endpoint filtered by name, so an empty
/// result set means the repository doesn't exist. The distribution and the
/// user's permissions are looked up afterwards; when either lookup fails the
/// page still loads, without a base path or with no object permissions.
pub async fn load_repository<A>(api: &A, name: &str) -> Result<RepositoryDetails, LoadError>
where
	A: ConsoleApi,
{
	let page = api
		.list_repositories(&RepositoryListQuery {
			name: Some(name.to_owned()),
			page_size: constants::SINGLE_ITEM_PAGE_SIZE,
		})
		.await?;
	let repository = LoadError::expect_single(page.results)?;

	let distro_base_path = async {
		api.distribution_base_path(&repository.pulp_href)
			.await
			.unwrap_or_else(|error| {
				log::error!("unable to load the distribution of repository `{name}`: {error}");
				None
			})
	};
	let my_permissions = async {
		let Some(id) = id_from_href(&repository.pulp_href) else {
			log::error!("repository `{name}` has an invalid href `{}`", repository.pulp_href);
			return Vec::new();
		};
		api.my_permissions(id).await.unwrap_or_else(|error| {
			log::error!("unable to load the permissions on repository `{name}`: {error}");
			Vec::new()
		})
	};
	let (distro_base_path, my_permissions) = futures::join!(distro_base_path, my_permissions);

	Ok(RepositoryDetails {
		repository,
		distro_base_path,
		my_permissions,
	})
}
