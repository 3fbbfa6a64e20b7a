use std::collections::{BTreeMap, BTreeSet};

use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A page of results from a list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
	/// The total number of results across all pages
	pub count: u64,
	/// The URL of the next page
	#[serde(default)]
	pub next: Option<String>,
	/// The URL of the previous page
	#[serde(default)]
	pub previous: Option<String>,
	/// The results on this page
	pub results: Vec<T>,
}

/// The filters of the repository list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryListQuery {
	/// Exact name of the repository. Every repository is listed without one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// The number of results per page
	pub page_size: u32,
}

/// A content repository as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnsibleRepository {
	/// The unique name of the repository
	pub name: String,
	/// The href of the repository, which is also its address in the API
	pub pulp_href: String,
	/// A free text description
	#[serde(default)]
	pub description: Option<String>,
	/// How many versions are kept, [`None`] to keep them all
	#[serde(default)]
	pub retain_repo_versions: Option<u32>,
	/// The href of the remote the repository syncs from
	#[serde(default)]
	pub remote: Option<String>,
	/// The href of the newest version. Its last segment is the version
	/// number.
	#[serde(default)]
	pub latest_version_href: Option<String>,
	/// Whether only users with access can see the repository
	#[serde(default)]
	pub private: bool,
	/// When the repository was created
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub pulp_created: Option<OffsetDateTime>,
	/// Free form labels
	#[serde(default)]
	pub pulp_labels: BTreeMap<String, String>,
	/// The most recent sync of the repository, if it was ever synced
	#[serde(default)]
	pub last_sync_task: Option<SyncTask>,
}

/// A sync task of a repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncTask {
	/// Where the task is at
	pub state: TaskState,
	/// When the task finished, [`None`] while it is still running
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub finished_at: Option<OffsetDateTime>,
	/// The error the task failed with
	#[serde(default)]
	pub error: Option<serde_json::Value>,
}

/// The state of a background task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
	/// Queued
	Waiting,
	/// Running
	Running,
	/// Finished successfully
	Completed,
	/// Finished with an error
	Failed,
	/// Being cancelled
	Canceling,
	/// Cancelled before finishing
	Canceled,
	/// Skipped
	Skipped,
}

impl TaskState {
	/// Whether the task hasn't finished yet
	pub fn is_running(&self) -> bool {
		matches!(self, Self::Waiting | Self::Running | Self::Canceling)
	}

	/// How the state is shown to the user
	pub fn label(&self) -> String {
		format!("{self:?}").to_case(Case::Title)
	}
}

/// A distribution, which serves a repository under a base path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsibleDistribution {
	/// The unique name of the distribution
	pub name: String,
	/// The path the content is served under
	pub base_path: String,
}

/// The body of a sync request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncRequest {
	/// Whether content missing from the remote is removed
	pub mirror: bool,
	/// The remote to sync from
	#[serde(skip_serializing_if = "Option::is_none")]
	pub remote: Option<String>,
}

/// The response of an endpoint that starts a background task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
	/// The href of the task
	pub task: String,
}

/// The permissions the current user holds on a single object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectPermissions {
	/// The names of the permissions, such as `ansible.change_ansiblerepository`
	pub permissions: Vec<String>,
}

/// A model permission of the current user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPermission {
	/// Whether the user holds the permission for every object of the model
	pub has_model_permission: bool,
}

/// The current user as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
	/// The login of the user
	pub username: String,
	/// Superusers hold every permission
	#[serde(default)]
	pub is_superuser: bool,
	/// The model permissions of the user, by permission name
	#[serde(default)]
	pub model_permissions: BTreeMap<String, ModelPermission>,
}

impl CurrentUser {
	/// The model permissions the user actually holds
	pub fn granted_permissions(&self) -> BTreeSet<String> {
		self.model_permissions
			.iter()
			.filter(|(_, permission)| permission.has_model_permission)
			.map(|(name, _)| name.clone())
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn repositories_deserialize_with_missing_optional_fields() {
		let repository: AnsibleRepository = serde_json::from_value(json!({
			"name": "community",
			"pulp_href": "/api/v3/repositories/ansible/ansible/0190-aa/",
			"last_sync_task": {
				"state": "running",
				"finished_at": null
			}
		}))
		.unwrap();

		assert_eq!(repository.remote, None);
		assert!(repository.pulp_labels.is_empty());
		let task = repository.last_sync_task.unwrap();
		assert!(task.state.is_running());
		assert_eq!(task.finished_at, None);
	}

	#[test]
	fn timestamps_are_rfc3339() {
		let task: SyncTask = serde_json::from_value(json!({
			"state": "completed",
			"finished_at": "2024-05-01T10:30:00Z"
		}))
		.unwrap();

		assert_eq!(
			task.finished_at.map(OffsetDateTime::unix_timestamp),
			Some(1_714_559_400)
		);
		assert_eq!(task.state.label(), "Completed");
	}

	#[test]
	fn the_name_filter_is_left_out_when_listing_everything() {
		let all = RepositoryListQuery {
			name: None,
			page_size: 20,
		};
		let one = RepositoryListQuery {
			name: Some("community".to_owned()),
			page_size: 1,
		};

		assert_eq!(serde_json::to_value(all).unwrap(), json!({ "page_size": 20 }));
		assert_eq!(
			serde_json::to_value(one).unwrap(),
			json!({ "name": "community", "page_size": 1 })
		);
	}

	#[test]
	fn only_held_model_permissions_are_granted() {
		let user: CurrentUser = serde_json::from_value(json!({
			"username": "admin",
			"model_permissions": {
				"ansible.view_ansiblerepository": { "has_model_permission": true },
				"ansible.delete_ansiblerepository": { "has_model_permission": false }
			}
		}))
		.unwrap();

		assert_eq!(
			user.granted_permissions().into_iter().collect::<Vec<_>>(),
			["ansible.view_ansiblerepository"]
		);
	}
}
