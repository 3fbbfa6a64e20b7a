use std::collections::BTreeSet;

use crate::api::CurrentUser;

/// The names of the permissions the console checks
pub mod permission {
	/// See repositories
	pub const VIEW_REPOSITORY: &str = "ansible.view_ansiblerepository";
	/// Create repositories, which copying one needs
	pub const ADD_REPOSITORY: &str = "ansible.add_ansiblerepository";
	/// Change a repository
	pub const CHANGE_REPOSITORY: &str = "ansible.change_ansiblerepository";
	/// Delete a repository
	pub const DELETE_REPOSITORY: &str = "ansible.delete_ansiblerepository";
	/// Sync a repository from its remote
	pub const SYNC_REPOSITORY: &str = "ansible.sync_ansiblerepository";
}

/// The global capabilities of the current user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserCapabilities {
	/// Superusers hold every permission
	pub is_superuser: bool,
	/// The model permissions granted to the user
	pub permissions: BTreeSet<String>,
}

impl UserCapabilities {
	/// Whether the user holds the permission for every object of its model
	pub fn has(&self, permission: &str) -> bool {
		self.is_superuser || self.permissions.contains(permission)
	}

	/// Whether the user holds the permission, either globally or through the
	/// permissions they were given on one object
	pub fn has_on_object(&self, permission: &str, object_permissions: &[String]) -> bool {
		self.has(permission) ||
			object_permissions
				.iter()
				.any(|granted| granted == permission)
	}
}

impl From<&CurrentUser> for UserCapabilities {
	fn from(user: &CurrentUser) -> Self {
		Self {
			is_superuser: user.is_superuser,
			permissions: user.granted_permissions(),
		}
	}
}

impl<const N: usize> From<[&str; N]> for UserCapabilities {
	fn from(permissions: [&str; N]) -> Self {
		Self {
			is_superuser: false,
			permissions: permissions.into_iter().map(str::to_owned).collect(),
		}
	}
}
