use std::rc::Rc;

use super::RepositoryDetails;
use crate::prelude::*;

/// Opens the edit form
pub const EDIT_ACTION: &str = "edit";
/// Syncs the repository from its remote
pub const SYNC_ACTION: &str = "sync";
/// Opens the create form prefilled from the repository
pub const COPY_ACTION: &str = "copy";
/// Deletes the repository
pub const DELETE_ACTION: &str = "delete";

/// The state header actions of the repository page are decided on
type State<'a> = ActionState<'a, RepositoryDetails>;

/// The header actions of the repository page, in display order
pub fn repository_actions<A>(
	api: &A,
	user: &Rc<UserCapabilities>,
) -> Vec<ActionDescriptor<RepositoryDetails>>
where
	A: ConsoleApi,
{
	vec![
		ActionDescriptor::new(
			EDIT_ACTION,
			"Edit",
			|item: &RepositoryDetails, context: &ActionContext| {
				context.navigate(
					&RepositoryRoute::Edit {
						name: item.repository.name.clone(),
					}
					.to_string(),
				)
			},
		)
		.visible_when(allowed(user, permission::CHANGE_REPOSITORY)),
		ActionDescriptor::new(SYNC_ACTION, "Sync", {
			let api = api.clone();
			move |item: &RepositoryDetails, context: &ActionContext| {
				sync(api.clone(), item, context)
			}
		})
		.visible_when({
			let allowed = allowed(user, permission::SYNC_REPOSITORY);
			move |state: &State<'_>| {
				allowed(state) &&
					state
						.entity
						.is_some_and(|item| item.repository.remote.is_some())
			}
		})
		.disabled_when(|state: &State<'_>| {
			state
				.entity
				.is_some_and(RepositoryDetails::is_syncing)
				.then_some("Sync task is already queued.".into())
		}),
		ActionDescriptor::new(
			COPY_ACTION,
			"Copy",
			|item: &RepositoryDetails, context: &ActionContext| {
				context.navigate(
					&RepositoryRoute::Copy {
						name: item.repository.name.clone(),
					}
					.to_string(),
				)
			},
		)
		.visible_when({
			let user = user.clone();
			move |_: &State<'_>| user.has(permission::ADD_REPOSITORY)
		}),
		ActionDescriptor::new(DELETE_ACTION, "Delete", {
			let api = api.clone();
			move |item: &RepositoryDetails, context: &ActionContext| {
				delete(api.clone(), item, context)
			}
		})
		.visible_when(allowed(user, permission::DELETE_REPOSITORY)),
	]
}

/// Whether the user holds the permission globally or on the loaded repository
fn allowed(
	user: &Rc<UserCapabilities>,
	permission: &'static str,
) -> impl Fn(&State<'_>) -> bool + 'static {
	let user = user.clone();
	move |state| match state.entity {
		Some(item) => user.has_on_object(permission, &item.my_permissions),
		None => user.has(permission),
	}
}

/// Starts a sync from the repository's remote and reloads the page, so that
/// the header shows the queued task
fn sync<A>(api: A, item: &RepositoryDetails, context: &ActionContext)
where
	A: ConsoleApi,
{
	let name = item.repository.name.clone();
	let href = item.repository.pulp_href.clone();
	let request = SyncRequest {
		mirror: true,
		remote: item.repository.remote.clone(),
	};
	let context = context.clone();

	spawn_local(async move {
		match api.sync_repository(&href, &request).await {
			Ok(TaskResponse { task }) => {
				log::info!("started sync task `{task}` for repository `{name}`");
				context.add_alert(Alert::info(format!(
					"Sync started for repository \"{name}\"."
				)));
				context.reload();
			}
			Err(error) => {
				log::error!("unable to sync repository `{name}`: {error}");
				context.add_alert(Alert::danger(format!(
					"Repository \"{name}\" could not be synced."
				)));
			}
		}
	});
}

/// Starts deleting the repository and goes back to the list
fn delete<A>(api: A, item: &RepositoryDetails, context: &ActionContext)
where
	A: ConsoleApi,
{
	let name = item.repository.name.clone();
	let href = item.repository.pulp_href.clone();
	let context = context.clone();

	spawn_local(async move {
		match api.delete_repository(&href).await {
			Ok(TaskResponse { task }) => {
				log::info!("started delete task `{task}` for repository `{name}`");
				context.add_alert(Alert::success(format!(
					"Deletion started for repository \"{name}\"."
				)));
				context.navigate(&RepositoryRoute::List.to_string());
			}
			Err(error) => {
				log::error!("unable to delete repository `{name}`: {error}");
				context.add_alert(Alert::danger(format!(
					"Repository \"{name}\" could not be deleted."
				)));
			}
		}
	});
}
