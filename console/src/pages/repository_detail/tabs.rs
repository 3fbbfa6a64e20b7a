use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use super::*;
use crate::prelude::*;

/// A labelled field of the details tab
#[component]
fn DetailField(
	/// The label of the field
	#[prop(into)]
	label: String,
	/// The value of the field
	children: Children,
) -> impl IntoView {
	view! {
		<div class="fr-fs-fs full-width gap-md py-xs ul-light">
			<span class="txt-grey txt-sm w-25">{label}</span>
			<span class="txt-white txt-sm">{children()}</span>
		</div>
	}
}

/// The general settings of the repository
#[component]
pub fn DetailsTab(
	/// The repository
	item: RepositoryDetails,
	/// Runs the header actions and reloads the page
	context: ActionContext,
) -> impl IntoView {
	let RepositoryDetails {
		repository,
		distro_base_path,
		..
	} = item;

	let retained = match repository.retain_repo_versions {
		Some(count) => count.to_string(),
		None => "All".to_owned(),
	};
	let labels = if repository.pulp_labels.is_empty() {
		"None".to_owned()
	} else {
		repository
			.pulp_labels
			.iter()
			.map(|(key, value)| format!("{key}: {value}"))
			.collect::<Vec<_>>()
			.join(", ")
	};

	let edit = context.can_run(EDIT_ACTION).then(|| {
		view! {
			<Button
				variant={ButtonVariant::Plain}
				on_click={move |_: ev::MouseEvent| {
					context.run_action(EDIT_ACTION);
				}}
			>
				"Edit settings"
			</Button>
		}
	});

	view! {
		<div class="fc-fs-fs full-width">
			<div class="fr-fe-ct full-width">{edit}</div>
			<DetailField label="Repository name">{repository.name}</DetailField>
			<DetailField label="Description">
				{repository.description.unwrap_or_else(|| "None".to_owned())}
			</DetailField>
			<DetailField label="Retained version count">{retained}</DetailField>
			<DetailField label="Distribution">
				{distro_base_path.unwrap_or_else(|| "None".to_owned())}
			</DetailField>
			<DetailField label="Labels">{labels}</DetailField>
			<DetailField label="Private">{if repository.private { "Yes" } else { "No" }}</DetailField>
			<DetailField label="Created">
				{repository.pulp_created.map(format_time).unwrap_or_default()}
			</DetailField>
			<DetailField label="Remote">
				{repository.remote.unwrap_or_else(|| "None".to_owned())}
			</DetailField>
		</div>
	}
}

/// Who may do what with the repository. Selecting a group narrows the view
/// down to that group.
#[component]
pub fn AccessTab(
	/// The repository
	item: RepositoryDetails,
	/// Runs the header actions and reloads the page
	context: ActionContext,
) -> impl IntoView {
	let query = use_query_map();
	let group = move || query.with(|query| query.get(GROUP_PARAM).cloned());
	let name = item.repository.name.clone();
	let all_groups = RepositoryRoute::Detail { name }
		.with_query(&RouteParams::new().with(TAB_PARAM, tab::ACCESS));

	let permissions = item
		.my_permissions
		.into_iter()
		.map(|permission| view! { <li class="txt-sm txt-white">{permission}</li> })
		.collect_view();

	view! {
		<div class="fc-fs-fs full-width gap-md">
			{move || match group() {
				Some(group) => view! {
					<div class="fr-sb-ct full-width">
						<h3 class="txt-md txt-white">{format!("Group {group}")}</h3>
						<A href={all_groups.clone()} class="txt-primary txt-sm">"All groups"</A>
					</div>
				}
				.into_view(),
				None => ().into_view(),
			}}
			<div class="fr-sb-ct full-width">
				<h4 class="txt-sm txt-grey">"Your permissions on this repository"</h4>
				<Button variant={ButtonVariant::Plain} on_click={move |_: ev::MouseEvent| context.reload()}>
					"Refresh"
				</Button>
			</div>
			<ul class="fc-fs-fs gap-xxs">{permissions}</ul>
		</div>
	}
}

/// The collection versions in the repository, and where they are served from
#[component]
pub fn CollectionVersionsTab(
	/// The repository
	item: RepositoryDetails,
	/// Runs the header actions and reloads the page
	context: ActionContext,
) -> impl IntoView {
	let served_from = match item.distro_base_path {
		Some(base_path) => format!("Collections in this repository are served from `{base_path}`."),
		None => "This repository is not distributed.".to_owned(),
	};
	let latest = item
		.repository
		.latest_version_href
		.as_deref()
		.and_then(version_from_href);

	let sync = context.can_run(SYNC_ACTION).then(|| {
		view! {
			<Button
				on_click={move |_: ev::MouseEvent| {
					context.run_action(SYNC_ACTION);
				}}
			>
				"Sync now"
			</Button>
		}
	});

	view! {
		<div class="fc-fs-fs full-width gap-sm">
			<div class="fr-sb-ct full-width">
				<p class="txt-sm txt-white">{served_from}</p>
				{sync}
			</div>
			{latest.map(|version| view! {
				<p class="txt-sm txt-grey">{format!("Showing the content of version {version}.")}</p>
			})}
		</div>
	}
}

/// The versions of the repository, newest first. Selecting one shows that
/// version.
#[component]
pub fn RepositoryVersionsTab(
	/// The repository
	item: RepositoryDetails,
	/// Runs the header actions and reloads the page
	context: ActionContext,
) -> impl IntoView {
	let query = use_query_map();
	let selected = move || query.with(|query| query.get(REPOSITORY_VERSION_PARAM).cloned());
	let name = item.repository.name.clone();
	let latest = item
		.repository
		.latest_version_href
		.as_deref()
		.and_then(version_from_href);

	let version_path = {
		let name = name.clone();
		move |version: Option<u64>| {
			let params = RouteParams::new().with(TAB_PARAM, tab::REPOSITORY_VERSIONS);
			let params = match version {
				Some(version) => params.with(REPOSITORY_VERSION_PARAM, version.to_string()),
				None => params,
			};
			RepositoryRoute::Detail { name: name.clone() }.with_query(&params)
		}
	};

	let versions = retained_versions(latest, item.repository.retain_repo_versions)
		.into_iter()
		.map(|version| {
			let label = if Some(version) == latest {
				format!("Version {version} (latest)")
			} else {
				format!("Version {version}")
			};
			view! {
				<li>
					<A href={version_path(Some(version))} class="txt-primary txt-sm">{label}</A>
				</li>
			}
		})
		.collect_view();
	let all_versions = version_path(None);

	view! {
		<div class="fc-fs-fs full-width gap-md">
			{move || match selected() {
				Some(version) => view! {
					<div class="fr-sb-ct full-width">
						<h3 class="txt-md txt-white">{format!("Version {version}")}</h3>
						<A href={all_versions.clone()} class="txt-primary txt-sm">"All versions"</A>
					</div>
				}
				.into_view(),
				None => ().into_view(),
			}}
			<ul class="fc-fs-fs gap-xxs">{versions}</ul>
			<Button variant={ButtonVariant::Plain} on_click={move |_: ev::MouseEvent| context.reload()}>
				"Refresh"
			</Button>
		</div>
	}
}

/// When the repository was last synced, and how that went
#[component]
pub fn LastSyncDetails(
	/// The last sync of the repository
	task: SyncTask,
) -> impl IntoView {
	let color = match task.state {
		TaskState::Completed => Color::Success,
		TaskState::Failed => Color::Error,
		TaskState::Canceled | TaskState::Canceling | TaskState::Skipped => Color::Warning,
		TaskState::Waiting | TaskState::Running => Color::Info,
	};
	let finished = task
		.finished_at
		.map(format_time)
		.unwrap_or_else(|| "never".to_owned());

	view! {
		<div class="fr-fs-ct gap-xs txt-sm txt-grey">
			<span>{format!("Last updated from registry {finished}")}</span>
			<StatusBadge text={task.state.label()} color={color}/>
		</div>
	}
}

/// Formats a timestamp for display
fn format_time(time: OffsetDateTime) -> String {
	time.format(&Rfc3339).unwrap_or_else(|_| time.to_string())
}

/// The versions still kept by a repository, newest first. Only the last
/// `retain` versions are kept when a retention is set, and at most
/// [`MAX_LISTED_VERSIONS`] of them are listed.
pub(super) fn retained_versions(latest: Option<u64>, retain: Option<u32>) -> Vec<u64> {
	let Some(latest) = latest else {
		return Vec::new();
	};
	let kept = match retain {
		Some(retain) if retain > 0 => u64::from(retain).min(MAX_LISTED_VERSIONS),
		_ => MAX_LISTED_VERSIONS,
	};
	let oldest = latest.saturating_sub(kept - 1);
	(oldest..=latest).rev().collect()
}
