use std::{borrow::Cow, future::Future, rc::Rc};

mod actions;
mod query;
mod tabs;

pub use self::{actions::*, query::*, tabs::*};
use crate::prelude::*;

/// The route parameter selecting a version on the versions tab
pub const REPOSITORY_VERSION_PARAM: &str = "repositoryVersion";
/// The route parameter selecting a group on the access tab
pub const GROUP_PARAM: &str = "group";
/// The most repository versions listed on the versions tab
pub const MAX_LISTED_VERSIONS: u64 = 20;

/// The ids of the tabs of the repository page
pub mod tab {
	/// General settings
	pub const DETAILS: &str = "details";
	/// Owners and groups
	pub const ACCESS: &str = "access";
	/// The collection versions in the repository
	pub const COLLECTION_VERSIONS: &str = "collection-versions";
	/// The versions of the repository
	pub const REPOSITORY_VERSIONS: &str = "repository-versions";
}

/// The tabs of the repository page
fn repository_tabs() -> Result<TabList, ConfigError> {
	TabList::new(vec![
		TabDescriptor::new(tab::DETAILS, "Details"),
		TabDescriptor::new(tab::ACCESS, "Access")
			.with_sub_param(GROUP_PARAM, |group| format!("Group {group}")),
		TabDescriptor::new(tab::COLLECTION_VERSIONS, "Collection versions"),
		TabDescriptor::new(tab::REPOSITORY_VERSIONS, "Versions")
			.with_sub_param(REPOSITORY_VERSION_PARAM, |version| format!("Version {version}")),
	])
}

/// The detail page of a repository, addressed by its name
#[derive(Clone)]
pub struct RepositoryDetailPage<A> {
	/// The API the repository is loaded from
	api: A,
	/// What the current user may do
	user: Rc<UserCapabilities>,
	/// The tabs of the page
	tabs: Rc<TabList>,
}

impl<A> RepositoryDetailPage<A>
where
	A: ConsoleApi,
{
	/// Creates the page for the given user
	pub fn new(api: A, user: UserCapabilities) -> Result<Self, ConfigError> {
		Ok(Self {
			api,
			user: Rc::new(user),
			tabs: Rc::new(repository_tabs()?),
		})
	}
}

impl<A> DetailPage for RepositoryDetailPage<A>
where
	A: ConsoleApi,
{
	type Entity = RepositoryDetails;

	const KEY_PARAM: &'static str = REPOSITORY_NAME_PARAM;

	fn display_name(&self) -> &'static str {
		"repository"
	}

	fn tabs(&self) -> &TabList {
		&self.tabs
	}

	fn condition(&self, _: &PermissionContext<'_, RepositoryDetails>) -> bool {
		self.user.has(permission::VIEW_REPOSITORY)
	}

	fn query(
		&self,
		params: &RouteParams,
	) -> impl Future<Output = Result<RepositoryDetails, LoadError>> + 'static {
		let api = self.api.clone();
		let name = params.get(REPOSITORY_NAME_PARAM).map(str::to_owned);

		async move {
			let name = name.ok_or(LoadError::NotFound)?;
			load_repository(&api, &name).await
		}
	}

	fn breadcrumbs(
		&self,
		entity: &RepositoryDetails,
		tab: &TabDescriptor,
		params: &RouteParams,
	) -> Vec<Option<Breadcrumb>> {
		let name = entity.repository.name.clone();
		let detail = RouteParams::new().with(REPOSITORY_NAME_PARAM, name.clone());

		standard_breadcrumbs(BreadcrumbInput {
			list_url: self.list_url(),
			list_name: "Repositories".to_owned(),
			entity_url: self.detail_url(&detail),
			entity_name: name,
			tab_url: self.detail_url(&detail.clone().with(TAB_PARAM, tab.id.clone())),
			tab,
			is_default_tab: self.tabs.is_default(&tab.id),
			view: TabView::resolve(tab, params),
		})
	}

	fn title(&self, entity: &RepositoryDetails) -> String {
		entity.repository.name.clone()
	}

	fn detail_url(&self, params: &RouteParams) -> String {
		RepositoryRoute::Detail {
			name: params
				.get(REPOSITORY_NAME_PARAM)
				.unwrap_or_default()
				.to_owned(),
		}
		.with_query(params)
	}

	fn list_url(&self) -> String {
		RepositoryRoute::List.to_string()
	}

	fn error_title(&self) -> Cow<'static, str> {
		"The repository could not be displayed.".into()
	}

	fn header_actions(&self) -> Vec<ActionDescriptor<RepositoryDetails>> {
		repository_actions(&self.api, &self.user)
	}

	fn tab_update_params(&self, params: RouteParams) -> RouteParams {
		params.without_sub_params(&self.tabs)
	}
}

impl<A> DetailPageView for RepositoryDetailPage<A>
where
	A: ConsoleApi,
{
	fn render_tab(
		&self,
		tab: &TabDescriptor,
		entity: &RepositoryDetails,
		context: &ActionContext,
	) -> View {
		let item = entity.clone();
		let context = context.clone();
		match tab.id.as_ref() {
			tab::DETAILS => view! { <DetailsTab item={item} context={context}/> }.into_view(),
			tab::ACCESS => view! { <AccessTab item={item} context={context}/> }.into_view(),
			tab::COLLECTION_VERSIONS => {
				view! { <CollectionVersionsTab item={item} context={context}/> }.into_view()
			}
			tab::REPOSITORY_VERSIONS => {
				view! { <RepositoryVersionsTab item={item} context={context}/> }.into_view()
			}
			id => {
				log::warn!("repository page has no tab `{id}`");
				().into_view()
			}
		}
	}

	fn header_details(&self, entity: Option<&RepositoryDetails>) -> View {
		match entity.and_then(|item| item.repository.last_sync_task.clone()) {
			Some(task) => view! { <LastSyncDetails task={task}/> }.into_view(),
			None => ().into_view(),
		}
	}
}

/// The route view of a repository. Loads the current user first, since the
/// page is configured with what they may do.
#[component]
pub fn RepositoryDetail() -> impl IntoView {
	let api = expect_context::<HttpConsoleApi>();
	let user = create_local_resource(|| (), {
		let api = api.clone();
		move |_| {
			let api = api.clone();
			async move {
				api.current_user()
					.await
					.map(|user| UserCapabilities::from(&user))
					.map_err(|error| error.to_string())
			}
		}
	});

	move || match user.get() {
		None => view! { <LoadingPage/> }.into_view(),
		Some(Err(error)) => {
			log::error!("unable to load the current user: {error}");
			view! { <ErrorPage title="Your permissions could not be loaded."/> }.into_view()
		}
		Some(Ok(user)) => match RepositoryDetailPage::new(api.clone(), user) {
			Ok(page) => view! { <PageWithTabs page={page}/> }.into_view(),
			Err(error) => {
				log::error!("invalid repository page: {error}");
				view! { <ErrorPage title="The repository could not be displayed."/> }.into_view()
			}
		},
	}
}
