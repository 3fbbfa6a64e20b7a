mod header;

use leptos_router::{use_location, use_navigate, use_params_map};

pub use self::header::*;
use crate::imports::*;

/// The view half of a [`DetailPage`]: how the tabs and the header summary of
/// the page are rendered.
pub trait DetailPageView: DetailPage {
	/// Renders the content of a tab for the loaded entity. Must handle every
	/// tab of [`DetailPage::tabs`].
	fn render_tab(&self, tab: &TabDescriptor, entity: &Self::Entity, context: &ActionContext)
		-> View;

	/// A summary of the entity shown in the header. Called with [`None`] while
	/// the entity is loading, in which case nothing should be rendered.
	fn header_details(&self, _entity: Option<&Self::Entity>) -> View {
		().into_view()
	}
}

/// A detail page with tabs. Everything about the page comes from its
/// configuration: the route decides the entity and the active tab, the
/// permission check gates the load, and the state of the load decides whether
/// the content, a loader, or an error is shown.
#[component]
pub fn PageWithTabs<P>(
	/// The page configuration
	page: P,
) -> impl IntoView
where
	P: DetailPageView,
{
	let location = use_location();
	let path_params = use_params_map();
	let route_params = Signal::derive(move || {
		let mut params = location
			.search
			.with(|search| RouteParams::from_query(search))
			.unwrap_or_else(|error| {
				log::warn!("unable to parse the query string: {error}");
				RouteParams::new()
			});
		if let Some(key) = path_params.with(|path_params| path_params.get(P::KEY_PARAM).cloned()) {
			params.set(P::KEY_PARAM, key);
		}
		params
	});

	let controller = create_rw_signal(PageController::new(page.clone()));
	let alerts = create_rw_signal(Vec::<Alert>::new());

	create_effect({
		let page = page.clone();
		move |_| {
			let params = route_params.get();
			let ticket = controller
				.try_update(|controller| controller.navigate(params))
				.flatten();
			if let Some(ticket) = ticket {
				alerts.set(Vec::new());
				start_load(controller, &page, ticket);
			}
		}
	});

	let navigate = use_navigate();
	let context = ActionContext::new(
		{
			let page = page.clone();
			move || {
				let ticket = controller.try_update(PageController::reload).flatten();
				if let Some(ticket) = ticket {
					start_load(controller, &page, ticket);
				}
			}
		},
		move |url: &str| navigate(url, Default::default()),
		move |alert| alerts.update(|alerts| alerts.push(alert)),
	);

	let body = move || {
		let state = controller.with(|controller| controller.state().clone());
		match state {
			PageState::Loading => view! {
				<PageHeader
					title={controller.with(PageController::title)}
					details={page.header_details(None)}
					alerts={alerts}
				/>
				<section class="fc-fs-fs full-width full-height ofy-auto" aria-busy="true">
					<LoadingPage/>
				</section>
			}
			.into_view(),
			PageState::Loaded(entity) => loaded_view(controller, &page, &entity, &context, alerts),
			state => status_view(&state, page.list_url(), page.error_title().into_owned(), {
				let context = context.clone();
				move || context.reload()
			}),
		}
	};

	view! { <ContainerMain class="full-width full-height mb-md">{body}</ContainerMain> }
}

/// The full page shown instead of the content when there is no entity to
/// show. Renders nothing while loading or once loaded.
fn status_view<E>(
	state: &PageState<E>,
	list_url: String,
	error_title: String,
	retry: impl Fn() + 'static,
) -> View {
	match state {
		PageState::Unauthorized => view! { <AccessDenied/> }.into_view(),
		PageState::NotFound => view! { <NotFoundPage list_url={list_url}/> }.into_view(),
		PageState::Failed(_) => view! {
			<ErrorPage
				title={error_title}
				content={view! {
					<Button variant={ButtonVariant::Plain} on_click={move |_: ev::MouseEvent| retry()}>
						"Try again"
					</Button>
				}
				.into_view()}
				back_link={(list_url, "Back to the list".to_string())}
			/>
		}
		.into_view(),
		PageState::Loading | PageState::Loaded(_) => ().into_view(),
	}
}

/// Runs the page's query for the ticket in the background and hands the
/// result back to the controller, which drops it if it is stale by then.
fn start_load<P>(controller: RwSignal<PageController<P>>, page: &P, ticket: LoadTicket)
where
	P: DetailPage,
{
	log::debug!(
		"{}: loading `{}`",
		page.display_name(),
		ticket.key().unwrap_or_default()
	);
	let load = page.query(ticket.params());
	spawn_local(async move {
		let result = load.await;
		// The page may have been unmounted while loading
		_ = controller.try_update(|controller| controller.complete(ticket, result));
	});
}

/// The header, tab strip and content of a page with a loaded entity
fn loaded_view<P>(
	controller: RwSignal<PageController<P>>,
	page: &P,
	entity: &P::Entity,
	context: &ActionContext,
	alerts: RwSignal<Vec<Alert>>,
) -> View
where
	P: DetailPageView,
{
	let (title, crumbs, tab, tab_items, actions, context) = controller.with(|controller| {
		let context = controller.action_context(context.clone());
		let tab_items = page
			.tabs()
			.iter()
			.map(|tab| TabItem {
				id: tab.id.to_string(),
				name: tab.name.to_string(),
				path: page.detail_url(&controller.tab_params(&tab.id)),
			})
			.collect::<Vec<_>>();
		let actions = controller
			.visible_actions()
			.into_iter()
			.map(|VisibleAction { action, disabled_reason }| {
				let entity = entity.clone();
				let context = context.clone();
				HeaderAction {
					id: action.id,
					title: action.title.to_string(),
					disabled_reason: disabled_reason.map(|reason| reason.to_string()),
					on_click: Callback::new(move |_| action.click(&entity, &context)),
				}
			})
			.collect::<Vec<_>>();

		(
			controller.title(),
			controller.breadcrumbs(),
			controller.active_tab().clone(),
			tab_items,
			actions,
			context,
		)
	});
	let content = page.render_tab(&tab, entity, &context);

	view! {
		<PageHeader
			title={title}
			crumbs={crumbs}
			details={page.header_details(Some(entity))}
			actions={actions}
			alerts={alerts}
		/>
		<Tabs tab_items={tab_items} active={tab.id.to_string()}/>
		<TabPanel tab_id={tab.id.to_string()} class="px-xl py-lg gap-md">{content}</TabPanel>
	}
	.into_view()
}

#[cfg(test)]
mod tests {
	use leptos::ssr::render_to_string;
	use leptos_router::{Router, RouterIntegrationContext, ServerIntegration};

	use super::*;

	fn render_status(state: PageState<()>) -> String {
		render_to_string(move || {
			provide_context(RouterIntegrationContext::new(ServerIntegration {
				path: "http://localhost/repositories/community".to_owned(),
			}));
			view! {
				<Router>
					{status_view(
						&state,
						"/repositories".to_owned(),
						"Unable to load the repository".to_owned(),
						|| (),
					)}
				</Router>
			}
		})
		.to_string()
	}

	#[test]
	fn unauthorized_renders_access_denied() {
		let html = render_status(PageState::Unauthorized);

		assert!(html.contains("You do not have permission to view this resource."));
		assert!(!html.contains("Try again"));
	}

	#[test]
	fn not_found_links_back_to_the_list() {
		let html = render_status(PageState::NotFound);

		assert!(html.contains("Not found"));
		assert!(html.contains("href=\"/repositories\""));
		assert!(!html.contains("You do not have permission"));
	}

	#[test]
	fn failures_offer_a_retry() {
		let html = render_status(PageState::Failed(LoadError::other(std::io::Error::new(
			std::io::ErrorKind::ConnectionRefused,
			"connection refused",
		))));

		assert!(html.contains("Unable to load the repository"));
		assert!(html.contains("Try again"));
		assert!(!html.contains("Not found"));
	}

	#[test]
	fn loading_and_loaded_render_no_status() {
		for state in [PageState::Loading, PageState::Loaded(())] {
			let html = render_status(state);

			assert!(!html.contains("role=\"alert\""));
		}
	}
}
