use super::{
	filter_breadcrumbs,
	visible_actions,
	ActionContext,
	ActionDescriptor,
	ActionState,
	Breadcrumb,
	DetailPage,
	LoadError,
	PermissionContext,
	RouteParams,
	TabDescriptor,
	TabView,
	VisibleAction,
	TAB_PARAM,
};

/// The state of a detail page
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<E> {
	/// The user is not allowed to see the page
	Unauthorized,
	/// The entity is being loaded
	Loading,
	/// The entity has been loaded
	Loaded(E),
	/// The entity does not exist
	NotFound,
	/// The entity could not be loaded
	Failed(LoadError),
}

/// A load started by the controller. The result of running the page's query
/// for [`LoadTicket::params`] has to be handed back through
/// [`PageController::complete`] along with this ticket, which is how late
/// responses for a previous entity are told apart from the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
	/// The load generation this ticket belongs to
	generation: u64,
	/// The entity key at the time the load was started
	key: Option<String>,
	/// The route at the time the load was started
	params: RouteParams,
}

impl LoadTicket {
	/// The route to load the entity for
	pub fn params(&self) -> &RouteParams {
		&self.params
	}

	/// The key of the entity being loaded
	pub fn key(&self) -> Option<&str> {
		self.key.as_deref()
	}
}

/// Drives a [`DetailPage`]: keeps track of the route, decides when the entity
/// needs to be loaded, and guards against out of order responses.
///
/// The controller does no I/O of its own. Navigating returns a [`LoadTicket`]
/// when a load is needed, the caller runs the page's query (usually on the UI
/// event loop), and hands the result back with [`PageController::complete`].
pub struct PageController<P>
where
	P: DetailPage,
{
	/// The page configuration
	page: P,
	/// The current route
	params: RouteParams,
	/// The current state of the page
	state: PageState<P::Entity>,
	/// Incremented every time a load is started (or skipped)
	generation: u64,
	/// The generation of the load that is currently running, if any
	in_flight: Option<u64>,
	/// Whether the controller has been given a route yet
	started: bool,
	/// The header actions of the page
	actions: Vec<ActionDescriptor<P::Entity>>,
}

impl<P> PageController<P>
where
	P: DetailPage,
{
	/// Creates a controller for the page. Nothing happens until it is given a
	/// route with [`PageController::navigate`].
	pub fn new(page: P) -> Self {
		let actions = page.header_actions();
		Self {
			page,
			params: RouteParams::new(),
			state: PageState::Loading,
			generation: 0,
			in_flight: None,
			started: false,
			actions,
		}
	}

	/// The page configuration
	pub fn page(&self) -> &P {
		&self.page
	}

	/// The current route
	pub fn params(&self) -> &RouteParams {
		&self.params
	}

	/// The current state of the page
	pub fn state(&self) -> &PageState<P::Entity> {
		&self.state
	}

	/// The loaded entity, if any
	pub fn entity(&self) -> Option<&P::Entity> {
		match &self.state {
			PageState::Loaded(entity) => Some(entity),
			_ => None,
		}
	}

	/// The key of the entity in the current route
	pub fn key(&self) -> Option<&str> {
		self.params.get(P::KEY_PARAM)
	}

	/// Updates the route. Returns a ticket when the entity has to be (re)loaded,
	/// which only happens when the entity key changes. Switching tabs or
	/// sub-views is a purely local change.
	pub fn navigate(&mut self, params: RouteParams) -> Option<LoadTicket> {
		let key_changed = !self.started || params.get(P::KEY_PARAM) != self.key();
		self.params = params;

		if !key_changed {
			return None;
		}

		self.started = true;
		self.start_load()
	}

	/// Loads the entity again for the current route. Failed loads are never
	/// retried automatically, this is how a user asks for it.
	pub fn reload(&mut self) -> Option<LoadTicket> {
		self.started = true;
		self.start_load()
	}

	/// Checks the permission and, if allowed, moves into the loading state.
	/// Any load that is still running is invalidated either way.
	fn start_load(&mut self) -> Option<LoadTicket> {
		self.generation += 1;

		let allowed = self.page.condition(&PermissionContext {
			params: &self.params,
			entity: None,
		});
		if !allowed {
			log::info!(
				"{}: not authorized to view `{}`",
				self.page.display_name(),
				self.key().unwrap_or_default()
			);
			self.in_flight = None;
			self.state = PageState::Unauthorized;
			return None;
		}

		self.in_flight = Some(self.generation);
		self.state = PageState::Loading;

		Some(LoadTicket {
			generation: self.generation,
			key: self.key().map(str::to_owned),
			params: self.params.clone(),
		})
	}

	/// Applies the result of a load. Returns `false` (and changes nothing) if
	/// the ticket is stale, which happens when the route moved on to another
	/// entity, or the page was reloaded, while the load was running.
	pub fn complete(&mut self, ticket: LoadTicket, result: Result<P::Entity, LoadError>) -> bool {
		if self.in_flight != Some(ticket.generation) || ticket.key() != self.key() {
			log::debug!(
				"{}: discarding stale response for `{}`",
				self.page.display_name(),
				ticket.key().unwrap_or_default()
			);
			return false;
		}
		self.in_flight = None;

		self.state = match result {
			Ok(entity) => {
				let allowed = self.page.condition(&PermissionContext {
					params: &self.params,
					entity: Some(&entity),
				});
				if allowed {
					PageState::Loaded(entity)
				} else {
					PageState::Unauthorized
				}
			}
			Err(LoadError::NotFound) => PageState::NotFound,
			Err(error) => {
				log::error!(
					"{}: unable to load `{}`: {error}",
					self.page.display_name(),
					ticket.key().unwrap_or_default()
				);
				PageState::Failed(error)
			}
		};

		true
	}

	/// Runs the page's query for the ticket and applies the result
	pub async fn load(&mut self, ticket: LoadTicket) -> bool {
		let result = self.page.query(ticket.params()).await;
		self.complete(ticket, result)
	}

	/// Navigates and, if needed, loads the entity right away
	pub async fn visit(&mut self, params: RouteParams) -> &PageState<P::Entity> {
		if let Some(ticket) = self.navigate(params) {
			self.load(ticket).await;
		}
		&self.state
	}

	/// Whether a load is currently running
	pub fn is_loading(&self) -> bool {
		self.in_flight.is_some()
	}

	/// The tab selected by the route, falling back to the first tab
	pub fn active_tab(&self) -> &TabDescriptor {
		self.page.tabs().resolve(&self.params)
	}

	/// The view of the active tab selected by the route
	pub fn tab_view(&self) -> TabView {
		TabView::resolve(self.active_tab(), &self.params)
	}

	/// The route to switch to when selecting a tab. The page gets to clean up
	/// the route first, and the default tab is addressed without a `tab`
	/// parameter.
	pub fn tab_params(&self, tab_id: &str) -> RouteParams {
		let mut params = self.page.tab_update_params(self.params.clone());
		if self.page.tabs().is_default(tab_id) {
			params.remove(TAB_PARAM);
		} else {
			params.set(TAB_PARAM, tab_id);
		}
		params
	}

	/// Switches to a tab. Returns a ticket only if the page's route cleanup
	/// changed the entity key.
	pub fn select_tab(&mut self, tab_id: &str) -> Option<LoadTicket> {
		let params = self.tab_params(tab_id);
		self.navigate(params)
	}

	/// The breadcrumbs of the page, empty until the entity is loaded
	pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
		match self.entity() {
			Some(entity) => filter_breadcrumbs(self.page.breadcrumbs(
				entity,
				self.active_tab(),
				&self.params,
			)),
			None => Vec::new(),
		}
	}

	/// The title of the page: the entity's title once loaded, otherwise the
	/// key from the route
	pub fn title(&self) -> String {
		match self.entity() {
			Some(entity) => self.page.title(entity),
			None => self.key().unwrap_or_default().to_string(),
		}
	}

	/// Binds the visible header actions to the loaded entity, so that tabs
	/// can run them through the context. Before the entity is loaded the
	/// context is returned as is.
	pub fn action_context(&self, context: ActionContext) -> ActionContext {
		match self.entity() {
			Some(entity) => context.with_actions(self.visible_actions(), entity.clone()),
			None => context,
		}
	}

	/// The header actions that are visible right now, in order
	pub fn visible_actions(&self) -> Vec<VisibleAction<P::Entity>> {
		visible_actions(
			&self.actions,
			&ActionState {
				entity: self.entity(),
				params: &self.params,
			},
		)
	}
}

#[cfg(test)]
mod tests {
	use std::{
		borrow::Cow,
		cell::{Cell, RefCell},
		collections::HashMap,
		future::Future,
		rc::Rc,
	};

	use futures::channel::oneshot;

	use super::*;
	use crate::page::{
		standard_breadcrumbs,
		ActionContext,
		BreadcrumbInput,
		TabList,
	};

	#[derive(Debug, Clone, PartialEq)]
	struct Repo {
		name: String,
		hidden: bool,
	}

	fn repo(name: &str) -> Repo {
		Repo {
			name: name.to_string(),
			hidden: false,
		}
	}

	type Pending = oneshot::Receiver<Result<Repo, LoadError>>;

	#[derive(Clone)]
	struct TestPage {
		tabs: TabList,
		records: Rc<RefCell<Vec<Repo>>>,
		allowed: bool,
		failing: Rc<Cell<bool>>,
		calls: Rc<Cell<usize>>,
		pending: Rc<RefCell<HashMap<String, Pending>>>,
	}

	impl TestPage {
		fn new(records: &[&str]) -> Self {
			Self {
				tabs: TabList::new(vec![
					TabDescriptor::new("details", "Details"),
					TabDescriptor::new("access", "Access"),
					TabDescriptor::new("versions", "Versions")
						.with_sub_param("version", |version| format!("Version {version}")),
				])
				.unwrap(),
				records: Rc::new(RefCell::new(records.iter().map(|name| repo(name)).collect())),
				allowed: true,
				failing: Rc::default(),
				calls: Rc::default(),
				pending: Rc::default(),
			}
		}

		fn hold(&self, name: &str) -> oneshot::Sender<Result<Repo, LoadError>> {
			let (sender, receiver) = oneshot::channel();
			self.pending.borrow_mut().insert(name.to_string(), receiver);
			sender
		}
	}

	impl DetailPage for TestPage {
		type Entity = Repo;

		const KEY_PARAM: &'static str = "name";

		fn display_name(&self) -> &'static str {
			"TestPage"
		}

		fn tabs(&self) -> &TabList {
			&self.tabs
		}

		fn condition(&self, context: &PermissionContext<'_, Repo>) -> bool {
			self.allowed && !context.entity.is_some_and(|repo| repo.hidden)
		}

		fn query(&self, params: &RouteParams) -> impl Future<Output = Result<Repo, LoadError>> + 'static {
			self.calls.set(self.calls.get() + 1);

			let key = params.get("name").map(str::to_owned);
			let pending = key.as_ref().and_then(|key| self.pending.borrow_mut().remove(key));
			let failing = self.failing.get();
			let results = self
				.records
				.borrow()
				.iter()
				.filter(|repo| Some(&repo.name) == key.as_ref())
				.cloned()
				.collect::<Vec<_>>();

			async move {
				if let Some(pending) = pending {
					return pending
						.await
						.unwrap_or_else(|_| Err(LoadError::other(anyhow::anyhow!("cancelled"))));
				}
				if failing {
					return Err(LoadError::other(anyhow::anyhow!("connection reset")));
				}
				LoadError::expect_single(results)
			}
		}

		fn breadcrumbs(&self, entity: &Repo, tab: &TabDescriptor, params: &RouteParams) -> Vec<Option<Breadcrumb>> {
			let entity_params = RouteParams::new().with("name", entity.name.clone());
			standard_breadcrumbs(BreadcrumbInput {
				list_url: self.list_url(),
				list_name: "Repositories".to_string(),
				entity_url: self.detail_url(&entity_params),
				entity_name: entity.name.clone(),
				tab_url: self.detail_url(&entity_params.clone().with("tab", tab.id.clone())),
				tab,
				is_default_tab: self.tabs.is_default(&tab.id),
				view: TabView::resolve(tab, params),
			})
		}

		fn title(&self, entity: &Repo) -> String {
			entity.name.clone()
		}

		fn detail_url(&self, params: &RouteParams) -> String {
			let name = params.get("name").unwrap_or_default();
			match params.to_query_string(&["name"]) {
				query if query.is_empty() => format!("/repositories/{name}"),
				query => format!("/repositories/{name}?{query}"),
			}
		}

		fn list_url(&self) -> String {
			"/repositories".to_string()
		}

		fn error_title(&self) -> Cow<'static, str> {
			"Repository could not be displayed.".into()
		}

		fn header_actions(&self) -> Vec<ActionDescriptor<Repo>> {
			vec![
				ActionDescriptor::new("edit", "Edit", |_: &Repo, _: &ActionContext| {}),
				ActionDescriptor::new("delete", "Delete", |_: &Repo, _: &ActionContext| {})
					.visible_when(|state| state.entity.is_some()),
			]
		}

		fn tab_update_params(&self, mut params: RouteParams) -> RouteParams {
			params.remove("version");
			params
		}
	}

	fn route(name: &str) -> RouteParams {
		RouteParams::new().with("name", name)
	}

	#[tokio::test]
	async fn loads_the_entity_on_the_first_tab() {
		let page = TestPage::new(&["alpha"]);
		let mut controller = PageController::new(page.clone());

		assert_eq!(controller.visit(route("alpha")).await, &PageState::Loaded(repo("alpha")));
		assert_eq!(controller.active_tab().id, "details");
		assert_eq!(page.calls.get(), 1);
	}

	#[tokio::test]
	async fn unknown_tab_falls_back_to_first_tab() {
		let mut controller = PageController::new(TestPage::new(&["alpha"]));

		controller.visit(route("alpha").with("tab", "nope")).await;

		assert_eq!(controller.active_tab().id, "details");
		assert_eq!(controller.entity(), Some(&repo("alpha")));
	}

	#[tokio::test]
	async fn empty_lookup_is_not_found() {
		let mut controller = PageController::new(TestPage::new(&["alpha"]));

		assert_eq!(controller.visit(route("missing")).await, &PageState::NotFound);
		assert!(controller.breadcrumbs().is_empty());
	}

	#[tokio::test]
	async fn unauthorized_never_invokes_the_loader() {
		let page = TestPage {
			allowed: false,
			..TestPage::new(&["alpha"])
		};
		let mut controller = PageController::new(page.clone());

		assert_eq!(controller.visit(route("alpha")).await, &PageState::Unauthorized);
		assert_eq!(controller.reload(), None);
		assert_eq!(page.calls.get(), 0);
	}

	#[tokio::test]
	async fn entity_level_denial_is_unauthorized() {
		let page = TestPage::new(&[]);
		page.records.borrow_mut().push(Repo {
			name: "secret".to_string(),
			hidden: true,
		});
		let mut controller = PageController::new(page);

		assert_eq!(controller.visit(route("secret")).await, &PageState::Unauthorized);
		assert_eq!(controller.entity(), None);
	}

	#[tokio::test]
	async fn failures_are_not_retried_until_reload() {
		let page = TestPage::new(&["alpha"]);
		page.failing.set(true);
		let mut controller = PageController::new(page.clone());

		assert!(matches!(controller.visit(route("alpha")).await, PageState::Failed(LoadError::Other(_))));
		assert!(controller.visible_actions().iter().all(|visible| visible.action.id != "delete"));
		assert_eq!(page.calls.get(), 1);

		page.failing.set(false);
		controller.visit(route("alpha").with("tab", "access")).await;
		assert!(matches!(controller.state(), PageState::Failed(_)));
		assert_eq!(page.calls.get(), 1);

		let ticket = controller.reload().unwrap();
		assert!(controller.load(ticket).await);
		assert_eq!(controller.entity(), Some(&repo("alpha")));
		assert_eq!(page.calls.get(), 2);
	}

	#[tokio::test]
	async fn switching_tabs_does_not_reload() {
		let page = TestPage::new(&["alpha", "beta"]);
		let mut controller = PageController::new(page.clone());
		controller.visit(route("alpha")).await;

		assert_eq!(controller.select_tab("versions"), None);
		assert_eq!(controller.active_tab().id, "versions");
		controller.visit(route("alpha").with("tab", "access")).await;
		assert_eq!(page.calls.get(), 1);

		controller.visit(route("beta").with("tab", "access")).await;
		assert_eq!(page.calls.get(), 2);
		assert_eq!(controller.entity(), Some(&repo("beta")));
	}

	#[tokio::test]
	async fn loading_a_new_key_hides_the_previous_entity() {
		let page = TestPage::new(&["alpha", "beta"]);
		let mut controller = PageController::new(page);
		controller.visit(route("alpha")).await;

		let ticket = controller.navigate(route("beta")).unwrap();

		assert_eq!(ticket.key(), Some("beta"));
		assert_eq!(controller.state(), &PageState::Loading);
		assert_eq!(controller.entity(), None);
		assert!(controller.is_loading());
	}

	#[tokio::test]
	async fn sub_param_is_dropped_when_leaving_the_tab() {
		let mut controller = PageController::new(TestPage::new(&["alpha"]));
		controller
			.visit(route("alpha").with("tab", "versions").with("version", "3"))
			.await;

		controller.select_tab("access");
		assert_eq!(controller.params(), &route("alpha").with("tab", "access"));

		controller.select_tab("versions");
		assert_eq!(controller.params().get("version"), None);
		assert_eq!(controller.tab_view(), TabView::DefaultView);

		controller.select_tab("details");
		assert_eq!(controller.params(), &route("alpha"));
	}

	#[tokio::test]
	async fn late_response_for_a_previous_key_is_discarded() {
		let page = TestPage::new(&[]);
		let alpha_sender = page.hold("alpha");
		let beta_sender = page.hold("beta");
		let mut controller = PageController::new(page.clone());

		let alpha = controller.navigate(route("alpha")).unwrap();
		let alpha_load = page.query(alpha.params());

		let beta = controller.navigate(route("beta")).unwrap();
		let beta_load = page.query(beta.params());

		beta_sender.send(Ok(repo("beta"))).unwrap();
		let result = beta_load.await;
		assert!(controller.complete(beta, result));

		alpha_sender.send(Ok(repo("alpha"))).unwrap();
		let result = alpha_load.await;
		assert!(!controller.complete(alpha, result));

		assert_eq!(controller.state(), &PageState::Loaded(repo("beta")));
	}

	#[tokio::test]
	async fn response_superseded_by_a_reload_is_discarded() {
		let mut controller = PageController::new(TestPage::new(&["alpha"]));

		let first = controller.navigate(route("alpha")).unwrap();
		let second = controller.reload().unwrap();

		assert!(!controller.complete(first, Err(LoadError::NotFound)));
		assert_eq!(controller.state(), &PageState::Loading);
		assert!(controller.load(second).await);
		assert_eq!(controller.entity(), Some(&repo("alpha")));
	}

	#[tokio::test]
	async fn breadcrumbs_label_the_selected_version() {
		let mut controller = PageController::new(TestPage::new(&["alpha"]));
		controller.visit(route("alpha")).await;

		assert_eq!(controller.active_tab().id, "details");
		assert_eq!(
			controller.breadcrumbs(),
			vec![
				Breadcrumb::link("/repositories", "Repositories"),
				Breadcrumb::link("/repositories/alpha", "alpha"),
				Breadcrumb::text("Details"),
			]
		);

		controller
			.visit(route("alpha").with("tab", "versions").with("version", "3"))
			.await;

		assert_eq!(
			controller.breadcrumbs(),
			vec![
				Breadcrumb::link("/repositories", "Repositories"),
				Breadcrumb::link("/repositories/alpha", "alpha"),
				Breadcrumb::link("/repositories/alpha?tab=versions", "Versions"),
				Breadcrumb::text("Version 3"),
			]
		);
	}

	#[tokio::test]
	async fn header_actions_follow_the_entity() {
		let mut controller = PageController::new(TestPage::new(&["alpha"]));
		let ids = |controller: &PageController<TestPage>| {
			controller
				.visible_actions()
				.into_iter()
				.map(|visible| visible.action.id)
				.collect::<Vec<_>>()
		};

		let ticket = controller.navigate(route("alpha")).unwrap();
		assert_eq!(ids(&controller), ["edit"]);
		assert_eq!(controller.title(), "alpha");

		controller.load(ticket).await;
		assert_eq!(ids(&controller), ["edit", "delete"]);
	}

	#[tokio::test]
	async fn tabs_reach_the_header_actions_once_loaded() {
		let mut controller = PageController::new(TestPage::new(&["alpha"]));
		let reloads = Rc::new(Cell::new(0));
		let context = ActionContext::new(
			{
				let reloads = reloads.clone();
				move || reloads.set(reloads.get() + 1)
			},
			|_: &str| {},
			|_| {},
		);

		let ticket = controller.navigate(route("alpha")).unwrap();
		assert!(!controller.action_context(context.clone()).can_run("edit"));

		controller.load(ticket).await;
		let bound = controller.action_context(context);
		assert!(bound.can_run("delete"));
		assert!(bound.run_action("delete"));

		bound.reload();
		assert_eq!(reloads.get(), 1);
	}
}
