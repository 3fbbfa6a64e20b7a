use std::{borrow::Cow, fmt::Debug, rc::Rc};

use super::RouteParams;

/// What an action can see when deciding whether it is visible or enabled
#[derive(Debug)]
pub struct ActionState<'a, E> {
	/// The loaded entity. [`None`] while the page is still loading.
	pub entity: Option<&'a E>,
	/// The current route
	pub params: &'a RouteParams,
}

impl<E> Clone for ActionState<'_, E> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<E> Copy for ActionState<'_, E> {}

/// The kind of an alert raised by an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertVariant {
	/// Something went well
	#[default]
	Success,
	/// Something is in progress
	Info,
	/// Something went wrong
	Danger,
}

/// A message shown at the top of the page after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
	/// The kind of alert
	pub variant: AlertVariant,
	/// The message
	pub title: String,
}

impl Alert {
	/// A success alert
	pub fn success(title: impl Into<String>) -> Self {
		Self {
			variant: AlertVariant::Success,
			title: title.into(),
		}
	}

	/// An informational alert
	pub fn info(title: impl Into<String>) -> Self {
		Self {
			variant: AlertVariant::Info,
			title: title.into(),
		}
	}

	/// A failure alert
	pub fn danger(title: impl Into<String>) -> Self {
		Self {
			variant: AlertVariant::Danger,
			title: title.into(),
		}
	}
}

/// Runs a bound header action by id, returning whether it ran
type RunActionFn = Rc<dyn Fn(&str, &ActionContext) -> bool>;

/// The header actions bound to a loaded entity
#[derive(Clone)]
struct BoundActions {
	/// The ids of the visible actions, and whether each one is enabled
	ids: Rc<[(&'static str, bool)]>,
	/// Runs one of them
	run: RunActionFn,
}

/// The handle given to tab renderers and action handlers so they can act on
/// the page. Besides reloading, navigating and showing alerts, a context
/// bound with [`ActionContext::with_actions`] can run the page's header
/// actions on the loaded entity.
#[derive(Clone)]
pub struct ActionContext {
	/// Reloads the entity of the page
	reload: Rc<dyn Fn()>,
	/// Navigates to another URL
	navigate: Rc<dyn Fn(&str)>,
	/// Shows an alert on the page
	add_alert: Rc<dyn Fn(Alert)>,
	/// The header actions, once an entity is loaded
	actions: Option<BoundActions>,
}

impl ActionContext {
	/// Creates a context from its three operations
	pub fn new(
		reload: impl Fn() + 'static,
		navigate: impl Fn(&str) + 'static,
		add_alert: impl Fn(Alert) + 'static,
	) -> Self {
		Self {
			reload: Rc::new(reload),
			navigate: Rc::new(navigate),
			add_alert: Rc::new(add_alert),
			actions: None,
		}
	}

	/// Binds the visible header actions to the loaded entity, so that
	/// [`ActionContext::run_action`] can run them from inside a tab
	pub fn with_actions<E: 'static>(mut self, actions: Vec<VisibleAction<E>>, entity: E) -> Self {
		let ids = actions
			.iter()
			.map(|visible| (visible.action.id, visible.disabled_reason.is_none()))
			.collect();
		let run = move |id: &str, context: &ActionContext| {
			let Some(visible) = actions.iter().find(|visible| visible.action.id == id) else {
				log::debug!("action `{id}` is not available");
				return false;
			};
			if let Some(reason) = &visible.disabled_reason {
				log::debug!("action `{id}` is disabled: {reason}");
				return false;
			}
			visible.action.click(&entity, context);
			true
		};

		self.actions = Some(BoundActions {
			ids,
			run: Rc::new(run),
		});
		self
	}

	/// Whether the header action is visible and enabled right now
	pub fn can_run(&self, id: &str) -> bool {
		self.actions.as_ref().is_some_and(|actions| {
			actions
				.ids
				.iter()
				.any(|(action, enabled)| *action == id && *enabled)
		})
	}

	/// Runs a header action the same way its button would. Hidden or
	/// disabled actions are not run. Returns whether the action ran.
	pub fn run_action(&self, id: &str) -> bool {
		match &self.actions {
			Some(actions) => (actions.run)(id, self),
			None => false,
		}
	}

	/// Reloads the entity of the page
	pub fn reload(&self) {
		(self.reload)()
	}

	/// Navigates to another URL
	pub fn navigate(&self, url: &str) {
		(self.navigate)(url)
	}

	/// Shows an alert on the page
	pub fn add_alert(&self, alert: Alert) {
		(self.add_alert)(alert)
	}
}

impl Debug for ActionContext {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ActionContext").finish_non_exhaustive()
	}
}

/// Predicate deciding whether an action is shown
type VisibleFn<E> = Rc<dyn Fn(&ActionState<'_, E>) -> bool>;
/// Predicate returning the reason an action is disabled, if it is
type DisabledFn<E> = Rc<dyn Fn(&ActionState<'_, E>) -> Option<Cow<'static, str>>>;
/// The handler of an action
type ClickFn<E> = Rc<dyn Fn(&E, &ActionContext)>;

/// A self-contained header action: a label, a visibility rule, an optional
/// rule for disabling it and what to do when it is clicked.
pub struct ActionDescriptor<E> {
	/// Unique id of the action within the page
	pub id: &'static str,
	/// The label of the action
	pub title: Cow<'static, str>,
	/// Whether the action is shown
	visible: VisibleFn<E>,
	/// Why the action is disabled, if it is
	disabled: DisabledFn<E>,
	/// What happens when the action is clicked
	on_click: ClickFn<E>,
}

impl<E: 'static> ActionDescriptor<E> {
	/// Creates an action that is always visible and enabled
	pub fn new(
		id: &'static str,
		title: impl Into<Cow<'static, str>>,
		on_click: impl Fn(&E, &ActionContext) + 'static,
	) -> Self {
		Self {
			id,
			title: title.into(),
			visible: Rc::new(|_: &ActionState<'_, E>| true),
			disabled: Rc::new(|_: &ActionState<'_, E>| None),
			on_click: Rc::new(on_click),
		}
	}

	/// Only shows the action when the predicate holds
	pub fn visible_when(mut self, visible: impl Fn(&ActionState<'_, E>) -> bool + 'static) -> Self {
		self.visible = Rc::new(visible);
		self
	}

	/// Disables the action whenever the function returns a reason
	pub fn disabled_when(
		mut self,
		disabled: impl Fn(&ActionState<'_, E>) -> Option<Cow<'static, str>> + 'static,
	) -> Self {
		self.disabled = Rc::new(disabled);
		self
	}

	/// Whether the action is shown in the given state
	pub fn is_visible(&self, state: &ActionState<'_, E>) -> bool {
		(self.visible)(state)
	}

	/// Why the action is disabled in the given state, if it is
	pub fn disabled_reason(&self, state: &ActionState<'_, E>) -> Option<Cow<'static, str>> {
		(self.disabled)(state)
	}

	/// Runs the action
	pub fn click(&self, entity: &E, context: &ActionContext) {
		log::debug!("running action `{}`", self.id);
		(self.on_click)(entity, context)
	}
}

impl<E> Clone for ActionDescriptor<E> {
	fn clone(&self) -> Self {
		Self {
			id: self.id,
			title: self.title.clone(),
			visible: self.visible.clone(),
			disabled: self.disabled.clone(),
			on_click: self.on_click.clone(),
		}
	}
}

impl<E> Debug for ActionDescriptor<E> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ActionDescriptor")
			.field("id", &self.id)
			.field("title", &self.title)
			.finish_non_exhaustive()
	}
}

/// An action that passed its visibility check, along with its enabled state
#[derive(Debug, Clone)]
pub struct VisibleAction<E> {
	/// The action itself
	pub action: ActionDescriptor<E>,
	/// Why the action is disabled, [`None`] if it is enabled
	pub disabled_reason: Option<Cow<'static, str>>,
}

/// Filters the actions down to the visible ones, in order, and works out
/// whether each one is enabled.
pub fn visible_actions<E: 'static>(
	actions: &[ActionDescriptor<E>],
	state: &ActionState<'_, E>,
) -> Vec<VisibleAction<E>> {
	actions
		.iter()
		.filter(|action| action.is_visible(state))
		.map(|action| VisibleAction {
			action: action.clone(),
			disabled_reason: action.disabled_reason(state),
		})
		.collect()
}
