use crate::imports::*;

/// A header action, ready to be rendered
#[derive(Clone)]
pub struct HeaderAction {
	/// The id of the action
	pub id: &'static str,
	/// The label of the action
	pub title: String,
	/// Why the action is disabled, [`None`] if it is enabled
	pub disabled_reason: Option<String>,
	/// Runs the action
	pub on_click: Callback<()>,
}

/// The header of a detail page: breadcrumbs, title, a summary of the entity,
/// the row of actions and any alerts raised by those actions.
#[component]
pub fn PageHeader(
	/// The title of the page
	#[prop(into)]
	title: String,
	/// The breadcrumbs above the title
	#[prop(optional)]
	crumbs: Vec<Breadcrumb>,
	/// A summary of the entity shown below the title, if any
	#[prop(optional)]
	details: Option<View>,
	/// The visible header actions, in order
	#[prop(optional)]
	actions: Vec<HeaderAction>,
	/// The alerts raised on the page
	alerts: RwSignal<Vec<Alert>>,
) -> impl IntoView {
	let actions = actions
		.into_iter()
		.map(
			|HeaderAction {
			     id,
			     title,
			     disabled_reason,
			     on_click,
			 }| {
				let disabled = disabled_reason.is_some();
				view! {
					<Button
						class={format!("action-{id}")}
						disabled={disabled}
						tooltip={disabled_reason}
						on_click={move |_: ev::MouseEvent| on_click.call(())}
					>
						{title}
					</Button>
				}
			},
		)
		.collect_view();

	view! {
		<header class="fc-fs-fs full-width px-xl py-md gap-xs bg-secondary-light">
			<div class="fr-sb-ct full-width">
				<div class="fc-fs-fs gap-xxs">
					<Breadcrumbs crumbs={crumbs}/>
					<h1 class="txt-xl txt-white">{title}</h1>
					{details}
				</div>
				<div class="fr-fe-ct gap-sm">{actions}</div>
			</div>
			<AlertList alerts={alerts}/>
		</header>
	}
}
