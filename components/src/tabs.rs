use leptos_router::A;

use crate::imports::*;

/// A single tab in the tab strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
	/// The id of the tab
	pub id: String,
	/// The display name of the tab
	pub name: String,
	/// Where the tab navigates to
	pub path: String,
}

/// The tab strip of a page. Tabs are plain links, the route decides which
/// one is active.
#[component]
pub fn Tabs(
	/// The tabs, in display order
	tab_items: Vec<TabItem>,
	/// The id of the active tab
	#[prop(into)]
	active: MaybeSignal<String>,
) -> impl IntoView {
	view! {
		<nav class="fr-fs-ct full-width tabs" role="tablist">
			{tab_items
				.into_iter()
				.map(|TabItem { id, name, path }| {
					let tab_id = id.clone();
					let active = active.clone();
					let is_active = Signal::derive(move || active.with(|active| *active == id));
					view! {
						<A href={path} class="tab-item txt-white">
							<span
								id={format!("tab-{tab_id}")}
								aria-controls={format!("panel-{tab_id}")}
								role="tab"
								class={move || if is_active.get() { "tab-label tab-selected" } else { "tab-label" }}
								aria-selected={move || is_active.get().to_string()}
							>
								{name}
							</span>
						</A>
					}
				})
				.collect_view()}
		</nav>
	}
}
