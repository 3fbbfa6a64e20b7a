use crate::imports::*;

/// The outermost container of a page
#[component]
pub fn ContainerMain(
	/// Additional class names to apply to the outer div, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// The Children of the component
	children: Children,
) -> impl IntoView {
	let class = move || format!("fc-fs-fs full-width full-height br-sm of-hidden {}", class.get());

	view! { <div class={class}>{children()}</div> }
}

/// The content of the active tab. Labelled by the tab of the same id in the
/// [`Tabs`] strip.
#[component]
pub fn TabPanel(
	/// The id of the tab this panel belongs to
	#[prop(into)]
	tab_id: String,
	/// Extra classes for the panel
	#[prop(into, optional)]
	class: String,
	/// The content of the tab
	children: Children,
) -> impl IntoView {
	view! {
		<section
			role="tabpanel"
			id={format!("panel-{tab_id}")}
			aria-labelledby={format!("tab-{tab_id}")}
			class={format!("fc-fs-fs full-width full-height ofy-auto {class}")}
		>
			{children()}
		</section>
	}
}
