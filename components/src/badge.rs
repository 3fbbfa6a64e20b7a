use crate::imports::*;

/// A small colored label, used for statuses like the state of a task
#[component]
pub fn StatusBadge(
	/// The text in the badge
	#[prop(into)]
	text: String,
	/// The color of the badge
	#[prop(into, optional)]
	color: MaybeSignal<Color>,
	/// Any additional classes to apply to the badge
	#[prop(into, optional)]
	class: String,
) -> impl IntoView {
	view! {
		<span class={move || {
			format!(
				"status-badge px-xs br-sm txt-xxs txt-medium bg-{} {class}",
				color.get().as_css_name(),
			)
		}}>{text}</span>
	}
}
