use crate::imports::*;

/// A spinning loading indicator
#[component]
pub fn Spinner(
	/// Additional class names to apply to the spinner, if any.
	#[prop(into, optional)]
	class: MaybeSignal<String>,
) -> impl IntoView {
	view! { <span class={move || format!("spinner {}", class.get())}/> }
}

/// The placeholder shown in place of a page's content while it loads
#[component]
pub fn LoadingPage() -> impl IntoView {
	view! {
		<div class="fc-ct-ct full-width py-xxl gap-sm" aria-busy="true">
			<Spinner class="spinner-lg"/>
			<p class="txt-grey">"Loading..."</p>
		</div>
	}
}
