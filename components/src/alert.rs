use crate::imports::*;

/// Shows the alerts raised on a page. Each alert can be dismissed on its own.
#[component]
pub fn AlertList(
	/// The alerts currently shown
	alerts: RwSignal<Vec<Alert>>,
) -> impl IntoView {
	move || {
		alerts
			.get()
			.into_iter()
			.enumerate()
			.map(|(index, Alert { variant, title })| {
				let dismiss = move |_: ev::MouseEvent| {
					alerts.update(|alerts| {
						if index < alerts.len() {
							alerts.remove(index);
						}
					})
				};
				view! {
					<div class={format!("fr-sb-ct full-width px-md py-sm br-sm bg-{}", Color::from_alert(variant))}>
						<p>{title}</p>
						<button type="button" class="btn-plain txt-white" on:click={dismiss}>"x"</button>
					</div>
				}
			})
			.collect_view()
	}
}
