use leptos_router::A;

use crate::imports::*;

/// A full page message, shown in place of the content of a page that cannot
/// be displayed
#[component]
pub fn ErrorPage(
	/// The title of the error
	#[prop(into)]
	title: String,
	/// Additional content to show below the title, if any
	#[prop(optional)]
	content: Option<View>,
	/// A link to show below the message, as `(url, label)`
	#[prop(optional)]
	back_link: Option<(String, String)>,
) -> impl IntoView {
	view! {
		<div class="fc-ct-ct full-width py-xxl gap-md txt-center" role="alert">
			<h2 class="txt-lg txt-white">{title}</h2>
			{content}
			{back_link.map(|(url, label)| view! {
				<A href={url} class="btn btn-primary">{label}</A>
			})}
		</div>
	}
}

/// Shown when the entity of a page does not exist
#[component]
pub fn NotFoundPage(
	/// Where to go back to
	#[prop(into)]
	list_url: String,
) -> impl IntoView {
	view! {
		<ErrorPage
			title="Not found"
			content={view! {
				<p class="txt-grey">"The resource you are looking for does not exist or has been removed."</p>
			}.into_view()}
			back_link={(list_url, "Back to the list".to_string())}
		/>
	}
}

/// Shown when the user is not allowed to see a page
#[component]
pub fn AccessDenied() -> impl IntoView {
	view! {
		<ErrorPage
			title="You do not have permission to view this resource."
			content={view! {
				<small class="txt-grey">
					"If you think this is a mistake, contact your administrator"
				</small>
			}.into_view()}
		/>
	}
}
