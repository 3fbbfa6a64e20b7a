use leptos_router::A;

use crate::imports::*;

/// Sets the Text Size of the Page Title
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PageTitleVariant {
	/// Large text
	#[default]
	Heading,
	/// Medium Text
	SubHeading,
	/// Small Text
	Text,
}

impl PageTitleVariant {
	/// The css classes for the variant
	const fn as_css_classes(&self) -> &'static str {
		match self {
			Self::Heading => "txt-xl",
			Self::SubHeading => "txt-md txt-white",
			Self::Text => "txt-sm txt-white",
		}
	}
}

/// Contains all the page titles, and wraps around individual <PageTitle />
/// components
#[component]
pub fn PageTitleContainer(
	/// Additional class names to apply to the outer div, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// The Children of the component
	children: Children,
) -> impl IntoView {
	let class = move || format!("p-xxs fr-fs-ct {}", class.get());

	view! { <nav class={class}>{children()}</nav> }
}

/// A single page title. Navigates to `to` when given, otherwise it is plain
/// text.
#[component]
pub fn PageTitle(
	/// Whether to put an arrow after the title, implying that there are more
	/// titles to follow
	#[prop(optional)]
	separator: bool,
	/// The page to navigate to
	#[prop(optional_no_strip)]
	to: Option<String>,
	/// Title Text Style
	#[prop(into, optional)]
	variant: MaybeSignal<PageTitleVariant>,
	/// The Children of the component
	children: Children,
) -> impl IntoView {
	let class = move || format!("p-xxs fr-fs-ct {}", variant.get().as_css_classes());

	let title = match to {
		Some(to) => view! { <A href={to} class="btn-plain txt-white">{children()}</A> }.into_view(),
		None => view! { <span>{children()}</span> }.into_view(),
	};

	view! {
		<span class={class}>{title}</span>
		{separator.then(|| view! { <span class="mx-xs txt-grey">"/"</span> })}
	}
}

/// Renders a trail of breadcrumbs. The last one is shown as the heading of
/// the page.
#[component]
pub fn Breadcrumbs(
	/// The breadcrumbs, in order
	#[prop(into)]
	crumbs: Vec<Breadcrumb>,
) -> impl IntoView {
	let count = crumbs.len();

	view! {
		<PageTitleContainer>
			{crumbs
				.into_iter()
				.enumerate()
				.map(|(index, Breadcrumb { url, name })| {
					let last = index + 1 == count;
					let variant = if last {
						PageTitleVariant::Text
					} else {
						PageTitleVariant::SubHeading
					};
					view! {
						<PageTitle to={url} variant={variant} separator={!last}>
							{name}
						</PageTitle>
					}
				})
				.collect_view()}
		</PageTitleContainer>
	}
}
