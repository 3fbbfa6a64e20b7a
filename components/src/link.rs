use crate::imports::*;

/// The look of a [`Button`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
	/// A button with a background
	#[default]
	Contained,
	/// A button that looks like a link
	Plain,
}

/// A button that runs a handler when clicked
#[component]
pub fn Button(
	/// The handler to run when clicked
	#[prop(into)]
	on_click: Callback<ev::MouseEvent>,
	/// Whether the button can be clicked
	#[prop(into, optional)]
	disabled: MaybeSignal<bool>,
	/// Shown on hover, usually the reason the button is disabled
	#[prop(optional_no_strip)]
	tooltip: Option<String>,
	/// The color of the button
	#[prop(into, optional)]
	color: MaybeSignal<Color>,
	/// The look of the button
	#[prop(into, optional)]
	variant: MaybeSignal<ButtonVariant>,
	/// Additional class names to apply to the button, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// The Children of the button, usually the label
	children: Children,
) -> impl IntoView {
	let class = move || {
		format!(
			"fr-ct-ct {} {}",
			match variant.get() {
				ButtonVariant::Contained => format!("btn btn-{}", color.get()),
				ButtonVariant::Plain => format!("btn-plain txt-{}", color.get()),
			},
			class.get()
		)
	};

	view! {
		<button
			type="button"
			class={class}
			title={tooltip}
			disabled={move || disabled.get()}
			on:click={move |ev| on_click.call(ev)}
		>
			{children()}
		</button>
	}
}
