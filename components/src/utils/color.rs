use std::fmt::{Display, Formatter};

/// The colors available in the console's stylesheet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Color {
	/// The brand color
	#[default]
	Primary,
	/// The background color
	Secondary,
	/// Plain white
	White,
	/// Muted text
	Grey,
	/// Something went well
	Success,
	/// Needs attention
	Warning,
	/// Something went wrong, or is destructive
	Error,
	/// Informational
	Info,
}

impl Color {
	/// The name of the color, as used in the css classes
	pub const fn as_css_name(&self) -> &'static str {
		match self {
			Self::Primary => "primary",
			Self::Secondary => "secondary",
			Self::White => "white",
			Self::Grey => "grey",
			Self::Success => "success",
			Self::Warning => "warning",
			Self::Error => "error",
			Self::Info => "info",
		}
	}

	/// The color to show an alert of the given kind with
	pub const fn from_alert(variant: models::prelude::AlertVariant) -> Self {
		use models::prelude::AlertVariant;

		match variant {
			AlertVariant::Success => Self::Success,
			AlertVariant::Info => Self::Info,
			AlertVariant::Danger => Self::Error,
		}
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_css_name())
	}
}
