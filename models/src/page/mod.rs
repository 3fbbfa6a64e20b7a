mod action;
mod breadcrumb;
mod controller;
mod definition;
mod error;
mod route;
mod tab;

pub use self::{
	action::*,
	breadcrumb::*,
	controller::*,
	definition::*,
	error::*,
	route::*,
	tab::*,
};
