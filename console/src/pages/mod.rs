/// The detail page of a single repository
mod repository_detail;
/// The list of repositories
mod repository_list;

pub use self::{repository_detail::*, repository_list::*};
