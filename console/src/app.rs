use crate::{pages::*, prelude::*};

/// The root of the console
#[component]
pub fn App() -> impl IntoView {
	view! {
		<Router>
			<main class="fr-fs-fs full-width full-height bg-secondary">
				<Routes>
					<Route path="/" view=|| view! { <Redirect path={RepositoryRoute::List.to_string()}/> }/>
					<Route path="/repositories" view=RepositoryList/>
					<Route path="/repositories/:name" view=RepositoryDetail/>
					<Route
						path="/*any"
						view=|| view! { <ErrorPage title="The page you are looking for does not exist."/> }
					/>
				</Routes>
			</main>
		</Router>
	}
}
