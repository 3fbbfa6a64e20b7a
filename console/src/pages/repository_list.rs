use crate::prelude::*;

/// The first page of repositories, each linking to its detail page
#[component]
pub fn RepositoryList() -> impl IntoView {
	let api = expect_context::<HttpConsoleApi>();
	let repositories = create_local_resource(|| (), move |_| {
		let api = api.clone();
		async move {
			api.list_repositories(&RepositoryListQuery {
				name: None,
				page_size: constants::LIST_PAGE_SIZE,
			})
			.await
			.map_err(|error| error.to_string())
		}
	});

	view! {
		<ContainerMain class="full-width full-height mb-md">
			<header class="fc-fs-fs full-width px-xl py-md gap-xs bg-secondary-light">
				<h1 class="txt-xl txt-white">"Repositories"</h1>
			</header>
			<section class="fc-fs-fs full-width full-height ofy-auto px-xl py-lg">
				{move || match repositories.get() {
					None => view! { <LoadingPage/> }.into_view(),
					Some(Err(error)) => {
						log::error!("unable to list the repositories: {error}");
						view! { <ErrorPage title="The repositories could not be listed."/> }
							.into_view()
					}
					Some(Ok(page)) => repository_rows(page).into_view(),
				}}
			</section>
		</ContainerMain>
	}
}

/// The rows of the list, or a message when there is nothing to list
fn repository_rows(page: Paginated<AnsibleRepository>) -> View {
	if page.results.is_empty() {
		return view! { <p class="txt-sm txt-grey">"No repositories yet."</p> }.into_view();
	}

	let shown = page.results.len();
	let rows = page
		.results
		.into_iter()
		.map(|repository| {
			let href = RepositoryRoute::Detail {
				name: repository.name.clone(),
			}
			.to_string();
			view! {
				<li class="fr-sb-ct full-width py-xs ul-light">
					<A href={href} class="txt-primary txt-sm">{repository.name}</A>
					<span class="txt-grey txt-sm">
						{repository.description.unwrap_or_default()}
					</span>
				</li>
			}
		})
		.collect_view();

	view! {
		<ul class="fc-fs-fs full-width">{rows}</ul>
		{(page.count > shown as u64).then(|| view! {
			<p class="txt-sm txt-grey">{format!("Showing {shown} of {} repositories.", page.count)}</p>
		})}
	}
	.into_view()
}

#[cfg(test)]
mod tests {
	use leptos::ssr::render_to_string;

	use super::*;

	fn repository(name: &str) -> AnsibleRepository {
		AnsibleRepository {
			name: name.to_owned(),
			pulp_href: format!("/api/pulp/api/v3/repositories/ansible/ansible/{name}-id/"),
			description: None,
			retain_repo_versions: None,
			remote: None,
			latest_version_href: None,
			private: false,
			pulp_created: None,
			pulp_labels: Default::default(),
			last_sync_task: None,
		}
	}

	fn render(results: Vec<AnsibleRepository>, count: u64) -> String {
		render_to_string(move || {
			provide_context(RouterIntegrationContext::new(ServerIntegration {
				path: "http://localhost/repositories".to_owned(),
			}));
			let page = Paginated {
				count,
				next: None,
				previous: None,
				results,
			};
			view! { <Router>{repository_rows(page)}</Router> }
		})
		.to_string()
	}

	#[test]
	fn rows_link_to_the_detail_pages() {
		let html = render(vec![repository("community"), repository("team/one")], 2);

		assert!(html.contains("href=\"/repositories/community\""));
		assert!(html.contains("href=\"/repositories/team%2Fone\""));
		assert!(!html.contains("Showing"));
	}

	#[test]
	fn partial_pages_say_how_many_there_are() {
		let html = render(vec![repository("community")], 45);

		assert!(html.contains("Showing 1 of 45 repositories."));
	}

	#[test]
	fn an_empty_list_says_so() {
		assert!(render(Vec::new(), 0).contains("No repositories yet."));
	}
}
