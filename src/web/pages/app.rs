// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::errors::error::Error;
use super::errors::not_found::ErrorPage;
use super::home::Home;
use super::utils::{get_bootstrap_data, provide_app_state, use_base_path};
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	let base_path = use_base_path();
	let stylesheet_url = format!("{}/pkg/wayfinder.css", base_path);

	view! {
		<Stylesheet href=stylesheet_url />
		<Title text="Wayfinder" />

		<Router base=base_path>
			<Routes fallback=|| view! { <WithAppState content=ErrorPage /> }>
				<Route path=path!("/") view=|| view! { <WithAppState content=Home /> } />
			</Routes>
		</Router>
	}
}

/// Loads the global state before rendering `content`
#[component]
fn WithAppState<F, V>(content: F) -> impl IntoView
where
	F: Fn() -> V + Clone + Send + Sync + 'static,
	V: IntoView + 'static,
{
	view! {
		<Await future=get_bootstrap_data() let:data>
			{
				match data {
					Ok(data) => {
						provide_app_state(data.clone());
						content().into_any()
					}
					Err(error) => {
						tracing::error!(source = ?error, "Failed to load application state");
						view! { <Error /> }.into_any()
					}
				}
			}
		</Await>
	}
}
