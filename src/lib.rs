// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
pub mod config;
pub mod nav;
pub mod settings;
pub mod web;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
	use crate::web::pages::app::App;
	use crate::web::pages::utils::{BASE_PATH_META_NAME, BasePath};
	use leptos::prelude::*;

	console_error_panic_hook::set_once();

	let base_path = document()
		.query_selector(&format!("meta[name=\"{}\"]", BASE_PATH_META_NAME))
		.ok()
		.flatten()
		.and_then(|meta| meta.get_attribute("content"))
		.unwrap_or_default();

	leptos::mount::hydrate_body(move || {
		provide_context(BasePath(base_path));
		view! { <App /> }
	});
}
