// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::nav::{HOME_NAV_ID, NOT_FOUND_NAV_ID, NavIndex, NavModel, NavModelItem, get_nav_model};
use crate::settings::FrontendSettings;
use leptos::prelude::*;
use reactive_stores::Store;
use serde::{Deserialize, Serialize};

/// Everything the client needs before it can render a page
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct BootstrapData {
	pub settings: FrontendSettings,
	pub nav_index: NavIndex,
}

/// Name of the `<meta>` tag carrying the app's base path to the client
pub const BASE_PATH_META_NAME: &str = "app-sub-url";

/// Path the app is served under, without a trailing slash. Empty when served from the root.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BasePath(pub String);

/// Application-wide state shared by every page
#[derive(Clone, Debug, Default)]
pub struct GlobalState {
	pub nav_index: NavIndex,
}

#[server]
pub async fn get_bootstrap_data() -> Result<BootstrapData, ServerFnError> {
	use crate::web::state::AppState;

	let Some(state) = use_context::<AppState>() else {
		tracing::error!("Application state is missing from the server context");
		return Err(ServerFnError::new("Application state is unavailable"));
	};

	let settings = FrontendSettings::from_config(&state.config);
	let nav_index = (*state.nav_index).clone();

	Ok(BootstrapData { settings, nav_index })
}

pub fn provide_app_state(data: BootstrapData) {
	provide_context(Store::new(GlobalState {
		nav_index: data.nav_index,
	}));
	provide_context(data.settings);
}

/// Gets the navigation model for a page. Missing state or an unknown ID gives the empty model.
pub fn use_nav_model(id: &str) -> NavModel {
	use_context::<Store<GlobalState>>()
		.map(|state| get_nav_model(&state.read_untracked().nav_index, id))
		.unwrap_or_default()
}

/// Gets the top-level navigation sections that can be linked to, ordered by ID
pub fn use_nav_sections() -> Vec<NavModelItem> {
	let Some(state) = use_context::<Store<GlobalState>>() else {
		return Vec::new();
	};

	let mut sections: Vec<NavModelItem> = state
		.read_untracked()
		.nav_index
		.values()
		.filter(|item| item.parent_id.is_none() && item.url.is_some())
		.filter(|item| item.id != HOME_NAV_ID && item.id != NOT_FOUND_NAV_ID)
		.cloned()
		.collect();
	sections.sort_by(|a, b| a.id.cmp(&b.id));
	sections
}

pub fn use_base_path() -> String {
	use_context::<BasePath>().map(|BasePath(path)| path).unwrap_or_default()
}

pub fn use_frontend_settings() -> FrontendSettings {
	use_context::<FrontendSettings>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::nav::{build_nav_index, default_nav_tree};

	#[test]
	fn lookups_without_state_degrade_to_defaults() {
		let owner = Owner::new();
		owner.with(|| {
			assert!(use_nav_model(NOT_FOUND_NAV_ID).is_empty());
			assert!(use_nav_sections().is_empty());
			assert_eq!(use_base_path(), "");
			assert_eq!(use_frontend_settings(), FrontendSettings::default());
		});
	}

	#[test]
	fn base_path_comes_from_context() {
		let owner = Owner::new();
		owner.with(|| {
			provide_context(BasePath(String::from("/grafana")));
			assert_eq!(use_base_path(), "/grafana");
		});
	}

	#[test]
	fn provided_state_is_visible_to_lookups() {
		let owner = Owner::new();
		owner.with(|| {
			provide_app_state(BootstrapData {
				settings: FrontendSettings {
					app_sub_url: String::from("/grafana"),
					..Default::default()
				},
				nav_index: build_nav_index(&default_nav_tree("/grafana", &[])),
			});

			assert_eq!(use_nav_model(NOT_FOUND_NAV_ID).node.text, "Page not found");
			assert_eq!(use_frontend_settings().home_url(), "/grafana/");

			let section_ids: Vec<String> = use_nav_sections().into_iter().map(|item| item.id).collect();
			assert_eq!(section_ids, vec![String::from("dashboards"), String::from("explore")]);
		});
	}
}
