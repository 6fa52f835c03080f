// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::ConfigData;
use crate::nav::{NavIndex, build_nav_index, default_nav_tree};
use axum::extract::FromRef;
use leptos::config::LeptosOptions;
use std::sync::Arc;

#[derive(Clone, Debug, FromRef)]
pub struct AppState {
	pub leptos_options: LeptosOptions,
	pub config: Arc<ConfigData>,
	pub nav_index: Arc<NavIndex>,
}

impl AppState {
	pub fn new(leptos_options: LeptosOptions, config: Arc<ConfigData>) -> Self {
		let nav_tree = default_nav_tree(&config.web.app_sub_url, &config.help_links);
		let nav_index = Arc::new(build_nav_index(&nav_tree));
		Self {
			leptos_options,
			config,
			nav_index,
		}
	}
}
