// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::header::PageHeader;
use super::utils::use_frontend_settings;
use crate::nav::NavModel;
use crate::settings::BuildInfo;
use leptos::prelude::*;
use leptos_meta::Title;

/// Page chrome shared by every page: document title, header, and footer around the page body.
#[component]
pub fn Page(nav_model: NavModel, children: Children) -> impl IntoView {
	let settings = use_frontend_settings();
	let title = nav_model.page_title(&settings.app_title);

	view! {
		<Title text=title />
		<div class="page-scrollbar-wrapper">
			<PageHeader nav_model=nav_model />
			{children()}
			<Footer build_info=settings.build_info />
		</div>
	}
}

#[component]
pub fn PageContents(children: Children) -> impl IntoView {
	view! {
		<div class="page-container page-body">
			{children()}
		</div>
	}
}

#[component]
pub fn Footer(build_info: BuildInfo) -> impl IntoView {
	view! {
		<footer class="footer">
			{build_info.describe().map(|description| view! { <span class="footer__build">{description}</span> })}
		</footer>
	}
}
