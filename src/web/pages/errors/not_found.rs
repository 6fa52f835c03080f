// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::nav::NOT_FOUND_NAV_ID;
use crate::web::pages::page::{Page, PageContents};
use crate::web::pages::utils::{use_frontend_settings, use_nav_model};
use leptos::prelude::*;

pub const COMMUNITY_SITE_URL: &str = "https://community.grafana.com";
const NOT_FOUND_IMAGE_PATH: &str = "public/img/error-404.png";

#[component]
pub fn ErrorPage() -> impl IntoView {
	tracing::debug!("Activating fallback page for unknown location");
	mark_not_found_response();

	let nav_model = use_nav_model(NOT_FOUND_NAV_ID);
	let settings = use_frontend_settings();
	let home_url = settings.home_url();
	let image_url = settings.asset_url(NOT_FOUND_IMAGE_PATH);

	view! {
		<Page nav_model=nav_model>
			<PageContents>
				<div class="panel-container error-container">
					<div class="error-column">
						<h1 class="error-404 text-center">"404"</h1>
						<hr />
						<div class="error-row error-justify-center error-text">
							<div>
								<img src=image_url alt="Broken link illustration" />
							</div>
							<div>
								<h3>"Sorry for the inconvenience"</h3>
								<p>
									"Please go back to your "
									<a href=home_url.clone() class="error-link">"home dashboard"</a>
									" and try again."
								</p>
								<p>
									"If the error persists, seek help on the "
									<a href=COMMUNITY_SITE_URL target="_blank" rel="noopener noreferrer" class="error-link">
										"community site"
									</a>
									"."
								</p>
								<div class="error-row">
									<a href=home_url class="error-button">"Home Dashboard"</a>
									<a href=COMMUNITY_SITE_URL target="_blank" rel="noopener noreferrer" class="error-button">
										"Community Site"
									</a>
								</div>
							</div>
						</div>
						<hr />
						<div class="text-center">
							"Chances you are on the page you are looking for is "
							<span class="error-link">"0%"</span>
							"."
						</div>
					</div>
				</div>
			</PageContents>
		</Page>
	}
}

/// Sets the HTTP status when rendering on the server; the router fallback otherwise responds with 200.
#[cfg(feature = "ssr")]
fn mark_not_found_response() {
	use axum::http::StatusCode;
	use leptos_axum::ResponseOptions;

	if let Some(response_options) = use_context::<ResponseOptions>() {
		response_options.set_status(StatusCode::NOT_FOUND);
	}
}

#[cfg(not(feature = "ssr"))]
fn mark_not_found_response() {}
