// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::pages::app::App;
use super::pages::shell::shell;
use super::pages::utils::BasePath;
use super::state::AppState;
use crate::config::ConfigData;
use crate::settings::FrontendSettings;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, render_app_to_stream_with_context};
use miette::IntoDiagnostic;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;

pub const FRONTEND_SETTINGS_PATH: &str = "/api/frontend/settings";

pub async fn run_server(config: Arc<ConfigData>) -> miette::Result<()> {
	let web_config = get_configuration(None).into_diagnostic()?;
	let site_addr = config.web.bind_addr.clone();
	let app_state = AppState::new(web_config.leptos_options, config);

	let app = build_router(app_state);

	tracing::info!("Listening on http://{}", &site_addr);
	let listener = TcpListener::bind(&site_addr).await.into_diagnostic()?;
	axum::serve(listener, app.into_make_service()).await.into_diagnostic()?;

	Ok(())
}

pub fn build_router(app_state: AppState) -> Router {
	let routes = generate_route_list(App);

	Router::new()
		.leptos_routes_with_context(
			&app_state,
			routes,
			{
				let app_state = app_state.clone();
				move || provide_server_context(&app_state)
			},
			{
				let app_state = app_state.clone();
				move || render_shell(&app_state)
			},
		)
		.route(FRONTEND_SETTINGS_PATH, get(frontend_settings_route))
		.fallback(file_and_error_handler)
		.with_state(app_state)
}

fn provide_server_context(app_state: &AppState) {
	provide_context(BasePath(app_state.config.web.app_sub_url.clone()));
	provide_context(app_state.clone());
}

fn render_shell(app_state: &AppState) -> impl IntoView + use<> {
	shell(app_state.leptos_options.clone(), app_state.config.web.app_sub_url.clone())
}

async fn frontend_settings_route(State(state): State<AppState>) -> Json<FrontendSettings> {
	Json(FrontendSettings::from_config(&state.config))
}

async fn file_and_error_handler(uri: Uri, State(state): State<AppState>, request: Request) -> Response {
	let site_root_dir = state.leptos_options.site_root.clone();
	let file_path = strip_base_path(uri.path(), &state.config.web.app_sub_url);
	let response = get_static_file(file_path, &site_root_dir).await;
	let response = match response {
		Ok(response) => response,
		Err(error) => return error.into_response(),
	};

	if response.status() == StatusCode::OK {
		response.into_response()
	} else {
		tracing::debug!(%uri, "No static file found; rendering the app");
		let handler = render_app_to_stream_with_context(
			{
				let state = state.clone();
				move || provide_server_context(&state)
			},
			{
				let state = state.clone();
				move || render_shell(&state)
			},
		);
		handler(request).await.into_response()
	}
}

/// Maps a request path under the app's base path to the path of the file in the site root.
/// Paths outside the base path are left alone so root-level assets like `/pkg` still resolve.
fn strip_base_path<'a>(path: &'a str, base_path: &str) -> &'a str {
	if base_path.is_empty() {
		return path;
	}
	match path.strip_prefix(base_path) {
		Some("") => "/",
		Some(rest) if rest.starts_with('/') => rest,
		_ => path,
	}
}

async fn get_static_file(path: &str, root: &str) -> Result<Response, StatusCode> {
	let Ok(request) = Request::builder().uri(path).body(Body::empty()) else {
		return Err(StatusCode::INTERNAL_SERVER_ERROR);
	};

	match ServeDir::new(root).oneshot(request).await {
		Ok(response) => Ok(response.into_response()),
		Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
	}
}
