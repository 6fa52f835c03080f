// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
	pub hide_version: bool,
	pub version: String,
	pub commit: String,
	pub buildstamp: i64,
	pub env: String,
}

impl BuildInfo {
	/// Text for the page footer, or `None` if the version is hidden
	pub fn describe(&self) -> Option<String> {
		if self.hide_version || self.version.is_empty() {
			return None;
		}

		let mut description = format!("v{}", self.version);
		if !self.commit.is_empty() {
			description = format!("{} ({})", description, self.commit);
		}
		if let Some(built_at) = DateTime::from_timestamp(self.buildstamp, 0).filter(|_| self.buildstamp > 0) {
			description = format!("{}, built {}", description, built_at.format("%Y-%m-%d"));
		}
		Some(description)
	}
}

/// Settings the client needs to render pages
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontendSettings {
	pub app_url: String,
	pub app_sub_url: String,
	pub app_title: String,
	pub build_info: BuildInfo,
}

impl FrontendSettings {
	#[cfg(feature = "ssr")]
	pub fn from_config(config: &crate::config::ConfigData) -> Self {
		let build = &config.build;
		let build_info = if config.anonymous_hide_version {
			BuildInfo {
				hide_version: true,
				version: String::new(),
				commit: String::new(),
				buildstamp: 0,
				env: build.env.clone(),
			}
		} else {
			BuildInfo {
				hide_version: false,
				version: build.version.clone(),
				commit: build.commit.clone(),
				buildstamp: build.buildstamp,
				env: build.env.clone(),
			}
		};

		Self {
			app_url: config.web.app_url.clone(),
			app_sub_url: config.web.app_sub_url.clone(),
			app_title: config.app_title.clone(),
			build_info,
		}
	}

	pub fn home_url(&self) -> String {
		format!("{}/", self.app_sub_url.trim_end_matches('/'))
	}

	/// Makes a URL for a path under the app's base URL
	pub fn asset_url(&self, path: &str) -> String {
		format!("{}/{}", self.app_sub_url.trim_end_matches('/'), path.trim_start_matches('/'))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn settings(app_sub_url: &str) -> FrontendSettings {
		FrontendSettings {
			app_sub_url: app_sub_url.to_string(),
			..Default::default()
		}
	}

	#[test]
	fn home_url_always_ends_with_slash() {
		assert_eq!(settings("").home_url(), "/");
		assert_eq!(settings("/grafana").home_url(), "/grafana/");
	}

	#[test]
	fn asset_url_is_under_base() {
		assert_eq!(settings("").asset_url("public/img/error-404.png"), "/public/img/error-404.png");
		assert_eq!(settings("/grafana").asset_url("/public/img/a.png"), "/grafana/public/img/a.png");
	}

	#[test]
	fn describe_includes_commit_and_date() {
		let info = BuildInfo {
			hide_version: false,
			version: String::from("7.0.0"),
			commit: String::from("d5f1f8d"),
			buildstamp: 1589371200,
			env: String::from("production"),
		};
		assert_eq!(info.describe().as_deref(), Some("v7.0.0 (d5f1f8d), built 2020-05-13"));
	}

	#[test]
	fn describe_hidden_version() {
		let info = BuildInfo {
			hide_version: true,
			..Default::default()
		};
		assert_eq!(info.describe(), None);
	}

	#[cfg(feature = "ssr")]
	#[test]
	fn anonymous_hide_version_blanks_build_details() {
		let mut config = crate::config::ConfigData::from_kdl(
			"web {\n\tbind_addr \"127.0.0.1:3000\"\n\tapp_url \"http://localhost:3000/grafana/\"\n}",
		)
		.expect("config should parse");
		config.anonymous_hide_version = true;
		config.build.commit = String::from("abc123");

		let settings = FrontendSettings::from_config(&config);
		assert_eq!(settings.app_sub_url, "/grafana");
		assert!(settings.build_info.hide_version);
		assert!(settings.build_info.version.is_empty());
		assert!(settings.build_info.commit.is_empty());
		assert_eq!(settings.build_info.buildstamp, 0);
	}
}
