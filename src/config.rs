// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::{KdlDocument, KdlNode, KdlValue};
use miette::{IntoDiagnostic, Result, miette};
use tokio::fs::read_to_string;
use url::Url;

const DEFAULT_APP_TITLE: &str = "Wayfinder";

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	ConfigData::from_kdl(&config_file_contents)
}

#[derive(Clone, Debug)]
pub struct ConfigData {
	pub web: WebConfig,
	pub app_title: String,
	pub anonymous_hide_version: bool,
	pub build: BuildConfig,
	/// Extra links shown in the help section, as `(text, url)`
	pub help_links: Vec<(String, String)>,
}

#[derive(Clone, Debug)]
pub struct WebConfig {
	pub bind_addr: String,
	pub app_url: String,
	/// Path the app is served under, without a trailing slash. Empty when served from the root.
	pub app_sub_url: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuildConfig {
	pub version: String,
	pub commit: String,
	pub buildstamp: i64,
	pub env: String,
}

impl Default for BuildConfig {
	fn default() -> Self {
		Self {
			version: env!("CARGO_PKG_VERSION").to_string(),
			commit: String::new(),
			buildstamp: 0,
			env: String::from("production"),
		}
	}
}

impl ConfigData {
	pub fn from_kdl(contents: &str) -> Result<Self> {
		let document: KdlDocument = contents.parse()?;

		let web_node = document.get("web").ok_or_else(|| miette!("Config is missing the `web` block"))?;
		let web = parse_web_config(web_node)?;

		let app_title = match document.get_arg("app_title") {
			Some(value) => expect_string(value, "app_title")?,
			None => String::from(DEFAULT_APP_TITLE),
		};
		let anonymous_hide_version = match document.get_arg("anonymous_hide_version") {
			Some(value) => value
				.as_bool()
				.ok_or_else(|| miette!("`anonymous_hide_version` must be a boolean"))?,
			None => false,
		};
		let build = match document.get("build") {
			Some(node) => parse_build_config(node)?,
			None => BuildConfig::default(),
		};
		let help_links = match document.get("help_links") {
			Some(node) => parse_help_links(node)?,
			None => Vec::new(),
		};

		Ok(Self {
			web,
			app_title,
			anonymous_hide_version,
			build,
			help_links,
		})
	}
}

fn parse_web_config(node: &KdlNode) -> Result<WebConfig> {
	let children = node
		.children()
		.ok_or_else(|| miette!("The `web` block must have children"))?;
	let bind_addr = required_string(children, "bind_addr", "web")?;
	let app_url = required_string(children, "app_url", "web")?;
	let app_sub_url = app_sub_url(&app_url)?;

	Ok(WebConfig {
		bind_addr,
		app_url,
		app_sub_url,
	})
}

/// Gets the path portion of the app URL, which all in-app links are prefixed with.
pub fn app_sub_url(app_url: &str) -> Result<String> {
	let url = Url::parse(app_url).into_diagnostic()?;
	Ok(url.path().trim_end_matches('/').to_string())
}

fn parse_build_config(node: &KdlNode) -> Result<BuildConfig> {
	let mut build = BuildConfig::default();
	let Some(children) = node.children() else {
		return Ok(build);
	};

	if let Some(value) = children.get_arg("version") {
		build.version = expect_string(value, "build.version")?;
	}
	if let Some(value) = children.get_arg("commit") {
		build.commit = expect_string(value, "build.commit")?;
	}
	if let Some(value) = children.get_arg("buildstamp") {
		let stamp = value
			.as_integer()
			.ok_or_else(|| miette!("`build.buildstamp` must be an integer"))?;
		build.buildstamp = i64::try_from(stamp).into_diagnostic()?;
	}
	if let Some(value) = children.get_arg("env") {
		build.env = expect_string(value, "build.env")?;
	}

	Ok(build)
}

fn parse_help_links(node: &KdlNode) -> Result<Vec<(String, String)>> {
	let Some(children) = node.children() else {
		return Ok(Vec::new());
	};

	let mut links = Vec::new();
	for link_node in children.nodes() {
		if link_node.name().value() != "link" {
			return Err(miette!(
				"Unexpected node `{}` in `help_links`",
				link_node.name().value()
			));
		}
		let args: Vec<&KdlValue> = link_node
			.entries()
			.iter()
			.filter(|entry| entry.name().is_none())
			.map(|entry| entry.value())
			.collect();
		let [text, url] = args.as_slice() else {
			return Err(miette!("Each help link needs a text and a URL"));
		};
		links.push((expect_string(text, "link text")?, expect_string(url, "link URL")?));
	}

	Ok(links)
}

fn required_string(document: &KdlDocument, name: &str, block: &str) -> Result<String> {
	let value = document
		.get_arg(name)
		.ok_or_else(|| miette!("`{}` is missing `{}`", block, name))?;
	expect_string(value, name)
}

fn expect_string(value: &KdlValue, name: &str) -> Result<String> {
	value
		.as_string()
		.map(String::from)
		.ok_or_else(|| miette!("`{}` must be a string", name))
}

#[cfg(test)]
mod tests {
	use super::*;

	const FULL_CONFIG: &str = r#"
web {
	bind_addr "127.0.0.1:3000"
	app_url "https://metrics.example.com/grafana/"
}
app_title "Metrics"
anonymous_hide_version #true
build {
	version "7.0.0"
	commit "d5f1f8d"
	buildstamp 1589371200
	env "development"
}
help_links {
	link "Documentation" "https://grafana.com/docs/"
	link "Support" "https://grafana.com/support/"
}
"#;

	#[test]
	fn parses_full_config() {
		let config = ConfigData::from_kdl(FULL_CONFIG).expect("config should parse");
		assert_eq!(config.web.bind_addr, "127.0.0.1:3000");
		assert_eq!(config.web.app_sub_url, "/grafana");
		assert_eq!(config.app_title, "Metrics");
		assert!(config.anonymous_hide_version);
		assert_eq!(config.build.commit, "d5f1f8d");
		assert_eq!(config.build.buildstamp, 1589371200);
		assert_eq!(config.help_links.len(), 2);
		assert_eq!(config.help_links[1].0, "Support");
	}

	#[test]
	fn applies_defaults() {
		let config = ConfigData::from_kdl(
			r#"
web {
	bind_addr "0.0.0.0:8080"
	app_url "http://localhost:8080/"
}
"#,
		)
		.expect("config should parse");
		assert_eq!(config.web.app_sub_url, "");
		assert_eq!(config.app_title, DEFAULT_APP_TITLE);
		assert!(!config.anonymous_hide_version);
		assert_eq!(config.build, BuildConfig::default());
		assert!(config.help_links.is_empty());
	}

	#[test]
	fn missing_web_block_is_an_error() {
		assert!(ConfigData::from_kdl("app_title \"Metrics\"").is_err());
	}

	#[test]
	fn missing_app_url_is_an_error() {
		assert!(ConfigData::from_kdl("web {\n\tbind_addr \"127.0.0.1:3000\"\n}").is_err());
	}

	#[test]
	fn malformed_help_link_is_an_error() {
		let contents = r#"
web {
	bind_addr "127.0.0.1:3000"
	app_url "http://localhost:3000/"
}
help_links {
	link "Only text"
}
"#;
		assert!(ConfigData::from_kdl(contents).is_err());
	}

	#[test]
	fn sub_url_strips_trailing_slash() {
		assert_eq!(app_sub_url("http://localhost:3000/").unwrap(), "");
		assert_eq!(app_sub_url("http://localhost:3000/a/b/").unwrap(), "/a/b");
	}
}
