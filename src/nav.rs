// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Navigation models used by the page layout.
//!
//! The navigation tree is flattened once into a [`NavIndex`] on startup. Pages then look up their
//! display model by a fixed ID with [`get_nav_model`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const HOME_NAV_ID: &str = "home";
pub const NOT_FOUND_NAV_ID: &str = "not-found";

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavModelItem {
	pub id: String,
	pub text: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sub_title: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub icon: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub img: Option<String>,
	#[serde(default)]
	pub active: bool,
	#[serde(default)]
	pub hide_from_tabs: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub parent_id: Option<String>,
	#[serde(default)]
	pub children: Vec<NavModelItem>,
}

impl NavModelItem {
	pub fn new(id: &str, text: &str) -> Self {
		Self {
			id: id.to_string(),
			text: text.to_string(),
			..Default::default()
		}
	}

	pub fn with_url(mut self, url: String) -> Self {
		self.url = Some(url);
		self
	}

	pub fn with_icon(mut self, icon: &str) -> Self {
		self.icon = Some(icon.to_string());
		self
	}

	pub fn with_sub_title(mut self, sub_title: &str) -> Self {
		self.sub_title = Some(sub_title.to_string());
		self
	}

	pub fn with_children(mut self, children: Vec<NavModelItem>) -> Self {
		self.children = children;
		self
	}
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Breadcrumb {
	pub title: String,
	pub url: Option<String>,
}

/// The display model for a single location: the item itself and the section it lives in.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct NavModel {
	pub main: NavModelItem,
	pub node: NavModelItem,
	pub breadcrumbs: Vec<Breadcrumb>,
}

impl NavModel {
	pub fn is_empty(&self) -> bool {
		self.node.id.is_empty() && self.node.text.is_empty()
	}

	/// Builds the document title, most specific part first.
	pub fn page_title(&self, app_title: &str) -> String {
		self.breadcrumbs
			.iter()
			.rev()
			.map(|crumb| crumb.title.as_str())
			.chain(std::iter::once(app_title))
			.filter(|part| !part.is_empty())
			.collect::<Vec<_>>()
			.join(" - ")
	}
}

pub type NavIndex = HashMap<String, NavModelItem>;

pub fn build_nav_index(tree: &[NavModelItem]) -> NavIndex {
	let mut index = NavIndex::new();
	index_children(&mut index, tree, None);
	index
}

fn index_children(index: &mut NavIndex, items: &[NavModelItem], parent_id: Option<&str>) {
	for item in items.iter() {
		if !item.id.is_empty() {
			let mut indexed = item.clone();
			indexed.parent_id = parent_id.map(String::from);
			index.insert(item.id.clone(), indexed);
		}

		let item_parent = if item.id.is_empty() { parent_id } else { Some(item.id.as_str()) };
		index_children(index, &item.children, item_parent);
	}
}

/// Looks up the display model for a location. An unknown ID gives the empty model.
pub fn get_nav_model(index: &NavIndex, id: &str) -> NavModel {
	let Some(node) = index.get(id) else {
		return NavModel::default();
	};

	let parent = node.parent_id.as_ref().and_then(|parent_id| index.get(parent_id));
	let main = match parent {
		Some(parent) => {
			let mut main = parent.clone();
			for child in main.children.iter_mut() {
				child.active = child.id == node.id;
			}
			main
		}
		None => node.clone(),
	};

	let mut breadcrumbs = Vec::new();
	let mut current = Some(node);
	while let Some(item) = current {
		breadcrumbs.push(Breadcrumb {
			title: item.text.clone(),
			url: item.url.clone(),
		});
		current = item.parent_id.as_ref().and_then(|parent_id| index.get(parent_id));
		// Guards against a malformed index pointing back at itself
		if breadcrumbs.len() > index.len() {
			break;
		}
	}
	breadcrumbs.reverse();

	NavModel {
		main,
		node: node.clone(),
		breadcrumbs,
	}
}

/// The built-in navigation tree. `help_links` are `(text, url)` pairs added under the help section.
pub fn default_nav_tree(app_sub_url: &str, help_links: &[(String, String)]) -> Vec<NavModelItem> {
	let help_children = help_links
		.iter()
		.enumerate()
		.map(|(link_index, (text, url))| {
			NavModelItem::new(&format!("help-link-{}", link_index), text).with_url(url.clone())
		})
		.collect();

	vec![
		NavModelItem::new(HOME_NAV_ID, "Home")
			.with_icon("home-alt")
			.with_sub_title("Your home dashboard")
			.with_url(format!("{}/", app_sub_url)),
		NavModelItem::new("dashboards", "Dashboards")
			.with_icon("apps")
			.with_url(format!("{}/dashboards", app_sub_url))
			.with_children(vec![
				NavModelItem::new("manage-dashboards", "Manage").with_url(format!("{}/dashboards", app_sub_url)),
				NavModelItem::new("playlists", "Playlists").with_url(format!("{}/playlists", app_sub_url)),
				NavModelItem::new("snapshots", "Snapshots").with_url(format!("{}/dashboard/snapshots", app_sub_url)),
			]),
		NavModelItem::new("explore", "Explore")
			.with_icon("compass")
			.with_url(format!("{}/explore", app_sub_url)),
		NavModelItem::new("help", "Help")
			.with_icon("question-circle")
			.with_children(help_children),
		NavModelItem::new(NOT_FOUND_NAV_ID, "Page not found")
			.with_icon("exclamation-triangle")
			.with_sub_title("404 Error")
			.with_url(format!("{}/not-found", app_sub_url)),
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample_index() -> NavIndex {
		build_nav_index(&default_nav_tree("/grafana", &[]))
	}

	#[test]
	fn index_contains_nested_items_with_parents() {
		let index = sample_index();
		let playlists = index.get("playlists").expect("playlists should be indexed");
		assert_eq!(playlists.parent_id.as_deref(), Some("dashboards"));
		assert_eq!(index.get("dashboards").and_then(|item| item.parent_id.clone()), None);
	}

	#[test]
	fn items_without_id_are_skipped_but_children_kept() {
		let tree = vec![NavModelItem::new("", "Section").with_children(vec![NavModelItem::new("inner", "Inner")])];
		let index = build_nav_index(&tree);
		assert_eq!(index.len(), 1);
		assert_eq!(index["inner"].parent_id, None);
	}

	#[test]
	fn later_duplicate_ids_overwrite_earlier_ones() {
		let tree = vec![
			NavModelItem::new("reports", "Reports").with_children(vec![NavModelItem::new("reports", "All reports")]),
			NavModelItem::new("explore", "Explore"),
			NavModelItem::new("explore", "Explore again"),
		];
		let index = build_nav_index(&tree);
		assert_eq!(index["reports"].text, "All reports");
		assert_eq!(index["reports"].parent_id.as_deref(), Some("reports"));
		assert_eq!(index["explore"].text, "Explore again");
	}

	#[test]
	fn model_for_top_level_item_uses_itself_as_main() {
		let model = get_nav_model(&sample_index(), NOT_FOUND_NAV_ID);
		assert_eq!(model.node.text, "Page not found");
		assert_eq!(model.main.id, NOT_FOUND_NAV_ID);
		assert_eq!(model.node.sub_title.as_deref(), Some("404 Error"));
		assert_eq!(model.breadcrumbs.len(), 1);
	}

	#[test]
	fn model_for_child_marks_active_tab() {
		let model = get_nav_model(&sample_index(), "playlists");
		assert_eq!(model.main.id, "dashboards");
		let active: Vec<&str> = model
			.main
			.children
			.iter()
			.filter(|child| child.active)
			.map(|child| child.id.as_str())
			.collect();
		assert_eq!(active, vec!["playlists"]);
		let titles: Vec<&str> = model.breadcrumbs.iter().map(|crumb| crumb.title.as_str()).collect();
		assert_eq!(titles, vec!["Dashboards", "Playlists"]);
	}

	#[test]
	fn unknown_id_gives_empty_model() {
		let model = get_nav_model(&NavIndex::new(), NOT_FOUND_NAV_ID);
		assert!(model.is_empty());
		assert_eq!(model, NavModel::default());
	}

	#[test]
	fn page_title_lists_most_specific_first() {
		let model = get_nav_model(&sample_index(), "snapshots");
		assert_eq!(model.page_title("Wayfinder"), "Snapshots - Dashboards - Wayfinder");
		assert_eq!(NavModel::default().page_title("Wayfinder"), "Wayfinder");
	}

	#[test]
	fn help_links_become_help_children() {
		let links = vec![(String::from("Docs"), String::from("https://grafana.com/docs/"))];
		let index = build_nav_index(&default_nav_tree("", &links));
		let link = &index["help-link-0"];
		assert_eq!(link.text, "Docs");
		assert_eq!(link.parent_id.as_deref(), Some("help"));
		assert_eq!(index[HOME_NAV_ID].url.as_deref(), Some("/"));
	}
}
