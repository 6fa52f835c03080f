// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::nav::{Breadcrumb, NavModel, NavModelItem};
use leptos::prelude::*;

#[component]
pub fn PageHeader(nav_model: NavModel) -> impl IntoView {
	let node = nav_model.node;
	let tabs: Vec<NavModelItem> = nav_model
		.main
		.children
		.into_iter()
		.filter(|child| !child.hide_from_tabs)
		.collect();
	let breadcrumbs = nav_model.breadcrumbs;

	view! {
		<div class="page-header-canvas">
			<div class="page-container">
				<div class="page-header">
					<div class="page-header__inner">
						{
							node.icon.map(|icon| view! {
								<span class="page-header__logo">
									<i class={icon_class(&icon)}></i>
								</span>
							})
						}
						<div class="page-header__info-block">
							<h1 class="page-header__title">{node.text}</h1>
							{
								node.sub_title.map(|sub_title| view! {
									<div class="page-header__sub-title">{sub_title}</div>
								})
							}
							<Breadcrumbs breadcrumbs=breadcrumbs />
						</div>
					</div>
					<HeaderTabs tabs=tabs />
				</div>
			</div>
		</div>
	}
}

#[component]
fn Breadcrumbs(breadcrumbs: Vec<Breadcrumb>) -> impl IntoView {
	// A single crumb is just the title again
	if breadcrumbs.len() < 2 {
		return None;
	}

	Some(view! {
		<nav class="page-header__breadcrumbs">
			{
				breadcrumbs
					.into_iter()
					.map(|crumb| match crumb.url {
						Some(url) => view! {
							<a class="page-header__breadcrumb" href=url>{crumb.title}</a>
						}.into_any(),
						None => view! {
							<span class="page-header__breadcrumb">{crumb.title}</span>
						}.into_any(),
					})
					.collect::<Vec<_>>()
			}
		</nav>
	})
}

#[component]
fn HeaderTabs(tabs: Vec<NavModelItem>) -> impl IntoView {
	if tabs.is_empty() {
		return None;
	}

	Some(view! {
		<ul class="gf-tabs">
			{
				tabs.into_iter()
					.map(|tab| view! {
						<li class="gf-tabs-item">
							<a class={tab_class(tab.active)} href=tab.url>
								{tab.icon.map(|icon| view! { <i class={icon_class(&icon)}></i> })}
								{tab.text}
							</a>
						</li>
					})
					.collect::<Vec<_>>()
			}
		</ul>
	})
}

fn icon_class(icon: &str) -> String {
	format!("icon icon-{}", icon)
}

fn tab_class(active: bool) -> &'static str {
	if active { "gf-tabs-link active" } else { "gf-tabs-link" }
}
