// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::page::{Page, PageContents};
use super::utils::{use_nav_model, use_nav_sections};
use crate::nav::HOME_NAV_ID;
use leptos::prelude::*;

#[component]
pub fn Home() -> impl IntoView {
	let nav_model = use_nav_model(HOME_NAV_ID);
	let sections = use_nav_sections();

	view! {
		<Page nav_model=nav_model>
			<PageContents>
				<ul id="home_sections">
					{
						sections
							.into_iter()
							.map(|section| view! {
								<li>
									<a href=section.url>{section.text}</a>
									{section.sub_title.map(|sub_title| view! { <span class="home_section_description">{sub_title}</span> })}
								</li>
							})
							.collect::<Vec<_>>()
					}
				</ul>
			</PageContents>
		</Page>
	}
}
