use ybc::{Button, CardContent, CardHeader, Column, Columns, Content, Subtitle};
use yew::prelude::*;

use crate::data::{Place, Site};

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct PlaceCardProps {
	pub place: Place,
	pub saved: bool,
	pub on_save: Callback<i64>,
}

/// A catalog entry: destination header, save control and nested sites.
#[function_component]
pub fn PlaceCard(props: &PlaceCardProps) -> Html {
	let on_save = {
		let id = props.place.id;
		props.on_save.reform(move |_: MouseEvent| id)
	};
	let image = props.place.image.as_ref().map(|url| {
		html! {
			<figure class={"image is-96x96"} style="margin: auto;">
				<img src={url.clone()} alt={props.place.name.clone()} style="max-height: 100%; width: auto; margin: auto;" />
			</figure>
		}
	});
	let sites = match props.place.sites.is_empty() {
		true => html! {},
		false => html! {<>
			<Subtitle classes={"is-6 mt-3 mb-1"}>{"Sites:"}</Subtitle>
			{props.place.sites.iter().map(|site| html! {
				<SiteCard site={site.clone()} />
			}).collect::<Vec<_>>()}
		</>},
	};
	html! {
		<div class={"card block"}>
			<CardHeader>
				<p class="card-header-title">{&props.place.name}</p>
			</CardHeader>
			<CardContent>
				<Columns>
					{image.map(|img| html! { <Column classes="is-2">{img}</Column> }).unwrap_or_default()}
					<Column>
						<Button
							classes={"is-primary is-small"}
							onclick={on_save}
							disabled={props.saved}
						>
							{match props.saved {
								true => "Saved",
								false => "Save",
							}}
						</Button>
						{sites}
					</Column>
				</Columns>
			</CardContent>
		</div>
	}
}

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct SiteCardProps {
	pub site: Site,
}

#[function_component]
pub fn SiteCard(props: &SiteCardProps) -> Html {
	let image = props.site.image.as_ref().map(|url| {
		html! {
			<Column classes="is-narrow">
				<figure class={"image is-64x64"}>
					<img src={url.clone()} alt={props.site.name.clone()} />
				</figure>
			</Column>
		}
	});
	html! {
		<div class={"box p-3 mb-2"}>
			<Columns classes={"is-vcentered"}>
				{image.unwrap_or_default()}
				<Column>
					<p class="has-text-weight-semibold">{&props.site.name}</p>
					{match props.site.description.is_empty() {
						true => html! {},
						false => html! { <Content classes={"is-small"}>{&props.site.description}</Content> },
					}}
				</Column>
			</Columns>
		</div>
	}
}

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct SavedPlaceCardProps {
	pub place: Place,
	/// Set while the removal delay runs so the card can play its exit state.
	pub removing: bool,
	pub on_unsave: Callback<i64>,
}

#[function_component]
pub fn SavedPlaceCard(props: &SavedPlaceCardProps) -> Html {
	let on_unsave = {
		let id = props.place.id;
		props.on_unsave.reform(move |_: MouseEvent| id)
	};
	let mut classes = classes! {"box", "p-3", "mb-2"};
	if props.removing {
		classes.push("has-background-light");
	}
	html! {
		<div class={classes}>
			<p class="has-text-weight-semibold">{&props.place.name}</p>
			<Button
				classes={"is-danger is-light is-small mt-2"}
				onclick={on_unsave}
				disabled={props.removing}
			>
				{match props.removing {
					true => "Removing",
					false => "Unsave",
				}}
			</Button>
		</div>
	}
}
