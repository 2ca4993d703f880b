use std::collections::HashSet;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::UnwrapThrowExt;
use ybc::{Button, Column, Columns, Container, Icon, Notification, Section, Subtitle, Title};
use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions};
use yewdux::prelude::*;

use crate::api;
use crate::components::{PlaceCard, SavedPlaceCard};
use crate::response::ApiError;
use crate::saved::SavedPlaces;

/// How long an unsaved card lingers so its exit state is visible. Purely a
/// display affordance; the removal itself happens in one store mutation.
const UNSAVE_DELAY_MS: u32 = 1_000;

#[function_component]
pub fn Discover() -> Html {
	let client = use_context::<api::Client>().unwrap();
	let (state, dispatch) = use_store::<SavedPlaces>();
	let save_error = use_state(|| None::<String>);
	let panel_open = use_state(|| false);
	let removing = use_state(HashSet::<i64>::new);

	let fetch = {
		let client = client.clone();
		let dispatch = dispatch.clone();
		use_async_with_options(
			async move {
				let places = client.locations().await?;
				dispatch.reduce_mut(|state| state.seed(places));
				Ok::<(), ApiError>(())
			},
			UseAsyncOptions::enable_auto(),
		)
	};

	let oninput = {
		let dispatch = dispatch.clone();
		Callback::from(move |ev: web_sys::InputEvent| {
			let input: web_sys::HtmlInputElement = ev
				.target_dyn_into()
				.expect_throw("event target should be an input");
			dispatch.reduce_mut(|state| state.search(input.value()));
		})
	};

	let on_save = {
		let state = state.clone();
		let dispatch = dispatch.clone();
		let client = client.clone();
		let save_error = save_error.clone();
		Callback::from(move |id: i64| {
			if state.is_saved(id) {
				return;
			}
			let dispatch = dispatch.clone();
			let client = client.clone();
			let save_error = save_error.clone();
			wasm_bindgen_futures::spawn_local(async move {
				// The server is authoritative for the id; only a successful
				// detail fetch may enter the saved set.
				match client.location(id).await {
					Ok(place) => {
						save_error.set(None);
						dispatch.reduce_mut(|state| {
							state.save(place);
						});
					}
					Err(err) => {
						log::error!(target: "discover", "save of place {id} failed: {err}");
						save_error.set(Some(format!("Could not save that place: {err}")));
					}
				}
			});
		})
	};

	let on_unsave = {
		let dispatch = dispatch.clone();
		let removing = removing.clone();
		Callback::from(move |id: i64| {
			if removing.contains(&id) {
				return;
			}
			let mut marks = (*removing).clone();
			marks.insert(id);
			removing.set(marks);
			let dispatch = dispatch.clone();
			let removing = removing.clone();
			wasm_bindgen_futures::spawn_local(async move {
				TimeoutFuture::new(UNSAVE_DELAY_MS).await;
				dispatch.reduce_mut(|state| {
					state.unsave(id);
				});
				let mut marks = (*removing).clone();
				marks.remove(&id);
				removing.set(marks);
			});
		})
	};

	let toggle_panel = {
		let panel_open = panel_open.clone();
		Callback::from(move |_: MouseEvent| panel_open.set(!*panel_open))
	};

	let places = match fetch.loading {
		true => html! {
			<ybc::Box>
				<Icon size={ybc::Size::Large}>
					<i class="fas fa-circle-notch fa-spin" />
				</Icon>
				<span>{"Fetching places"}</span>
			</ybc::Box>
		},
		false => state
			.visible()
			.iter()
			.map(|place| {
				html! {
					<PlaceCard
						place={place.clone()}
						saved={state.is_saved(place.id)}
						on_save={on_save.clone()}
					/>
				}
			})
			.collect::<Html>(),
	};

	let saved_panel = match *panel_open {
		false => html! {},
		true => html! {
			<Column classes="is-3">
				<Subtitle>{"Saved Places"}</Subtitle>
				{state.saved().iter().map(|place| html! {
					<SavedPlaceCard
						place={place.clone()}
						removing={removing.contains(&place.id)}
						on_unsave={on_unsave.clone()}
					/>
				}).collect::<Html>()}
			</Column>
		},
	};

	html! {
		<Section>
			<Container fluid=true>
				<Title>{"Discover"}</Title>
				<div class={"field"}>
					<div class={"control"}>
						<input
							class={"input"}
							type={"text"}
							placeholder={"Search Place"}
							value={state.query().to_owned()}
							{oninput}
						/>
					</div>
				</div>
				<Button classes={"mb-3"} onclick={toggle_panel}>
					{match *panel_open {
						true => "Close Saved Places",
						false => "Open Saved Places",
					}}
				</Button>
				{fetch.error.as_ref().map(|err| html! {
					<Notification classes={"is-danger is-light"}>
						{format!("Could not load places: {err}")}
					</Notification>
				}).unwrap_or_default()}
				{match &*save_error {
					Some(message) => html! {
						<Notification classes={"is-warning is-light"}>{message.clone()}</Notification>
					},
					None => html! {},
				}}
				<Columns>
					<Column>
						{places}
					</Column>
					{saved_panel}
				</Columns>
			</Container>
		</Section>
	}
}
