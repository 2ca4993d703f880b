use ybc::{Button, Container, Control, Field, Input, InputType, Notification, Section, Title};
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::*;

use crate::api;
use crate::index::Route;
use crate::session::{self, Session};

#[function_component]
pub fn Login() -> Html {
	let client = use_context::<api::Client>().unwrap();
	let navigator = use_navigator().unwrap();
	let (_, dispatch) = use_store::<Session>();
	let username = use_state(String::new);
	let password = use_state(String::new);
	let error = use_state(|| None::<String>);
	let pending = use_state(|| false);

	let onsubmit = {
		let client = client.clone();
		let navigator = navigator.clone();
		let dispatch = dispatch.clone();
		let username = username.clone();
		let password = password.clone();
		let error = error.clone();
		let pending = pending.clone();
		Callback::from(move |ev: SubmitEvent| {
			ev.prevent_default();
			if *pending {
				return;
			}
			pending.set(true);
			let client = client.clone();
			let navigator = navigator.clone();
			let dispatch = dispatch.clone();
			let username = (*username).clone();
			let password = (*password).clone();
			let error = error.clone();
			let pending = pending.clone();
			wasm_bindgen_futures::spawn_local(async move {
				match session::login(client, dispatch, &username, &password).await {
					Ok(()) => {
						navigator.push(&Route::Home);
					}
					Err(err) => {
						error.set(Some(err.to_string()));
					}
				}
				pending.set(false);
			});
		})
	};

	html! {
		<Section>
			<Container classes={"is-max-desktop"}>
				<Title>{"Log in"}</Title>
				<form {onsubmit}>
					<Field>
						<Control>
							<Input
								name="username" value={(*username).clone()}
								update={{
									let username = username.clone();
									Callback::from(move |value| username.set(value))
								}}
								r#type={InputType::Text}
								placeholder={"Enter username"}
							/>
						</Control>
					</Field>
					<Field>
						<Control>
							<Input
								name="password" value={(*password).clone()}
								update={{
									let password = password.clone();
									Callback::from(move |value| password.set(value))
								}}
								r#type={InputType::Password}
								placeholder={"Enter password"}
							/>
						</Control>
					</Field>
					{match &*error {
						Some(message) => html! {
							<Notification classes={"is-danger is-light"}>{message.clone()}</Notification>
						},
						None => html! {},
					}}
					<Button classes={"is-primary"} loading={*pending} disabled={*pending}>
						{"Log in"}
					</Button>
				</form>
			</Container>
		</Section>
	}
}
