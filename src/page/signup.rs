use ybc::{Button, Container, Control, Field, Input, InputType, Notification, Section, Title};
use yew::prelude::*;
use yew_router::prelude::use_navigator;

use crate::api;
use crate::index::Route;
use crate::session;

/// New-account form. A successful signup redirects to the login screen
/// rather than authenticating in place.
#[function_component]
pub fn Signup() -> Html {
	let client = use_context::<api::Client>().unwrap();
	let navigator = use_navigator().unwrap();
	let username = use_state(String::new);
	let password = use_state(String::new);
	let error = use_state(|| None::<String>);
	let pending = use_state(|| false);

	let onsubmit = {
		let client = client.clone();
		let navigator = navigator.clone();
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
			let username = (*username).clone();
			let password = (*password).clone();
			let error = error.clone();
			let pending = pending.clone();
			wasm_bindgen_futures::spawn_local(async move {
				match session::signup(client, &username, &password).await {
					Ok(user) => {
						log::debug!(target: "session", "signed up {:?}", user.username);
						navigator.push(&Route::Login);
					}
					Err(err) => {
						error.set(Some(err.to_string()));
					}
				}
				pending.set(false);
			});
		})
	};

	let to_login = {
		let navigator = navigator.clone();
		Callback::from(move |_: MouseEvent| navigator.push(&Route::Login))
	};

	html! {
		<Section>
			<Container classes={"is-max-desktop"}>
				<Title>{"Sign up"}</Title>
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
						{"Sign up"}
					</Button>
				</form>
				<Button classes={"is-light mt-3"} onclick={to_login}>
					{"Log in"}
				</Button>
			</Container>
		</Section>
	}
}
