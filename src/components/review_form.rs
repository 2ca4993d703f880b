use ybc::{Button, Control, Field, Input, InputType, Select, TextArea};
use yew::prelude::*;

use crate::api;
use crate::data::{FieldErrors, Review, ReviewDraft, Source};

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct ReviewFormProps {
	/// Fired with the server's copy of a review once a submit lands.
	pub on_created: Callback<Review>,
}

/// The review entry form. Validation runs before any network call, a failed
/// submit keeps whatever was typed, and the submit control stays locked
/// while a request is in flight.
#[function_component]
pub fn ReviewForm(props: &ReviewFormProps) -> Html {
	let client = use_context::<api::Client>().unwrap();
	let draft = use_state(ReviewDraft::default);
	let errors = use_state(FieldErrors::default);
	let submit_error = use_state(|| None::<String>);
	let submitting = use_state(|| false);

	let edit = {
		let draft = draft.clone();
		move |apply: fn(&mut ReviewDraft, String)| {
			let draft = draft.clone();
			Callback::from(move |value: String| {
				let mut next = (*draft).clone();
				apply(&mut next, value);
				draft.set(next);
			})
		}
	};

	let rating_buttons = (1..=10u8)
		.map(|value| {
			let onclick = {
				let draft = draft.clone();
				Callback::from(move |_: MouseEvent| {
					let mut next = (*draft).clone();
					next.rating = Some(value);
					draft.set(next);
				})
			};
			let mut classes = classes! {"button", "is-small", "is-rounded"};
			if draft.rating == Some(value) {
				classes.push("is-info");
			}
			html! {
				<button class={classes} type={"button"} {onclick}>{value}</button>
			}
		})
		.collect::<Vec<_>>();

	let submit = {
		let draft = draft.clone();
		let errors = errors.clone();
		let submit_error = submit_error.clone();
		let submitting = submitting.clone();
		let client = client.clone();
		let on_created = props.on_created.clone();
		Callback::from(move |_: MouseEvent| {
			if *submitting {
				return;
			}
			let payload = match draft.validate() {
				Ok(payload) => payload,
				Err(field_errors) => {
					errors.set(field_errors);
					return;
				}
			};
			errors.set(FieldErrors::default());
			submitting.set(true);
			let draft = draft.clone();
			let submit_error = submit_error.clone();
			let submitting = submitting.clone();
			let client = client.clone();
			let on_created = on_created.clone();
			wasm_bindgen_futures::spawn_local(async move {
				match client.submit_review(&payload).await {
					Ok(review) => {
						submit_error.set(None);
						draft.set(ReviewDraft::default());
						on_created.emit(review);
					}
					Err(err) => {
						log::error!(target: "reviews", "submit failed: {err}");
						submit_error.set(Some(err.to_string()));
					}
				}
				submitting.set(false);
			});
		})
	};

	html! {<>
		<Field label={"Name:"}>
			<Control>
				<Input
					name="name" value={draft.name.clone()}
					update={edit(|draft, value| draft.name = value)}
					r#type={InputType::Text}
				/>
			</Control>
			{field_help(&errors.name)}
		</Field>
		<Field label={"Place Visited:"}>
			<Control>
				<Input
					name="place" value={draft.place.clone()}
					update={edit(|draft, value| draft.place = value)}
					r#type={InputType::Text}
				/>
			</Control>
			{field_help(&errors.place)}
		</Field>
		<Field label={"Review:"}>
			<Control>
				<TextArea
					name="review_text" value={draft.review_text.clone()}
					update={edit(|draft, value| draft.review_text = value)}
				/>
			</Control>
			{field_help(&errors.review_text)}
		</Field>
		<Field label={"Image:"}>
			<Control>
				<Input
					name="image" value={draft.image.clone()}
					update={edit(|draft, value| draft.image = value)}
					r#type={InputType::Text}
					placeholder={"Enter image URL (optional)"}
				/>
			</Control>
			{field_help(&errors.image)}
		</Field>
		<Field label={"How was your experience?"}>
			<Control>
				<div class={"buttons are-small"}>
					{rating_buttons}
				</div>
			</Control>
			{field_help(&errors.rating)}
		</Field>
		<Field label={"How did you hear about us?"}>
			<Control>
				<Select name="source" value={draft.source.clone()}
					update={edit(|draft, value| draft.source = value)}
				>
					<option value="" selected={draft.source.is_empty()}>{"Select an option"}</option>
					{Source::all().iter().map(|source| html! {
						<option
							value={source.value()}
							selected={draft.source == source.value()}
						>{source.label()}</option>
					}).collect::<Vec<_>>()}
				</Select>
			</Control>
			{field_help(&errors.source)}
		</Field>
		{match &*submit_error {
			Some(message) => html! {
				<ybc::Notification classes={"is-danger is-light"}>{message.clone()}</ybc::Notification>
			},
			None => html! {},
		}}
		<Button
			classes={"is-primary"}
			onclick={submit}
			loading={*submitting}
			disabled={*submitting}
		>
			{match *submitting {
				true => "Submitting...",
				false => "Submit Review",
			}}
		</Button>
	</>}
}

fn field_help(error: &Option<String>) -> Html {
	match error {
		Some(message) => html! { <p class="help is-danger">{message.clone()}</p> },
		None => html! {},
	}
}
