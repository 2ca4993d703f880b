use ybc::{Column, Columns, Container, Content, Icon, Notification, Section, Subtitle, Title};
use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions};

use crate::api;
use crate::components::ReviewForm;
use crate::data;
use crate::response::ApiError;

#[function_component]
pub fn Review() -> Html {
	let client = use_context::<api::Client>().unwrap();
	let reviews = use_state(Vec::<data::Review>::new);

	let fetch = {
		let client = client.clone();
		let reviews = reviews.clone();
		use_async_with_options(
			async move {
				let fetched = client.reviews().await?;
				reviews.set(fetched);
				Ok::<(), ApiError>(())
			},
			UseAsyncOptions::enable_auto(),
		)
	};

	// The read cache is appended optimistically; no refetch after a submit.
	let on_created = {
		let reviews = reviews.clone();
		Callback::from(move |review: data::Review| {
			let mut next = (*reviews).clone();
			next.push(review);
			reviews.set(next);
		})
	};

	let review_list = match (fetch.loading, reviews.is_empty()) {
		(true, _) => html! {
			<ybc::Box>
				<Icon size={ybc::Size::Large}>
					<i class="fas fa-circle-notch fa-spin" />
				</Icon>
				<span>{"Loading reviews"}</span>
			</ybc::Box>
		},
		(false, true) => html! { <p>{"No reviews yet. Be the first!"}</p> },
		(false, false) => reviews
			.iter()
			.map(|review| {
				html! {
					<div class={"box mb-3"}>
						{review.image.as_ref().map(|url| html! {
							<figure class={"image is-64x64 mb-2"}>
								<img src={url.clone()} alt={format!("{}'s review", review.name)} />
							</figure>
						}).unwrap_or_default()}
						<p class="has-text-weight-semibold">{&review.name}</p>
						<Content classes={"is-small"}>
							<p><strong>{"Place Visited: "}</strong>{&review.place}</p>
							<p><strong>{"Review: "}</strong>{&review.review_text}</p>
							<p><strong>{"Rating: "}</strong>{review.rating}</p>
							<p><strong>{"Source: "}</strong>{review.source.label()}</p>
						</Content>
					</div>
				}
			})
			.collect::<Html>(),
	};

	html! {
		<Section>
			<Container>
				<Title>{"Review"}</Title>
				<Columns>
					<Column>
						<Subtitle>{"Submit Your Review"}</Subtitle>
						<ReviewForm {on_created} />
					</Column>
					<Column>
						<Subtitle>{"Reviews from Other Tourists"}</Subtitle>
						{fetch.error.as_ref().map(|err| html! {
							<Notification classes={"is-danger is-light"}>
								{format!("Could not load reviews: {err}")}
							</Notification>
						}).unwrap_or_default()}
						{review_list}
					</Column>
				</Columns>
			</Container>
		</Section>
	}
}
