use ybc::{Container, Content, Section, Title};
use yew::prelude::*;

#[function_component]
pub fn Contact() -> Html {
	html! {
		<Section>
			<Container>
				<Title>{"Contact Us"}</Title>
				<Content>
					<p>{"Questions, corrections or a destination we should list?"}</p>
					<ul>
						<li>{"Email: hello@safiri.example"}</li>
						<li>{"Nairobi, Kenya"}</li>
					</ul>
				</Content>
			</Container>
		</Section>
	}
}
