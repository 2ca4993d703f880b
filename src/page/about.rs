use ybc::{Container, Content, Section, Subtitle, Title};
use yew::prelude::*;

#[function_component]
pub fn About() -> Html {
	html! {
		<Section>
			<Container>
				<Title>{"About"}</Title>
				<Subtitle>{"Vision"}</Subtitle>
				<Content>
					<p>
						{"Our vision is to become the most efficient exploration platform, \
						seamlessly connecting tourists and locals to travel destinations."}
					</p>
					<ol>
						<li>{"Connection: relationships with our travellers that transcend borders."}</li>
						<li>{"Authenticity: expeditions tailored to this platform and nowhere else."}</li>
						<li>{"Reliability: destinations and sites you can plan a trip around."}</li>
					</ol>
				</Content>
				<Subtitle>{"Mission"}</Subtitle>
				<Content>
					<p>
						{"To make discovering a destination, shortlisting it and hearing from \
						people who have been there a single unhurried sitting."}
					</p>
				</Content>
			</Container>
		</Section>
	}
}
