use ybc::{Container, Section, Tile, Title};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::session::Session;

#[function_component]
pub fn Home() -> Html {
	let session = use_store_value::<Session>();
	let greeting = match session.user() {
		Some(user) => format!(
			"Welcome, {} to Safiri where all your travel wishes can come true!",
			user.username
		),
		None => "Welcome to Safiri where all your travel wishes can come true!".to_owned(),
	};
	html! {
		<Section>
			<Container fluid=true>
				<Title>{greeting}</Title>
				<Tile>
					<Tile vertical=true size={ybc::TileSize::Four}>
						<Tile classes={"box"}>
							<p>{"Browse the Discover page to find destinations and the sites worth seeing in each."}</p>
						</Tile>
						<Tile classes={"box"}>
							<p>{"Save the places you like; your shortlist stays with you while you explore."}</p>
						</Tile>
					</Tile>
					<Tile vertical=true size={ybc::TileSize::Four}>
						<Tile classes={"box"}>
							<p>{"Been somewhere already? Leave a review and a rating for other tourists."}</p>
						</Tile>
					</Tile>
				</Tile>
			</Container>
		</Section>
	}
}
