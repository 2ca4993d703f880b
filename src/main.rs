use yew::prelude::*;
use yew_router::BrowserRouter;
use yewdux::prelude::*;

mod api;
mod components;
mod config;
mod data;
mod index;
mod page;
mod response;
mod route;
mod saved;
mod session;
mod util;

fn main() {
	wasm_logger::init(wasm_logger::Config::default());
	gloo_utils::document().set_title("Safiri");
	yew::Renderer::<App>::new().render();
}

#[function_component]
fn App() -> Html {
	let client = use_memo((), |_| api::Client::new(config::AUTH_STRATEGY));
	let (_, dispatch) = use_store::<session::Session>();

	// One session probe per application load. The tree below renders the
	// signed-out view immediately and upgrades when the probe resolves.
	{
		let client = (*client).clone();
		let dispatch = dispatch.clone();
		use_effect_with((), move |_| {
			wasm_bindgen_futures::spawn_local(session::bootstrap(client, dispatch));
		});
	}

	html! {
		<BrowserRouter>
			<ContextProvider<api::Client> context={(*client).clone()}>
				<index::Page />
			</ContextProvider<api::Client>>
		</BrowserRouter>
	}
}
