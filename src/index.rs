use ybc::{Button, NavbarItem, Notification};
use yew::prelude::*;
use yew_router::{
	prelude::{use_navigator, Link},
	Routable,
};
use yewdux::prelude::*;

use crate::components::AuthSwitch;
use crate::{api, session, util};

#[function_component]
pub fn Page() -> Html {
	let navigator = use_navigator().unwrap();
	let client = use_context::<api::Client>().unwrap();
	let (session_state, dispatch) = use_store::<session::Session>();

	let login = {
		let navigator = navigator.clone();
		Callback::from(move |_: MouseEvent| {
			navigator.push(&Route::Login);
		})
	};
	let logout = {
		let client = client.clone();
		let dispatch = dispatch.clone();
		Callback::from(move |_: MouseEvent| {
			let client = client.clone();
			let dispatch = dispatch.clone();
			util::spawn_local("session", async move {
				session::logout(client, dispatch).await
			});
		})
	};

	let notice = match session_state.notice() {
		Some(message) => {
			let dismiss = {
				let dispatch = dispatch.clone();
				Callback::from(move |_: MouseEvent| {
					dispatch.reduce_mut(session::Session::dismiss_notice);
				})
			};
			html! {
				<Notification classes={"is-warning is-light"}>
					{message.to_owned()}
					<button class={"delete"} onclick={dismiss} />
				</Notification>
			}
		}
		None => html! {},
	};

	html! {<>
		<ybc::Navbar classes={"is-dark"}
			navbrand={Some(html! {
				<Link<Route> classes={"navbar-item has-text-weight-bold"} to={Route::Home}>
					{"Safiri"}
				</Link<Route>>
			})}
			navstart={Some(html! {<>
				<Link<Route> classes={"navbar-item"} to={Route::Home}>{"Home"}</Link<Route>>
				<Link<Route> classes={"navbar-item"} to={Route::Discover}>{"Discover"}</Link<Route>>
				<Link<Route> classes={"navbar-item"} to={Route::About}>{"About"}</Link<Route>>
				<Link<Route> classes={"navbar-item"} to={Route::Review}>{"Review"}</Link<Route>>
				<Link<Route> classes={"navbar-item"} to={Route::Contact}>{"Contact Us"}</Link<Route>>
			</>})}
			navend={Some(html! {<>
				<AuthSwitch
					identified={(html! {
						<NavbarItem>
							<Button classes={"is-dark"} onclick={logout}>{"Logout"}</Button>
						</NavbarItem>
					})}
					anonymous={(html! {
						<NavbarItem>
							<Button classes={"is-primary is-dark"} onclick={login}>{"Login"}</Button>
						</NavbarItem>
					})}
				/>
			</>})}
		/>
		{notice}
		{ <Route as crate::route::Route>::switch() }
		<ybc::Footer>
			<div class={"content has-text-centered"}>
				<p>{"Safiri, where all your travel wishes can come true."}</p>
			</div>
		</ybc::Footer>
	</>}
}

#[derive(Debug, Clone, Copy, PartialEq, Routable)]
pub enum Route {
	#[at("/")]
	Home,
	#[at("/discover")]
	Discover,
	#[at("/about")]
	About,
	#[at("/review")]
	Review,
	#[at("/contact")]
	Contact,
	#[at("/signup")]
	Signup,
	#[at("/login")]
	Login,
	#[not_found]
	#[at("/404")]
	NotFound,
}

impl crate::route::Route for Route {
	fn html(self) -> Html {
		match self {
			Self::Home => html! { <crate::page::Home /> },
			Self::Discover => html! { <crate::page::Discover /> },
			Self::About => html! { <crate::page::About /> },
			Self::Review => html! { <crate::page::Review /> },
			Self::Contact => html! { <crate::page::Contact /> },
			Self::Signup => html! { <crate::page::Signup /> },
			Self::Login => html! { <crate::page::Login /> },
			Self::NotFound => html! { <h1>{"404: Page not found"}</h1> },
		}
	}
}
