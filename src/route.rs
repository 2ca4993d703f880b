use yew::{html, Html};
use yew_router::Routable;

/// Maps each variant of a [`Routable`] enum to its screen. `switch` drops
/// straight into the markup of whatever component owns the routing table.
pub trait Route {
	fn html(self) -> Html;

	fn switch() -> Html
	where
		Self: Routable + 'static,
	{
		html! { <yew_router::Switch<Self> render={Self::html} /> }
	}
}
