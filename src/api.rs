use std::rc::Rc;

use crate::{config, response::Response};

use self::auth::StorageValue;

pub mod auth;
pub mod locations;
pub mod reviews;

/// Shared handle to the travel api. Cheap to clone; equality is identity so
/// it can ride through contexts and props without deep comparison.
#[derive(Clone)]
pub struct Client(Rc<Inner>);

struct Inner {
	http: reqwest::Client,
	strategy: config::AuthStrategy,
}

impl PartialEq for Client {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

impl std::fmt::Debug for Client {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Client").field("strategy", &self.0.strategy).finish()
	}
}

impl Client {
	pub fn new(strategy: config::AuthStrategy) -> Self {
		Self(Rc::new(Inner {
			http: reqwest::Client::new(),
			strategy,
		}))
	}

	fn url(path: &str) -> String {
		format!("{}{path}", config::API_BASE)
	}

	fn get<T>(&self, path: &str) -> Response<T> {
		Response::from(self.decorate(self.0.http.get(Self::url(path))))
	}

	fn post<T>(&self, path: &str) -> Response<T> {
		Response::from(self.decorate(self.0.http.post(Self::url(path))))
	}

	fn delete<T>(&self, path: &str) -> Response<T> {
		Response::from(self.decorate(self.0.http.delete(Self::url(path))))
	}

	/// Applies the configured authentication strategy to an outgoing
	/// request. The strategy is fixed at client construction; the two
	/// schemes are never mixed across call sites.
	fn decorate(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
		match self.0.strategy {
			config::AuthStrategy::CookieSession => with_browser_cookies(builder),
			config::AuthStrategy::BearerToken => match auth::AccessToken::load() {
				Some(token) => builder.bearer_auth(token.as_str()),
				None => builder,
			},
		}
	}
}

#[cfg(target_family = "wasm")]
fn with_browser_cookies(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
	builder.fetch_credentials_include()
}

// The fetch credentials knob only exists on the wasm backend.
#[cfg(not(target_family = "wasm"))]
fn with_browser_cookies(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
	builder
}
