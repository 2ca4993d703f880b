use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::data::User;
use crate::response::ApiError;

/// A browser-persisted credential. Each implementor owns one local storage
/// key; values survive reloads until [`StorageValue::delete`].
pub trait StorageValue: Sized {
	fn key() -> &'static str;

	fn load() -> Option<Self>
	where
		Self: for<'de> Deserialize<'de>,
	{
		LocalStorage::get::<Self>(Self::key()).ok()
	}

	fn save(&self)
	where
		Self: Serialize,
	{
		let _ = LocalStorage::set(Self::key(), self);
	}

	fn delete() {
		LocalStorage::delete(Self::key());
	}
}

/// Token attached to requests under the bearer strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken(String);

impl StorageValue for AccessToken {
	fn key() -> &'static str {
		"access_token"
	}
}

impl From<String> for AccessToken {
	fn from(token: String) -> Self {
		Self(token)
	}
}

impl AccessToken {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

/// Issued alongside the access token and stored for parity with the server
/// contract. No refresh exchange is implemented anywhere in the stack; an
/// expired access token surfaces the server's 401 like any other failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshToken(String);

impl StorageValue for RefreshToken {
	fn key() -> &'static str {
		"refresh_token"
	}
}

impl From<String> for RefreshToken {
	fn from(token: String) -> Self {
		Self(token)
	}
}

/// Drops every persisted credential.
pub fn clear_tokens() {
	AccessToken::delete();
	RefreshToken::delete();
}

#[derive(Debug, Serialize)]
struct CredentialBody<'a> {
	username: &'a str,
	password: &'a str,
}

/// Successful login body: the user snapshot at the top level, plus tokens
/// when the server issues them (the cookie scheme sends none).
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
	#[serde(flatten)]
	pub user: User,
	#[serde(default)]
	pub access_token: Option<String>,
	#[serde(default)]
	pub refresh_token: Option<String>,
}

impl super::Client {
	/// Asks the server whether an identity is already attached to this
	/// browser. Non-success is the ordinary signed-out answer.
	pub async fn check_session(&self) -> Result<User, ApiError> {
		self.get("/check_session").send().await
	}

	pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
		self.post("/login")
			.with_json(&CredentialBody { username, password })
			.send()
			.await
	}

	pub async fn signup(&self, username: &str, password: &str) -> Result<User, ApiError> {
		self.post("/signup")
			.with_json(&CredentialBody { username, password })
			.send()
			.await
	}

	pub async fn logout(&self) -> Result<(), ApiError> {
		self.delete::<()>("/logout").send_no_content().await
	}
}

#[cfg(all(test, target_family = "wasm"))]
mod wasm_tests {
	use super::*;
	use wasm_bindgen_test::wasm_bindgen_test;

	wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

	#[wasm_bindgen_test]
	fn tokens_round_trip_through_local_storage() {
		AccessToken::from("abc".to_owned()).save();
		RefreshToken::from("def".to_owned()).save();
		assert_eq!(AccessToken::load().map(|t| t.0), Some("abc".to_owned()));
		assert_eq!(RefreshToken::load().map(|t| t.0), Some("def".to_owned()));

		clear_tokens();
		assert!(AccessToken::load().is_none());
		assert!(RefreshToken::load().is_none());
	}
}
