use yewdux::prelude::*;

use crate::api::auth::StorageValue;
use crate::api::{self, auth};
use crate::data::User;
use crate::response::ApiError;

/// Globally shared authentication state. The user is either fully populated
/// or absent; there is no partially authenticated state to render.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct Session {
	user: Option<User>,
	notice: Option<String>,
}

impl Session {
	pub fn user(&self) -> Option<&User> {
		self.user.as_ref()
	}

	pub fn is_authenticated(&self) -> bool {
		self.user.is_some()
	}

	/// Transient banner text, e.g. a failed sign-out.
	pub fn notice(&self) -> Option<&str> {
		self.notice.as_deref()
	}

	pub fn dismiss_notice(&mut self) {
		self.notice = None;
	}

	fn set_user(&mut self, user: User) {
		self.user = Some(user);
	}

	fn clear(&mut self) {
		self.user = None;
	}
}

/// One-shot startup probe against `/check_session`. The first paint renders
/// signed-out and upgrades when this resolves; a failure is the ordinary
/// anonymous case and only logs.
pub async fn bootstrap(client: api::Client, dispatch: Dispatch<Session>) {
	match client.check_session().await {
		Ok(user) => {
			log::debug!(target: "session", "restored session for {:?}", user.username);
			dispatch.reduce_mut(|session| session.set_user(user));
		}
		Err(err) => {
			log::debug!(target: "session", "no restorable session: {err}");
		}
	}
}

/// Single attempt, no retry. On success the user snapshot and any issued
/// tokens are stored; on failure the session stays unset and the server's
/// message comes back for the form to display.
pub async fn login(
	client: api::Client,
	dispatch: Dispatch<Session>,
	username: &str,
	password: &str,
) -> Result<(), ApiError> {
	let response = client.login(username, password).await?;
	if let Some(token) = response.access_token {
		auth::AccessToken::from(token).save();
	}
	if let Some(token) = response.refresh_token {
		auth::RefreshToken::from(token).save();
	}
	dispatch.reduce_mut(|session| session.set_user(response.user));
	Ok(())
}

/// Ends the session. Local credentials and the cached user are dropped even
/// when the server call fails, so a sign-out gesture never leaves stale
/// tokens behind; the failure is still reported on the session notice.
pub async fn logout(client: api::Client, dispatch: Dispatch<Session>) -> Result<(), ApiError> {
	let result = client.logout().await;
	auth::clear_tokens();
	dispatch.reduce_mut(|session| {
		session.clear();
		if let Err(err) = &result {
			session.notice = Some(format!("Sign out did not reach the server: {err}"));
		}
	});
	result
}

/// Registers new credentials. Deliberately does not authenticate: the caller
/// redirects to the login screen on success.
pub async fn signup(client: api::Client, username: &str, password: &str) -> Result<User, ApiError> {
	client.signup(username, password).await
}

#[cfg(test)]
mod tests {
	use super::*;

	fn visitor() -> User {
		User {
			id: 7,
			username: "amina".into(),
			image_url: None,
		}
	}

	#[test]
	fn starts_signed_out() {
		let session = Session::default();
		assert!(!session.is_authenticated());
		assert_eq!(session.user(), None);
	}

	#[test]
	fn login_success_populates_the_user() {
		let mut session = Session::default();
		session.set_user(visitor());
		assert!(session.is_authenticated());
		assert_eq!(session.user().map(|u| u.username.as_str()), Some("amina"));
	}

	#[test]
	fn clear_unsets_the_user_and_keeps_the_notice_lifecycle() {
		let mut session = Session::default();
		session.set_user(visitor());
		session.clear();
		assert!(!session.is_authenticated());

		session.notice = Some("Sign out did not reach the server".into());
		assert!(session.notice().is_some());
		session.dismiss_notice();
		assert_eq!(session.notice(), None);
	}
}
