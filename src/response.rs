use futures::FutureExt;
use gloo_timers::future::TimeoutFuture;
use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// How long a request may stay in flight before the client gives up on it.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Everything that can go wrong talking to the travel api.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ApiError {
	/// The request never produced a response (rejected fetch, connection loss).
	#[error("request failed: {0}")]
	Network(String),
	/// The request outlived [`REQUEST_TIMEOUT_MS`].
	#[error("request timed out")]
	Timeout,
	/// Non-success status; the message prefers the server's `{error}` body.
	#[error("{message}")]
	Server { status: u16, message: String },
	/// The body was not the JSON shape the caller expected.
	#[error("invalid json: {body:?}: {detail}")]
	InvalidJson { body: String, detail: String },
}

#[derive(Deserialize)]
struct ErrorBody {
	error: String,
}

impl ApiError {
	/// Maps a non-success response to a user-facing error, preferring the
	/// server's structured `{error}` body over the bare status code.
	pub fn from_failure(status: u16, body: &str) -> Self {
		let message = match serde_json::from_str::<ErrorBody>(body) {
			Ok(ErrorBody { error }) if !error.is_empty() => error,
			_ => format!("request failed with status {status}"),
		};
		Self::Server { status, message }
	}
}

/// A pending request with a typed body. Wraps the reqwest builder so every
/// call site shares the same timeout, status handling and decode path.
pub struct Response<T> {
	builder: RequestBuilder,
	marker: std::marker::PhantomData<T>,
}

impl<T> std::fmt::Debug for Response<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.builder.fmt(f)
	}
}

impl<T> Response<T> {
	pub fn from(builder: RequestBuilder) -> Self {
		Self {
			builder,
			marker: Default::default(),
		}
	}

	pub fn with_json<Q>(mut self, json: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		self.builder = self.builder.json(json);
		self
	}

	/// Drives the fetch to completion, racing it against the request timeout.
	async fn fetch(builder: RequestBuilder) -> Result<(u16, String), ApiError> {
		let request = async move {
			let response = builder
				.send()
				.await
				.map_err(|err| ApiError::Network(err.to_string()))?;
			let status = response.status().as_u16();
			let text = response
				.text()
				.await
				.map_err(|err| ApiError::Network(err.to_string()))?;
			Ok((status, text))
		}
		.fuse();
		let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS).fuse();
		futures::pin_mut!(request, timeout);
		futures::select! {
			out = request => out,
			_ = timeout => Err(ApiError::Timeout),
		}
	}

	/// Sends the request, accepting any success status and discarding the
	/// body. For endpoints like logout that may answer 204 with nothing.
	pub async fn send_no_content(self) -> Result<(), ApiError> {
		let (status, text) = Self::fetch(self.builder).await?;
		if !(200..300).contains(&status) {
			return Err(ApiError::from_failure(status, &text));
		}
		Ok(())
	}
}

impl<T> Response<T>
where
	T: DeserializeOwned,
{
	pub async fn send(self) -> Result<T, ApiError> {
		let (status, text) = Self::fetch(self.builder).await?;
		if !(200..300).contains(&status) {
			return Err(ApiError::from_failure(status, &text));
		}
		match serde_json::from_str::<T>(&text) {
			Ok(data) => Ok(data),
			Err(err) => Err(ApiError::InvalidJson {
				body: text,
				detail: err.to_string(),
			}),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn failure_prefers_server_error_body() {
		let err = ApiError::from_failure(401, r#"{"error":"Invalid username or password"}"#);
		assert_eq!(
			err,
			ApiError::Server {
				status: 401,
				message: "Invalid username or password".into()
			}
		);
		assert_eq!(err.to_string(), "Invalid username or password");
	}

	#[test]
	fn failure_falls_back_to_status_code() {
		for body in ["", "<html>oops</html>", r#"{"error":""}"#, r#"{"detail":"x"}"#] {
			let ApiError::Server { status, message } = ApiError::from_failure(500, body) else {
				panic!("expected a server error for body {body:?}");
			};
			assert_eq!(status, 500);
			assert_eq!(message, "request failed with status 500");
		}
	}
}
