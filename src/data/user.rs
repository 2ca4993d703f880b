use serde::{Deserialize, Serialize};

/// Snapshot of the authenticated user as returned by the server.
/// The authoritative copy lives server-side; this one is dropped on logout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
	pub id: i64,
	pub username: String,
	#[serde(default)]
	pub image_url: Option<String>,
}
