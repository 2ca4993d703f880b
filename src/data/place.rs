use serde::{Deserialize, Serialize};

/// A travel destination. Fetched in bulk from the catalog endpoint and
/// immutable on this side of the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
	pub id: i64,
	pub name: String,
	#[serde(default)]
	pub image: Option<String>,
	#[serde(default)]
	pub sites: Vec<Site>,
}

/// A point of interest nested under a place. No lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
	pub id: i64,
	pub name: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub image: Option<String>,
}
