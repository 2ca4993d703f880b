use crate::data::Place;
use crate::response::ApiError;

impl super::Client {
	/// The full destination catalog.
	pub async fn locations(&self) -> Result<Vec<Place>, ApiError> {
		self.get("/locations").send().await
	}

	/// One destination by id. The server is authoritative; unknown ids come
	/// back as a server error rather than being validated here.
	pub async fn location(&self, id: i64) -> Result<Place, ApiError> {
		self.get(&format!("/locations/{id}")).send().await
	}
}
