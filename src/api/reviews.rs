use crate::data::Review;
use crate::response::ApiError;

impl super::Client {
	pub async fn reviews(&self) -> Result<Vec<Review>, ApiError> {
		self.get("/reviews").send().await
	}

	/// Posts a validated review and returns the stored copy, ids filled in.
	pub async fn submit_review(&self, review: &Review) -> Result<Review, ApiError> {
		self.post("/reviews").with_json(review).send().await
	}
}
