use serde::{Deserialize, Serialize};

/// A visitor review, in the shape the server stores and returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Display name of the reviewer.
	pub name: String,
	/// Name of the place visited, free-form.
	pub place: String,
	#[serde(rename = "reviewText")]
	pub review_text: String,
	/// 1 through 10 inclusive.
	pub rating: u8,
	pub source: Source,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image: Option<String>,
}

/// Where the reviewer heard about the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
	Friends,
	Family,
	Advertisement,
	SocialMedia,
}

impl Source {
	pub fn all() -> &'static [Self] {
		&[Self::Friends, Self::Family, Self::Advertisement, Self::SocialMedia]
	}

	/// Wire value, matching the serde representation.
	pub fn value(self) -> &'static str {
		match self {
			Self::Friends => "friends",
			Self::Family => "family",
			Self::Advertisement => "advertisement",
			Self::SocialMedia => "social-media",
		}
	}

	pub fn from_value(value: &str) -> Option<Self> {
		Self::all().iter().copied().find(|source| source.value() == value)
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::Friends => "From Friends",
			Self::Family => "From Family",
			Self::Advertisement => "From an Advertisement",
			Self::SocialMedia => "From Social Media",
		}
	}
}

/// Raw review-form state, as typed. Nothing here is trusted until
/// [`ReviewDraft::validate`] turns it into a [`Review`] payload.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReviewDraft {
	pub name: String,
	pub place: String,
	pub review_text: String,
	/// Optional image URL; empty string means "not provided".
	pub image: String,
	pub rating: Option<u8>,
	/// Select value; empty string until an option is picked.
	pub source: String,
}

/// Per-field validation messages, rendered inline next to their inputs.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FieldErrors {
	pub name: Option<String>,
	pub place: Option<String>,
	pub review_text: Option<String>,
	pub image: Option<String>,
	pub rating: Option<String>,
	pub source: Option<String>,
}

impl FieldErrors {
	pub fn is_empty(&self) -> bool {
		self.name.is_none()
			&& self.place.is_none()
			&& self.review_text.is_none()
			&& self.image.is_none()
			&& self.rating.is_none()
			&& self.source.is_none()
	}
}

impl ReviewDraft {
	/// Checks every field and produces the wire payload only when all pass.
	/// Runs before any network call; a failed submit keeps the draft intact.
	pub fn validate(&self) -> Result<Review, FieldErrors> {
		let mut errors = FieldErrors::default();

		if self.name.trim().is_empty() {
			errors.name = Some("Name is required".into());
		}
		if self.place.trim().is_empty() {
			errors.place = Some("Place visited is required".into());
		}
		if self.review_text.trim().is_empty() {
			errors.review_text = Some("Review is required".into());
		}

		let image = self.image.trim();
		if !image.is_empty() && url::Url::parse(image).is_err() {
			errors.image = Some("Must be a valid URL".into());
		}

		match self.rating {
			None => errors.rating = Some("Rating is required".into()),
			Some(rating) if !(1..=10).contains(&rating) => {
				errors.rating = Some("Rating must be between 1 and 10".into());
			}
			Some(_) => {}
		}

		let source = Source::from_value(self.source.trim());
		if source.is_none() {
			errors.source = Some("Source is required".into());
		}

		if !errors.is_empty() {
			return Err(errors);
		}
		// The None arms above are unreachable past the errors check.
		let (Some(rating), Some(source)) = (self.rating, source) else {
			return Err(errors);
		};
		Ok(Review {
			id: None,
			name: self.name.trim().to_owned(),
			place: self.place.trim().to_owned(),
			review_text: self.review_text.trim().to_owned(),
			rating,
			source,
			image: match image.is_empty() {
				true => None,
				false => Some(image.to_owned()),
			},
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled_draft() -> ReviewDraft {
		ReviewDraft {
			name: "Wanjiku".into(),
			place: "Nairobi".into(),
			review_text: "Great museums and even better food.".into(),
			image: String::new(),
			rating: Some(9),
			source: "friends".into(),
		}
	}

	#[test]
	fn valid_draft_produces_payload() {
		let review = filled_draft().validate().expect("draft should validate");
		assert_eq!(review.rating, 9);
		assert_eq!(review.source, Source::Friends);
		assert_eq!(review.image, None);
		assert_eq!(review.id, None);
	}

	#[test]
	fn required_fields_reject_empty_and_whitespace() {
		let draft = ReviewDraft {
			name: "  ".into(),
			place: String::new(),
			review_text: String::new(),
			source: String::new(),
			..filled_draft()
		};
		let errors = draft.validate().unwrap_err();
		assert!(errors.name.is_some());
		assert!(errors.place.is_some());
		assert!(errors.review_text.is_some());
		assert!(errors.source.is_some());
	}

	#[test]
	fn rating_bounds_are_enforced_client_side() {
		for rating in [Some(0), Some(11), None] {
			let draft = ReviewDraft { rating, ..filled_draft() };
			let errors = draft.validate().unwrap_err();
			assert!(errors.rating.is_some(), "rating {rating:?} should be rejected");
		}
		for rating in [1, 10] {
			let draft = ReviewDraft { rating: Some(rating), ..filled_draft() };
			assert!(draft.validate().is_ok(), "rating {rating} should pass");
		}
	}

	#[test]
	fn image_must_be_a_url_when_present() {
		let draft = ReviewDraft { image: "not a url".into(), ..filled_draft() };
		assert!(draft.validate().unwrap_err().image.is_some());

		let draft = ReviewDraft { image: "https://example.com/pic.jpg".into(), ..filled_draft() };
		let review = draft.validate().expect("url image should pass");
		assert_eq!(review.image.as_deref(), Some("https://example.com/pic.jpg"));
	}

	#[test]
	fn review_text_uses_camel_case_on_the_wire() {
		let review = filled_draft().validate().unwrap();
		let json = serde_json::to_value(&review).unwrap();
		assert!(json.get("reviewText").is_some());
		assert!(json.get("review_text").is_none());
		assert_eq!(json.get("source").and_then(|v| v.as_str()), Some("friends"));
	}

	#[test]
	fn unknown_source_value_is_rejected() {
		let draft = ReviewDraft { source: "billboard".into(), ..filled_draft() };
		assert!(draft.validate().unwrap_err().source.is_some());
	}
}
