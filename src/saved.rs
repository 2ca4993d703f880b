use yewdux::prelude::*;

use crate::data::Place;

/// View state for the Discover screen: the master catalog, the search
/// projection over it, and the visitor's saved set.
///
/// Everything here is synchronous; fetching lives in the page layer. The
/// search is an idempotent projection of the master catalog, so repeated
/// identical queries can never reorder or duplicate the visible list.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct SavedPlaces {
	catalog: Vec<Place>,
	visible: Vec<Place>,
	query: String,
	saved: Vec<Place>,
}

impl SavedPlaces {
	/// Seeds the master catalog, mirroring it into the visible list (or the
	/// projection of whatever query was typed while the fetch was in flight).
	pub fn seed(&mut self, catalog: Vec<Place>) {
		self.catalog = catalog;
		self.refilter();
	}

	/// Narrows the visible list to names containing `query`, ignoring case.
	/// An empty query restores the full catalog.
	pub fn search(&mut self, query: impl Into<String>) {
		self.query = query.into();
		self.refilter();
	}

	fn refilter(&mut self) {
		let needle = self.query.to_lowercase();
		self.visible = self
			.catalog
			.iter()
			.filter(|place| place.name.to_lowercase().contains(&needle))
			.cloned()
			.collect();
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn visible(&self) -> &[Place] {
		&self.visible
	}

	pub fn saved(&self) -> &[Place] {
		&self.saved
	}

	pub fn is_saved(&self, id: i64) -> bool {
		self.saved.iter().any(|place| place.id == id)
	}

	/// Adds a place to the saved set. Set semantics: insertion order is kept
	/// for display, a duplicate id is silently ignored. Returns whether the
	/// set changed.
	pub fn save(&mut self, place: Place) -> bool {
		if self.is_saved(place.id) {
			return false;
		}
		self.saved.push(place);
		true
	}

	/// Drops a saved place by id; an absent id is a no-op. The exit-animation
	/// delay belongs to the view layer, the removal itself is atomic.
	pub fn unsave(&mut self, id: i64) -> bool {
		let before = self.saved.len();
		self.saved.retain(|place| place.id != id);
		self.saved.len() != before
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn place(id: i64, name: &str) -> Place {
		Place {
			id,
			name: name.into(),
			image: None,
			sites: Vec::new(),
		}
	}

	fn seeded() -> SavedPlaces {
		let mut state = SavedPlaces::default();
		state.seed(vec![place(1, "Nairobi"), place(2, "Mombasa")]);
		state
	}

	#[test]
	fn seed_mirrors_the_catalog_into_the_visible_list() {
		let state = seeded();
		assert_eq!(state.visible(), &[place(1, "Nairobi"), place(2, "Mombasa")]);
	}

	#[test]
	fn search_is_a_case_insensitive_containment_filter() {
		let mut state = seeded();
		state.search("nai");
		assert_eq!(state.visible(), &[place(1, "Nairobi")]);

		state.search("MOMBASA");
		assert_eq!(state.visible(), &[place(2, "Mombasa")]);

		state.search("zanzibar");
		assert!(state.visible().is_empty());
	}

	#[test]
	fn empty_query_restores_the_full_catalog() {
		let mut state = seeded();
		state.search("nai");
		state.search("");
		assert_eq!(state.visible().len(), 2);
	}

	#[test]
	fn search_is_idempotent() {
		let mut state = seeded();
		state.search("mba");
		let first = state.visible().to_vec();
		state.search("mba");
		assert_eq!(state.visible(), first.as_slice());
	}

	#[test]
	fn seeding_with_a_query_in_flight_reapplies_it() {
		let mut state = SavedPlaces::default();
		state.search("nai");
		state.seed(vec![place(1, "Nairobi"), place(2, "Mombasa")]);
		assert_eq!(state.visible(), &[place(1, "Nairobi")]);
	}

	#[test]
	fn saving_twice_keeps_a_single_entry() {
		let mut state = seeded();
		assert!(state.save(place(1, "Nairobi")));
		assert!(!state.save(place(1, "Nairobi")));
		assert_eq!(state.saved().len(), 1);
		assert!(state.is_saved(1));
	}

	#[test]
	fn saved_entries_keep_insertion_order() {
		let mut state = seeded();
		state.save(place(2, "Mombasa"));
		state.save(place(1, "Nairobi"));
		let ids = state.saved().iter().map(|p| p.id).collect::<Vec<_>>();
		assert_eq!(ids, vec![2, 1]);
	}

	#[test]
	fn unsave_removes_and_tolerates_absent_ids() {
		let mut state = seeded();
		state.save(place(1, "Nairobi"));
		assert!(state.unsave(1));
		assert!(state.saved().is_empty());
		assert!(!state.unsave(99));
	}

	#[test]
	fn discover_scenario_end_to_end() {
		let mut state = seeded();
		state.search("nai");
		assert_eq!(state.visible().iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);
		state.save(place(1, "Nairobi"));
		state.save(place(1, "Nairobi"));
		assert_eq!(state.saved().len(), 1);
		state.unsave(1);
		assert_eq!(state.saved().len(), 0);
	}
}
