use std::{
	collections::HashMap,
	sync::{Arc, Mutex},
};

use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use vetra_domain::types::ResultItem;

/// The TTL-bounded snapshot of one search's joined results. Immutable once
/// stored; refine calls only ever read it.
#[derive(Clone, Debug)]
pub struct SearchSession {
	pub search_id: Uuid,
	pub created_at: OffsetDateTime,
	pub expires_at: OffsetDateTime,
	pub items: Vec<ResultItem>,
}

/// Volatile, single-process session store. Expiry is lazy: an expired entry
/// is dropped on the next lookup. Capacity is unbounded apart from the TTL.
pub struct SessionCache {
	ttl: Duration,
	sessions: Mutex<HashMap<Uuid, Arc<SearchSession>>>,
}
impl SessionCache {
	pub fn new(ttl: Duration) -> Self {
		Self { ttl, sessions: Mutex::new(HashMap::new()) }
	}

	pub fn ttl(&self) -> Duration {
		self.ttl
	}

	/// Stores a snapshot under `search_id`. The last put for an id wins.
	pub fn put(
		&self,
		search_id: Uuid,
		items: Vec<ResultItem>,
		now: OffsetDateTime,
	) -> Arc<SearchSession> {
		let session = Arc::new(SearchSession {
			search_id,
			created_at: now,
			expires_at: now + self.ttl,
			items,
		});

		self.lock().insert(search_id, session.clone());

		session
	}

	pub fn get(&self, search_id: Uuid, now: OffsetDateTime) -> Option<Arc<SearchSession>> {
		let mut sessions = self.lock();

		match sessions.get(&search_id) {
			Some(session) if session.expires_at > now => Some(session.clone()),
			Some(_) => {
				sessions.remove(&search_id);

				None
			},
			None => None,
		}
	}

	/// Drops every expired entry. Lazy expiry already keeps lookups correct;
	/// this only bounds memory for ids that are never looked up again.
	pub fn purge_expired(&self, now: OffsetDateTime) -> usize {
		let mut sessions = self.lock();
		let before = sessions.len();

		sessions.retain(|_, session| session.expires_at > now);

		before - sessions.len()
	}

	pub fn len(&self) -> usize {
		self.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.lock().is_empty()
	}

	fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, Arc<SearchSession>>> {
		self.sessions.lock().unwrap_or_else(|err| err.into_inner())
	}
}
