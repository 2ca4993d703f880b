/// Origin of the travel api server. The client is served separately during
/// development, so requests carry the full origin rather than relative paths.
pub static API_BASE: &str = "http://localhost:5555";

/// How outgoing requests prove who the user is. The server has shipped both
/// schemes at different points; a deployment picks exactly one here and every
/// call site goes through the same seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStrategy {
	/// Server-managed cookie session, attached by the browser to every fetch.
	CookieSession,
	/// Access token from local storage, sent as an Authorization header.
	BearerToken,
}

pub static AUTH_STRATEGY: AuthStrategy = AuthStrategy::CookieSession;
