use uuid::Uuid;

/// Session identity for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSession {
    pub id: String,
    /// `true` when the identifier was generated for this request.
    pub is_new: bool,
}

/// Pass a client-supplied token through unchanged, or generate a fresh UUID v4.
///
/// No format validation is applied to a supplied token. It is only ever bound
/// as a statement parameter.
pub fn resolve_session(token: Option<&str>) -> ResolvedSession {
    match token {
        Some(id) => ResolvedSession { id: id.to_owned(), is_new: false },
        None => ResolvedSession { id: Uuid::new_v4().to_string(), is_new: true },
    }
}
