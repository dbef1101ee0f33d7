use crate::domain::ProductCatalog;
use crate::storage::StoredSession;
use shared::SessionView;

/// Maps stored sessions to the view the presentation layer renders
pub struct SessionMapper;

impl SessionMapper {
    pub fn to_view(stored: &StoredSession, catalog: &ProductCatalog) -> SessionView {
        let session = &stored.session;
        SessionView {
            session_id: stored.id.to_string(),
            created_at: stored.created_at.to_rfc3339(),
            total_inserted: session.total_inserted(),
            formatted_total: session.formatted_total(),
            pending_input: session.pending_input().to_string(),
            formatted_pending_input: session.formatted_pending_input(),
            log: session.log().to_vec(),
            log_text: session.log_text(),
            affordable_products: catalog
                .affordable(session.total_inserted())
                .into_iter()
                .map(|p| p.code.clone())
                .collect(),
        }
    }
}
