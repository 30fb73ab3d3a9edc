mod params;

pub use params::{ChatReply, ChatRequest, RequestKind};

use std::path::Path;

use tracing::{info, warn};

use crate::corpus::{CorpusIndex, docs};
use crate::engine;
use crate::engine::lang::LanguageRegistry;

/// The request boundary. Owns the language registry and the corpus index,
/// both built exactly once here; request handling is read-only and total —
/// every failure mode maps to a best-effort textual reply.
pub struct ChatService {
    registry: LanguageRegistry,
    index: CorpusIndex,
}

impl ChatService {
    /// Builds the service: built-in language profiles, static corpora, and
    /// whatever documents the loader finds under `docs_dir`. A loader
    /// failure degrades to an index without documents.
    pub fn new(docs_dir: Option<&Path>) -> Self {
        let registry = LanguageRegistry::builtin();
        let documents = match docs_dir {
            Some(dir) => docs::load_documents(dir).unwrap_or_else(|e| {
                warn!(error = %e, "document loading failed, continuing without documents");
                Vec::new()
            }),
            None => Vec::new(),
        };
        let index = CorpusIndex::build(&registry, documents);
        info!(content_items = index.content().len(), "corpus index built");
        Self { registry, index }
    }

    pub fn handle(&self, request: &ChatRequest) -> ChatReply {
        match request.kind {
            RequestKind::OpenEvidence => {
                info!("request: openevidence");
                ChatReply::text(engine::evidence::expanded_info(&request.message))
            }
            RequestKind::Normal => {
                let reply = engine::answer(&self.registry, &self.index, &request.message);
                ChatReply {
                    response: reply.text,
                    suggest_openevidence: reply.suggest_evidence.then_some(true),
                }
            }
        }
    }

    /// Handles one raw JSON payload. A malformed payload never surfaces an
    /// error: it becomes the generic error reply, with no detail exposed.
    pub fn handle_json(&self, payload: &str) -> ChatReply {
        match serde_json::from_str::<ChatRequest>(payload) {
            Ok(request) => self.handle(&request),
            Err(e) => {
                warn!(error = %e, "malformed request payload");
                ChatReply::text(self.registry.default_profile().error_reply)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ChatService {
        ChatService::new(None)
    }

    #[test]
    fn greeting_round_trip() {
        let reply = service().handle_json(r#"{"message": "Bonjour"}"#);
        assert_eq!(reply.response, "Bonjour ! Comment puis-je vous aider ?");
        assert!(reply.suggest_openevidence.is_none());
    }

    #[test]
    fn openevidence_request_bypasses_matching() {
        let reply = service().handle_json(
            r#"{"message": "risque perforation", "type": "openevidence"}"#,
        );
        assert!(reply.response.contains("incidence très faible de complications"));
        // the expanded-info path never sets the flag
        assert!(reply.suggest_openevidence.is_none());
    }

    #[test]
    fn medical_query_sets_the_flag() {
        let reply = service().handle_json(r#"{"message": "quels sont les risques du polype"}"#);
        assert_eq!(reply.suggest_openevidence, Some(true));
    }

    #[test]
    fn malformed_payload_becomes_generic_error_reply() {
        let svc = service();
        for payload in ["not json", "{\"message\": 42}", "[]", ""] {
            let reply = svc.handle_json(payload);
            assert_eq!(reply.response, "Une erreur est survenue.");
            assert!(reply.suggest_openevidence.is_none());
        }
    }

    #[test]
    fn empty_message_gets_unclear_reply() {
        let reply = service().handle_json(r#"{"message": ""}"#);
        assert_eq!(reply.response, "Je n'ai pas compris votre message.");
    }

    #[test]
    fn documents_feed_the_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("fiche_regime_sans_residus.txt"),
            "Régime sans résidus : aliments autorisés riz pâtes poisson avant la coloscopie",
        )
        .unwrap();
        let svc = ChatService::new(Some(dir.path()));
        let reply = svc.handle_json(r#"{"message": "aliments autorises regime sans residus"}"#);
        assert!(
            reply.response.contains("fiche regime sans residus"),
            "got: {}",
            reply.response
        );
    }

    #[test]
    fn missing_docs_dir_degrades_silently() {
        let svc = ChatService::new(Some(Path::new("/nonexistent/frontdesk-docs")));
        let reply = svc.handle_json(r#"{"message": "Bonjour"}"#);
        assert_eq!(reply.response, "Bonjour ! Comment puis-je vous aider ?");
    }
}
