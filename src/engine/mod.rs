//! The matching engine: one stateless pass per query.
//!
//! Pipeline: normalize → detect language → greeting short-circuit → rank the
//! language's FAQ corpus then the shared content corpus → compose the reply.
//! A cross-language medical-keyword scan runs alongside and sets a
//! side-channel flag offering the expanded-information path. Every input
//! produces a reply; there is no failure path past this module.

pub mod evidence;
pub mod lang;
pub mod normalize;
pub mod score;

use tracing::{debug, info};

use crate::corpus::CorpusIndex;
use lang::LanguageRegistry;
use normalize::normalize;
use score::{BestMatch, MatchSource};

/// Tokens that mark a query as medical enough to offer expanded information.
/// One flat cross-language set, matched on raw (pre-synonym) tokens.
const MEDICAL_KEYWORDS: &[&str] = &[
    "maladie",
    "traitement",
    "symptome",
    "douleur",
    "cancer",
    "examen",
    "medicament",
    "effets",
    "risques",
    "disease",
    "treatment",
    "symptom",
    "pain",
    "exam",
    "drug",
    "risk",
    "enfermedad",
    "tratamiento",
    "sintoma",
    "dolor",
    "riesgo",
    "crohn",
    "rch",
    "rectocolite",
    "hepatite",
    "cirrhose",
    "ulcere",
    "polype",
    "diverticule",
    "coloscopie",
    "gastroscopie",
    "endoscopie",
];

/// Composed reply plus the expanded-information offer flag.
#[derive(Debug, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub suggest_evidence: bool,
}

impl Reply {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            suggest_evidence: false,
        }
    }
}

/// Answers one query. Total: every input, including empty or adversarial
/// text, maps to a reply.
pub fn answer(registry: &LanguageRegistry, index: &CorpusIndex, raw: &str) -> Reply {
    let norm = normalize(raw);
    let tokens: Vec<String> = norm.split_whitespace().map(str::to_owned).collect();

    // Empty input never reaches language-specific processing.
    if tokens.is_empty() {
        return Reply::plain(registry.default_profile().unclear_reply);
    }

    let profile = registry.detect(&tokens);
    let suggest_evidence = tokens
        .iter()
        .any(|t| MEDICAL_KEYWORDS.contains(&t.as_str()));

    // A greeting wins over matching even when the message also contains
    // corpus-matching tokens.
    if tokens.iter().any(|t| profile.is_greeting(t)) {
        info!(lang = profile.lang.code(), "greeting");
        return Reply {
            text: profile.greeting_reply.to_owned(),
            suggest_evidence,
        };
    }

    let best = score::rank(index, profile, &norm, &tokens);
    let text = match &best {
        Some(m) => {
            if m.score < score::SCORE_FLOOR {
                debug!(score = m.score, "best match below floor, replying best-effort");
            }
            compose(m)
        }
        None => profile.fallback_reply.to_owned(),
    };

    info!(
        lang = profile.lang.code(),
        score = best.as_ref().map_or(0.0, |m| m.score),
        suggest_evidence,
        "query answered"
    );

    Reply {
        text,
        suggest_evidence,
    }
}

fn compose(best: &BestMatch<'_>) -> String {
    match best.source {
        MatchSource::Faq(entry) => entry.answer.clone(),
        MatchSource::Content(item) => format!(
            "Je vous suggère de consulter notre fiche {} sur '{}'. <br><a href='{}'>Cliquez ici pour voir la page</a>.",
            item.kind.label(),
            item.title,
            item.url
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{ContentItem, CorpusIndex, FaqEntry, ItemKind};
    use crate::engine::lang::{Lang, fixtures};

    fn builtin() -> (LanguageRegistry, CorpusIndex) {
        let registry = LanguageRegistry::builtin();
        let index = CorpusIndex::build(&registry, Vec::new());
        (registry, index)
    }

    #[test]
    fn greeting_short_circuits_matching() {
        let (registry, index) = builtin();
        let reply = answer(&registry, &index, "Bonjour");
        assert_eq!(reply.text, "Bonjour ! Comment puis-je vous aider ?");
        assert!(!reply.suggest_evidence);
    }

    #[test]
    fn greeting_wins_even_with_matching_tokens() {
        let (registry, index) = builtin();
        let reply = answer(&registry, &index, "bonjour combien dure une coloscopie");
        assert_eq!(reply.text, "Bonjour ! Comment puis-je vous aider ?");
        // the medical scan still runs on the greeting path
        assert!(reply.suggest_evidence);
    }

    #[test]
    fn colonoscopy_duration_hits_the_faq_answer() {
        let (registry, index) = builtin();
        let reply = answer(&registry, &index, "Combien de temps dure une coloscopie");
        assert_eq!(
            reply.text,
            "Environ 20 à 30 minutes, plus le temps de préparation et de réveil."
        );
        assert!(reply.suggest_evidence, "coloscopie is a medical keyword");
    }

    #[test]
    fn english_query_gets_the_english_booking_answer() {
        let (registry, index) = builtin();
        let reply = answer(&registry, &index, "How to make an appointment");
        assert_eq!(
            reply.text,
            "You can make an appointment by phone at 40 81 48 48, on Maiia, or via the contact form on the website."
        );
    }

    #[test]
    fn degraded_shorthand_never_panics() {
        let (registry, index) = builtin();
        // "cb" and "tps" have no synonym entries: expect a weak match or the
        // fallback, never a crash
        let reply = answer(&registry, &index, "cb de tps pr coloscopie");
        assert!(!reply.text.is_empty());
    }

    #[test]
    fn empty_input_short_circuits_before_detection() {
        let (registry, index) = builtin();
        for raw in ["", "   ", "\t\n", "?!?"] {
            let reply = answer(&registry, &index, raw);
            assert_eq!(reply.text, "Je n'ai pas compris votre message.");
            assert!(!reply.suggest_evidence);
        }
    }

    #[test]
    fn unmatched_query_falls_back_in_the_detected_language() {
        let (registry, index) = builtin();
        let reply = answer(&registry, &index, "when will the next eclipse happen");
        assert_eq!(
            reply.text,
            "I'm not sure I understand. You can contact us at 40 81 48 48 or check our FAQ page."
        );
    }

    #[test]
    fn fallback_used_when_nothing_scores() {
        let registry = fixtures::registry();
        let faqs = vec![(
            Lang::Fr,
            vec![FaqEntry::new(
                registry.default_profile(),
                "Question ciblee inatteignable",
                "reponse",
            )],
        )];
        let index = CorpusIndex::from_parts(faqs, Vec::new());
        let reply = answer(&registry, &index, "zzz yyy xxx");
        assert_eq!(reply.text, "fallback-fixture");
    }

    #[test]
    fn content_reply_is_a_templated_pointer() {
        let registry = fixtures::registry();
        let content = vec![ContentItem::new(
            ItemKind::Guide,
            "Preparation coloscopie",
            "/guides/#preparation-coloscopie",
            "Preparation coloscopie regime laxatif liquides clairs hydratation",
        )];
        let index = CorpusIndex::from_parts(vec![(Lang::Fr, Vec::new())], content);
        let reply = answer(&registry, &index, "regime laxatif hydratation");
        assert!(reply.text.contains("fiche guide"));
        assert!(reply.text.contains("Preparation coloscopie"));
        assert!(reply.text.contains("href='/guides/#preparation-coloscopie'"));
    }

    #[test]
    fn medical_scan_uses_raw_tokens_not_substrings() {
        let (registry, index) = builtin();
        // "recherche" contains "rch" as a substring but is not the token
        let reply = answer(&registry, &index, "je recherche votre adresse");
        assert!(!reply.suggest_evidence);

        let reply = answer(&registry, &index, "quels sont les risques");
        assert!(reply.suggest_evidence);
    }

    #[test]
    fn spanish_query_answers_from_the_spanish_corpus() {
        let (registry, index) = builtin();
        let reply = answer(&registry, &index, "¿Cuánto dura una colonoscopia?");
        assert_eq!(
            reply.text,
            "Unos 20 a 30 minutos, más el tiempo de preparación y recuperación."
        );
    }
}
