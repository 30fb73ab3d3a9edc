//! Expanded-information replies for medically flavored follow-ups.
//!
//! A much simpler path than corpus matching: the normalized message is
//! checked against fixed keyword groups, first hit wins, and one of six
//! canned paragraphs comes back wrapped in a preamble and a disclaimer.
//! Substring containment is intentional so clipped forms like "prepa" also
//! catch "preparation".

use crate::engine::normalize::normalize;

const RISK_KEYWORDS: &[&str] = &[
    "risque",
    "danger",
    "complication",
    "risk",
    "perforation",
    "hemorragie",
];
const TREATMENT_KEYWORDS: &[&str] = &[
    "traitement",
    "soigner",
    "medicament",
    "treatment",
    "guerir",
    "aspirine",
    "anticoagulant",
];
const EXAM_KEYWORDS: &[&str] = &[
    "coloscopie",
    "gastroscopie",
    "endoscopie",
    "examen",
    "camera",
    "polype",
];
const SYMPTOM_KEYWORDS: &[&str] = &["symptome", "douleur", "signe", "symptom", "mal", "ventre"];
const PREPARATION_KEYWORDS: &[&str] = &["prepa", "boire", "manger", "regime"];

const RISK_PARAGRAPH: &str = "Les études montrent une incidence très faible de complications majeures (< 0.1%). Le rapport bénéfice/risque reste très favorable pour le dépistage.";
const TREATMENT_PARAGRAPH: &str = "Les protocoles actuels préconisent une approche graduelle. Pour les traitements anticoagulants, un avis médical est indispensable avant tout acte endoscopique.";
const EXAM_PARAGRAPH: &str = "L'endoscopie est l'examen de référence pour explorer le tube digestif. Elle permet un diagnostic précis (visuel et biopsies) et parfois un traitement immédiat (ex: ablation de polypes).";
const SYMPTOM_PARAGRAPH: &str = "La présentation clinique peut être variable. L'examen clinique et l'endoscopie sont souvent nécessaires pour confirmer le diagnostic et exclure d'autres pathologies.";
const PREPARATION_PARAGRAPH: &str = "La qualité de la préparation est le facteur prédictif le plus important pour la réussite de l'examen. Il est crucial de suivre le protocole à la lettre.";
const DEFAULT_PARAGRAPH: &str = "D'après les recommandations actuelles, ce sujet nécessite une évaluation clinique approfondie.";

/// Composes the expanded-information reply for a raw message. Total: every
/// input maps to one of the six paragraphs.
pub fn expanded_info(raw: &str) -> String {
    let message = normalize(raw);
    let groups = [
        (RISK_KEYWORDS, RISK_PARAGRAPH),
        (TREATMENT_KEYWORDS, TREATMENT_PARAGRAPH),
        (EXAM_KEYWORDS, EXAM_PARAGRAPH),
        (SYMPTOM_KEYWORDS, SYMPTOM_PARAGRAPH),
        (PREPARATION_KEYWORDS, PREPARATION_PARAGRAPH),
    ];
    let paragraph = groups
        .into_iter()
        .find(|(keywords, _)| keywords.iter().any(|k| message.contains(k)))
        .map_or(DEFAULT_PARAGRAPH, |(_, paragraph)| paragraph);

    format!(
        "Voici des informations complémentaires : \n\n{paragraph}\n\n(Ceci est une réponse générée automatiquement, veuillez consulter votre médecin pour un avis personnalisé.)"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_query_gets_complication_incidence_paragraph() {
        let reply = expanded_info("risque perforation");
        assert!(reply.contains("incidence très faible de complications"));
        assert!(reply.contains("avis personnalisé"));
    }

    #[test]
    fn risk_group_outranks_exam_group() {
        // "risque" and "coloscopie" both present: group order decides
        let reply = expanded_info("risque de la coloscopie");
        assert!(reply.contains("incidence très faible"));
    }

    #[test]
    fn accents_do_not_hide_keywords() {
        let reply = expanded_info("Quels RISQUES d'hémorragie ?");
        assert!(reply.contains("incidence très faible"));
    }

    #[test]
    fn clipped_preparation_keyword_matches_by_substring() {
        let reply = expanded_info("la preparation colique");
        assert!(reply.contains("facteur prédictif"));
    }

    #[test]
    fn unknown_topic_falls_back_to_default_paragraph() {
        let reply = expanded_info("tarif du parking");
        assert!(reply.contains("évaluation clinique approfondie"));
    }

    #[test]
    fn empty_message_still_replies() {
        let reply = expanded_info("");
        assert!(reply.contains("évaluation clinique approfondie"));
    }
}
