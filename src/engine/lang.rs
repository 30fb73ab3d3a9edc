use std::collections::{HashMap, HashSet};

use serde::Deserialize;

/// Languages the assistant understands. French is the practice's working
/// language and the default when detection finds no clear signal.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Fr,
    En,
    Es,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Fr => "fr",
            Lang::En => "en",
            Lang::Es => "es",
        }
    }
}

/// Everything the engine knows about one language: detection markers, greeting
/// vocabulary, stop words, the colloquial-to-canonical synonym map, and the
/// canned replies. Immutable once built; the engine never branches on the
/// language itself, only on the data carried here.
pub struct LanguageProfile {
    pub lang: Lang,
    markers: HashSet<&'static str>,
    greetings: HashSet<&'static str>,
    stop_words: HashSet<&'static str>,
    synonyms: HashMap<&'static str, &'static str>,
    pub greeting_reply: &'static str,
    pub fallback_reply: &'static str,
    pub unclear_reply: &'static str,
    pub error_reply: &'static str,
}

impl LanguageProfile {
    pub fn is_greeting(&self, token: &str) -> bool {
        self.greetings.contains(token)
    }

    /// Meaningful tokens carry matching signal: not a stop word, longer than
    /// two characters.
    pub fn is_meaningful(&self, token: &str) -> bool {
        token.chars().count() > 2 && !self.stop_words.contains(token)
    }

    /// Replacement-mode synonym expansion: each mapped token is swapped for
    /// its canonical form. Returns unique tokens in first-encountered order,
    /// which keeps fuzzy-match iteration deterministic. Used against FAQ
    /// questions, where replacement avoids double-counting a concept.
    pub fn canonicalize(&self, tokens: &[String]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for token in tokens {
            let canonical = self
                .synonyms
                .get(token.as_str())
                .map_or(token.as_str(), |c| *c);
            if seen.insert(canonical) {
                out.push(canonical.to_owned());
            }
        }
        out
    }

    /// Union-mode synonym expansion: each mapped token contributes both its
    /// original and its canonical form. Used against long content blobs,
    /// where recall matters more than double-counting.
    pub fn expand(&self, tokens: &[String]) -> HashSet<String> {
        let mut out: HashSet<String> = tokens.iter().cloned().collect();
        for token in tokens {
            if let Some(canonical) = self.synonyms.get(token.as_str()) {
                out.insert((*canonical).to_owned());
            }
        }
        out
    }

    fn marker_hits(&self, tokens: &[String]) -> usize {
        tokens
            .iter()
            .filter(|t| self.markers.contains(t.as_str()))
            .count()
    }
}

/// The set of supported languages, detection included. The first profile is
/// the default. Built once at startup (`builtin`) or from fixtures in tests.
pub struct LanguageRegistry {
    profiles: Vec<LanguageProfile>,
}

impl LanguageRegistry {
    /// The first profile is the default language.
    pub fn new(profiles: Vec<LanguageProfile>) -> Self {
        assert!(!profiles.is_empty(), "registry needs at least one language");
        Self { profiles }
    }

    pub fn builtin() -> Self {
        Self::new(vec![french(), english(), spanish()])
    }

    pub fn profiles(&self) -> &[LanguageProfile] {
        &self.profiles
    }

    pub fn default_profile(&self) -> &LanguageProfile {
        &self.profiles[0]
    }

    pub fn get(&self, lang: Lang) -> &LanguageProfile {
        self.profiles
            .iter()
            .find(|p| p.lang == lang)
            .unwrap_or_else(|| self.default_profile())
    }

    /// Pick the language of a normalized token stream by counting marker
    /// hits. A non-default language wins only when its count is strictly
    /// greater than every other language's; ties and all-zero counts resolve
    /// to the default. The asymmetry is deliberate: short queries often carry
    /// one stray foreign word, and the default must not flip on it.
    pub fn detect(&self, tokens: &[String]) -> &LanguageProfile {
        let scores: Vec<usize> = self.profiles.iter().map(|p| p.marker_hits(tokens)).collect();
        self.profiles
            .iter()
            .enumerate()
            .skip(1)
            .find(|(i, _)| {
                scores
                    .iter()
                    .enumerate()
                    .all(|(j, s)| j == *i || scores[*i] > *s)
            })
            .map_or(self.default_profile(), |(_, p)| p)
    }
}

fn french() -> LanguageProfile {
    LanguageProfile {
        lang: Lang::Fr,
        markers: HashSet::from([
            "le", "les", "des", "du", "au", "aux", "est", "sont", "suis", "etes", "etait",
            "etaient", "je", "nous", "vous", "ils", "elles", "mon", "ma", "mes", "ton", "ta",
            "tes", "son", "sa", "ses", "notre", "votre", "quoi", "comment", "quand", "pourquoi",
            "quel", "quelle", "quels", "quelles", "dans", "sur", "sous", "avec", "sans", "pour",
            "par", "bonjour", "bonsoir", "salut", "merci", "rendez", "rdv", "douleur", "medecin",
            "aide", "ai", "besoin", "veux", "voudrais",
        ]),
        greetings: HashSet::from(["bonjour", "bonsoir", "salut"]),
        stop_words: HashSet::from([
            "le", "la", "les", "de", "du", "des", "un", "une", "est", "il", "elle", "je", "tu",
            "nous", "vous", "ils", "elles", "a", "au", "aux", "ce", "cette", "ces", "mon", "ma",
            "mes", "ton", "ta", "tes", "son", "sa", "ses", "notre", "votre", "leur", "leurs",
            "que", "qui", "quoi", "ou", "quand", "comment", "pourquoi", "quel", "quelle", "quels",
            "quelles", "sur", "sous", "dans", "par", "pour", "en", "vers", "avec", "sans", "y",
            "t", "me", "se", "c", "qu", "j", "l", "n", "d", "s", "m", "cest", "quest", "sont",
            "suis", "es", "sommes", "etes", "ete", "etait", "etaient", "donne", "moi", "toi",
            "lui", "eux", "ca", "ceci", "cela", "faire", "avoir", "etre", "aller", "voir",
            "savoir", "pouvoir", "vouloir", "devoir", "falloir", "bonjour", "merci", "svp",
            "plait", "sil", "te", "on", "numero", "num", "info", "infos", "information",
            "informations", "renseignement", "renseignements",
        ]),
        synonyms: HashMap::from([
            ("rdv", "rendez"),
            ("docteur", "medecin"),
            ("dr", "medecin"),
            ("prix", "paiement"),
            ("tarif", "paiement"),
            ("cout", "paiement"),
            ("argent", "paiement"),
            ("reglement", "paiement"),
            ("manger", "jeun"),
            ("boire", "jeun"),
            ("repas", "jeun"),
            ("nourriture", "jeun"),
            ("mal", "douleurs"),
            ("bide", "abdominale"),
            ("ventre", "abdominale"),
            ("estomac", "abdominale"),
            ("parking", "garer"),
            ("stationnement", "garer"),
            ("resultat", "resultats"),
            ("biopsie", "biopsies"),
            ("lait", "lactose"),
            ("caca", "selles"),
            ("popo", "selles"),
            ("toilette", "selles"),
            ("fesses", "anus"),
            ("derriere", "anus"),
            ("brulure", "reflux"),
            ("remontee", "reflux"),
            ("acide", "reflux"),
            ("virus", "hepatite"),
            ("contamination", "hepatite"),
            ("mici", "crohn"),
            ("rch", "rectocolite"),
            ("alcool", "cirrhose"),
            ("fibrose", "cirrhose"),
            ("constipation", "manometrie"),
            ("incontinence", "manometrie"),
            ("heures", "horaires"),
            ("heure", "horaires"),
            ("ouverture", "horaires"),
            ("fermeture", "horaires"),
            ("telephone", "contacter"),
            ("tel", "contacter"),
            ("mail", "contacter"),
            ("mails", "contacter"),
            ("email", "contacter"),
            ("emails", "contacter"),
            ("joindre", "contacter"),
            ("appeler", "contacter"),
            // anatomy
            ("intestin", "abdominale"),
            ("colon", "abdominale"),
            ("foie", "hepatique"),
            ("oesophage", "abdominale"),
            ("gorge", "oesophage"),
            ("rectum", "anus"),
            // pain and discomfort
            ("douleur", "douleurs"),
            ("souffrance", "douleurs"),
            ("bobo", "douleurs"),
            ("crampe", "douleurs"),
            ("spasme", "douleurs"),
            ("picotement", "douleurs"),
            ("lance", "douleurs"),
            ("aigreur", "reflux"),
            ("pyrosis", "reflux"),
            ("regurgitation", "reflux"),
            ("amer", "reflux"),
            // digestive symptoms
            ("vomi", "vomissements"),
            ("vomir", "vomissements"),
            ("gerber", "vomissements"),
            ("nausee", "vomissements"),
            ("ecoeurement", "vomissements"),
            ("sang", "saignement"),
            ("saigne", "saignement"),
            ("hemorragie", "saignement"),
            ("rouge", "saignement"),
            ("noir", "melena"),
            ("goudron", "melena"),
            ("diarrhee", "transit"),
            ("chiasse", "transit"),
            ("courante", "transit"),
            ("liquide", "transit"),
            ("eau", "transit"),
            ("dur", "constipation"),
            ("bloque", "constipation"),
            ("coince", "constipation"),
            ("bouche", "constipation"),
            ("gaz", "ballonnements"),
            ("pet", "ballonnements"),
            ("rot", "ballonnements"),
            ("ballonne", "ballonnements"),
            ("gonfle", "ballonnements"),
            ("air", "ballonnements"),
            ("glouglou", "ballonnements"),
            // general state
            ("fatigue", "asthenie"),
            ("epuise", "asthenie"),
            ("creve", "asthenie"),
            ("fievre", "temperature"),
            ("chaud", "temperature"),
            ("frisson", "temperature"),
            ("maigrir", "poids"),
            ("grossir", "poids"),
            ("appetit", "faim"),
            // procedures
            ("colo", "coloscopie"),
            ("gastro", "gastroscopie"),
            ("endo", "endoscopie"),
            ("camera", "endoscopie"),
            ("tuyau", "endoscopie"),
            ("fibro", "gastroscopie"),
            ("echo", "echographie"),
            ("scan", "scanner"),
            ("irm", "scanner"),
            ("operation", "intervention"),
            ("chirurgie", "intervention"),
            ("bloc", "intervention"),
            ("dormir", "anesthesie"),
            ("reveil", "anesthesie"),
            ("sedation", "anesthesie"),
            // preparation
            ("preparation", "prepa"),
            ("purge", "prepa"),
            ("sachet", "prepa"),
            ("picoprep", "prepa"),
            ("citrafleet", "prepa"),
            ("moviprep", "prepa"),
            ("colokit", "prepa"),
            ("izinova", "prepa"),
            ("kleanprep", "prepa"),
            // conditions
            ("ulcere", "pathologie"),
            ("tumeur", "pathologie"),
            ("polype", "pathologie"),
            ("kyste", "pathologie"),
            ("diverticule", "pathologie"),
            ("hernie", "pathologie"),
            ("calcul", "lithiase"),
            ("caillou", "lithiase"),
            ("pierre", "lithiase"),
            ("vesicule", "lithiase"),
            ("gluten", "coeliaque"),
            ("ble", "coeliaque"),
            ("sucre", "intolerance"),
            // administrative
            ("carte", "vitale"),
            ("vitale", "assurance"),
            ("mutuelle", "assurance"),
            ("remboursement", "paiement"),
            ("secu", "assurance"),
            ("cps", "assurance"),
            ("feuille", "papier"),
            ("ordonnance", "prescription"),
            ("papier", "document"),
            ("arret", "travail"),
            ("certificat", "document"),
            ("lettre", "courrier"),
            ("dossier", "document"),
            // urgency and feelings
            ("peur", "anxiete"),
            ("stress", "anxiete"),
            ("inquiet", "anxiete"),
            ("angoisse", "anxiete"),
            ("grave", "urgence"),
            ("urgent", "urgence"),
            ("vite", "urgence"),
            ("maintenant", "urgence"),
            ("secours", "urgence"),
            ("aide", "urgence"),
        ]),
        greeting_reply: "Bonjour ! Comment puis-je vous aider ?",
        fallback_reply: "Je ne suis pas sûr de comprendre. Vous pouvez nous contacter au 40 81 48 48 ou consulter notre page FAQ.",
        unclear_reply: "Je n'ai pas compris votre message.",
        error_reply: "Une erreur est survenue.",
    }
}

fn english() -> LanguageProfile {
    LanguageProfile {
        lang: Lang::En,
        markers: HashSet::from([
            "the", "this", "that", "these", "those", "with", "for", "from", "about", "you",
            "your", "my", "mine", "we", "our", "they", "their", "have", "has", "had", "are",
            "was", "were", "will", "would", "can", "could", "should", "what", "where", "when",
            "how", "why", "who", "which", "hello", "hi", "thanks", "please", "appointment",
            "pain", "doctor", "help", "morning", "evening", "do", "does", "did", "is", "am",
            "need", "want",
        ]),
        greetings: HashSet::from(["hello", "hi"]),
        stop_words: HashSet::from([
            "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
            "by", "from", "up", "about", "into", "over", "after", "is", "are", "was", "were",
            "be", "been", "being", "have", "has", "had", "do", "does", "did", "will", "would",
            "shall", "should", "can", "could", "may", "might", "must", "i", "you", "he", "she",
            "it", "we", "they", "my", "your", "his", "her", "its", "our", "their", "me", "him",
            "us", "them", "what", "which", "who", "whom", "whose", "where", "when", "why", "how",
            "this", "that", "these", "those", "here", "there", "please", "thanks", "thank",
            "hello", "hi",
        ]),
        synonyms: HashMap::from([
            ("rdv", "appointment"),
            ("dr", "doctor"),
            ("cost", "payment"),
            ("price", "payment"),
            ("pay", "payment"),
            ("eat", "fasting"),
            ("drink", "fasting"),
            ("food", "fasting"),
            ("meal", "fasting"),
            ("hurt", "pain"),
            ("ache", "pain"),
            ("stomach", "abdominal"),
            ("belly", "abdominal"),
            ("location", "park"),
            ("address", "park"),
            ("parking", "park"),
            ("result", "results"),
            ("poop", "stool"),
            ("burn", "reflux"),
            ("acid", "reflux"),
            ("virus", "hepatitis"),
            ("alcohol", "cirrhosis"),
            ("open", "hours"),
            ("close", "hours"),
            ("time", "hours"),
        ]),
        greeting_reply: "Hello! How can I help you?",
        fallback_reply: "I'm not sure I understand. You can contact us at 40 81 48 48 or check our FAQ page.",
        unclear_reply: "I didn't understand your message.",
        error_reply: "An error occurred.",
    }
}

fn spanish() -> LanguageProfile {
    LanguageProfile {
        lang: Lang::Es,
        markers: HashSet::from([
            "el", "los", "las", "un", "una", "unos", "unas", "es", "son", "fue", "fueron",
            "estoy", "estas", "esta", "estamos", "estan", "yo", "usted", "nosotros", "vosotros",
            "ellos", "ellas", "que", "como", "donde", "cuando", "porque", "quien", "cual", "por",
            "para", "con", "del", "al", "sin", "hola", "gracias", "cita", "dolor", "medico",
            "ayuda", "buenos", "dias", "tarde", "noche", "tengo", "necesito", "quiero",
        ]),
        greetings: HashSet::from(["hola", "buenos", "dias"]),
        stop_words: HashSet::from([
            "el", "la", "los", "las", "un", "una", "unos", "unas", "y", "o", "pero", "si", "no",
            "en", "a", "de", "del", "al", "por", "para", "con", "sin", "sobre", "es", "son",
            "fue", "fueron", "ser", "estar", "estoy", "estas", "esta", "estamos", "estan",
            "haber", "hay", "tener", "tengo", "tienes", "tiene", "tenemos", "tienen", "yo", "tu",
            "ella", "nosotros", "vosotros", "ellos", "ellas", "mi", "su", "nuestro", "vuestro",
            "me", "te", "le", "nos", "os", "les", "que", "quien", "donde", "cuando", "como",
            "porque", "cual", "cuales", "este", "estos", "ese", "esa", "esos", "esas", "aquel",
            "aquella", "aquellos", "aquellas", "hola", "gracias", "favor",
        ]),
        synonyms: HashMap::from([
            ("cita", "consulta"),
            ("dr", "medico"),
            ("doctor", "medico"),
            ("precio", "pago"),
            ("costo", "pago"),
            ("pagar", "pago"),
            ("comer", "ayunas"),
            ("beber", "ayunas"),
            ("comida", "ayunas"),
            ("alimentos", "ayunas"),
            ("doler", "dolor"),
            ("estomago", "abdominal"),
            ("barriga", "abdominal"),
            ("direccion", "aparcar"),
            ("ubicacion", "aparcar"),
            ("estacionamiento", "aparcar"),
            ("parking", "aparcar"),
            ("resultado", "resultados"),
            ("caca", "heces"),
            ("ardor", "reflujo"),
            ("acidez", "reflujo"),
            ("virus", "hepatitis"),
            ("alcohol", "cirrosis"),
            ("horas", "horarios"),
            ("abierto", "horarios"),
            ("cerrado", "horarios"),
            ("tiempo", "horarios"),
        ]),
        greeting_reply: "¡Hola! ¿En qué puedo ayudarle?",
        fallback_reply: "No estoy seguro de entender. Puede contactarnos al 40 81 48 48 o consultar nuestra página de preguntas frecuentes.",
        unclear_reply: "No he entendido su mensaje.",
        error_reply: "Ha ocurrido un error.",
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Two-language registry with tiny vocabularies, for tests that need
    /// full control over detection and expansion.
    pub fn registry() -> LanguageRegistry {
        LanguageRegistry::new(vec![
            LanguageProfile {
                lang: Lang::Fr,
                markers: HashSet::from(["bonjour", "je", "le"]),
                greetings: HashSet::from(["bonjour"]),
                stop_words: HashSet::from(["le", "je", "une"]),
                synonyms: HashMap::from([("colo", "coloscopie")]),
                greeting_reply: "salut-fixture",
                fallback_reply: "fallback-fixture",
                unclear_reply: "unclear-fixture",
                error_reply: "error-fixture",
            },
            LanguageProfile {
                lang: Lang::En,
                markers: HashSet::from(["hello", "the", "how"]),
                greetings: HashSet::from(["hello"]),
                stop_words: HashSet::from(["the", "a"]),
                synonyms: HashMap::from([("rdv", "appointment")]),
                greeting_reply: "hello-fixture",
                fallback_reply: "fallback-fixture-en",
                unclear_reply: "unclear-fixture-en",
                error_reply: "error-fixture-en",
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::normalize::tokenize;

    #[test]
    fn pure_marker_query_selects_its_language() {
        let registry = LanguageRegistry::builtin();
        let tokens = tokenize("how do you make this work");
        assert_eq!(registry.detect(&tokens).lang, Lang::En);

        let tokens = tokenize("donde esta el consultorio");
        assert_eq!(registry.detect(&tokens).lang, Lang::Es);
    }

    #[test]
    fn no_signal_falls_back_to_default() {
        let registry = LanguageRegistry::builtin();
        let tokens = tokenize("coloscopie");
        assert_eq!(registry.detect(&tokens).lang, Lang::Fr);
        assert_eq!(registry.detect(&[]).lang, Lang::Fr);
    }

    #[test]
    fn tie_with_default_resolves_to_default() {
        let registry = fixtures::registry();
        // one marker each: "je" (fr) and "hello" (en)
        let tokens = tokenize("je hello");
        assert_eq!(registry.detect(&tokens).lang, Lang::Fr);
    }

    #[test]
    fn non_default_needs_strict_majority_over_all_others() {
        let registry = LanguageRegistry::builtin();
        // "que" and "como" are Spanish markers, "the" and "is" English ones:
        // 2 vs 2 must not leave the default.
        let tokens = tokenize("que como the is");
        assert_eq!(registry.detect(&tokens).lang, Lang::Fr);
        // one more English marker breaks the tie
        let tokens = tokenize("que como the is what");
        assert_eq!(registry.detect(&tokens).lang, Lang::En);
    }

    #[test]
    fn french_query_with_one_english_word_stays_french() {
        let registry = LanguageRegistry::builtin();
        let tokens = tokenize("je voudrais un appointment pour le docteur");
        assert_eq!(registry.detect(&tokens).lang, Lang::Fr);
    }

    #[test]
    fn canonicalize_replaces_and_dedupes() {
        let registry = LanguageRegistry::builtin();
        let profile = registry.get(Lang::Fr);
        let tokens = tokenize("docteur dr colo");
        // "docteur" and "dr" both map to "medecin"; replacement mode keeps one
        assert_eq!(profile.canonicalize(&tokens), vec!["medecin", "coloscopie"]);
    }

    #[test]
    fn expand_keeps_original_and_canonical() {
        let registry = LanguageRegistry::builtin();
        let profile = registry.get(Lang::Fr);
        let expanded = profile.expand(&tokenize("colo demain"));
        assert!(expanded.contains("colo"));
        assert!(expanded.contains("coloscopie"));
        assert!(expanded.contains("demain"));
    }

    #[test]
    fn meaningful_excludes_stop_words_and_short_tokens() {
        let registry = LanguageRegistry::builtin();
        let profile = registry.get(Lang::Fr);
        assert!(profile.is_meaningful("coloscopie"));
        assert!(!profile.is_meaningful("les"));
        assert!(!profile.is_meaningful("tu"));
        assert!(!profile.is_meaningful("ab"));
    }

    #[test]
    fn every_builtin_greeting_word_is_a_marker_of_its_language() {
        // detection must land on the right profile before the greeting check
        for profile in LanguageRegistry::builtin().profiles() {
            for greeting in &profile.greetings {
                assert!(
                    profile.markers.contains(greeting),
                    "{} missing marker {greeting}",
                    profile.lang.code()
                );
            }
        }
    }

    #[test]
    fn lang_deserializes_from_json() {
        let fr: Lang = serde_json::from_str(r#""fr""#).unwrap();
        assert!(matches!(fr, Lang::Fr));
        let es: Lang = serde_json::from_str(r#""es""#).unwrap();
        assert!(matches!(es, Lang::Es));
    }
}
