pub mod content;
pub mod docs;
pub mod faq;

use std::collections::HashSet;

use crate::engine::lang::{Lang, LanguageProfile, LanguageRegistry};
use crate::engine::normalize::{normalize, tokenize};

use docs::Document;

/// Category of a non-FAQ corpus item, used to phrase the reply template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Exam,
    Pathology,
    Guide,
    Article,
    Document,
}

impl ItemKind {
    /// Label spliced into reply templates. Content replies are phrased in the
    /// site's primary language regardless of the detected query language.
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Exam => "examen",
            ItemKind::Pathology => "pathologie",
            ItemKind::Guide => "guide",
            ItemKind::Article => "article",
            ItemKind::Document => "document",
        }
    }
}

/// One curated question/answer pair, normalized once at build time.
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    norm_question: String,
    /// Unique question tokens in first-encountered order; deterministic
    /// iteration keeps fuzzy matching reproducible.
    tokens: Vec<String>,
    /// How many of `tokens` are meaningful under the owning language,
    /// precomputed for the coverage signal.
    meaningful: usize,
}

impl FaqEntry {
    pub fn new(profile: &LanguageProfile, question: &str, answer: &str) -> Self {
        let norm_question = normalize(question);
        let mut seen = HashSet::new();
        let tokens: Vec<String> = norm_question
            .split_whitespace()
            .filter(|t| seen.insert(*t))
            .map(str::to_owned)
            .collect();
        let meaningful = tokens.iter().filter(|t| profile.is_meaningful(t)).count();
        Self {
            question: question.to_owned(),
            answer: answer.to_owned(),
            norm_question,
            tokens,
            meaningful,
        }
    }

    pub fn norm_question(&self) -> &str {
        &self.norm_question
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn meaningful(&self) -> usize {
        self.meaningful
    }
}

/// One searchable site item (exam, pathology, guide, article or extracted
/// document): a display title, a target URL, and the token set of its
/// searchable blob. Normalized once at build time.
pub struct ContentItem {
    pub kind: ItemKind,
    pub title: String,
    pub url: String,
    norm_title: String,
    tokens: HashSet<String>,
}

impl ContentItem {
    /// `blob` is the concatenation of every text field worth matching on;
    /// callers include the title.
    pub fn new(kind: ItemKind, title: &str, url: &str, blob: &str) -> Self {
        Self {
            kind,
            title: title.to_owned(),
            url: url.to_owned(),
            norm_title: normalize(title),
            tokens: tokenize(blob).into_iter().collect(),
        }
    }

    fn from_document(doc: Document) -> Self {
        let blob = format!("{} {}", doc.title, doc.text);
        Self::new(ItemKind::Document, &doc.title, &doc.url, &blob)
    }

    pub fn norm_title(&self) -> &str {
        &self.norm_title
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }
}

/// All scorable corpora, built once at startup and only read afterwards.
/// Per-language FAQ corpora plus the language-agnostic content corpus
/// (structured site records and loader-supplied documents).
pub struct CorpusIndex {
    faqs: Vec<(Lang, Vec<FaqEntry>)>,
    content: Vec<ContentItem>,
}

impl CorpusIndex {
    pub fn build(registry: &LanguageRegistry, documents: Vec<Document>) -> Self {
        let faqs = registry
            .profiles()
            .iter()
            .map(|profile| {
                let entries = faq::entries(profile.lang)
                    .iter()
                    .map(|(q, a)| FaqEntry::new(profile, q, a))
                    .collect();
                (profile.lang, entries)
            })
            .collect();

        let mut content = content::items();
        content.extend(documents.into_iter().map(ContentItem::from_document));

        Self { faqs, content }
    }

    /// Index over explicit corpora, for tests with fixture data.
    pub fn from_parts(faqs: Vec<(Lang, Vec<FaqEntry>)>, content: Vec<ContentItem>) -> Self {
        Self { faqs, content }
    }

    pub fn faqs(&self, lang: Lang) -> &[FaqEntry] {
        self.faqs
            .iter()
            .find(|(l, _)| *l == lang)
            .map_or(&[], |(_, entries)| entries.as_slice())
    }

    pub fn content(&self) -> &[ContentItem] {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faq_entry_is_normalized_once_and_deduped() {
        let registry = LanguageRegistry::builtin();
        let entry = FaqEntry::new(
            registry.get(Lang::Fr),
            "Dois-je être à jeun avant une endoscopie ?",
            "Oui.",
        );
        assert_eq!(entry.norm_question(), "dois je etre a jeun avant une endoscopie  ");
        assert!(entry.contains("jeun"));
        assert!(entry.contains("endoscopie"));
        // meaningful: dois, jeun, avant, endoscopie — je/etre/a/une are stop
        // words or too short
        assert_eq!(entry.meaningful(), 4);
    }

    #[test]
    fn content_item_matches_blob_not_just_title() {
        let item = ContentItem::new(
            ItemKind::Exam,
            "Coloscopie",
            "/examens/coloscopie",
            "Coloscopie Prévention et diagnostic des maladies du côlon polypes retirés",
        );
        assert!(item.contains("polypes"));
        assert!(item.contains("colon"));
        assert_eq!(item.norm_title(), "coloscopie");
    }

    #[test]
    fn builtin_index_has_every_language_corpus() {
        let registry = LanguageRegistry::builtin();
        let index = CorpusIndex::build(&registry, Vec::new());
        for profile in registry.profiles() {
            assert!(
                !index.faqs(profile.lang).is_empty(),
                "no FAQ corpus for {}",
                profile.lang.code()
            );
        }
        assert!(!index.content().is_empty());
    }

    #[test]
    fn documents_join_the_content_corpus() {
        let registry = LanguageRegistry::builtin();
        let doc = Document {
            title: "Regime sans residus".to_owned(),
            url: "/documents/regime_sans_residus.txt".to_owned(),
            text: "Aliments autorisés pendant trois jours avant la coloscopie".to_owned(),
        };
        let index = CorpusIndex::build(&registry, vec![doc]);
        let item = index
            .content()
            .iter()
            .find(|i| i.kind == ItemKind::Document)
            .unwrap();
        assert_eq!(item.title, "Regime sans residus");
        assert!(item.contains("autorises"));
    }
}
