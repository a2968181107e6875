//! Profession classifier: weighted keyword scoring over free resume text.
//!
//! Each category keeps an ordered keyword list; a keyword contributes at
//! most one point no matter how often it repeats in the text. The keyword
//! tables are injected at construction so tests can swap vocabularies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse occupation class used to gate job relevance independent of
/// specific skills. `General` is the fallback when nothing scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profession {
    Software,
    Doctor,
    Lawyer,
    Architect,
    Teacher,
    Marketing,
    Finance,
    General,
}

impl Profession {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profession::Software => "software",
            Profession::Doctor => "doctor",
            Profession::Lawyer => "lawyer",
            Profession::Architect => "architect",
            Profession::Teacher => "teacher",
            Profession::Marketing => "marketing",
            Profession::Finance => "finance",
            Profession::General => "general",
        }
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const SOFTWARE_KEYWORDS: &[&str] = &[
    "developer",
    "software",
    "engineer",
    "programmer",
    "devops",
    "python",
    "java",
    "react",
    "node",
    "backend",
    "frontend",
    "full stack",
    "cloud",
    "api",
    "docker",
    "kubernetes",
    "database",
    "html",
    "css",
    "javascript",
    "ml",
    "ai",
    "data science",
];

const DOCTOR_KEYWORDS: &[&str] = &[
    "clinic",
    "hospital",
    "medical",
    "patient",
    "treatment",
    "doctor",
    "physician",
    "surgery",
    "surgeon",
    "medicine",
    "diagnosis",
    "mbbs",
    "md",
    "icu",
    "healthcare",
    "nurse",
    "pharmacology",
    "cardiology",
    "radiology",
];

const LAWYER_KEYWORDS: &[&str] = &[
    "lawyer",
    "legal",
    "litigation",
    "court",
    "attorney",
    "advocate",
    "contract law",
    "criminal law",
    "compliance",
    "legal drafting",
    "human rights",
];

const ARCHITECT_KEYWORDS: &[&str] = &[
    "architect",
    "architecture",
    "autocad",
    "blueprint",
    "civil engineer",
    "construction",
    "planning",
    "structural design",
    "floor plan",
    "3d modelling",
    "revit",
    "interior design",
];

const TEACHER_KEYWORDS: &[&str] = &[
    "teacher",
    "teaching",
    "classroom",
    "lesson plan",
    "curriculum",
    "school",
    "faculty",
    "education",
    "training",
    "mentoring",
    "tutor",
    "lecture",
];

const MARKETING_KEYWORDS: &[&str] = &[
    "marketing",
    "digital marketing",
    "seo",
    "brand",
    "branding",
    "advertising",
    "campaign",
    "content",
    "social media",
    "market research",
    "copywriting",
];

const FINANCE_KEYWORDS: &[&str] = &[
    "finance",
    "financial",
    "accounting",
    "tax",
    "audit",
    "budgeting",
    "banking",
    "investment",
    "payroll",
    "ca",
    "cpa",
    "equity",
    "risk analysis",
];

/// Scores resume text against per-profession keyword lists.
#[derive(Debug, Clone)]
pub struct ProfessionClassifier {
    lexicon: Vec<(Profession, Vec<String>)>,
}

impl ProfessionClassifier {
    pub fn new(lexicon: Vec<(Profession, Vec<String>)>) -> Self {
        Self { lexicon }
    }

    /// Picks the category with the strictly highest keyword count.
    ///
    /// Tie-break: categories are scored in lexicon order and a later
    /// category must beat the current best, so on an equal score the
    /// earlier category wins. Empty text and a zero top score both yield
    /// `General`.
    pub fn classify(&self, text: &str) -> Profession {
        if text.trim().is_empty() {
            return Profession::General;
        }
        let haystack = text.to_lowercase();

        let mut best = Profession::General;
        let mut best_score = 0usize;
        for (profession, keywords) in &self.lexicon {
            let score = keywords
                .iter()
                .filter(|k| haystack.contains(k.as_str()))
                .count();
            if score > best_score {
                best_score = score;
                best = *profession;
            }
        }
        best
    }
}

impl Default for ProfessionClassifier {
    fn default() -> Self {
        Self::new(vec![
            (Profession::Software, owned(SOFTWARE_KEYWORDS)),
            (Profession::Doctor, owned(DOCTOR_KEYWORDS)),
            (Profession::Lawyer, owned(LAWYER_KEYWORDS)),
            (Profession::Architect, owned(ARCHITECT_KEYWORDS)),
            (Profession::Teacher, owned(TEACHER_KEYWORDS)),
            (Profession::Marketing, owned(MARKETING_KEYWORDS)),
            (Profession::Finance, owned(FINANCE_KEYWORDS)),
        ])
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_software_resume_classifies_software() {
        let classifier = ProfessionClassifier::default();
        let text = "I am a software engineer skilled in react and docker";
        assert_eq!(classifier.classify(text), Profession::Software);
    }

    #[test]
    fn test_medical_resume_classifies_doctor() {
        let classifier = ProfessionClassifier::default();
        let text = "Physician with 10 years of hospital and icu experience, \
                    focused on patient care and diagnosis";
        assert_eq!(classifier.classify(text), Profession::Doctor);
    }

    #[test]
    fn test_empty_text_is_general() {
        let classifier = ProfessionClassifier::default();
        assert_eq!(classifier.classify(""), Profession::General);
        assert_eq!(classifier.classify("   "), Profession::General);
    }

    #[test]
    fn test_unrelated_text_is_general() {
        let classifier = ProfessionClassifier::default();
        assert_eq!(
            classifier.classify("zebra umbrella xylophone"),
            Profession::General
        );
    }

    #[test]
    fn test_keyword_counts_once_per_category() {
        // One keyword repeated five times loses to two distinct keywords.
        let classifier = ProfessionClassifier::new(vec![
            (Profession::Software, vec!["python".to_string()]),
            (
                Profession::Finance,
                vec!["tax".to_string(), "audit".to_string()],
            ),
        ]);
        let text = "python python python python python, tax audit";
        assert_eq!(classifier.classify(text), Profession::Finance);
    }

    #[test]
    fn test_tie_breaks_to_earlier_category() {
        let classifier = ProfessionClassifier::new(vec![
            (Profession::Doctor, vec!["clinic".to_string()]),
            (Profession::Lawyer, vec!["court".to_string()]),
        ]);
        assert_eq!(
            classifier.classify("clinic and court"),
            Profession::Doctor
        );
    }

    #[test]
    fn test_multi_word_phrases_match() {
        let classifier = ProfessionClassifier::default();
        // "full stack" only scores through the phrase entry; paired with
        // other tech words it lands in software.
        assert_eq!(
            classifier.classify("Full stack developer, cloud and api work"),
            Profession::Software
        );
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&Profession::Software).unwrap();
        assert_eq!(json, "\"software\"");
        let back: Profession = serde_json::from_str("\"general\"").unwrap();
        assert_eq!(back, Profession::General);
    }
}
