//! National strategic priorities catalog.
//!
//! Each priority maps to UN Sustainable Development Goal numbers and carries
//! a keyword list (French, Arabizi Darija and Arabic script) used to
//! auto-tag submissions. The text pipeline and the matching engine both read
//! this catalog; it has no dependencies of its own.

use serde::{Deserialize, Serialize};

/// Hits needed for full confidence in a priority
const CONFIDENCE_NORMALIZER: f32 = 3.0;

/// Static catalog entry
#[derive(Debug)]
pub struct Priority {
    pub id: &'static str,
    pub name_fr: &'static str,
    pub name_ar: &'static str,
    pub keywords: &'static [&'static str],
    pub sdgs: &'static [u8],
}

/// A priority detected in a text, with the keywords that triggered it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityMatch {
    pub priority_id: String,
    pub confidence: f32,
    pub matched_keywords: Vec<String>,
}

const CATALOG: &[Priority] = &[
    Priority {
        id: "water_security",
        name_fr: "Sécurité hydrique",
        name_ar: "الأمن المائي",
        keywords: &["lma", "l'eau", "d'eau", "water", "sécheresse", "jfaf", "irrigation", "sqi", "dessalement", "nappe", "الماء", "جفاف", "السقي"],
        sdgs: &[6],
    },
    Priority {
        id: "green_energy",
        name_fr: "Énergies renouvelables",
        name_ar: "الطاقات المتجددة",
        keywords: &["solaire", "solar", "panneau", "renouvelable", "éolien", "énergie", "taqa", "chems", "الطاقة", "الشمسية", "متجددة"],
        sdgs: &[7, 13],
    },
    Priority {
        id: "digital_transformation",
        name_fr: "Transformation numérique",
        name_ar: "التحول الرقمي",
        keywords: &["numérique", "digital", "application", "appli", "plateforme", "tatbiq", "e-commerce", "internet", "site web", "تطبيق", "رقمي", "منصة"],
        sdgs: &[9],
    },
    Priority {
        id: "agriculture",
        name_fr: "Génération Green",
        name_ar: "الجيل الأخضر",
        keywords: &["fellah", "fla7a", "agriculture", "agriculteur", "agricole", "récolte", "ferme", "l3olla", "فلاح", "فلاحة", "محصول"],
        sdgs: &[2],
    },
    Priority {
        id: "health",
        name_fr: "Santé pour tous",
        name_ar: "الصحة للجميع",
        keywords: &["sbitar", "santé", "sa7a", "hôpital", "clinique", "médecin", "tbib", "dwa", "médicament", "صحة", "طبيب", "سبيطار", "دوا"],
        sdgs: &[3],
    },
    Priority {
        id: "education",
        name_fr: "Éducation et formation",
        name_ar: "التعليم والتكوين",
        keywords: &["madrasa", "école", "ta3lim", "éducation", "formation", "étudiant", "tlamid", "قراية", "تعليم", "مدرسة", "تكوين"],
        sdgs: &[4],
    },
    Priority {
        id: "youth_employment",
        name_fr: "Emploi des jeunes",
        name_ar: "تشغيل الشباب",
        keywords: &["khdma", "emploi", "chômage", "travail", "jeunes", "chabab", "bitala", "شباب", "خدمة", "بطالة"],
        sdgs: &[8],
    },
    Priority {
        id: "women_empowerment",
        name_fr: "Autonomisation des femmes",
        name_ar: "تمكين المرأة",
        keywords: &["femmes", "femme", "entrepreneuse", "lmra", "nsa", "l3yalat", "نساء", "المرأة", "عيالات"],
        sdgs: &[5],
    },
    Priority {
        id: "tourism",
        name_fr: "Tourisme durable",
        name_ar: "السياحة المستدامة",
        keywords: &["tourisme", "touriste", "siya7a", "riad", "artisanat", "sna3a taqlidiya", "سياحة", "سياح", "صناعة تقليدية"],
        sdgs: &[8, 12],
    },
    Priority {
        id: "circular_economy",
        name_fr: "Économie circulaire",
        name_ar: "الاقتصاد الدائري",
        keywords: &["déchets", "recyclage", "plastique", "zbel", "compost", "réutilis", "نفايات", "الزبل", "إعادة التدوير"],
        sdgs: &[11, 12],
    },
];

/// The full, read-only catalog in declaration order
pub fn catalog() -> &'static [Priority] {
    CATALOG
}

/// Look up a catalog entry by id
pub fn find(id: &str) -> Option<&'static Priority> {
    CATALOG.iter().find(|p| p.id == id)
}

/// Detect every priority with at least one keyword hit, highest confidence first
pub fn detect(text: &str) -> Vec<PriorityMatch> {
    let text = text.to_lowercase();

    let mut matches: Vec<PriorityMatch> = CATALOG
        .iter()
        .filter_map(|priority| {
            let matched_keywords: Vec<String> = priority
                .keywords
                .iter()
                .filter(|kw| text.contains(*kw))
                .map(|kw| kw.to_string())
                .collect();

            if matched_keywords.is_empty() {
                return None;
            }

            let confidence = (matched_keywords.len() as f32 / CONFIDENCE_NORMALIZER).min(1.0);
            Some(PriorityMatch {
                priority_id: priority.id.to_string(),
                confidence,
                matched_keywords,
            })
        })
        .collect();

    // Stable sort keeps catalog order among equal confidences
    matches.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    matches
}
