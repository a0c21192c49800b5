//! Curated word lists for Darija (Arabizi and Arabic script), French and Arabic.
//!
//! All entries are lowercase and matched against normalized text. Substring
//! lists (sentiment, keyword categories, intent indicators) avoid very short
//! stems that would fire inside unrelated words.

/// Darija marker words, Latin script (Arabizi). Matched as whole words.
pub const DARIJA_MARKERS: &[&str] = &[
    "wach", "wash", "kayn", "kayna", "kaynin", "makaynch", "bghit", "bghina", "dyal",
    "dial", "mzyan", "bzaf", "hna", "3la", "3lach", "chi", "shi", "walo", "ghadi", "daba",
    "khassni", "khass", "3ndi", "3andi", "machi", "mashi", "nta", "howa", "hiya", "7na", "bach",
    "kifach", "fin", "wakha", "safi", "zwin", "hadchi", "hadi", "had", "kan", "kanu", "kandir",
    "ndir", "nqder", "lli", "7ta", "m3a", "rah", "raha", "dima", "kolchi", "bezzaf", "chno",
];

/// French function words. Matched as whole words.
pub const FRENCH_FUNCTION_WORDS: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "du", "de", "et", "est", "pour", "dans", "avec",
    "sur", "je", "nous", "vous", "mais", "pas", "que", "qui", "très", "c'est", "il", "elle",
    "ce", "cette", "sont", "ont", "au", "aux", "par", "notre", "votre", "mon", "leur", "ses",
];

pub const POSITIVE_WORDS: &[&str] = &[
    "mzyan", "zwin", "naja7", "najah", "rbe7", "farhan", "hani", "excellent", "génial",
    "super", "réussi", "succès", "content", "satisfait", "bravo", "merci", "مزيان", "زوين",
    "ناجح", "ممتاز", "فرحان", "شكرا",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "khayb", "5ayb", "mochkil", "mouchkil", "mushkil", "problème", "mauvais", "difficile",
    "s3ib", "ghali", "trop cher", "naqs", "manque", "خايب", "مشكل", "صعب", "غالي",
];

pub const FRUSTRATION_WORDS: &[&str] = &[
    "t9ala9t", "tqalaqt", "m9ala9", "mqalaq", "3yit", "3yina", "zh9t", "f9st", "ras le bol",
    "marre", "frustré", "frustrant", "énervé", "j'en peux plus", "تقلقت", "عييت", "مقلق",
    "زهقت", "فقصت",
];

pub const PAIN_KEYWORDS: &[&str] = &[
    "mochkil", "mouchkil", "mushkil", "problème", "problem", "s3ib", "difficile", "ghali",
    "trop cher", "ta3ab", "t3ab", "panne", "retard", "t2khar", "tkhar", "manque", "naqs",
    "مشكل", "صعب", "غالي", "تعب", "ناقص",
];

pub const FREQUENCY_KEYWORDS: &[&str] = &[
    "kol nhar", "koll nhar", "kull nhar", "dima", "daymen", "chaque jour", "tous les jours",
    "souvent", "toujours", "chaque semaine", "kol simana", "kol chhar", "chaque mois",
    "bzaf dyal lmrat", "كل نهار", "ديما", "دائما", "كل سيمانة", "كل شهر",
];

pub const WILLINGNESS_KEYWORDS: &[&str] = &[
    "nkhalas", "nkhelles", "nkhless", "nkhlles", "n3ti flous", "payer", "paierais",
    "prêt à payer", "je paie", "wakha ghali", "nchri", "acheter", "abonnement", "نخلص", "نشري",
    "نعطي الفلوس",
];

pub const NEGATION_KEYWORDS: &[&str] = &[
    "machi", "mashi", "walo", "makaynch", "makayn", "ma kaynch", "ma3ndich", "jamais",
    "pas de", "n'est pas", "ne pas", "rien", "aucun", "ماشي", "والو", "ماكاين", "ماعنديش",
    "لا يوجد",
];

pub const PROBLEM_INDICATORS: &[&str] = &[
    "mochkil", "mouchkil", "problème", "problem", "makaynch", "ma kaynch", "s3ib", "difficile",
    "manque", "naqs", "ma kayn walo", "مشكل", "صعب", "ماكاينش",
];

pub const SOLUTION_INDICATORS: &[&str] = &[
    "solution", "7al", "application", "plateforme", "fikra", "idée", "propos", "ndir",
    "nsawb", "créer", "développer", "حل", "فكرة", "تطبيق", "منصة", "نصاوب",
];

pub const QUESTION_INDICATORS: &[&str] = &[
    "?", "wach", "kifach", "3lach", "chno", "achno", "imta", "comment", "pourquoi",
    "est-ce que", "combien", "quand", "واش", "كيفاش", "علاش", "شنو", "فين",
];

pub const COMPLAINT_INDICATORS: &[&str] = &[
    "ras le bol", "marre", "inacceptable", "scandale", "honte", "t9ala9t", "3yit", "7chouma",
    "hchouma", "ma3endhomch", "عييت", "حشومة", "تقلقت", "فضيحة",
];

pub const REQUEST_INDICATORS: &[&str] = &[
    "bghit", "bghina", "3afak", "afak", "svp", "s'il vous plaît", "s'il te plaît", "je veux",
    "j'aimerais", "je voudrais", "khassni", "khassna", "3awnouni", "aidez", "بغيت", "عافاك",
    "خاصني", "عاونوني",
];

/// Organization-type nouns (French, Arabizi, Arabic). Matched as whole words.
pub const ORGANIZATION_NOUNS: &[&str] = &[
    "coopérative", "cooperative", "ta3awniya", "association", "jam3iya", "entreprise",
    "société", "sarl", "startup", "ministère", "wizara", "commune", "jama3a", "ong", "banque",
    "bank", "université", "jami3a", "hôpital", "sbitar", "école", "madrasa", "تعاونية",
    "جمعية", "شركة", "وزارة", "جماعة", "بنك", "جامعة", "مستشفى", "مدرسة",
];

/// Darija number words: value and every spelling we accept
pub const DARIJA_NUMBERS: &[(i64, &[&str])] = &[
    (1, &["wa7ed", "wahed", "wa7d", "wa7da", "wahda", "واحد", "واحدة"]),
    (2, &["juj", "jouj", "zouj", "zuj", "جوج", "زوج"]),
    (3, &["tlata", "tlat", "تلاتة", "ثلاثة"]),
    (4, &["rb3a", "reb3a", "arba3a", "ربعة", "أربعة"]),
    (5, &["khamsa", "5amsa", "خمسة"]),
    (6, &["setta", "sitta", "ستة"]),
    (7, &["seb3a", "sb3a", "سبعة"]),
    (8, &["tmnya", "tmenya", "tmanya", "تمنية", "ثمانية"]),
    (9, &["ts3ud", "tes3od", "tes3a", "تسعود", "تسعة"]),
    (10, &["3achra", "3ashra", "عشرة"]),
    (11, &["7daach", "hdach", "حضاش"]),
    (12, &["tnach", "tnash", "طناش"]),
    (13, &["tlatach", "تلطاش"]),
    (14, &["rb3tach", "rba3tach", "ربعطاش"]),
    (15, &["khmstach", "khamstach", "خمسطاش"]),
    (16, &["sttach", "settach", "سطاش"]),
    (17, &["sb3tach", "sba3tach", "سبعطاش"]),
    (18, &["tmntach", "tmantach", "تمنطاش"]),
    (19, &["ts3tach", "tsa3tach", "تسعطاش"]),
    (20, &["3chrin", "3ichrin", "عشرين"]),
    (30, &["tlatin", "تلاتين"]),
    (40, &["rb3in", "arb3in", "ربعين"]),
    (50, &["khamsin", "خمسين"]),
    (60, &["sttin", "sittin", "ستين"]),
    (70, &["sb3in", "سبعين"]),
    (80, &["tmanin", "تمانين"]),
    (90, &["ts3in", "تسعين"]),
    (100, &["mya", "miya", "مية", "ميا"]),
    (200, &["mitin", "ميتين"]),
    (1_000, &["alf", "ألف", "الف"]),
    (2_000, &["alfin", "ألفين"]),
    (1_000_000, &["mlyoun", "melyoun", "mliyon", "مليون"]),
];

pub const FRENCH_NUMBERS: &[(i64, &[&str])] = &[
    (1, &["un", "une"]),
    (2, &["deux"]),
    (3, &["trois"]),
    (4, &["quatre"]),
    (5, &["cinq"]),
    (6, &["six"]),
    (7, &["sept"]),
    (8, &["huit"]),
    (9, &["neuf"]),
    (10, &["dix"]),
    (11, &["onze"]),
    (12, &["douze"]),
    (13, &["treize"]),
    (14, &["quatorze"]),
    (15, &["quinze"]),
    (16, &["seize"]),
    (17, &["dix-sept"]),
    (18, &["dix-huit"]),
    (19, &["dix-neuf"]),
    (20, &["vingt"]),
    (30, &["trente"]),
    (40, &["quarante"]),
    (50, &["cinquante"]),
    (60, &["soixante"]),
    (70, &["soixante-dix"]),
    (80, &["quatre-vingt", "quatre-vingts"]),
    (90, &["quatre-vingt-dix"]),
    (100, &["cent"]),
    (1_000, &["mille"]),
    (1_000_000, &["million", "millions"]),
];

/// Multiplier spellings accepted right after a digit run ("3 alf", "٣ مليون")
pub const MULTIPLIERS: &[(i64, &[&str])] = &[
    (1_000, &["aalaf", "alaf", "alf", "آلاف", "الاف", "ألف", "الف"]),
    (1_000_000, &["malayin", "mlyoun", "melyoun", "mliyon", "mlyon", "million", "ملايين", "مليون"]),
];

/// Eastern Arabic-Indic and extended (Persian) digit glyphs
pub const EASTERN_DIGITS: &[(char, u32)] = &[
    ('٠', 0), ('١', 1), ('٢', 2), ('٣', 3), ('٤', 4),
    ('٥', 5), ('٦', 6), ('٧', 7), ('٨', 8), ('٩', 9),
    ('۰', 0), ('۱', 1), ('۲', 2), ('۳', 3), ('۴', 4),
    ('۵', 5), ('۶', 6), ('۷', 7), ('۸', 8), ('۹', 9),
];

/// Numeric value of a Western or Eastern digit glyph
pub fn digit_value(c: char) -> Option<u32> {
    c.to_digit(10).or_else(|| {
        EASTERN_DIGITS
            .iter()
            .find(|(glyph, _)| *glyph == c)
            .map(|(_, value)| *value)
    })
}

/// Collect the lexicon entries contained in `text`
pub fn hits(text: &str, lexicon: &[&str]) -> Vec<String> {
    lexicon
        .iter()
        .filter(|entry| text.contains(*entry))
        .map(|entry| entry.to_string())
        .collect()
}
