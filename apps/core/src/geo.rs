//! Moroccan city/region gazetteer.
//!
//! Shared by entity extraction (location mentions in free text) and mentor
//! matching (same-region proximity). Static reference data, never mutated.

use regex::Regex;
use std::sync::LazyLock;

/// Administrative region (2015 regional division)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    TangerTetouanAlHoceima,
    Oriental,
    FesMeknes,
    RabatSaleKenitra,
    BeniMellalKhenifra,
    CasablancaSettat,
    MarrakechSafi,
    DraaTafilalet,
    SoussMassa,
    GuelmimOuedNoun,
    LaayouneSakiaElHamra,
    DakhlaOuedEdDahab,
}

impl Region {
    pub fn name(&self) -> &'static str {
        match self {
            Region::TangerTetouanAlHoceima => "Tanger-Tétouan-Al Hoceïma",
            Region::Oriental => "Oriental",
            Region::FesMeknes => "Fès-Meknès",
            Region::RabatSaleKenitra => "Rabat-Salé-Kénitra",
            Region::BeniMellalKhenifra => "Béni Mellal-Khénifra",
            Region::CasablancaSettat => "Casablanca-Settat",
            Region::MarrakechSafi => "Marrakech-Safi",
            Region::DraaTafilalet => "Drâa-Tafilalet",
            Region::SoussMassa => "Souss-Massa",
            Region::GuelmimOuedNoun => "Guelmim-Oued Noun",
            Region::LaayouneSakiaElHamra => "Laâyoune-Sakia El Hamra",
            Region::DakhlaOuedEdDahab => "Dakhla-Oued Ed-Dahab",
        }
    }
}

/// A gazetteer entry: canonical name, region and every spelling we accept
#[derive(Debug)]
pub struct City {
    pub name: &'static str,
    pub region: Region,
    pub aliases: &'static [&'static str],
}

/// Latin (French/Arabizi) and Arabic-script spellings, all lowercase
pub const CITIES: &[City] = &[
    City { name: "Casablanca", region: Region::CasablancaSettat, aliases: &["casablanca", "casa", "dar lbida", "الدار البيضاء", "كازا"] },
    City { name: "Mohammedia", region: Region::CasablancaSettat, aliases: &["mohammedia", "المحمدية"] },
    City { name: "El Jadida", region: Region::CasablancaSettat, aliases: &["el jadida", "eljadida", "الجديدة"] },
    City { name: "Settat", region: Region::CasablancaSettat, aliases: &["settat", "سطات"] },
    City { name: "Rabat", region: Region::RabatSaleKenitra, aliases: &["rabat", "الرباط", "رباط"] },
    City { name: "Salé", region: Region::RabatSaleKenitra, aliases: &["salé", "sla", "سلا"] },
    City { name: "Kénitra", region: Region::RabatSaleKenitra, aliases: &["kénitra", "kenitra", "القنيطرة"] },
    City { name: "Témara", region: Region::RabatSaleKenitra, aliases: &["témara", "temara", "تمارة"] },
    City { name: "Marrakech", region: Region::MarrakechSafi, aliases: &["marrakech", "marrakesh", "mourrakouch", "مراكش"] },
    City { name: "Safi", region: Region::MarrakechSafi, aliases: &["safi", "آسفي", "اسفي"] },
    City { name: "Essaouira", region: Region::MarrakechSafi, aliases: &["essaouira", "swira", "الصويرة"] },
    City { name: "Fès", region: Region::FesMeknes, aliases: &["fès", "fes", "fez", "fas", "فاس"] },
    City { name: "Meknès", region: Region::FesMeknes, aliases: &["meknès", "meknes", "mknas", "مكناس"] },
    City { name: "Ifrane", region: Region::FesMeknes, aliases: &["ifrane", "إفران", "افران"] },
    City { name: "Taza", region: Region::FesMeknes, aliases: &["taza", "تازة"] },
    City { name: "Tanger", region: Region::TangerTetouanAlHoceima, aliases: &["tanger", "tangier", "tanja", "طنجة"] },
    City { name: "Tétouan", region: Region::TangerTetouanAlHoceima, aliases: &["tétouan", "tetouan", "tetwan", "تطوان"] },
    City { name: "Al Hoceïma", region: Region::TangerTetouanAlHoceima, aliases: &["al hoceima", "alhoceima", "hoceima", "الحسيمة"] },
    City { name: "Chefchaouen", region: Region::TangerTetouanAlHoceima, aliases: &["chefchaouen", "chaouen", "شفشاون"] },
    City { name: "Oujda", region: Region::Oriental, aliases: &["oujda", "wjda", "وجدة"] },
    City { name: "Nador", region: Region::Oriental, aliases: &["nador", "الناظور"] },
    City { name: "Berkane", region: Region::Oriental, aliases: &["berkane", "بركان"] },
    City { name: "Béni Mellal", region: Region::BeniMellalKhenifra, aliases: &["béni mellal", "beni mellal", "بني ملال"] },
    City { name: "Khouribga", region: Region::BeniMellalKhenifra, aliases: &["khouribga", "خريبكة"] },
    City { name: "Khénifra", region: Region::BeniMellalKhenifra, aliases: &["khénifra", "khenifra", "خنيفرة"] },
    City { name: "Errachidia", region: Region::DraaTafilalet, aliases: &["errachidia", "rachidia", "الرشيدية"] },
    City { name: "Ouarzazate", region: Region::DraaTafilalet, aliases: &["ouarzazate", "warzazat", "ورزازات"] },
    City { name: "Zagora", region: Region::DraaTafilalet, aliases: &["zagora", "زاكورة"] },
    City { name: "Agadir", region: Region::SoussMassa, aliases: &["agadir", "أكادير", "اكادير"] },
    City { name: "Taroudant", region: Region::SoussMassa, aliases: &["taroudant", "تارودانت"] },
    City { name: "Tiznit", region: Region::SoussMassa, aliases: &["tiznit", "تيزنيت"] },
    City { name: "Guelmim", region: Region::GuelmimOuedNoun, aliases: &["guelmim", "كلميم"] },
    City { name: "Laâyoune", region: Region::LaayouneSakiaElHamra, aliases: &["laâyoune", "laayoune", "layoune", "العيون"] },
    City { name: "Dakhla", region: Region::DakhlaOuedEdDahab, aliases: &["dakhla", "الداخلة"] },
];

/// One whole-word matcher per city, alternating over its aliases
static CITY_MATCHERS: LazyLock<Vec<(Regex, &'static City)>> = LazyLock::new(|| {
    CITIES
        .iter()
        .filter_map(|city| {
            let alternation = city
                .aliases
                .iter()
                .map(|alias| regex::escape(alias))
                .collect::<Vec<_>>()
                .join("|");
            Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
                .ok()
                .map(|re| (re, city))
        })
        .collect()
});

/// Resolve a free-form location string (city name in any accepted spelling)
pub fn lookup(location: &str) -> Option<&'static City> {
    let needle = location.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    CITIES
        .iter()
        .find(|city| city.aliases.iter().any(|alias| *alias == needle))
        .or_else(|| {
            CITY_MATCHERS
                .iter()
                .find(|(re, _)| re.is_match(&needle))
                .map(|(_, city)| *city)
        })
}

/// Every city mentioned in `text`, in gazetteer order, without duplicates
pub fn find_cities(text: &str) -> Vec<&'static City> {
    CITY_MATCHERS
        .iter()
        .filter(|(re, _)| re.is_match(text))
        .map(|(_, city)| *city)
        .collect()
}
