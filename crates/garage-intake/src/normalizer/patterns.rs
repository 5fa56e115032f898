use regex::Regex;
use std::sync::LazyLock;

/// A contraction or shorthand rewritten before abbreviation expansion.
pub struct TypoRule {
    pub name: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
    pub replacement: &'static str,
}

macro_rules! typo_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Shorthand ──────────────────────────────────────────────────────────────
// `w/o` must run before `w/`.
typo_pattern!(RE_WITHOUT, r"(?i)\bw/o\b");
typo_pattern!(RE_WITH, r"(?i)\bw/");
typo_pattern!(RE_AMPERSAND, r"\s*&\s*");

// ── Contractions missing their apostrophe ──────────────────────────────────
typo_pattern!(RE_DOESNT, r"(?i)\bdoesnt\b");
typo_pattern!(RE_CANT, r"(?i)\bcant\b");
typo_pattern!(RE_WONT, r"(?i)\bwont\b");
typo_pattern!(RE_AINT, r"(?i)\baint\b");

/// Typo rules in application order.
pub fn typo_rules() -> Vec<TypoRule> {
    vec![
        TypoRule { name: "w/o", regex: &RE_WITHOUT, replacement: "without" },
        TypoRule { name: "w/", regex: &RE_WITH, replacement: "with " },
        TypoRule { name: "&", regex: &RE_AMPERSAND, replacement: " and " },
        TypoRule { name: "doesnt", regex: &RE_DOESNT, replacement: "does not" },
        TypoRule { name: "cant", regex: &RE_CANT, replacement: "cannot" },
        TypoRule { name: "wont", regex: &RE_WONT, replacement: "will not" },
        TypoRule { name: "aint", regex: &RE_AINT, replacement: "is not" },
    ]
}

/// Built-in expansions. Keys are lower-case whole words.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    // ── Position ──
    ("frt", "front"),
    ("frnt", "front"),
    ("rr", "rear"),
    ("lft", "left"),
    ("lt", "left"),
    ("rt", "right"),
    ("rgt", "right"),
    ("ctr", "center"),
    ("mid", "middle"),
    // ── Components ──
    ("eng", "engine"),
    ("trns", "transmission"),
    ("trans", "transmission"),
    ("brk", "brake"),
    ("brks", "brakes"),
    ("susp", "suspension"),
    ("steer", "steering"),
    ("strg", "steering"),
    ("exh", "exhaust"),
    ("exhst", "exhaust"),
    ("ac", "air conditioning"),
    ("a/c", "air conditioning"),
    ("ps", "power steering"),
    ("pwr", "power"),
    ("alt", "alternator"),
    ("batt", "battery"),
    ("rad", "radiator"),
    ("comp", "compressor"),
    ("cond", "condenser"),
    ("evap", "evaporator"),
    ("cat", "catalytic converter"),
    ("o2", "oxygen sensor"),
    ("maf", "mass airflow sensor"),
    ("tps", "throttle position sensor"),
    ("iac", "idle air control"),
    ("egr", "exhaust gas recirculation"),
    ("pcv", "positive crankcase ventilation"),
    ("abs", "anti-lock braking system"),
    ("tcs", "traction control system"),
    ("esp", "electronic stability program"),
    ("ecu", "engine control unit"),
    ("tcm", "transmission control module"),
    ("bcm", "body control module"),
    // ── Shop-ticket verbs ──
    ("sts", "states"),
    ("cus", "customer"),
    ("cust", "customer"),
    ("rplc", "replace"),
    ("rpl", "replace"),
    ("chk", "check"),
    ("insp", "inspect"),
    ("adj", "adjust"),
    ("rep", "repair"),
    ("diag", "diagnose"),
    ("dx", "diagnose"),
    // ── Sounds ──
    ("clnk", "clunk"),
    ("clnking", "clunking"),
    ("squek", "squeak"),
    ("sqk", "squeak"),
    ("grnd", "grinding"),
    ("hum", "humming"),
    ("whne", "whine"),
    ("thmp", "thump"),
    ("thmping", "thumping"),
    ("rttl", "rattle"),
    ("rtl", "rattle"),
    // ── Hindi / Hinglish ──
    ("gaadi", "vehicle"),
    ("gadi", "vehicle"),
    ("dikkat", "problem"),
    ("kharab", "broken"),
    ("awaaz", "noise"),
    ("awaz", "noise"),
    ("nahi", "not"),
    ("raha", "happening"),
    ("rahi", "happening"),
    ("lagane", "applying"),
    ("chalu", "start"),
    ("thanda", "cold"),
    ("garam", "hot"),
    // ── Popular models as vehicle type ──
    ("scooty", "scooter"),
    ("activa", "scooter"),
    ("splendor", "motorcycle"),
    ("pulsar", "motorcycle"),
    ("alto", "car"),
    ("swift", "car"),
    ("innova", "car"),
    ("ertiga", "car"),
];

/// Case-insensitive whole-word alternation over `keys`, longest key first.
/// `None` for an empty table or a pattern the regex engine rejects.
pub fn abbreviation_regex<'a>(keys: impl IntoIterator<Item = &'a str>) -> Option<Regex> {
    let mut keys: Vec<&str> = keys.into_iter().filter(|k| !k.is_empty()).collect();
    if keys.is_empty() {
        return None;
    }
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    keys.dedup();
    let alternation = keys
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).ok()
}
