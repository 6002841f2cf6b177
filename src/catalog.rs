use rand::Rng;

/// One syllable: its rendering in each script plus the romanized reading.
/// Romaji is lowercase by construction; user input is lowercased before
/// comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptEntry {
    pub hiragana: &'static str,
    pub katakana: &'static str,
    pub romaji: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptKind {
    Hiragana,
    Katakana,
}

impl ScriptKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ScriptKind::Hiragana => "hiragana",
            ScriptKind::Katakana => "katakana",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hiragana" => Some(ScriptKind::Hiragana),
            "katakana" => Some(ScriptKind::Katakana),
            _ => None,
        }
    }
}

impl ScriptEntry {
    pub fn glyph(&self, kind: ScriptKind) -> &'static str {
        match kind {
            ScriptKind::Hiragana => self.hiragana,
            ScriptKind::Katakana => self.katakana,
        }
    }
}

macro_rules! entry {
    ($h:literal, $k:literal, $r:literal) => {
        ScriptEntry {
            hiragana: $h,
            katakana: $k,
            romaji: $r,
        }
    };
}

/// The 46 basic gojūon syllables, in table order.
pub const ENTRIES: &[ScriptEntry] = &[
    entry!("あ", "ア", "a"),
    entry!("い", "イ", "i"),
    entry!("う", "ウ", "u"),
    entry!("え", "エ", "e"),
    entry!("お", "オ", "o"),
    entry!("か", "カ", "ka"),
    entry!("き", "キ", "ki"),
    entry!("く", "ク", "ku"),
    entry!("け", "ケ", "ke"),
    entry!("こ", "コ", "ko"),
    entry!("さ", "サ", "sa"),
    entry!("し", "シ", "shi"),
    entry!("す", "ス", "su"),
    entry!("せ", "セ", "se"),
    entry!("そ", "ソ", "so"),
    entry!("た", "タ", "ta"),
    entry!("ち", "チ", "chi"),
    entry!("つ", "ツ", "tsu"),
    entry!("て", "テ", "te"),
    entry!("と", "ト", "to"),
    entry!("な", "ナ", "na"),
    entry!("に", "ニ", "ni"),
    entry!("ぬ", "ヌ", "nu"),
    entry!("ね", "ネ", "ne"),
    entry!("の", "ノ", "no"),
    entry!("は", "ハ", "ha"),
    entry!("ひ", "ヒ", "hi"),
    entry!("ふ", "フ", "fu"),
    entry!("へ", "ヘ", "he"),
    entry!("ほ", "ホ", "ho"),
    entry!("ま", "マ", "ma"),
    entry!("み", "ミ", "mi"),
    entry!("む", "ム", "mu"),
    entry!("め", "メ", "me"),
    entry!("も", "モ", "mo"),
    entry!("や", "ヤ", "ya"),
    entry!("ゆ", "ユ", "yu"),
    entry!("よ", "ヨ", "yo"),
    entry!("ら", "ラ", "ra"),
    entry!("り", "リ", "ri"),
    entry!("る", "ル", "ru"),
    entry!("れ", "レ", "re"),
    entry!("ろ", "ロ", "ro"),
    entry!("わ", "ワ", "wa"),
    entry!("を", "ヲ", "wo"),
    entry!("ん", "ン", "n"),
];

/// Full catalog as an owned pool, the starting point of every session.
pub fn full_pool() -> Vec<ScriptEntry> {
    ENTRIES.to_vec()
}

/// Entry at `index` in `pool`, or `None` when the index is absent or out
/// of bounds. Out-of-range indices are not a fault; they render as
/// "nothing to show".
pub fn get(index: Option<usize>, pool: &[ScriptEntry]) -> Option<&ScriptEntry> {
    index.and_then(|i| pool.get(i))
}

/// Uniformly chosen valid index into `pool`, `None` when empty.
pub fn random_index(pool: &[ScriptEntry], rng: &mut impl Rng) -> Option<usize> {
    if pool.is_empty() {
        None
    } else {
        Some(rng.gen_range(0..pool.len()))
    }
}
