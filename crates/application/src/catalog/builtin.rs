//! Built-in catalog content

use std::collections::BTreeMap;

use super::{CatalogData, SoundEntryData};

/// (sound, example word, substitution)
const EXAMPLES: &[(&str, &str, Option<&str>)] = &[
    ("S", "sunday", Some("SH")),
    ("F", "free", Some("TH")),
    ("L", "love", Some("R")),
    ("B", "boat", Some("V")),
    ("B2", "ball", None),
    ("P", "pen", Some("F")),
    ("T", "tree", Some("D")),
    ("A", "apple", Some("E")),
    ("Z", "zebra", Some("S")),
];

/// IPA keyed by lowercase example word
const PRONUNCIATIONS: &[(&str, &str)] = &[
    ("sunday", "sʌn.deɪ"),
    ("free", "friː"),
    ("love", "lʌv"),
    ("boat", "boʊt"),
    ("pen", "pen"),
    ("tree", "triː"),
    ("apple", "ˈæp.əl"),
    ("ball", "bɔːl"),
    ("zebra", "ˈziː.brə"),
];

const IMAGES: &[(&str, &str)] = &[
    (
        "A",
        "https://png.pngtree.com/png-vector/20231017/ourmid/pngtree-fresh-apple-fruit-red-png-image_10203073.png",
    ),
    ("Z", "https://pngimg.com/uploads/zebra/zebra_PNG95977.png"),
];

const LIPS_TOGETHER: &str = "Put your lips together to make the sound.";
const LIP_TO_TEETH: &str =
    "Place your bottom lip against your upper front teeth. Top teeth may be on your bottom lip.";
const TEETH_CLOSE: &str = "Keep your teeth close together to make the sound. The ridge right behind your two front teeth is involved. The front of your tongue is used.";
const RIDGE: &str =
    "The ridge right behind your two front teeth is involved. The front of your tongue is used.";
const FRONT_ROOF: &str =
    "The front-roof of your mouth is the right spot for the sound. The front of your tongue is used.";
const BACK_ROOF: &str =
    "The back-roof of your mouth is the right spot for the sound. The back of your tongue is used.";
const VOICELESS: &str = "Vocal cords don’t vibrate for voiceless sounds.";
const NASAL: &str = "Air flows through your nose.";

fn remedies() -> BTreeMap<String, Vec<String>> {
    let voiceless = |base: &str| vec![format!("{base} {VOICELESS}")];
    let single = |text: &str| vec![text.to_string()];

    let entries = [
        ("P", voiceless(LIPS_TOGETHER)),
        ("B", single(LIPS_TOGETHER)),
        ("B2", single(LIPS_TOGETHER)),
        ("M", vec![format!("{LIPS_TOGETHER} {NASAL}")]),
        (
            "W",
            single("Put your lips together and shape your mouth like you are saying \"oo\"."),
        ),
        ("F", single(LIP_TO_TEETH)),
        ("V", single(LIP_TO_TEETH)),
        ("S", voiceless(TEETH_CLOSE)),
        ("Z", single(TEETH_CLOSE)),
        (
            "TH",
            single(
                "Place your top teeth on your bottom lip and let your tongue go between your teeth for the sound (as in thin). The front of your tongue is involved. The front of your tongue is used.",
            ),
        ),
        ("NG", single(NASAL)),
        ("SING", single(NASAL)),
        ("L", single(RIDGE)),
        ("T", voiceless(RIDGE)),
        ("D", single(RIDGE)),
        ("CH", single(FRONT_ROOF)),
        ("J", single(FRONT_ROOF)),
        ("SH", single(FRONT_ROOF)),
        ("ZH", single(FRONT_ROOF)),
        ("K", voiceless(BACK_ROOF)),
        ("G", single(BACK_ROOF)),
        ("R", single(BACK_ROOF)),
        ("Y", single("The front of your tongue is used.")),
        (
            "H",
            single("Your lungs provide the airflow for every sound, especially this one."),
        ),
        (
            "A",
            vec![
                "Open your mouth wide with your tongue flat at the bottom, as in \"apple\"."
                    .to_string(),
                "Open your mouth wide and pull your tongue back slightly, as in \"father\"."
                    .to_string(),
            ],
        ),
    ];

    entries
        .into_iter()
        .map(|(code, steps)| (code.to_string(), steps))
        .collect()
}

fn lookup<'a>(table: &[(&str, &'a str)], key: &str) -> Option<&'a str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Built-in catalog document
pub fn builtin_data() -> CatalogData {
    let sounds = EXAMPLES
        .iter()
        .map(|&(code, word, substitution)| {
            let entry = SoundEntryData {
                word: word.to_string(),
                pronunciation: lookup(PRONUNCIATIONS, &word.to_lowercase()).map(str::to_string),
                image: lookup(IMAGES, code).map(str::to_string),
                substitution: substitution.map(str::to_string),
            };
            (code.to_string(), entry)
        })
        .collect();

    CatalogData {
        sounds,
        remedies: remedies(),
    }
}
