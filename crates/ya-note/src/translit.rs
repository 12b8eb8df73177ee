//! Russian transliteration for note slugs.
//!
//! Cyrillic letters follow the common Russian web table (`я` → `ya`,
//! `щ` → `sch`, `й` → `j`); the hard and soft signs vanish. Anything else
//! is left to [`slug::slugify`].

fn latin(c: char) -> Option<&'static str> {
    let latin = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' | 'ґ' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "yo",
        'ж' => "zh",
        'з' => "z",
        'и' | 'і' => "i",
        'й' => "j",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' | 'ь' => "",
        'ы' | 'ї' => "yi",
        'э' => "e",
        'є' => "ye",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(latin)
}

/// Lower-cased, hyphen-separated ASCII form of `text`.
///
/// `&` reads as `and`; punctuation is dropped without splitting words.
#[must_use]
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase().replace('&', " and ");
    let mut latinized = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        if let Some(latin) = latin(c) {
            latinized.push_str(latin);
        } else if c.is_alphanumeric() || c.is_whitespace() || c == '-' || c == '_' {
            latinized.push(c);
        }
    }
    slug::slugify(latinized)
}
