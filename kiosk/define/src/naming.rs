//! Identifier case conversions shared by definitions and the generator.
//!
//! Sample identities mix three spellings of the same name: the snake_case
//! Rust method (`get_kiosk_callable`), the PascalCase RPC and class names
//! (`GetKioskCallable`) and the human-readable value set name
//! (`Get Kiosk Method Sample`).

/// Splits a CamelCase string into individual words.
///
/// - "GetKiosk" -> ["Get", "Kiosk"]
/// - "SetSignIdForKioskIds" -> ["Set", "Sign", "Id", "For", "Kiosk", "Ids"]
/// - "HTTPClient" -> ["HTTP", "Client"]
/// - "kiosk" -> ["kiosk"]
pub fn split_camel_case(s: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut word_start = 0;
    let chars: Vec<(usize, char)> = s.char_indices().collect();

    for i in 1..chars.len() {
        let (idx, current) = chars[i];
        let prev = chars[i - 1].1;

        // "getKiosk" -> "get", "Kiosk"; "HTTPClient" -> "HTTP", "Client"
        let is_new_word = current.is_uppercase()
            && (prev.is_lowercase()
                || prev.is_ascii_digit()
                || (i + 1 < chars.len() && chars[i + 1].1.is_lowercase() && prev.is_uppercase()));

        if is_new_word {
            if idx > word_start {
                words.push(&s[word_start..idx]);
            }
            word_start = idx;
        }
    }

    if word_start < s.len() {
        words.push(&s[word_start..]);
    }

    words
}

/// Converts a CamelCase or PascalCase identifier to snake_case.
///
/// ## Examples
///
/// ```
/// use kiosk_define::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("GetKiosk"), "get_kiosk");
/// assert_eq!(to_snake_case("GetSignIdForKioskId"), "get_sign_id_for_kiosk_id");
/// ```
pub fn to_snake_case(s: &str) -> String {
    split_camel_case(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Converts a snake_case identifier to PascalCase.
///
/// ## Examples
///
/// ```
/// use kiosk_define::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("get_kiosk_callable"), "GetKioskCallable");
/// assert_eq!(to_pascal_case("list_signs_method_sample"), "ListSignsMethodSample");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect()
}

/// Converts a snake_case identifier to space separated title case.
///
/// ```
/// use kiosk_define::naming::to_title_case;
///
/// assert_eq!(to_title_case("get_kiosk_method_sample"), "Get Kiosk Method Sample");
/// ```
pub fn to_title_case(s: &str) -> String {
    s.split('_')
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_handles_acronyms() {
        assert_eq!(split_camel_case("HTTPClient"), vec!["HTTP", "Client"]);
        assert_eq!(split_camel_case("GetKiosk"), vec!["Get", "Kiosk"]);
        assert_eq!(split_camel_case("kiosk"), vec!["kiosk"]);
        assert_eq!(split_camel_case(""), Vec::<&str>::new());
    }

    #[test]
    fn snake_and_pascal_are_inverse_for_rpc_names() {
        for rpc in ["GetKiosk", "ListSigns", "SetSignIdForKioskIds", "DeleteSign"] {
            assert_eq!(to_pascal_case(&to_snake_case(rpc)), rpc);
        }
    }

    #[test]
    fn pascal_ignores_repeated_underscores() {
        assert_eq!(to_pascal_case("list__signs_"), "ListSigns");
    }
}
