//! Locale-invariant case conversion.

use unicode_segmentation::UnicodeSegmentation;

/// Case transform applied by the `Selection*` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseConversion {
    /// Upper-case the first character of every word and lower-case the rest.
    Capitalize,
    /// Lower-case everything.
    Lower,
    /// Upper-case everything.
    Upper,
}

/// Convert `text` using Unicode default case mappings.
///
/// Word boundaries for [`CaseConversion::Capitalize`] follow UAX #29, so `"don't"` is one word
/// and punctuation or whitespace between words is copied unchanged.
pub fn convert_case(text: &str, conversion: CaseConversion) -> String {
    match conversion {
        CaseConversion::Lower => text.to_lowercase(),
        CaseConversion::Upper => text.to_uppercase(),
        CaseConversion::Capitalize => capitalize_words(text),
    }
}

fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in text.split_word_bounds() {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if first.is_alphanumeric() => {
                out.extend(first.to_uppercase());
                out.push_str(&chars.as_str().to_lowercase());
            }
            _ => out.push_str(segment),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_each_word() {
        assert_eq!(
            convert_case("hELLO wide   WORLD", CaseConversion::Capitalize),
            "Hello Wide   World"
        );
    }

    #[test]
    fn test_capitalize_keeps_punctuation_and_contractions() {
        assert_eq!(
            convert_case("don't stop-me, now", CaseConversion::Capitalize),
            "Don't Stop-Me, Now"
        );
    }

    #[test]
    fn test_upper_then_lower_lands_on_lowercase() {
        let text = "MiXeD Case 42";
        let lower = convert_case(
            &convert_case(text, CaseConversion::Upper),
            CaseConversion::Lower,
        );
        assert_eq!(lower, "mixed case 42");
        assert_eq!(lower, convert_case(text, CaseConversion::Lower));
    }

    #[test]
    fn test_non_ascii_is_case_mapped() {
        assert_eq!(convert_case("straße", CaseConversion::Upper), "STRASSE");
        assert_eq!(convert_case("élan", CaseConversion::Capitalize), "Élan");
    }
}
