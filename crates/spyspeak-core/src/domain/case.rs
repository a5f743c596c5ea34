//! Case transformation of raw joined codenames.

use crate::domain::value_objects::CaseStyle;

/// Transform a raw joined string into its display form.
///
/// `separator` must be the same string the components were joined with;
/// title casing needs it to recover segment boundaries.
///
/// Title-case edge cases:
/// - a single-space separator also tolerates runs of whitespace (split on
///   generic whitespace, rejoin with single spaces);
/// - an empty separator leaves no boundary information, so title case
///   degrades to sentence semantics (first character up, rest down).
pub fn apply_case(raw: &str, separator: &str, style: CaseStyle) -> String {
    match style {
        CaseStyle::Upper => raw.to_uppercase(),
        CaseStyle::Lower => raw.to_lowercase(),
        CaseStyle::Sentence => capitalize(raw),
        CaseStyle::Title => {
            if separator.is_empty() {
                capitalize(raw)
            } else if separator == " " {
                raw.split_whitespace()
                    .map(capitalize)
                    .collect::<Vec<_>>()
                    .join(" ")
            } else {
                raw.split(separator)
                    .map(capitalize)
                    .collect::<Vec<_>>()
                    .join(separator)
            }
        }
    }
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_uppercases_everything() {
        assert_eq!(
            apply_case("brave tiger", " ", CaseStyle::Upper),
            "BRAVE TIGER"
        );
    }

    #[test]
    fn upper_preserves_ascii_length() {
        let raw = "brave tiger 42";
        assert_eq!(apply_case(raw, " ", CaseStyle::Upper).len(), raw.len());
    }

    #[test]
    fn lower_lowercases_everything() {
        assert_eq!(
            apply_case("BRAVE Tiger", " ", CaseStyle::Lower),
            "brave tiger"
        );
    }

    #[test]
    fn lower_is_idempotent() {
        let once = apply_case("BRAVE TIGER", " ", CaseStyle::Lower);
        let twice = apply_case(&once, " ", CaseStyle::Lower);
        assert_eq!(once, twice);
    }

    #[test]
    fn sentence_capitalizes_whole_string_once() {
        assert_eq!(
            apply_case("brave TIGER", " ", CaseStyle::Sentence),
            "Brave tiger"
        );
    }

    #[test]
    fn title_capitalizes_each_segment() {
        assert_eq!(
            apply_case("brave silent tiger", " ", CaseStyle::Title),
            "Brave Silent Tiger"
        );
    }

    #[test]
    fn title_with_custom_separator() {
        assert_eq!(
            apply_case("brave-tiger", "-", CaseStyle::Title),
            "Brave-Tiger"
        );
        assert_eq!(
            apply_case("BRAVE_TIGER", "_", CaseStyle::Title),
            "Brave_Tiger"
        );
    }

    #[test]
    fn title_space_separator_collapses_whitespace_runs() {
        assert_eq!(
            apply_case("brave   tiger", " ", CaseStyle::Title),
            "Brave Tiger"
        );
    }

    #[test]
    fn title_empty_separator_degrades_to_sentence() {
        assert_eq!(
            apply_case("braveTIGER", "", CaseStyle::Title),
            apply_case("braveTIGER", "", CaseStyle::Sentence)
        );
        assert_eq!(apply_case("braveTIGER", "", CaseStyle::Title), "Bravetiger");
    }

    #[test]
    fn empty_input_stays_empty() {
        for style in [
            CaseStyle::Title,
            CaseStyle::Upper,
            CaseStyle::Lower,
            CaseStyle::Sentence,
        ] {
            assert_eq!(apply_case("", " ", style), "");
        }
    }
}
