/**
 * Plural Expression Parser Tests
 */

#[cfg(test)]
mod tests {
    use formats_core::config::IcuParserConfig;
    use formats_core::error::PluralParseErrorKind;
    use formats_core::icu::IcuParser;
    use formats_core::plural::{PluralCategory, PluralSyntax};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn forms(entries: &[(PluralCategory, &str)]) -> BTreeMap<PluralCategory, String> {
        entries
            .iter()
            .map(|(category, text)| (*category, text.to_string()))
            .collect()
    }

    fn strict() -> IcuParser {
        IcuParser::new(IcuParserConfig {
            allow_numeric_plural_values: false,
        })
    }

    #[test]
    fn should_parse_named_categories() {
        let icu = IcuParser::default()
            .parse(
                "files",
                "{ item_count, plural, one {You have {file_count} file.} other {You have {file_count} files.} }",
                0,
            )
            .unwrap()
            .unwrap();
        assert_eq!(
            icu.strings_by_category(),
            forms(&[
                (PluralCategory::One, "You have {file_count} file."),
                (PluralCategory::Other, "You have {file_count} files."),
            ])
        );
        assert_eq!(icu.key, "files");
    }

    #[test]
    fn should_normalize_numeric_categories_when_enabled() {
        let icu = IcuParser::default()
            .parse("k", "{x, plural, =1 {a} other {b}}", 0)
            .unwrap()
            .unwrap();
        assert_eq!(
            icu.strings_by_category(),
            forms(&[(PluralCategory::One, "a"), (PluralCategory::Other, "b")])
        );
        assert_eq!(icu.entries[0].token, "=1");
        assert_eq!(
            icu.syntax_by_category()[&PluralCategory::One],
            PluralSyntax::Numeric
        );
        assert_eq!(
            icu.syntax_by_category()[&PluralCategory::Other],
            PluralSyntax::Named
        );
    }

    #[test]
    fn should_not_apply_numeric_categories_when_disabled() {
        assert_eq!(strict().parse("k", "{x, plural, =1 {a} other {b}}", 0), Ok(None));
        assert!(strict()
            .parse("k", "{x, plural, one {a} other {b}}", 0)
            .unwrap()
            .is_some());
    }

    #[test]
    fn should_reject_invalid_categories() {
        let err = IcuParser::default()
            .parse("k", "{x, plural, foo {a} other {b}}", 0)
            .unwrap_err();
        assert_eq!(
            err.kind,
            PluralParseErrorKind::InvalidCategories {
                tokens: vec!["foo".to_string()]
            }
        );
        assert_eq!(err.key, "k");
        assert_eq!(err.value, "{x, plural, foo {a} other {b}}");
        assert!(err.to_string().contains("foo"));
    }

    #[test]
    fn should_reject_numeric_values_outside_the_named_set() {
        let err = IcuParser::default()
            .parse("k", "{x, plural, =5 {a} other {b}}", 0)
            .unwrap_err();
        assert_eq!(
            err.kind,
            PluralParseErrorKind::InvalidCategories {
                tokens: vec!["=5".to_string()]
            }
        );
    }

    #[test]
    fn should_reject_stray_text() {
        let err = IcuParser::default()
            .parse("k", "{x, plural, one {a} stray other {b}}", 0)
            .unwrap_err();
        assert_eq!(
            err.kind,
            PluralParseErrorKind::Malformed {
                residual: "stray".to_string()
            }
        );
    }

    #[test]
    fn should_report_residual_before_invalid_categories() {
        let err = IcuParser::default()
            .parse("k", "{x, plural, foo {a} stray}", 0)
            .unwrap_err();
        assert!(matches!(err.kind, PluralParseErrorKind::Malformed { .. }));
    }

    #[test]
    fn should_ignore_other_argument_types() {
        assert_eq!(
            IcuParser::default().parse("k", "{gender, select, male {he} other {they}}", 0),
            Ok(None)
        );
        assert_eq!(IcuParser::default().parse("k", "plain text", 0), Ok(None));
    }

    #[test]
    fn should_keep_nested_content_and_apostrophes() {
        let icu = IcuParser::default()
            .parse(
                "k",
                "{n, plural, one {it's {n} '{'item'}'} other {they're {n} items}}",
                0,
            )
            .unwrap()
            .unwrap();
        assert_eq!(
            icu.strings_by_category(),
            forms(&[
                (PluralCategory::One, "it's {n} '{'item'}'"),
                (PluralCategory::Other, "they're {n} items"),
            ])
        );
    }

    #[test]
    fn should_close_a_form_ending_in_an_apostrophe() {
        let icu = IcuParser::default()
            .parse("k", "{n, plural, one {the user's file} other {the users'}}", 0)
            .unwrap()
            .unwrap();
        assert_eq!(
            icu.strings_by_category(),
            forms(&[
                (PluralCategory::One, "the user's file"),
                (PluralCategory::Other, "the users'"),
            ])
        );
        assert_eq!(icu.replace_text, "one {the user's file} other {the users'}");
    }

    #[test]
    fn should_accept_non_breaking_spaces_between_forms() {
        let icu = IcuParser::default()
            .parse("k", "{n, plural, one {a}\u{00A0}other {b}}", 0)
            .unwrap()
            .unwrap();
        assert_eq!(icu.entries.len(), 2);
    }

    #[test]
    fn should_accept_multiline_expressions() {
        let value = "{ count, plural,\\n  one {a}\\n  other {b}\\n}";
        let icu = IcuParser::default().parse("k", value, 0).unwrap().unwrap();
        assert_eq!(icu.entries.len(), 2);
        assert_eq!(icu.replace_text, "one {a}\\n  other {b}");

        let value = "{ count, plural,\n  one {a}\n  other {b}\n}";
        let icu = IcuParser::default().parse("k", value, 0).unwrap().unwrap();
        assert_eq!(icu.replace_text, "one {a}\n  other {b}");
    }

    #[test]
    fn should_locate_the_replacement_in_the_document() {
        let document = "apples = {n, plural, one {apple} other {apples}}\n";
        let offset = document.find('{').unwrap();
        let icu = IcuParser::default()
            .parse("apples", document[offset..].trim_end(), offset)
            .unwrap()
            .unwrap();
        assert_eq!(
            &document[icu.document_replace_start()..icu.document_replace_end()],
            "one {apple} other {apples}"
        );
    }

    #[test]
    fn should_build_an_open_string() {
        let icu = IcuParser::default()
            .parse("k", "{n, plural, one {a} other {b}}", 0)
            .unwrap()
            .unwrap();
        let string = icu.to_open_string().unwrap();
        assert!(string.is_pluralized());
        assert_eq!(string.key, "k");

        let icu = IcuParser::default()
            .parse("k", "{n, plural, other {b}}", 0)
            .unwrap()
            .unwrap();
        assert!(!icu.to_open_string().unwrap().is_pluralized());

        let icu = IcuParser::default()
            .parse("k", "{n, plural, few {b}}", 0)
            .unwrap()
            .unwrap();
        assert!(icu.to_open_string().is_err());
    }
}
