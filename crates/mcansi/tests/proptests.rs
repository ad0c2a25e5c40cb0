use mcansi::{
    colorize, colorize_legacy, contains_legacy_codes, decode_hex_macro, encode_hex_macro,
    nearest_named, Colorizer, Mode, Rgb, DEFAULT_MAX_PASSES, RESET,
};
use proptest::prelude::*;

fn trailing_resets(output: &str) -> usize {
    let mut rest = output;
    let mut count = 0;
    while let Some(stripped) = rest.strip_suffix(RESET) {
        rest = stripped;
        count += 1;
    }
    count
}

// Legacy-coded text with no tag brackets
fn coded_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 §.,!]{0,40}"
}

fn rgb() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb(r, g, b))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn resets_bounded_by_ceiling(input in "[a-z<>/#:§0-9 ]{0,40}") {
        let compiled = Colorizer::new(Mode::Modern).compile(&input);
        prop_assert!(compiled.passes >= 1);
        prop_assert!(compiled.passes <= DEFAULT_MAX_PASSES);
        prop_assert!(trailing_resets(&compiled.output) >= compiled.passes);
    }

    #[test]
    fn malformed_markup_stops_after_one_retry(input in r"[a-z<>/#:§0-9 \\]{0,40}") {
        let compiled = Colorizer::new(Mode::Modern).max_passes(64).compile(&input);
        prop_assert!(compiled.passes <= 2);
        let legacy = Colorizer::new(Mode::Legacy).max_passes(64).compile(&input);
        prop_assert!(legacy.passes <= 2);
    }

    #[test]
    fn coded_text_compiles_in_one_pass(input in coded_text()) {
        let compiled = Colorizer::new(Mode::Legacy).compile(&input);
        prop_assert_eq!(compiled.passes, 1);
    }

    #[test]
    fn no_codes_survive(input in coded_text()) {
        prop_assert!(!contains_legacy_codes(&colorize(&input)));
        prop_assert!(!contains_legacy_codes(&colorize_legacy(&input)));
    }

    #[test]
    fn recolorizing_adds_one_reset(input in coded_text()) {
        let once = colorize(&input);
        prop_assert_eq!(colorize(&once), format!("{}{}", once, RESET));
    }

    #[test]
    fn text_without_section_sign_has_no_codes(input in "[^§]{0,40}") {
        prop_assert!(!contains_legacy_codes(&input));
    }

    #[test]
    fn hex_macro_round_trip(color in rgb()) {
        prop_assert_eq!(decode_hex_macro(&encode_hex_macro(color)), Some(color));
    }

    #[test]
    fn legacy_mode_stays_in_palette(color in rgb(), content in "[a-z ]{1,10}") {
        let input = format!("<{}>{}", color.to_hex(), content);
        prop_assert!(!colorize_legacy(&input).contains("38;2;"));
    }

    #[test]
    fn modern_mode_keeps_exact_color(color in rgb(), content in "[a-z ]{1,10}") {
        let input = format!("<{}>{}", color.to_hex(), content);
        let expected = format!("\x1b[38;2;{};{};{}m{}{}", color.0, color.1, color.2, content, RESET);
        prop_assert_eq!(colorize(&input), expected);
    }

    #[test]
    fn nearest_is_stable(color in rgb()) {
        let named = nearest_named(color);
        prop_assert_eq!(nearest_named(named.rgb()), named);
    }
}
