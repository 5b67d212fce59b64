use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::*;

#[test]
fn test_parse_notation_strips_grouping() {
    assert_eq!(
        parse_notation("  (R U R' U')  (R' F R2 U')\tR' "),
        ["R", "U", "R'", "U'", "R'", "F", "R2", "U'", "R'"],
    );
    assert_eq!(parse_notation("(R U)(R' U')"), ["R", "U", "R'", "U'"]);
    assert_eq!(parse_notation("x' R U' R' D x"), ["x'", "R", "U'", "R'", "D", "x"]);
}

#[test]
fn test_parse_notation_empty() {
    assert!(parse_notation("").is_empty());
    assert!(parse_notation("  ( )  ").is_empty());
}

#[test]
fn test_parse_notation_passes_unknown_tokens_through() {
    assert_eq!(parse_notation("R Q7 U"), ["R", "Q7", "U"]);
}

#[test]
fn test_invert_move() {
    assert_eq!(invert_move("R"), "R'");
    assert_eq!(invert_move("R'"), "R");
    assert_eq!(invert_move("Rw"), "Rw'");
    assert_eq!(invert_move("r'"), "r");
    assert_eq!(invert_move("U2"), "U2");
    assert_eq!(invert_move("U2'"), "U2'");
    assert_eq!(invert_move("M2"), "M2");
}

#[test]
fn test_setup_sequence() {
    let moves = parse_notation("R U R' U'");
    assert_eq!(setup_sequence(&moves), ["U", "R", "U'", "R'"]);

    let moves = parse_notation("M2 U M U2 M' U M2");
    assert_eq!(setup_sequence(&moves), ["M2", "U'", "M", "U2", "M'", "U'", "M2"]);

    assert!(setup_sequence::<&str>(&[]).is_empty());
}

#[test]
fn test_format_moves() {
    assert_eq!(format_moves(&["R", "U2", "r'"]), "R U2 r'");
    assert_eq!(format_moves::<String>(&[]), "");
}

#[test]
fn test_token_parts() {
    let parts = |letter, wide, prime, double| TokenParts {
        letter: Some(letter),
        wide,
        prime,
        double,
    };

    assert_eq!(TokenParts::of("R"), parts('R', false, false, false));
    assert_eq!(TokenParts::of("R'"), parts('R', false, true, false));
    assert_eq!(TokenParts::of("R2"), parts('R', false, false, true));
    assert_eq!(TokenParts::of("Rw"), parts('R', true, false, false));
    assert_eq!(TokenParts::of("Rw2'"), parts('R', true, true, true));
    assert_eq!(TokenParts::of("r"), parts('R', true, false, false));
    assert_eq!(TokenParts::of("d'"), parts('D', true, true, false));
    assert_eq!(TokenParts::of("x"), parts('X', true, false, false));
    assert_eq!(TokenParts::of("M'"), parts('M', false, true, false));
    assert_eq!(TokenParts::of(""), TokenParts::default());
    assert_eq!(TokenParts::of("w").letter, None);
}

fn well_formed_token() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec![
            "R", "L", "U", "D", "F", "B", "M", "E", "S", "x", "y", "z", "r", "l", "u", "d", "f",
            "b", "Rw", "Uw", "Fw",
        ]),
        prop::sample::select(vec!["", "'", "2", "2'"]),
    )
        .prop_map(|(letter, modifier)| format!("{letter}{modifier}"))
}

proptest! {
    #[test]
    fn proptest_invert_is_involution(token in well_formed_token()) {
        prop_assert_eq!(invert_move(&invert_move(&token)), token);
    }

    #[test]
    fn proptest_double_turns_are_self_inverse(token in well_formed_token()) {
        if is_double_turn(&token) {
            prop_assert_eq!(invert_move(&token), token);
        }
    }

    #[test]
    fn proptest_setup_of_setup_is_original(moves in prop::collection::vec(well_formed_token(), 0..20)) {
        prop_assert_eq!(setup_sequence(&setup_sequence(&moves)), moves);
    }

    #[test]
    fn proptest_parse_format_roundtrip(moves in prop::collection::vec(well_formed_token(), 0..20)) {
        prop_assert_eq!(parse_notation(&format_moves(&moves)), moves);
    }
}
