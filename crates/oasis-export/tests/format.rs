use jiff::civil::date;
use oasis_export::blocks::Unit;
use oasis_export::format::{file_name_safe, number, timestamp, with_unit, wrap_text};

#[test]
fn numbers_print_shortest_form() {
    assert_eq!(number(13.0), "13");
    assert_eq!(number(27.34), "27.34");
    assert_eq!(number(0.5), "0.5");
}

#[test]
fn percent_is_glued_other_units_spaced() {
    assert_eq!(with_unit("30", Some(Unit::Percent)), "30%");
    assert_eq!(with_unit("160", Some(Unit::Centimeters)), "160 cm");
    assert_eq!(with_unit("6", Some(Unit::Points)), "6 pontos");
    assert_eq!(with_unit("350", None), "350");
}

#[test]
fn timestamp_uses_brazilian_layout() {
    let at = date(2024, 3, 9).at(7, 5, 3, 0);
    assert_eq!(timestamp(at), "09/03/2024 às 07:05:03");
}

#[test]
fn file_name_keeps_accents() {
    assert_eq!(file_name_safe("José Antônio"), "José Antônio");
    assert_eq!(file_name_safe("a:b*c?"), "a_b_c_");
}

#[test]
fn wrap_breaks_on_words() {
    let lines = wrap_text("um dois três quatro cinco", 10);
    assert_eq!(lines, ["um dois", "três", "quatro", "cinco"]);
    assert!(lines.iter().all(|l| l.chars().count() <= 10));
}

#[test]
fn wrap_of_empty_text_is_one_blank_line() {
    assert_eq!(wrap_text("", 20), [""]);
}

#[test]
fn overlong_word_gets_its_own_line() {
    assert_eq!(wrap_text("a paralelepípedo b", 5), ["a", "paralelepípedo", "b"]);
}
