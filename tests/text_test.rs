//! Tests for the string helpers.

use rstest::rstest;

use rsutil::text::StringExt;
use rsutil::{
    add_spaces_to_camel_case, initials, is_palindrome, lead_zero, none_if_empty, some_if_not_empty,
};

// ============================================================
// Palindrome Tests
// ============================================================

#[rstest]
#[case("racecar", true)]
#[case("RaceCar", true)]
#[case("A man, a plan, a canal: Panama", true)]
#[case("No 'x' in Nixon", true)]
#[case("", true)]
#[case("rust", false)]
#[case("almost a palindromes", false)]
fn given_string_when_checking_palindrome_then_punctuation_and_case_are_ignored(
    #[case] input: &str,
    #[case] expected: bool,
) {
    assert_eq!(is_palindrome(input), expected);
}

// ============================================================
// Camel-Case Spacing Tests
// ============================================================

#[rstest]
#[case("helloWorld", "hello World")]
#[case("helloWorldAgain", "hello World Again")]
#[case("Hello", "Hello")]
#[case("nocaps", "nocaps")]
#[case("", "")]
fn given_camel_case_when_adding_spaces_then_words_are_separated(
    #[case] input: &str,
    #[case] expected: &str,
) {
    assert_eq!(add_spaces_to_camel_case(input), expected);
}

// ============================================================
// Initials Tests
// ============================================================

#[rstest]
#[case("hello world", " ", "HW")]
#[case("one two three", " ", "OTT")]
#[case("kebab-cased-words", "-", "KCW")]
#[case("double  space", " ", "DS")]
#[case("", " ", "")]
fn given_words_when_taking_initials_then_first_letters_are_uppercased(
    #[case] input: &str,
    #[case] separator: &str,
    #[case] expected: &str,
) {
    assert_eq!(initials(input, separator), expected);
}

// ============================================================
// Option Helpers
// ============================================================

#[test]
fn given_absent_or_empty_strings_when_collapsing_then_none() {
    assert_eq!(none_if_empty(None), None);
    assert_eq!(none_if_empty(Some("")), None);
    assert_eq!(none_if_empty(Some("x")), Some("x"));

    assert_eq!(some_if_not_empty(""), None);
    assert_eq!(some_if_not_empty("x"), Some("x"));
}

#[rstest]
#[case(0, "00")]
#[case(7, "07")]
#[case(10, "10")]
#[case(31, "31")]
fn given_day_or_month_when_padding_then_two_digits(#[case] value: u32, #[case] expected: &str) {
    assert_eq!(lead_zero(value), expected);
}

// ============================================================
// Extension Trait Tests
// ============================================================

#[test]
fn given_string_slice_when_using_extension_methods_then_they_delegate() {
    assert!("racecar".is_palindrome());
    assert_eq!("fooBar".add_spaces_to_camel_case(), "foo Bar");
    assert_eq!("hello world".initials(" "), "HW");
    assert_eq!("".some_if_not_empty(), None);
    assert_eq!("x".some_if_not_empty(), Some("x"));
}
