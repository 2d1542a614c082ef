use super::*;

#[test]
fn pads_to_two_decimals() {
    assert_eq!(format_usd(3.5), "$3.50");
    assert_eq!(format_usd(2.0), "$2.00");
    assert_eq!(format_usd(2.49), "$2.49");
}

#[test]
fn groups_thousands_with_commas() {
    assert_eq!(format_usd(1234.5), "$1,234.50");
    assert_eq!(format_usd(999.99), "$999.99");
    assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
}

#[test]
fn zero_formats_cleanly() {
    assert_eq!(format_usd(0.0), "$0.00");
}

#[test]
fn fractions_of_a_cent_round() {
    assert_eq!(format_usd(8.9), "$8.90");
    assert_eq!(format_usd(5.1), "$5.10");
    assert_eq!(format_usd(3.149), "$3.15");
}

#[test]
fn negative_amounts_keep_the_sign_outside_the_symbol() {
    assert_eq!(format_usd(-5.25), "-$5.25");
}
