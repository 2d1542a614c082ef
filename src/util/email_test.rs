use super::*;

#[test]
fn accepts_ordinary_addresses() {
    for ok in [
        "user@x.com",
        "a@b",
        "first.last@example.org",
        "user+tag@mail.example",
        "o'brien@example.ie",
        "x_y-z@sub.domain.com",
        "1234@numbers.net",
    ] {
        assert!(is_valid_email(ok), "{ok} should validate");
    }
}

#[test]
fn rejects_malformed_addresses() {
    for bad in [
        "",
        "not-an-email",
        "@example.com",
        "user@",
        "user@@example.com",
        "user@.com",
        "user@example..com",
        "user@example.com.",
        "user name@example.com",
        "user@exa mple.com",
        "user@-example.com",
        "user@example-.com",
    ] {
        assert!(!is_valid_email(bad), "{bad} should be rejected");
    }
}

#[test]
fn local_part_allows_the_whatwg_specials() {
    assert!(is_valid_email("!#$%&'*+/=?^_`{|}~-@example.com"));
    // Dots carry no structure in the local part under this grammar.
    assert!(is_valid_email("a..b@example.com"));
    assert!(is_valid_email(".user@example.com"));
}

#[test]
fn domain_labels_are_capped_at_63_characters() {
    let max = "a".repeat(63);
    assert!(is_valid_email(&format!("user@{max}.com")));
    let over = "a".repeat(64);
    assert!(!is_valid_email(&format!("user@{over}.com")));
}

#[test]
fn hyphens_allowed_only_inside_labels() {
    assert!(is_valid_email("user@exa-mple.com"));
    assert!(!is_valid_email("user@example.-com"));
}
