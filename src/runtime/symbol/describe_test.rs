use super::codec::{Category, encode};
use super::describe::{Descriptive, descriptive_bytes};
use super::id_generator::LocalId;

#[test]
fn global_symbol_renders_description() {
    let tagged = encode(Some(b"foo".as_slice()), Category::Global);
    assert_eq!(descriptive_bytes(&tagged).as_deref(), Some(&b"Symbol(foo)"[..]));
}

#[test]
fn local_symbol_without_description_renders_empty_parens() {
    let tagged = encode(None, Category::Local(LocalId::from_raw(3)));
    assert_eq!(descriptive_bytes(&tagged).as_deref(), Some(&b"Symbol()"[..]));
}

#[test]
fn discriminator_is_not_part_of_descriptive_string() {
    let tagged = encode(Some(b"id".as_slice()), Category::Local(LocalId::from_raw(0xabc)));
    assert_eq!(Descriptive(&tagged).to_string(), "Symbol(id)");
}

#[test]
fn description_bytes_are_not_escaped() {
    let tagged = encode(Some(b"foo\0bar".as_slice()), Category::Global);
    assert_eq!(
        descriptive_bytes(&tagged).as_deref(),
        Some(&b"Symbol(foo\0bar)"[..])
    );
}

#[test]
fn hidden_and_plain_have_no_descriptive_form() {
    assert_eq!(descriptive_bytes(b"\xffValue"), None);
    assert_eq!(descriptive_bytes(b"foo"), None);
    assert_eq!(Descriptive(b"foo").to_string(), "foo");
}
