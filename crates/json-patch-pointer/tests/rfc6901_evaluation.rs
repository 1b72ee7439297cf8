use json_patch_pointer::{resolve, Pointer, PointerError};
use serde_json::{json, Value};

// RFC 6901 §5 / §6 evaluation corpus, exercised through the public surface:
// parse (standard and URI fragment forms), evaluate, re-serialize.

fn doc() -> Value {
    json!({
        "foo": ["bar", "baz"],
        "": 0,
        "a/b": 1,
        "c%d": 2,
        "e^f": 3,
        "g|h": 4,
        "i\\j": 5,
        "k\"l": 6,
        " ": 7,
        "m~n": 8
    })
}

fn eval(pointer: &str) -> Value {
    let doc = doc();
    let ptr = Pointer::parse(pointer).unwrap();
    resolve(&doc, &ptr).unwrap().clone()
}

#[test]
fn standard_form_corpus() {
    assert_eq!(eval(""), doc());
    assert_eq!(eval("/foo"), json!(["bar", "baz"]));
    assert_eq!(eval("/foo/0"), json!("bar"));
    assert_eq!(eval("/"), json!(0));
    assert_eq!(eval("/a~1b"), json!(1));
    assert_eq!(eval("/c%d"), json!(2));
    assert_eq!(eval("/e^f"), json!(3));
    assert_eq!(eval("/g|h"), json!(4));
    assert_eq!(eval("/i\\j"), json!(5));
    assert_eq!(eval("/k\"l"), json!(6));
    assert_eq!(eval("/ "), json!(7));
    assert_eq!(eval("/m~0n"), json!(8));
}

#[test]
fn fragment_form_corpus() {
    assert_eq!(eval("#"), doc());
    assert_eq!(eval("#/foo"), json!(["bar", "baz"]));
    assert_eq!(eval("#/foo/0"), json!("bar"));
    assert_eq!(eval("#/"), json!(0));
    assert_eq!(eval("#/a~1b"), json!(1));
    assert_eq!(eval("#/c%25d"), json!(2));
    assert_eq!(eval("#/e%5Ef"), json!(3));
    assert_eq!(eval("#/g%7Ch"), json!(4));
    assert_eq!(eval("#/i%5Cj"), json!(5));
    assert_eq!(eval("#/k%22l"), json!(6));
    assert_eq!(eval("#/%20"), json!(7));
    assert_eq!(eval("#/m~0n"), json!(8));
}

#[test]
fn fragment_normalizes_to_standard_form_on_output() {
    for (fragment, standard) in [
        ("#", ""),
        ("#/foo/0", "/foo/0"),
        ("#/a~1b", "/a~1b"),
        ("#/c%25d", "/c%d"),
        ("#/%20", "/ "),
    ] {
        assert_eq!(Pointer::parse(fragment).unwrap().to_string(), standard);
    }
}

#[test]
fn parse_roundtrip_is_byte_identical() {
    for s in [
        "",
        "/",
        "/foo",
        "/foo/0",
        "/a~1b",
        "/m~0n",
        "/~01",
        "/~0~1",
        "/a/b/c/d",
        "//",
        "/ /  ",
    ] {
        assert_eq!(
            Pointer::parse(s).unwrap().to_string(),
            s,
            "roundtrip failed for {s:?}"
        );
    }
}

#[test]
fn rejects_invalid_surface_forms() {
    for s in ["a", "a/b", "foo/", "~", "/~", "/~2", "/a~x", "#/a%", "#/%G0"] {
        assert_eq!(
            Pointer::parse(s),
            Err(PointerError::InvalidPointer),
            "expected InvalidPointer for {s:?}"
        );
    }
}

#[test]
fn whole_document_pointer_on_scalar_document() {
    let doc = json!(42);
    let root = Pointer::parse("").unwrap();
    assert_eq!(resolve(&doc, &root).unwrap(), &json!(42));
}
