use super::Input;

#[test]
fn lines_skip_blanks() {
    let input = Input::new("test.txt", String::from("first\n\nsecond\n  \nthird\n"));
    let lines = input.lines().collect::<Vec<_>>();
    assert_eq!(lines, [(1, "first"), (3, "second"), (5, "third")]);
}

#[test]
fn lines_without_trailing_newline() {
    let input = Input::new("test.txt", String::from("only"));
    let lines = input.lines().collect::<Vec<_>>();
    assert_eq!(lines, [(1, "only")]);
}

#[test]
fn lines_strip_carriage_returns() {
    let input = Input::new("test.txt", String::from("a\r\nb\r\n"));
    let lines = input.lines().collect::<Vec<_>>();
    assert_eq!(lines, [(1, "a"), (2, "b")]);
}

#[test]
fn empty_input() {
    let input = Input::new("test.txt", String::new());
    assert!(input.lines().next().is_none());
}
