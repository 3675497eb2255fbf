use std::fs;
use std::io::Write;

use character_names::{extract_file, read_source, ExtractError};
use tempfile::NamedTempFile;

const PASSAGE: &str = "\
'Have some wine,' the March Hare said in an encouraging tone.
Alice looked all round the table, but there was nothing on it but tea.
'I don't see any wine,' she remarked.
'There isn't any,' said the March Hare.
'Then it wasn't very civil of you to offer it,' said Alice angrily.
Hatter replied nothing, and the Dormouse was asleep again.
";

fn write_temp(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

fn render(normalize: bool, contents: &[u8]) -> String {
    let file = write_temp(contents);
    let extraction = extract_file(file.path(), normalize).unwrap();
    let mut out = Vec::new();
    extraction.write_to(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_passage_output() {
    assert_eq!(
        render(false, PASSAGE.as_bytes()),
        "Alice\nDormouse\nHatter\nMarch Hare\n4\n"
    );
}

#[test]
fn test_empty_file_prints_zero() {
    assert_eq!(render(false, b""), "0\n");
}

#[test]
fn test_preprocess_rewrites_i_am() {
    // The lead word `I'm` only matches the straight apostrophe.
    let text = b"I'm Alice, and I'm Ada";
    assert_eq!(render(false, text), "Ada\nAlice\n2\n");
    assert_eq!(render(true, text), "0\n");
}

#[test]
fn test_preprocess_keeps_quoted_names() {
    let text = b"'Off with the Duchess--' said the Queen.";
    assert_eq!(render(true, text), "Duchess\nQueen\n2\n");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-book.txt");
    let err = read_source(&path).unwrap_err();
    let ExtractError::Read { path: reported, source } = err;
    assert_eq!(reported, path);
    assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn test_invalid_utf8() {
    let file = write_temp(&[b'T', b'h', b'e', b' ', 0xff, 0xfe]);
    let err = extract_file(file.path(), false).unwrap_err();
    match err {
        ExtractError::Read { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData)
        }
    }
    assert!(err_message(file.path()).contains("failed to read"));
}

fn err_message(path: &std::path::Path) -> String {
    read_source(path).unwrap_err().to_string()
}

#[test]
fn test_same_file_twice_is_identical() {
    let file = write_temp(PASSAGE.as_bytes());
    let first = extract_file(file.path(), false).unwrap();
    let second = extract_file(file.path(), false).unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(file.path()).unwrap(), PASSAGE);
}
