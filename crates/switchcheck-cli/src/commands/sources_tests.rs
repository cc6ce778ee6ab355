use std::fs;
use std::path::PathBuf;

use switchcheck_lib::SourceKind;

use super::sources::{LoadError, discover, load_sources};

#[test]
fn inline_text_wins() {
    let map = load_sources(&[PathBuf::from("missing.cs")], Some("class C {}")).unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.iter().next().unwrap().kind, &SourceKind::Inline);
}

#[test]
fn directories_are_searched_recursively_and_sorted() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("b/nested")).unwrap();
    fs::create_dir_all(root.join("a")).unwrap();
    fs::write(root.join("b/nested/Z.cs"), "class Z {}").unwrap();
    fs::write(root.join("b/Y.cs"), "class Y {}").unwrap();
    fs::write(root.join("a/X.cs"), "class X {}").unwrap();
    fs::write(root.join("a/notes.txt"), "not code").unwrap();

    let found: Vec<_> = discover(root)
        .unwrap()
        .into_iter()
        .map(|path| path.strip_prefix(root).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        found,
        [
            PathBuf::from("a/X.cs"),
            PathBuf::from("b/Y.cs"),
            PathBuf::from("b/nested/Z.cs"),
        ]
    );

    let map = load_sources(&[root.to_path_buf()], None).unwrap();
    let contents: Vec<_> = map.iter().map(|source| source.content).collect();
    assert_eq!(contents, ["class X {}", "class Y {}", "class Z {}"]);
}

#[test]
fn files_keep_argument_order() {
    let dir = tempfile::tempdir().unwrap();
    let b = dir.path().join("B.cs");
    let a = dir.path().join("A.cs");
    fs::write(&b, "class B {}").unwrap();
    fs::write(&a, "class A {}").unwrap();

    let map = load_sources(&[b.clone(), a.clone()], None).unwrap();
    let paths: Vec<_> = map.iter().map(|source| source.name().to_owned()).collect();
    assert_eq!(
        paths,
        [b.to_string_lossy().into_owned(), a.to_string_lossy().into_owned()]
    );
}

#[test]
fn empty_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_sources(&[dir.path().to_path_buf()], None).unwrap_err();
    assert!(matches!(err, LoadError::NoSources(_)));
}

#[test]
fn unreadable_file_names_the_path() {
    let err = load_sources(&[PathBuf::from("does/not/exist.cs")], None).unwrap_err();
    assert!(err.to_string().starts_with("failed to read 'does/not/exist.cs'"));
}

#[test]
fn nothing_to_load() {
    assert!(matches!(load_sources(&[], None), Err(LoadError::Missing)));
}
