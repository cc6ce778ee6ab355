use std::fs;

use indoc::indoc;
use switchcheck_lib::SourceMap;

use super::fix::{FixArgs, fix_sources};

const SOURCE: &str = indoc! {r#"
    enum Status { Accepted, Cooking, Cooked }
    class C
    {
        int M(Status s)
        {
            switch (s)
            {
                case Status.Accepted:
                    return 1;
                default:
                    throw new ArgumentOutOfRangeException(nameof(s));
            }
        }
    }
"#};

fn args(write: bool) -> FixArgs {
    FixArgs {
        paths: Vec::new(),
        source_text: None,
        write,
        color: false,
    }
}

#[test]
fn prints_fixed_source() {
    let map = SourceMap::inline(SOURCE);
    let outcome = fix_sources(&map, &args(false));

    assert!(!outcome.failed);
    insta::assert_snapshot!(outcome.stdout, @r"
    enum Status { Accepted, Cooking, Cooked }
    class C
    {
        int M(Status s)
        {
            switch (s)
            {
                case Status.Accepted:
                    return 1;
                case Status.Cooking:
                    throw new NotImplementedException();
                case Status.Cooked:
                    throw new NotImplementedException();
                default:
                    throw new ArgumentOutOfRangeException(nameof(s));
            }
        }
    }
    ");
}

#[test]
fn writes_files_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Kitchen.cs");
    fs::write(&path, SOURCE).unwrap();
    let untouched = dir.path().join("Other.cs");
    fs::write(&untouched, "class Other {}\n").unwrap();

    let mut map = SourceMap::new();
    map.add_file(path.to_string_lossy(), SOURCE);
    map.add_file(untouched.to_string_lossy(), "class Other {}\n");
    let outcome = fix_sources(&map, &args(true));

    assert!(!outcome.failed);
    assert_eq!(outcome.stdout, "");
    assert!(outcome.stderr.ends_with("Kitchen.cs: fixed 1 switch(es)\n"));

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("case Status.Cooked:\n                throw new NotImplementedException();"));
    assert_eq!(fs::read_to_string(&untouched).unwrap(), "class Other {}\n");
}

#[test]
fn declined_fix_is_reported() {
    let source = indoc! {r#"
        enum Status { Accepted, Cooking }
        class C
        {
            Status current;
            int M() => this.current switch
            {
                Status.Accepted => 1,
                _ => throw new ArgumentOutOfRangeException(),
            };
        }
    "#};
    let map = SourceMap::inline(source);
    let outcome = fix_sources(&map, &args(false));

    assert!(outcome.failed);
    assert_eq!(outcome.stdout, source);
    insta::assert_snapshot!(outcome.stderr, @"<source>:5:16: fix declined: switch discriminant is not a simple identifier");
}

#[test]
fn syntax_errors_are_not_fixed() {
    let map = SourceMap::inline("class Broken {");
    let outcome = fix_sources(&map, &args(false));

    assert!(outcome.failed);
    assert_eq!(outcome.stdout, "");
    assert!(outcome.stderr.contains("error: <source>: not fixed, the source has syntax errors"));
}

#[test]
fn several_sources_get_headers() {
    let mut map = SourceMap::new();
    map.add_file("A.cs", "class A {}\n");
    map.add_file("B.cs", "class B {}\n");
    let outcome = fix_sources(&map, &args(false));

    insta::assert_snapshot!(outcome.stdout, @r"
    ==> A.cs <==
    class A {}
    ==> B.cs <==
    class B {}
    ");
}
