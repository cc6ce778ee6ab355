use indoc::indoc;

use crate::parser::ast::{Block, MethodDecl, Stmt};
use crate::parser::tests::parse_ok;

fn body_statements(source: &str) -> Vec<String> {
    let root = parse_ok(source).syntax();
    let method = root.descendants().find_map(MethodDecl::cast).unwrap();
    let body: Block = method.body().unwrap();
    body.statements()
        .map(|s| format!("{:?}", s.as_cst().kind()))
        .collect()
}

#[test]
fn statement_kinds() {
    let input = indoc! {r#"
        class C {
            IEnumerable<int> M(List<Status> items) {
                int x = 1;
                if (x > 0) { } else if (x < 0) return; else { }
                while (true) break;
                do { x++; } while (false);
                for (int i = 0; i < 10; i++) { continue; }
                foreach (var item in items) { }
                try { } catch (Exception e) when (e != null) { } finally { }
                using (var r = Open()) { }
                using var s = Open();
                goto done;
                Local(1);
                int Local(int v) => v;
                static void Helper() { }
                const int K = 1;
                yield return 1;
                throw;
                ;
            }
        }
    "#};
    insta::assert_snapshot!(body_statements(input).join("\n"), @r"
    LocalDecl
    IfStmt
    WhileStmt
    DoStmt
    ForStmt
    ForeachStmt
    TryStmt
    UsingStmt
    UsingStmt
    GotoStmt
    ExprStmt
    MethodDecl
    MethodDecl
    LocalDecl
    ReturnStmt
    ThrowStmt
    EmptyStmt
    ");
}

#[test]
fn generic_local_declaration() {
    let input = indoc! {r#"
        class C {
            void M() {
                Dictionary<string, List<Status>> map = new();
                Status? maybe = null;
                Status[] all = { };
            }
        }
    "#};
    let kinds = body_statements(input);
    assert_eq!(kinds, ["LocalDecl", "LocalDecl", "LocalDecl"]);
}

#[test]
fn expression_statements_are_not_declarations() {
    let input = indoc! {r#"
        class C {
            void M() {
                Log(x);
                a.b = c;
                count += 1;
                list[0] = 2;
            }
        }
    "#};
    let kinds = body_statements(input);
    assert_eq!(kinds, ["ExprStmt", "ExprStmt", "ExprStmt", "ExprStmt"]);
}

#[test]
fn local_declarator_initializers() {
    let input = "class C { void M() { var a = Status.A, b = Status.B; } }";
    let root = parse_ok(input).syntax();
    let method = root.descendants().find_map(MethodDecl::cast).unwrap();
    let Some(Stmt::LocalDecl(local)) = method.body().unwrap().statements().next() else {
        panic!("expected local declaration");
    };
    let names: Vec<_> = local
        .declarators()
        .map(|d| (d.name().unwrap().text().to_string(), d.initializer().is_some()))
        .collect();
    assert_eq!(names, [("a".to_string(), true), ("b".to_string(), true)]);
}
