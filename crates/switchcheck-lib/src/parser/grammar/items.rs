use rowan::Checkpoint;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::MEMBER_FIRST;

/// Contextual words accepted in modifier position.
const CONTEXTUAL_MODIFIERS: &[&str] = &["async", "partial", "required", "file", "global"];

impl Parser<'_> {
    pub fn parse_compilation_unit(&mut self) {
        self.start_node(SyntaxKind::CompilationUnit);
        self.parse_namespace_body(false);
        self.eat_trivia();
        self.finish_node();
    }

    /// Usings, namespaces and type declarations until EOF (or `}` when nested).
    fn parse_namespace_body(&mut self, nested: bool) {
        while !self.should_stop() {
            match self.current() {
                SyntaxKind::BraceClose if nested => break,
                SyntaxKind::KwUsing => self.parse_using_directive(),
                SyntaxKind::KwNamespace => self.parse_namespace(),
                SyntaxKind::Semicolon => self.bump(),
                SyntaxKind::Garbage => self.error_and_bump(DiagnosticKind::UnrecognizedInput),
                kind if MEMBER_FIRST.contains(kind) => self.parse_member(),
                SyntaxKind::BraceOpen => {
                    self.start_node(SyntaxKind::Error);
                    self.error(DiagnosticKind::ExpectedMember);
                    self.skip_balanced_braces();
                    self.finish_node();
                }
                _ => self.error_and_bump(DiagnosticKind::ExpectedMember),
            }
        }
    }

    /// `using [static] [Alias =] Name;`
    fn parse_using_directive(&mut self) {
        self.start_node(SyntaxKind::UsingDirective);
        self.bump(); // `using`
        if self.currently_is(SyntaxKind::Modifier) && self.current_text() == "static" {
            self.bump();
        }
        if self.currently_is(SyntaxKind::Ident) && self.next_is(SyntaxKind::Equals) {
            self.bump();
            self.bump();
        }
        self.parse_type();
        self.expect(SyntaxKind::Semicolon, "`;` after using directive");
        self.finish_node();
    }

    /// `namespace A.B { ... }` or file-scoped `namespace A.B;` (owns the rest of the file).
    fn parse_namespace(&mut self) {
        self.start_node(SyntaxKind::NamespaceDecl);
        self.bump(); // `namespace`
        if self.currently_is(SyntaxKind::Ident) {
            self.bump();
            while self.currently_is(SyntaxKind::Dot) && self.next_is(SyntaxKind::Ident) {
                self.bump();
                self.bump();
            }
        } else {
            self.error_msg(DiagnosticKind::ExpectedIdentifier, "namespace name");
        }

        match self.current() {
            SyntaxKind::Semicolon => {
                self.bump();
                self.parse_namespace_body(false);
            }
            SyntaxKind::BraceOpen => {
                self.push_delimiter(SyntaxKind::BraceOpen);
                self.bump();
                self.parse_namespace_body(true);
                self.close_delimiter(SyntaxKind::BraceClose, "namespace");
            }
            _ => {
                self.error_msg(DiagnosticKind::UnexpectedToken, "expected `{` or `;`");
            }
        }
        self.finish_node();
    }

    /// `[Attr(...), Other]`, kept as one opaque node.
    pub(crate) fn parse_attribute_list(&mut self) {
        self.start_node(SyntaxKind::AttributeList);
        self.push_delimiter(SyntaxKind::BracketOpen);
        self.bump();
        let mut depth = 1u32;
        while !self.should_stop() {
            match self.current() {
                SyntaxKind::BracketOpen => depth += 1,
                SyntaxKind::BracketClose => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                SyntaxKind::BraceOpen | SyntaxKind::BraceClose | SyntaxKind::Semicolon => break,
                _ => {}
            }
            self.bump();
        }
        self.close_delimiter(SyntaxKind::BracketClose, "attribute list");
        self.finish_node();
    }

    fn eat_modifiers(&mut self) {
        loop {
            match self.current() {
                SyntaxKind::Modifier => self.bump(),
                SyntaxKind::KwNew if !self.next_is(SyntaxKind::ParenOpen) => self.bump(),
                SyntaxKind::Ident
                    if CONTEXTUAL_MODIFIERS.contains(&self.current_text())
                        && matches!(
                            self.peek_nth(1),
                            SyntaxKind::Ident
                                | SyntaxKind::PredefinedType
                                | SyntaxKind::Modifier
                                | SyntaxKind::KwClass
                                | SyntaxKind::KwStruct
                                | SyntaxKind::KwInterface
                                | SyntaxKind::KwEnum
                        ) =>
                {
                    self.bump()
                }
                _ => break,
            }
        }
    }

    /// One type or member declaration, with its attributes and modifiers.
    pub(crate) fn parse_member(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        let checkpoint = self.checkpoint();
        while self.currently_is(SyntaxKind::BracketOpen) {
            self.parse_attribute_list();
        }
        self.eat_modifiers();

        match self.current() {
            SyntaxKind::KwEnum => self.parse_enum_decl(checkpoint),
            SyntaxKind::KwClass | SyntaxKind::KwStruct | SyntaxKind::KwInterface => {
                self.parse_type_decl(checkpoint)
            }
            SyntaxKind::Ident
                if self.current_text() == "record"
                    && matches!(
                        self.peek_nth(1),
                        SyntaxKind::Ident | SyntaxKind::KwClass | SyntaxKind::KwStruct
                    ) =>
            {
                self.parse_type_decl(checkpoint)
            }
            SyntaxKind::Ident if self.next_is(SyntaxKind::ParenOpen) => {
                self.parse_constructor(checkpoint)
            }
            SyntaxKind::Tilde if self.next_is(SyntaxKind::Ident) => {
                self.bump();
                self.parse_constructor(checkpoint)
            }
            SyntaxKind::Ident | SyntaxKind::PredefinedType if self.scan_type(0).is_some() => {
                self.parse_typed_member(checkpoint)
            }
            _ => self.parse_unknown_member(checkpoint),
        }
        self.exit_recursion();
    }

    /// `enum Name [: underlying] { A, B = 2, }`
    fn parse_enum_decl(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::EnumDecl);
        self.bump(); // `enum`
        if !self.eat_token(SyntaxKind::Ident) {
            self.error_msg(DiagnosticKind::ExpectedIdentifier, "enum name");
        }
        if self.eat_token(SyntaxKind::Colon) {
            self.parse_type();
        }

        if self.currently_is(SyntaxKind::BraceOpen) {
            self.push_delimiter(SyntaxKind::BraceOpen);
            self.bump();
            while !self.should_stop() && !self.currently_is(SyntaxKind::BraceClose) {
                if !self.parse_enum_member() {
                    break;
                }
                if !self.eat_token(SyntaxKind::Comma) {
                    break;
                }
            }
            self.close_delimiter(SyntaxKind::BraceClose, "enum body");
        } else {
            self.error_msg(DiagnosticKind::UnexpectedToken, "expected `{` for enum body");
        }
        self.eat_token(SyntaxKind::Semicolon);
        self.finish_node();
    }

    fn parse_enum_member(&mut self) -> bool {
        if !matches!(
            self.current(),
            SyntaxKind::Ident | SyntaxKind::BracketOpen
        ) {
            self.error_msg(DiagnosticKind::ExpectedIdentifier, "enum member name");
            return false;
        }
        self.start_node(SyntaxKind::EnumMember);
        while self.currently_is(SyntaxKind::BracketOpen) {
            self.parse_attribute_list();
        }
        if !self.eat_token(SyntaxKind::Ident) {
            self.error_msg(DiagnosticKind::ExpectedIdentifier, "enum member name");
        }
        if self.eat_token(SyntaxKind::Equals) {
            self.parse_expr();
        }
        self.finish_node();
        true
    }

    /// `class|struct|interface|record Name<T>(params) : Bases where ... { members }`
    fn parse_type_decl(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::TypeDecl);
        let is_record = self.currently_is(SyntaxKind::Ident);
        self.bump(); // keyword
        if is_record
            && matches!(self.current(), SyntaxKind::KwClass | SyntaxKind::KwStruct)
        {
            self.bump();
        }
        if !self.eat_token(SyntaxKind::Ident) {
            self.error_msg(DiagnosticKind::ExpectedIdentifier, "type name");
        }
        if self.currently_is(SyntaxKind::Lt) {
            self.parse_type_param_list();
        }
        if self.currently_is(SyntaxKind::ParenOpen) {
            self.parse_param_list();
        }
        if self.currently_is(SyntaxKind::Colon) {
            self.parse_base_list();
        }
        self.parse_where_clauses();

        match self.current() {
            SyntaxKind::BraceOpen => {
                self.push_delimiter(SyntaxKind::BraceOpen);
                self.bump();
                self.parse_type_body();
                self.close_delimiter(SyntaxKind::BraceClose, "type body");
                self.eat_token(SyntaxKind::Semicolon);
            }
            SyntaxKind::Semicolon => self.bump(),
            _ => {
                self.error_msg(DiagnosticKind::UnexpectedToken, "expected `{` for type body");
            }
        }
        self.finish_node();
    }

    fn parse_type_body(&mut self) {
        while !self.should_stop() && !self.currently_is(SyntaxKind::BraceClose) {
            match self.current() {
                SyntaxKind::Semicolon => self.error_and_bump(DiagnosticKind::UnexpectedToken),
                SyntaxKind::Garbage => self.error_and_bump(DiagnosticKind::UnrecognizedInput),
                kind if MEMBER_FIRST.contains(kind) || kind == SyntaxKind::Tilde => {
                    self.parse_member()
                }
                SyntaxKind::BraceOpen => {
                    self.start_node(SyntaxKind::Error);
                    self.error(DiagnosticKind::ExpectedMember);
                    self.skip_balanced_braces();
                    self.finish_node();
                }
                _ => self.error_and_bump(DiagnosticKind::ExpectedMember),
            }
        }
    }

    fn parse_type_param_list(&mut self) {
        self.start_node(SyntaxKind::TypeParamList);
        self.bump(); // `<`
        loop {
            while self.currently_is(SyntaxKind::BracketOpen) {
                self.parse_attribute_list();
            }
            if self.currently_is_word("in") || self.currently_is(SyntaxKind::KwIn) {
                self.bump();
            } else {
                self.eat_word("out");
                self.eat_token(SyntaxKind::KwOut);
            }
            if !self.eat_token(SyntaxKind::Ident) {
                self.error_msg(DiagnosticKind::ExpectedIdentifier, "type parameter name");
                break;
            }
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
        self.expect(SyntaxKind::Gt, "`>` closing type parameters");
        self.finish_node();
    }

    fn parse_base_list(&mut self) {
        self.start_node(SyntaxKind::BaseList);
        self.bump(); // `:`
        loop {
            if !self.parse_type() {
                break;
            }
            if self.currently_is(SyntaxKind::ParenOpen) {
                self.parse_arg_list(SyntaxKind::ParenOpen, SyntaxKind::ParenClose);
            }
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
        self.finish_node();
    }

    /// `where T : class, new()`, kept opaque.
    fn parse_where_clauses(&mut self) {
        while self.currently_is_word("where") {
            self.start_node(SyntaxKind::WhereClause);
            self.bump();
            while !self.should_stop()
                && !matches!(
                    self.current(),
                    SyntaxKind::BraceOpen | SyntaxKind::Semicolon | SyntaxKind::FatArrow
                )
                && !self.currently_is_word("where")
            {
                self.bump();
            }
            self.finish_node();
        }
    }

    /// `Name(params) [: base(args)] body`
    fn parse_constructor(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::ConstructorDecl);
        self.bump(); // name
        self.parse_param_list();
        if self.eat_token(SyntaxKind::Colon) {
            if matches!(self.current(), SyntaxKind::KwBase | SyntaxKind::KwThis) {
                self.bump();
            } else {
                self.error_msg(DiagnosticKind::UnexpectedToken, "expected `base` or `this`");
            }
            if self.currently_is(SyntaxKind::ParenOpen) {
                self.parse_arg_list(SyntaxKind::ParenOpen, SyntaxKind::ParenClose);
            }
        }
        self.parse_member_body();
        self.finish_node();
    }

    /// Members that start with a type: methods, properties, fields.
    fn parse_typed_member(&mut self, checkpoint: Checkpoint) {
        self.parse_type();

        if !self.currently_is(SyntaxKind::Ident) {
            self.parse_unknown_member(checkpoint);
            return;
        }
        let is_operator = matches!(self.current_text(), "operator" | "implicit" | "explicit");
        if is_operator {
            self.parse_unknown_member(checkpoint);
            return;
        }

        // Explicit interface implementations: `IFoo.Bar`
        let mut i = 1;
        while self.peek_nth(i) == SyntaxKind::Dot && self.peek_nth(i + 1) == SyntaxKind::Ident {
            i += 2;
        }

        match self.peek_nth(i) {
            SyntaxKind::ParenOpen | SyntaxKind::Lt => {
                self.start_node_at(checkpoint, SyntaxKind::MethodDecl);
                self.bump_member_name(i);
                self.parse_method_rest();
                self.finish_node();
            }
            SyntaxKind::BraceOpen | SyntaxKind::FatArrow => {
                self.start_node_at(checkpoint, SyntaxKind::PropertyDecl);
                self.bump_member_name(i);
                if self.currently_is(SyntaxKind::BraceOpen) {
                    self.parse_accessor_list();
                    if self.eat_token(SyntaxKind::Equals) {
                        self.parse_variable_initializer();
                        self.expect(SyntaxKind::Semicolon, "`;` after property initializer");
                    }
                } else {
                    self.parse_expr_body();
                    self.expect(SyntaxKind::Semicolon, "`;` after expression body");
                }
                self.finish_node();
            }
            _ => {
                self.start_node_at(checkpoint, SyntaxKind::FieldDecl);
                loop {
                    self.parse_variable_declarator();
                    if !self.eat_token(SyntaxKind::Comma) {
                        break;
                    }
                }
                self.expect(SyntaxKind::Semicolon, "`;` after field declaration");
                self.finish_node();
            }
        }
    }

    fn bump_member_name(&mut self, significant_tokens: usize) {
        for _ in 0..significant_tokens {
            self.bump();
        }
    }

    /// After the name: `<T>(params) where ... body`
    pub(crate) fn parse_method_rest(&mut self) {
        if self.currently_is(SyntaxKind::Lt) {
            self.parse_type_param_list();
        }
        self.parse_param_list();
        self.parse_where_clauses();
        self.parse_member_body();
    }

    /// `{ ... }` | `=> expr;` | `;`
    fn parse_member_body(&mut self) {
        match self.current() {
            SyntaxKind::BraceOpen => self.parse_block(),
            SyntaxKind::FatArrow => {
                self.parse_expr_body();
                self.expect(SyntaxKind::Semicolon, "`;` after expression body");
            }
            SyntaxKind::Semicolon => self.bump(),
            _ => {
                self.error_msg(DiagnosticKind::UnexpectedToken, "expected method body");
            }
        }
    }

    fn parse_expr_body(&mut self) {
        self.start_node(SyntaxKind::ExprBody);
        self.bump(); // `=>`
        self.parse_expr();
        self.finish_node();
    }

    /// `(Type a, ref Type b = default, params Type[] rest)`
    pub(crate) fn parse_param_list(&mut self) {
        if !self.currently_is(SyntaxKind::ParenOpen) {
            self.error_msg(DiagnosticKind::UnexpectedToken, "expected `(`");
            return;
        }
        self.start_node(SyntaxKind::ParamList);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();
        while !self.should_stop() && !self.currently_is(SyntaxKind::ParenClose) {
            if !self.parse_param() {
                break;
            }
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
        self.close_delimiter(SyntaxKind::ParenClose, "parameter list");
        self.finish_node();
    }

    fn parse_param(&mut self) -> bool {
        self.start_node(SyntaxKind::Param);
        while self.currently_is(SyntaxKind::BracketOpen) {
            self.parse_attribute_list();
        }
        while matches!(
            self.current(),
            SyntaxKind::KwRef
                | SyntaxKind::KwOut
                | SyntaxKind::KwIn
                | SyntaxKind::KwParams
                | SyntaxKind::KwThis
        ) || (self.currently_is(SyntaxKind::Modifier) && self.current_text() == "readonly")
        {
            self.bump();
        }

        let typed = self
            .scan_type(0)
            .is_some_and(|i| self.peek_nth(i) == SyntaxKind::Ident);
        if typed {
            self.parse_type();
        }
        let ok = self.eat_token(SyntaxKind::Ident);
        if !ok {
            self.error_msg(DiagnosticKind::ExpectedIdentifier, "parameter name");
        }
        if ok && self.eat_token(SyntaxKind::Equals) {
            self.parse_expr();
        }
        self.finish_node();
        ok
    }

    /// `{ get; private set; init => x; }`
    fn parse_accessor_list(&mut self) {
        self.start_node(SyntaxKind::AccessorList);
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();
        while !self.should_stop() && !self.currently_is(SyntaxKind::BraceClose) {
            self.start_node(SyntaxKind::Accessor);
            while self.currently_is(SyntaxKind::BracketOpen) {
                self.parse_attribute_list();
            }
            while self.currently_is(SyntaxKind::Modifier) {
                self.bump();
            }
            if self.currently_is(SyntaxKind::Ident) {
                self.bump();
                match self.current() {
                    SyntaxKind::BraceOpen => self.parse_block(),
                    SyntaxKind::FatArrow => {
                        self.parse_expr_body();
                        self.expect(SyntaxKind::Semicolon, "`;` after accessor body");
                    }
                    _ => {
                        self.expect(SyntaxKind::Semicolon, "`;` after accessor");
                    }
                }
            } else {
                self.error_and_bump_msg(DiagnosticKind::ExpectedIdentifier, "accessor name");
            }
            self.finish_node();
        }
        self.close_delimiter(SyntaxKind::BraceClose, "accessor list");
        self.finish_node();
    }

    /// `name [= value]`
    pub(crate) fn parse_variable_declarator(&mut self) {
        self.start_node(SyntaxKind::VariableDeclarator);
        if !self.eat_token(SyntaxKind::Ident) {
            self.error_msg(DiagnosticKind::ExpectedIdentifier, "variable name");
        }
        if self.eat_token(SyntaxKind::Equals) {
            self.parse_variable_initializer();
        }
        self.finish_node();
    }

    fn parse_variable_initializer(&mut self) {
        if self.currently_is(SyntaxKind::BraceOpen) {
            self.parse_initializer();
        } else {
            self.parse_expr();
        }
    }

    /// Anything else in member position: swallowed up to `;` or a balanced body.
    fn parse_unknown_member(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::UnknownMember);
        self.error(DiagnosticKind::ExpectedMember);
        while !self.should_stop() {
            match self.current() {
                SyntaxKind::Semicolon => {
                    self.bump();
                    break;
                }
                SyntaxKind::BraceOpen => {
                    self.skip_balanced_braces();
                    self.eat_token(SyntaxKind::Semicolon);
                    break;
                }
                SyntaxKind::BraceClose => break,
                _ => self.bump(),
            }
        }
        self.finish_node();
    }

    /// Consume a `{ ... }` group as flat tokens.
    pub(crate) fn skip_balanced_braces(&mut self) {
        let mut depth = 0u32;
        while !self.should_stop() {
            match self.current() {
                SyntaxKind::BraceOpen => depth += 1,
                SyntaxKind::BraceClose => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        self.bump();
                        return;
                    }
                }
                _ => {}
            }
            self.bump();
        }
    }
}
