//! Switch statements, switch expressions and the pattern grammar.
//!
//! Trivia between sections (or arms) is drained into the switch node itself,
//! so every section and arm node spans exactly from its first label (or
//! pattern) to its last token. The fixer relies on this when it re-threads
//! branches.

use rowan::Checkpoint;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{LITERALS, RELATIONAL_PATTERN_OPS};

use super::expressions::{BITOR_BP, SHIFT_BP};

impl Parser<'_> {
    /// `switch (expr) { sections }`
    pub(crate) fn parse_switch_stmt(&mut self) {
        self.start_node(SyntaxKind::SwitchStmt);
        self.assert_current(SyntaxKind::KwSwitch);
        self.bump();
        self.parse_switch_discriminant();

        if !self.currently_is(SyntaxKind::BraceOpen) {
            self.error_msg(
                DiagnosticKind::UnexpectedToken,
                "expected `{` for switch body",
            );
            self.finish_node();
            return;
        }
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();

        while !self.should_stop() && !self.currently_is(SyntaxKind::BraceClose) {
            if self.at_label_start() {
                self.parse_switch_section();
                continue;
            }
            self.start_node(SyntaxKind::Error);
            self.error_msg(
                DiagnosticKind::UnexpectedToken,
                "expected `case` or `default` label",
            );
            self.parse_statement();
            self.finish_node();
        }

        self.close_delimiter(SyntaxKind::BraceClose, "switch body");
        self.finish_node();
    }

    /// `(expr)`, or a tuple literal `(a, b)` that doubles as the parentheses.
    fn parse_switch_discriminant(&mut self) {
        if !self.currently_is(SyntaxKind::ParenOpen) {
            self.error_msg(
                DiagnosticKind::UnexpectedToken,
                "expected `(` after `switch`",
            );
            return;
        }
        let checkpoint = self.checkpoint();
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();
        self.parse_expr();
        if !self.currently_is(SyntaxKind::Comma) {
            self.close_delimiter(SyntaxKind::ParenClose, "switch discriminant");
            return;
        }
        while self.eat_token(SyntaxKind::Comma) {
            self.parse_expr();
        }
        self.close_delimiter(SyntaxKind::ParenClose, "tuple");
        self.start_node_at(checkpoint, SyntaxKind::TupleExpr);
        self.finish_node();
    }

    fn at_label_start(&mut self) -> bool {
        match self.current() {
            SyntaxKind::KwCase => true,
            SyntaxKind::KwDefault => self.next_is(SyntaxKind::Colon),
            _ => false,
        }
    }

    /// Labels, then statements up to the next label or `}`.
    fn parse_switch_section(&mut self) {
        self.start_node(SyntaxKind::SwitchSection);
        while self.at_label_start() {
            if self.currently_is(SyntaxKind::KwCase) {
                self.parse_case_label();
            } else {
                self.start_node(SyntaxKind::DefaultLabel);
                self.bump();
                self.bump();
                self.finish_node();
            }
        }
        while !self.should_stop()
            && !self.currently_is(SyntaxKind::BraceClose)
            && !self.at_label_start()
        {
            self.parse_statement();
        }
        self.finish_node();
    }

    /// `case pattern [when cond]:`
    fn parse_case_label(&mut self) {
        self.start_node(SyntaxKind::CaseLabel);
        self.assert_current(SyntaxKind::KwCase);
        self.bump();
        self.parse_pattern();
        self.parse_when_clause_if_any();
        self.expect(SyntaxKind::Colon, "`:` after case label");
        self.finish_node();
    }

    fn parse_when_clause_if_any(&mut self) {
        if !self.currently_is_word("when") {
            return;
        }
        self.start_node(SyntaxKind::WhenClause);
        self.bump();
        self.parse_expr();
        self.finish_node();
    }

    /// `switch { arms }` applied to the operand that started at `checkpoint`.
    pub(crate) fn parse_switch_expr_tail(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::SwitchExpr);
        self.bump(); // `switch`

        if !self.currently_is(SyntaxKind::BraceOpen) {
            self.error_msg(
                DiagnosticKind::UnexpectedToken,
                "expected `{` after `switch`",
            );
            self.finish_node();
            return;
        }
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();

        while !self.should_stop() && !self.currently_is(SyntaxKind::BraceClose) {
            if !self.parse_switch_arm() {
                break;
            }
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }

        self.close_delimiter(SyntaxKind::BraceClose, "switch expression");
        self.finish_node();
    }

    /// `pattern [when cond] => expr`. Returns false when nothing was consumed.
    fn parse_switch_arm(&mut self) -> bool {
        let start = self.pos;
        self.start_node(SyntaxKind::SwitchArm);
        self.parse_pattern();
        self.parse_when_clause_if_any();
        if self.expect(SyntaxKind::FatArrow, "`=>` in switch arm") {
            self.parse_expr();
        }
        self.finish_node();
        self.pos != start
    }

    pub(crate) fn parse_pattern(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        self.parse_or_pattern();
        self.exit_recursion();
    }

    fn parse_or_pattern(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_and_pattern();
        while self.currently_is_word("or") {
            self.start_node_at(checkpoint, SyntaxKind::BinaryPattern);
            self.bump();
            self.parse_and_pattern();
            self.finish_node();
        }
    }

    fn parse_and_pattern(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_not_pattern();
        while self.currently_is_word("and") {
            self.start_node_at(checkpoint, SyntaxKind::BinaryPattern);
            self.bump();
            self.parse_not_pattern();
            self.finish_node();
        }
    }

    fn parse_not_pattern(&mut self) {
        if self.currently_is_word("not") && !self.next_is(SyntaxKind::FatArrow) {
            self.start_node(SyntaxKind::NotPattern);
            self.bump();
            self.parse_not_pattern();
            self.finish_node();
            return;
        }
        self.parse_primary_pattern();
    }

    fn parse_primary_pattern(&mut self) {
        match self.current() {
            SyntaxKind::Ident if self.currently_is_word("_") => {
                self.start_node(SyntaxKind::DiscardPattern);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::Ident if self.currently_is_word("var") && self.next_is(SyntaxKind::Ident) => {
                self.start_node(SyntaxKind::VarPattern);
                self.bump();
                self.bump();
                self.finish_node();
            }
            kind if RELATIONAL_PATTERN_OPS.contains(kind) => {
                self.start_node(SyntaxKind::RelationalPattern);
                self.bump();
                self.parse_binary_expr(SHIFT_BP);
                self.finish_node();
            }
            SyntaxKind::ParenOpen if !self.at_cast() => self.parse_paren_pattern(),
            SyntaxKind::BraceOpen => {
                self.start_node(SyntaxKind::PropertyPattern);
                self.parse_property_subpatterns();
                self.eat_token(SyntaxKind::Ident);
                self.finish_node();
            }
            SyntaxKind::Ident | SyntaxKind::PredefinedType if self.at_type_with_property_pattern() => {
                self.start_node(SyntaxKind::PropertyPattern);
                self.parse_type();
                self.parse_property_subpatterns();
                self.eat_token(SyntaxKind::Ident);
                self.finish_node();
            }
            SyntaxKind::Ident | SyntaxKind::PredefinedType if self.at_declaration_pattern() => {
                self.start_node(SyntaxKind::DeclarationPattern);
                self.parse_type();
                self.bump();
                self.finish_node();
            }
            kind if self.at_constant_pattern_start(kind) => {
                self.start_node(SyntaxKind::ConstantPattern);
                self.parse_constant_expr();
                self.finish_node();
            }
            _ => self.error(DiagnosticKind::ExpectedPattern),
        }
    }

    fn at_constant_pattern_start(&mut self, kind: SyntaxKind) -> bool {
        LITERALS.contains(kind)
            || matches!(
                kind,
                SyntaxKind::Ident
                    | SyntaxKind::PredefinedType
                    | SyntaxKind::ParenOpen
                    | SyntaxKind::Minus
                    | SyntaxKind::Plus
                    | SyntaxKind::Tilde
                    | SyntaxKind::KwDefault
                    | SyntaxKind::KwThis
                    | SyntaxKind::KwBase
            )
    }

    /// Constant expressions stop before relational operators, which belong to patterns.
    fn parse_constant_expr(&mut self) {
        self.parse_binary_expr_with(BITOR_BP, false);
    }

    fn at_type_with_property_pattern(&mut self) -> bool {
        self.scan_type(0)
            .is_some_and(|i| self.peek_nth(i) == SyntaxKind::BraceOpen)
    }

    /// `(pattern)` or positional `(p1, p2)`.
    fn parse_paren_pattern(&mut self) {
        self.start_node(SyntaxKind::ParenPattern);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();
        loop {
            if self.currently_is(SyntaxKind::ParenClose) {
                break;
            }
            self.parse_subpattern();
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
        self.close_delimiter(SyntaxKind::ParenClose, "parenthesized pattern");
        self.eat_token(SyntaxKind::Ident);
        self.finish_node();
    }

    /// `{ Name: pattern, A.B: pattern }`
    fn parse_property_subpatterns(&mut self) {
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();
        while !self.should_stop() && !self.currently_is(SyntaxKind::BraceClose) {
            let start = self.pos;
            self.parse_subpattern();
            if self.pos == start || !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
        self.close_delimiter(SyntaxKind::BraceClose, "property pattern");
    }

    fn parse_subpattern(&mut self) {
        self.start_node(SyntaxKind::Subpattern);
        let mut i = 0;
        while self.peek_nth(i) == SyntaxKind::Ident && self.peek_nth(i + 1) == SyntaxKind::Dot {
            i += 2;
        }
        if self.peek_nth(i) == SyntaxKind::Ident && self.peek_nth(i + 1) == SyntaxKind::Colon {
            for _ in 0..i + 2 {
                self.bump();
            }
        }
        self.parse_pattern();
        self.finish_node();
    }
}
