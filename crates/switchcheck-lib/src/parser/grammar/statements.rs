use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{EXPR_FIRST, STMT_RECOVERY};

impl Parser<'_> {
    /// `{ statements }`
    pub(crate) fn parse_block(&mut self) {
        if !self.currently_is(SyntaxKind::BraceOpen) {
            self.error_msg(DiagnosticKind::UnexpectedToken, "expected `{`");
            return;
        }
        self.start_node(SyntaxKind::Block);
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();
        while !self.should_stop() && !self.currently_is(SyntaxKind::BraceClose) {
            self.parse_statement();
        }
        self.close_delimiter(SyntaxKind::BraceClose, "block");
        self.finish_node();
    }

    pub(crate) fn parse_statement(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        self.parse_statement_inner();
        self.exit_recursion();
    }

    fn parse_statement_inner(&mut self) {
        match self.current() {
            SyntaxKind::BraceOpen => self.parse_block(),
            SyntaxKind::Semicolon => self.parse_keyword_statement(SyntaxKind::EmptyStmt),
            SyntaxKind::KwReturn => self.parse_return_or_throw(SyntaxKind::ReturnStmt),
            SyntaxKind::KwThrow => self.parse_return_or_throw(SyntaxKind::ThrowStmt),
            SyntaxKind::KwIf => self.parse_if_stmt(),
            SyntaxKind::KwWhile => self.parse_while_stmt(),
            SyntaxKind::KwDo => self.parse_do_stmt(),
            SyntaxKind::KwFor => self.parse_for_stmt(),
            SyntaxKind::KwForeach => self.parse_foreach_stmt(),
            SyntaxKind::KwBreak => self.parse_keyword_statement(SyntaxKind::BreakStmt),
            SyntaxKind::KwContinue => self.parse_keyword_statement(SyntaxKind::ContinueStmt),
            SyntaxKind::KwGoto => self.parse_goto_stmt(),
            SyntaxKind::KwTry => self.parse_try_stmt(),
            SyntaxKind::KwSwitch => self.parse_switch_stmt(),
            SyntaxKind::KwUsing => self.parse_using_stmt(),
            SyntaxKind::Ident if self.currently_is_word("yield") => self.parse_yield_stmt(),
            SyntaxKind::Modifier if self.current_text() == "const" => self.parse_local_decl(true),
            SyntaxKind::Modifier => {
                let checkpoint = self.checkpoint();
                while self.currently_is(SyntaxKind::Modifier) {
                    self.bump();
                }
                self.eat_word("async");
                self.parse_local_function(checkpoint);
            }
            SyntaxKind::Ident if self.currently_is_word("await") => self.parse_expr_stmt(),
            SyntaxKind::Ident | SyntaxKind::PredefinedType if self.at_local_decl() => {
                self.parse_local_decl(true)
            }
            SyntaxKind::Ident | SyntaxKind::PredefinedType if self.at_local_function() => {
                let checkpoint = self.checkpoint();
                self.parse_local_function(checkpoint);
            }
            SyntaxKind::Garbage => self.error_and_bump(DiagnosticKind::UnrecognizedInput),
            kind if EXPR_FIRST.contains(kind) => self.parse_expr_stmt(),
            _ => self.error_and_bump(DiagnosticKind::ExpectedStatement),
        }
    }

    /// `break;`, `continue;`, `;`
    fn parse_keyword_statement(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        let is_empty = self.currently_is(SyntaxKind::Semicolon);
        self.bump();
        if !is_empty {
            self.expect(SyntaxKind::Semicolon, "`;`");
        }
        self.finish_node();
    }

    /// `return [expr];` / `throw [expr];`
    fn parse_return_or_throw(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        if !self.currently_is(SyntaxKind::Semicolon) {
            self.parse_expr();
        }
        self.expect_statement_end();
        self.finish_node();
    }

    /// `yield return expr;` / `yield break;`
    fn parse_yield_stmt(&mut self) {
        match self.peek_nth(1) {
            SyntaxKind::KwReturn => {
                self.start_node(SyntaxKind::ReturnStmt);
                self.bump();
                self.bump();
                self.parse_expr();
                self.expect_statement_end();
                self.finish_node();
            }
            SyntaxKind::KwBreak => {
                self.start_node(SyntaxKind::BreakStmt);
                self.bump();
                self.bump();
                self.expect_statement_end();
                self.finish_node();
            }
            _ => self.parse_expr_stmt(),
        }
    }

    fn parse_expr_stmt(&mut self) {
        self.start_node(SyntaxKind::ExprStmt);
        self.parse_expr();
        self.expect_statement_end();
        self.finish_node();
    }

    /// Missing `;` is reported; junk before the next sync point is wrapped in an error node.
    fn expect_statement_end(&mut self) {
        if self.eat_token(SyntaxKind::Semicolon) {
            return;
        }
        self.error_recover(
            DiagnosticKind::UnexpectedToken,
            "expected `;`",
            STMT_RECOVERY,
        );
        self.eat_token(SyntaxKind::Semicolon);
    }

    /// `[const] Type a = 1, b;`
    pub(crate) fn parse_local_decl(&mut self, with_semicolon: bool) {
        self.start_node(SyntaxKind::LocalDecl);
        if self.currently_is(SyntaxKind::Modifier) {
            self.bump();
        }
        self.parse_type();
        loop {
            self.parse_variable_declarator();
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
        if with_semicolon {
            self.expect_statement_end();
        }
        self.finish_node();
    }

    fn parse_local_function(&mut self, checkpoint: rowan::Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::MethodDecl);
        if self.parse_type() && !self.eat_token(SyntaxKind::Ident) {
            self.error_msg(DiagnosticKind::ExpectedIdentifier, "local function name");
        }
        self.parse_method_rest();
        self.finish_node();
    }

    /// `( expr )` after `if`, `while` and friends.
    fn parse_paren_condition(&mut self, construct: &str) {
        if !self.currently_is(SyntaxKind::ParenOpen) {
            self.error_msg(
                DiagnosticKind::UnexpectedToken,
                format!("expected `(` after {construct}"),
            );
            return;
        }
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();
        self.parse_expr();
        self.close_delimiter(SyntaxKind::ParenClose, construct);
    }

    fn parse_if_stmt(&mut self) {
        self.start_node(SyntaxKind::IfStmt);
        self.bump();
        self.parse_paren_condition("`if`");
        self.parse_embedded_statement();
        if self.currently_is(SyntaxKind::KwElse) {
            self.start_node(SyntaxKind::ElseClause);
            self.bump();
            self.parse_embedded_statement();
            self.finish_node();
        }
        self.finish_node();
    }

    fn parse_while_stmt(&mut self) {
        self.start_node(SyntaxKind::WhileStmt);
        self.bump();
        self.parse_paren_condition("`while`");
        self.parse_embedded_statement();
        self.finish_node();
    }

    fn parse_do_stmt(&mut self) {
        self.start_node(SyntaxKind::DoStmt);
        self.bump();
        self.parse_embedded_statement();
        if self.expect(SyntaxKind::KwWhile, "`while` after `do` body") {
            self.parse_paren_condition("`while`");
        }
        self.expect_statement_end();
        self.finish_node();
    }

    /// `for (init; cond; step) body`
    fn parse_for_stmt(&mut self) {
        self.start_node(SyntaxKind::ForStmt);
        self.bump();
        if !self.currently_is(SyntaxKind::ParenOpen) {
            self.error_msg(DiagnosticKind::UnexpectedToken, "expected `(` after `for`");
            self.finish_node();
            return;
        }
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();

        if self.at_local_decl() {
            self.parse_local_decl(false);
        } else {
            self.parse_expr_list_until(SyntaxKind::Semicolon);
        }
        self.expect(SyntaxKind::Semicolon, "`;` in `for` header");
        if !self.currently_is(SyntaxKind::Semicolon) {
            self.parse_expr();
        }
        self.expect(SyntaxKind::Semicolon, "`;` in `for` header");
        self.parse_expr_list_until(SyntaxKind::ParenClose);

        self.close_delimiter(SyntaxKind::ParenClose, "`for` header");
        self.parse_embedded_statement();
        self.finish_node();
    }

    fn parse_expr_list_until(&mut self, end: SyntaxKind) {
        while !self.should_stop() && !self.currently_is(end) {
            self.parse_expr();
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
    }

    /// `foreach (Type x in expr) body`
    fn parse_foreach_stmt(&mut self) {
        self.start_node(SyntaxKind::ForeachStmt);
        self.bump();
        if !self.currently_is(SyntaxKind::ParenOpen) {
            self.error_msg(DiagnosticKind::UnexpectedToken, "expected `(` after `foreach`");
            self.finish_node();
            return;
        }
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();
        self.parse_type();
        if !self.eat_token(SyntaxKind::Ident) {
            self.error_msg(DiagnosticKind::ExpectedIdentifier, "loop variable");
        }
        if self.expect(SyntaxKind::KwIn, "`in`") {
            self.parse_expr();
        }
        self.close_delimiter(SyntaxKind::ParenClose, "`foreach` header");
        self.parse_embedded_statement();
        self.finish_node();
    }

    /// `goto label;`, `goto case expr;`, `goto default;`
    fn parse_goto_stmt(&mut self) {
        self.start_node(SyntaxKind::GotoStmt);
        self.bump();
        match self.current() {
            SyntaxKind::KwCase => {
                self.bump();
                self.parse_expr();
            }
            SyntaxKind::KwDefault | SyntaxKind::Ident => self.bump(),
            _ => {
                self.error_msg(DiagnosticKind::ExpectedIdentifier, "goto target");
            }
        }
        self.expect_statement_end();
        self.finish_node();
    }

    fn parse_try_stmt(&mut self) {
        self.start_node(SyntaxKind::TryStmt);
        self.bump();
        self.parse_block();
        let mut has_handler = false;
        while self.currently_is(SyntaxKind::KwCatch) {
            self.parse_catch_clause();
            has_handler = true;
        }
        if self.currently_is(SyntaxKind::KwFinally) {
            self.start_node(SyntaxKind::FinallyClause);
            self.bump();
            self.parse_block();
            self.finish_node();
            has_handler = true;
        }
        if !has_handler {
            self.error_msg(
                DiagnosticKind::UnexpectedToken,
                "expected `catch` or `finally`",
            );
        }
        self.finish_node();
    }

    /// `catch [(Type [name])] [when (cond)] { ... }`
    fn parse_catch_clause(&mut self) {
        self.start_node(SyntaxKind::CatchClause);
        self.bump();
        if self.currently_is(SyntaxKind::ParenOpen) {
            self.push_delimiter(SyntaxKind::ParenOpen);
            self.bump();
            self.parse_type();
            self.eat_token(SyntaxKind::Ident);
            self.close_delimiter(SyntaxKind::ParenClose, "catch declaration");
        }
        if self.currently_is_word("when") {
            self.start_node(SyntaxKind::WhenClause);
            self.bump();
            self.parse_paren_condition("`when`");
            self.finish_node();
        }
        self.parse_block();
        self.finish_node();
    }

    /// `using (resource) body` or `using var x = ...;`
    fn parse_using_stmt(&mut self) {
        self.start_node(SyntaxKind::UsingStmt);
        self.bump();
        if self.currently_is(SyntaxKind::ParenOpen) {
            self.push_delimiter(SyntaxKind::ParenOpen);
            self.bump();
            if self.at_local_decl() {
                self.parse_local_decl(false);
            } else {
                self.parse_expr();
            }
            self.close_delimiter(SyntaxKind::ParenClose, "`using` header");
            self.parse_embedded_statement();
        } else {
            self.parse_local_decl(true);
        }
        self.finish_node();
    }

    /// Body of `if`/`while`/`for`; a missing statement is reported without consuming.
    fn parse_embedded_statement(&mut self) {
        if self.should_stop() || self.currently_is(SyntaxKind::BraceClose) {
            self.error(DiagnosticKind::ExpectedStatement);
            return;
        }
        self.parse_statement();
    }
}
