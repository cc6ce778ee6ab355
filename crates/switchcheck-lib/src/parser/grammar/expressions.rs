//! Expression grammar: Pratt loop for binary operators, then unary, postfix
//! and primary forms. `switch` binds as a postfix on the operand it follows.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{ASSIGN_OPS, EXPR_FIRST, LITERALS, PREFIX_OPS};

const COALESCE_BP: u8 = 3;
const OR_BP: u8 = 4;
const AND_BP: u8 = 5;
pub(super) const BITOR_BP: u8 = 6;
const XOR_BP: u8 = 7;
const BITAND_BP: u8 = 8;
const EQUALITY_BP: u8 = 9;
const RELATIONAL_BP: u8 = 10;
pub(super) const SHIFT_BP: u8 = 11;
const ADDITIVE_BP: u8 = 12;
const MULTIPLICATIVE_BP: u8 = 13;

/// Binding power, right associativity and token width of an infix operator.
struct InfixOp {
    bp: u8,
    right_assoc: bool,
    width: usize,
}

impl InfixOp {
    const fn left(bp: u8) -> Self {
        Self {
            bp,
            right_assoc: false,
            width: 1,
        }
    }
}

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        self.parse_assignment_expr();
        self.exit_recursion();
    }

    fn parse_assignment_expr(&mut self) {
        if self.at_lambda() {
            self.parse_lambda();
            return;
        }
        if !self.currently_is_one_of(EXPR_FIRST) {
            self.error(DiagnosticKind::ExpectedExpression);
            return;
        }
        let checkpoint = self.checkpoint();
        self.parse_conditional_expr();
        if self.currently_is_one_of(ASSIGN_OPS) {
            self.start_node_at(checkpoint, SyntaxKind::AssignExpr);
            self.bump();
            if self.currently_is(SyntaxKind::BraceOpen) {
                self.parse_initializer();
            } else {
                self.parse_expr();
            }
            self.finish_node();
        }
    }

    /// `cond ? a : b`
    fn parse_conditional_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_binary_expr(COALESCE_BP);
        if self.currently_is(SyntaxKind::Question) {
            self.start_node_at(checkpoint, SyntaxKind::ConditionalExpr);
            self.bump();
            self.parse_expr();
            self.expect(SyntaxKind::Colon, "`:` in conditional expression");
            self.parse_expr();
            self.finish_node();
        }
    }

    pub(crate) fn parse_binary_expr(&mut self, min_bp: u8) {
        self.parse_binary_expr_with(min_bp, true);
    }

    /// Pratt loop. `relational: false` stops before `<`, `>`, `is`, `as` (pattern constants).
    pub(crate) fn parse_binary_expr_with(&mut self, min_bp: u8, relational: bool) {
        let checkpoint = self.checkpoint();
        if !self.parse_switch_operand() {
            return;
        }
        while let Some(op) = self.current_infix_op() {
            if op.bp < min_bp || (!relational && op.bp == RELATIONAL_BP) {
                break;
            }
            match self.current() {
                SyntaxKind::KwIs => {
                    self.start_node_at(checkpoint, SyntaxKind::IsExpr);
                    self.bump();
                    self.parse_pattern();
                    self.finish_node();
                }
                SyntaxKind::KwAs => {
                    self.start_node_at(checkpoint, SyntaxKind::AsExpr);
                    self.bump();
                    self.parse_type();
                    self.finish_node();
                }
                _ => {
                    self.start_node_at(checkpoint, SyntaxKind::BinaryExpr);
                    for _ in 0..op.width {
                        self.bump();
                    }
                    let next_bp = if op.right_assoc { op.bp } else { op.bp + 1 };
                    self.parse_binary_expr_with(next_bp, relational);
                    self.finish_node();
                }
            }
        }
    }

    fn current_infix_op(&mut self) -> Option<InfixOp> {
        let op = match self.current() {
            SyntaxKind::QuestionQuestion => InfixOp {
                bp: COALESCE_BP,
                right_assoc: true,
                width: 1,
            },
            SyntaxKind::PipePipe => InfixOp::left(OR_BP),
            SyntaxKind::AmpAmp => InfixOp::left(AND_BP),
            SyntaxKind::Pipe => InfixOp::left(BITOR_BP),
            SyntaxKind::Caret => InfixOp::left(XOR_BP),
            SyntaxKind::Amp => InfixOp::left(BITAND_BP),
            SyntaxKind::EqEq | SyntaxKind::NotEq => InfixOp::left(EQUALITY_BP),
            SyntaxKind::Gt if self.peek_nth(1) == SyntaxKind::Gt && self.peek_adjacent(0) => {
                InfixOp {
                    bp: SHIFT_BP,
                    right_assoc: false,
                    width: 2,
                }
            }
            SyntaxKind::Lt
            | SyntaxKind::Gt
            | SyntaxKind::LtEq
            | SyntaxKind::GtEq
            | SyntaxKind::KwIs
            | SyntaxKind::KwAs => InfixOp::left(RELATIONAL_BP),
            SyntaxKind::LtLt => InfixOp::left(SHIFT_BP),
            SyntaxKind::Plus | SyntaxKind::Minus => InfixOp::left(ADDITIVE_BP),
            SyntaxKind::Star | SyntaxKind::Slash | SyntaxKind::Percent => {
                InfixOp::left(MULTIPLICATIVE_BP)
            }
            _ => return None,
        };
        Some(op)
    }

    /// Unary operand followed by any number of `switch { ... }` tails.
    fn parse_switch_operand(&mut self) -> bool {
        let checkpoint = self.checkpoint();
        if !self.parse_unary_expr() {
            return false;
        }
        while self.currently_is(SyntaxKind::KwSwitch) {
            self.parse_switch_expr_tail(checkpoint);
        }
        true
    }

    fn parse_unary_expr(&mut self) -> bool {
        if !self.enter_recursion() {
            return false;
        }
        let parsed = self.parse_unary_expr_inner();
        self.exit_recursion();
        parsed
    }

    fn parse_unary_expr_inner(&mut self) -> bool {
        if self.currently_is_one_of(PREFIX_OPS) || self.at_await() {
            self.start_node(SyntaxKind::PrefixExpr);
            self.bump();
            let parsed = self.parse_unary_expr();
            self.finish_node();
            return parsed;
        }
        if self.at_cast() {
            self.start_node(SyntaxKind::CastExpr);
            self.push_delimiter(SyntaxKind::ParenOpen);
            self.bump();
            self.parse_type();
            self.close_delimiter(SyntaxKind::ParenClose, "cast");
            let parsed = self.parse_unary_expr();
            self.finish_node();
            return parsed;
        }
        self.parse_postfix_expr()
    }

    fn at_await(&mut self) -> bool {
        if !self.currently_is_word("await") {
            return false;
        }
        let next = self.peek_nth(1);
        EXPR_FIRST.contains(next) && !PREFIX_OPS.contains(next)
    }

    fn parse_postfix_expr(&mut self) -> bool {
        let checkpoint = self.checkpoint();
        if !self.parse_primary_expr() {
            return false;
        }
        loop {
            match self.current() {
                SyntaxKind::Dot | SyntaxKind::QuestionDot if self.next_is(SyntaxKind::Ident) => {
                    self.start_node_at(checkpoint, SyntaxKind::MemberAccess);
                    self.bump();
                    self.bump();
                    self.parse_generic_args_in_expr();
                    self.finish_node();
                }
                SyntaxKind::ParenOpen => {
                    self.start_node_at(checkpoint, SyntaxKind::Invocation);
                    self.parse_arg_list(SyntaxKind::ParenOpen, SyntaxKind::ParenClose);
                    self.finish_node();
                }
                SyntaxKind::BracketOpen => {
                    self.start_node_at(checkpoint, SyntaxKind::ElementAccess);
                    self.parse_arg_list(SyntaxKind::BracketOpen, SyntaxKind::BracketClose);
                    self.finish_node();
                }
                SyntaxKind::PlusPlus | SyntaxKind::MinusMinus => {
                    self.start_node_at(checkpoint, SyntaxKind::PostfixExpr);
                    self.bump();
                    self.finish_node();
                }
                // null-forgiving `x!`
                SyntaxKind::Bang if self.current_is_attached() => {
                    self.start_node_at(checkpoint, SyntaxKind::PostfixExpr);
                    self.bump();
                    self.finish_node();
                }
                _ => break,
            }
        }
        true
    }

    /// `<T>` after a name, taken only when what follows cannot continue a comparison.
    fn parse_generic_args_in_expr(&mut self) {
        if !self.currently_is(SyntaxKind::Lt) {
            return;
        }
        let Some(end) = self.scan_type_args(0, 0) else {
            return;
        };
        let follows = matches!(
            self.peek_nth(end),
            SyntaxKind::ParenOpen
                | SyntaxKind::ParenClose
                | SyntaxKind::BracketClose
                | SyntaxKind::BraceClose
                | SyntaxKind::Colon
                | SyntaxKind::Semicolon
                | SyntaxKind::Comma
                | SyntaxKind::Dot
                | SyntaxKind::Question
                | SyntaxKind::EqEq
                | SyntaxKind::NotEq
        );
        if follows {
            self.parse_type_arg_list();
        }
    }

    fn parse_primary_expr(&mut self) -> bool {
        match self.current() {
            SyntaxKind::Ident => {
                self.start_node(SyntaxKind::NameRef);
                self.bump();
                self.parse_generic_args_in_expr();
                self.finish_node();
            }
            SyntaxKind::PredefinedType => {
                self.start_node(SyntaxKind::NameRef);
                self.bump();
                self.finish_node();
            }
            kind if LITERALS.contains(kind) => {
                self.start_node(SyntaxKind::Literal);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::KwThis => {
                self.start_node(SyntaxKind::ThisExpr);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::KwBase => {
                self.start_node(SyntaxKind::BaseExpr);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::ParenOpen => self.parse_paren_or_tuple(),
            SyntaxKind::KwNew => self.parse_object_creation(),
            SyntaxKind::KwThrow => {
                self.start_node(SyntaxKind::ThrowExpr);
                self.bump();
                self.parse_expr();
                self.finish_node();
            }
            SyntaxKind::KwDefault => {
                self.start_node(SyntaxKind::DefaultExpr);
                self.bump();
                if self.currently_is(SyntaxKind::ParenOpen) {
                    self.push_delimiter(SyntaxKind::ParenOpen);
                    self.bump();
                    self.parse_type();
                    self.close_delimiter(SyntaxKind::ParenClose, "`default`");
                }
                self.finish_node();
            }
            _ => {
                self.error(DiagnosticKind::ExpectedExpression);
                return false;
            }
        }
        true
    }

    /// `(expr)` or `(a, b, ...)`
    fn parse_paren_or_tuple(&mut self) {
        let checkpoint = self.checkpoint();
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();
        self.parse_expr();
        let mut kind = SyntaxKind::ParenExpr;
        while self.eat_token(SyntaxKind::Comma) {
            kind = SyntaxKind::TupleExpr;
            self.parse_expr();
        }
        self.close_delimiter(SyntaxKind::ParenClose, "parenthesized expression");
        self.start_node_at(checkpoint, kind);
        self.finish_node();
    }

    /// `new Type(args) { init }`, `new Type[n]`, `new[] { ... }`, `new() { ... }`
    fn parse_object_creation(&mut self) {
        self.start_node(SyntaxKind::ObjectCreation);
        self.bump(); // `new`
        if matches!(
            self.current(),
            SyntaxKind::Ident | SyntaxKind::PredefinedType
        ) {
            self.parse_type();
        }
        if self.currently_is(SyntaxKind::BracketOpen) {
            self.parse_arg_list(SyntaxKind::BracketOpen, SyntaxKind::BracketClose);
        }
        if self.currently_is(SyntaxKind::ParenOpen) {
            self.parse_arg_list(SyntaxKind::ParenOpen, SyntaxKind::ParenClose);
        }
        if self.currently_is(SyntaxKind::BraceOpen) {
            self.parse_initializer();
        }
        self.finish_node();
    }

    /// `{ a, b = 1, { nested } }` for object, collection and array initializers.
    pub(crate) fn parse_initializer(&mut self) {
        self.start_node(SyntaxKind::Initializer);
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();
        while !self.should_stop() && !self.currently_is(SyntaxKind::BraceClose) {
            let start = self.pos;
            if self.currently_is(SyntaxKind::BraceOpen) {
                self.parse_initializer();
            } else {
                self.parse_expr();
            }
            if self.pos == start || !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
        self.close_delimiter(SyntaxKind::BraceClose, "initializer");
        self.finish_node();
    }

    /// `(a, name: b, out var c)` or `[i, j]`
    pub(crate) fn parse_arg_list(&mut self, open: SyntaxKind, close: SyntaxKind) {
        self.start_node(SyntaxKind::ArgList);
        self.push_delimiter(open);
        self.bump();
        while !self.should_stop() && !self.currently_is(close) {
            let start = self.pos;
            self.parse_arg();
            if self.pos == start || !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
        self.close_delimiter(close, "argument list");
        self.finish_node();
    }

    fn parse_arg(&mut self) {
        self.start_node(SyntaxKind::Arg);
        if self.currently_is(SyntaxKind::Ident) && self.next_is(SyntaxKind::Colon) {
            self.bump();
            self.bump();
        }
        let is_out = self.currently_is(SyntaxKind::KwOut);
        if matches!(
            self.current(),
            SyntaxKind::KwOut | SyntaxKind::KwRef | SyntaxKind::KwIn
        ) {
            self.bump();
        }
        let declares = is_out
            && self
                .scan_type(0)
                .is_some_and(|i| self.peek_nth(i) == SyntaxKind::Ident);
        if declares {
            self.parse_type();
            self.bump();
        } else {
            self.parse_expr();
        }
        self.finish_node();
    }

    /// `x => body`, `(a, b) => body`, `async () => body`
    fn parse_lambda(&mut self) {
        self.start_node(SyntaxKind::LambdaExpr);
        self.eat_word("async");
        if self.currently_is(SyntaxKind::Ident) {
            self.start_node(SyntaxKind::Param);
            self.bump();
            self.finish_node();
        } else {
            self.parse_param_list();
        }
        self.expect(SyntaxKind::FatArrow, "`=>`");
        if self.currently_is(SyntaxKind::BraceOpen) {
            self.parse_block();
        } else {
            self.parse_expr();
        }
        self.finish_node();
    }
}
