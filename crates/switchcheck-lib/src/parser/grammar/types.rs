use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;

/// Generic nesting beyond this is not treated as a type during lookahead.
const MAX_SCAN_DEPTH: u32 = 32;

/// Lookahead window for the parenthesized-lambda scan.
const MAX_PAREN_SCAN: usize = 256;

impl Parser<'_> {
    /// `int` | `A.B<C, D>` with optional `?` and `[]` suffixes.
    pub(crate) fn parse_type(&mut self) -> bool {
        match self.current() {
            SyntaxKind::PredefinedType => {
                self.start_node(SyntaxKind::TypeRef);
                self.bump();
            }
            SyntaxKind::Ident => {
                self.start_node(SyntaxKind::TypeRef);
                self.bump();
                self.parse_type_args_if_any();
                while self.currently_is(SyntaxKind::Dot) && self.next_is(SyntaxKind::Ident) {
                    self.bump();
                    self.bump();
                    self.parse_type_args_if_any();
                }
            }
            _ => {
                self.error(DiagnosticKind::ExpectedType);
                return false;
            }
        }

        loop {
            match self.current() {
                SyntaxKind::Question => self.bump(),
                SyntaxKind::BracketOpen
                    if matches!(
                        self.peek_nth(1),
                        SyntaxKind::BracketClose | SyntaxKind::Comma
                    ) =>
                {
                    self.bump();
                    while self.eat_token(SyntaxKind::Comma) {}
                    self.expect(SyntaxKind::BracketClose, "`]` in array type");
                }
                _ => break,
            }
        }
        self.finish_node();
        true
    }

    fn parse_type_args_if_any(&mut self) {
        if self.currently_is(SyntaxKind::Lt) && self.scan_type_args(0, 0).is_some() {
            self.parse_type_arg_list();
        }
    }

    /// `<T, U>`; caller verified the shape with `scan_type_args`.
    pub(crate) fn parse_type_arg_list(&mut self) {
        self.start_node(SyntaxKind::TypeArgList);
        self.bump(); // `<`
        loop {
            self.parse_type();
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
        self.expect(SyntaxKind::Gt, "`>` closing type arguments");
        self.finish_node();
    }

    /// Lookahead: index just past a type starting at significant token `n`, if one starts there.
    pub(crate) fn scan_type(&mut self, n: usize) -> Option<usize> {
        self.scan_type_at_depth(n, 0)
    }

    fn scan_type_at_depth(&mut self, n: usize, depth: u32) -> Option<usize> {
        if depth > MAX_SCAN_DEPTH {
            return None;
        }
        let mut i = n;
        match self.peek_nth(i) {
            SyntaxKind::PredefinedType => i += 1,
            SyntaxKind::Ident => {
                i += 1;
                loop {
                    if self.peek_nth(i) == SyntaxKind::Lt
                        && let Some(next) = self.scan_type_args(i, depth + 1)
                    {
                        i = next;
                    }
                    if self.peek_nth(i) == SyntaxKind::Dot && self.peek_nth(i + 1) == SyntaxKind::Ident
                    {
                        i += 2;
                        continue;
                    }
                    break;
                }
            }
            _ => return None,
        }
        loop {
            match self.peek_nth(i) {
                SyntaxKind::Question => i += 1,
                SyntaxKind::BracketOpen
                    if matches!(
                        self.peek_nth(i + 1),
                        SyntaxKind::BracketClose | SyntaxKind::Comma
                    ) =>
                {
                    i += 1;
                    while self.peek_nth(i) == SyntaxKind::Comma {
                        i += 1;
                    }
                    if self.peek_nth(i) != SyntaxKind::BracketClose {
                        return None;
                    }
                    i += 1;
                }
                _ => break,
            }
        }
        Some(i)
    }

    /// Lookahead over `<...>` starting at significant token `n` (which is `<`).
    pub(crate) fn scan_type_args(&mut self, n: usize, depth: u32) -> Option<usize> {
        let mut i = n + 1;
        loop {
            i = self.scan_type_at_depth(i, depth)?;
            match self.peek_nth(i) {
                SyntaxKind::Comma => i += 1,
                SyntaxKind::Gt => return Some(i + 1),
                _ => return None,
            }
        }
    }

    /// `Type name` followed by `=`, `;` or `,`: a local variable declaration.
    pub(crate) fn at_local_decl(&mut self) -> bool {
        let Some(i) = self.scan_type(0) else {
            return false;
        };
        self.peek_nth(i) == SyntaxKind::Ident
            && matches!(
                self.peek_nth(i + 1),
                SyntaxKind::Equals | SyntaxKind::Semicolon | SyntaxKind::Comma
            )
    }

    /// `Type name(` or `Type name<`: a local function.
    pub(crate) fn at_local_function(&mut self) -> bool {
        let Some(i) = self.scan_type(0) else {
            return false;
        };
        self.peek_nth(i) == SyntaxKind::Ident
            && matches!(self.peek_nth(i + 1), SyntaxKind::ParenOpen | SyntaxKind::Lt)
    }

    /// `Type designation` inside a pattern (`case Status s:`).
    pub(crate) fn at_declaration_pattern(&mut self) -> bool {
        let Some(i) = self.scan_type(0) else {
            return false;
        };
        self.peek_nth(i) == SyntaxKind::Ident
            && !matches!(self.peek_nth_text(i), "when" | "and" | "or")
    }

    /// `(Type) operand`. Mirrors the usual C# disambiguation: a parenthesized
    /// name is a cast only when an operand (not an operator) follows it.
    pub(crate) fn at_cast(&mut self) -> bool {
        if !self.currently_is(SyntaxKind::ParenOpen) {
            return false;
        }
        let first = self.peek_nth(1);
        if !matches!(first, SyntaxKind::PredefinedType | SyntaxKind::Ident) {
            return false;
        }
        let Some(i) = self.scan_type(1) else {
            return false;
        };
        if self.peek_nth(i) != SyntaxKind::ParenClose {
            return false;
        }
        let after = self.peek_nth(i + 1);
        let operand_start = matches!(
            after,
            SyntaxKind::Ident
                | SyntaxKind::PredefinedType
                | SyntaxKind::Number
                | SyntaxKind::String
                | SyntaxKind::Char
                | SyntaxKind::KwTrue
                | SyntaxKind::KwFalse
                | SyntaxKind::KwNull
                | SyntaxKind::KwThis
                | SyntaxKind::KwBase
                | SyntaxKind::KwNew
                | SyntaxKind::KwDefault
                | SyntaxKind::ParenOpen
                | SyntaxKind::Bang
                | SyntaxKind::Tilde
        );
        if first == SyntaxKind::PredefinedType {
            return operand_start || matches!(after, SyntaxKind::Minus | SyntaxKind::Plus);
        }
        operand_start
    }

    /// `x => ...`, `(a, b) => ...`, `async x => ...`.
    pub(crate) fn at_lambda(&mut self) -> bool {
        let offset = if self.currently_is_word("async")
            && matches!(self.peek_nth(1), SyntaxKind::Ident | SyntaxKind::ParenOpen)
        {
            1
        } else {
            0
        };
        match self.peek_nth(offset) {
            SyntaxKind::Ident => self.peek_nth(offset + 1) == SyntaxKind::FatArrow,
            SyntaxKind::ParenOpen => {
                let mut depth = 0usize;
                for i in offset..offset + MAX_PAREN_SCAN {
                    match self.peek_nth(i) {
                        SyntaxKind::ParenOpen => depth += 1,
                        SyntaxKind::ParenClose => {
                            depth -= 1;
                            if depth == 0 {
                                return self.peek_nth(i + 1) == SyntaxKind::FatArrow;
                            }
                        }
                        SyntaxKind::Error | SyntaxKind::Semicolon | SyntaxKind::BraceOpen => {
                            return false;
                        }
                        _ => {}
                    }
                }
                false
            }
            _ => false,
        }
    }
}
