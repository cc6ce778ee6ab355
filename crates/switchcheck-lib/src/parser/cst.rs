//! Syntax kinds for the C# subset.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `CsLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token(":")]
    Colon,

    #[token("?")]
    Question,

    #[token("??")]
    QuestionQuestion,

    /// Null-conditional member access `?.`
    #[token("?.")]
    QuestionDot,

    #[token("=>")]
    FatArrow,

    #[token("=")]
    Equals,

    #[token("==")]
    EqEq,

    #[token("!=")]
    NotEq,

    #[token("<")]
    Lt,

    /// Also the closing half of `>>`; the parser joins adjacent pairs.
    #[token(">")]
    Gt,

    #[token("<=")]
    LtEq,

    #[token(">=")]
    GtEq,

    #[token("<<")]
    LtLt,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("!")]
    Bang,

    #[token("~")]
    Tilde,

    #[token("&")]
    Amp,

    #[token("|")]
    Pipe,

    #[token("^")]
    Caret,

    #[token("&&")]
    AmpAmp,

    #[token("||")]
    PipePipe,

    #[token("++")]
    PlusPlus,

    #[token("--")]
    MinusMinus,

    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("%=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("<<=")]
    #[token("??=")]
    CompoundAssign,

    #[regex(r"[0-9][0-9_]*(?:\.[0-9][0-9_]*)?(?:[eE][+-]?[0-9]+)?[a-zA-Z]*")]
    #[regex(r"0[xX][0-9a-fA-F_]+[a-zA-Z]*")]
    #[regex(r"0[bB][01_]+[a-zA-Z]*")]
    Number,

    /// Regular, verbatim and interpolated strings as a single token.
    #[regex(r#""(?:[^"\\\n]|\\.)*""#)]
    #[regex(r#"@"(?:[^"]|"")*""#)]
    #[regex(r#"\$"(?:[^"\\\n]|\\.)*""#)]
    #[regex(r#"(?:\$@|@\$)"(?:[^"]|"")*""#)]
    String,

    #[regex(r"'(?:[^'\\\n]|\\.)*'")]
    Char,

    #[token("using")]
    KwUsing,

    #[token("namespace")]
    KwNamespace,

    #[token("enum")]
    KwEnum,

    #[token("class")]
    KwClass,

    #[token("struct")]
    KwStruct,

    #[token("interface")]
    KwInterface,

    #[token("public")]
    #[token("private")]
    #[token("protected")]
    #[token("internal")]
    #[token("static")]
    #[token("readonly")]
    #[token("sealed")]
    #[token("abstract")]
    #[token("virtual")]
    #[token("override")]
    #[token("const")]
    #[token("extern")]
    #[token("unsafe")]
    #[token("volatile")]
    Modifier,

    #[token("new")]
    KwNew,

    #[token("return")]
    KwReturn,

    #[token("throw")]
    KwThrow,

    #[token("switch")]
    KwSwitch,

    #[token("case")]
    KwCase,

    #[token("default")]
    KwDefault,

    #[token("break")]
    KwBreak,

    #[token("continue")]
    KwContinue,

    #[token("goto")]
    KwGoto,

    #[token("if")]
    KwIf,

    #[token("else")]
    KwElse,

    #[token("while")]
    KwWhile,

    #[token("do")]
    KwDo,

    #[token("for")]
    KwFor,

    #[token("foreach")]
    KwForeach,

    #[token("in")]
    KwIn,

    #[token("try")]
    KwTry,

    #[token("catch")]
    KwCatch,

    #[token("finally")]
    KwFinally,

    #[token("true")]
    KwTrue,

    #[token("false")]
    KwFalse,

    #[token("null")]
    KwNull,

    #[token("this")]
    KwThis,

    #[token("base")]
    KwBase,

    #[token("is")]
    KwIs,

    #[token("as")]
    KwAs,

    #[token("out")]
    KwOut,

    #[token("ref")]
    KwRef,

    #[token("params")]
    KwParams,

    #[token("bool")]
    #[token("byte")]
    #[token("sbyte")]
    #[token("char")]
    #[token("decimal")]
    #[token("double")]
    #[token("float")]
    #[token("int")]
    #[token("uint")]
    #[token("long")]
    #[token("ulong")]
    #[token("short")]
    #[token("ushort")]
    #[token("object")]
    #[token("string")]
    #[token("void")]
    PredefinedType,

    /// Identifier, including verbatim `@name` and contextual keywords
    /// (`var`, `when`, `or`, `and`, `not`, `record`, `_`, ...).
    /// Defined after keywords so they take precedence.
    #[regex(r"@?[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[ \t\x0C]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    #[token("\r")]
    Newline,

    #[regex(r"//[^\r\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*(?:[^*]|\*+[^*/])*\*+/")]
    BlockComment,

    /// Preprocessor line (`#region`, `#if DEBUG`, ...), kept verbatim as trivia.
    #[regex(r"#[^\r\n]*", allow_greedy = true)]
    Directive,

    /// Coalesced unrecognized characters
    Garbage,
    Error,

    // --- Node kinds (non-terminals) ---
    CompilationUnit,
    UsingDirective,
    NamespaceDecl,
    AttributeList,
    EnumDecl,
    EnumMember,
    TypeDecl,
    BaseList,
    TypeParamList,
    WhereClause,
    MethodDecl,
    ConstructorDecl,
    FieldDecl,
    PropertyDecl,
    AccessorList,
    Accessor,
    ParamList,
    Param,
    TypeRef,
    TypeArgList,
    VariableDeclarator,
    ExprBody,
    UnknownMember,

    Block,
    LocalDecl,
    ExprStmt,
    ReturnStmt,
    ThrowStmt,
    IfStmt,
    ElseClause,
    WhileStmt,
    DoStmt,
    ForStmt,
    ForeachStmt,
    BreakStmt,
    ContinueStmt,
    GotoStmt,
    EmptyStmt,
    TryStmt,
    CatchClause,
    FinallyClause,
    UsingStmt,

    SwitchStmt,
    SwitchSection,
    CaseLabel,
    DefaultLabel,
    SwitchExpr,
    SwitchArm,
    WhenClause,

    DiscardPattern,
    ConstantPattern,
    DeclarationPattern,
    VarPattern,
    RelationalPattern,
    BinaryPattern,
    NotPattern,
    ParenPattern,
    PropertyPattern,
    Subpattern,

    NameRef,
    MemberAccess,
    Invocation,
    ArgList,
    Arg,
    ElementAccess,
    Literal,
    ParenExpr,
    TupleExpr,
    CastExpr,
    ObjectCreation,
    Initializer,
    ThrowExpr,
    DefaultExpr,
    BinaryExpr,
    PrefixExpr,
    PostfixExpr,
    AssignExpr,
    ConditionalExpr,
    IsExpr,
    AsExpr,
    ThisExpr,
    BaseExpr,
    LambdaExpr,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Whitespace | Newline | LineComment | BlockComment | Directive
        )
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage)
    }

    /// Node kinds that the typed `Expr` wrapper accepts.
    pub fn is_expr(self) -> bool {
        matches!(
            self,
            NameRef
                | MemberAccess
                | Invocation
                | ElementAccess
                | Literal
                | ParenExpr
                | TupleExpr
                | CastExpr
                | ObjectCreation
                | Initializer
                | ThrowExpr
                | DefaultExpr
                | BinaryExpr
                | PrefixExpr
                | PostfixExpr
                | AssignExpr
                | ConditionalExpr
                | IsExpr
                | AsExpr
                | ThisExpr
                | BaseExpr
                | LambdaExpr
                | SwitchExpr
        )
    }

    pub fn is_pattern(self) -> bool {
        matches!(
            self,
            DiscardPattern
                | ConstantPattern
                | DeclarationPattern
                | VarPattern
                | RelationalPattern
                | BinaryPattern
                | NotPattern
                | ParenPattern
                | PropertyPattern
        )
    }

    pub fn is_stmt(self) -> bool {
        matches!(
            self,
            Block
                | LocalDecl
                | ExprStmt
                | ReturnStmt
                | ThrowStmt
                | IfStmt
                | WhileStmt
                | DoStmt
                | ForStmt
                | ForeachStmt
                | BreakStmt
                | ContinueStmt
                | GotoStmt
                | EmptyStmt
                | TryStmt
                | UsingStmt
                | SwitchStmt
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CsLang {}

impl Language for CsLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<CsLang>;
pub type SyntaxToken = rowan::SyntaxToken<CsLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 128-bit bitset of token `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u128);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 128.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 128, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 128, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 128 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..128u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    pub const TRIVIA: TokenSet =
        TokenSet::new(&[Whitespace, Newline, LineComment, BlockComment, Directive]);

    pub const LITERALS: TokenSet =
        TokenSet::new(&[Number, String, Char, KwTrue, KwFalse, KwNull]);

    /// FIRST set of expressions. Contextual prefixes (`await`) arrive as `Ident`.
    pub const EXPR_FIRST: TokenSet = TokenSet::new(&[
        Ident,
        PredefinedType,
        Number,
        String,
        Char,
        KwTrue,
        KwFalse,
        KwNull,
        KwThis,
        KwBase,
        KwNew,
        KwThrow,
        KwDefault,
        ParenOpen,
        Bang,
        Minus,
        Plus,
        Tilde,
        PlusPlus,
        MinusMinus,
    ]);

    pub const PREFIX_OPS: TokenSet =
        TokenSet::new(&[Bang, Minus, Plus, Tilde, PlusPlus, MinusMinus]);

    pub const ASSIGN_OPS: TokenSet = TokenSet::new(&[Equals, CompoundAssign]);

    pub const RELATIONAL_PATTERN_OPS: TokenSet = TokenSet::new(&[Lt, Gt, LtEq, GtEq]);

    /// Keywords that start a statement.
    pub const STMT_KEYWORDS: TokenSet = TokenSet::new(&[
        KwReturn, KwThrow, KwIf, KwWhile, KwDo, KwFor, KwForeach, KwBreak, KwContinue, KwGoto,
        KwTry, KwSwitch, KwUsing,
    ]);

    pub const STMT_FIRST: TokenSet = EXPR_FIRST
        .union(STMT_KEYWORDS)
        .union(TokenSet::new(&[BraceOpen, Semicolon, Modifier]));

    pub const TYPE_KEYWORDS: TokenSet = TokenSet::new(&[KwClass, KwStruct, KwInterface, KwEnum]);

    /// Tokens that may start a member or type declaration.
    pub const MEMBER_FIRST: TokenSet = TYPE_KEYWORDS.union(TokenSet::new(&[
        Modifier,
        BracketOpen,
        Ident,
        PredefinedType,
        KwNew,
        KwNamespace,
        KwUsing,
    ]));

    /// Synchronization points for statement-level recovery.
    pub const STMT_RECOVERY: TokenSet = STMT_KEYWORDS.union(TokenSet::new(&[
        BraceOpen, BraceClose, Semicolon, KwCase, KwDefault,
    ]));

    /// Synchronization points inside a type body.
    pub const MEMBER_RECOVERY: TokenSet =
        TYPE_KEYWORDS.union(TokenSet::new(&[Modifier, BracketOpen, BraceClose]));

    /// Tokens that end an expression list item.
    pub const LIST_RECOVERY: TokenSet = TokenSet::new(&[
        Comma, ParenClose, BracketClose, BraceClose, Semicolon,
    ]);
}
