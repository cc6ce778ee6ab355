//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind`; accessors return `None`
//! for substructure missing from error-recovered trees.

use rowan::TextRange;

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }

            pub fn text_range(&self) -> TextRange {
                self.0.text_range()
            }
        }
    };
}

/// Sum type over several node wrappers, each variant named after its `SyntaxKind`.
macro_rules! ast_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant($variant),)+
        }

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                match node.kind() {
                    $(SyntaxKind::$variant => $variant::cast(node).map($name::$variant),)+
                    _ => None,
                }
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                match self {
                    $($name::$variant(n) => n.as_cst(),)+
                }
            }

            pub fn text_range(&self) -> TextRange {
                self.as_cst().text_range()
            }
        }
    };
}

fn token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == kind)
}

fn tokens(node: &SyntaxNode, kind: SyntaxKind) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .filter(move |t| t.kind() == kind)
}

/// First identifier after the declaration keyword, skipping contextual modifiers.
fn name_after_keyword(node: &SyntaxNode) -> Option<SyntaxToken> {
    let mut seen_keyword = false;
    for t in node.children_with_tokens().filter_map(|it| it.into_token()) {
        match t.kind() {
            SyntaxKind::KwClass
            | SyntaxKind::KwStruct
            | SyntaxKind::KwInterface
            | SyntaxKind::KwEnum => seen_keyword = true,
            SyntaxKind::Ident if seen_keyword => return Some(t),
            SyntaxKind::Ident if t.text() == "record" => seen_keyword = true,
            _ => {}
        }
    }
    None
}

fn child<N>(node: &SyntaxNode, cast: fn(SyntaxNode) -> Option<N>) -> Option<N> {
    node.children().find_map(cast)
}

// Declarations
ast_node!(CompilationUnit, CompilationUnit);
ast_node!(UsingDirective, UsingDirective);
ast_node!(NamespaceDecl, NamespaceDecl);
ast_node!(EnumDecl, EnumDecl);
ast_node!(EnumMember, EnumMember);
ast_node!(TypeDecl, TypeDecl);
ast_node!(MethodDecl, MethodDecl);
ast_node!(ConstructorDecl, ConstructorDecl);
ast_node!(FieldDecl, FieldDecl);
ast_node!(PropertyDecl, PropertyDecl);
ast_node!(ParamList, ParamList);
ast_node!(Param, Param);
ast_node!(TypeRef, TypeRef);
ast_node!(VariableDeclarator, VariableDeclarator);
ast_node!(ExprBody, ExprBody);

// Statements
ast_node!(Block, Block);
ast_node!(LocalDecl, LocalDecl);
ast_node!(ExprStmt, ExprStmt);
ast_node!(ReturnStmt, ReturnStmt);
ast_node!(ThrowStmt, ThrowStmt);
ast_node!(IfStmt, IfStmt);
ast_node!(WhileStmt, WhileStmt);
ast_node!(DoStmt, DoStmt);
ast_node!(ForStmt, ForStmt);
ast_node!(ForeachStmt, ForeachStmt);
ast_node!(BreakStmt, BreakStmt);
ast_node!(ContinueStmt, ContinueStmt);
ast_node!(GotoStmt, GotoStmt);
ast_node!(EmptyStmt, EmptyStmt);
ast_node!(TryStmt, TryStmt);
ast_node!(CatchClause, CatchClause);
ast_node!(UsingStmt, UsingStmt);

// Switches
ast_node!(SwitchStmt, SwitchStmt);
ast_node!(SwitchSection, SwitchSection);
ast_node!(CaseLabel, CaseLabel);
ast_node!(DefaultLabel, DefaultLabel);
ast_node!(SwitchExpr, SwitchExpr);
ast_node!(SwitchArm, SwitchArm);
ast_node!(WhenClause, WhenClause);

// Patterns
ast_node!(DiscardPattern, DiscardPattern);
ast_node!(ConstantPattern, ConstantPattern);
ast_node!(DeclarationPattern, DeclarationPattern);
ast_node!(VarPattern, VarPattern);
ast_node!(RelationalPattern, RelationalPattern);
ast_node!(BinaryPattern, BinaryPattern);
ast_node!(NotPattern, NotPattern);
ast_node!(ParenPattern, ParenPattern);
ast_node!(PropertyPattern, PropertyPattern);

// Expressions
ast_node!(NameRef, NameRef);
ast_node!(MemberAccess, MemberAccess);
ast_node!(Invocation, Invocation);
ast_node!(ArgList, ArgList);
ast_node!(Arg, Arg);
ast_node!(ElementAccess, ElementAccess);
ast_node!(Literal, Literal);
ast_node!(ParenExpr, ParenExpr);
ast_node!(TupleExpr, TupleExpr);
ast_node!(CastExpr, CastExpr);
ast_node!(ObjectCreation, ObjectCreation);
ast_node!(ThrowExpr, ThrowExpr);
ast_node!(DefaultExpr, DefaultExpr);
ast_node!(BinaryExpr, BinaryExpr);
ast_node!(PrefixExpr, PrefixExpr);
ast_node!(PostfixExpr, PostfixExpr);
ast_node!(AssignExpr, AssignExpr);
ast_node!(ConditionalExpr, ConditionalExpr);
ast_node!(IsExpr, IsExpr);
ast_node!(AsExpr, AsExpr);
ast_node!(ThisExpr, ThisExpr);
ast_node!(BaseExpr, BaseExpr);
ast_node!(LambdaExpr, LambdaExpr);

ast_enum! {
    /// Any expression node.
    Expr {
        NameRef,
        MemberAccess,
        Invocation,
        ElementAccess,
        Literal,
        ParenExpr,
        TupleExpr,
        CastExpr,
        ObjectCreation,
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
        SwitchExpr,
    }
}

ast_enum! {
    /// Any statement node. Local functions appear as `MethodDecl`.
    Stmt {
        Block,
        LocalDecl,
        ExprStmt,
        ReturnStmt,
        ThrowStmt,
        IfStmt,
        WhileStmt,
        DoStmt,
        ForStmt,
        ForeachStmt,
        BreakStmt,
        ContinueStmt,
        GotoStmt,
        EmptyStmt,
        TryStmt,
        UsingStmt,
        SwitchStmt,
        MethodDecl,
    }
}

ast_enum! {
    Pattern {
        DiscardPattern,
        ConstantPattern,
        DeclarationPattern,
        VarPattern,
        RelationalPattern,
        BinaryPattern,
        NotPattern,
        ParenPattern,
        PropertyPattern,
    }
}

ast_enum! {
    /// A label of a statement-form switch section.
    Label {
        CaseLabel,
        DefaultLabel,
    }
}

ast_enum! {
    /// Declarations allowed in a namespace or type body.
    Member {
        UsingDirective,
        NamespaceDecl,
        EnumDecl,
        TypeDecl,
        MethodDecl,
        ConstructorDecl,
        FieldDecl,
        PropertyDecl,
    }
}

/// Keyword of a `TypeDecl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeDeclKind {
    Class,
    Struct,
    Interface,
    Record,
}

impl CompilationUnit {
    pub fn members(&self) -> impl Iterator<Item = Member> + '_ {
        self.0.children().filter_map(Member::cast)
    }
}

impl UsingDirective {
    pub fn is_static(&self) -> bool {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .any(|t| t.kind() == SyntaxKind::Modifier && t.text() == "static")
    }

    /// `using Alias = Target;`
    pub fn alias(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Equals)?;
        token(&self.0, SyntaxKind::Ident)
    }

    pub fn target(&self) -> Option<TypeRef> {
        child(&self.0, TypeRef::cast)
    }
}

impl NamespaceDecl {
    /// `A.B.C` as its identifier tokens.
    pub fn name_segments(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        tokens(&self.0, SyntaxKind::Ident)
    }

    pub fn name(&self) -> String {
        self.name_segments()
            .map(|t| t.text().to_string())
            .collect::<Vec<_>>()
            .join(".")
    }

    pub fn members(&self) -> impl Iterator<Item = Member> + '_ {
        self.0.children().filter_map(Member::cast)
    }
}

impl EnumDecl {
    pub fn name(&self) -> Option<SyntaxToken> {
        name_after_keyword(&self.0)
    }

    pub fn members(&self) -> impl Iterator<Item = EnumMember> + '_ {
        self.0.children().filter_map(EnumMember::cast)
    }
}

impl EnumMember {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Ident)
    }

    pub fn value(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl TypeDecl {
    pub fn kind(&self) -> Option<TypeDeclKind> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find_map(|t| match t.kind() {
                SyntaxKind::KwClass => Some(TypeDeclKind::Class),
                SyntaxKind::KwStruct => Some(TypeDeclKind::Struct),
                SyntaxKind::KwInterface => Some(TypeDeclKind::Interface),
                SyntaxKind::Ident if t.text() == "record" => Some(TypeDeclKind::Record),
                _ => None,
            })
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        name_after_keyword(&self.0)
    }

    /// Primary constructor parameters of a record.
    pub fn param_list(&self) -> Option<ParamList> {
        child(&self.0, ParamList::cast)
    }

    pub fn members(&self) -> impl Iterator<Item = Member> + '_ {
        self.0.children().filter_map(Member::cast)
    }
}

impl MethodDecl {
    pub fn return_type(&self) -> Option<TypeRef> {
        child(&self.0, TypeRef::cast)
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| t.kind() == SyntaxKind::Ident)
            .filter(|t| !matches!(t.text(), "async" | "partial"))
            .last()
    }

    pub fn param_list(&self) -> Option<ParamList> {
        child(&self.0, ParamList::cast)
    }

    pub fn body(&self) -> Option<Block> {
        child(&self.0, Block::cast)
    }

    pub fn expr_body(&self) -> Option<ExprBody> {
        child(&self.0, ExprBody::cast)
    }

    pub fn is_static(&self) -> bool {
        tokens(&self.0, SyntaxKind::Modifier).any(|t| t.text() == "static")
    }
}

impl ConstructorDecl {
    pub fn param_list(&self) -> Option<ParamList> {
        child(&self.0, ParamList::cast)
    }

    pub fn body(&self) -> Option<Block> {
        child(&self.0, Block::cast)
    }
}

impl FieldDecl {
    pub fn ty(&self) -> Option<TypeRef> {
        child(&self.0, TypeRef::cast)
    }

    pub fn declarators(&self) -> impl Iterator<Item = VariableDeclarator> + '_ {
        self.0.children().filter_map(VariableDeclarator::cast)
    }

    pub fn is_const(&self) -> bool {
        tokens(&self.0, SyntaxKind::Modifier).any(|t| t.text() == "const")
    }
}

impl PropertyDecl {
    pub fn ty(&self) -> Option<TypeRef> {
        child(&self.0, TypeRef::cast)
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| t.kind() == SyntaxKind::Ident)
            .last()
    }
}

impl ParamList {
    pub fn params(&self) -> impl Iterator<Item = Param> + '_ {
        self.0.children().filter_map(Param::cast)
    }
}

impl Param {
    /// `None` for implicitly typed lambda parameters.
    pub fn ty(&self) -> Option<TypeRef> {
        child(&self.0, TypeRef::cast)
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Ident)
    }
}

impl TypeRef {
    /// Identifier segments of a named type, outer to inner (`A.B.C`), excluding type arguments.
    pub fn segments(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        tokens(&self.0, SyntaxKind::Ident)
    }

    pub fn last_segment(&self) -> Option<SyntaxToken> {
        self.segments().last()
    }

    /// `int`, `string`, ... for predefined types.
    pub fn predefined(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::PredefinedType)
    }

    pub fn is_nullable(&self) -> bool {
        token(&self.0, SyntaxKind::Question).is_some()
    }

    pub fn is_array(&self) -> bool {
        token(&self.0, SyntaxKind::BracketOpen).is_some()
    }

    pub fn is_generic(&self) -> bool {
        self.0.children().any(|n| n.kind() == SyntaxKind::TypeArgList)
    }

    /// `var` written in type position.
    pub fn is_var(&self) -> bool {
        self.predefined().is_none()
            && !self.is_generic()
            && !self.is_array()
            && self.segments().map(|t| t.text() == "var").eq([true])
    }
}

impl VariableDeclarator {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Ident)
    }

    pub fn initializer(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl ExprBody {
    pub fn expr(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl Block {
    pub fn statements(&self) -> impl Iterator<Item = Stmt> + '_ {
        self.0.children().filter_map(Stmt::cast)
    }
}

impl LocalDecl {
    pub fn ty(&self) -> Option<TypeRef> {
        child(&self.0, TypeRef::cast)
    }

    pub fn declarators(&self) -> impl Iterator<Item = VariableDeclarator> + '_ {
        self.0.children().filter_map(VariableDeclarator::cast)
    }
}

impl ReturnStmt {
    pub fn expr(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl ThrowStmt {
    pub fn expr(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl ForeachStmt {
    pub fn ty(&self) -> Option<TypeRef> {
        child(&self.0, TypeRef::cast)
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .take_while(|t| t.kind() != SyntaxKind::KwIn)
            .filter(|t| t.kind() == SyntaxKind::Ident)
            .last()
    }

    pub fn collection(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl CatchClause {
    pub fn ty(&self) -> Option<TypeRef> {
        child(&self.0, TypeRef::cast)
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Ident)
    }

    pub fn body(&self) -> Option<Block> {
        child(&self.0, Block::cast)
    }
}

impl SwitchStmt {
    pub fn switch_token(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::KwSwitch)
    }

    /// The governing expression inside `( )`, or the tuple that replaces them.
    pub fn discriminant(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    pub fn sections(&self) -> impl Iterator<Item = SwitchSection> + '_ {
        self.0.children().filter_map(SwitchSection::cast)
    }

    pub fn open_brace(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::BraceOpen)
    }

    pub fn close_brace(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::BraceClose)
    }
}

impl SwitchSection {
    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.0.children().filter_map(Label::cast)
    }

    pub fn statements(&self) -> impl Iterator<Item = Stmt> + '_ {
        self.0.children().filter_map(Stmt::cast)
    }

    /// Whether any of this section's own labels is `default:`.
    pub fn is_default(&self) -> bool {
        self.labels().any(|l| matches!(l, Label::DefaultLabel(_)))
    }
}

impl CaseLabel {
    pub fn pattern(&self) -> Option<Pattern> {
        child(&self.0, Pattern::cast)
    }

    pub fn when_clause(&self) -> Option<WhenClause> {
        child(&self.0, WhenClause::cast)
    }
}

impl WhenClause {
    pub fn condition(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl SwitchExpr {
    /// The operand the `switch` applies to.
    pub fn discriminant(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    pub fn arms(&self) -> impl Iterator<Item = SwitchArm> + '_ {
        self.0.children().filter_map(SwitchArm::cast)
    }

    pub fn open_brace(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::BraceOpen)
    }

    pub fn close_brace(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::BraceClose)
    }
}

impl SwitchArm {
    pub fn pattern(&self) -> Option<Pattern> {
        child(&self.0, Pattern::cast)
    }

    pub fn when_clause(&self) -> Option<WhenClause> {
        child(&self.0, WhenClause::cast)
    }

    /// Result expression after `=>`.
    pub fn body(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    pub fn is_discard(&self) -> bool {
        matches!(self.pattern(), Some(Pattern::DiscardPattern(_)))
    }
}

impl ConstantPattern {
    pub fn expr(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl DeclarationPattern {
    pub fn ty(&self) -> Option<TypeRef> {
        child(&self.0, TypeRef::cast)
    }

    pub fn designation(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Ident)
    }
}

impl VarPattern {
    pub fn designation(&self) -> Option<SyntaxToken> {
        tokens(&self.0, SyntaxKind::Ident).nth(1)
    }
}

impl NameRef {
    /// Identifier or predefined-type keyword.
    pub fn token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| matches!(t.kind(), SyntaxKind::Ident | SyntaxKind::PredefinedType))
    }

    pub fn text(&self) -> Option<String> {
        self.token().map(|t| t.text().trim_start_matches('@').to_string())
    }
}

impl MemberAccess {
    pub fn receiver(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Ident)
    }

    pub fn is_conditional(&self) -> bool {
        token(&self.0, SyntaxKind::QuestionDot).is_some()
    }
}

impl Invocation {
    pub fn callee(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    pub fn arg_list(&self) -> Option<ArgList> {
        child(&self.0, ArgList::cast)
    }
}

impl ArgList {
    pub fn args(&self) -> impl Iterator<Item = Arg> + '_ {
        self.0.children().filter_map(Arg::cast)
    }
}

impl Arg {
    pub fn expr(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    /// `out Type name` declaration arguments.
    pub fn declared(&self) -> Option<(TypeRef, SyntaxToken)> {
        let ty = child(&self.0, TypeRef::cast)?;
        let name = self
            .0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| t.kind() == SyntaxKind::Ident)
            .last()?;
        Some((ty, name))
    }
}

impl ElementAccess {
    pub fn receiver(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl Literal {
    pub fn token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| !t.kind().is_trivia())
    }
}

impl ParenExpr {
    pub fn expr(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl TupleExpr {
    pub fn elements(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

impl CastExpr {
    pub fn ty(&self) -> Option<TypeRef> {
        child(&self.0, TypeRef::cast)
    }

    pub fn expr(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl ObjectCreation {
    /// `None` for target-typed `new()` and implicit arrays.
    pub fn ty(&self) -> Option<TypeRef> {
        child(&self.0, TypeRef::cast)
    }

    pub fn is_array(&self) -> bool {
        self.0
            .children()
            .filter_map(ArgList::cast)
            .any(|a| token(a.as_cst(), SyntaxKind::BracketOpen).is_some())
    }
}

impl ThrowExpr {
    pub fn expr(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl DefaultExpr {
    pub fn ty(&self) -> Option<TypeRef> {
        child(&self.0, TypeRef::cast)
    }
}

impl BinaryExpr {
    pub fn lhs(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    pub fn rhs(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }

    /// Operator kind; `>>` is reported as its first `Gt`.
    pub fn op(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| !t.kind().is_trivia())
    }
}

impl PrefixExpr {
    pub fn op(&self) -> Option<SyntaxToken> {
        self.0.first_token()
    }

    pub fn expr(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl PostfixExpr {
    pub fn expr(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl AssignExpr {
    pub fn target(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    pub fn value(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }
}

impl ConditionalExpr {
    pub fn condition(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    pub fn then_branch(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }

    pub fn else_branch(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(2)
    }
}

impl AsExpr {
    pub fn expr(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    pub fn ty(&self) -> Option<TypeRef> {
        child(&self.0, TypeRef::cast)
    }
}

impl LambdaExpr {
    pub fn params(&self) -> Vec<Param> {
        match child(&self.0, ParamList::cast) {
            Some(list) => list.params().collect(),
            None => self.0.children().filter_map(Param::cast).collect(),
        }
    }
}

impl Expr {
    /// Skips any number of wrapping parentheses.
    pub fn unparenthesized(self) -> Expr {
        let mut expr = self;
        while let Expr::ParenExpr(paren) = &expr {
            match paren.expr() {
                Some(inner) => expr = inner,
                None => break,
            }
        }
        expr
    }
}
