//! Declaration collection and body walking.

use std::collections::HashSet;

use indexmap::IndexMap;
use switchcheck_core::{MemberKind, SymbolId, SymbolKind, TypeId, TypeKind};

use crate::parser::ast::{
    Arg, BinaryExpr, CatchClause, DeclarationPattern, EnumDecl, ForeachStmt, Invocation,
    Literal, LocalDecl, Member, MemberAccess, MethodDecl, NameRef, NamespaceDecl,
    ObjectCreation, Param, PrefixExpr, SwitchExpr, TypeDecl, TypeDeclKind, TypeRef,
    UsingDirective, VarPattern,
};
use crate::parser::{SyntaxKind, SyntaxNode, SyntaxToken};

use super::model::{Resolution, SemanticModel, Ty, node_key};

/// Where a declaration sits: its namespace and innermost enclosing type.
#[derive(Debug, Clone, Default)]
struct Env {
    namespace: Option<String>,
    ty: Option<TypeId>,
}

/// A type whose members and bodies still need binding.
#[derive(Debug, Clone)]
struct Pending {
    id: TypeId,
    node: SyntaxNode,
    env: Env,
}

pub(super) struct Binder {
    model: SemanticModel,
    pending: Vec<Pending>,
    usings: Vec<String>,
    aliases: IndexMap<String, Vec<String>>,
    env: Env,
    scopes: Vec<Vec<(String, SymbolId)>>,
    local_functions: HashSet<SymbolId>,
}

fn ident(token: &SyntaxToken) -> &str {
    token.text().trim_start_matches('@')
}

impl Binder {
    pub(super) fn new() -> Self {
        Self {
            model: SemanticModel::default(),
            pending: Vec::new(),
            usings: Vec::new(),
            aliases: IndexMap::new(),
            env: Env::default(),
            scopes: Vec::new(),
            local_functions: HashSet::new(),
        }
    }

    pub(super) fn run(mut self, root: &SyntaxNode) -> SemanticModel {
        if root.kind() != SyntaxKind::CompilationUnit {
            return self.model;
        }
        self.collect_types(root, &Env::default());
        self.declare_members();
        self.bind_bodies();

        tracing::debug!(
            types = self.model.decls.type_count(),
            symbols = self.model.decls.symbol_count(),
            expressions = self.model.expr_types.len(),
            "bound compilation unit"
        );
        self.model
    }

    // ========== Pass 1: types ==========

    fn collect_types(&mut self, container: &SyntaxNode, env: &Env) {
        for child in container.children() {
            match child.kind() {
                SyntaxKind::NamespaceDecl => {
                    let Some(decl) = NamespaceDecl::cast(child.clone()) else {
                        continue;
                    };
                    let name = decl
                        .name_segments()
                        .map(|t| ident(&t).to_owned())
                        .collect::<Vec<_>>()
                        .join(".");
                    let namespace = match (&env.namespace, name.is_empty()) {
                        (_, true) => env.namespace.clone(),
                        (Some(outer), false) => Some(format!("{outer}.{name}")),
                        (None, false) => Some(name),
                    };
                    let inner = Env {
                        namespace,
                        ty: None,
                    };
                    self.collect_types(&child, &inner);
                }
                SyntaxKind::UsingDirective => {
                    if let Some(using) = UsingDirective::cast(child) {
                        self.collect_using(&using);
                    }
                }
                SyntaxKind::EnumDecl => self.collect_enum(&child, env),
                SyntaxKind::TypeDecl => {
                    let Some(decl) = TypeDecl::cast(child.clone()) else {
                        continue;
                    };
                    let Some(name) = decl.name() else { continue };
                    let kind = match decl.kind() {
                        Some(TypeDeclKind::Class) => TypeKind::Class,
                        Some(TypeDeclKind::Struct) => TypeKind::Struct,
                        Some(TypeDeclKind::Interface) => TypeKind::Interface,
                        Some(TypeDeclKind::Record) => TypeKind::Record,
                        None => TypeKind::Unknown,
                    };
                    let id = self.declare_type(ident(&name), kind, env);
                    let inner = Env {
                        namespace: env.namespace.clone(),
                        ty: Some(id),
                    };
                    self.pending.push(Pending {
                        id,
                        node: child.clone(),
                        env: inner.clone(),
                    });
                    self.collect_types(&child, &inner);
                }
                _ => {}
            }
        }
    }

    fn collect_enum(&mut self, node: &SyntaxNode, env: &Env) {
        let Some(decl) = EnumDecl::cast(node.clone()) else {
            return;
        };
        let Some(name) = decl.name() else { return };
        let id = self.declare_type(ident(&name), TypeKind::Enum, env);
        for member in decl.members() {
            let Some(name) = member.name() else { continue };
            let symbol = self
                .model
                .decls
                .declare_member(id, ident(&name), MemberKind::EnumMember);
            self.model.symbol_types.insert(symbol, Ty::Decl(id));
        }
        self.pending.push(Pending {
            id,
            node: node.clone(),
            env: Env {
                namespace: env.namespace.clone(),
                ty: Some(id),
            },
        });
    }

    /// Partial declarations of the same class share one `TypeId`.
    fn declare_type(&mut self, name: &str, kind: TypeKind, env: &Env) -> TypeId {
        let decls = &self.model.decls;
        let existing = decls.types_named(name).iter().copied().find(|&id| {
            let decl = decls.type_decl(id);
            kind != TypeKind::Enum
                && decl.kind == kind
                && decl.parent == env.ty
                && decl.namespace.map(|ns| decls.name(ns)) == env.namespace.as_deref()
        });
        existing.unwrap_or_else(|| {
            self.model
                .decls
                .declare_type(name, kind, env.ty, env.namespace.as_deref())
        })
    }

    /// `using static` imports are not modeled.
    fn collect_using(&mut self, using: &UsingDirective) {
        if using.is_static() {
            return;
        }
        let Some(target) = using.target() else { return };
        let segments: Vec<String> = target.segments().map(|t| ident(&t).to_owned()).collect();
        match using.alias() {
            Some(alias) => {
                self.aliases.insert(ident(&alias).to_owned(), segments);
            }
            None => self.usings.push(segments.join(".")),
        }
    }

    // ========== Pass 2: members ==========

    fn declare_members(&mut self) {
        for index in 0..self.pending.len() {
            let Pending { id, node, env } = self.pending[index].clone();
            let Some(decl) = TypeDecl::cast(node) else {
                continue;
            };
            self.env = env;

            if let Some(params) = decl.param_list() {
                for param in params.params() {
                    let ty = self.param_type(&param);
                    if let Some(name) = param.name() {
                        self.declare_member(id, &name, MemberKind::Property, ty);
                    }
                }
            }

            for member in decl.members() {
                match member {
                    Member::FieldDecl(field) => {
                        let ty = self.declared_type(field.as_cst());
                        for declarator in field.declarators() {
                            if let Some(name) = declarator.name() {
                                self.declare_member(id, &name, MemberKind::Field, ty.clone());
                            }
                        }
                    }
                    Member::PropertyDecl(property) => {
                        let ty = self.declared_type(property.as_cst());
                        if let Some(name) = property.name() {
                            self.declare_member(id, &name, MemberKind::Property, ty);
                        }
                    }
                    Member::MethodDecl(method) => {
                        let ty = method
                            .return_type()
                            .map(|t| self.resolve_type_ref(&t))
                            .unwrap_or_default();
                        if let Some(name) = method.name() {
                            self.declare_member(id, &name, MemberKind::Method, ty);
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    fn declare_member(&mut self, owner: TypeId, name: &SyntaxToken, kind: MemberKind, ty: Ty) {
        let symbol = self.model.decls.declare_member(owner, ident(name), kind);
        self.model.symbol_types.insert(symbol, ty);
    }

    fn declared_type(&mut self, node: &SyntaxNode) -> Ty {
        match node.children().find_map(TypeRef::cast) {
            Some(ty) => self.resolve_type_ref(&ty),
            None => Ty::Unknown,
        }
    }

    fn param_type(&mut self, param: &Param) -> Ty {
        match param.ty() {
            Some(ty) if !self.is_implicit(&ty) => self.resolve_type_ref(&ty),
            _ => Ty::Unknown,
        }
    }

    // ========== Pass 3: bodies ==========

    fn bind_bodies(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        for Pending { node, env, .. } in &pending {
            self.env = env.clone();
            for child in node.children() {
                match child.kind() {
                    SyntaxKind::EnumMember => self.walk_children(&child),
                    SyntaxKind::ParamList => {}
                    _ => self.walk(&child),
                }
            }
        }
        self.pending = pending;
    }

    fn walk_children(&mut self, node: &SyntaxNode) {
        for child in node.children() {
            self.walk(&child);
        }
    }

    fn walk(&mut self, node: &SyntaxNode) {
        match node.kind() {
            SyntaxKind::TypeRef
            | SyntaxKind::TypeArgList
            | SyntaxKind::TypeDecl
            | SyntaxKind::EnumDecl
            | SyntaxKind::AttributeList
            | SyntaxKind::BaseList
            | SyntaxKind::TypeParamList
            | SyntaxKind::WhereClause => {}
            SyntaxKind::Block => self.scoped(|this| {
                this.declare_local_functions(node);
                this.walk_children(node);
            }),
            SyntaxKind::MethodDecl
            | SyntaxKind::ConstructorDecl
            | SyntaxKind::PropertyDecl
            | SyntaxKind::ForStmt
            | SyntaxKind::SwitchSection
            | SyntaxKind::SwitchArm => self.scoped(|this| this.walk_children(node)),
            SyntaxKind::LocalDecl => self.bind_local_decl(node),
            SyntaxKind::ForeachStmt => self.bind_foreach(node),
            SyntaxKind::CatchClause => self.bind_catch(node),
            SyntaxKind::Param => {
                if let Some(param) = Param::cast(node.clone()) {
                    let ty = self.param_type(&param);
                    if let Some(name) = param.name() {
                        self.declare_local(&name, ty, true);
                    }
                }
            }
            SyntaxKind::DeclarationPattern => {
                if let Some(pattern) = DeclarationPattern::cast(node.clone()) {
                    let ty = pattern
                        .ty()
                        .map(|t| self.resolve_type_ref(&t))
                        .unwrap_or_default();
                    if let Some(name) = pattern.designation() {
                        self.declare_local(&name, ty, false);
                    }
                }
            }
            SyntaxKind::VarPattern => {
                if let Some(name) = VarPattern::cast(node.clone()).and_then(|p| p.designation()) {
                    self.declare_local(&name, Ty::Unknown, false);
                }
            }
            SyntaxKind::Arg => self.bind_arg(node),
            kind if kind.is_expr() => {
                self.expr(node);
            }
            _ => self.walk_children(node),
        }
    }

    fn scoped(&mut self, f: impl FnOnce(&mut Self)) {
        self.scopes.push(Vec::new());
        f(self);
        self.scopes.pop();
    }

    fn declare_local(&mut self, name: &SyntaxToken, ty: Ty, is_parameter: bool) -> SymbolId {
        let text = ident(name);
        let symbol = self.model.decls.declare_variable(text, is_parameter);
        self.model.symbol_types.insert(symbol, ty);
        if let Some(scope) = self.scopes.last_mut() {
            scope.push((text.to_owned(), symbol));
        }
        symbol
    }

    /// Local functions are visible in their whole block.
    fn declare_local_functions(&mut self, block: &SyntaxNode) {
        for method in block.children().filter_map(MethodDecl::cast) {
            let Some(name) = method.name() else { continue };
            let ty = method
                .return_type()
                .map(|t| self.resolve_type_ref(&t))
                .unwrap_or_default();
            let symbol = self.declare_local(&name, ty, false);
            self.local_functions.insert(symbol);
        }
    }

    /// `var` is only implicit when no type named `var` is in scope.
    fn is_implicit(&self, ty: &TypeRef) -> bool {
        ty.is_var() && self.lookup_type("var").is_none()
    }

    /// A declarator is visible after its own initializer.
    fn bind_local_decl(&mut self, node: &SyntaxNode) {
        let Some(decl) = LocalDecl::cast(node.clone()) else {
            return;
        };
        let declared = match decl.ty() {
            Some(ty) if !self.is_implicit(&ty) => Some(self.resolve_type_ref(&ty)),
            _ => None,
        };
        for declarator in decl.declarators() {
            let mut initializer = Ty::Unknown;
            for child in declarator.as_cst().children() {
                if child.kind().is_expr() {
                    initializer = self.expr(&child);
                } else {
                    self.walk(&child);
                }
            }
            let ty = declared.clone().unwrap_or(initializer);
            if let Some(name) = declarator.name() {
                self.declare_local(&name, ty, false);
            }
        }
    }

    fn bind_foreach(&mut self, node: &SyntaxNode) {
        let Some(stmt) = ForeachStmt::cast(node.clone()) else {
            return;
        };
        self.scoped(|this| {
            let collection = stmt
                .collection()
                .map(|expr| this.expr(expr.as_cst()))
                .unwrap_or_default();
            let ty = match stmt.ty() {
                Some(ty) if !this.is_implicit(&ty) => this.resolve_type_ref(&ty),
                _ => collection.element(),
            };
            if let Some(name) = stmt.name() {
                this.declare_local(&name, ty, false);
            }
            for body in node.children().filter(|n| n.kind().is_stmt()) {
                this.walk(&body);
            }
        });
    }

    fn bind_catch(&mut self, node: &SyntaxNode) {
        let Some(clause) = CatchClause::cast(node.clone()) else {
            return;
        };
        self.scoped(|this| {
            if let (Some(ty), Some(name)) = (clause.ty(), clause.name()) {
                let ty = this.resolve_type_ref(&ty);
                this.declare_local(&name, ty, false);
            }
            this.walk_children(node);
        });
    }

    /// `out Status parsed` declares into the enclosing scope.
    fn bind_arg(&mut self, node: &SyntaxNode) {
        let Some(arg) = Arg::cast(node.clone()) else {
            return;
        };
        match arg.declared() {
            Some((ty, name)) => {
                let ty = if self.is_implicit(&ty) {
                    Ty::Unknown
                } else {
                    self.resolve_type_ref(&ty)
                };
                self.declare_local(&name, ty, false);
            }
            None => self.walk_children(node),
        }
    }

    // ========== Expressions ==========

    fn expr(&mut self, node: &SyntaxNode) -> Ty {
        let ty = match node.kind() {
            SyntaxKind::NameRef => self.bind_name_ref(node),
            SyntaxKind::MemberAccess => self.bind_member_access(node),
            SyntaxKind::LambdaExpr => {
                self.scoped(|this| this.walk_children(node));
                Ty::Unknown
            }
            _ => {
                self.walk_children(node);
                self.compute(node)
            }
        };
        self.model.expr_types.insert(node_key(node), ty.clone());
        ty
    }

    fn type_of(&self, node: &SyntaxNode) -> Ty {
        self.model
            .expr_types
            .get(&node_key(node))
            .cloned()
            .unwrap_or_default()
    }

    fn operand(&self, node: &SyntaxNode, index: usize) -> Ty {
        node.children()
            .filter(|n| n.kind().is_expr())
            .nth(index)
            .map(|n| self.type_of(&n))
            .unwrap_or_default()
    }

    fn primitive(&mut self, keyword: &str) -> Ty {
        Ty::Decl(self.model.decls.primitive(keyword))
    }

    fn record(&mut self, node: &SyntaxNode, resolution: Option<Resolution>) -> Ty {
        let Some(resolution) = resolution else {
            return Ty::Unknown;
        };
        let ty = match &resolution {
            Resolution::Symbol(symbol) if self.is_callable(*symbol) => Ty::Unknown,
            Resolution::Symbol(symbol) => self
                .model
                .symbol_types
                .get(symbol)
                .cloned()
                .unwrap_or_default(),
            Resolution::Value(ty) => ty.clone(),
            Resolution::Type(_) | Resolution::Namespace(_) => Ty::Unknown,
        };
        self.model.resolutions.insert(node_key(node), resolution);
        ty
    }

    fn is_callable(&self, symbol: SymbolId) -> bool {
        matches!(
            self.model.decls.symbol(symbol).kind,
            SymbolKind::Method { .. }
        ) || self.local_functions.contains(&symbol)
    }

    fn bind_name_ref(&mut self, node: &SyntaxNode) -> Ty {
        let Some(token) = NameRef::cast(node.clone()).and_then(|n| n.token()) else {
            return Ty::Unknown;
        };
        let resolution = if token.kind() == SyntaxKind::PredefinedType {
            Some(Resolution::Type(self.primitive(token.text())))
        } else {
            self.resolve_name(ident(&token))
        };
        self.record(node, resolution)
    }

    fn bind_member_access(&mut self, node: &SyntaxNode) -> Ty {
        let Some(access) = MemberAccess::cast(node.clone()) else {
            return Ty::Unknown;
        };
        let receiver = access.receiver();
        let receiver_ty = receiver
            .as_ref()
            .map(|r| self.expr(r.as_cst()))
            .unwrap_or_default();
        let Some(name) = access.name() else {
            return Ty::Unknown;
        };
        let receiver_resolution = receiver
            .as_ref()
            .and_then(|r| self.model.resolution(r.as_cst()).cloned());
        let target = match receiver_resolution {
            Some(Resolution::Type(ty)) => self.member_of(&ty, ident(&name)),
            Some(Resolution::Namespace(ns)) => self.namespace_member(&ns, ident(&name)),
            _ => self.member_of(&receiver_ty, ident(&name)),
        };
        self.record(node, target)
    }

    /// Instance and static members are not told apart, so `Color.Red`
    /// works whether `Color` names the type or a property of that type.
    fn member_of(&mut self, ty: &Ty, name: &str) -> Option<Resolution> {
        match ty {
            Ty::Decl(id) => {
                if let Some(symbol) = self.model.decls.member_named(*id, name) {
                    return Some(Resolution::Symbol(symbol));
                }
                self.model
                    .decls
                    .nested_type(*id, name)
                    .map(|nested| Resolution::Type(Ty::Decl(nested)))
            }
            Ty::Nullable(inner) => match name {
                "Value" => Some(Resolution::Value((**inner).clone())),
                "HasValue" => Some(Resolution::Value(self.primitive("bool"))),
                _ => None,
            },
            _ => None,
        }
    }

    fn namespace_member(&self, namespace: &str, name: &str) -> Option<Resolution> {
        let decls = &self.model.decls;
        if let Some(id) = decls.type_in_namespace(namespace, name) {
            return Some(Resolution::Type(Ty::Decl(id)));
        }
        let full = format!("{namespace}.{name}");
        decls
            .is_namespace(&full)
            .then_some(Resolution::Namespace(full))
    }

    fn compute(&mut self, node: &SyntaxNode) -> Ty {
        match node.kind() {
            SyntaxKind::ParenExpr | SyntaxKind::AssignExpr => self.operand(node, 0),
            SyntaxKind::CastExpr | SyntaxKind::AsExpr | SyntaxKind::DefaultExpr => {
                self.declared_type(node)
            }
            SyntaxKind::ObjectCreation => {
                let Some(creation) = ObjectCreation::cast(node.clone()) else {
                    return Ty::Unknown;
                };
                let Some(ty) = creation.ty() else {
                    return Ty::Unknown;
                };
                let ty = self.resolve_type_ref(&ty);
                if creation.is_array() {
                    Ty::Array(Box::new(ty))
                } else {
                    ty
                }
            }
            SyntaxKind::Invocation => {
                let callee = Invocation::cast(node.clone()).and_then(|i| i.callee());
                let resolution = callee.and_then(|c| self.model.resolution(c.as_cst()).cloned());
                match resolution {
                    Some(Resolution::Symbol(symbol)) if self.is_callable(symbol) => self
                        .model
                        .symbol_types
                        .get(&symbol)
                        .cloned()
                        .unwrap_or_default(),
                    _ => Ty::Unknown,
                }
            }
            SyntaxKind::ElementAccess => self.operand(node, 0).element(),
            SyntaxKind::ConditionalExpr => {
                let then = self.operand(node, 1);
                if then.is_unknown() {
                    self.operand(node, 2)
                } else {
                    then
                }
            }
            SyntaxKind::BinaryExpr => self.binary_type(node),
            SyntaxKind::IsExpr => self.primitive("bool"),
            SyntaxKind::PrefixExpr => {
                let op = PrefixExpr::cast(node.clone()).and_then(|p| p.op());
                match op.map(|t| t.kind()) {
                    Some(SyntaxKind::Bang) => self.primitive("bool"),
                    Some(SyntaxKind::Ident) => Ty::Unknown,
                    _ => self.operand(node, 0),
                }
            }
            SyntaxKind::PostfixExpr => {
                let operand = self.operand(node, 0);
                match node.last_token().map(|t| t.kind()) {
                    Some(SyntaxKind::Bang) => operand.strip_nullable(),
                    _ => operand,
                }
            }
            SyntaxKind::Literal => self.literal_type(node),
            SyntaxKind::ThisExpr => self.env.ty.map(Ty::Decl).unwrap_or_default(),
            SyntaxKind::SwitchExpr => SwitchExpr::cast(node.clone())
                .into_iter()
                .flat_map(|s| s.arms().collect::<Vec<_>>())
                .filter_map(|arm| arm.body())
                .map(|body| self.type_of(body.as_cst()))
                .find(|ty| !ty.is_unknown())
                .unwrap_or_default(),
            _ => Ty::Unknown,
        }
    }

    fn binary_type(&mut self, node: &SyntaxNode) -> Ty {
        let Some(op) = BinaryExpr::cast(node.clone()).and_then(|b| b.op()) else {
            return Ty::Unknown;
        };
        let lhs = self.operand(node, 0);
        match op.kind() {
            // `>>` arrives as two adjacent `Gt` tokens
            SyntaxKind::Gt
                if op
                    .next_token()
                    .is_some_and(|t| t.kind() == SyntaxKind::Gt) =>
            {
                lhs
            }
            SyntaxKind::EqEq
            | SyntaxKind::NotEq
            | SyntaxKind::Lt
            | SyntaxKind::Gt
            | SyntaxKind::LtEq
            | SyntaxKind::GtEq
            | SyntaxKind::AmpAmp
            | SyntaxKind::PipePipe => self.primitive("bool"),
            SyntaxKind::QuestionQuestion => {
                let lhs = lhs.strip_nullable();
                if lhs.is_unknown() {
                    self.operand(node, 1)
                } else {
                    lhs
                }
            }
            _ => lhs,
        }
    }

    fn literal_type(&mut self, node: &SyntaxNode) -> Ty {
        let Some(token) = Literal::cast(node.clone()).and_then(|l| l.token()) else {
            return Ty::Unknown;
        };
        let keyword = match token.kind() {
            SyntaxKind::String => "string",
            SyntaxKind::Char => "char",
            SyntaxKind::KwTrue | SyntaxKind::KwFalse => "bool",
            SyntaxKind::Number => number_keyword(token.text()),
            _ => return Ty::Unknown,
        };
        self.primitive(keyword)
    }

    // ========== Lookup ==========

    /// Innermost scope first, then members of the enclosing types, then types
    /// and namespaces.
    fn resolve_name(&self, name: &str) -> Option<Resolution> {
        let local = self
            .scopes
            .iter()
            .rev()
            .flat_map(|scope| scope.iter().rev())
            .find(|(n, _)| n == name);
        if let Some((_, symbol)) = local {
            return Some(Resolution::Symbol(*symbol));
        }

        let decls = &self.model.decls;
        let mut current = self.env.ty;
        while let Some(ty) = current {
            if let Some(symbol) = decls.member_named(ty, name) {
                return Some(Resolution::Symbol(symbol));
            }
            if let Some(nested) = decls.nested_type(ty, name) {
                return Some(Resolution::Type(Ty::Decl(nested)));
            }
            current = decls.type_decl(ty).parent;
        }

        if let Some(id) = self.lookup_type(name) {
            return Some(Resolution::Type(Ty::Decl(id)));
        }

        self.namespace_candidates(name)
            .into_iter()
            .find(|full| decls.is_namespace(full))
            .map(Resolution::Namespace)
    }

    /// Current namespace and its parents, innermost first.
    fn enclosing_namespaces(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut current = self.env.namespace.as_deref();
        while let Some(ns) = current {
            out.push(ns.to_owned());
            current = ns.rsplit_once('.').map(|(parent, _)| parent);
        }
        out
    }

    /// Absolute spellings of a possibly relative namespace name.
    fn namespace_candidates(&self, namespace: &str) -> Vec<String> {
        let mut out: Vec<String> = self
            .enclosing_namespaces()
            .into_iter()
            .map(|outer| format!("{outer}.{namespace}"))
            .collect();
        out.push(namespace.to_owned());
        out
    }

    /// Simple type name in type position.
    fn lookup_type(&self, name: &str) -> Option<TypeId> {
        let decls = &self.model.decls;

        let mut current = self.env.ty;
        while let Some(ty) = current {
            if let Some(nested) = decls.nested_type(ty, name) {
                return Some(nested);
            }
            current = decls.type_decl(ty).parent;
        }

        for namespace in self.enclosing_namespaces() {
            if let Some(id) = decls.type_in_namespace(&namespace, name) {
                return Some(id);
            }
        }

        if let Some(id) = self.global_type(name) {
            return Some(id);
        }

        if let Some(target) = self.aliases.get(name) {
            let segments: Vec<&str> = target.iter().map(String::as_str).collect();
            return match segments.as_slice() {
                [single] => self.global_type(single),
                _ => self.lookup_in_namespaces(&segments),
            };
        }

        self.usings
            .iter()
            .find_map(|using| decls.type_in_namespace(using, name))
    }

    fn global_type(&self, name: &str) -> Option<TypeId> {
        let decls = &self.model.decls;
        decls.types_named(name).iter().copied().find(|&id| {
            let decl = decls.type_decl(id);
            decl.parent.is_none() && decl.namespace.is_none()
        })
    }

    /// `A.B.C` written in type position or as a member-access chain.
    fn lookup_qualified(&self, segments: &[&str]) -> Option<TypeId> {
        let (first, rest) = segments.split_first()?;
        if let Some(id) = self.lookup_type(first)
            && let Some(found) = self.nested_path(id, rest)
        {
            return Some(found);
        }
        self.lookup_in_namespaces(segments)
    }

    fn lookup_in_namespaces(&self, segments: &[&str]) -> Option<TypeId> {
        for split in 1..segments.len() {
            let namespace = segments[..split].join(".");
            for full in self.namespace_candidates(&namespace) {
                let Some(id) = self.model.decls.type_in_namespace(&full, segments[split]) else {
                    continue;
                };
                if let Some(found) = self.nested_path(id, &segments[split + 1..]) {
                    return Some(found);
                }
            }
        }
        None
    }

    fn nested_path(&self, start: TypeId, rest: &[&str]) -> Option<TypeId> {
        rest.iter()
            .try_fold(start, |ty, name| self.model.decls.nested_type(ty, name))
    }

    pub(super) fn resolve_type_ref(&mut self, ty: &TypeRef) -> Ty {
        let base = if let Some(keyword) = ty.predefined() {
            self.primitive(keyword.text())
        } else {
            let segments: Vec<String> = ty.segments().map(|t| ident(&t).to_owned()).collect();
            let refs: Vec<&str> = segments.iter().map(String::as_str).collect();
            match self.lookup_qualified(&refs) {
                Some(id) => Ty::Decl(id),
                None => segments.last().cloned().map_or(Ty::Unknown, Ty::External),
            }
        };
        let base = if ty.is_nullable() {
            Ty::Nullable(Box::new(base))
        } else {
            base
        };
        if ty.is_array() {
            Ty::Array(Box::new(base))
        } else {
            base
        }
    }
}

fn number_keyword(text: &str) -> &'static str {
    let text = text.to_ascii_lowercase();
    if text.starts_with("0x") || text.starts_with("0b") {
        return "int";
    }
    if text.ends_with('m') {
        "decimal"
    } else if text.ends_with('f') {
        "float"
    } else if text.contains('.') || text.contains('e') || text.ends_with('d') {
        "double"
    } else if text.ends_with('l') {
        "long"
    } else {
        "int"
    }
}
