//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors named after the
//! grammar's fields. Cast is infallible for correct `SyntaxKind`; accessors return
//! `None` where recovery left a child missing.

use super::cst::token_sets::{ASSIGN_OPERATORS, PREFIX_OPERATORS};
use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};
use super::grammar::infix_binding_power;
use super::literal::{self, IntegerValue};

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
        }
    };
}

/// Sum type over node wrappers sharing the node's kind name.
macro_rules! ast_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant($variant),)*
        }

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                match node.kind() {
                    $(SyntaxKind::$variant => $variant::cast(node).map($name::$variant),)*
                    _ => None,
                }
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                match self {
                    $($name::$variant(n) => n.as_cst(),)*
                }
            }
        }
    };
}

ast_node!(Script, Script);
ast_node!(Block, Block);
ast_node!(EmptyStatement, EmptyStatement);
ast_node!(ExpressionStatement, ExpressionStatement);
ast_node!(IfStatement, IfStatement);
ast_node!(ElseStatement, ElseStatement);
ast_node!(WhileStatement, WhileStatement);
ast_node!(DoWhileStatement, DoWhileStatement);
ast_node!(SwitchStatement, SwitchStatement);
ast_node!(CaseStatement, CaseStatement);
ast_node!(DefaultStatement, DefaultStatement);
ast_node!(ForStatement, ForStatement);
ast_node!(ForeachStatement, ForeachStatement);
ast_node!(BreakStatement, BreakStatement);
ast_node!(ContinueStatement, ContinueStatement);
ast_node!(ReturnStatement, ReturnStatement);
ast_node!(YieldStatement, YieldStatement);
ast_node!(LocalDeclaration, LocalDeclaration);
ast_node!(LocalBinding, LocalBinding);
ast_node!(VarStatement, VarStatement);
ast_node!(FunctionDeclaration, FunctionDeclaration);
ast_node!(Parameters, Parameters);
ast_node!(Parameter, Parameter);
ast_node!(ClassDeclaration, ClassDeclaration);
ast_node!(MemberDeclaration, MemberDeclaration);
ast_node!(TryStatement, TryStatement);
ast_node!(CatchStatement, CatchStatement);
ast_node!(ThrowStatement, ThrowStatement);
ast_node!(ConstDeclaration, ConstDeclaration);
ast_node!(EnumDeclaration, EnumDeclaration);
ast_node!(EnumEntry, EnumEntry);
ast_node!(AttributeDeclaration, AttributeDeclaration);
ast_node!(Attribute, Attribute);
ast_node!(UnaryExpression, UnaryExpression);
ast_node!(BinaryExpression, BinaryExpression);
ast_node!(TernaryExpression, TernaryExpression);
ast_node!(AssignmentExpression, AssignmentExpression);
ast_node!(UpdateExpression, UpdateExpression);
ast_node!(CallExpression, CallExpression);
ast_node!(CallArgs, CallArgs);
ast_node!(IndexExpression, IndexExpression);
ast_node!(DerefExpression, DerefExpression);
ast_node!(LambdaExpression, LambdaExpression);
ast_node!(AnonymousFunction, AnonymousFunction);
ast_node!(ParenthesizedExpression, ParenthesizedExpression);
ast_node!(CloneExpression, CloneExpression);
ast_node!(DeleteExpression, DeleteExpression);
ast_node!(ResumeExpression, ResumeExpression);
ast_node!(Array, Array);
ast_node!(Table, Table);
ast_node!(TableSlot, TableSlot);
ast_node!(Identifier, Identifier);
ast_node!(GlobalVariable, GlobalVariable);
ast_node!(Integer, Integer);
ast_node!(Float, Float);
ast_node!(Str, Str);
ast_node!(VerbatimStr, VerbatimStr);
ast_node!(Char, Char);
ast_node!(Bool, Bool);
ast_node!(Null, Null);

ast_enum!(
    /// Any statement that can appear in a script, block or case body.
    Stmt {
        Block,
        EmptyStatement,
        ExpressionStatement,
        IfStatement,
        WhileStatement,
        DoWhileStatement,
        SwitchStatement,
        ForStatement,
        ForeachStatement,
        BreakStatement,
        ContinueStatement,
        ReturnStatement,
        YieldStatement,
        LocalDeclaration,
        VarStatement,
        FunctionDeclaration,
        ClassDeclaration,
        TryStatement,
        ThrowStatement,
        ConstDeclaration,
        EnumDeclaration,
    }
);

ast_enum!(
    /// Any expression, table literals included.
    Expr {
        UnaryExpression,
        BinaryExpression,
        TernaryExpression,
        AssignmentExpression,
        UpdateExpression,
        CallExpression,
        IndexExpression,
        DerefExpression,
        LambdaExpression,
        AnonymousFunction,
        ParenthesizedExpression,
        CloneExpression,
        DeleteExpression,
        ResumeExpression,
        Array,
        Table,
        Identifier,
        GlobalVariable,
        Integer,
        Float,
        Str,
        VerbatimStr,
        Char,
        Bool,
        Null,
    }
);

fn token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    tokens(node, kind).next()
}

fn tokens(node: &SyntaxNode, kind: SyntaxKind) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .filter(move |t| t.kind() == kind)
}

fn exprs(node: &SyntaxNode) -> impl Iterator<Item = Expr> + '_ {
    node.children().filter_map(Expr::cast)
}

fn stmts(node: &SyntaxNode) -> impl Iterator<Item = Stmt> + '_ {
    node.children().filter_map(Stmt::cast)
}

fn child<N>(node: &SyntaxNode, cast: fn(SyntaxNode) -> Option<N>) -> Option<N> {
    node.children().find_map(cast)
}

/// Statement following the closing `)` of a header.
fn stmt_after_header(node: &SyntaxNode) -> Option<Stmt> {
    node.children_with_tokens()
        .skip_while(|it| it.kind() != SyntaxKind::ParenClose)
        .filter_map(|it| it.into_node())
        .find_map(Stmt::cast)
}

/// First non-trivia token directly under `node`.
fn first_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| !t.kind().is_trivia())
}

impl Script {
    pub fn statements(&self) -> impl Iterator<Item = Stmt> + '_ {
        stmts(&self.0)
    }
}

impl Stmt {
    pub fn kind(&self) -> SyntaxKind {
        self.as_cst().kind()
    }
}

impl Expr {
    pub fn kind(&self) -> SyntaxKind {
        self.as_cst().kind()
    }
}

impl Block {
    pub fn statements(&self) -> impl Iterator<Item = Stmt> + '_ {
        stmts(&self.0)
    }
}

impl ExpressionStatement {
    pub fn expr(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl IfStatement {
    pub fn condition(&self) -> Option<ParenthesizedExpression> {
        child(&self.0, ParenthesizedExpression::cast)
    }

    pub fn consequence(&self) -> Option<Stmt> {
        stmts(&self.0).next()
    }

    pub fn else_statement(&self) -> Option<ElseStatement> {
        child(&self.0, ElseStatement::cast)
    }

    pub fn alternative(&self) -> Option<Stmt> {
        self.else_statement()?.alternative()
    }
}

impl ElseStatement {
    pub fn alternative(&self) -> Option<Stmt> {
        stmts(&self.0).next()
    }
}

impl WhileStatement {
    pub fn condition(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    /// `None` for `while (cond)` without a body.
    pub fn body(&self) -> Option<Stmt> {
        stmt_after_header(&self.0)
    }
}

impl DoWhileStatement {
    pub fn body(&self) -> Option<Stmt> {
        stmts(&self.0).next()
    }

    pub fn condition(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl SwitchStatement {
    pub fn value(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn cases(&self) -> impl Iterator<Item = CaseStatement> + '_ {
        self.0.children().filter_map(CaseStatement::cast)
    }

    pub fn default(&self) -> Option<DefaultStatement> {
        child(&self.0, DefaultStatement::cast)
    }
}

impl CaseStatement {
    pub fn value(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn statements(&self) -> impl Iterator<Item = Stmt> + '_ {
        stmts(&self.0)
    }
}

impl DefaultStatement {
    pub fn statements(&self) -> impl Iterator<Item = Stmt> + '_ {
        stmts(&self.0)
    }
}

/// Which header clause of a `for` statement a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForClause {
    Initial,
    Condition,
    Increment,
}

/// The initializer of a `for` header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ForInit {
    Expr(Expr),
    Local(LocalDeclaration),
}

impl ForStatement {
    /// Header nodes tagged with their clause, decided by the `;` tokens before them.
    fn clauses(&self) -> impl Iterator<Item = (ForClause, SyntaxNode)> + '_ {
        let mut semicolons = 0;
        self.0
            .children_with_tokens()
            .take_while(|it| it.kind() != SyntaxKind::ParenClose)
            .filter_map(move |it| {
                if it.kind() == SyntaxKind::Semicolon {
                    semicolons += 1;
                    return None;
                }
                let clause = match semicolons {
                    0 => ForClause::Initial,
                    1 => ForClause::Condition,
                    _ => ForClause::Increment,
                };
                Some((clause, it.into_node()?))
            })
    }

    pub fn clause_of(&self, node: &SyntaxNode) -> Option<ForClause> {
        self.clauses()
            .find(|(_, n)| n == node)
            .map(|(clause, _)| clause)
    }

    fn clause(&self, wanted: ForClause) -> Option<SyntaxNode> {
        self.clauses()
            .find(|(clause, _)| *clause == wanted)
            .map(|(_, node)| node)
    }

    pub fn initial(&self) -> Option<ForInit> {
        let node = self.clause(ForClause::Initial)?;
        match LocalDeclaration::cast(node.clone()) {
            Some(local) => Some(ForInit::Local(local)),
            None => Expr::cast(node).map(ForInit::Expr),
        }
    }

    pub fn condition(&self) -> Option<Expr> {
        self.clause(ForClause::Condition).and_then(Expr::cast)
    }

    pub fn increment(&self) -> Option<Expr> {
        self.clause(ForClause::Increment).and_then(Expr::cast)
    }

    pub fn body(&self) -> Option<Stmt> {
        stmt_after_header(&self.0)
    }
}

impl ForeachStatement {
    /// Present only in the `foreach (index, value in ...)` form.
    pub fn index(&self) -> Option<SyntaxToken> {
        let mut ids = tokens(&self.0, SyntaxKind::Id);
        let first = ids.next();
        ids.next().and(first)
    }

    pub fn value(&self) -> Option<SyntaxToken> {
        tokens(&self.0, SyntaxKind::Id).take(2).last()
    }

    pub fn collection(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn body(&self) -> Option<Stmt> {
        stmt_after_header(&self.0)
    }
}

impl ReturnStatement {
    pub fn value(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl YieldStatement {
    pub fn value(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl ThrowStatement {
    pub fn value(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl LocalDeclaration {
    pub fn bindings(&self) -> impl Iterator<Item = LocalBinding> + '_ {
        self.0.children().filter_map(LocalBinding::cast)
    }
}

impl LocalBinding {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }

    /// `=` or `<-`, when initialized.
    pub fn operator(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Equals).or_else(|| token(&self.0, SyntaxKind::NewSlot))
    }

    pub fn value(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl VarStatement {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }

    pub fn value(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl FunctionDeclaration {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }

    /// All `::`-separated name segments in order.
    pub fn path(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        tokens(&self.0, SyntaxKind::Id)
    }

    pub fn parameters(&self) -> Option<Parameters> {
        child(&self.0, Parameters::cast)
    }

    pub fn body(&self) -> Option<Stmt> {
        stmts(&self.0).next()
    }
}

impl Parameters {
    pub fn params(&self) -> impl Iterator<Item = Parameter> + '_ {
        self.0.children().filter_map(Parameter::cast)
    }
}

impl Parameter {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }

    pub fn is_variadic(&self) -> bool {
        token(&self.0, SyntaxKind::Ellipsis).is_some()
    }

    pub fn default_value(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl ClassDeclaration {
    pub fn name(&self) -> Option<SyntaxToken> {
        self.path().next()
    }

    /// `.`-separated name segments, before any `extends`.
    pub fn path(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .take_while(|t| t.kind() != SyntaxKind::KwExtends && t.kind() != SyntaxKind::BraceOpen)
            .filter(|t| t.kind() == SyntaxKind::Id)
    }

    pub fn base(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .skip_while(|t| t.kind() != SyntaxKind::KwExtends)
            .find(|t| t.kind() == SyntaxKind::Id)
    }

    pub fn attributes(&self) -> Option<AttributeDeclaration> {
        child(&self.0, AttributeDeclaration::cast)
    }

    pub fn members(&self) -> impl Iterator<Item = MemberDeclaration> + '_ {
        self.0.children().filter_map(MemberDeclaration::cast)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// `[static] name = value`
    Field,
    /// `[key] = value`
    Computed,
    /// Nested `function name(...)`
    Method,
    /// `constructor(...)`
    Constructor,
}

impl MemberDeclaration {
    pub fn kind(&self) -> MemberKind {
        if self.method().is_some() {
            return MemberKind::Method;
        }
        match self.first_own_token().map(|t| t.kind()) {
            Some(SyntaxKind::KwConstructor) => MemberKind::Constructor,
            Some(SyntaxKind::BracketOpen) => MemberKind::Computed,
            _ => MemberKind::Field,
        }
    }

    fn first_own_token(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }

    pub fn is_static(&self) -> bool {
        token(&self.0, SyntaxKind::KwStatic).is_some()
    }

    pub fn attributes(&self) -> Option<AttributeDeclaration> {
        child(&self.0, AttributeDeclaration::cast)
    }

    /// Field name.
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }

    /// Computed member key.
    pub fn key(&self) -> Option<Expr> {
        match self.kind() {
            MemberKind::Computed => exprs(&self.0).next(),
            _ => None,
        }
    }

    /// Initializer of a field or computed member.
    pub fn value(&self) -> Option<Expr> {
        match self.kind() {
            MemberKind::Field => exprs(&self.0).next(),
            MemberKind::Computed => exprs(&self.0).nth(1),
            _ => None,
        }
    }

    pub fn method(&self) -> Option<FunctionDeclaration> {
        child(&self.0, FunctionDeclaration::cast)
    }

    /// Constructor parameters.
    pub fn parameters(&self) -> Option<Parameters> {
        child(&self.0, Parameters::cast)
    }

    /// Constructor body.
    pub fn body(&self) -> Option<Stmt> {
        match self.kind() {
            MemberKind::Constructor => stmts(&self.0).next(),
            _ => None,
        }
    }
}

impl TryStatement {
    pub fn body(&self) -> Option<Stmt> {
        stmts(&self.0).next()
    }

    pub fn catch(&self) -> Option<CatchStatement> {
        child(&self.0, CatchStatement::cast)
    }
}

impl CatchStatement {
    pub fn binding(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }

    pub fn body(&self) -> Option<Stmt> {
        stmts(&self.0).next()
    }
}

impl ConstDeclaration {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }

    pub fn value(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl EnumDeclaration {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }

    pub fn attributes(&self) -> Option<AttributeDeclaration> {
        child(&self.0, AttributeDeclaration::cast)
    }

    pub fn entries(&self) -> impl Iterator<Item = EnumEntry> + '_ {
        self.0.children().filter_map(EnumEntry::cast)
    }
}

impl EnumEntry {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }

    /// `None` when the entry has no explicit value.
    pub fn value(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl AttributeDeclaration {
    pub fn attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.0.children().filter_map(Attribute::cast)
    }
}

impl Attribute {
    pub fn left(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }

    pub fn right(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl UnaryExpression {
    pub fn operator(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| PREFIX_OPERATORS.contains(t.kind()))
    }

    pub fn operand(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    /// `a++` rather than `++a`.
    pub fn is_postfix(&self) -> bool {
        self.0
            .children_with_tokens()
            .find(|it| !it.kind().is_trivia())
            .is_some_and(|it| it.as_node().is_some())
    }
}

impl BinaryExpression {
    pub fn left(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn operator(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| infix_binding_power(t.kind()).is_some())
    }

    pub fn right(&self) -> Option<Expr> {
        exprs(&self.0).nth(1)
    }
}

impl TernaryExpression {
    pub fn condition(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn consequence(&self) -> Option<Expr> {
        exprs(&self.0).nth(1)
    }

    pub fn alternative(&self) -> Option<Expr> {
        exprs(&self.0).nth(2)
    }
}

fn assign_operator(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| ASSIGN_OPERATORS.contains(t.kind()))
}

impl AssignmentExpression {
    pub fn left(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn operator(&self) -> Option<SyntaxToken> {
        assign_operator(&self.0)
    }

    pub fn right(&self) -> Option<Expr> {
        exprs(&self.0).nth(1)
    }
}

impl UpdateExpression {
    pub fn left(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    /// `<-`, `+=`, `-=`, `*=`, `/=` or `%=`.
    pub fn operator(&self) -> Option<SyntaxToken> {
        assign_operator(&self.0)
    }

    pub fn right(&self) -> Option<Expr> {
        exprs(&self.0).nth(1)
    }
}

impl CallExpression {
    /// Callee; `None` for `rawcall(...)`.
    pub fn function(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn is_rawcall(&self) -> bool {
        token(&self.0, SyntaxKind::KwRawcall).is_some()
    }

    pub fn args(&self) -> Option<CallArgs> {
        child(&self.0, CallArgs::cast)
    }
}

impl CallArgs {
    pub fn args(&self) -> impl Iterator<Item = Expr> + '_ {
        exprs(&self.0)
    }
}

impl IndexExpression {
    pub fn object(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn index(&self) -> Option<Expr> {
        exprs(&self.0).nth(1)
    }
}

impl DerefExpression {
    pub fn object(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn member(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }
}

impl LambdaExpression {
    pub fn parameters(&self) -> Option<Parameters> {
        child(&self.0, Parameters::cast)
    }

    pub fn body(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl AnonymousFunction {
    pub fn parameters(&self) -> Option<Parameters> {
        child(&self.0, Parameters::cast)
    }

    pub fn body(&self) -> Option<Stmt> {
        stmts(&self.0).next()
    }
}

impl ParenthesizedExpression {
    pub fn inner(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl CloneExpression {
    pub fn operand(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl DeleteExpression {
    pub fn operand(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl ResumeExpression {
    pub fn operand(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl Array {
    pub fn elements(&self) -> impl Iterator<Item = Expr> + '_ {
        exprs(&self.0)
    }
}

impl Table {
    pub fn slots(&self) -> impl Iterator<Item = TableSlot> + '_ {
        self.0.children().filter_map(TableSlot::cast)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// `name = value`
    Named,
    /// `[key] = value`
    Computed,
    /// `key : value`
    Keyed,
    /// `function name(...) {...}`
    Method,
}

impl TableSlot {
    pub fn kind(&self) -> SlotKind {
        if self.method().is_some() {
            return SlotKind::Method;
        }
        match first_token(&self.0).map(|t| t.kind()) {
            Some(SyntaxKind::Id) => SlotKind::Named,
            Some(SyntaxKind::BracketOpen) => SlotKind::Computed,
            _ => SlotKind::Keyed,
        }
    }

    /// Slot name of a `name = value` slot.
    pub fn name(&self) -> Option<SyntaxToken> {
        match self.kind() {
            SlotKind::Named => token(&self.0, SyntaxKind::Id),
            _ => None,
        }
    }

    /// Key expression of a computed or keyed slot.
    pub fn key(&self) -> Option<Expr> {
        match self.kind() {
            SlotKind::Computed | SlotKind::Keyed => exprs(&self.0).next(),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<Expr> {
        match self.kind() {
            SlotKind::Named => exprs(&self.0).next(),
            SlotKind::Computed | SlotKind::Keyed => exprs(&self.0).nth(1),
            SlotKind::Method => None,
        }
    }

    pub fn method(&self) -> Option<FunctionDeclaration> {
        child(&self.0, FunctionDeclaration::cast)
    }
}

impl Identifier {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }
}

impl GlobalVariable {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Id)
    }
}

impl Integer {
    /// `None` if the literal failed validation (already reported by the lexer).
    pub fn value(&self) -> Option<IntegerValue> {
        literal::decode_integer(&self.0.text().to_string()).ok()
    }

    pub fn is_negative(&self) -> bool {
        token(&self.0, SyntaxKind::Minus).is_some()
    }
}

impl Float {
    pub fn value(&self) -> Option<f64> {
        literal::decode_float(&self.0.text().to_string()).ok()
    }
}

impl Str {
    pub fn token(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::StringLit)
    }

    /// Decoded value with escapes applied.
    pub fn value(&self) -> Option<String> {
        literal::decode_string(self.token()?.text()).ok()
    }
}

impl VerbatimStr {
    pub fn token(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::VerbatimStringLit)
    }

    /// Text between `@"` and `"`, byte for byte.
    pub fn content(&self) -> Option<String> {
        Some(literal::verbatim_content(self.token()?.text()).to_string())
    }

    /// Content with `""` collapsed to `"`.
    pub fn value(&self) -> Option<String> {
        literal::decode_verbatim(self.token()?.text()).ok()
    }
}

impl Char {
    pub fn value(&self) -> Option<char> {
        literal::decode_char(token(&self.0, SyntaxKind::CharLit)?.text()).ok()
    }
}

impl Bool {
    pub fn value(&self) -> bool {
        token(&self.0, SyntaxKind::KwTrue).is_some()
    }
}

/// Name of the grammar field `node` occupies in its parent, if any.
pub fn field_name(node: &SyntaxNode) -> Option<&'static str> {
    let parent = node.parent()?;

    if let Some(for_stmt) = ForStatement::cast(parent.clone()) {
        return for_stmt.clause_of(node).map(|clause| match clause {
            ForClause::Initial => "initial",
            ForClause::Condition => "condition",
            ForClause::Increment => "increment",
        });
    }

    let is_stmt = Stmt::cast(node.clone()).is_some();
    let expr_index = || {
        Expr::cast(node.clone())?;
        exprs(&parent).position(|e| e.as_cst() == node)
    };

    match parent.kind() {
        SyntaxKind::IfStatement if node.kind() == SyntaxKind::ParenthesizedExpression => {
            Some("condition")
        }
        SyntaxKind::IfStatement if is_stmt => Some("consequence"),
        SyntaxKind::ElseStatement if is_stmt => Some("alternative"),
        SyntaxKind::CaseStatement => (expr_index()? == 0).then_some("case"),
        SyntaxKind::ForeachStatement => expr_index().map(|_| "collection"),
        SyntaxKind::Attribute => expr_index().map(|_| "right"),
        SyntaxKind::UnaryExpression => expr_index().map(|_| "operand"),
        SyntaxKind::BinaryExpression
        | SyntaxKind::AssignmentExpression
        | SyntaxKind::UpdateExpression => match expr_index()? {
            0 => Some("left"),
            1 => Some("right"),
            _ => None,
        },
        SyntaxKind::TernaryExpression => match expr_index()? {
            0 => Some("condition"),
            1 => Some("consequence"),
            2 => Some("alternative"),
            _ => None,
        },
        SyntaxKind::IndexExpression => match expr_index()? {
            0 => Some("object"),
            1 => Some("index"),
            _ => None,
        },
        SyntaxKind::CallExpression => expr_index().map(|_| "function"),
        _ => None,
    }
}
