//! Syntax kinds for Squirrel.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `SquirrelLang` implements Rowan's `Language` trait for tree construction.

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

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token(":")]
    Colon,

    /// `::` for global variables and function paths. Defined before `Colon` for correct precedence.
    #[token("::")]
    DoubleColon,

    #[token(".")]
    Dot,

    /// Variadic parameter marker
    #[token("...")]
    Ellipsis,

    /// Lambda introducer: `@(x) x + 1`
    #[token("@")]
    At,

    #[token("?")]
    Question,

    #[token("=")]
    Equals,

    /// New-slot operator `<-`
    #[token("<-")]
    NewSlot,

    #[token("+=")]
    PlusEquals,

    #[token("-=")]
    MinusEquals,

    #[token("*=")]
    StarEquals,

    #[token("/=")]
    SlashEquals,

    #[token("%=")]
    PercentEquals,

    #[token("++")]
    PlusPlus,

    #[token("--")]
    MinusMinus,

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

    #[token("||")]
    PipePipe,

    #[token("&&")]
    AmpAmp,

    #[token("|")]
    Pipe,

    #[token("^")]
    Caret,

    #[token("&")]
    Amp,

    #[token("==")]
    EqualsEquals,

    #[token("!=")]
    BangEquals,

    /// Three-way comparison `<=>`
    #[token("<=>")]
    Spaceship,

    #[token(">")]
    Greater,

    #[token(">=")]
    GreaterEquals,

    #[token("<")]
    Less,

    #[token("<=")]
    LessEquals,

    #[token("<<")]
    ShiftLeft,

    #[token(">>")]
    ShiftRight,

    #[token(">>>")]
    UnsignedShiftRight,

    #[token("!")]
    Bang,

    #[token("~")]
    Tilde,

    /// Opens an attribute block: `</ key = value />`
    #[token("</")]
    AttributeOpen,

    #[token("/>")]
    AttributeClose,

    #[token("if")]
    KwIf,

    #[token("else")]
    KwElse,

    #[token("while")]
    KwWhile,

    #[token("do")]
    KwDo,

    #[token("switch")]
    KwSwitch,

    #[token("case")]
    KwCase,

    #[token("default")]
    KwDefault,

    #[token("for")]
    KwFor,

    #[token("foreach")]
    KwForeach,

    #[token("break")]
    KwBreak,

    #[token("continue")]
    KwContinue,

    #[token("return")]
    KwReturn,

    #[token("yield")]
    KwYield,

    #[token("local")]
    KwLocal,

    #[token("function")]
    KwFunction,

    #[token("class")]
    KwClass,

    #[token("extends")]
    KwExtends,

    #[token("static")]
    KwStatic,

    #[token("constructor")]
    KwConstructor,

    #[token("try")]
    KwTry,

    #[token("catch")]
    KwCatch,

    #[token("throw")]
    KwThrow,

    #[token("const")]
    KwConst,

    #[token("enum")]
    KwEnum,

    #[token("delete")]
    KwDelete,

    #[token("clone")]
    KwClone,

    #[token("in")]
    KwIn,

    #[token("instanceof")]
    KwInstanceof,

    #[token("typeof")]
    KwTypeof,

    #[token("true")]
    KwTrue,

    #[token("false")]
    KwFalse,

    #[token("null")]
    KwNull,

    #[token("rawcall")]
    KwRawcall,

    #[token("resume")]
    KwResume,

    #[token("var")]
    KwVar,

    /// Identifier. Defined after keywords so they take precedence.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Id,

    /// Decimal, hexadecimal and octal integers, plus the `'''…'''` form produced by the lexer.
    /// A leading `-` is a separate token; the parser folds it into the literal node.
    #[regex(r"0|[1-9][0-9]*|0[xX][0-9A-Fa-f]+|0[0-7]+")]
    IntegerLit,

    #[regex(r"[0-9]+\.[0-9]+")]
    #[regex(r"[0-9]+\.[eE][+-]?[0-9]+")]
    FloatLit,

    /// Produced by the lexer from `StringStart`
    StringLit,
    /// Produced by the lexer from `VerbatimStart`
    VerbatimStringLit,
    /// Produced by the lexer from `CharStart`
    CharLit,

    #[regex(r"[ \t\r\x0B\x0C]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    /// `# ...` and `// ...` comments. The slash form is scanned by the lexer.
    #[regex(r"#[^\n]*", allow_greedy = true)]
    LineComment,

    /// Produced by the lexer from `BlockCommentStart`
    BlockComment,

    #[token("/*")]
    #[doc(hidden)]
    BlockCommentStart, // Lexer-internal only

    #[token("//")]
    #[doc(hidden)]
    LineCommentStart, // Lexer-internal only

    #[token("\"")]
    #[doc(hidden)]
    StringStart, // Lexer-internal only

    #[token("@\"")]
    #[doc(hidden)]
    VerbatimStart, // Lexer-internal only

    #[token("'")]
    #[doc(hidden)]
    CharStart, // Lexer-internal only

    /// Coalesced unrecognized characters and malformed literals
    Garbage,
    Error,

    // --- Node kinds (non-terminals) ---
    Script,
    Block,
    EmptyStatement,
    ExpressionStatement,
    IfStatement,
    ElseStatement,
    WhileStatement,
    DoWhileStatement,
    SwitchStatement,
    CaseStatement,
    DefaultStatement,
    ForStatement,
    ForeachStatement,
    BreakStatement,
    ContinueStatement,
    ReturnStatement,
    YieldStatement,
    LocalDeclaration,
    LocalBinding,
    VarStatement,
    FunctionDeclaration,
    Parameters,
    Parameter,
    ClassDeclaration,
    MemberDeclaration,
    TryStatement,
    CatchStatement,
    ThrowStatement,
    ConstDeclaration,
    EnumDeclaration,
    EnumEntry,
    AttributeDeclaration,
    Attribute,
    UnaryExpression,
    BinaryExpression,
    TernaryExpression,
    AssignmentExpression,
    UpdateExpression,
    CallExpression,
    CallArgs,
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
    TableSlot,
    Identifier,
    GlobalVariable,
    Integer,
    Float,
    Str,
    VerbatimStr,
    Char,
    Bool,
    Null,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | LineComment | BlockComment)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        (KwIf as u16..=KwVar as u16).contains(&(self as u16))
    }

    #[inline]
    pub fn is_node(self) -> bool {
        self as u16 >= Script as u16 && self != __LAST
    }

    /// Human-readable name used in "expected ..." lists.
    pub fn display_name(self) -> &'static str {
        match self {
            ParenOpen => "`(`",
            ParenClose => "`)`",
            BracketOpen => "`[`",
            BracketClose => "`]`",
            BraceOpen => "`{`",
            BraceClose => "`}`",
            Comma => "`,`",
            Semicolon => "`;`",
            Colon => "`:`",
            DoubleColon => "`::`",
            Dot => "`.`",
            Ellipsis => "`...`",
            At => "`@`",
            Question => "`?`",
            Equals => "`=`",
            NewSlot => "`<-`",
            PlusEquals => "`+=`",
            MinusEquals => "`-=`",
            StarEquals => "`*=`",
            SlashEquals => "`/=`",
            PercentEquals => "`%=`",
            PlusPlus => "`++`",
            MinusMinus => "`--`",
            Plus => "`+`",
            Minus => "`-`",
            Star => "`*`",
            Slash => "`/`",
            Percent => "`%`",
            PipePipe => "`||`",
            AmpAmp => "`&&`",
            Pipe => "`|`",
            Caret => "`^`",
            Amp => "`&`",
            EqualsEquals => "`==`",
            BangEquals => "`!=`",
            Spaceship => "`<=>`",
            Greater => "`>`",
            GreaterEquals => "`>=`",
            Less => "`<`",
            LessEquals => "`<=`",
            ShiftLeft => "`<<`",
            ShiftRight => "`>>`",
            UnsignedShiftRight => "`>>>`",
            Bang => "`!`",
            Tilde => "`~`",
            AttributeOpen => "`</`",
            AttributeClose => "`/>`",
            KwIf => "`if`",
            KwElse => "`else`",
            KwWhile => "`while`",
            KwDo => "`do`",
            KwSwitch => "`switch`",
            KwCase => "`case`",
            KwDefault => "`default`",
            KwFor => "`for`",
            KwForeach => "`foreach`",
            KwBreak => "`break`",
            KwContinue => "`continue`",
            KwReturn => "`return`",
            KwYield => "`yield`",
            KwLocal => "`local`",
            KwFunction => "`function`",
            KwClass => "`class`",
            KwExtends => "`extends`",
            KwStatic => "`static`",
            KwConstructor => "`constructor`",
            KwTry => "`try`",
            KwCatch => "`catch`",
            KwThrow => "`throw`",
            KwConst => "`const`",
            KwEnum => "`enum`",
            KwDelete => "`delete`",
            KwClone => "`clone`",
            KwIn => "`in`",
            KwInstanceof => "`instanceof`",
            KwTypeof => "`typeof`",
            KwTrue => "`true`",
            KwFalse => "`false`",
            KwNull => "`null`",
            KwRawcall => "`rawcall`",
            KwResume => "`resume`",
            KwVar => "`var`",
            Id => "identifier",
            IntegerLit => "integer",
            FloatLit => "float",
            StringLit => "string",
            VerbatimStringLit => "verbatim string",
            CharLit => "char",
            Whitespace => "whitespace",
            Newline => "line break",
            LineComment | BlockComment => "comment",
            BlockCommentStart | LineCommentStart => "comment",
            StringStart => "string",
            VerbatimStart => "verbatim string",
            CharStart => "char",
            Garbage | Error => "invalid input",
            _ => "syntax node",
        }
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
pub enum SquirrelLang {}

impl Language for SquirrelLang {
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
pub type SyntaxNode = rowan::SyntaxNode<SquirrelLang>;
pub type SyntaxToken = rowan::SyntaxToken<SquirrelLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 128-bit bitset of token `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Creates an empty token set.
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

    /// Kinds in discriminant order.
    pub fn iter(self) -> impl Iterator<Item = SyntaxKind> {
        (0..128u16)
            .filter(move |i| self.0 & (1 << i) != 0 && *i < __LAST as u16)
            // SAFETY: bounds checked against `__LAST`, SyntaxKind is repr(u16)
            .map(|i| unsafe { std::mem::transmute::<u16, SyntaxKind>(i) })
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// Literal tokens that form a literal node on their own.
    pub const LITERALS: TokenSet = TokenSet::new(&[
        IntegerLit,
        FloatLit,
        StringLit,
        VerbatimStringLit,
        CharLit,
        KwTrue,
        KwFalse,
        KwNull,
    ]);

    pub const PREFIX_OPERATORS: TokenSet =
        TokenSet::new(&[Minus, Bang, Tilde, KwTypeof, PlusPlus, MinusMinus]);

    /// FIRST set of expressions. Tables are excluded (position-dependent).
    pub const EXPR_FIRST: TokenSet = TokenSet::new(&[
        ParenOpen,
        BracketOpen,
        Id,
        DoubleColon,
        At,
        KwFunction,
        KwClone,
        KwDelete,
        KwResume,
        KwRawcall,
        Garbage,
    ])
    .union(LITERALS)
    .union(PREFIX_OPERATORS);

    /// Keywords that can only start a statement.
    pub const STMT_KEYWORDS: TokenSet = TokenSet::new(&[
        KwIf,
        KwWhile,
        KwDo,
        KwSwitch,
        KwFor,
        KwForeach,
        KwBreak,
        KwContinue,
        KwReturn,
        KwYield,
        KwLocal,
        KwVar,
        KwClass,
        KwTry,
        KwThrow,
        KwConst,
        KwEnum,
    ]);

    pub const STMT_FIRST: TokenSet = EXPR_FIRST
        .union(STMT_KEYWORDS)
        .union(TokenSet::new(&[BraceOpen, Semicolon]));

    pub const ASSIGN_OPERATORS: TokenSet = TokenSet::new(&[
        Equals,
        NewSlot,
        PlusEquals,
        MinusEquals,
        StarEquals,
        SlashEquals,
        PercentEquals,
    ]);

    pub const MEMBER_FIRST: TokenSet = TokenSet::new(&[
        Id,
        KwStatic,
        BracketOpen,
        KwFunction,
        KwConstructor,
        AttributeOpen,
    ]);

    /// Synchronization points for statement-level recovery.
    pub const STMT_RECOVERY: TokenSet =
        STMT_KEYWORDS.union(TokenSet::new(&[BraceClose, Semicolon, KwFunction]));

    /// Tokens that end a delimited list even when its closer is missing.
    pub const LIST_RECOVERY: TokenSet = STMT_KEYWORDS.union(TokenSet::new(&[Semicolon]));

    pub const MEMBER_RECOVERY: TokenSet = MEMBER_FIRST.union(TokenSet::new(&[BraceClose]));

    /// Where skipping stops after a token that cannot start a statement.
    pub const STMT_SYNC: TokenSet = STMT_FIRST
        .union(STMT_RECOVERY)
        .union(TokenSet::new(&[KwCase, KwDefault]));

    pub const CASE_BODY_END: TokenSet = TokenSet::new(&[KwCase, KwDefault, BraceClose]);

    pub const ARGS_RECOVERY: TokenSet =
        LIST_RECOVERY.union(TokenSet::new(&[ParenClose, Comma, BraceClose]));

    pub const PARAMS_RECOVERY: TokenSet =
        LIST_RECOVERY.union(TokenSet::new(&[ParenClose, Comma, BraceOpen, BraceClose]));

    pub const ARRAY_RECOVERY: TokenSet =
        LIST_RECOVERY.union(TokenSet::new(&[BracketClose, Comma, BraceClose]));

    pub const TABLE_RECOVERY: TokenSet = LIST_RECOVERY.union(TokenSet::new(&[
        BraceClose,
        Comma,
        Id,
        BracketOpen,
        KwFunction,
    ]));

    pub const ENUM_RECOVERY: TokenSet =
        LIST_RECOVERY.union(TokenSet::new(&[BraceClose, Comma, Id]));

    pub const ATTRIBUTE_RECOVERY: TokenSet =
        LIST_RECOVERY.union(TokenSet::new(&[AttributeClose, Comma, Id, BraceOpen]));
}
