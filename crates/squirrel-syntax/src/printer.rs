//! Text dumps of a parsed script: the raw CST, or a field-labelled AST outline.

use std::fmt::Write;

use rowan::{NodeOrToken, TextRange};

use crate::parser::ast::{self, MemberKind, SlotKind};
use crate::parser::{SyntaxKind, SyntaxNode, SyntaxToken, field_name};

pub struct ScriptPrinter<'a> {
    root: &'a SyntaxNode,
    raw: bool,
    trivia: bool,
    spans: bool,
}

impl<'a> ScriptPrinter<'a> {
    pub fn new(root: &'a SyntaxNode) -> Self {
        Self {
            root,
            raw: false,
            trivia: false,
            spans: false,
        }
    }

    /// Dump every node and token instead of the AST outline.
    pub fn raw(mut self, value: bool) -> Self {
        self.raw = value;
        self
    }

    /// Include whitespace, newlines and comments in raw dumps.
    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        if self.raw {
            self.format_cst(self.root, 0, w)
        } else {
            self.format_ast(self.root, 0, w)
        }
    }

    fn format_cst(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(node.text_range());

        writeln!(w, "{}{:?}{}", prefix, node.kind(), span)?;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_cst(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    if self.trivia || !t.kind().is_trivia() {
                        let child_prefix = "  ".repeat(indent + 1);
                        let child_span = self.span_str(t.text_range());
                        writeln!(
                            w,
                            "{}{:?}{} {:?}",
                            child_prefix,
                            t.kind(),
                            child_span,
                            t.text()
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    fn format_ast(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let field = field_name(node)
            .map(|f| format!("{f}: "))
            .unwrap_or_default();
        let span = self.span_str(node.text_range());

        write!(w, "{}{}{:?}{}", prefix, field, node.kind(), span)?;
        match detail(node) {
            Some(d) if !d.is_empty() => writeln!(w, " {}", d)?,
            _ => writeln!(w)?,
        }

        // Error nodes show their text; their structure is not meaningful.
        if node.kind() == SyntaxKind::Error {
            return Ok(());
        }
        for child in node.children() {
            self.format_ast(&child, indent + 1, w)?;
        }
        Ok(())
    }

    fn span_str(&self, range: TextRange) -> String {
        if self.spans {
            format!(" [{}..{}]", u32::from(range.start()), u32::from(range.end()))
        } else {
            String::new()
        }
    }
}

fn text(token: Option<SyntaxToken>) -> String {
    token.map(|t| t.text().to_string()).unwrap_or_default()
}

fn joined(tokens: impl Iterator<Item = SyntaxToken>, sep: &str) -> String {
    tokens
        .map(|t| t.text().to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

/// One-line summary printed after a node's kind in the AST outline.
fn detail(node: &SyntaxNode) -> Option<String> {
    let node = node.clone();
    let d = match node.kind() {
        SyntaxKind::Identifier => text(ast::Identifier::cast(node)?.name()),
        SyntaxKind::GlobalVariable => format!("::{}", text(ast::GlobalVariable::cast(node)?.name())),
        SyntaxKind::Integer
        | SyntaxKind::Float
        | SyntaxKind::Str
        | SyntaxKind::VerbatimStr
        | SyntaxKind::Char
        | SyntaxKind::Bool => node.text().to_string(),
        SyntaxKind::Error => format!("{:?}", node.text().to_string()),
        SyntaxKind::UnaryExpression => {
            let unary = ast::UnaryExpression::cast(node)?;
            let op = text(unary.operator());
            if unary.is_postfix() {
                format!("{op} (postfix)")
            } else {
                op
            }
        }
        SyntaxKind::BinaryExpression => text(ast::BinaryExpression::cast(node)?.operator()),
        SyntaxKind::AssignmentExpression => text(ast::AssignmentExpression::cast(node)?.operator()),
        SyntaxKind::UpdateExpression => text(ast::UpdateExpression::cast(node)?.operator()),
        SyntaxKind::DerefExpression => format!(".{}", text(ast::DerefExpression::cast(node)?.member())),
        SyntaxKind::CallExpression if ast::CallExpression::cast(node.clone())?.is_rawcall() => {
            "rawcall".to_string()
        }
        SyntaxKind::FunctionDeclaration => joined(ast::FunctionDeclaration::cast(node)?.path(), "::"),
        SyntaxKind::ClassDeclaration => {
            let class = ast::ClassDeclaration::cast(node)?;
            let path = joined(class.path(), ".");
            match class.base() {
                Some(base) => format!("{path} extends {}", base.text()),
                None => path,
            }
        }
        SyntaxKind::MemberDeclaration => {
            let member = ast::MemberDeclaration::cast(node)?;
            match member.kind() {
                MemberKind::Field if member.is_static() => format!("static {}", text(member.name())),
                MemberKind::Field => text(member.name()),
                MemberKind::Computed => "[computed]".to_string(),
                MemberKind::Method => "method".to_string(),
                MemberKind::Constructor => "constructor".to_string(),
            }
        }
        SyntaxKind::TableSlot => {
            let slot = ast::TableSlot::cast(node)?;
            match slot.kind() {
                SlotKind::Named => text(slot.name()),
                SlotKind::Computed => "[computed]".to_string(),
                SlotKind::Keyed => "keyed".to_string(),
                SlotKind::Method => "method".to_string(),
            }
        }
        SyntaxKind::LocalBinding => text(ast::LocalBinding::cast(node)?.name()),
        SyntaxKind::VarStatement => text(ast::VarStatement::cast(node)?.name()),
        SyntaxKind::ConstDeclaration => text(ast::ConstDeclaration::cast(node)?.name()),
        SyntaxKind::EnumDeclaration => text(ast::EnumDeclaration::cast(node)?.name()),
        SyntaxKind::EnumEntry => text(ast::EnumEntry::cast(node)?.name()),
        SyntaxKind::Attribute => text(ast::Attribute::cast(node)?.left()),
        SyntaxKind::CatchStatement => text(ast::CatchStatement::cast(node)?.binding()),
        SyntaxKind::Parameter => {
            let param = ast::Parameter::cast(node)?;
            if param.is_variadic() {
                "...".to_string()
            } else {
                text(param.name())
            }
        }
        SyntaxKind::ForeachStatement => {
            let foreach = ast::ForeachStatement::cast(node)?;
            match foreach.index() {
                Some(index) => format!("{}, {}", index.text(), text(foreach.value())),
                None => text(foreach.value()),
            }
        }
        _ => return None,
    };
    Some(d)
}
