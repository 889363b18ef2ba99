use rowan::TextRange;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{
    ATTRIBUTE_RECOVERY, ENUM_RECOVERY, MEMBER_FIRST, MEMBER_RECOVERY, PARAMS_RECOVERY,
};

impl Parser<'_> {
    /// `function name[::segment]* (params) stmt`
    pub(crate) fn parse_function_declaration(&mut self) {
        self.start_node(SyntaxKind::FunctionDeclaration);
        self.bump();

        if self.expect(SyntaxKind::Id, "function name") {
            while self.eat_token(SyntaxKind::DoubleColon) {
                if !self.expect(SyntaxKind::Id, "name segment after `::`") {
                    break;
                }
            }
        }
        self.parse_parameters();
        self.parse_body("function body");

        self.finish_node();
    }

    /// `( [param [, param]*] )` where a param is `name [= const]` or `...`.
    pub(crate) fn parse_parameters(&mut self) {
        self.start_node(SyntaxKind::Parameters);

        if !self.currently_is(SyntaxKind::ParenOpen) {
            self.expect(SyntaxKind::ParenOpen, "`(` to open parameter list");
            self.finish_node();
            return;
        }
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();

        let mut variadics: Vec<(usize, TextRange)> = Vec::new();
        let mut count = 0usize;
        loop {
            if self.should_stop() || self.currently_is(SyntaxKind::ParenClose) {
                break;
            }
            match self.current() {
                SyntaxKind::Id => {
                    self.start_node(SyntaxKind::Parameter);
                    self.bump();
                    if self.eat_token(SyntaxKind::Equals) {
                        self.parse_const_value();
                    }
                    self.finish_node();
                }
                SyntaxKind::Ellipsis => {
                    variadics.push((count, self.current_span()));
                    self.start_node(SyntaxKind::Parameter);
                    self.bump();
                    self.finish_node();
                }
                _ => {
                    self.error_recover(
                        DiagnosticKind::ExpectedIdentifier,
                        "or `...` in parameter list",
                        PARAMS_RECOVERY,
                    );
                    if !self.eat_token(SyntaxKind::Comma) {
                        break;
                    }
                    continue;
                }
            }
            count += 1;
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }

        self.validate_variadics(&variadics, count);
        self.close_delimiter(SyntaxKind::ParenClose, "parameter list");
        self.finish_node();
    }

    /// `class Name[.Segment]* [extends Base] [</ attrs />] { members }`
    pub(crate) fn parse_class_declaration(&mut self) {
        self.start_node(SyntaxKind::ClassDeclaration);
        self.bump();

        if self.expect(SyntaxKind::Id, "class name") {
            while self.eat_token(SyntaxKind::Dot) {
                if !self.expect(SyntaxKind::Id, "name segment after `.`") {
                    break;
                }
            }
        }
        if self.eat_token(SyntaxKind::KwExtends) {
            self.expect(SyntaxKind::Id, "base class after `extends`");
        }
        if self.currently_is(SyntaxKind::AttributeOpen) {
            self.parse_attributes();
        }

        if !self.currently_is(SyntaxKind::BraceOpen) {
            self.expect(SyntaxKind::BraceOpen, "`{` to open class body");
            self.finish_node();
            return;
        }
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();

        while !self.should_stop() && !self.currently_is(SyntaxKind::BraceClose) {
            if self.currently_is_one_of(MEMBER_FIRST) {
                self.parse_member();
            } else {
                self.error_recover(DiagnosticKind::ExpectedMember, "in class body", MEMBER_RECOVERY);
            }
        }

        self.close_delimiter(SyntaxKind::BraceClose, "class body");
        self.finish_node();
    }

    fn parse_member(&mut self) {
        self.start_node(SyntaxKind::MemberDeclaration);

        if self.currently_is(SyntaxKind::AttributeOpen) {
            self.parse_attributes();
        }

        match self.current() {
            SyntaxKind::KwStatic | SyntaxKind::Id => {
                self.eat_token(SyntaxKind::KwStatic);
                if self.expect(SyntaxKind::Id, "field name")
                    && self.expect(SyntaxKind::Equals, "`=` after field name")
                {
                    self.parse_expr_or_table();
                }
                self.eat_token(SyntaxKind::Semicolon);
            }
            SyntaxKind::BracketOpen => {
                self.push_delimiter(SyntaxKind::BracketOpen);
                self.bump();
                self.parse_expr();
                self.close_delimiter(SyntaxKind::BracketClose, "computed member name");
                if self.expect(SyntaxKind::Equals, "`=` after computed member name") {
                    self.parse_expr_or_table();
                }
                self.eat_token(SyntaxKind::Semicolon);
            }
            SyntaxKind::KwFunction => self.parse_function_declaration(),
            SyntaxKind::KwConstructor => {
                self.bump();
                self.parse_parameters();
                self.parse_body("constructor body");
            }
            _ => {
                self.error_msg(DiagnosticKind::ExpectedMember, "after attributes");
            }
        }

        self.finish_node();
    }

    /// `const NAME = value` ended by `;` or a line break.
    pub(crate) fn parse_const_declaration(&mut self) {
        self.start_node(SyntaxKind::ConstDeclaration);
        self.bump();

        if self.expect(SyntaxKind::Id, "constant name")
            && self.expect(SyntaxKind::Equals, "`=` after constant name")
        {
            self.parse_const_value();
            self.expect_terminator("constant");
        }

        self.finish_node();
    }

    /// `enum Name [</ attrs />] { A, B = 2, }`
    pub(crate) fn parse_enum_declaration(&mut self) {
        self.start_node(SyntaxKind::EnumDeclaration);
        self.bump();

        self.expect(SyntaxKind::Id, "enum name");
        if self.currently_is(SyntaxKind::AttributeOpen) {
            self.parse_attributes();
        }

        if !self.currently_is(SyntaxKind::BraceOpen) {
            self.expect(SyntaxKind::BraceOpen, "`{` to open enum body");
            self.finish_node();
            return;
        }
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();

        loop {
            if self.should_stop() || self.currently_is(SyntaxKind::BraceClose) {
                break;
            }
            if self.currently_is(SyntaxKind::Id) {
                self.start_node(SyntaxKind::EnumEntry);
                self.bump();
                if self.eat_token(SyntaxKind::Equals) {
                    self.parse_const_value();
                }
                self.finish_node();
            } else {
                self.error_recover(DiagnosticKind::ExpectedIdentifier, "in enum body", ENUM_RECOVERY);
                if self.currently_is(SyntaxKind::Id) {
                    continue;
                }
            }
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }

        self.close_delimiter(SyntaxKind::BraceClose, "enum body");
        self.eat_token(SyntaxKind::Semicolon);
        self.finish_node();
    }

    /// `</ key = const [, key = const]* />`
    pub(crate) fn parse_attributes(&mut self) {
        self.start_node(SyntaxKind::AttributeDeclaration);
        self.push_delimiter(SyntaxKind::AttributeOpen);
        self.bump();

        loop {
            if self.should_stop() || self.currently_is(SyntaxKind::AttributeClose) {
                break;
            }
            if self.currently_is(SyntaxKind::Id) {
                self.start_node(SyntaxKind::Attribute);
                self.bump();
                if self.expect(SyntaxKind::Equals, "`=` after attribute name") {
                    self.parse_const_value();
                }
                self.finish_node();
            } else {
                self.error_recover(
                    DiagnosticKind::ExpectedIdentifier,
                    "in attribute block",
                    ATTRIBUTE_RECOVERY,
                );
                if !self.currently_is(SyntaxKind::Comma) && !self.currently_is(SyntaxKind::Id) {
                    break;
                }
            }
            if !self.eat_token(SyntaxKind::Comma) && !self.currently_is(SyntaxKind::Id) {
                break;
            }
        }

        self.close_delimiter(SyntaxKind::AttributeClose, "attribute block");
        self.finish_node();
    }
}
