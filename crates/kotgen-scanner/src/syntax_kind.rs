//! Token kinds produced by the scanner.
//!
//! Node kinds (parameter, array type, ...) are `u16` constants above
//! `SyntaxKind::LAST_TOKEN`, defined in the parser's `syntax_kind_ext`
//! module. Thin AST nodes store either range in their `kind` field.

use serde::Serialize;

#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SyntaxKind {
    Unknown = 0,
    EndOfFileToken,

    // Literals and names
    Identifier,
    StringLiteral,
    NumericLiteral,

    // Punctuation
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    LessThanToken,
    GreaterThanToken,
    CommaToken,
    ColonToken,
    SemicolonToken,
    QuestionToken,
    EqualsToken,
    EqualsGreaterThanToken,
    DotToken,
    DotDotDotToken,
    BarToken,
    AmpersandToken,
    PlusToken,
    MinusToken,
    AsteriskToken,
    SlashToken,

    // Keywords
    AnyKeyword,
    NumberKeyword,
    StringKeyword,
    BooleanKeyword,
    VoidKeyword,
    DeclareKeyword,
    ExportKeyword,
    VarKeyword,
    LetKeyword,
    ConstKeyword,
    FunctionKeyword,
    InterfaceKeyword,
    ExtendsKeyword,
    PublicKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    ReadonlyKeyword,
    NewKeyword,
    TypeofKeyword,
}

impl SyntaxKind {
    /// Upper bound of the token kind range; node kinds start above this.
    pub const LAST_TOKEN: u16 = SyntaxKind::TypeofKeyword as u16;

    /// Map identifier text to its keyword kind, if it is one.
    pub fn from_keyword(text: &str) -> Option<SyntaxKind> {
        Some(match text {
            "any" => SyntaxKind::AnyKeyword,
            "number" => SyntaxKind::NumberKeyword,
            "string" => SyntaxKind::StringKeyword,
            "boolean" => SyntaxKind::BooleanKeyword,
            "void" => SyntaxKind::VoidKeyword,
            "declare" => SyntaxKind::DeclareKeyword,
            "export" => SyntaxKind::ExportKeyword,
            "var" => SyntaxKind::VarKeyword,
            "let" => SyntaxKind::LetKeyword,
            "const" => SyntaxKind::ConstKeyword,
            "function" => SyntaxKind::FunctionKeyword,
            "interface" => SyntaxKind::InterfaceKeyword,
            "extends" => SyntaxKind::ExtendsKeyword,
            "public" => SyntaxKind::PublicKeyword,
            "private" => SyntaxKind::PrivateKeyword,
            "protected" => SyntaxKind::ProtectedKeyword,
            "readonly" => SyntaxKind::ReadonlyKeyword,
            "new" => SyntaxKind::NewKeyword,
            "typeof" => SyntaxKind::TypeofKeyword,
            _ => return None,
        })
    }

    /// Keywords double as identifiers in most declaration positions
    /// (`declare var declare: any;` is legal enough for our purposes).
    pub const fn is_identifier_or_keyword(self) -> bool {
        matches!(self, SyntaxKind::Identifier) || self.is_keyword()
    }

    pub const fn is_keyword(self) -> bool {
        (self as u16) >= (SyntaxKind::AnyKeyword as u16)
            && (self as u16) <= (SyntaxKind::TypeofKeyword as u16)
    }
}
