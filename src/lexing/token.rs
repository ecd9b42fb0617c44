use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Literal,
    Punctuation,
    Operator,
    // Part of the external vocabulary; TRUE and FALSE currently lex as keywords.
    BooleanLiteral,
    IntLiteral,
    DoubleLiteral,
    Unknown,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Literal => "LITERAL",
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::Operator => "OPERATOR",
            TokenKind::BooleanLiteral => "BOOLEAN_LITERAL",
            TokenKind::IntLiteral => "INT_LITERAL",
            TokenKind::DoubleLiteral => "DOUBLE_LITERAL",
            TokenKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: &str) -> Self {
        Token {
            kind,
            text: String::from(text),
        }
    }

    pub fn lexeme(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Token(kind: {}, lexeme: {})", self.kind, self.text)
    }
}

pub trait TokenString {
    fn token_string(&self) -> String;
}

impl TokenString for [Token] {
    fn token_string(&self) -> String {
        let strings: Vec<String> = self.iter().map(|t| t.to_string()).collect();
        String::from("Vec(") + &strings.join(", ") + ")"
    }
}
