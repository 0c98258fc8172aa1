use lachs::Span;

#[lachs::token]
pub enum Token {
    #[literal("[a-zA-Z][a-zA-Z0-9']*")]
    Ident,
    #[terminal("\\")]
    Backslash,
    #[terminal(".")]
    Dot,
    #[terminal("_")]
    Underscore,
    #[terminal(":")]
    Colon,
    #[terminal("::")]
    DoubleColon,
    #[terminal("->")]
    Arrow,
    #[terminal("(")]
    LParen,
    #[terminal(")")]
    RParen,
}

impl Token {
    pub fn pos(&self) -> Span {
        match self {
            Token::Ident(inner) => inner.position.clone(),
            Token::Backslash(inner) => inner.position.clone(),
            Token::Dot(inner) => inner.position.clone(),
            Token::Underscore(inner) => inner.position.clone(),
            Token::Colon(inner) => inner.position.clone(),
            Token::DoubleColon(inner) => inner.position.clone(),
            Token::Arrow(inner) => inner.position.clone(),
            Token::LParen(inner) => inner.position.clone(),
            Token::RParen(inner) => inner.position.clone(),
        }
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match self {
            Token::Ident(inner) => format!("identifier '{}'", inner.value),
            Token::Backslash(_) => "'\\'".to_string(),
            Token::Dot(_) => "'.'".to_string(),
            Token::Underscore(_) => "'_'".to_string(),
            Token::Colon(_) => "':'".to_string(),
            Token::DoubleColon(_) => "'::'".to_string(),
            Token::Arrow(_) => "'->'".to_string(),
            Token::LParen(_) => "'('".to_string(),
            Token::RParen(_) => "')'".to_string(),
        }
    }
}
