use std::{convert::From, fmt};

/// Simple custom Error for the table generator
pub struct Error {
    pub kind: ErrorKind,
    pub ctx: Option<String>,
    pub msg: String,
}

#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    /// instruction set description not found or unreadable
    MissingResource,
    /// instruction record violates the description schema
    MalformedRecord,
    /// operand name matches none of the recognized vocabularies
    UnrecognizedOperand,
    /// underlying io error
    IO,
    /// catch-all for other errors
    General,
}

impl Error {
    pub fn new(kind: ErrorKind, ctx: Option<&str>, message: &str) -> Error {
        Error {
            kind,
            ctx: ctx.map(String::from),
            msg: String::from(message),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self { Error::new(ErrorKind::IO, None, e.to_string().as_str()) }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}: {}", red!("sm83tab::Error"), self.msg) }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut res = write!(f, "{}", self.msg);
        if res.is_ok() {
            if let Some(ctx) = self.ctx.as_ref() {
                res = write!(f, "\nContext: opcode {}", ctx);
            }
        }
        res
    }
}
impl std::error::Error for Error {}
