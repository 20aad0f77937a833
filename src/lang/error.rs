use super::LineNumber;

/// ## Interpreter error
///
/// Every failure in the interpreter travels as one of these, from the
/// command that raised it all the way back to the top-level loop.

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident @ $ch:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).with_char($ch)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn detail(&self) -> &str {
        &self.message
    }

    /// Errors that end a command string without being reported.
    pub fn is_silent(&self) -> bool {
        matches!(self.code, ErrorCode::Stopped | ErrorCode::Exit)
    }

    /// Attaches a line number unless an inner command buffer already did.
    pub fn in_line_number(self, line: usize) -> Error {
        if self.line_number.is_some() {
            return self;
        }
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }

    pub fn with_char(self, ch: u8) -> Error {
        self.message(format!("'{}'", printable(ch)))
    }
}

/// Renders a byte the way TECO echoes it: control codes as `^X`,
/// ESC as `$`.
pub fn printable(ch: u8) -> String {
    match ch {
        0x1b => "$".to_string(),
        0x00..=0x1f => format!("^{}", (ch + b'@') as char),
        0x7f => "^?".to_string(),
        0x80..=0xff => format!("[{:02X}]", ch),
        _ => (ch as char).to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Syntax
    IllegalCommand,
    IllegalEChar,
    IllegalFChar,
    IllegalCaret,
    IllegalQuote,
    IllegalNumber,
    IllegalRegister,
    IllegalDelimiter,
    IllegalModifier,
    IllegalRadix,
    Unterminated,
    IllFormed,
    NoArgComplement,
    // Structure
    MissingRightParen,
    MissingLeftParen,
    MissingRightAngle,
    NotInLoop,
    SemiNotInLoop,
    MissingApostrophe,
    MissingQuote,
    DuplicateTag,
    MissingTag,
    InvalidLocation,
    BadNesting,
    // Arguments
    BadArguments,
    NoArgument,
    NoArgComma,
    NoArgEquals,
    NoArgQuote,
    NoArgSemi,
    NoArgU,
    // Resources
    PushDownOverflow,
    // Runtime
    DivisionByZero,
    Overflow,
    CantPop,
    PointerOffPage,
    NotImplemented,
    // Environment
    FileNotFound,
    SystemError,
    // Control
    Interrupted,
    Stopped,
    Exit,
}

impl ErrorCode {
    pub fn mnemonic(&self) -> &'static str {
        use ErrorCode::*;
        match self {
            IllegalCommand => "ILL",
            IllegalEChar => "IEC",
            IllegalFChar => "IFC",
            IllegalCaret => "IUC",
            IllegalQuote => "IQC",
            IllegalNumber => "ILN",
            IllegalRegister => "IQN",
            IllegalDelimiter => "IDL",
            IllegalModifier => "MOD",
            IllegalRadix => "IRA",
            Unterminated => "UTC",
            IllFormed => "IFE",
            NoArgComplement => "NAB",
            MissingRightParen => "MRP",
            MissingLeftParen => "MLP",
            MissingRightAngle => "MRA",
            NotInLoop => "BNI",
            SemiNotInLoop => "SNI",
            MissingApostrophe => "MAP",
            MissingQuote => "MSC",
            DuplicateTag => "DUP",
            MissingTag => "TAG",
            InvalidLocation => "LOC",
            BadNesting => "NST",
            BadArguments => "ARG",
            NoArgument => "NON",
            NoArgComma => "NAC",
            NoArgEquals => "NAE",
            NoArgQuote => "NAQ",
            NoArgSemi => "NAS",
            NoArgU => "NAU",
            PushDownOverflow => "PDO",
            DivisionByZero => "DIV",
            Overflow => "OVF",
            CantPop => "CPQ",
            PointerOffPage => "POP",
            NotImplemented => "NYI",
            FileNotFound => "FNF",
            SystemError => "ERR",
            Interrupted => "XAB",
            Stopped => "XIT",
            Exit => "EXT",
        }
    }

    pub fn description(&self) -> &'static str {
        use ErrorCode::*;
        match self {
            IllegalCommand => "Illegal command",
            IllegalEChar => "Illegal E character",
            IllegalFChar => "Illegal F character",
            IllegalCaret => "Illegal character following ^",
            IllegalQuote => "Illegal quote character",
            IllegalNumber => "Illegal number",
            IllegalRegister => "Illegal Q-register name",
            IllegalDelimiter => "Illegal text delimiter",
            IllegalModifier => "Illegal modifier",
            IllegalRadix => "Illegal radix argument to ^R",
            Unterminated => "Unterminated command",
            IllFormed => "Ill-formed numeric expression",
            NoArgComplement => "No argument before ^_",
            MissingRightParen => "Missing right parenthesis",
            MissingLeftParen => "Missing left parenthesis",
            MissingRightAngle => "Missing right angle bracket",
            NotInLoop => "> not in iteration",
            SemiNotInLoop => "; not in iteration",
            MissingApostrophe => "Missing apostrophe",
            MissingQuote => "Missing start of conditional",
            DuplicateTag => "Duplicate tag",
            MissingTag => "Missing tag",
            InvalidLocation => "Invalid location for tag",
            BadNesting => "Improper nesting of loop and conditional",
            BadArguments => "Improper arguments",
            NoArgument => "Missing n argument",
            NoArgComma => "No argument before ,",
            NoArgEquals => "No argument before =",
            NoArgQuote => "No argument before \"",
            NoArgSemi => "No argument before ;",
            NoArgU => "No argument before U",
            PushDownOverflow => "Push-down list overflow",
            DivisionByZero => "Division by zero",
            Overflow => "Arithmetic overflow",
            CantPop => "Can't pop into Q-register",
            PointerOffPage => "Attempt to move pointer off page",
            NotImplemented => "Not yet implemented",
            FileNotFound => "File not found",
            SystemError => "System error",
            Interrupted => "Execution aborted",
            Stopped => "Execution stopped",
            Exit => "Exit",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "?{} {}", self.code.mnemonic(), self.code.description())?;
        if !self.message.is_empty() {
            write!(f, " {}", self.message)?;
        }
        match self.line_number {
            Some(line) if line > 1 => write!(f, " IN LINE {}", line),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(error!(IllegalCommand @ b'Y').to_string(), "?ILL Illegal command 'Y'");
        assert_eq!(
            error!(IllegalCaret @ 0x1b).to_string(),
            "?IUC Illegal character following ^ '$'"
        );
        assert_eq!(
            error!(MissingTag, 3; "!top!").to_string(),
            "?TAG Missing tag !top! IN LINE 3"
        );
    }

    #[test]
    fn test_inner_line_number_wins() {
        let e = error!(NotInLoop, 4).in_line_number(1);
        assert_eq!(e.line_number(), Some(4));
    }
}
