use std::fmt;
use std::path::PathBuf;

pub const MAX_LINE_LEN: usize = 2048;

const COMMENT_CHAR: char = '#';
const INPUT_REDIRECT: &str = "<";
const OUTPUT_REDIRECT: &str = ">";
const BACKGROUND_OP: &str = "&";
const PID_TOKEN: &str = "$$";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub arguments: Vec<String>,
    pub input_redirect: Option<PathBuf>,
    pub output_redirect: Option<PathBuf>,
    pub background: bool,
}

impl CommandRequest {
    pub fn program(&self) -> &str {
        self.arguments.first().map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    Comment,
    LineTooLong { length: usize },
    MissingRedirectTarget { operator: char },
}

impl ParseError {
    pub fn is_silent(&self) -> bool {
        matches!(self, ParseError::Empty | ParseError::Comment)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty command line"),
            ParseError::Comment => write!(f, "comment line"),
            ParseError::LineTooLong { length } => write!(
                f,
                "command line is {} bytes, at most {} are accepted",
                length, MAX_LINE_LEN
            ),
            ParseError::MissingRedirectTarget { operator } => {
                write!(f, "expected a file name after '{}'", operator)
            }
        }
    }
}

pub fn parse(line: &str, shell_pid: u32) -> Result<CommandRequest, ParseError> {
    if line.len() > MAX_LINE_LEN {
        return Err(ParseError::LineTooLong { length: line.len() });
    }

    let mut tokens = line.split_whitespace().peekable();
    let program = tokens.next().ok_or(ParseError::Empty)?;
    if program.starts_with(COMMENT_CHAR) {
        return Err(ParseError::Comment);
    }

    // The program name is taken verbatim; token classification starts
    // with the second token.
    let mut request = CommandRequest {
        arguments: vec![program.to_string()],
        input_redirect: None,
        output_redirect: None,
        background: false,
    };

    while let Some(token) = tokens.next() {
        match token {
            INPUT_REDIRECT => {
                request.input_redirect = Some(redirect_target(tokens.next(), '<')?);
            }
            OUTPUT_REDIRECT => {
                request.output_redirect = Some(redirect_target(tokens.next(), '>')?);
            }
            // & backgrounds the command only as the final token;
            // anywhere else it is an ordinary argument.
            BACKGROUND_OP if tokens.peek().is_none() => request.background = true,
            PID_TOKEN => request.arguments.push(shell_pid.to_string()),
            _ => request.arguments.push(token.to_string()),
        }
    }

    Ok(request)
}

fn redirect_target(token: Option<&str>, operator: char) -> Result<PathBuf, ParseError> {
    token
        .map(PathBuf::from)
        .ok_or(ParseError::MissingRedirectTarget { operator })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PID: u32 = 4242;

    fn parse_ok(line: &str) -> CommandRequest {
        parse(line, PID).unwrap()
    }

    #[test]
    fn test_parse_bare_command() {
        let request = parse_ok("ls");
        assert_eq!(
            request,
            CommandRequest {
                arguments: vec!["ls".to_string()],
                input_redirect: None,
                output_redirect: None,
                background: false,
            }
        );
    }

    #[test]
    fn test_parse_full_form() {
        let request = parse_ok("sort -r < in.txt > out.txt &");
        assert_eq!(
            request,
            CommandRequest {
                arguments: vec!["sort".to_string(), "-r".to_string()],
                input_redirect: Some(PathBuf::from("in.txt")),
                output_redirect: Some(PathBuf::from("out.txt")),
                background: true,
            }
        );
    }

    #[test]
    fn test_trailing_ampersand_backgrounds() {
        let request = parse_ok("sleep 10 &");
        assert!(request.background);
        assert_eq!(
            request.arguments,
            vec!["sleep".to_string(), "10".to_string()]
        );
    }

    #[test]
    fn test_ampersand_mid_line_is_an_argument() {
        let request = parse_ok("echo & done");
        assert!(!request.background);
        assert_eq!(
            request.arguments,
            vec!["echo".to_string(), "&".to_string(), "done".to_string()]
        );
    }

    #[test]
    fn test_pid_token_becomes_argument() {
        let request = parse_ok("echo $$");
        assert_eq!(request.arguments, vec!["echo".to_string(), PID.to_string()]);
    }

    #[test]
    fn test_pid_token_must_stand_alone() {
        let request = parse_ok("echo pre$$post $$$");
        assert_eq!(
            request.arguments,
            vec![
                "echo".to_string(),
                "pre$$post".to_string(),
                "$$$".to_string()
            ]
        );
    }

    #[test]
    fn test_program_token_is_never_expanded() {
        let request = parse_ok("$$");
        assert_eq!(request.arguments, vec!["$$".to_string()]);
        assert_eq!(request.program(), "$$");
    }

    #[test]
    fn test_blank_lines_are_empty() {
        assert_eq!(parse("", PID), Err(ParseError::Empty));
        assert_eq!(parse("   \t  ", PID), Err(ParseError::Empty));
    }

    #[test]
    fn test_comment_lines() {
        assert_eq!(parse("# a comment", PID), Err(ParseError::Comment));
        assert_eq!(parse("   #indented", PID), Err(ParseError::Comment));
        // Only the first token opens a comment.
        assert_eq!(
            parse_ok("echo #tag").arguments,
            vec!["echo".to_string(), "#tag".to_string()]
        );
    }

    #[test]
    fn test_overlong_line_is_rejected() {
        let line = "a".repeat(MAX_LINE_LEN + 1);
        assert_eq!(
            parse(&line, PID),
            Err(ParseError::LineTooLong {
                length: MAX_LINE_LEN + 1
            })
        );
        assert!(parse(&"a".repeat(MAX_LINE_LEN), PID).is_ok());
    }

    #[test]
    fn test_missing_redirect_target() {
        assert_eq!(
            parse("cat <", PID),
            Err(ParseError::MissingRedirectTarget { operator: '<' })
        );
        assert_eq!(
            parse("cat one two >", PID),
            Err(ParseError::MissingRedirectTarget { operator: '>' })
        );
    }

    #[test]
    fn test_repeated_redirect_keeps_last_target() {
        let request = parse_ok("sort < one < two > three > four");
        assert_eq!(request.input_redirect, Some(PathBuf::from("two")));
        assert_eq!(request.output_redirect, Some(PathBuf::from("four")));
    }

    #[test]
    fn test_silent_classification() {
        assert!(ParseError::Empty.is_silent());
        assert!(ParseError::Comment.is_silent());
        assert!(!ParseError::LineTooLong { length: 3000 }.is_silent());
        assert!(!ParseError::MissingRedirectTarget { operator: '<' }.is_silent());
    }
}
