use thiserror::Error;

/// One parsed line of the command language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create { width: i32, height: i32 },
    Line { x1: i32, y1: i32, x2: i32, y2: i32 },
    Rectangle { x1: i32, y1: i32, x2: i32, y2: i32 },
    Print,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (try 'H' for help)")]
    Unknown(String),

    #[error("'{command}' expects {expected} argument(s), got {found}")]
    Arity {
        command: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("'{0}' is not an integer")]
    NotInteger(String),
}

pub struct CommandParser;

impl CommandParser {
    pub fn parse(input: &str) -> Result<Command, ParseError> {
        let mut parts = input.split_whitespace();
        let Some(keyword) = parts.next() else {
            return Err(ParseError::Empty);
        };
        let args: Vec<&str> = parts.collect();

        match keyword.to_ascii_uppercase().as_str() {
            "C" => {
                let [width, height] = integers::<2>("C", &args)?;
                Ok(Command::Create { width, height })
            }
            "L" => {
                let [x1, y1, x2, y2] = integers::<4>("L", &args)?;
                Ok(Command::Line { x1, y1, x2, y2 })
            }
            "R" => {
                let [x1, y1, x2, y2] = integers::<4>("R", &args)?;
                Ok(Command::Rectangle { x1, y1, x2, y2 })
            }
            "P" => integers::<0>("P", &args).map(|_| Command::Print),
            "H" | "HELP" => integers::<0>("H", &args).map(|_| Command::Help),
            "Q" | "QUIT" => integers::<0>("Q", &args).map(|_| Command::Quit),
            _ => Err(ParseError::Unknown(keyword.to_string())),
        }
    }
}

/// Parse exactly `N` integer arguments. Arity is checked before any value.
fn integers<const N: usize>(command: &'static str, args: &[&str]) -> Result<[i32; N], ParseError> {
    if args.len() != N {
        return Err(ParseError::Arity {
            command,
            expected: N,
            found: args.len(),
        });
    }

    let mut out = [0; N];
    for (slot, raw) in out.iter_mut().zip(args) {
        *slot = raw
            .parse::<i32>()
            .map_err(|_| ParseError::NotInteger(raw.to_string()))?;
    }
    Ok(out)
}
