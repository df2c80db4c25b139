use lexo_types::{ParseModeError, SearchMode};

/// A search that passed validation and may be handed to the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub word: String,
    pub mode: SearchMode,
}

impl SearchRequest {
    /// Rejects blank words, except for modes that ignore the word
    pub fn new(word: impl Into<String>, mode: SearchMode) -> Result<Self, InputError> {
        if !mode.takes_word() {
            return Ok(Self {
                word: String::new(),
                mode,
            });
        }

        let word = word.into();
        if word.trim().is_empty() {
            return Err(InputError::EmptyWord(mode));
        }

        Ok(Self { word, mode })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(SearchRequest),
    SelectMode(SearchMode),
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Please type a word to search ({0} mode)")]
    EmptyWord(SearchMode),

    #[error(transparent)]
    UnknownMode(#[from] ParseModeError),

    #[error("Unknown command: :{0} (try :help)")]
    UnknownCommand(String),
}

pub const HELP: &str = "\
Type a word and press enter to search it in the current mode.

  :mode <name>     switch mode: exact, prefix, suffix, contains, similar
  :<mode> <word>   search once in another mode, e.g. :prefix cas
  :random          look up a random word
  :wotd            show the word of the day
  :reload          clear everything on screen
  :help            show this text
  :quit            leave
";

/// Turn one line typed by the user into a command.
/// `mode` is the currently selected mode, used for plain words.
pub fn parse_line(line: &str, mode: SearchMode) -> Result<Command, InputError> {
    let line = line.trim();

    let Some(rest) = line.strip_prefix(':') else {
        return SearchRequest::new(line, mode).map(Command::Search);
    };

    let (name, argument) = match rest.split_once(char::is_whitespace) {
        Some((name, argument)) => (name, argument.trim()),
        None => (rest, ""),
    };

    match name.to_lowercase().as_str() {
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "h" | "help" | "?" => Ok(Command::Help),
        "reload" => Ok(Command::Reload),
        "mode" => Ok(Command::SelectMode(argument.parse()?)),
        other => {
            let Ok(picked) = other.parse::<SearchMode>() else {
                return Err(InputError::UnknownCommand(other.to_string()));
            };

            // Like the mode buttons: word-less modes search right away
            if picked.takes_word() && argument.is_empty() {
                Ok(Command::SelectMode(picked))
            } else {
                SearchRequest::new(argument, picked).map(Command::Search)
            }
        }
    }
}
