//! Slash command parsing for the interactive session

/// One line typed at the session prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    Help,
    /// List all tasks
    Tasks,
    /// Switch task; clears the fields set so far
    Task(String),
    Set { name: String, value: String },
    Unset(String),
    Fields,
    /// History of the current task, or of the named one
    History(Option<String>),
    /// Clear the current task's history, or everything with `all`
    Clear { all: bool },
    /// Run the current task with the fields set so far
    Run,
    /// List the learning assistant's quick templates
    Templates,
    /// Ask the learning assistant from quick template `number`
    Template { number: String, subject: String },
    Unknown(String),
    /// Free text for the current task's main field
    Input(String),
}

impl ReplCommand {
    /// Parse a trimmed, non-empty line.
    pub fn parse(line: &str) -> Self {
        if !line.starts_with('/') {
            return ReplCommand::Input(line.to_string());
        }

        let (command, args) = match line.split_once(char::is_whitespace) {
            Some((command, args)) => (command, args.trim()),
            None => (line, ""),
        };

        match command {
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/tasks" => ReplCommand::Tasks,
            "/task" | "/t" if !args.is_empty() => ReplCommand::Task(args.to_string()),
            "/task" | "/t" => ReplCommand::Tasks,
            "/set" => match args.split_once(char::is_whitespace) {
                Some((name, value)) => ReplCommand::Set {
                    name: name.to_string(),
                    value: value.trim().to_string(),
                },
                None if !args.is_empty() => ReplCommand::Unset(args.to_string()),
                None => ReplCommand::Fields,
            },
            "/unset" if !args.is_empty() => ReplCommand::Unset(args.to_string()),
            "/fields" => ReplCommand::Fields,
            "/history" => {
                ReplCommand::History((!args.is_empty()).then(|| args.to_string()))
            }
            "/clear" => ReplCommand::Clear {
                all: args == "all",
            },
            "/run" | "/go" => ReplCommand::Run,
            "/templates" => ReplCommand::Templates,
            "/template" => match args.split_once(char::is_whitespace) {
                Some((number, subject)) => ReplCommand::Template {
                    number: number.to_string(),
                    subject: subject.trim().to_string(),
                },
                None if !args.is_empty() => ReplCommand::Template {
                    number: args.to_string(),
                    subject: String::new(),
                },
                None => ReplCommand::Templates,
            },
            _ => ReplCommand::Unknown(command.to_string()),
        }
    }
}
