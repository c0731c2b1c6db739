//! REPL (Read-Eval-Print Loop) for interactive sessions

use super::command::ReplCommand;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use colored::Colorize;
use edupulse_application::{
    AssistError, LectureSummary, NoProgress, ProgressNotifier, RunMultilingualUseCase,
    RunTaskUseCase, SummarizeLectureUseCase,
};
use edupulse_domain::prompt::template::learning_template;
use edupulse_domain::{
    InteractionRecord, SessionState, TaskDefinition, TaskFields, TaskKind, ValidationError,
};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use tracing::debug;

/// What a successful run produced.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Record(InteractionRecord),
    Lecture(LectureSummary),
}

/// Interactive session REPL
///
/// Holds one [`SessionState`] for the whole session; every task's history
/// lives there and feeds Q&A context.
pub struct SessionRepl {
    run_task: RunTaskUseCase,
    multilingual: RunMultilingualUseCase,
    lecture: SummarizeLectureUseCase,
    state: SessionState,
    task: TaskKind,
    fields: TaskFields,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl SessionRepl {
    pub fn new(
        run_task: RunTaskUseCase,
        multilingual: RunMultilingualUseCase,
        lecture: SummarizeLectureUseCase,
    ) -> Self {
        Self {
            run_task,
            multilingual,
            lecture,
            state: SessionState::new(),
            task: TaskKind::LearningAssistant,
            fields: TaskFields::new(),
            show_progress: true,
            history_file: dirs::data_dir().map(|p| p.join("edupulse").join("history.txt")),
        }
    }

    /// Task selected at startup
    pub fn with_task(mut self, task: TaskKind) -> Self {
        self.task = task;
        self
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Line-editor history location; `None` keeps history in memory only
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    pub fn task(&self) -> TaskKind {
        self.task
    }

    pub fn fields(&self) -> &TaskFields {
        &self.fields
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let prompt = format!("{}> ", self.task.as_str());
            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    if !self.handle_line(line).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Handle one line. Returns false when the session should end.
    async fn handle_line(&mut self, line: &str) -> bool {
        match ReplCommand::parse(line) {
            ReplCommand::Quit => {
                println!("Bye!");
                return false;
            }
            ReplCommand::Help => self.print_help(),
            ReplCommand::Tasks => print!("{}", ConsoleFormatter::format_task_list(self.task)),
            ReplCommand::Task(name) => match self.switch_task(&name) {
                Ok(()) => {
                    let def = TaskDefinition::of(self.task);
                    println!("{} {}", "Switched to".green(), def.title.bold());
                    print!("{}", ConsoleFormatter::format_fields(self.task, &self.fields));
                }
                Err(e) => println!("{}", ConsoleFormatter::format_notice(&e)),
            },
            ReplCommand::Set { name, value } => {
                self.fields.set(name, value);
            }
            ReplCommand::Unset(name) => {
                self.fields.remove(&name);
            }
            ReplCommand::Fields => {
                print!("{}", ConsoleFormatter::format_fields(self.task, &self.fields))
            }
            ReplCommand::History(name) => {
                let kind = match name.map(|n| n.parse::<TaskKind>()).transpose() {
                    Ok(kind) => kind.unwrap_or(self.task).history_group(),
                    Err(e) => {
                        println!("{}", ConsoleFormatter::format_notice(&e.into()));
                        return true;
                    }
                };
                print!(
                    "{}",
                    ConsoleFormatter::format_history(kind, self.state.history(kind))
                );
            }
            ReplCommand::Clear { all } => {
                if all {
                    self.state.clear_all();
                    println!("{}", "All session history cleared.".green());
                } else {
                    self.state.clear(self.task.history_group());
                    println!(
                        "{}",
                        format!("{} history cleared.", TaskDefinition::of(self.task).title)
                            .green()
                    );
                }
            }
            ReplCommand::Run => self.submit_and_print().await,
            ReplCommand::Templates => print!("{}", ConsoleFormatter::format_templates()),
            ReplCommand::Template { number, subject } => {
                match self.apply_template(&number, &subject) {
                    Ok(()) => self.submit_and_print().await,
                    Err(e) => println!("{}", ConsoleFormatter::format_notice(&e)),
                }
            }
            ReplCommand::Input(text) => {
                if self.accept_input(text) {
                    self.submit_and_print().await;
                } else {
                    println!(
                        "{} {} takes no free text. Use {} to set fields and {} to run it.",
                        "?".yellow(),
                        self.task.as_str(),
                        "/set <field> <value>".cyan(),
                        "/run".cyan()
                    );
                }
            }
            ReplCommand::Unknown(command) => {
                println!("{} Unknown command: {}", "?".yellow(), command);
                println!("Type {} for available commands", "/help".cyan());
            }
        }
        true
    }

    /// Change the current task and start from empty fields.
    pub fn switch_task(&mut self, name: &str) -> Result<(), AssistError> {
        self.task = name.parse::<TaskKind>()?;
        self.fields = TaskFields::new();
        debug!("Switched to task {}", self.task);
        Ok(())
    }

    /// Fill the learning assistant's question from a quick template,
    /// switching to that task (and clearing fields) when needed.
    pub fn apply_template(&mut self, number: &str, subject: &str) -> Result<(), AssistError> {
        let number = number
            .parse::<usize>()
            .map_err(|_| ValidationError::NotANumber {
                field: "template".to_string(),
                value: number.to_string(),
            })?;
        let question = learning_template(number, subject)?;

        if self.task != TaskKind::LearningAssistant {
            self.task = TaskKind::LearningAssistant;
            self.fields = TaskFields::new();
        }
        self.fields.set("question", question);
        Ok(())
    }

    /// Field that free text fills for the current task.
    fn input_field(&self) -> Option<&'static str> {
        match self.task {
            TaskKind::LectureSummary => Some("url"),
            kind => TaskDefinition::of(kind).input_field,
        }
    }

    /// Put free text into the current task's main field. Returns false when
    /// the task has none.
    pub fn accept_input(&mut self, text: String) -> bool {
        match self.input_field() {
            Some(field) => {
                self.fields.set(field, text);
                true
            }
            None => false,
        }
    }

    /// Run the current task with the current fields.
    ///
    /// The main input field is consumed; other fields stay set for the next
    /// run.
    pub async fn submit(&mut self) -> Result<RunOutcome, AssistError> {
        let fields = self.fields.clone();
        if let Some(field) = self.input_field() {
            self.fields.remove(field);
        }

        let reporter;
        let progress: &dyn ProgressNotifier = if self.show_progress {
            reporter = ProgressReporter::new();
            &reporter
        } else {
            &NoProgress
        };

        match self.task {
            TaskKind::MultiLanguage => self
                .multilingual
                .execute(fields, &mut self.state, progress)
                .await
                .map(RunOutcome::Record),
            TaskKind::LectureSummary => self
                .lecture
                .execute(fields, &mut self.state, progress)
                .await
                .map(RunOutcome::Lecture),
            kind => self
                .run_task
                .execute(kind, fields, &mut self.state, progress)
                .await
                .map(RunOutcome::Record),
        }
    }

    async fn submit_and_print(&mut self) {
        println!();
        match self.submit().await {
            Ok(RunOutcome::Record(record)) => {
                println!("{}", ConsoleFormatter::format_record(&record))
            }
            Ok(RunOutcome::Lecture(summary)) => {
                println!("{}", ConsoleFormatter::format_lecture(&summary))
            }
            Err(e) => println!("{}", ConsoleFormatter::format_notice(&e)),
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "╭─────────────────────────────────────────────╮".cyan());
        println!("{}", "│            EduPulse - Study Session         │".cyan());
        println!("{}", "╰─────────────────────────────────────────────╯".cyan());
        println!();
        let def = TaskDefinition::of(self.task);
        println!("{} {} ({})", "Task:".bold(), def.title, def.description.dimmed());
        println!();
        println!("Type your question or text and press Enter.");
        println!("Commands:");
        println!("  {}    - Show this help", "/help".cyan());
        println!("  {}   - List tasks", "/tasks".cyan());
        println!("  {}    - Exit the session", "/quit".cyan());
        println!();
    }

    fn print_help(&self) {
        println!();
        println!("{}", "Commands:".bold());
        println!("  /help, /h, /?         - Show this help");
        println!("  /tasks                - List tasks");
        println!("  /task <name>          - Switch task (clears fields)");
        println!("  /set <field> <value>  - Set a field for the current task");
        println!("  /set <field>          - Remove a field");
        println!("  /fields               - Show fields for the current task");
        println!("  /run                  - Run the current task with its fields");
        println!("  /templates            - List quick learning templates");
        println!("  /template <n> <topic> - Ask the learning assistant from a template");
        println!("  /history [task]       - Show previous answers, newest first");
        println!("  /clear [all]          - Clear this task's history (or all)");
        println!("  /quit, /exit, /q      - Exit the session");
        println!();
        println!("{}", "Examples:".bold());
        println!("  /task study-plan");
        println!("  /set subject Chemistry");
        println!("  /set goal Pass the midterm");
        println!("  /run");
        println!();
    }
}
