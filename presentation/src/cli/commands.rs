//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use edupulse_domain::TaskKind;
use std::path::PathBuf;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Formatted for the terminal
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for edupulse_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => edupulse_domain::OutputFormat::Text,
            OutputFormat::Json => edupulse_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for edupulse
#[derive(Parser, Debug)]
#[command(name = "edupulse")]
#[command(author, version, about = "Study assistant backed by IBM watsonx.ai Granite models")]
#[command(long_about = r#"
EduPulse turns study requests into prompts for a Granite model on watsonx.ai:
learning advice, code mentoring, summaries, study plans, Q&A, wellbeing
support, translation, vocabulary, study resources and lecture summaries.

Credentials come from the config file or the environment:
  WATSONX_APIKEY, WATSONX_PROJECT_ID, WATSONX_URL

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./edupulse.toml     Project-level config
3. ~/.config/edupulse/config.toml   Global config

Example:
  edupulse learn "How do I learn calculus?"
  edupulse plan --subject Math --goal "Pass the final" --hours 8 --save .
  edupulse translate --to es "Good morning"
  edupulse session --task question-answer
"#)]
pub struct Cli {
    /// What to do; starts an interactive session when omitted
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write diagnostics to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Free text given inline or read from a file.
#[derive(Args, Debug, Clone, Default)]
pub struct TextInput {
    /// The text itself
    pub text: Option<String>,

    /// Read the text from a file instead
    #[arg(short, long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask the learning assistant for advice
    Learn {
        /// Your question, or the subject that fills a template
        question: Option<String>,
        /// Start from a quick template: 1 learning plan, 2 explain a
        /// concept, 3 study techniques, 4 find resources
        #[arg(long, value_name = "N", requires = "question")]
        template: Option<usize>,
    },

    /// Get a code review, explanation or best practices
    Code {
        #[command(flatten)]
        code: TextInput,
        /// Programming language
        #[arg(short, long)]
        language: Option<String>,
        /// Code Review, Code Explanation, Best Practices or Code Generation
        #[arg(short, long)]
        task: Option<String>,
    },

    /// Reformat code following the language's conventions
    FormatCode {
        #[command(flatten)]
        code: TextInput,
        /// Programming language
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Summarize a document
    Summarize {
        #[command(flatten)]
        document: TextInput,
        /// Concise, Detailed, Bullet Points, Academic or Simple Language
        #[arg(short, long)]
        style: Option<String>,
        /// Target length as a percentage of the original (10-50)
        #[arg(long)]
        length: Option<i64>,
    },

    /// Build a personalized study plan
    Plan {
        #[arg(long)]
        subject: Option<String>,
        /// What you want to achieve
        #[arg(long)]
        goal: Option<String>,
        /// Plan length, e.g. "2 weeks"
        #[arg(long)]
        duration: Option<String>,
        /// Current level, e.g. Beginner or Advanced
        #[arg(long)]
        level: Option<String>,
        /// Study hours per week (1-40)
        #[arg(long)]
        hours: Option<i64>,
        /// Preferred study times, comma separated
        #[arg(long = "study-times", value_delimiter = ',')]
        study_times: Vec<String>,
        /// Write the plan into this directory
        #[arg(long, value_name = "DIR")]
        save: Option<PathBuf>,
    },

    /// Ask a question; earlier answers in the session are used as context
    Ask {
        /// Your question
        question: Option<String>,
        /// Use one of the built-in example questions (1-5) instead
        #[arg(long, value_name = "N", conflicts_with = "question")]
        example: Option<usize>,
    },

    /// Get support based on your mood and stress level
    Support {
        /// Very Low, Low, Neutral, Good or Very Good
        #[arg(long)]
        mood: Option<String>,
        /// Stress level (0-10)
        #[arg(long)]
        stress: Option<i64>,
    },

    /// Get guidance on a wellbeing topic
    Guidance {
        /// e.g. "Dealing with Test Anxiety"
        #[arg(long)]
        topic: Option<String>,
    },

    /// Translate text between languages
    Translate {
        #[command(flatten)]
        text: TextInput,
        /// Source language (name or ISO code)
        #[arg(long)]
        from: Option<String>,
        /// Target language (name or ISO code)
        #[arg(long)]
        to: Option<String>,
    },

    /// Ask in one language and get the answer in another
    Multilang {
        /// Your question
        question: Option<String>,
        /// Language of the question
        #[arg(long = "input-language")]
        input_language: Option<String>,
        /// Language of the answer
        #[arg(long = "output-language")]
        output_language: Option<String>,
    },

    /// Build a vocabulary list
    Vocab {
        /// Academic, Science, Technology, Mathematics, Literature or History
        #[arg(long)]
        topic: Option<String>,
        /// Language of the vocabulary
        #[arg(long)]
        language: Option<String>,
    },

    /// Generate a study resource
    Resource(ResourceArgs),

    /// Summarize a recorded lecture from its transcript
    Lecture {
        /// Video URL or id
        url: Option<String>,
        /// Summary style, e.g. "Bullet Points"
        #[arg(short, long)]
        style: Option<String>,
        /// Target length as a percentage of the transcript (10-50)
        #[arg(long)]
        length: Option<i64>,
    },

    /// Start an interactive session
    Session {
        /// Task to start with
        #[arg(long)]
        task: Option<TaskKind>,
    },
}

#[derive(Args, Debug, Default)]
pub struct ResourceArgs {
    #[arg(long)]
    pub subject: Option<String>,
    /// Topics to cover, comma separated
    #[arg(long, value_delimiter = ',')]
    pub topics: Vec<String>,
    /// Practice Exam, Flashcards, Study Notes, Mind Map or Quiz
    #[arg(long = "kind")]
    pub resource: Option<String>,
    #[arg(long)]
    pub difficulty: Option<String>,
    /// Education level
    #[arg(long)]
    pub education: Option<String>,

    /// Practice exam: number of questions (5-50)
    #[arg(long, help_heading = "Practice Exam")]
    pub question_count: Option<i64>,
    /// Practice exam: time limit in minutes (15-180)
    #[arg(long, help_heading = "Practice Exam")]
    pub time_limit: Option<i64>,
    /// Practice exam: question types, comma separated
    #[arg(long, value_delimiter = ',', help_heading = "Practice Exam")]
    pub question_types: Vec<String>,

    /// Flashcards: number of cards (5-50)
    #[arg(long, help_heading = "Flashcards")]
    pub card_count: Option<i64>,
    /// Flashcards: include examples
    #[arg(long, help_heading = "Flashcards")]
    pub include_examples: Option<bool>,

    /// Study notes: Outline, Detailed Notes, Summary or Cornell Notes
    #[arg(long, help_heading = "Study Notes")]
    pub note_format: Option<String>,
    /// Study notes: include diagram suggestions
    #[arg(long, help_heading = "Study Notes")]
    pub include_diagrams: Option<bool>,

    /// Mind map: central topic (defaults to the subject)
    #[arg(long, help_heading = "Mind Map")]
    pub central_topic: Option<String>,
    /// Mind map: depth (1-4)
    #[arg(long, help_heading = "Mind Map")]
    pub depth: Option<i64>,

    /// Quiz: number of questions (5-30)
    #[arg(long, help_heading = "Quiz")]
    pub quiz_questions: Option<i64>,
    /// Quiz: Multiple Choice, Fill in the Blanks or Mixed
    #[arg(long, help_heading = "Quiz")]
    pub quiz_type: Option<String>,
    /// Quiz: include answer explanations
    #[arg(long, help_heading = "Quiz")]
    pub include_explanations: Option<bool>,

    /// Write the resource into this directory
    #[arg(long, value_name = "DIR")]
    pub save: Option<PathBuf>,
}
