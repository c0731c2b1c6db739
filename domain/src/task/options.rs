//! Closed option sets offered by the task forms.
//!
//! Every choice has a human label (what is shown and what goes into the
//! prompt) and a default that matches the form's initial selection.

use crate::core::string::normalize_label;
use std::fmt::Display;

/// A closed set of labelled options.
pub trait Choice: Copy + Default + Display + Send + Sync + 'static {
    /// All options in display order.
    fn all() -> &'static [Self];

    /// The human-readable label.
    fn label(&self) -> &'static str;

    /// Look an option up by label, ignoring case, spacing and punctuation.
    fn from_label(s: &str) -> Option<Self> {
        let key = normalize_label(s);
        Self::all()
            .iter()
            .copied()
            .find(|c| normalize_label(c.label()) == key)
    }

    /// Comma-separated list of valid labels, for error messages.
    fn expected() -> String {
        Self::all()
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

macro_rules! choice {
    (
        $(#[$meta:meta])*
        $name:ident default $default:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl Choice for $name {
            fn all() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as Choice>::from_label(s).ok_or_else(|| {
                    format!("'{}' is not one of: {}", s, <$name as Choice>::expected())
                })
            }
        }
    };
}

choice! {
    /// Difficulty, also used as "current knowledge level" by the study planner.
    Difficulty default Beginner {
        Beginner => "Beginner",
        Elementary => "Elementary",
        Intermediate => "Intermediate",
        Advanced => "Advanced",
        Expert => "Expert",
    }
}

choice! {
    EducationLevel default HighSchool {
        HighSchool => "High School",
        Undergraduate => "Undergraduate",
        Graduate => "Graduate",
        Professional => "Professional",
    }
}

choice! {
    /// Summary style for documents and lecture transcripts.
    SummaryStyle default Concise {
        Concise => "Concise",
        Detailed => "Detailed",
        BulletPoints => "Bullet Points",
        Academic => "Academic",
        SimpleLanguage => "Simple Language",
    }
}

choice! {
    CodingTask default CodeReview {
        CodeReview => "Code Review",
        DebugHelp => "Debug Help",
        CodeExplanation => "Code Explanation",
        BestPractices => "Best Practices",
        CodeGeneration => "Code Generation",
    }
}

choice! {
    ProgrammingLanguage default Python {
        Python => "Python",
        JavaScript => "JavaScript",
        Java => "Java",
        Cpp => "C++",
        Sql => "SQL",
        Other => "Other",
    }
}

choice! {
    StudyDuration default OneWeek {
        OneWeek => "1 week",
        TwoWeeks => "2 weeks",
        OneMonth => "1 month",
        TwoMonths => "2 months",
        ThreeMonths => "3 months",
        SixMonths => "6 months",
    }
}

choice! {
    StudyTime default Afternoon {
        EarlyMorning => "Early Morning",
        LateMorning => "Late Morning",
        Afternoon => "Afternoon",
        Evening => "Evening",
        Night => "Night",
    }
}

choice! {
    Mood default Neutral {
        VeryLow => "Very Low",
        Low => "Low",
        Neutral => "Neutral",
        Good => "Good",
        VeryGood => "Very Good",
    }
}

choice! {
    SupportTopic default AcademicStress {
        AcademicStress => "Managing Academic Stress",
        TestAnxiety => "Dealing with Test Anxiety",
        StudyLifeBalance => "Balancing Study and Life",
        SleepHabits => "Improving Sleep Habits",
        SelfConfidence => "Building Self-Confidence",
    }
}

choice! {
    VocabularyTopic default Academic {
        Academic => "Academic",
        Science => "Science",
        Technology => "Technology",
        Mathematics => "Mathematics",
        Literature => "Literature",
        History => "History",
    }
}

choice! {
    Language default English {
        English => "English",
        Spanish => "Spanish",
        French => "French",
        German => "German",
        Chinese => "Chinese",
        Hindi => "Hindi",
        Arabic => "Arabic",
        Japanese => "Japanese",
        Korean => "Korean",
        Russian => "Russian",
    }
}

impl Language {
    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Chinese => "zh",
            Language::Hindi => "hi",
            Language::Arabic => "ar",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Russian => "ru",
        }
    }

    /// Resolve either a label ("Spanish") or an ISO code ("es").
    pub fn parse(s: &str) -> Option<Self> {
        Self::from_label(s).or_else(|| {
            Self::all()
                .iter()
                .copied()
                .find(|l| l.code().eq_ignore_ascii_case(s.trim()))
        })
    }

    pub fn is_english(&self) -> bool {
        matches!(self, Language::English)
    }
}

choice! {
    ResourceKind default PracticeExam {
        PracticeExam => "Practice Exam",
        Flashcards => "Flashcards",
        StudyNotes => "Study Notes",
        MindMap => "Mind Map",
        Quiz => "Quiz",
    }
}

choice! {
    QuestionType default MultipleChoice {
        MultipleChoice => "Multiple Choice",
        TrueFalse => "True/False",
        ShortAnswer => "Short Answer",
        Essay => "Essay",
        ProblemSolving => "Problem Solving",
    }
}

choice! {
    NoteFormat default Outline {
        Outline => "Outline",
        DetailedNotes => "Detailed Notes",
        Summary => "Summary",
        CornellNotes => "Cornell Notes",
    }
}

choice! {
    QuizType default MultipleChoice {
        MultipleChoice => "Multiple Choice",
        FillInTheBlanks => "Fill in the Blanks",
        Mixed => "Mixed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_initial_selection() {
        assert_eq!(Difficulty::default(), Difficulty::Beginner);
        assert_eq!(EducationLevel::default().label(), "High School");
        assert_eq!(StudyTime::default(), StudyTime::Afternoon);
        assert_eq!(Mood::default(), Mood::Neutral);
        assert_eq!(ResourceKind::default(), ResourceKind::PracticeExam);
    }

    #[test]
    fn test_from_label_is_lenient() {
        assert_eq!(
            SummaryStyle::from_label("bullet-points"),
            Some(SummaryStyle::BulletPoints)
        );
        assert_eq!(
            ProgrammingLanguage::from_label("c++"),
            Some(ProgrammingLanguage::Cpp)
        );
        assert_eq!(
            QuestionType::from_label("true/false"),
            Some(QuestionType::TrueFalse)
        );
        assert_eq!(StudyDuration::from_label("2 Weeks"), Some(StudyDuration::TwoWeeks));
        assert_eq!(Mood::from_label("ecstatic"), None);
    }

    #[test]
    fn test_from_str_error_lists_options() {
        let err = "Klingon".parse::<Language>().unwrap_err();
        assert!(err.contains("Klingon"));
        assert!(err.contains("Spanish"));
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::all().len(), 10);
        assert_eq!(Language::Japanese.code(), "ja");
        assert_eq!(Language::parse("es"), Some(Language::Spanish));
        assert_eq!(Language::parse("German"), Some(Language::German));
        assert!(Language::English.is_english());
    }
}
