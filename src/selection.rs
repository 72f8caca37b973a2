use crate::error::{AnodraError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    React,
    Next,
}

impl ProjectKind {
    pub const LABELS: [&'static str; 2] = ["react", "next"];

    pub fn from_label(label: &str) -> Result<Self> {
        match label {
            "react" => Ok(Self::React),
            "next" => Ok(Self::Next),
            other => Err(AnodraError::InvalidSelection {
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageVariant {
    JavaScript,
    TypeScript,
}

impl LanguageVariant {
    pub const LABELS: [&'static str; 2] = ["javascript", "typescript"];

    pub fn from_label(label: &str) -> Result<Self> {
        match label {
            "javascript" => Ok(Self::JavaScript),
            "typescript" => Ok(Self::TypeScript),
            other => Err(AnodraError::InvalidSelection {
                value: other.to_string(),
            }),
        }
    }

    /// Vite template identifier passed to the scaffold generator.
    pub fn template_id(&self) -> &'static str {
        match self {
            Self::JavaScript => "react",
            Self::TypeScript => "react-ts",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiLibrary {
    None,
    Mui,
    Bootstrap,
    Antd,
    Tailwind,
}

impl UiLibrary {
    pub const LABELS: [&'static str; 5] = [
        "MUI Design",
        "Bootstrap",
        "Ant Design",
        "Tailwind CSS",
        "None",
    ];

    pub fn from_label(label: &str) -> Result<Self> {
        match label {
            "MUI Design" => Ok(Self::Mui),
            "Bootstrap" => Ok(Self::Bootstrap),
            "Ant Design" => Ok(Self::Antd),
            "Tailwind CSS" => Ok(Self::Tailwind),
            "None" => Ok(Self::None),
            other => Err(AnodraError::InvalidSelection {
                value: other.to_string(),
            }),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mui => "MUI Design",
            Self::Bootstrap => "Bootstrap",
            Self::Antd => "Ant Design",
            Self::Tailwind => "Tailwind CSS",
            Self::None => "None",
        }
    }

    /// Package installation command for this library, `None` when the
    /// operator skipped the UI-library step.
    pub fn install_command(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Mui => Some("npm install @mui/material @emotion/react @emotion/styled"),
            Self::Bootstrap => Some("npm install react-bootstrap bootstrap"),
            Self::Antd => Some("npm install antd"),
            Self::Tailwind => Some("npm install -D tailwindcss postcss autoprefixer"),
        }
    }
}

/// Operator choices accumulated by the selection flow. Only ever constructed
/// for `ProjectKind::React`; the `next` branch short-circuits before the
/// record is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub kind: ProjectKind,
    pub language: LanguageVariant,
    pub ui_library: UiLibrary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Ready(Selection),
    Unsupported(ProjectKind),
}

/// Single-choice prompt capability. The interactive implementation blocks
/// until the operator answers; tests script the answers.
pub trait Choose {
    fn choose(&mut self, question: &str, options: &[&str]) -> Result<String>;
}

pub struct InquirePrompter;

impl Choose for InquirePrompter {
    fn choose(&mut self, question: &str, options: &[&str]) -> Result<String> {
        inquire::Select::new(question, options.to_vec())
            .prompt()
            .map(str::to_string)
            .map_err(|_| AnodraError::PromptCancelled)
    }
}

/// Ask the fixed question sequence: project kind, then (react only) language
/// variant and UI library. Choosing `next` terminates the flow with no
/// further questions.
pub fn run_selection(chooser: &mut dyn Choose) -> Result<SelectionOutcome> {
    let answer = chooser.choose("What would you like to create?", &ProjectKind::LABELS)?;
    let kind = ProjectKind::from_label(&answer)?;

    if kind == ProjectKind::Next {
        return Ok(SelectionOutcome::Unsupported(kind));
    }

    let answer = chooser.choose(
        "Which language would you like to use?",
        &LanguageVariant::LABELS,
    )?;
    let language = LanguageVariant::from_label(&answer)?;

    let answer = chooser.choose(
        "Which UI library would you like to use?",
        &UiLibrary::LABELS,
    )?;
    let ui_library = UiLibrary::from_label(&answer)?;

    Ok(SelectionOutcome::Ready(Selection {
        kind,
        language,
        ui_library,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Scripted {
        answers: Vec<&'static str>,
        questions: Vec<String>,
    }

    impl Scripted {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: answers.to_vec(),
                questions: Vec::new(),
            }
        }
    }

    impl Choose for Scripted {
        fn choose(&mut self, question: &str, _options: &[&str]) -> Result<String> {
            self.questions.push(question.to_string());
            assert!(!self.answers.is_empty(), "flow asked more questions than scripted");
            Ok(self.answers.remove(0).to_string())
        }
    }

    #[test]
    fn next_short_circuits_after_one_question() {
        let mut chooser = Scripted::new(&["next"]);
        let outcome = run_selection(&mut chooser).unwrap();
        assert_eq!(outcome, SelectionOutcome::Unsupported(ProjectKind::Next));
        assert_eq!(chooser.questions.len(), 1);
    }

    #[test]
    fn react_flow_asks_three_questions_in_order() {
        let mut chooser = Scripted::new(&["react", "typescript", "MUI Design"]);
        let outcome = run_selection(&mut chooser).unwrap();
        assert_eq!(
            outcome,
            SelectionOutcome::Ready(Selection {
                kind: ProjectKind::React,
                language: LanguageVariant::TypeScript,
                ui_library: UiLibrary::Mui,
            })
        );
        assert_eq!(
            chooser.questions,
            vec![
                "What would you like to create?",
                "Which language would you like to use?",
                "Which UI library would you like to use?",
            ]
        );
    }

    #[test]
    fn unknown_label_is_invalid_selection() {
        let mut chooser = Scripted::new(&["react", "typescript", "Chakra"]);
        let err = run_selection(&mut chooser).unwrap_err();
        match err {
            AnodraError::InvalidSelection { value } => assert_eq!(value, "Chakra"),
            other => panic!("expected InvalidSelection, got: {other:?}"),
        }
    }

    #[rstest]
    #[case("javascript", "react")]
    #[case("typescript", "react-ts")]
    fn template_id_follows_language(#[case] label: &str, #[case] expected: &str) {
        let variant = LanguageVariant::from_label(label).unwrap();
        assert_eq!(variant.template_id(), expected);
    }

    #[test]
    fn every_ui_label_round_trips() {
        for label in UiLibrary::LABELS {
            let library = UiLibrary::from_label(label).unwrap();
            assert_eq!(library.label(), label);
        }
    }

    #[test]
    fn only_none_has_no_install_command() {
        for label in UiLibrary::LABELS {
            let library = UiLibrary::from_label(label).unwrap();
            assert_eq!(
                library.install_command().is_none(),
                library == UiLibrary::None
            );
        }
    }
}
