use notes_core::model::{Quiz, Selections};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub letter: String,
    pub label: String,
    pub checked: bool,
}

/// One rendered question block. The correct answer is deliberately absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    pub number_label: String,
    pub text: String,
    pub input_name: String,
    pub options: Vec<OptionVm>,
}

#[must_use]
pub fn map_quiz(quiz: &Quiz, selections: &Selections) -> Vec<QuestionVm> {
    quiz.questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let selected = selections.selected(index);
            QuestionVm {
                index,
                number_label: format!("Q{}:", index + 1),
                text: question.question.clone(),
                input_name: Quiz::input_name(index),
                options: question
                    .options
                    .iter()
                    .map(|(letter, text)| OptionVm {
                        letter: letter.clone(),
                        label: format!("{letter}) {text}"),
                        checked: selected == Some(letter.as_str()),
                    })
                    .collect(),
            }
        })
        .collect()
}
