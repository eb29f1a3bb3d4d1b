use services::{QuizSession, rounded_percentage};

const OPTION_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Selectable,
    Correct,
    Wrong,
    Disabled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub letter: char,
    pub text: String,
    pub state: OptionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub prompt: String,
    pub progress_label: String,
    /// Share of the bank reached so far, counting the current question,
    /// rounded half up like the final report.
    pub progress_percent: u32,
    pub score: usize,
    pub options: Vec<OptionVm>,
    pub can_advance: bool,
}

#[must_use]
pub fn option_letter(display_index: usize) -> char {
    OPTION_LETTERS.get(display_index).copied().unwrap_or('?')
}

/// Map the current question of a running session, `None` once finished.
#[must_use]
pub fn map_question(session: &QuizSession) -> Option<QuestionVm> {
    let prompt = session.current_prompt()?.to_owned();
    let progress = session.progress();
    let selected = session.selected();
    let correct = session.correct_display_index();

    let shown = progress.position + 1;
    let progress_percent = rounded_percentage(shown, progress.total);

    let options = session
        .current_options()
        .into_iter()
        .enumerate()
        .map(|(index, text)| OptionVm {
            letter: option_letter(index),
            text: text.to_owned(),
            state: option_state(index, selected, correct),
        })
        .collect();

    Some(QuestionVm {
        prompt,
        progress_label: format!("{shown}/{}", progress.total),
        progress_percent,
        score: progress.score,
        options,
        can_advance: selected.is_some(),
    })
}

fn option_state(index: usize, selected: Option<usize>, correct: Option<usize>) -> OptionState {
    match selected {
        None => OptionState::Selectable,
        Some(_) if correct == Some(index) => OptionState::Correct,
        Some(chosen) if chosen == index => OptionState::Wrong,
        Some(_) => OptionState::Disabled,
    }
}
