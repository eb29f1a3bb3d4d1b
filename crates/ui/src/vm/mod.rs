mod question_vm;
mod quiz_vm;
mod results_vm;

pub use question_vm::{OptionState, OptionVm, QuestionVm, map_question, option_letter};
pub use quiz_vm::{QuizIntent, QuizOutcome, QuizScreen, QuizVm};
pub use results_vm::{ResultsVm, map_results};
