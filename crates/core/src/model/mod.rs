mod question;
mod settings;

pub use question::{OPTION_COUNT, QuestionError, QuestionRecord};
pub use settings::{
    DEFAULT_CELEBRATION_MS, MAX_CELEBRATION_MS, QuizSettings, QuizSettingsDraft, SettingsError,
};
