#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    EmptyBank,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyBank => "No questions could be loaded.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}
