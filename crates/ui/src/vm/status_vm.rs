use services::{Status, Tone};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusVm {
    pub text: String,
    pub class: &'static str,
}

impl From<&Status> for StatusVm {
    fn from(status: &Status) -> Self {
        let class = match status.tone {
            Tone::Success => "status status--ok",
            Tone::Error => "status status--error",
            Tone::Neutral => "status",
        };
        Self {
            text: status.text.clone(),
            class,
        }
    }
}
