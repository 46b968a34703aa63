use serde::Deserialize;

/// Import files come as a bare list or wrapped the way joke APIs answer, `{ "jokes": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum ImportFile {
    List(Vec<RawJoke>),
    Wrapped { jokes: Vec<RawJoke> },
}

#[derive(Deserialize)]
#[serde(untagged)]
pub enum RawJoke {
    Card {
        setup: String,
        punchline: String,
        #[serde(alias = "type")]
        category: Option<String>,
    },
    OneLiner {
        joke: String,
    },
}

impl ImportFile {
    pub fn into_jokes(self) -> Vec<RawJoke> {
        match self {
            ImportFile::List(jokes) | ImportFile::Wrapped { jokes } => jokes,
        }
    }
}
