use crate::{CoreError, Deck, Question};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything needed to move progress between machines.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snapshot {
    pub deck: Deck,
    pub corpus: Vec<Question>,
}

/// The parts of an imported file that were present and well-formed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportedSnapshot {
    pub deck: Option<Deck>,
    pub corpus: Option<Vec<Question>>,
}

impl ImportedSnapshot {
    pub fn is_empty(&self) -> bool {
        self.deck.is_none() && self.corpus.is_none()
    }
}

/// Validates an imported payload. `deck` must be a mapping of records when
/// present; `corpus` (or the legacy `custom` key) is taken only when it is an
/// array, and every entry must then be a question.
pub fn parse_snapshot(value: Value) -> Result<ImportedSnapshot, CoreError> {
    let Value::Object(mut map) = value else {
        return Err(CoreError::InvalidSnapshot("expected a JSON object".into()));
    };

    let deck = match map.remove("deck") {
        None | Some(Value::Null) => None,
        Some(v @ Value::Object(_)) => Some(
            serde_json::from_value::<Deck>(v)
                .map_err(|e| CoreError::InvalidSnapshot(format!("deck: {e}")))?,
        ),
        Some(_) => return Err(CoreError::InvalidSnapshot("deck must be an object".into())),
    };

    if let Some((text, _)) = deck
        .iter()
        .flat_map(|d| d.iter())
        .find(|(_, r)| !r.is_consistent())
    {
        return Err(CoreError::InvalidSnapshot(format!(
            "deck: counters for {text:?} do not add up"
        )));
    }

    let corpus_value = map.remove("corpus").or_else(|| map.remove("custom"));
    let corpus = match corpus_value {
        Some(v @ Value::Array(_)) => Some(
            serde_json::from_value::<Vec<Question>>(v)
                .map_err(|e| CoreError::InvalidSnapshot(format!("corpus: {e}")))?,
        ),
        _ => None,
    };

    Ok(ImportedSnapshot {
        deck: deck.map(|d| d.into_iter().map(|(k, r)| (k, r.normalized())).collect()),
        corpus,
    })
}

pub fn parse_snapshot_str(text: &str) -> Result<ImportedSnapshot, CoreError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| CoreError::InvalidSnapshot(format!("not JSON: {e}")))?;
    parse_snapshot(value)
}
