/// Outcome of decoding an embedded JSON payload (option lists, answer
/// envelopes). Callers that only care about rendering collapse both
/// degenerate arms to an empty value with [`Decoded::or_default`]; callers
/// that want a diagnostic can still tell "absent" from "malformed".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded<T> {
    Value(T),
    Missing,
    Invalid,
}

impl<T> Decoded<T> {
    pub fn or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Decoded::Value(value) => value,
            Decoded::Missing | Decoded::Invalid => T::default(),
        }
    }

    pub fn value(self) -> Option<T> {
        match self {
            Decoded::Value(value) => Some(value),
            Decoded::Missing | Decoded::Invalid => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Decoded::Invalid)
    }
}
