use serde::{Deserialize, Serialize};

/// Exact-match filter over a reference id.
///
/// `Any` is the explicit "no filter" state, so no real identifier can be
/// mistaken for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion<T> {
    Any,
    Only(T),
}

impl<T> Default for Criterion<T> {
    fn default() -> Self {
        Criterion::Any
    }
}

impl<T: PartialEq> Criterion<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Criterion::Any => true,
            Criterion::Only(expected) => expected == value,
        }
    }
}

impl<T> From<Option<T>> for Criterion<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Criterion::Only(v),
            None => Criterion::Any,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Bought,
    NotBought,
}

impl StatusFilter {
    pub fn accepts(&self, is_bought: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Bought => is_bought,
            StatusFilter::NotBought => !is_bought,
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::Bought => write!(f, "bought"),
            StatusFilter::NotBought => write!(f, "not_bought"),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "bought" => Ok(StatusFilter::Bought),
            "not_bought" | "notBought" => Ok(StatusFilter::NotBought),
            _ => Err(format!("Invalid status filter: {}", s)),
        }
    }
}
