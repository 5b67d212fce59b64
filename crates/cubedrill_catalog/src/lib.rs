//! Catalog of CFOP algorithms.
//!
//! The catalog is embedded in the binary and loaded on first use.

#[macro_use]
extern crate lazy_static;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;


const ALGORITHMS_STR: &str = include_str!("algorithms.yaml");

lazy_static! {
    static ref ALGORITHMS: Vec<Algorithm> =
        serde_norway::from_str(ALGORITHMS_STR).expect("error loading algorithm catalog");
}

/// Step of the CFOP method that an algorithm belongs to.
#[derive(
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    /// Permutation of the last layer.
    #[serde(rename = "PLL")]
    #[strum(serialize = "PLL")]
    Pll,
    /// Orientation of the last layer.
    #[serde(rename = "OLL")]
    #[strum(serialize = "OLL")]
    Oll,
    /// First two layers.
    #[serde(rename = "F2L")]
    #[strum(serialize = "F2L")]
    F2l,
    /// Cross on the first layer.
    Cross,
}

/// Named move sequence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Algorithm {
    /// Unique ID, such as `pll-t`.
    pub id: String,
    /// Human-friendly name, such as `T Perm`.
    pub name: String,
    /// Step of the CFOP method.
    pub category: Category,
    /// Moves that solve the case, possibly with grouping parentheses.
    pub notation: String,
    /// Short description of the case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
impl Algorithm {
    /// Returns the moves of the algorithm.
    pub fn moves(&self) -> Vec<String> {
        cubedrill_notation::parse_notation(&self.notation)
    }
}

/// Error produced when looking up an algorithm.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CatalogError {
    /// No algorithm has the given ID
    #[error("no algorithm with ID {0:?}")]
    UnknownId(String),
}

/// Returns every algorithm in catalog order.
pub fn all() -> &'static [Algorithm] {
    &ALGORITHMS
}

/// Returns the algorithm with the given ID.
pub fn get(id: &str) -> Result<&'static Algorithm, CatalogError> {
    all()
        .iter()
        .find(|alg| alg.id == id)
        .ok_or_else(|| CatalogError::UnknownId(id.to_owned()))
}

/// Returns the algorithms in a category, or all of them if `category` is
/// `None`.
pub fn filter(category: Option<Category>) -> impl Iterator<Item = &'static Algorithm> {
    all()
        .iter()
        .filter(move |alg| category.is_none_or(|c| alg.category == c))
}

/// Returns the number of algorithms in a category, or the total if `category`
/// is `None`.
pub fn count(category: Option<Category>) -> usize {
    filter(category).count()
}

/// Returns the algorithms whose ID or name contains `query`, ignoring case.
pub fn search(query: &str) -> impl Iterator<Item = &'static Algorithm> {
    let query = query.to_lowercase();
    all().iter().filter(move |alg| {
        alg.id.to_lowercase().contains(&query) || alg.name.to_lowercase().contains(&query)
    })
}
