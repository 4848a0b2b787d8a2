//! Phenotypic resistance data.

mod call;
mod table;

pub use call::PhenotypeCall;
pub use table::PhenotypeTable;
