//! Strongly-typed product identifier

use crate::newtype_string::define_newtype_string;

define_newtype_string! {
    /// Opaque identifier for the product being assessed (an ASIN or any
    /// equivalent catalog key). Used as the cache and persistence key for
    /// analysis results.
    pub struct ProductId;
}
