//! Macros for declaring hyperlink structures
//!
//! These reduce the boilerplate of building nested
//! [`LinkTree`](crate::fields::LinkTree) maps by hand at schema-definition
//! time.

/// Build a [`LinkTree::Map`](crate::fields::LinkTree) from key/value pairs
///
/// Values are anything convertible into a `LinkTree`: [`UrlFor`] fields,
/// literal strings, nested `links!` maps, or `Vec<LinkTree>` sequences.
///
/// [`UrlFor`]: crate::fields::UrlFor
///
/// # Example
/// ```rust,ignore
/// let tree = links! {
///     "self" => links! {
///         "href" => UrlFor::new("author").param("id", "<id>"),
///         "title" => "The author",
///     },
///     "collection" => UrlFor::new("authors"),
/// };
/// ```
#[macro_export]
macro_rules! links {
    ( $( $key:expr => $value:expr ),* $(,)? ) => {{
        let mut entries = ::indexmap::IndexMap::new();
        $(
            entries.insert(
                ::std::string::String::from($key),
                $crate::fields::LinkTree::from($value),
            );
        )*
        $crate::fields::LinkTree::Map(entries)
    }};
}
