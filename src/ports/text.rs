/// Port for turning text identifiers into display text.
///
/// Localization lives behind this interface; descriptors only ever see the
/// resolved strings.
pub trait TextResolver: Send + Sync {
    /// Resolve `id` to display text.
    ///
    /// Implementations decide what an unknown id yields; it must not panic.
    fn resolve(&self, id: &str) -> String;
}
