use std::fmt::{self, Debug, Formatter};

/// Debug-formats a value by running the wrapped closure, so that nested fields can be built with
/// [`Formatter`] helpers (`debug_list`, `debug_map`) inline, in place of a nested struct. See
/// [`debug_with`].
pub struct DebugWith<F: Fn(&mut Formatter<'_>) -> fmt::Result>(F);

impl<F: Fn(&mut Formatter<'_>) -> fmt::Result> Debug for DebugWith<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}

/// Wraps `fmt` in a [`DebugWith`], for use as a field value with `debug_struct`.
pub const fn debug_with<F: Fn(&mut Formatter<'_>) -> fmt::Result>(fmt: F) -> DebugWith<F> {
    DebugWith(fmt)
}

/// Debug-formats as the contained text, without quotes.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
