use std::fmt::{self, Debug, Formatter};

/// Formats with the provided closure, allowing nested debug builders to be passed as a field
/// without an intermediate type for each one.
pub struct DebugWith<F: Fn(&mut Formatter<'_>) -> fmt::Result>(pub F);

impl<F: Fn(&mut Formatter<'_>) -> fmt::Result> Debug for DebugWith<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}

/// Writes the contained string as-is when debug formatted, without quotes or escaping.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
