use std::fmt::{self, Debug, Formatter};

/// Debugs as the contained string, without quotes or escaping. Used to nest pre-rendered output
/// inside `debug_struct` fields.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
