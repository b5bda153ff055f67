use crate::icons::IconSet;
use crate::theme::Palette;

/// Per-frame values shared by every rendering component.
///
/// `resizing` and `drawer_open` are the shell's presentation flags; they
/// are recomputed from state after every transition, never set ad hoc.
pub struct RenderContext {
    pub palette: Palette,
    pub icons: IconSet,
    pub resizing: bool,
    pub drawer_open: bool,
    /// Whether the sidebar being rendered is in its compact presentation
    pub sidebar_compact: bool,
}
