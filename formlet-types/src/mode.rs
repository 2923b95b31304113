/// Whether the form is being defined or filled in.
///
/// Both transitions are unconditional and synchronous. Switching modes never
/// touches the question data, so flipping back and forth is lossless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Questions are being added and configured.
    #[default]
    Editing,

    /// The same questions are rendered as fillable answer fields.
    Previewing,
}

impl Mode {
    /// Check if the form is in preview mode.
    pub fn is_preview(&self) -> bool {
        matches!(self, Self::Previewing)
    }
}
