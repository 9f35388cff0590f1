/// Keys the lightbox reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightboxKey {
    /// ArrowLeft
    Previous,
    /// ArrowRight
    Next,
    /// Escape
    Close,
}
