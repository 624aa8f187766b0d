/// How decoded values combine with whatever the destination already holds.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DecodeMode {
    /// Every selected member is overwritten. Absent non-optional keys are an
    /// error and lists are rebuilt from scratch.
    #[default]
    Replace,

    /// Only keys present in the response are written. Lists merge
    /// element-by-element and keep trailing destination elements.
    Merge,
}
