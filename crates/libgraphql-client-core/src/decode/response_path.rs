/// Location of a value inside a response payload, e.g.
/// `viewer.repositories[2].name`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResponsePath {
    segments: Vec<ResponsePathSegment>,
}
impl ResponsePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[ResponsePathSegment] {
        &self.segments
    }

    pub(crate) fn push_key(&mut self, key: &str) {
        self.segments.push(ResponsePathSegment::Key(key.to_string()));
    }

    pub(crate) fn push_index(&mut self, index: usize) {
        self.segments.push(ResponsePathSegment::Index(index));
    }

    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }
}
impl std::fmt::Display for ResponsePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("(root)");
        }
        for (idx, segment) in self.segments.iter().enumerate() {
            match segment {
                ResponsePathSegment::Key(key) if idx == 0 => f.write_str(key)?,
                ResponsePathSegment::Key(key) => write!(f, ".{key}")?,
                ResponsePathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
impl<S: Into<ResponsePathSegment>> std::iter::FromIterator<S> for ResponsePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResponsePathSegment {
    Index(usize),
    Key(String),
}
impl std::convert::From<&str> for ResponsePathSegment {
    fn from(value: &str) -> Self {
        Self::Key(value.to_string())
    }
}
impl std::convert::From<usize> for ResponsePathSegment {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}
