/// Scratch memory for a single routine call.
///
/// Owns a contiguous, zero-filled block of `T` (`i32`, a real float or a
/// complex float). The block is released when the workspace is dropped,
/// on success, degenerate result and error paths alike.
///
/// [`resize`](Workspace::resize) reallocates: prior contents are gone, and
/// callers never rely on them surviving.
///
/// ```
/// use numeris_lapack::Workspace;
///
/// let mut w = Workspace::<f64>::new(4);
/// w.as_mut_slice()[0] = 2.0;
/// w.resize(8);
/// assert_eq!(w.len(), 8);
/// assert_eq!(w.first(), Some(&0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace<T> {
    data: Vec<T>,
}

impl<T: Copy + Default> Workspace<T> {
    /// A block of `len` elements.
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![T::default(); len],
        }
    }

    /// A one-element stand-in, the output slot of a size query.
    pub fn probe() -> Self {
        Self::new(1)
    }

    /// Replace the block with a fresh one of `len` elements.
    pub fn resize(&mut self, len: usize) {
        self.data = vec![T::default(); len];
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` for a zero-length block.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The first element, `None` for a zero-length block.
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    /// The length as a LAPACK `lwork` argument.
    ///
    /// Blocks are sized from LAPACK integers, so the length always fits.
    pub fn lwork(&self) -> i32 {
        i32::try_from(self.data.len()).unwrap_or(i32::MAX)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}
