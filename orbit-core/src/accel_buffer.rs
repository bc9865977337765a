use crate::types::BodyId;
use glam::DVec2;

/// A scratch buffer holding one net acceleration per body.
///
/// The force phase writes into this buffer from an unmutated snapshot of
/// the body set; the motion phase then reads it back. Keeping the results
/// here, instead of writing velocities directly, is what separates the
/// read-only pass from the mutating one.
///
/// Internally, `acc[i]` corresponds to body `i`.
#[derive(Debug, Default)]
pub struct AccelBuffer {
    acc: Vec<DVec2>,
}

impl AccelBuffer {
    /// Creates a new [`AccelBuffer`] with the given length.
    ///
    /// All accelerations are initialized to `DVec2::ZERO`.
    ///
    /// ### Parameters
    /// - `len` - Number of bodies this buffer can store accelerations for.
    ///
    /// ### Returns
    /// A new [`AccelBuffer`] of length `len`.
    pub fn with_len(len: usize) -> Self {
        Self {
            acc: vec![DVec2::ZERO; len],
        }
    }

    /// Ensures that the internal storage has exactly the given length.
    ///
    /// After this call all entries are cleared to `DVec2::ZERO`, even if
    /// the length was already correct.
    ///
    /// ### Parameters
    /// - `len` - Desired length of the buffer.
    pub fn ensure_len(&mut self, len: usize) {
        if self.acc.len() != len {
            self.acc.resize(len, DVec2::ZERO);
        }
        self.clear();
    }

    /// Resets every entry to `DVec2::ZERO` without changing the length.
    pub fn clear(&mut self) {
        for a in &mut self.acc {
            *a = DVec2::ZERO;
        }
    }

    /// Stores the acceleration for a body.
    ///
    /// ### Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    pub fn set(&mut self, id: BodyId, acc: DVec2) {
        self.acc[id] = acc;
    }

    /// Returns the stored acceleration for a body.
    ///
    /// ### Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    pub fn get(&self, id: BodyId) -> DVec2 {
        self.acc[id]
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.acc.len()
    }
}
