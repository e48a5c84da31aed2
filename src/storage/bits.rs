use crate::types::sig_types::Bits;

impl Bits {
    /// All-zero bit-vector of `nbits` bits.
    pub fn new(nbits: usize) -> Self {
        Self {
            nbits,
            bytes: vec![0u8; Self::byte_len(nbits)],
        }
    }

    pub fn byte_len(nbits: usize) -> usize {
        (nbits + 7) / 8
    }

    /// Rebuild from the packed bytes stored in a page slot.
    pub fn from_bytes(nbits: usize, bytes: &[u8]) -> Self {
        assert_eq!(bytes.len(), Self::byte_len(nbits));
        Self {
            nbits,
            bytes: bytes.to_vec(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn set(&mut self, i: usize) {
        assert!(i < self.nbits);
        self.bytes[i / 8] |= 1 << (i % 8);
    }

    pub fn unset(&mut self, i: usize) {
        assert!(i < self.nbits);
        self.bytes[i / 8] &= !(1 << (i % 8));
    }

    pub fn is_set(&self, i: usize) -> bool {
        assert!(i < self.nbits);
        self.bytes[i / 8] & (1 << (i % 8)) != 0
    }

    pub fn unset_all(&mut self) {
        self.bytes.fill(0);
    }

    /// Set every bit in `[0, nbits)`, keeping the trailing padding zero.
    pub fn set_all(&mut self) {
        self.bytes.fill(0xff);
        let tail = self.nbits % 8;
        if tail != 0 {
            let last = self.bytes.len() - 1;
            self.bytes[last] = (1u8 << tail) - 1;
        }
    }

    pub fn is_zero(&self) -> bool {
        self.bytes.iter().all(|b| *b == 0)
    }

    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// In-place OR: superimpose `other` onto this vector.
    pub fn or_with(&mut self, other: &Bits) {
        assert_eq!(self.nbits, other.nbits);
        for (b, o) in self.bytes.iter_mut().zip(other.bytes.iter()) {
            *b |= o;
        }
    }

    /// In-place AND against a vector of at least the same width; extra bits
    /// in `other` are ignored. Used to intersect a page bitmap with a wider
    /// bit-slice.
    pub fn and_with(&mut self, other: &Bits) {
        assert!(other.nbits >= self.nbits);
        for (b, o) in self.bytes.iter_mut().zip(other.bytes.iter()) {
            *b &= o;
        }
    }

    /// Subset containment: every bit set here is also set in `other`.
    /// The soundness test of superimposed coding.
    pub fn is_subset_of(&self, other: &Bits) -> bool {
        assert_eq!(self.nbits, other.nbits);
        self.bytes
            .iter()
            .zip(other.bytes.iter())
            .all(|(b, o)| b & !o == 0)
    }
}
