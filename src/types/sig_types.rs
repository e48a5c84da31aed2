/// A fixed-length bit-vector packed into little-endian bytes. Signatures,
/// codewords, bit-slices and candidate-page bitmaps are all `Bits`.
/// Bits past `nbits` in the last byte are kept zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bits {
    pub nbits: usize,
    pub bytes: Vec<u8>,
}
