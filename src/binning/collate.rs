use crate::core::Scalar;

/// Merges adjacent pairs of blocks: `out[j] = 0.5 * (in[2j] + in[2j + 1])`.
///
/// The output has `floor(n / 2)` elements. With an odd input length the last
/// block has no partner and is dropped.
pub fn collate<T: Scalar>(blocks: &[T]) -> Vec<T> {
    blocks
        .chunks_exact(2)
        .map(|pair| T::HALF * (pair[0] + pair[1]))
        .collect()
}

/// In-place variant of [`collate`]; keeps the buffer's capacity.
pub fn collate_in_place<T: Scalar>(blocks: &mut Vec<T>) {
    let half = blocks.len() / 2;
    for j in 0..half {
        blocks[j] = T::HALF * (blocks[2 * j] + blocks[2 * j + 1]);
    }
    blocks.truncate(half);
}
