/// The 24 index permutations of six side-labels corresponding to the symmetries of a
/// tetrahedron's edge set (relabelling the four vertices permutes the six edges).
const N_PERMUTATIONS: usize = 24;

#[rustfmt::skip]
const INDEX_SWAP_PERMUTATIONS: [[usize; 6]; N_PERMUTATIONS] = [
    [0, 1, 2, 3, 4, 5],
    [0, 2, 1, 4, 3, 5],
    [0, 3, 4, 1, 2, 5],
    [0, 4, 3, 2, 1, 5],
    [1, 0, 2, 3, 5, 4],
    [1, 2, 0, 5, 3, 4],
    [1, 3, 5, 0, 2, 4],
    [1, 5, 3, 2, 0, 4],
    [2, 0, 1, 4, 5, 3],
    [2, 1, 0, 5, 4, 3],
    [2, 4, 5, 0, 1, 3],
    [2, 5, 4, 1, 0, 3],
    [3, 0, 4, 1, 5, 2],
    [3, 1, 5, 0, 4, 2],
    [3, 4, 0, 5, 1, 2],
    [3, 5, 1, 4, 0, 2],
    [4, 0, 3, 2, 5, 1],
    [4, 2, 5, 0, 3, 1],
    [4, 3, 0, 5, 2, 1],
    [4, 5, 2, 3, 0, 1],
    [5, 1, 3, 2, 4, 0],
    [5, 2, 4, 1, 3, 0],
    [5, 3, 1, 4, 2, 0],
    [5, 4, 2, 3, 1, 0],
];

fn permute_six(i_permutation: usize, side_lengths: &[f64; 6]) -> [f64; 6] {
    let pattern = &INDEX_SWAP_PERMUTATIONS[i_permutation];
    let mut permuted = [0.0; 6];
    for i in 0..6 {
        permuted[i] = side_lengths[pattern[i]];
    }
    permuted
}

/// Divides `factor` by each element in place: the reciprocal-with-multiplier transform applied
/// before permutation canonicalization (`s <- f/s`).
pub fn reciprocal_factor_transform(values: &mut [f64; 6], factor: f64) {
    for v in values.iter_mut() {
        *v = factor / *v;
    }
}

/// Among the 24 tetrahedral permutations of `side_lengths`, returns the lexicographically
/// smallest permuted tuple. This canonicalizes a six-side-length sample so that physically
/// identical quadruplets (same tetrahedron, different vertex labelling) map to the same input
/// the rescaling model was trained on.
pub fn minimum_permutation(side_lengths: &[f64; 6]) -> [f64; 6] {
    let mut minimum = *side_lengths;
    for i_perm in 1..N_PERMUTATIONS {
        let permuted = permute_six(i_perm, side_lengths);
        if permuted < minimum {
            minimum = permuted;
        }
    }
    minimum
}

/// The precomputed second-index lookup table used by the approximate canonicalizer: for each
/// choice of globally-smallest element, the four candidate positions for the second-smallest.
#[rustfmt::skip]
const SECOND_INDICES: [[usize; 4]; 6] = [
    [1, 2, 3, 4],
    [0, 2, 3, 5],
    [0, 1, 4, 5],
    [0, 1, 4, 5],
    [0, 2, 3, 5],
    [1, 2, 3, 4],
];

/// An O(1) approximation of [`minimum_permutation`] that only locates the two smallest elements
/// (by position) and permutes by a precomputed pattern, instead of searching all 24 candidates.
pub fn approximate_minimum_permutation(side_lengths: &[f64; 6]) -> [f64; 6] {
    let i_min0 = side_lengths
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.partial_cmp(b.1).unwrap())
        .map(|(i, _)| i)
        .unwrap();

    let candidates = &SECOND_INDICES[i_min0];
    let i_min1_enum = candidates
        .iter()
        .enumerate()
        .min_by(|a, b| side_lengths[*a.1].partial_cmp(&side_lengths[*b.1]).unwrap())
        .map(|(i_enum, _)| i_enum)
        .unwrap();

    let i_perm = i_min1_enum + 4 * i_min0;
    permute_six(i_perm, side_lengths)
}

/// Applies the reciprocal transform followed by exact minimum-permutation canonicalization.
pub fn transform_sample(side_lengths: &[f64; 6], reciprocal_factor: f64) -> [f64; 6] {
    let mut values = *side_lengths;
    reciprocal_factor_transform(&mut values, reciprocal_factor);
    minimum_permutation(&values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_permutation_is_index_zero() {
        let sides = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(permute_six(0, &sides), sides);
    }

    #[test]
    fn minimum_permutation_is_invariant_under_relabelling() {
        let sides = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let relabelled = permute_six(7, &sides);
        assert_eq!(minimum_permutation(&sides), minimum_permutation(&relabelled));
    }

    #[test]
    fn reciprocal_transform_applies_factor() {
        let mut values = [1.0, 2.0, 4.0, 1.0, 1.0, 1.0];
        reciprocal_factor_transform(&mut values, 4.0);
        assert_eq!(values, [4.0, 2.0, 1.0, 4.0, 4.0, 4.0]);
    }
}
