/// Defines the default directory for files written by tests
pub const DEFAULT_TEST_DIR: &str = "/tmp/micromorph/test";

/// Defines the number of material parameters of the linear micromorphic model
pub const N_PARAMS: usize = 18;

/// Maps the 9-Voigt index m to the (i,j) pair of a second-order tensor
///
/// ```text
/// m:     0   1   2   3   4   5   6   7   8
/// ij:   11  22  33  23  13  12  32  31  21
/// ```
pub const VOIGT_IJ: [(usize, usize); 9] = [
    (0, 0),
    (1, 1),
    (2, 2),
    (1, 2),
    (0, 2),
    (0, 1),
    (2, 1),
    (2, 0),
    (1, 0),
];

/// Maps the (i,j) pair of a second-order tensor to the 9-Voigt index m
pub const IJ_VOIGT: [[usize; 3]; 3] = [[0, 5, 4], [8, 1, 3], [7, 6, 2]];

/// Holds the right positive cyclic permutation of the 27-Voigt indices
///
/// With `T` the raw contraction, the higher-order stress is `M[n] = T[CYCLIC_PERMUTATION[n]]`,
/// i.e., `M_ijk = T_jki`.
pub const CYCLIC_PERMUTATION: [usize; 27] = [
    0, 17, 25, 16, 7, 8, 26, 18, 9, 5, 10, 24, 15, 6, 1, 19, 23, 14, 4, 12, 20, 11, 2, 3, 21, 22, 13,
];

/// Holds the row paired with each row by the symmetrization of Voigt-packed tangent terms
///
/// Rows 0..2 pair with themselves; 3↔6, 4↔7, and 5↔8.
pub const TRANSPOSE_ROW: [usize; 9] = [0, 1, 2, 6, 7, 8, 3, 4, 5];
