mod conversion;
mod difference;
mod equality;
mod math;

// conversion
pub(crate) use conversion::{
    from_24bit, hsl_to_srgb, lab_to_srgb, lab_to_xyz, srgb_to_hsl, srgb_to_lab, srgb_to_xyz,
    to_24bit, xyz_to_lab, xyz_to_srgb,
};

// difference
pub(crate) use difference::{delta_e_2000, match_percentage, MAX_DELTA_E};

// equality
#[cfg(test)]
pub(crate) use equality::{assert_same_channels, assert_within};
pub use equality::to_eq_bits;
pub(crate) use equality::to_eq_coordinates;

// math
pub(crate) use math::{FloatExt, TWENTY_FIVE_POW7};
