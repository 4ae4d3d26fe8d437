use crate::core::{FloatExt, TWENTY_FIVE_POW7};
use crate::Float;

const PI: Float = core::f64::consts::PI as Float;
const TAU: Float = core::f64::consts::TAU as Float;

/// Compute the CIEDE2000 color difference between two CIELAB colors.
///
/// This function implements the formula of CIE Technical Report 142-2001 with
/// unit weighting factors `kL = kC = kH = 1`, following the notation of
/// Sharma, Wu, and Dalal's [implementation
/// notes](https://hajim.rochester.edu/ece/sites/gsharma/ciede2000/). Hue
/// angles are in radians throughout.
#[allow(non_snake_case)]
pub(crate) fn delta_e_2000(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let [L1, a1, b1] = *coordinates1;
    let [L2, a2, b2] = *coordinates2;

    // Rescale a to boost the chroma of near-neutral colors.
    let C1 = a1.hypot(b1);
    let C2 = a2.hypot(b2);
    let Cb7 = ((C1 + C2) / 2.0).pow7();
    let G = 0.5 * (1.0 - (Cb7 / (Cb7 + TWENTY_FIVE_POW7)).sqrt());

    let a1p = a1 * (1.0 + G);
    let a2p = a2 * (1.0 + G);

    let C1p = a1p.hypot(b1);
    let C2p = a2p.hypot(b2);
    let Cbp = (C1p + C2p) / 2.0;

    let mut h1p = b1.atan2(a1p);
    if h1p < 0.0 {
        h1p += TAU;
    }
    let mut h2p = b2.atan2(a2p);
    if h2p < 0.0 {
        h2p += TAU;
    }

    // Differences in lightness, chroma, and hue.
    let dLp = L2 - L1;
    let dCp = C2p - C1p;

    let mut dhp = h2p - h1p;
    if dhp > PI {
        dhp -= TAU;
    } else if dhp < -PI {
        dhp += TAU;
    }
    let dHp = 2.0 * (C1p * C2p).sqrt() * (dhp / 2.0).sin();

    // Mean hue, averaged across the 0/2π boundary where necessary.
    let Hp = if (h1p - h2p).abs() <= PI {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < TAU {
        (h1p + h2p + TAU) / 2.0
    } else {
        (h1p + h2p - TAU) / 2.0
    };

    let T = 1.0 - 0.17 * (Hp - PI / 6.0).cos()
        + 0.24 * (2.0 * Hp).cos()
        + 0.32 * (3.0 * Hp + PI / 30.0).cos()
        - 0.20 * (4.0 * Hp - PI * 21.0 / 60.0).cos();

    let Lbp50 = (L1 + L2) / 2.0 - 50.0;
    let Lbp50_2 = Lbp50 * Lbp50;
    let SL = 1.0 + 0.015 * Lbp50_2 / (20.0 + Lbp50_2).sqrt();
    let SC = (0.045 as Float).mul_add(Cbp, 1.0);
    let SH = 1.0 + 0.015 * Cbp * T;

    let Cbp7 = Cbp.pow7();
    let rotation = ((Hp.to_degrees() - 275.0) / 25.0).powi(2);
    let RT = -2.0
        * (Cbp7 / (Cbp7 + TWENTY_FIVE_POW7)).sqrt()
        * (PI / 3.0 * (-rotation).exp()).sin();

    let lightness = dLp / SL;
    let chroma = dCp / SC;
    let hue = dHp / SH;

    (lightness * lightness + chroma * chroma + hue * hue + RT * chroma * hue).sqrt()
}

/// The delta E at and beyond which two colors share nothing.
pub(crate) const MAX_DELTA_E: Float = 50.0;

/// Turn a delta E into a match percentage.
///
/// The percentage falls off linearly from 100 for identical colors to 0 for
/// colors that are [`MAX_DELTA_E`] or more apart.
pub(crate) fn match_percentage(delta_e: Float) -> u8 {
    let percentage = (100.0 - delta_e / MAX_DELTA_E * 100.0).max(0.0);
    percentage.min(100.0).round() as u8
}
