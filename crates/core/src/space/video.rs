//! Video luma/chroma encodings: analog YPbPr (BT.601) and extended-gamut
//! xvYCC (BT.709 YCbCr scaled by 1.25).
//!
//! Both are fixed linear matrices over 0–255 RGB, so they are exactly
//! invertible up to 8-bit rounding.

use crate::color::{ColorValue, Srgb};
use serde::{Deserialize, Serialize};

/// xvYCC widens the nominal YCbCr range by this factor.
const XVYCC_SCALE: f64 = 1.25;

const YPBPR_LUMA_MAX: f64 = 255.0;
const YPBPR_CHROMA_MAX: f64 = 127.5;

/// YPbPr on a 0–255 scale: Y in [0, 255], Pb and Pr in [-127.5, 127.5].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YPbPr {
    pub y: f64,
    pub pb: f64,
    pub pr: f64,
}

/// xvYCC: BT.709 YCbCr times 1.25. Y in [0, 318.75], Cb and Cr in
/// [-159.375, 159.375].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XvYcc {
    pub y: f64,
    pub cb: f64,
    pub cr: f64,
}

fn rgb_channels(c: ColorValue) -> (f64, f64, f64) {
    (f64::from(c.r), f64::from(c.g), f64::from(c.b))
}

fn from_channels(r: f64, g: f64, b: f64) -> ColorValue {
    ColorValue::from_srgb(Srgb {
        r: r / 255.0,
        g: g / 255.0,
        b: b / 255.0,
    })
}

impl ColorValue {
    /// BT.601 YPbPr on the 0-255 scale.
    pub fn to_ypbpr(self) -> YPbPr {
        let (r, g, b) = rgb_channels(self);
        let chroma = |v: f64| v.clamp(-YPBPR_CHROMA_MAX, YPBPR_CHROMA_MAX);
        YPbPr {
            y: (0.299 * r + 0.587 * g + 0.114 * b).clamp(0.0, YPBPR_LUMA_MAX),
            pb: chroma(-0.168736 * r - 0.331264 * g + 0.5 * b),
            pr: chroma(0.5 * r - 0.418688 * g - 0.081312 * b),
        }
    }

    /// BT.709 YCbCr scaled by 1.25 for the extended xvYCC range.
    pub fn to_xvycc(self) -> XvYcc {
        let (r, g, b) = rgb_channels(self);
        let y = 0.2126 * r + 0.7152 * g + 0.0722 * b;
        let luma_max = 255.0 * XVYCC_SCALE;
        let chroma_max = 127.5 * XVYCC_SCALE;
        let chroma = |v: f64| (v * XVYCC_SCALE).clamp(-chroma_max, chroma_max);
        XvYcc {
            y: (y * XVYCC_SCALE).clamp(0.0, luma_max),
            cb: chroma((b - y) / 1.8556),
            cr: chroma((r - y) / 1.5748),
        }
    }
}

impl YPbPr {
    /// Inverse BT.601 transform, channels clipped.
    pub fn to_color(self) -> ColorValue {
        from_channels(
            self.y + 1.402 * self.pr,
            self.y - 0.344136 * self.pb - 0.714136 * self.pr,
            self.y + 1.772 * self.pb,
        )
    }
}

impl XvYcc {
    /// Inverse of the scaled BT.709 transform, channels clipped.
    pub fn to_color(self) -> ColorValue {
        let y = self.y / XVYCC_SCALE;
        let r = y + 1.5748 * self.cr / XVYCC_SCALE;
        let b = y + 1.8556 * self.cb / XVYCC_SCALE;
        let g = (y - 0.2126 * r - 0.0722 * b) / 0.7152;
        from_channels(r, g, b)
    }
}
