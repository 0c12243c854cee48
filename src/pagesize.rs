//! Pre-defined page sizes for the paper formats letters are printed on.
//!
//! All sizes are provided in portrait orientation (width, height).

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

/// ISO A4, the default for UK correspondence
pub const A4: PageSize = (Pt(595.28), Pt(841.89));
pub const A5: PageSize = (Pt(419.53), Pt(595.28));
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));
