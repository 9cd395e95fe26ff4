//! Length and font-size units used by DrawingML.

/// English Metric Units, the coordinate unit of every OOXML drawing.
pub type Emu = i64;

pub const EMU_PER_INCH: Emu = 914_400;
pub const EMU_PER_POINT: Emu = 12_700;

/// Convert inches to EMU, rounding to the nearest unit.
pub fn inches(value: f64) -> Emu {
    (value * EMU_PER_INCH as f64).round() as Emu
}

/// Convert EMU back to inches.
pub fn to_inches(emu: Emu) -> f64 {
    emu as f64 / EMU_PER_INCH as f64
}

/// A font size or paragraph spacing in points.
///
/// Stored in hundredths of a point, which is how `sz` and `spcPts` are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Points(u32);

impl Points {
    pub fn new(points: f64) -> Self {
        Self((points * 100.0).round().max(0.0) as u32)
    }

    pub fn from_centipoints(value: u32) -> Self {
        Self(value)
    }

    /// Value in hundredths of a point.
    pub fn centipoints(self) -> u32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

/// Shorthand for [`Points::new`].
pub fn pt(points: f64) -> Points {
    Points::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_to_emu() {
        assert_eq!(inches(1.0), 914_400);
        assert_eq!(inches(10.0), 9_144_000);
        assert_eq!(inches(7.5), 6_858_000);
        assert_eq!(inches(0.3), 274_320);
        assert_eq!(inches(0.0), 0);
    }

    #[test]
    fn test_fractional_inches_round() {
        // 2.85in is not exact in binary floating point
        assert_eq!(inches(2.85), 2_606_040);
        assert_eq!(inches(0.02), 18_288);
    }

    #[test]
    fn test_to_inches() {
        assert!((to_inches(inches(4.85)) - 4.85).abs() < 1e-9);
    }

    #[test]
    fn test_points() {
        assert_eq!(pt(44.0).centipoints(), 4400);
        assert_eq!(pt(6.0).centipoints(), 600);
        assert_eq!(pt(10.5).as_f64(), 10.5);
        assert_eq!(Points::from_centipoints(1800), pt(18.0));
    }
}
