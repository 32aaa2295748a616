pub trait FloatExt {
    fn closes_to(self, other: Self) -> bool;
}

const F64_RELATIVE_TOLERANCE: f64 = 1e-9; // for big absolute numbers
const F64_ABSOLUTE_TOLERANCE: f64 = 1e-9; // for near-zero numbers

impl FloatExt for f64 {
    fn closes_to(self, other: Self) -> bool {
        let diff = self - other;
        let tolerance = Self::max(
            F64_RELATIVE_TOLERANCE * Self::max(self.abs(), other.abs()),
            F64_ABSOLUTE_TOLERANCE,
        );
        diff.abs() <= tolerance
    }
}

const F32_RELATIVE_TOLERANCE: f32 = 1e-5;
const F32_ABSOLUTE_TOLERANCE: f32 = 1e-5;

impl FloatExt for f32 {
    fn closes_to(self, other: Self) -> bool {
        let diff = self - other;
        let tolerance = Self::max(
            F32_RELATIVE_TOLERANCE * Self::max(self.abs(), other.abs()),
            F32_ABSOLUTE_TOLERANCE,
        );
        diff.abs() <= tolerance
    }
}
