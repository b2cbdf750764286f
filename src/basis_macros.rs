macro_rules! basis_impl {
    ($family:ident, $name:literal, $scale:expr, $min_knots:expr, [
        $r0:expr, $r1:expr, $r2:expr, $r3:expr $(,)?
    ]) => {
        impl Basis for $family {
            const NAME: &'static str = $name;
            // Rows of the table (ascending powers of t) become columns of the
            // column-major Mat4, so `MATRIX * tvec` yields the four blending
            // coefficients directly.
            const MATRIX: Mat4 = Mat4::from_cols(
                Vec4::new($r0[0], $r0[1], $r0[2], $r0[3]),
                Vec4::new($r1[0], $r1[1], $r1[2], $r1[3]),
                Vec4::new($r2[0], $r2[1], $r2[2], $r2[3]),
                Vec4::new($r3[0], $r3[1], $r3[2], $r3[3]),
            );
            const SCALE: f32 = $scale;
            const MIN_KNOTS: usize = $min_knots;
        }
    };
}
