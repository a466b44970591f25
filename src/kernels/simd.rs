//! 8-lane accelerated kernels.
//!
//! On x86/x86_64 the bulk loop uses SSE2 (`paddw`, sign-extending unpack + `paddd` for the sum). Elsewhere a
//! portable loop processes the same 8-element blocks, so the bulk/tail split is exercised on every target.
//!
//! ## Safety
//!
//! The intrinsic paths are `#[target_feature(enable = "sse2")]` and only entered after runtime detection. Loads
//! and stores are unaligned and stay inside the `..n` prefix of each slice, which is bounds-checked up front.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Elements per accelerated block.
pub const LANES: usize = 8;

/// Vector add: SIMD bulk + scalar tail.
pub fn add_vec_simd(a: &[i16], b: &[i16], c: &mut [i16], n: usize) {
    let (a, b, c) = (&a[..n], &b[..n], &mut c[..n]);

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    if is_x86_feature_detected!("sse2") {
        // SAFETY: sse2 is available (checked above) and all three slices have exactly n elements.
        unsafe { add_vec_sse2(a, b, c) };
        return;
    }

    add_vec_blocks(a, b, c);
}

/// Vector sum: SIMD bulk into 32-bit lanes + scalar tail.
pub fn vec_sum_simd(a: &[i16], n: usize) -> i32 {
    let a = &a[..n];

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    if is_x86_feature_detected!("sse2") {
        // SAFETY: sse2 is available (checked above).
        return unsafe { vec_sum_sse2(a) };
    }

    vec_sum_blocks(a)
}

// --- Portable block loops ----------------------------------------------------------------------

fn add_vec_blocks(a: &[i16], b: &[i16], c: &mut [i16]) {
    let bulk = a.len() - a.len() % LANES;
    for ((c, a), b) in c[..bulk]
        .chunks_exact_mut(LANES)
        .zip(a[..bulk].chunks_exact(LANES))
        .zip(b[..bulk].chunks_exact(LANES))
    {
        for lane in 0..LANES {
            c[lane] = a[lane].wrapping_add(b[lane]);
        }
    }
    add_tail(a, b, c, bulk);
}

fn vec_sum_blocks(a: &[i16]) -> i32 {
    let bulk = a.len() - a.len() % LANES;
    let mut acc = [0i32; 4];
    for block in a[..bulk].chunks_exact(LANES) {
        for (lane, &x) in block.iter().enumerate() {
            acc[lane % 4] = acc[lane % 4].wrapping_add(i32::from(x));
        }
    }
    let sum = acc.iter().fold(0i32, |s, &x| s.wrapping_add(x));
    sum_tail(a, bulk, sum)
}

fn add_tail(a: &[i16], b: &[i16], c: &mut [i16], from: usize) {
    for i in from..c.len() {
        c[i] = a[i].wrapping_add(b[i]);
    }
}

fn sum_tail(a: &[i16], from: usize, sum: i32) -> i32 {
    a[from..].iter().fold(sum, |s, &x| s.wrapping_add(i32::from(x)))
}

// --- SSE2 --------------------------------------------------------------------------------------

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[target_feature(enable = "sse2")]
unsafe fn add_vec_sse2(a: &[i16], b: &[i16], c: &mut [i16]) {
    let n = c.len();
    debug_assert!(a.len() == n && b.len() == n);
    let mut i = 0;
    // SAFETY: every access covers i..i + LANES with i + LANES <= n, and all slices hold n elements.
    unsafe {
        while i + LANES <= n {
            let va = _mm_loadu_si128(a.as_ptr().add(i).cast::<__m128i>());
            let vb = _mm_loadu_si128(b.as_ptr().add(i).cast::<__m128i>());
            _mm_storeu_si128(c.as_mut_ptr().add(i).cast::<__m128i>(), _mm_add_epi16(va, vb));
            i += LANES;
        }
    }
    add_tail(a, b, c, i);
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[target_feature(enable = "sse2")]
unsafe fn vec_sum_sse2(a: &[i16]) -> i32 {
    let n = a.len();
    let mut i = 0;
    // SAFETY: every load covers i..i + LANES with i + LANES <= n.
    let sum = unsafe {
        let mut acc = _mm_setzero_si128();
        while i + LANES <= n {
            let v = _mm_loadu_si128(a.as_ptr().add(i).cast::<__m128i>());
            let sign = _mm_srai_epi16::<15>(v);
            acc = _mm_add_epi32(acc, _mm_unpacklo_epi16(v, sign));
            acc = _mm_add_epi32(acc, _mm_unpackhi_epi16(v, sign));
            i += LANES;
        }
        let mut lanes = [0i32; 4];
        _mm_storeu_si128(lanes.as_mut_ptr().cast::<__m128i>(), acc);
        lanes.iter().fold(0i32, |s, &x| s.wrapping_add(x))
    };
    sum_tail(a, i, sum)
}
