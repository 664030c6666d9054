//! Backend built on the SSE and SSE2 instructions that every x86_64 target
//! supports.
//!
//! Intrinsics that only operate on registers are safe to call since SSE2 is
//! statically enabled on x86_64. The unaligned loads and stores still take raw
//! pointers and remain unsafe.

use super::SimdBackend;
use std::arch::x86_64::{
    __m128, __m128i, _mm_add_epi32, _mm_add_ps, _mm_add_ss, _mm_and_si128, _mm_andnot_si128,
    _mm_castps_si128, _mm_castsi128_ps, _mm_cmpgt_epi32, _mm_cmpgt_ps, _mm_cmplt_epi32,
    _mm_cmplt_ps, _mm_cvtepi32_ps, _mm_cvtps_epi32, _mm_cvtsd_f64, _mm_cvtsi64_si128,
    _mm_cvtsi128_si32, _mm_cvtsi128_si64, _mm_cvtss_f32, _mm_div_ps, _mm_loadu_ps,
    _mm_loadu_si128, _mm_max_ps, _mm_max_sd, _mm_max_ss, _mm_min_ps, _mm_min_sd, _mm_min_ss,
    _mm_movehl_ps, _mm_mul_epu32, _mm_mul_ps, _mm_or_si128, _mm_rsqrt_ps, _mm_rsqrt_ss,
    _mm_set_sd, _mm_set_ss, _mm_set1_epi32, _mm_set1_ps, _mm_setzero_si128, _mm_shuffle_epi32,
    _mm_shuffle_ps, _mm_sqrt_pd, _mm_sqrt_ps, _mm_sqrt_ss, _mm_srli_si128, _mm_storeu_ps,
    _mm_storeu_si128, _mm_sub_epi32, _mm_sub_ps, _mm_unpacklo_epi32, _mm_xor_ps,
};

/// Backend using 128-bit SSE registers.
#[derive(Clone, Copy, Debug)]
pub struct Sse2;

#[inline]
fn select_i32(mask: __m128i, if_set: __m128i, if_unset: __m128i) -> __m128i {
    // SAFETY: SSE2 is statically enabled on every x86_64 target.
    unsafe {
        _mm_or_si128(_mm_and_si128(mask, if_set), _mm_andnot_si128(mask, if_unset))
    }
}

impl SimdBackend for Sse2 {
    const NAME: &'static str = "sse2";

    type F32x4 = __m128;
    type I32x4 = __m128i;

    #[inline]
    fn load2(values: &[f32; 2]) -> __m128 {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            let bits: u64 = bytemuck::cast(*values);
            _mm_castsi128_ps(_mm_cvtsi64_si128(bits as i64))
        }
    }

    #[inline]
    fn load4(values: &[f32; 4]) -> __m128 {
        // SAFETY: The pointer is valid for reading four floats and the load
        // has no alignment requirement.
        unsafe { _mm_loadu_ps(values.as_ptr()) }
    }

    #[inline]
    fn splat(value: f32) -> __m128 {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_set1_ps(value)
        }
    }

    #[inline]
    fn store2(v: __m128) -> [f32; 2] {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            let bits = _mm_cvtsi128_si64(_mm_castps_si128(v));
            bytemuck::cast(bits as u64)
        }
    }

    #[inline]
    fn store4(v: __m128) -> [f32; 4] {
        let mut values = [0.0; 4];
        // SAFETY: The pointer is valid for writing four floats and the store
        // has no alignment requirement.
        unsafe { _mm_storeu_ps(values.as_mut_ptr(), v) };
        values
    }

    #[inline]
    fn first(v: __m128) -> f32 {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_cvtss_f32(v)
        }
    }

    #[inline]
    fn add(a: __m128, b: __m128) -> __m128 {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_add_ps(a, b)
        }
    }

    #[inline]
    fn sub(a: __m128, b: __m128) -> __m128 {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_sub_ps(a, b)
        }
    }

    #[inline]
    fn mul(a: __m128, b: __m128) -> __m128 {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_mul_ps(a, b)
        }
    }

    #[inline]
    fn div(a: __m128, b: __m128) -> __m128 {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_div_ps(a, b)
        }
    }

    #[inline]
    fn min(a: __m128, b: __m128) -> __m128 {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_min_ps(a, b)
        }
    }

    #[inline]
    fn max(a: __m128, b: __m128) -> __m128 {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_max_ps(a, b)
        }
    }

    #[inline]
    fn negate(v: __m128) -> __m128 {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_xor_ps(v, _mm_set1_ps(-0.0))
        }
    }

    #[inline]
    fn sqrt(v: __m128) -> __m128 {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_sqrt_ps(v)
        }
    }

    #[inline]
    fn rsqrt(v: __m128) -> __m128 {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_rsqrt_ps(v)
        }
    }

    #[inline]
    fn horizontal_add2(v: __m128) -> __m128 {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            let swapped = _mm_shuffle_ps(v, v, 0b11_10_00_01);
            let sums = _mm_add_ps(v, swapped);
            _mm_shuffle_ps(sums, sums, 0)
        }
    }

    #[inline]
    fn horizontal_add4(v: __m128) -> __m128 {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            // [y, x, w, z]
            let swapped = _mm_shuffle_ps(v, v, 0b10_11_00_01);
            // [x + y, y + x, z + w, w + z]
            let sums = _mm_add_ps(v, swapped);
            let high = _mm_movehl_ps(swapped, sums);
            let total = _mm_add_ss(sums, high);
            _mm_shuffle_ps(total, total, 0)
        }
    }

    #[inline]
    fn load2_i32(values: &[i32; 2]) -> __m128i {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            let bits: u64 = bytemuck::cast(*values);
            _mm_cvtsi64_si128(bits as i64)
        }
    }

    #[inline]
    fn load4_i32(values: &[i32; 4]) -> __m128i {
        // SAFETY: The pointer is valid for reading 16 bytes and the load has
        // no alignment requirement.
        unsafe { _mm_loadu_si128(values.as_ptr().cast()) }
    }

    #[inline]
    fn splat_i32(value: i32) -> __m128i {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_set1_epi32(value)
        }
    }

    #[inline]
    fn store2_i32(v: __m128i) -> [i32; 2] {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            let bits = _mm_cvtsi128_si64(v);
            bytemuck::cast(bits as u64)
        }
    }

    #[inline]
    fn store4_i32(v: __m128i) -> [i32; 4] {
        let mut values = [0; 4];
        // SAFETY: The pointer is valid for writing 16 bytes and the store has
        // no alignment requirement.
        unsafe { _mm_storeu_si128(values.as_mut_ptr().cast(), v) };
        values
    }

    #[inline]
    fn first_i32(v: __m128i) -> i32 {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_cvtsi128_si32(v)
        }
    }

    #[inline]
    fn add_i32(a: __m128i, b: __m128i) -> __m128i {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_add_epi32(a, b)
        }
    }

    #[inline]
    fn sub_i32(a: __m128i, b: __m128i) -> __m128i {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_sub_epi32(a, b)
        }
    }

    #[inline]
    fn mul_i32(a: __m128i, b: __m128i) -> __m128i {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            // SSE2 has no 32-bit low multiply, so the even and odd lanes are
            // multiplied separately into 64-bit products and the low halves are
            // interleaved back together.
            let even = _mm_mul_epu32(a, b);
            let odd = _mm_mul_epu32(_mm_srli_si128(a, 4), _mm_srli_si128(b, 4));
            _mm_unpacklo_epi32(
                _mm_shuffle_epi32(even, 0b00_00_10_00),
                _mm_shuffle_epi32(odd, 0b00_00_10_00),
            )
        }
    }

    #[inline]
    fn min_i32(a: __m128i, b: __m128i) -> __m128i {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            select_i32(_mm_cmplt_epi32(a, b), a, b)
        }
    }

    #[inline]
    fn max_i32(a: __m128i, b: __m128i) -> __m128i {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            select_i32(_mm_cmpgt_epi32(a, b), a, b)
        }
    }

    #[inline]
    fn negate_i32(v: __m128i) -> __m128i {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_sub_epi32(_mm_setzero_si128(), v)
        }
    }

    #[inline]
    fn horizontal_add2_i32(v: __m128i) -> __m128i {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            let sums = _mm_add_epi32(v, _mm_shuffle_epi32(v, 0b11_10_00_01));
            _mm_shuffle_epi32(sums, 0)
        }
    }

    #[inline]
    fn horizontal_add4_i32(v: __m128i) -> __m128i {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            let sums = _mm_add_epi32(v, _mm_shuffle_epi32(v, 0b01_00_11_10));
            _mm_add_epi32(sums, _mm_shuffle_epi32(sums, 0b10_11_00_01))
        }
    }

    #[inline]
    fn convert_to_f32(v: __m128i) -> __m128 {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_cvtepi32_ps(v)
        }
    }

    #[inline]
    fn round_to_i32(v: __m128) -> __m128i {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_cvtps_epi32(v)
        }
    }

    #[inline]
    fn floor_to_i32(v: __m128) -> __m128i {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            let rounded = _mm_cvtps_epi32(v);
            // All bits set where rounding went up
            let rounded_up = _mm_castps_si128(_mm_cmpgt_ps(_mm_cvtepi32_ps(rounded), v));
            _mm_add_epi32(rounded, rounded_up)
        }
    }

    #[inline]
    fn ceil_to_i32(v: __m128) -> __m128i {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            let rounded = _mm_cvtps_epi32(v);
            let rounded_down = _mm_castps_si128(_mm_cmplt_ps(_mm_cvtepi32_ps(rounded), v));
            _mm_sub_epi32(rounded, rounded_down)
        }
    }

    #[inline]
    fn scalar_min(a: f32, b: f32) -> f32 {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_cvtss_f32(_mm_min_ss(_mm_set_ss(a), _mm_set_ss(b)))
        }
    }

    #[inline]
    fn scalar_max(a: f32, b: f32) -> f32 {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_cvtss_f32(_mm_max_ss(_mm_set_ss(a), _mm_set_ss(b)))
        }
    }

    #[inline]
    fn scalar_sqrt(x: f32) -> f32 {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_cvtss_f32(_mm_sqrt_ss(_mm_set_ss(x)))
        }
    }

    #[inline]
    fn scalar_rsqrt(x: f32) -> f32 {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_cvtss_f32(_mm_rsqrt_ss(_mm_set_ss(x)))
        }
    }

    #[inline]
    fn scalar_min_f64(a: f64, b: f64) -> f64 {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_cvtsd_f64(_mm_min_sd(_mm_set_sd(a), _mm_set_sd(b)))
        }
    }

    #[inline]
    fn scalar_max_f64(a: f64, b: f64) -> f64 {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_cvtsd_f64(_mm_max_sd(_mm_set_sd(a), _mm_set_sd(b)))
        }
    }

    #[inline]
    fn scalar_sqrt_f64(x: f64) -> f64 {
        // SAFETY: SSE2 is statically enabled on every x86_64 target.
        unsafe {
            _mm_cvtsd_f64(_mm_sqrt_pd(_mm_set_sd(x)))
        }
    }
}
