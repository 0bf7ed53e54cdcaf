use crate::layouts::{Element, Integral, SaturationMode};

/// Sign- or zero-extends 4-bit lanes to 8-bit lanes.
pub fn unpack_ref<T>(a: &[T], res: &mut [T::Compute])
where
    T: Integral,
    T::Compute: Integral,
{
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }

    let n: usize = res.len();
    for i in 0..n {
        res[i] = T::Compute::from_i128(a[i].to_i128());
    }
}

/// Narrows 8-bit lanes to 4-bit lanes with the given saturation policy.
pub fn pack_ref<T>(a: &[T::Compute], sat: SaturationMode, res: &mut [T])
where
    T: Integral,
    T::Compute: Integral,
{
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }

    let n: usize = res.len();
    for i in 0..n {
        res[i] = T::narrow(a[i].to_i128(), sat);
    }
}

/// Lanes already at their compute width are copied bit for bit.
pub fn copy_ref<T: Element>(a: &[T], res: &mut [T::Compute]) {
    debug_assert!(!T::SUBBYTE);
    bytemuck::cast_slice_mut::<T::Compute, u8>(res).copy_from_slice(bytemuck::cast_slice::<T, u8>(a));
}

/// Inverse of [copy_ref].
pub fn copy_back_ref<T: Element>(a: &[T::Compute], res: &mut [T]) {
    debug_assert!(!T::SUBBYTE);
    bytemuck::cast_slice_mut::<T, u8>(res).copy_from_slice(bytemuck::cast_slice::<T::Compute, u8>(a));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::{I4, U4};

    #[test]
    fn unpack_then_pack_is_lossless() {
        let a: [I4; 16] = std::array::from_fn(|i| I4::new(i as i8 - 8));
        let mut wide: [i8; 16] = [0; 16];
        unpack_ref(&a, &mut wide);
        assert_eq!(wide[0], -8);
        let mut back: [I4; 16] = [I4::default(); 16];
        pack_ref(&wide, SaturationMode::Saturate, &mut back);
        assert_eq!(back, a);

        let u: [U4; 16] = std::array::from_fn(|i| U4::new(i as u8));
        let mut wide: [u8; 16] = [0; 16];
        unpack_ref(&u, &mut wide);
        assert_eq!(wide[15], 15);
    }

    #[test]
    fn copy_preserves_bits() {
        let a: [f32; 3] = [1.5, -0.0, f32::MAX];
        let mut res: [f32; 3] = [0.0; 3];
        copy_ref(&a, &mut res);
        assert_eq!(res.map(f32::to_bits), a.map(f32::to_bits));
    }
}
