//! Compile-time accelerator selection.
//!
//! The GPU (wgpu) backend is chosen when the `wgpu` cargo feature is
//! enabled, otherwise the CPU ndarray backend is used. This mirrors the
//! usual "GPU if available, else CPU" fallback without runtime probing.

use burn::tensor::backend::Backend;

#[cfg(feature = "wgpu")]
pub type DefaultBackend = burn::backend::Wgpu<f32, i32>;

#[cfg(not(feature = "wgpu"))]
pub type DefaultBackend = burn::backend::NdArray<f32>;

pub type DefaultDevice = <DefaultBackend as Backend>::Device;

/// The default device of the selected backend.
pub fn default_device() -> DefaultDevice {
    DefaultDevice::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::tensor::Tensor;

    #[test]
    fn test_default_device_is_usable() {
        let device = default_device();
        let tensor = Tensor::<DefaultBackend, 2>::zeros([2, 3], &device);
        assert_eq!(tensor.dims(), [2, 3]);
    }
}
