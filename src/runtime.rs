use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::TrainConfig;

/// Process-wide training context: seeded RNGs and the selected device.
///
/// Initialized once at startup and passed explicitly to callers instead of
/// mutating ambient global state, so reproducibility does not depend on
/// hidden cross-call coupling.
pub struct Runtime<B: Backend> {
    device: B::Device,
    rng: StdRng,
    seed: u64,
}

impl<B: Backend> Runtime<B> {
    /// Seed the backend and host RNG, and select the backend's default
    /// device.
    pub fn init(config: &TrainConfig) -> Self {
        B::seed(config.seed);
        let device = B::Device::default();
        tracing::debug!(seed = config.seed, "runtime initialized");
        Runtime {
            device,
            rng: StdRng::seed_from_u64(config.seed),
            seed: config.seed,
        }
    }

    pub fn device(&self) -> &B::Device {
        &self.device
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Host-side RNG for sampling outside the backend (shuffling,
    /// exploration noise).
    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Move a tensor onto the runtime's device.
    pub fn to_device<const D: usize>(&self, tensor: Tensor<B, D>) -> Tensor<B, D> {
        tensor.to_device(&self.device)
    }

    /// Move every tensor in `tensors` onto the runtime's device.
    pub fn to_device_all<const D: usize>(&self, tensors: Vec<Tensor<B, D>>) -> Vec<Tensor<B, D>> {
        tensors
            .into_iter()
            .map(|t| t.to_device(&self.device))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    type TestBackend = burn::backend::NdArray<f32>;

    #[test]
    fn test_rng_deterministic_for_fixed_seed() {
        let config = TrainConfig::default();
        let mut a = Runtime::<TestBackend>::init(&config);
        let mut b = Runtime::<TestBackend>::init(&config);

        let draws_a: Vec<u64> = (0..8).map(|_| a.rng_mut().random()).collect();
        let draws_b: Vec<u64> = (0..8).map(|_| b.rng_mut().random()).collect();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut config = TrainConfig::default();
        let mut a = Runtime::<TestBackend>::init(&config);
        config.seed = 43;
        let mut b = Runtime::<TestBackend>::init(&config);

        let draws_a: Vec<u64> = (0..8).map(|_| a.rng_mut().random()).collect();
        let draws_b: Vec<u64> = (0..8).map(|_| b.rng_mut().random()).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn test_to_device_preserves_contents() {
        let config = TrainConfig::default();
        let rt = Runtime::<TestBackend>::init(&config);

        let tensor = Tensor::<TestBackend, 1>::from_floats([1.0, 2.0, 3.0], rt.device());
        let moved = rt.to_device(tensor.clone());
        assert_eq!(moved.into_data(), tensor.into_data());
    }

    #[test]
    fn test_to_device_all_preserves_order() {
        let config = TrainConfig::default();
        let rt = Runtime::<TestBackend>::init(&config);

        let tensors = vec![
            Tensor::<TestBackend, 1>::from_floats([1.0], rt.device()),
            Tensor::<TestBackend, 1>::from_floats([2.0], rt.device()),
        ];
        let moved = rt.to_device_all(tensors);
        assert_eq!(moved.len(), 2);
        assert_eq!(
            moved[0].clone().into_data(),
            Tensor::<TestBackend, 1>::from_floats([1.0], rt.device()).into_data()
        );
    }
}
