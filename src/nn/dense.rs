use super::ValueNet;
use candle_core::Device;
use candle_core::Tensor;
use candle_nn::Linear;
use candle_nn::Module;
use std::path::Path;

/// Dense feed-forward value network loaded from a safetensors
/// checkpoint. Expects `l{i}.weight` / `l{i}.bias` pairs for consecutive
/// layers starting at `l0`; ReLU between layers, linear output head.
/// Sizes are read off the first and last weight shapes.
pub struct DenseValueNet {
    layers: Vec<Linear>,
    input: usize,
    output: usize,
}

impl DenseValueNet {
    pub fn load(path: &Path) -> Result<Self, candle_core::Error> {
        let device = Device::Cpu;
        let tensors = candle_core::safetensors::load(path, &device)?;
        let mut layers = Vec::new();
        for i in 0.. {
            let weight = match tensors.get(&format!("l{}.weight", i)) {
                Some(weight) => weight.clone(),
                None => break,
            };
            let bias = tensors.get(&format!("l{}.bias", i)).cloned();
            layers.push(Linear::new(weight, bias));
        }
        let input = layers
            .first()
            .ok_or_else(|| candle_core::Error::Msg("checkpoint has no l0.weight".into()))?
            .weight()
            .dim(1)?;
        let output = layers
            .last()
            .expect("non-empty after first() check")
            .weight()
            .dim(0)?;
        Ok(Self {
            layers,
            input,
            output,
        })
    }

    fn forward(&self, x: &Tensor) -> Result<Tensor, candle_core::Error> {
        let mut x = x.clone();
        for (i, layer) in self.layers.iter().enumerate() {
            x = layer.forward(&x)?;
            if i + 1 < self.layers.len() {
                x = x.relu()?;
            }
        }
        Ok(x)
    }
}

impl ValueNet for DenseValueNet {
    fn input_size(&self) -> usize {
        self.input
    }
    fn output_size(&self) -> usize {
        self.output
    }
    fn is_sparse(&self) -> bool {
        false
    }
    fn compute_values(&self, queries: &[f32], batch: usize, players: usize) -> Option<Vec<f32>> {
        if queries.len() != batch * players * self.input {
            return None;
        }
        let run = || -> Result<Vec<f32>, candle_core::Error> {
            let x = Tensor::from_slice(queries, (batch * players, self.input), &Device::Cpu)?;
            self.forward(&x)?.flatten_all()?.to_vec1::<f32>()
        };
        run().ok()
    }
}
