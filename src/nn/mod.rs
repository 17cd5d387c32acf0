#[cfg(feature = "nn")]
pub mod dense;

#[cfg(feature = "nn")]
pub use dense::DenseValueNet;

use std::path::Path;

/// Capability interface over an external value network. A reserved hook:
/// nothing in the solve pipeline consumes it today, but callers that do
/// must never see a panic cross this boundary.
pub trait ValueNet {
    fn input_size(&self) -> usize;
    fn output_size(&self) -> usize;
    fn is_sparse(&self) -> bool;
    /// `queries` is a row-major [batch, players, input_size] buffer; the
    /// result is [batch, players, output_size], or None when the
    /// backend cannot evaluate.
    fn compute_values(&self, queries: &[f32], batch: usize, players: usize) -> Option<Vec<f32>>;
}

/// Stand-in for configurations without a trained network: zero-sized
/// interface, no values.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullValueNet;

impl ValueNet for NullValueNet {
    fn input_size(&self) -> usize {
        0
    }
    fn output_size(&self) -> usize {
        0
    }
    fn is_sparse(&self) -> bool {
        false
    }
    fn compute_values(&self, _: &[f32], _: usize, _: usize) -> Option<Vec<f32>> {
        None
    }
}

/// Load the external backend from a checkpoint path. Returns None, not
/// an error, when the backend is compiled out, the path is bad, or the
/// checkpoint fails to load.
pub fn load_value_net(path: &Path) -> Option<Box<dyn ValueNet>> {
    #[cfg(feature = "nn")]
    {
        match dense::DenseValueNet::load(path) {
            Ok(net) => Some(Box::new(net)),
            Err(e) => {
                log::warn!("value net unavailable at {}: {}", path.display(), e);
                None
            }
        }
    }
    #[cfg(not(feature = "nn"))]
    {
        let _ = path;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_net_is_empty_shaped() {
        let net = NullValueNet;
        assert_eq!(net.input_size(), 0);
        assert_eq!(net.output_size(), 0);
        assert!(!net.is_sparse());
        assert!(net.compute_values(&[], 1, 2).is_none());
    }

    #[test]
    fn missing_checkpoint_loads_as_none() {
        let path = std::env::temp_dir().join("quasar_value_net_missing.safetensors");
        assert!(load_value_net(&path).is_none());
    }
}
