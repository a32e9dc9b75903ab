pub mod onnx;

pub use onnx::OnnxImageClassifier;
