pub mod classifier;
pub mod complex;
pub mod config;
pub mod core;
pub mod engine;
pub mod hybrid;
pub mod lexicon;
pub mod normalize;

pub use classifier::{
    load_training_examples, ClassifierError, ModelParameters, ModelSnapshot, NaiveBayesClassifier,
    TrainingExample,
};
pub use complex::{analyze_complex_case, ComplexFeatures, EnhancedPrediction};
pub use config::{load_config, save_config, EngineConfig};
pub use core::{Prediction, Sentiment, SentimentResult, SentimentScores};
pub use engine::SentimentEngine;
pub use hybrid::{decide_with_heuristics, HeuristicConfig, HybridSentimentResult, Method};
pub use normalize::{preprocess, FeatureBundle, Preprocessed};
