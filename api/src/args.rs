use clap::Parser;
use mealsnap_core::domain::common::{ClassifierConfig, MealsnapConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "mealsnap-api", version, about = "Mealsnap HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub classifier: ClassifierArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api/v1`. Empty for none.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "SERVER_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ClassifierArgs {
    /// Path to the Food-101 classifier exported to ONNX.
    #[arg(
        long = "classifier-model-path",
        env = "CLASSIFIER_MODEL_PATH",
        default_value = "models/food101.onnx"
    )]
    pub model_path: String,

    /// Square input resolution the model expects.
    #[arg(
        long = "classifier-input-size",
        env = "CLASSIFIER_INPUT_SIZE",
        default_value_t = 224
    )]
    pub input_size: u32,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for MealsnapConfig {
    fn from(args: Args) -> Self {
        Self {
            classifier: ClassifierConfig {
                model_path: args.classifier.model_path,
                input_size: args.classifier.input_size,
            },
        }
    }
}
