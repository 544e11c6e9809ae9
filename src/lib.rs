pub mod error;

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod facade {
    pub mod converter;
    pub mod traits {
        pub mod i_converter;
    }
}

pub mod models {
    pub mod conversion;
    pub mod encoding;
    pub mod invocation;
    pub mod spawn;
}

pub mod service {
    pub mod args;
    pub mod config_service;
    pub mod process_service;
}

pub mod utils {
    pub mod utils;
}

pub use config::ports::ProcessLauncher;
pub use error::{ConvertError, Result};
pub use facade::converter::{Converter, DEFAULT_COMMAND};
pub use facade::traits::i_converter::ConverterTrait;
pub use models::conversion::{ConversionRequest, ConversionResult};
pub use models::encoding::SourceEncoding;
pub use models::invocation::{Invocation, ProcessOutput};
pub use models::spawn::SpawnOptions;
pub use service::process_service::TokioProcessLauncher;
