use fib_engine::FibValue;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not parse {var}={value:?}: {reason}")]
    Parse {
        var: String,
        value: String,
        reason: String,
    },
    #[error("{var} is not valid unicode")]
    NotUnicode { var: String },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("verification failed for fib({n}): computed {computed}, expected {expected}")]
    VerificationFailed {
        n: u64,
        computed: FibValue,
        expected: FibValue,
    },
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize stats: {0}")]
    Json(#[from] serde_json::Error),
}
