use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub), module(devally_error))]
pub enum DevallyError {
    #[snafu(display("provider error: {source}"))]
    Provider {
        source: ProviderError,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("config error: {source}"))]
    Config {
        source: ConfigError,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("IO error: {source}"))]
    Io {
        source: std::io::Error,
        #[snafu(implicit)]
        location: snafu::Location,
    },
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub), module(provider_error))]
pub enum ProviderError {
    #[snafu(display("no credentials found for any provider"))]
    NoCredentials {
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("authentication failed: {message}"))]
    AuthFailed {
        message: String,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("API error: {message}"))]
    Api {
        message: String,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("failed to parse response: {message}"))]
    ParseResponse {
        message: String,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("HTTP error: {source}"))]
    Http {
        source: Box<ureq::Transport>,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("retries exhausted after {attempts} attempts"))]
    RetriesExhausted {
        attempts: u32,
        #[snafu(implicit)]
        location: snafu::Location,
    },
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub), module(config_error))]
pub enum ConfigError {
    #[snafu(display("could not determine home directory"))]
    NoHomeDirectory {
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("failed to read {path}: {source}"))]
    ReadFile {
        path: String,
        source: std::io::Error,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("failed to parse config: {source}"))]
    ParseConfig {
        source: toml::de::Error,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("failed to serialize config: {source}"))]
    SerializeConfig {
        source: toml::ser::Error,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("failed to write {path}: {source}"))]
    WriteFile {
        path: String,
        source: std::io::Error,
        #[snafu(implicit)]
        location: snafu::Location,
    },
}

pub type Result<T, E = DevallyError> = std::result::Result<T, E>;
