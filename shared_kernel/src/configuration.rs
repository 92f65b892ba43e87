use anyhow::Context;
use serde::de::DeserializeOwned;

/// Reads `configuration/base.yaml`, overlays `configuration/test.yaml`
/// when compiled for tests, and finally applies `APP_`-prefixed
/// environment variables (`APP_DATABASE__PORT=5433`).
pub fn config<Settings: DeserializeOwned>() -> anyhow::Result<Settings> {
    let configuration_directory = std::env::current_dir()
        .context("Failed to determine the current directory")?
        .join("configuration");

    let mut builder = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")));
    if cfg!(test) {
        builder =
            builder.add_source(config::File::from(configuration_directory.join("test.yaml")));
    }

    builder
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .context("Failed to assemble the configuration sources")?
        .try_deserialize::<Settings>()
        .context("Failed to deserialize settings")
}
