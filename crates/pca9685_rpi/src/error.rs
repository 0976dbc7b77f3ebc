use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpiError {
    #[error("could not open i2c bus {bus}: {source}")]
    Open {
        bus: u8,
        #[source]
        source: rppal::i2c::Error,
    },
    #[error("i2c transfer failed: {0}")]
    I2c(#[from] rppal::i2c::Error),
}
