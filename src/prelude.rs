pub use crate::base::{
    config::Config,
    types::{RelayError, Res, Void},
};
pub use crate::relay::envelope::Invocation;
pub use tracing::{debug, error, info, instrument, warn};
