pub mod lambda;
pub mod logging;
pub mod relay;
