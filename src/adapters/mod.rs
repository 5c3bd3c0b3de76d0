//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements   | Connects to                   |
//! |----------------|--------------|-------------------------------|
//! | `config_file`  | ConfigPort   | JSON file on disk             |
//! | `console`      | (input)      | stdin → control channel       |
//! | `log_sink`     | EventSink    | `log` facade                  |
//! | `time`         | (clock)      | `std::time::Instant`          |

pub mod config_file;
pub mod console;
pub mod log_sink;
pub mod time;
