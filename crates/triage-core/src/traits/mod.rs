pub mod diagnoser;

pub use diagnoser::IDiagnoser;
