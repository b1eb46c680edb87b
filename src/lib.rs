pub mod console;
pub mod db;
pub mod telemetry;
