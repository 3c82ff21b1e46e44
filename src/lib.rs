// Library root
// -----------
// This crate exposes a small library surface for the travel planner. The
// binary (`main.rs`) uses these modules to run the interactive CLI.
//
// Module responsibilities:
// - `input`: Validated prompts; the only way user-typed values enter.
// - `record`: Location and transport records and their field rules.
// - `store`: Ordered, name-unique in-memory collections of records.
// - `codec`: Delimited flat-file load/save for a store.
// - `controller`: The add/edit/delete loop that keeps store and file in sync.
// - `geo` / `simulation`: Distance and travel-time reporting.
// - `ui`: Banner, main menu and table rendering.
pub mod codec;
pub mod config;
pub mod controller;
pub mod error;
pub mod geo;
pub mod input;
pub mod record;
pub mod simulation;
pub mod store;
pub mod ui;
