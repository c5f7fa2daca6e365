// Library root
// -----------
// The binary (`main.rs`) parses arguments and hands off to these modules.
//
// Module responsibilities:
// - `batch`: Employee records and loading the batch file from disk.
// - `api`: The blocking HTTP client that creates one employee per call.
// - `ui`: The console report loop that drives `api` over a batch.
pub mod api;
pub mod batch;
pub mod ui;
