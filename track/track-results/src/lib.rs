//! Simulation result series for contact-track analysis.
//!
//! - [`ResultSource`] - Read access to named result series and their hierarchy
//! - [`ResultStore`] - Ordered in-memory implementation
//! - [`create_result`] - Add a component, refusing empty or duplicate data
//! - [`export_results_csv`] - Flatten every series into one CSV file
//!
//! # Example
//!
//! ```
//! use track_results::{create_result, result_columns, ResultStore};
//!
//! let mut store = ResultStore::with_time(vec![0.0, 0.01, 0.02]);
//! create_result(&mut store, "CONTACT_1", "FORCE", vec![0.0, 4.2, 3.9], "newton").unwrap();
//!
//! let names: Vec<String> = result_columns(&store).into_iter().map(|(n, _)| n).collect();
//! assert_eq!(names, vec!["TIME", "CONTACT_1.FORCE"]);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod export;
mod source;

pub use error::{ResultsError, ResultsResult};
pub use export::{escape_csv, export_results_csv, result_columns, write_csv, TIME};
pub use source::{create_result, ResultComponent, ResultSource, ResultStore};
