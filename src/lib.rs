//! Order totals batch job: join orders with their line items, filter by
//! status and origin, sum prices and taxes per order, and write the totals
//! to a flat file and a PostgreSQL table.

pub mod config;
pub mod domain;
pub mod pipeline;
pub mod reader;
pub mod report;
pub mod sinks;
