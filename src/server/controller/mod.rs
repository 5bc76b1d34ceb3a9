//! HTTP request handlers for the status server.

pub mod status;

#[cfg(test)]
mod test;
